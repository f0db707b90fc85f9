//! History of opened messages, persisted as JSON.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// One opened message as listed in the mail panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailEntry {
	pub index: u32,
	pub title: String,
	/// Local date the message was opened, `YYYY-MM-DD`.
	pub date: String,
	pub text: String,
}

pub struct MailBox<S> {
	store: S,
	key: String,
}

impl<S: KeyValueStore> MailBox<S> {
	pub fn new(store: S, key: impl Into<String>) -> Self {
		Self {
			store,
			key: key.into(),
		}
	}

	/// Stored entries; missing or corrupt data reads as empty.
	pub fn load(&self) -> Vec<MailEntry> {
		let Some(raw) = self.store.get(&self.key) else {
			return Vec::new();
		};
		serde_json::from_str(&raw).unwrap_or_else(|e| {
			warn!("starfield-page: discarding unreadable mail list: {}", e);
			Vec::new()
		})
	}

	/// Append `entry` unless one with the same index exists. Returns whether
	/// it was added.
	pub fn record(&self, entry: MailEntry) -> Result<bool> {
		let mut entries = self.load();
		if entries.iter().any(|e| e.index == entry.index) {
			return Ok(false);
		}
		entries.push(entry);
		self.store
			.set(&self.key, &serde_json::to_string(&entries)?)?;
		Ok(true)
	}
}
