//! How many daily messages are unlocked and how many have been opened.

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Messages available to open: one unlocks per day since the start, up to
/// `total`, minus those already opened.
pub fn available_credits(days: i64, opened: u32, total: u32) -> u32 {
	if days < 0 {
		return 0;
	}
	let unlocked = (days + 1).min(total as i64) as u32;
	unlocked.saturating_sub(opened)
}

/// Whether the star for a 1-based message `index` is shown.
pub fn is_revealed(index: u32, opened: u32, total: u32) -> bool {
	index > 0 && index <= opened.min(total)
}

/// Text shown in the daily modal.
pub fn credits_message(credits: u32) -> String {
	match credits {
		0 => "No messages available right now. Come back tomorrow.".to_string(),
		1 => "You have 1 message available.".to_string(),
		n => format!("You have {} messages available.", n),
	}
}

/// Opened-message counter persisted under one storage key.
pub struct UnlockLedger<S> {
	store: S,
	key: String,
	total: u32,
}

impl<S: KeyValueStore> UnlockLedger<S> {
	pub fn new(store: S, key: impl Into<String>, total: u32) -> Self {
		Self {
			store,
			key: key.into(),
			total,
		}
	}

	/// Stored count; anything unparsable reads as zero.
	pub fn opened_count(&self) -> u32 {
		self.store
			.get(&self.key)
			.and_then(|raw| leading_number(&raw))
			.unwrap_or(0)
	}

	pub fn available(&self, days: i64) -> u32 {
		available_credits(days, self.opened_count(), self.total)
	}

	/// Open the next message if one is available, returning its 1-based index.
	pub fn open_next(&self, days: i64) -> Result<Option<u32>> {
		if self.available(days) == 0 {
			return Ok(None);
		}
		let opened = (self.opened_count() + 1).min(self.total);
		self.store.set(&self.key, &opened.to_string())?;
		Ok(Some(opened))
	}

	pub fn is_revealed(&self, index: u32) -> bool {
		is_revealed(index, self.opened_count(), self.total)
	}
}

// Leading digits only; trailing junk is ignored.
fn leading_number(raw: &str) -> Option<u32> {
	let digits: String = raw
		.trim_start()
		.chars()
		.take_while(|c| c.is_ascii_digit())
		.collect();
	digits.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;

	#[test]
	fn credits_unlock_one_per_day() {
		assert_eq!(available_credits(-1, 0, 8), 0);
		assert_eq!(available_credits(0, 0, 8), 1);
		assert_eq!(available_credits(2, 1, 8), 2);
		assert_eq!(available_credits(30, 0, 8), 8);
		assert_eq!(available_credits(30, 8, 8), 0);
		assert_eq!(available_credits(0, 5, 8), 0);
	}

	#[test]
	fn opening_consumes_credits() {
		let ledger = UnlockLedger::new(MemoryStore::default(), "opened", 8);
		assert_eq!(ledger.opened_count(), 0);

		assert_eq!(ledger.open_next(1).unwrap(), Some(1));
		assert_eq!(ledger.open_next(1).unwrap(), Some(2));
		assert_eq!(ledger.open_next(1).unwrap(), None);
		assert_eq!(ledger.opened_count(), 2);
		assert!(ledger.is_revealed(2));
		assert!(!ledger.is_revealed(3));
		assert!(!ledger.is_revealed(0));

		assert_eq!(ledger.open_next(-3).unwrap(), None);
	}

	#[test]
	fn count_never_passes_total() {
		let ledger = UnlockLedger::new(MemoryStore::default(), "opened", 3);
		for _ in 0..10 {
			let _ = ledger.open_next(100).unwrap();
		}
		assert_eq!(ledger.opened_count(), 3);
	}

	#[test]
	fn garbage_counter_reads_as_zero() {
		let store = MemoryStore::default();
		store.set("opened", "oops").unwrap();
		let ledger = UnlockLedger::new(store, "opened", 8);
		assert_eq!(ledger.opened_count(), 0);

		let store = MemoryStore::default();
		store.set("opened", "4px").unwrap();
		assert_eq!(UnlockLedger::new(store, "opened", 8).opened_count(), 4);
	}

	#[test]
	fn modal_text() {
		assert_eq!(credits_message(1), "You have 1 message available.");
		assert_eq!(credits_message(3), "You have 3 messages available.");
		assert!(credits_message(0).contains("Come back tomorrow"));
	}
}
