//! Key-value persistence behind a small trait so page logic can be tested
//! without a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;

use crate::error::{Error, Result};

/// Minimal string key-value store.
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		(**self).set(key, value)
	}
}

/// A store shared by every page widget for the session.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// `window.localStorage`, or an in-memory store when it is blocked.
pub fn open_store() -> SharedStore {
	or_memory(LocalStorage::open())
}

/// Use `opened` when it succeeded; otherwise fall back to a fresh
/// [`MemoryStore`] that lasts until the page is closed.
pub fn or_memory<S: KeyValueStore + 'static>(opened: Result<S>) -> SharedStore {
	match opened {
		Ok(store) => Rc::new(store),
		Err(e) => {
			warn!("starfield-page: storage unavailable, progress lasts this session only: {}", e);
			Rc::new(MemoryStore::default())
		}
	}
}

/// `window.localStorage`.
pub struct LocalStorage {
	storage: web_sys::Storage,
}

impl LocalStorage {
	pub fn open() -> Result<Self> {
		let window = web_sys::window().ok_or(Error::NoWindow)?;
		let storage = window.local_storage()?.ok_or(Error::StorageUnavailable)?;
		Ok(Self { storage })
	}
}

impl KeyValueStore for LocalStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		Ok(self.storage.set_item(key, value)?)
	}
}

/// In-memory store, used by tests and as a fallback when storage is blocked.
#[derive(Debug, Default)]
pub struct MemoryStore {
	items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.items.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		self.items
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}
