//! Daily unlockable messages: the calendar, the opened counter, the mail
//! history and the message bodies.

pub mod calendar;
pub mod essays;
pub mod ledger;
pub mod mail;

use serde::Deserialize;

pub use calendar::{Calendar, format_countdown};
pub use essays::{Essay, EssayBook};
pub use ledger::{UnlockLedger, available_credits};
pub use mail::{MailBox, MailEntry};

use crate::error::Result;

/// Daily message settings, overridable from the page config.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DailyConfig {
	/// First unlock day, `YYYY-MM-DD` in the configured offset.
	pub start_date: String,
	pub utc_offset_hours: i8,
	pub total_messages: u32,
	/// Storage key of the opened counter.
	pub opened_key: String,
	/// Storage key of the mail history.
	pub messages_key: String,
	pub essays_url: String,
	/// Titles of the interactive stars, in message order.
	pub star_labels: Vec<String>,
}

impl Default for DailyConfig {
	fn default() -> Self {
		Self {
			start_date: "2026-02-07".to_string(),
			utc_offset_hours: 8,
			total_messages: 8,
			opened_key: "dailyMessageOpened".to_string(),
			messages_key: "dailyMessageList".to_string(),
			essays_url: "essays.txt".to_string(),
			star_labels: Vec::new(),
		}
	}
}

impl DailyConfig {
	pub fn calendar(&self) -> Result<Calendar> {
		Calendar::parse(&self.start_date, self.utc_offset_hours)
	}

	/// Title of the 1-based message `index`.
	pub fn star_label(&self, index: u32) -> String {
		(index as usize)
			.checked_sub(1)
			.and_then(|i| self.star_labels.get(i))
			.map(|label| label.trim())
			.filter(|label| !label.is_empty())
			.map(str::to_string)
			.unwrap_or_else(|| format!("Message {}", index))
	}
}

/// Multi-line status for the debug panel.
pub fn debug_report(calendar: &Calendar, now_ms: f64, opened: u32, total: u32) -> String {
	let days = calendar.days_since_start(now_ms);
	format!(
		"Date: {}\nDays since start: {}\nOpened: {}/{}\nAvailable: {}\nNext reset in: {}",
		calendar.date_label(now_ms),
		days,
		opened,
		total,
		available_credits(days, opened, total),
		format_countdown(calendar.next_midnight_ms(now_ms) - now_ms),
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use time::macros::datetime;

	use super::*;
	use crate::error::Error;
	use crate::storage::{MemoryStore, or_memory};

	#[test]
	fn default_config_builds_default_calendar() {
		assert_eq!(DailyConfig::default().calendar().unwrap(), Calendar::default());
	}

	#[test]
	fn star_labels_fall_back_to_numbers() {
		let config = DailyConfig {
			star_labels: vec!["First light".into(), "  ".into()],
			..DailyConfig::default()
		};
		assert_eq!(config.star_label(1), "First light");
		assert_eq!(config.star_label(2), "Message 2");
		assert_eq!(config.star_label(5), "Message 5");
	}

	#[test]
	fn progress_survives_blocked_storage_for_the_session() {
		let config = DailyConfig::default();
		let store = or_memory::<MemoryStore>(Err(Error::StorageUnavailable));
		let ledger = UnlockLedger::new(store.clone(), config.opened_key.clone(), 8);
		let mailbox = MailBox::new(store.clone(), config.messages_key.clone());

		assert_eq!(ledger.open_next(0).unwrap(), Some(1));
		let entry = MailEntry {
			index: 1,
			title: config.star_label(1),
			date: "2026-02-07".into(),
			text: "hello".into(),
		};
		assert!(mailbox.record(entry.clone()).unwrap());

		// A second view of the same store sees both writes.
		let reopened = UnlockLedger::new(store.clone(), config.opened_key.clone(), 8);
		assert_eq!(reopened.opened_count(), 1);
		assert_eq!(reopened.available(0), 0);
		assert_eq!(MailBox::new(store, config.messages_key).load(), vec![entry]);
	}

	#[test]
	fn report_lines() {
		let now = datetime!(2026-02-09 12:00 +8).unix_timestamp() as f64 * 1000.0;
		let report = debug_report(&Calendar::default(), now, 1, 8);
		assert_eq!(
			report,
			"Date: 2026-02-09\nDays since start: 2\nOpened: 1/8\nAvailable: 2\nNext reset in: 12:00:00"
		);
	}
}
