//! Day arithmetic in a fixed UTC offset.
//!
//! Times are epoch milliseconds as returned by `Date.now()`.

use time::macros::{date, format_description, offset};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::Result;

/// Milliseconds in a day.
pub const DAY_MS: f64 = 86_400_000.0;

/// Counts days since a start date, as seen from one UTC offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calendar {
	start: Date,
	offset: UtcOffset,
}

impl Default for Calendar {
	fn default() -> Self {
		Self::new(date!(2026-02-07), offset!(+8))
	}
}

impl Calendar {
	pub const fn new(start: Date, offset: UtcOffset) -> Self {
		Self { start, offset }
	}

	/// Build from a `YYYY-MM-DD` start date and a whole-hour offset.
	pub fn parse(start: &str, utc_offset_hours: i8) -> Result<Self> {
		let start = Date::parse(start, format_description!("[year]-[month]-[day]"))?;
		let offset = UtcOffset::from_hms(utc_offset_hours, 0, 0)?;
		Ok(Self::new(start, offset))
	}

	fn local_date(&self, now_ms: f64) -> Date {
		let nanos = now_ms.floor() as i128 * 1_000_000;
		OffsetDateTime::from_unix_timestamp_nanos(nanos)
			.unwrap_or(OffsetDateTime::UNIX_EPOCH)
			.to_offset(self.offset)
			.date()
	}

	fn midnight_ms(&self, date: Date) -> f64 {
		date.midnight().assume_offset(self.offset).unix_timestamp() as f64 * 1000.0
	}

	/// Local midnight at the start of the start date.
	pub fn start_ms(&self) -> f64 {
		self.midnight_ms(self.start)
	}

	/// Whole days elapsed since the start date; negative before it.
	pub fn days_since_start(&self, now_ms: f64) -> i64 {
		((now_ms - self.start_ms()) / DAY_MS).floor() as i64
	}

	/// The next local midnight after `now_ms`.
	pub fn next_midnight_ms(&self, now_ms: f64) -> f64 {
		match self.local_date(now_ms).next_day() {
			Some(tomorrow) => self.midnight_ms(tomorrow),
			None => now_ms,
		}
	}

	/// Local date as `YYYY-MM-DD`.
	pub fn date_label(&self, now_ms: f64) -> String {
		let d = self.local_date(now_ms);
		format!("{:04}-{:02}-{:02}", d.year(), u8::from(d.month()), d.day())
	}
}

/// `HH:MM:SS` for a duration in milliseconds. Negative durations show zero.
pub fn format_countdown(ms: f64) -> String {
	let total = (ms / 1000.0).floor().max(0.0) as u64;
	format!(
		"{:02}:{:02}:{:02}",
		total / 3600,
		(total % 3600) / 60,
		total % 60
	)
}
