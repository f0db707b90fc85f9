//! The daily-message component.
//!
//! State lives in signals; the opened counter and mail history are written
//! through to local storage on every change, or to memory for the session
//! when storage is blocked. A one-second interval keeps the
//! countdown and debug readout current.

use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use super::widgets::{EssayReader, InteractiveStars, MailPanel, OpenEssay, aria_hidden, class_list};
use crate::audio::{self, Tone};
use crate::daily::{
	self, Calendar, DailyConfig, EssayBook, MailBox, MailEntry, UnlockLedger, essays,
	format_countdown, ledger,
};
use crate::storage;

fn now_ms() -> f64 {
	js_sys::Date::now()
}

/// Moon button, unlock modal, essay reader, mail panel and debug readout.
#[component]
pub fn DailyMessages(#[prop(optional)] config: DailyConfig) -> impl IntoView {
	let calendar = config.calendar().unwrap_or_else(|e| {
		warn!("starfield-page: bad calendar config, using defaults: {}", e);
		Calendar::default()
	});
	let total = config.total_messages;
	let essays_url = config.essays_url.clone();
	let config = StoredValue::new(config);

	let now = RwSignal::new(now_ms());
	set_interval(move || now.set(now_ms()), Duration::from_secs(1));

	let store = storage::open_store();
	let unlocks = StoredValue::new_local(config.with_value(|c| {
		UnlockLedger::new(store.clone(), c.opened_key.clone(), total)
	}));
	let mailbox =
		StoredValue::new_local(config.with_value(|c| MailBox::new(store, c.messages_key.clone())));

	let opened = RwSignal::new(unlocks.with_value(|l| l.opened_count()));
	let mail = RwSignal::new(mailbox.with_value(|m| m.load()));
	let book = RwSignal::new(EssayBook::default());
	let daily_open = RwSignal::new(false);
	let reader = RwSignal::new(None::<OpenEssay>);
	let mail_visible = RwSignal::new(false);
	let debug_visible = RwSignal::new(false);
	let toast = RwSignal::new(None::<String>);
	let toast_seq = RwSignal::new(0u64);

	spawn_local(async move {
		match essays::fetch_text(&essays_url).await {
			Ok(raw) => {
				let mut loaded = 0;
				book.update(|b| loaded = b.replace_from(&raw));
				info!("starfield-page: {} messages ready", loaded);
			}
			Err(e) => warn!("starfield-page: keeping built-in messages: {}", e),
		}
	});

	let credits = move || {
		daily::available_credits(calendar.days_since_start(now.get()), opened.get(), total)
	};
	let credits_now = move || {
		daily::available_credits(
			calendar.days_since_start(now_ms()),
			opened.get_untracked(),
			total,
		)
	};

	let show_toast = move |message: &str| {
		toast.set(Some(message.to_string()));
		toast_seq.update(|n| *n += 1);
		let seq = toast_seq.get_untracked();
		set_timeout(
			move || {
				if toast_seq.get_untracked() == seq {
					toast.set(None);
				}
			},
			Duration::from_secs(2),
		);
	};

	let reveal = move |index: u32| {
		let essay = book.with_untracked(|b| b.essay_for(index));
		let title = config.with_value(|c| c.star_label(index));
		reader.set(Some(OpenEssay {
			title: title.clone(),
			text: essay.text.clone(),
			image: essay.image,
		}));
		audio::play(Tone::shimmer(&mut rand::thread_rng()));

		let entry = MailEntry {
			index,
			title,
			date: calendar.date_label(now_ms()),
			text: essay.text,
		};
		mailbox.with_value(|m| match m.record(entry) {
			Ok(true) => mail.set(m.load()),
			Ok(false) => {}
			Err(e) => warn!("starfield-page: message {} not saved: {}", index, e),
		});
	};

	let on_moon = move |_: MouseEvent| {
		audio::play(Tone::CLICK);
		if credits_now() == 0 {
			show_toast("No messages available yet.");
			return;
		}
		daily_open.set(true);
	};

	let on_open = move |_: MouseEvent| {
		audio::play(Tone::CLICK);
		let days = calendar.days_since_start(now_ms());
		match unlocks.with_value(|l| l.open_next(days)) {
			Ok(Some(index)) => {
				opened.set(index);
				now.set(now_ms());
				reveal(index);
			}
			Ok(None) => {
				info!("starfield-page: nothing to open on day {}", days);
				show_toast("No messages available yet.");
			}
			Err(e) => warn!("starfield-page: could not open message: {}", e),
		}
		daily_open.set(false);
	};

	view! {
		<div class="daily-widgets">
			<button class="moon-button" aria-label="Today's message" on:click=on_moon>
				<span class="moon-icon"></span>
				<span id="moon-timer" class="moon-timer">
					{move || format_countdown(calendar.next_midnight_ms(now.get()) - now.get())}
				</span>
			</button>
			<div
				id="moon-toast"
				class=move || class_list("moon-toast", "is-visible", toast.with(|t| t.is_some()))
			>
				{move || toast.get().unwrap_or_default()}
			</div>

			<InteractiveStars total=total opened=opened config=config />

			<div
				id="daily-overlay"
				class=move || class_list("overlay", "is-open", daily_open.get())
				aria-hidden=move || aria_hidden(daily_open.get())
				on:click=move |_: MouseEvent| daily_open.set(false)
			>
				<div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
					<p id="daily-desc">{move || ledger::credits_message(credits())}</p>
					<button id="daily-open" disabled=move || credits() == 0 on:click=on_open>
						{move || if credits() > 0 { "Yes, show me" } else { "Come back tomorrow" }}
					</button>
					<button
						id="daily-cancel"
						on:click=move |_: MouseEvent| {
							audio::play(Tone::CLICK);
							daily_open.set(false);
						}
					>
						"Not now"
					</button>
				</div>
			</div>

			<EssayReader reader=reader />

			<button
				class=move || class_list("mail-button", "is-open", mail_visible.get())
				on:click=move |_: MouseEvent| {
					audio::play(Tone::CLICK);
					mail_visible.update(|v| *v = !*v);
				}
			>
				"Mail"
			</button>
			<MailPanel visible=mail_visible entries=mail />

			<button class="debug-button" on:click=move |_: MouseEvent| debug_visible.update(|v| *v = !*v)>
				"Debug"
			</button>
			<pre
				id="debug-panel"
				class=move || class_list("debug-panel", "is-visible", debug_visible.get())
				aria-hidden=move || aria_hidden(debug_visible.get())
			>
				{move || daily::debug_report(&calendar, now.get(), opened.get(), total)}
			</pre>
		</div>
	}
}
