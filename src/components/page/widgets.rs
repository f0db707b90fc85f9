//! Smaller building blocks of the daily-message UI.

use leptos::ev::{MouseEvent, TouchEvent};
use leptos::prelude::*;
use rand::Rng;

use super::layout::{Rect, edge_classes};
use crate::audio::{self, Tone};
use crate::daily::{DailyConfig, MailEntry, ledger};

/// The essay currently shown in the reader overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenEssay {
	pub title: String,
	pub text: String,
	pub image: Option<&'static str>,
}

/// `base`, plus `flag` when `on`.
pub fn class_list(base: &str, flag: &str, on: bool) -> String {
	if on {
		format!("{} {}", base, flag)
	} else {
		base.to_string()
	}
}

pub fn aria_hidden(visible: bool) -> &'static str {
	if visible { "false" } else { "true" }
}

/// Gap kept between a star's popup and the viewport edge.
const MESSAGE_PADDING: f64 = 12.0;

/// Re-measure a star's popup and flip it away from the edges it crosses.
fn position_message(message: NodeRef<leptos::html::Span>) {
	let Some(el) = message.get_untracked() else {
		return;
	};
	let classes = el.class_list();
	let _ = classes.remove_3("is-bottom", "is-left", "is-right");
	let Some(width) = web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|w| w.as_f64())
	else {
		return;
	};
	let rect = Rect::from(el.get_bounding_client_rect());
	for class in edge_classes(rect, width, MESSAGE_PADDING) {
		let _ = classes.add_1(class);
	}
}

/// One star per message, revealed as messages are opened. Clicking or
/// touching a star shows its title; clicking anywhere else closes it.
#[component]
pub fn InteractiveStars(
	total: u32,
	opened: RwSignal<u32>,
	config: StoredValue<DailyConfig>,
) -> impl IntoView {
	let active = RwSignal::new(None::<u32>);
	let _ = window_event_listener(leptos::ev::click, move |_| active.set(None));

	let messages: Vec<NodeRef<leptos::html::Span>> = (0..total).map(|_| NodeRef::new()).collect();
	let all_messages = messages.clone();
	let _ = window_event_listener(leptos::ev::resize, move |_| {
		all_messages.iter().copied().for_each(position_message);
	});

	let mut rng = rand::thread_rng();
	let stars = (1..=total)
		.zip(messages)
		.map(|(index, message)| {
			// Twinkle timing is random per star.
			let style = format!(
				"animation-duration: {:.2}s; animation-delay: {:.2}s;",
				rng.gen_range(1.0..3.0),
				rng.gen_range(0.0..2.0)
			);
			let label = config.with_value(|c| c.star_label(index));
			let class = move || {
				let state = if ledger::is_revealed(index, opened.get(), total) {
					"star star-revealed"
				} else {
					"star star-hidden"
				};
				class_list(state, "is-open", active.get() == Some(index))
			};
			let toggle = move || {
				audio::play(Tone::CLICK);
				active.update(|a| *a = if *a == Some(index) { None } else { Some(index) });
				position_message(message);
			};
			let on_click = move |ev: MouseEvent| {
				ev.stop_propagation();
				toggle();
			};
			// Handled here so the browser does not follow up with a click.
			let on_touch = move |ev: TouchEvent| {
				ev.prevent_default();
				ev.stop_propagation();
				toggle();
			};

			view! {
				<button
					class=class
					style=style
					data-star-index=index.to_string()
					on:click=on_click
					on:touchstart=on_touch
					on:focus=move |_| position_message(message)
					on:mouseenter=move |_: MouseEvent| {
						audio::play(Tone::HOVER_TICK);
						position_message(message);
					}
				>
					<span node_ref=message class="message">{label}</span>
				</button>
			}
		})
		.collect_view();

	view! { <div class="interactive-stars">{stars}</div> }
}

/// Full-screen reader for an opened essay.
#[component]
pub fn EssayReader(reader: RwSignal<Option<OpenEssay>>) -> impl IntoView {
	let is_open = move || reader.with(|r| r.is_some());

	view! {
		<div
			id="essay-overlay"
			class=move || class_list("overlay", "is-open", is_open())
			aria-hidden=move || aria_hidden(is_open())
			on:click=move |_: MouseEvent| reader.set(None)
		>
			<article class="essay" on:click=|ev: MouseEvent| ev.stop_propagation()>
				<h2 id="essay-title">{move || reader.get().map(|e| e.title).unwrap_or_default()}</h2>
				{move || {
					reader
						.get()
						.and_then(|e| e.image)
						.map(|src| view! { <img id="essay-image" class="is-visible" src=src alt="" /> })
				}}
				<p id="essay-body">{move || reader.get().map(|e| e.text).unwrap_or_default()}</p>
				<button
					id="essay-close"
					on:click=move |_: MouseEvent| {
						audio::play(Tone::CLICK);
						reader.set(None);
					}
				>
					"Close"
				</button>
			</article>
		</div>
	}
}

/// History of every opened message.
#[component]
pub fn MailPanel(visible: RwSignal<bool>, entries: RwSignal<Vec<MailEntry>>) -> impl IntoView {
	view! {
		<aside
			id="mail-panel"
			class=move || class_list("mail-panel", "is-visible", visible.get())
			aria-hidden=move || aria_hidden(visible.get())
		>
			<ul id="mail-list">
				{move || {
					let list = entries.get();
					if list.is_empty() {
						view! { <li>"No messages yet."</li> }.into_any()
					} else {
						list.into_iter()
							.map(|entry| {
								view! {
									<li>
										<strong>{entry.title}</strong>
										<br />
										<small>{entry.date}</small>
										<br />
										{entry.text}
									</li>
								}
							})
							.collect_view()
							.into_any()
					}
				}}
			</ul>
		</aside>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn class_and_aria_helpers() {
		assert_eq!(class_list("overlay", "is-open", true), "overlay is-open");
		assert_eq!(class_list("overlay", "is-open", false), "overlay");
		assert_eq!(aria_hidden(true), "false");
		assert_eq!(aria_hidden(false), "true");
	}
}
