//! Short UI tones synthesized with Web Audio.

use std::cell::RefCell;

use log::warn;
use rand::Rng;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

use crate::error::Result;

/// Oscillator shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
	Sine,
	Square,
	Triangle,
}

impl From<Waveform> for OscillatorType {
	fn from(waveform: Waveform) -> Self {
		match waveform {
			Waveform::Sine => OscillatorType::Sine,
			Waveform::Square => OscillatorType::Square,
			Waveform::Triangle => OscillatorType::Triangle,
		}
	}
}

/// A single blip: an oscillator decaying exponentially to silence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
	/// Frequency in Hz.
	pub freq: f32,
	/// Decay time in seconds.
	pub duration: f64,
	pub waveform: Waveform,
	/// Starting gain.
	pub gain: f32,
}

impl Tone {
	pub const CLICK: Tone = Tone {
		freq: 520.0,
		duration: 0.06,
		waveform: Waveform::Triangle,
		gain: 0.035,
	};

	pub const HOVER_TICK: Tone = Tone {
		freq: 780.0,
		duration: 0.03,
		waveform: Waveform::Square,
		gain: 0.02,
	};

	/// A faint sine somewhere between 920 and 1080 Hz.
	pub fn shimmer<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Tone {
			freq: 920.0 + rng.gen_range(0.0..160.0),
			duration: 0.04,
			waveform: Waveform::Sine,
			gain: 0.015,
		}
	}
}

// Gain the envelope ramps down to; exponential ramps cannot reach zero.
const SILENT_GAIN: f32 = 0.0001;

/// Plays tones through one lazily created `AudioContext`.
#[derive(Default)]
pub struct ToneSynth {
	context: RefCell<Option<AudioContext>>,
}

impl ToneSynth {
	fn context(&self) -> Result<AudioContext> {
		let mut slot = self.context.borrow_mut();
		let ctx = match slot.as_ref() {
			Some(ctx) => ctx.clone(),
			None => {
				let ctx = AudioContext::new()?;
				*slot = Some(ctx.clone());
				ctx
			}
		};
		// Browsers start contexts suspended until a user gesture.
		if ctx.state() == AudioContextState::Suspended {
			let _ = ctx.resume()?;
		}
		Ok(ctx)
	}

	pub fn play(&self, tone: Tone) -> Result<()> {
		let ctx = self.context()?;
		let osc = ctx.create_oscillator()?;
		let amp = ctx.create_gain()?;
		osc.set_type(tone.waveform.into());
		osc.frequency().set_value(tone.freq);
		amp.gain().set_value(tone.gain);
		osc.connect_with_audio_node(&amp)?;
		amp.connect_with_audio_node(&ctx.destination())?;

		let now = ctx.current_time();
		amp.gain().set_value_at_time(tone.gain, now)?;
		amp.gain()
			.exponential_ramp_to_value_at_time(SILENT_GAIN, now + tone.duration)?;
		osc.start_with_when(now)?;
		osc.stop_with_when(now + tone.duration + 0.01)?;
		Ok(())
	}
}

thread_local! {
	static SYNTH: ToneSynth = ToneSynth::default();
}

/// Play `tone` on the page-wide synth. Failures are logged and dropped.
pub fn play(tone: Tone) {
	SYNTH.with(|synth| {
		if let Err(e) = synth.play(tone) {
			warn!("starfield-page: tone not played: {}", e);
		}
	});
}
