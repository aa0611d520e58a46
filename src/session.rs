//! The letter tracing game.
//!
//! A session walks through the letters the shape library supports, in alphabetical order. Each
//! letter must be traced accurately before moving on, and tracing the last one completes the game.

use crate::config::{ConfigError, TracingConfig};
use crate::evaluator::TracingEvaluator;
use crate::geom::Point;
use crate::gesture::{GestureResult, TracingPad};
use crate::letters::{LetterId, ShapeLibrary};

/// Where players are sent once every playable letter is traced.
pub const PLAY_STORE_URL: &str =
	"https://play.google.com/store/apps/details?id=com.scribblesense.app";

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
	#[error("shape library has no letters to trace")]
	NoPlayableLetters,

	#[error(transparent)]
	Config(#[from] ConfigError),
}

static_assertions::assert_impl_all!(SessionError: std::error::Error, Send, Sync);

/// What happened when a gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TraceOutcome {
	/// Not enough has been drawn to be worth checking.
	TooShort { length: f32 },
	/// The trace strays too far from the guide.
	TryAgain { accuracy: f32 },
	/// The letter was already passed, so this trace changes nothing.
	AlreadyTraced { accuracy: f32 },
	/// The letter is passed. `next` is `None` when it was the last one.
	Traced {
		letter: LetterId,
		accuracy: f32,
		next: Option<LetterId>,
	},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextOutcome {
	/// The current letter has not been traced yet.
	TraceFirst,
	Advanced(LetterId),
	/// Every letter is done; send the player to [`PLAY_STORE_URL`].
	OpenStore,
}

/// How a letter appears in the A–Z progress strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterStatus {
	Current,
	Done,
	Pending,
}

#[derive(Clone, Debug)]
pub struct TracingSession {
	evaluator: TracingEvaluator,
	config: TracingConfig,
	current: LetterId,
	traced: bool,
	pad: TracingPad,
}

impl Default for TracingSession {
	fn default() -> Self {
		let config = TracingConfig::default();
		Self {
			evaluator: TracingEvaluator::new(ShapeLibrary::builtin(), config.tolerance),
			config,
			current: LetterId::A,
			traced: false,
			pad: TracingPad::new(),
		}
	}
}

impl TracingSession {
	pub fn new(library: ShapeLibrary, config: TracingConfig) -> Result<Self, SessionError> {
		let config = config.validate()?;
		let current = library
			.letters()
			.next()
			.ok_or(SessionError::NoPlayableLetters)?;
		Ok(Self {
			evaluator: TracingEvaluator::new(library, config.tolerance),
			config,
			current,
			traced: false,
			pad: TracingPad::new(),
		})
	}

	pub fn current(&self) -> LetterId {
		self.current
	}

	pub fn is_traced(&self) -> bool {
		self.traced
	}

	pub fn config(&self) -> &TracingConfig {
		&self.config
	}

	pub fn pad(&self) -> &TracingPad {
		&self.pad
	}

	/// The playable letter after the current one.
	pub fn upcoming(&self) -> Option<LetterId> {
		self
			.evaluator
			.library()
			.letters()
			.find(|&letter| letter > self.current)
	}

	pub fn is_last(&self) -> bool {
		self.upcoming().is_none()
	}

	pub fn pointer_down(&mut self, point: Point) {
		self.pad.pointer_down(point);
	}

	pub fn pointer_move(&mut self, point: Point) -> bool {
		self.pad.pointer_move(point)
	}

	/// Ends the gesture and checks everything drawn for the current letter.
	///
	/// Returns `None` if no gesture was in progress.
	#[tracing::instrument(level = "debug", skip(self), fields(letter = %self.current))]
	pub fn pointer_up(&mut self) -> Option<TraceOutcome> {
		if !self.pad.pointer_up() {
			return None;
		}

		let length = self.pad.length();
		if length < self.config.min_stroke_length {
			tracing::debug!(length, "trace too short to check");
			return Some(TraceOutcome::TooShort { length });
		}

		let GestureResult { accuracy, .. } = self.pad.result(&self.evaluator, self.current);
		if accuracy < self.config.min_accuracy {
			tracing::debug!(accuracy, "trace does not follow the guide");
			return Some(TraceOutcome::TryAgain { accuracy });
		}
		if self.traced {
			return Some(TraceOutcome::AlreadyTraced { accuracy });
		}

		self.traced = true;
		let next = self.upcoming();
		tracing::info!(letter = %self.current, accuracy, ?next, "letter traced");
		Some(TraceOutcome::Traced {
			letter: self.current,
			accuracy,
			next,
		})
	}

	pub fn next(&mut self) -> NextOutcome {
		if !self.traced {
			return NextOutcome::TraceFirst;
		}
		match self.upcoming() {
			Some(letter) => {
				self.current = letter;
				self.traced = false;
				self.pad.clear();
				NextOutcome::Advanced(letter)
			}
			None => NextOutcome::OpenStore,
		}
	}

	/// Wipes the drawing and the pass for the current letter.
	pub fn clear(&mut self) {
		self.pad.clear();
		self.traced = false;
	}

	pub fn strip(&self) -> Vec<(LetterId, LetterStatus)> {
		let library = self.evaluator.library();
		LetterId::alphabet()
			.map(|letter| {
				let status = if letter == self.current {
					LetterStatus::Current
				} else if letter < self.current && library.supports(letter) {
					LetterStatus::Done
				} else {
					LetterStatus::Pending
				};
				(letter, status)
			})
			.collect()
	}
}
