//! The word reading game.
//!
//! A round shows a few picture words one at a time and listens for the player to say each one.
//! Speech capture happens elsewhere; this module only decides whether a transcript names the word
//! and what comes next.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordCard {
	pub word: &'static str,
	pub image: &'static str,
}

pub const DECK: [WordCard; 6] = [
	WordCard { word: "CAT", image: "🐱" },
	WordCard { word: "DOG", image: "🐶" },
	WordCard { word: "SUN", image: "☀️" },
	WordCard { word: "CAR", image: "🚗" },
	WordCard { word: "BALL", image: "⚽" },
	WordCard { word: "TREE", image: "🌳" },
];

/// Whether `transcript` contains `target` as a whole word.
///
/// Case and anything other than letters and whitespace are ignored, so short phrases like
/// "the dog!" still count.
pub fn transcript_matches(target: &str, transcript: &str) -> bool {
	let target = target.trim().to_uppercase();
	if target.is_empty() {
		return false;
	}
	let normalized: String = transcript
		.trim()
		.to_uppercase()
		.chars()
		.filter(|c| c.is_ascii_uppercase() || c.is_whitespace())
		.collect();
	normalized.split_whitespace().any(|word| word == target)
}

/// Why the speech recognizer stopped without a transcript.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
	/// The platform has no speech recognizer at all.
	#[error("speech recognition is not supported")]
	Unsupported,

	#[error("recognition language is not supported")]
	LanguageNotSupported,

	#[error("recognition aborted")]
	Aborted,

	#[error("no speech detected")]
	NoSpeech,

	#[error("recognition failed: {0}")]
	Failed(String),
}

static_assertions::assert_impl_all!(RecognitionError: std::error::Error, Send, Sync);

impl RecognitionError {
	/// Maps the recognizer's error code.
	pub fn from_code(code: &str) -> Self {
		match code {
			"aborted" => Self::Aborted,
			"no-speech" => Self::NoSpeech,
			"language-not-supported" => Self::LanguageNotSupported,
			other => Self::Failed(other.to_owned()),
		}
	}

	/// Aborts and silence just stop listening, the rest deserve a "try again".
	pub fn should_prompt(&self) -> bool {
		!matches!(self, Self::Aborted | Self::NoSpeech)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeardOutcome {
	/// `word` was said; listen for `next`.
	Matched {
		word: &'static str,
		next: &'static str,
	},
	/// The current word was passed over without being read; listen for `next`.
	Skipped { next: &'static str },
	/// The last word was said, or skipped.
	Finished,
	TryAgain,
}

#[derive(Clone, Debug)]
pub struct ReadingRound {
	cards: Vec<WordCard>,
	position: usize,
}

impl ReadingRound {
	pub const MIN_WORDS: usize = 3;
	pub const MAX_WORDS: usize = 4;

	/// A round with the given cards in order. Returns `None` when there are none.
	pub fn new(cards: impl IntoIterator<Item = WordCard>) -> Option<Self> {
		let cards: Vec<WordCard> = cards.into_iter().collect();
		(!cards.is_empty()).then_some(Self { cards, position: 0 })
	}

	/// Three or four distinct cards from [`DECK`], shuffled.
	pub fn random(rng: &mut fastrand::Rng) -> Self {
		let mut cards = DECK.to_vec();
		rng.shuffle(&mut cards);
		cards.truncate(rng.usize(Self::MIN_WORDS..=Self::MAX_WORDS));
		Self { cards, position: 0 }
	}

	pub fn cards(&self) -> &[WordCard] {
		&self.cards
	}

	/// The card to read, or `None` once the round is finished.
	pub fn current(&self) -> Option<&WordCard> {
		self.cards.get(self.position)
	}

	pub fn is_finished(&self) -> bool {
		self.position >= self.cards.len()
	}

	/// Checks a transcript against the current word and advances on a match.
	#[tracing::instrument(level = "debug", skip(self), ret)]
	pub fn hear(&mut self, transcript: &str) -> HeardOutcome {
		let Some(card) = self.current() else {
			return HeardOutcome::Finished;
		};
		if !transcript_matches(card.word, transcript) {
			return HeardOutcome::TryAgain;
		}
		let word = card.word;
		tracing::info!(word, "word read");
		match self.advance() {
			Some(next) => HeardOutcome::Matched { word, next },
			None => HeardOutcome::Finished,
		}
	}

	/// Moves past the current word without hearing it.
	pub fn skip(&mut self) -> HeardOutcome {
		if self.is_finished() {
			return HeardOutcome::Finished;
		}
		match self.advance() {
			Some(next) => HeardOutcome::Skipped { next },
			None => HeardOutcome::Finished,
		}
	}

	/// Steps to the following card and returns its word.
	fn advance(&mut self) -> Option<&'static str> {
		self.position += 1;
		self.current().map(|card| card.word)
	}
}
