use std::collections::BTreeMap;
use std::f32::consts::PI;
use std::str::FromStr;

use crate::geom::Point;
use crate::shape::{AngularWindow, LetterShape, Primitive};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LetterError {
	#[error("{0:?} is not a letter from A to Z")]
	NotALetter(char),

	#[error("expected a single letter, got {0:?}")]
	NotSingleLetter(String),
}

static_assertions::assert_impl_all!(LetterError: std::error::Error, Send, Sync);

/// An uppercase letter of the English alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct LetterId(char);

impl LetterId {
	pub const A: Self = Self('A');
	pub const B: Self = Self('B');
	pub const C: Self = Self('C');

	pub const COUNT: usize = 26;

	/// Accepts either case.
	pub fn new(c: char) -> Result<Self, LetterError> {
		let upper = c.to_ascii_uppercase();
		if upper.is_ascii_uppercase() {
			Ok(Self(upper))
		} else {
			Err(LetterError::NotALetter(c))
		}
	}

	pub fn from_index(index: usize) -> Option<Self> {
		(index < Self::COUNT).then(|| Self((b'A' + index as u8) as char))
	}

	pub fn index(self) -> usize {
		(self.0 as u8 - b'A') as usize
	}

	pub fn as_char(self) -> char {
		self.0
	}

	pub fn next(self) -> Option<Self> {
		Self::from_index(self.index() + 1)
	}

	/// A through Z.
	pub fn alphabet() -> impl Iterator<Item = Self> {
		(0..Self::COUNT).filter_map(Self::from_index)
	}
}

impl TryFrom<char> for LetterId {
	type Error = LetterError;

	fn try_from(c: char) -> Result<Self, Self::Error> {
		Self::new(c)
	}
}

impl FromStr for LetterId {
	type Err = LetterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.trim().chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Self::new(c),
			_ => Err(LetterError::NotSingleLetter(s.to_owned())),
		}
	}
}

// Guides are drawn on a 400x300 canvas.
const A_STROKES: [Primitive; 3] = [
	Primitive::segment(Point::new(140.0, 250.0), Point::new(200.0, 60.0)),
	Primitive::segment(Point::new(260.0, 250.0), Point::new(200.0, 60.0)),
	Primitive::segment(Point::new(160.0, 170.0), Point::new(240.0, 170.0)),
];

const B_STROKES: [Primitive; 3] = [
	Primitive::segment(Point::new(150.0, 60.0), Point::new(150.0, 250.0)),
	Primitive::circle(Point::new(200.0, 95.0), 45.0),
	Primitive::circle(Point::new(200.0, 190.0), 50.0),
];

const C_STROKES: [Primitive; 1] = [Primitive::arc(
	Point::new(200.0, 150.0),
	90.0,
	AngularWindow::new(-3.0 * PI / 4.0, 3.0 * PI / 4.0),
)];

/// Maps letters to the shapes they are traced against.
///
/// Letters without a shape cannot be scored.
#[derive(Clone, Debug, Default)]
pub struct ShapeLibrary {
	shapes: BTreeMap<LetterId, LetterShape>,
}

impl ShapeLibrary {
	pub fn new() -> Self {
		Self::default()
	}

	/// The templates for A, B and C.
	pub fn builtin() -> Self {
		Self::new()
			.with_shape(LetterId::A, LetterShape::new(A_STROKES))
			.with_shape(LetterId::B, LetterShape::new(B_STROKES))
			.with_shape(LetterId::C, LetterShape::new(C_STROKES))
	}

	pub fn with_shape(mut self, letter: LetterId, shape: LetterShape) -> Self {
		self.insert(letter, shape);
		self
	}

	/// Returns the shape previously registered for `letter`, if any.
	pub fn insert(&mut self, letter: LetterId, shape: LetterShape) -> Option<LetterShape> {
		self.shapes.insert(letter, shape)
	}

	pub fn get(&self, letter: LetterId) -> Option<&LetterShape> {
		self.shapes.get(&letter)
	}

	pub fn supports(&self, letter: LetterId) -> bool {
		self.shapes.contains_key(&letter)
	}

	/// Supported letters in alphabetical order.
	pub fn letters(&self) -> impl Iterator<Item = LetterId> + '_ {
		self.shapes.keys().copied()
	}
}
