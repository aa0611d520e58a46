use crate::evaluator::TracingEvaluator;
use crate::geom::{AABox, Point};
use crate::letters::LetterId;

/// Length and accuracy of what has been traced so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureResult {
	pub length: f32,
	pub accuracy: f32,
}

#[derive(Clone, Copy, Debug)]
struct ActiveStroke {
	last: Point,
}

/// Collects pointer input for one letter.
///
/// Points and drawn length accumulate over every gesture until the pad is cleared. Each gesture
/// starts a new sub-path, so no length is counted between the end of one gesture and the start of
/// the next.
#[derive(Clone, Debug, Default)]
pub struct TracingPad {
	points: Vec<Point>,
	length: f32,
	strokes: usize,
	active: Option<ActiveStroke>,
}

impl TracingPad {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn pointer_down(&mut self, point: Point) {
		if self.active.is_some() {
			tracing::warn!("pointer down while already drawing");
		}
		self.active = Some(ActiveStroke { last: point });
		self.points.push(point);
		self.strokes += 1;
	}

	/// Returns whether the point was recorded, which only happens between down and up.
	pub fn pointer_move(&mut self, point: Point) -> bool {
		let Some(active) = &mut self.active else {
			return false;
		};
		self.length += active.last.distance(point);
		active.last = point;
		self.points.push(point);
		true
	}

	/// Ends the current gesture, for both pointer up and pointer leave.
	///
	/// Returns whether a gesture was in progress.
	pub fn pointer_up(&mut self) -> bool {
		self.active.take().is_some()
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn is_drawing(&self) -> bool {
		self.active.is_some()
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	/// Total drawn distance since the last clear.
	pub fn length(&self) -> f32 {
		self.length
	}

	/// Number of gestures since the last clear.
	pub fn strokes(&self) -> usize {
		self.strokes
	}

	pub fn bounds(&self) -> AABox {
		AABox::containing(&self.points)
	}

	pub fn result(&self, evaluator: &TracingEvaluator, letter: LetterId) -> GestureResult {
		GestureResult {
			length: self.length,
			accuracy: evaluator.evaluate(letter, &self.points),
		}
	}
}
