//! Scores a freehand trace against a letter's template.

use crate::config::DEFAULT_TOLERANCE;
use crate::geom::Point;
use crate::letters::{LetterId, ShapeLibrary};

/// Scores traces against the shapes in a [`ShapeLibrary`].
///
/// Evaluation is a pure function of the letter and points: it never fails and holds no state
/// between calls.
#[derive(Clone, Debug)]
pub struct TracingEvaluator {
	library: ShapeLibrary,
	tolerance: f32,
}

static_assertions::assert_impl_all!(TracingEvaluator: Send, Sync);

impl Default for TracingEvaluator {
	fn default() -> Self {
		Self::new(ShapeLibrary::builtin(), DEFAULT_TOLERANCE)
	}
}

impl TracingEvaluator {
	pub fn new(library: ShapeLibrary, tolerance: f32) -> Self {
		Self { library, tolerance }
	}

	pub fn library(&self) -> &ShapeLibrary {
		&self.library
	}

	pub fn tolerance(&self) -> f32 {
		self.tolerance
	}

	pub fn with_tolerance(self, tolerance: f32) -> Self {
		Self { tolerance, ..self }
	}

	/// The fraction of `points` within tolerance of `letter`'s shape, in `[0, 1]`.
	///
	/// Returns 0 for an empty trace and for letters the library has no shape for.
	#[tracing::instrument(level = "debug", skip(self, points), fields(points = points.len()), ret)]
	pub fn evaluate(&self, letter: LetterId, points: &[Point]) -> f32 {
		if points.is_empty() {
			return 0.0;
		}
		let Some(shape) = self.library.get(letter) else {
			tracing::debug!(%letter, "no shape to trace against");
			return 0.0;
		};
		let matching = points
			.iter()
			.filter(|&&p| shape.matches(p, self.tolerance))
			.count();
		matching as f32 / points.len() as f32
	}
}

/// Scores `points` against the built-in shape for `letter` with the default tolerance.
pub fn evaluate(letter: LetterId, points: &[Point]) -> f32 {
	TracingEvaluator::default().evaluate(letter, points)
}
