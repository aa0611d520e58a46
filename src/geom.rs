use glam::Vec2;
use itertools::Itertools;

/// A position on the tracing canvas, in pixels with y growing downward.
pub type Point = Vec2;

/// Distance from `point` to the closest position on the segment `start..end`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either end measure to that
/// endpoint. A degenerate segment measures to its single point.
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> f32 {
	let direction = end - start;
	let length_squared = direction.length_squared();
	if length_squared == 0.0 {
		return point.distance(start);
	}
	let t = ((point - start).dot(direction) / length_squared).clamp(0.0, 1.0);
	point.distance(start + t * direction)
}

/// Sum of the distances between consecutive points.
pub fn path_length<'a>(points: impl IntoIterator<Item = &'a Point>) -> f32 {
	points
		.into_iter()
		.tuple_windows()
		.map(|(a, b)| a.distance(*b))
		.sum()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Self {
		points
			.into_iter()
			.fold(Self::empty(), |b, p| b.expanded_to_contain(*p))
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn size(&self) -> Vec2 {
		if self.is_empty() {
			Vec2::ZERO
		} else {
			self.max - self.min
		}
	}
}
