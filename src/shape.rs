//! Letter templates described as data.
//!
//! A template is an ordered set of primitives approximating the strokes of one letter. A point
//! follows the template when it is close enough to any one of them.

use std::f32::consts::{PI, TAU};

use crate::geom::{distance_to_segment, Point};

/// An open interval of angles around an arc's center, in radians.
///
/// Angles use the `atan2(dy, dx)` frame of the canvas, so they fall in `(-π, π]` and, because y
/// grows downward, increase clockwise on screen. A window whose `start` is greater than its `end`
/// wraps across ±π.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularWindow {
	pub start: f32,
	pub end: f32,
}

impl AngularWindow {
	pub const fn new(start: f32, end: f32) -> Self {
		Self { start, end }
	}

	/// Symmetric about the positive x axis.
	pub fn symmetric(half_width: f32) -> Self {
		Self::new(-half_width, half_width)
	}

	pub fn contains(&self, angle: f32) -> bool {
		if self.start <= self.end {
			self.start < angle && angle < self.end
		} else {
			self.start < angle || angle < self.end
		}
	}

	fn span(&self) -> f32 {
		if self.start <= self.end {
			self.end - self.start
		} else {
			self.end + TAU - self.start
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
	Segment {
		start: Point,
		end: Point,
	},
	Arc {
		center: Point,
		radius: f32,
		window: Option<AngularWindow>,
	},
}

impl Primitive {
	pub const fn segment(start: Point, end: Point) -> Self {
		Self::Segment { start, end }
	}

	pub const fn circle(center: Point, radius: f32) -> Self {
		Self::Arc {
			center,
			radius,
			window: None,
		}
	}

	pub const fn arc(center: Point, radius: f32, window: AngularWindow) -> Self {
		Self::Arc {
			center,
			radius,
			window: Some(window),
		}
	}

	/// Distance from `point` to the primitive's outline, ignoring any angular window.
	pub fn distance(&self, point: Point) -> f32 {
		match *self {
			Self::Segment { start, end } => distance_to_segment(point, start, end),
			Self::Arc { center, radius, .. } => (point.distance(center) - radius).abs(),
		}
	}

	pub fn matches(&self, point: Point, tolerance: f32) -> bool {
		if let Self::Arc {
			center,
			window: Some(window),
			..
		} = *self
		{
			let offset = point - center;
			if !window.contains(offset.y.atan2(offset.x)) {
				return false;
			}
		}
		self.distance(point) <= tolerance
	}

	/// Points along the primitive, roughly `spacing` apart.
	///
	/// Arc samples stay strictly inside the angular window.
	pub fn sample(&self, spacing: f32) -> Vec<Point> {
		match *self {
			Self::Segment { start, end } => {
				let steps = step_count(start.distance(end), spacing);
				(0..=steps)
					.map(|i| start.lerp(end, i as f32 / steps as f32))
					.collect()
			}
			Self::Arc {
				center,
				radius,
				window,
			} => {
				let (first, span, offset) = match window {
					Some(window) => (window.start, window.span(), 0.5),
					None => (-PI, TAU, 0.0),
				};
				let steps = step_count(span * radius, spacing);
				(0..steps)
					.map(|i| {
						let angle = first + span * (i as f32 + offset) / steps as f32;
						center + radius * Point::new(angle.cos(), angle.sin())
					})
					.collect()
			}
		}
	}
}

fn step_count(length: f32, spacing: f32) -> usize {
	if spacing > 0.0 && length.is_finite() {
		((length / spacing).ceil() as usize).max(1)
	} else {
		1
	}
}

/// The idealized shape of one letter.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterShape {
	primitives: Vec<Primitive>,
}

impl LetterShape {
	pub fn new(primitives: impl IntoIterator<Item = Primitive>) -> Self {
		Self {
			primitives: primitives.into_iter().collect(),
		}
	}

	pub fn primitives(&self) -> &[Primitive] {
		&self.primitives
	}

	/// Whether `point` lies within `tolerance` of any primitive.
	pub fn matches(&self, point: Point, tolerance: f32) -> bool {
		self.primitives.iter().any(|p| p.matches(point, tolerance))
	}

	pub fn sample(&self, spacing: f32) -> Vec<Point> {
		self
			.primitives
			.iter()
			.flat_map(|p| p.sample(spacing))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use glam::vec2;

	const C_ARC: Primitive = Primitive::arc(
		Point::new(200.0, 150.0),
		90.0,
		AngularWindow::new(-3.0 * PI / 4.0, 3.0 * PI / 4.0),
	);

	#[test]
	fn window_is_open() {
		let window = AngularWindow::symmetric(PI / 2.0);
		assert!(window.contains(0.0));
		assert!(!window.contains(PI / 2.0));
		assert!(!window.contains(-PI / 2.0));
		assert!(!window.contains(PI));
	}

	#[test]
	fn window_wraps() {
		let window = AngularWindow::new(3.0 * PI / 4.0, -3.0 * PI / 4.0);
		assert!(window.contains(PI));
		assert!(window.contains(-0.9 * PI));
		assert!(!window.contains(0.0));
		assert_abs_diff_eq!(window.span(), PI / 2.0, epsilon = 1e-5);
	}

	#[test]
	fn arc_respects_window() {
		assert!(C_ARC.matches(vec2(290.0, 150.0), 22.0));
		assert!(C_ARC.matches(vec2(200.0, 60.0), 22.0));
		assert!(!C_ARC.matches(vec2(110.0, 150.0), 22.0));
		assert_eq!(C_ARC.distance(vec2(110.0, 150.0)), 0.0);
	}

	#[test]
	fn circle_distance_is_radial() {
		let circle = Primitive::circle(vec2(0.0, 0.0), 10.0);
		assert_eq!(circle.distance(vec2(0.0, 0.0)), 10.0);
		assert_eq!(circle.distance(vec2(0.0, -25.0)), 15.0);
		assert!(circle.matches(vec2(-12.0, 0.0), 2.0));
		assert!(!circle.matches(vec2(-12.5, 0.0), 2.0));
	}

	#[test]
	fn samples_lie_on_primitive() {
		let segment = Primitive::segment(vec2(140.0, 250.0), vec2(200.0, 60.0));
		let circle = Primitive::circle(vec2(200.0, 95.0), 45.0);
		for primitive in [segment, circle, C_ARC] {
			let samples = primitive.sample(5.0);
			assert!(samples.len() > 10);
			for p in samples {
				assert!(primitive.matches(p, 0.01), "{p:?} off {primitive:?}");
			}
		}
	}

	#[test]
	fn segment_samples_include_endpoints() {
		let samples = Primitive::segment(vec2(0.0, 0.0), vec2(10.0, 0.0)).sample(4.0);
		assert_eq!(samples.len(), 4);
		assert_eq!(samples[0], vec2(0.0, 0.0));
		assert_eq!(samples[3], vec2(10.0, 0.0));
	}

	#[test]
	fn shape_matches_any_primitive() {
		let shape = LetterShape::new([
			Primitive::segment(vec2(0.0, 0.0), vec2(0.0, 100.0)),
			Primitive::circle(vec2(50.0, 50.0), 10.0),
		]);
		assert_eq!(shape.primitives().len(), 2);
		assert!(shape.matches(vec2(3.0, 40.0), 5.0));
		assert!(shape.matches(vec2(50.0, 62.0), 5.0));
		assert!(!shape.matches(vec2(25.0, 50.0), 5.0));
	}
}
