use bon::Builder;

/// Distance, in canvas pixels, a point may stray from the guide and still count.
pub const DEFAULT_TOLERANCE: f32 = 22.0;

/// Drawing distance below which a trace is treated as a tap or scribble and not checked.
pub const DEFAULT_MIN_STROKE_LENGTH: f32 = 150.0;

/// Fraction of points that must follow the guide for a trace to pass.
pub const DEFAULT_MIN_ACCURACY: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
	#[error("tolerance must be a finite, non-negative distance, got {0}")]
	Tolerance(f32),

	#[error("minimum stroke length must be a finite, non-negative distance, got {0}")]
	MinStrokeLength(f32),

	#[error("minimum accuracy must lie in [0, 1], got {0}")]
	MinAccuracy(f32),
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Thresholds for scoring and accepting traces.
///
/// ```
/// use scribble_trace::TracingConfig;
///
/// let config = TracingConfig::builder().tolerance(30.0).build();
/// assert_eq!(config.min_accuracy, 0.7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Builder)]
pub struct TracingConfig {
	#[builder(default = DEFAULT_TOLERANCE)]
	pub tolerance: f32,

	#[builder(default = DEFAULT_MIN_STROKE_LENGTH)]
	pub min_stroke_length: f32,

	#[builder(default = DEFAULT_MIN_ACCURACY)]
	pub min_accuracy: f32,
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			tolerance: DEFAULT_TOLERANCE,
			min_stroke_length: DEFAULT_MIN_STROKE_LENGTH,
			min_accuracy: DEFAULT_MIN_ACCURACY,
		}
	}
}

impl TracingConfig {
	pub fn validate(self) -> Result<Self, ConfigError> {
		if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
			return Err(ConfigError::Tolerance(self.tolerance));
		}
		if !(self.min_stroke_length.is_finite() && self.min_stroke_length >= 0.0) {
			return Err(ConfigError::MinStrokeLength(self.min_stroke_length));
		}
		if !(0.0..=1.0).contains(&self.min_accuracy) {
			return Err(ConfigError::MinAccuracy(self.min_accuracy));
		}
		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_defaults_match_default() {
		assert_eq!(TracingConfig::builder().build(), TracingConfig::default());
	}

	#[test]
	fn validate() {
		assert!(TracingConfig::default().validate().is_ok());
		assert_eq!(
			TracingConfig::builder().tolerance(-1.0).build().validate(),
			Err(ConfigError::Tolerance(-1.0))
		);
		assert!(matches!(
			TracingConfig::builder()
				.min_stroke_length(f32::NAN)
				.build()
				.validate(),
			Err(ConfigError::MinStrokeLength(_))
		));
		assert_eq!(
			TracingConfig::builder().min_accuracy(1.5).build().validate(),
			Err(ConfigError::MinAccuracy(1.5))
		);
	}
}
