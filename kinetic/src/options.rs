use alloc::sync::Arc;
use core::ops::RangeInclusive;

use crate::{ConfigError, EdgeReflection};

/// Default tick period in milliseconds.
pub const DEFAULT_PERIOD_MS: u64 = 10;
/// Default friction (pixels per second, removed from the speed every second of decay).
pub const DEFAULT_FRICTION: u32 = 5000;
/// Default bounce damping divisor.
pub const DEFAULT_DAMPING: u32 = 3;

/// Recommended bounds for a host-side friction control.
pub const FRICTION_RANGE: RangeInclusive<u32> = 0..=20_000;
/// Recommended bounds for a host-side damping control.
pub const DAMPING_RANGE: RangeInclusive<u32> = 1..=10;

/// A callback fired after every tick with the current speed.
///
/// The value is raw engine speed; unit conversion is up to the consumer.
pub type SpeedChangedCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// A callback fired once when a decay episode ends.
pub type ScrollFinishedCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::Scroller`].
///
/// Callbacks are stored in `Arc`s so options stay cheap to clone and adapters can tweak a field
/// and call `Scroller::set_options` without rebuilding closures.
pub struct ScrollerOptions {
    /// Linear deceleration applied while decaying. Must be finite and `>= 0`.
    pub friction: f64,
    /// Divisor applied to the speed on each bounce. Must be finite and `>= 1`.
    pub damping: f64,
    /// Wall-clock interval between ticks. Must be `> 0`.
    pub period_ms: u64,
    pub edge_reflection: EdgeReflection,
    pub on_speed_changed: Option<SpeedChangedCallback>,
    pub on_scroll_finished: Option<ScrollFinishedCallback>,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self {
            friction: f64::from(DEFAULT_FRICTION),
            damping: f64::from(DEFAULT_DAMPING),
            period_ms: DEFAULT_PERIOD_MS,
            edge_reflection: EdgeReflection::default(),
            on_speed_changed: None,
            on_scroll_finished: None,
        }
    }
}

impl Clone for ScrollerOptions {
    fn clone(&self) -> Self {
        Self {
            friction: self.friction,
            damping: self.damping,
            period_ms: self.period_ms,
            edge_reflection: self.edge_reflection,
            on_speed_changed: self.on_speed_changed.clone(),
            on_scroll_finished: self.on_scroll_finished.clone(),
        }
    }
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every engine precondition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if !self.friction.is_finite() || self.friction < 0.0 {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !self.damping.is_finite() || self.damping < 1.0 {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }

    /// The tick period in seconds.
    pub fn period_secs(&self) -> f64 {
        self.period_ms as f64 / 1000.0
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_period_ms(mut self, period_ms: u64) -> Self {
        self.period_ms = period_ms;
        self
    }

    pub fn with_edge_reflection(mut self, edge_reflection: EdgeReflection) -> Self {
        self.edge_reflection = edge_reflection;
        self
    }

    pub fn with_on_speed_changed(
        mut self,
        on_speed_changed: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_speed_changed = on_speed_changed.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_finished(
        mut self,
        on_scroll_finished: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_finished = on_scroll_finished.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for ScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("friction", &self.friction)
            .field("damping", &self.damping)
            .field("period_ms", &self.period_ms)
            .field("edge_reflection", &self.edge_reflection)
            .finish_non_exhaustive()
    }
}
