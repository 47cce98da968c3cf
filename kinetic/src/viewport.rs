use crate::ConfigError;

/// Read/write access to the host's scroll position along the scrolled axis.
///
/// The engine reads the offset and range at the top of every tick and writes at most one new
/// offset per tick. Implementations decide whether writes are clamped; the engine itself never
/// clamps while dragging.
///
/// `min() <= max()` is part of the contract. A violating viewport is logged, not rejected.
pub trait Viewport {
    fn offset(&self) -> f64;
    fn set_offset(&mut self, offset: f64);
    fn min(&self) -> f64;
    fn max(&self) -> f64;
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn offset(&self) -> f64 {
        (**self).offset()
    }

    fn set_offset(&mut self, offset: f64) {
        (**self).set_offset(offset);
    }

    fn min(&self) -> f64 {
        (**self).min()
    }

    fn max(&self) -> f64 {
        (**self).max()
    }
}

/// A validated scrollable range.
///
/// Deserialization goes through [`ScrollRange::new`], so an inverted or non-finite range is a
/// decode error rather than a panic later in [`ScrollRange::clamp`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRange")
)]
pub struct ScrollRange {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for ScrollRange {
    type Error = ConfigError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl ScrollRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range starting at zero, e.g. `content_width - viewport_width` for a scrollbar.
    pub fn up_to(max: f64) -> Result<Self, ConfigError> {
        Self::new(0.0, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.min, self.max)
    }
}

/// A plain in-memory [`Viewport`], standing in for a widget scrollbar.
///
/// By default writes are stored as given, so overshoot is observable. With
/// [`ScrollBar::with_clamping`] writes are clamped into the range the way toolkit scrollbars
/// clamp their value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollBar {
    offset: f64,
    range: ScrollRange,
    clamp_writes: bool,
}

impl ScrollBar {
    pub fn new(range: ScrollRange, offset: f64) -> Self {
        Self {
            offset,
            range,
            clamp_writes: false,
        }
    }

    pub fn with_clamping(mut self, clamp_writes: bool) -> Self {
        self.clamp_writes = clamp_writes;
        if clamp_writes {
            self.offset = self.range.clamp(self.offset);
        }
        self
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    /// Replaces the range, e.g. after the content or window was resized.
    pub fn set_range(&mut self, range: ScrollRange) {
        self.range = range;
        if self.clamp_writes {
            self.offset = self.range.clamp(self.offset);
        }
    }
}

impl Viewport for ScrollBar {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = if self.clamp_writes {
            self.range.clamp(offset)
        } else {
            offset
        };
    }

    fn min(&self) -> f64 {
        self.range.min
    }

    fn max(&self) -> f64 {
        self.range.max
    }
}
