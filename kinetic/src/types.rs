/// A pointer position in host coordinates (pixels).
///
/// Only `x` drives the engine; `y` is carried so hosts can forward raw cursor samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

/// Motion direction along the scroll axis.
///
/// `Forward` increases the offset (content moves left under a leftward drag).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a pointer delta. A zero delta counts as forward.
    pub fn from_delta(delta: f64) -> Self {
        if delta >= 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    pub fn signum(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Engine phase.
///
/// - `Dragging`: the pointer is down; ticks follow the raw pointer delta.
/// - `Decaying`: the pointer is up and a tick is pending; ticks run friction and bounce.
/// - `Idle`: nothing is pending. Only `press`/`start` leave this phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Dragging,
    Decaying,
    #[default]
    Idle,
}

/// Which boundary a decay tick bounced off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Min,
    Max,
}

/// How an overshoot past the minimum edge is reflected back into range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeReflection {
    /// Mirror about the minimum: `2 * min - x`. Same formula as the maximum edge.
    #[default]
    Symmetric,
    /// Negate the position: `-x`. Only lands in range when `min == 0`.
    ZeroOrigin,
}

impl EdgeReflection {
    pub fn reflect_min(self, min: f64, x: f64) -> f64 {
        match self {
            Self::Symmetric => 2.0 * min - x,
            Self::ZeroOrigin => -x,
        }
    }
}

/// The outcome of one fired tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// The phase the tick ran in (`Dragging` or `Decaying`).
    pub phase: Phase,
    /// Offset written to the viewport, if any. The first drag tick after a reset writes nothing.
    pub offset: Option<f64>,
    /// Speed after the tick (never negative).
    pub speed: f64,
    pub direction: Option<Direction>,
    pub bounced: Option<Edge>,
    /// Whether another tick was armed.
    pub rearmed: bool,
    /// Whether this tick ended a decay episode.
    pub finished: bool,
}
