use kinetic::{DAMPING_RANGE, FRICTION_RANGE, Point};

/// A single-pointer input event, as delivered by the host's event loop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEvent {
    Pressed(Point),
    /// The pointer moved. Only the latest position matters; ticks sample it.
    Moved(Point),
    Released,
}

/// A value change from a host-side range control (e.g. a slider).
///
/// Values are clamped into [`FRICTION_RANGE`] / [`DAMPING_RANGE`] before they reach the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlEvent {
    Friction(u32),
    Damping(u32),
}

impl ControlEvent {
    pub fn clamped(self) -> Self {
        match self {
            Self::Friction(v) => {
                Self::Friction(v.clamp(*FRICTION_RANGE.start(), *FRICTION_RANGE.end()))
            }
            Self::Damping(v) => Self::Damping(v.clamp(*DAMPING_RANGE.start(), *DAMPING_RANGE.end())),
        }
    }
}
