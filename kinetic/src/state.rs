use crate::{Direction, Phase, Point};

/// A lightweight snapshot of the engine's physics state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub phase: Phase,
    pub last_pointer: Option<Point>,
    pub direction: Option<Direction>,
    pub speed: f64,
    pub friction: f64,
    pub damping: f64,
    pub pressed: bool,
    /// Whether a tick is pending.
    pub armed: bool,
}
