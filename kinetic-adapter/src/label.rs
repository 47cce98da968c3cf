use core::fmt;

/// Formats a speed notification for display, e.g. `pixelsPerSecond: 350.00`.
///
/// The engine reports drag distance divided by the tick period, so the value reads as pixels
/// per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpeedLabel(pub f64);

impl fmt::Display for SpeedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pixelsPerSecond: {:.2}", self.0)
    }
}
