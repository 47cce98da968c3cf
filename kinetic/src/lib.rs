//! A headless kinetic (inertial) scrolling engine.
//!
//! For timer-driven controllers and an async event loop, see the `kinetic-adapter` crate.
//!
//! The engine follows a pointer drag along one axis, estimates a smoothed drag speed, and after
//! release keeps scrolling with linear friction, bouncing off the scroll range edges with a
//! configurable energy loss. It is a small state machine:
//!
//! - `Dragging` while the pointer is down: each tick applies the raw pointer delta.
//! - `Decaying` after release: each tick projects the offset from speed and direction.
//! - `Idle` once the speed reaches zero: no tick is pending.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - pointer press/release events and pointer samples
//! - a [`Viewport`] (offset read/write, scroll range)
//! - a timer that fires [`Scroller::tick`] one period after it was armed
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod scroller;
mod state;
mod types;
mod viewport;


pub use error::ConfigError;
pub use options::{
    DAMPING_RANGE, DEFAULT_DAMPING, DEFAULT_FRICTION, DEFAULT_PERIOD_MS, FRICTION_RANGE,
    ScrollFinishedCallback, ScrollerOptions, SpeedChangedCallback,
};
pub use scroller::Scroller;
pub use state::ScrollSnapshot;
pub use types::{Direction, Edge, EdgeReflection, Phase, Point, TickReport};
pub use viewport::{ScrollBar, ScrollRange, Viewport};
