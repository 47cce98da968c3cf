//! Adapter utilities for the `kinetic` crate.
//!
//! The `kinetic` crate is clock-agnostic: it only knows whether a tick is pending. This crate
//! provides the small, framework-neutral pieces a host needs around it:
//!
//! - A [`Controller`] that turns the engine's pending tick into a millisecond deadline
//! - Pointer and range-control event types
//! - A speed readout formatter
//! - With `feature = "tokio"`, an [`EventLoop`] that runs the timer on `tokio::time`
//!
//! This crate does not bind to any UI toolkit.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
#[cfg(feature = "tokio")]
mod event_loop;
mod label;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use event::{ControlEvent, PointerEvent};
#[cfg(feature = "tokio")]
pub use event_loop::{EventLoop, InputEvent};
pub use label::SpeedLabel;
