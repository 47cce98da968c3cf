use kinetic::{Phase, Point, Scroller, TickReport, Viewport};

use crate::{ControlEvent, PointerEvent};

/// A framework-neutral controller that owns a `kinetic::Scroller` and its viewport, and plays
/// the role of the engine's one-shot timer.
///
/// This type does not hold any UI objects or clocks. Adapters drive it by calling:
/// - `handle(event, now_ms)` when pointer events arrive
/// - `tick(now_ms)` from a frame callback or timer; it fires at most one engine tick per call,
///   and only once the pending deadline is reached
///
/// There is never more than one pending deadline. A tick that fires late is not followed by
/// catch-up ticks: the next deadline is one period after the tick actually ran.
#[derive(Clone, Debug)]
pub struct Controller<V> {
    scroller: Scroller,
    viewport: V,
    pointer: Point,
    deadline_ms: Option<u64>,
}

impl<V: Viewport> Controller<V> {
    pub fn new(scroller: Scroller, viewport: V) -> Self {
        Self {
            scroller,
            viewport,
            pointer: Point::default(),
            deadline_ms: None,
        }
    }

    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// Direct access to the engine.
    ///
    /// If you arm or cancel ticks through it (`start`, `reset`, `press`), call
    /// [`Controller::sync_timer`] afterwards.
    pub fn scroller_mut(&mut self) -> &mut Scroller {
        &mut self.scroller
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_parts(self) -> (Scroller, V) {
        (self.scroller, self.viewport)
    }

    /// The latest pointer position reported by the host.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn phase(&self) -> Phase {
        self.scroller.phase()
    }

    /// Whether a tick is pending.
    pub fn is_animating(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// When the pending tick is due, in the host's millisecond clock.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn handle(&mut self, event: PointerEvent, now_ms: u64) {
        match event {
            PointerEvent::Pressed(at) => self.press(at, now_ms),
            PointerEvent::Moved(at) => self.pointer = at,
            PointerEvent::Released => self.release(),
        }
    }

    /// Pointer down at `at`: cancels any motion in flight and arms the first drag tick.
    pub fn press(&mut self, at: Point, now_ms: u64) {
        klog!(debug, x = at.x, now_ms, "Controller::press");
        self.pointer = at;
        self.scroller.press();
        self.sync_timer(now_ms);
    }

    /// Pointer up. The pending tick runs as the first decay step.
    pub fn release(&mut self) {
        klog!(debug, deadline = ?self.deadline_ms, "Controller::release");
        self.scroller.release();
    }

    /// Stops all motion and cancels the pending tick.
    pub fn cancel(&mut self) {
        self.scroller.reset();
        self.scroller.set_pressed(false);
        self.deadline_ms = None;
    }

    pub fn apply_control(&mut self, control: ControlEvent) {
        match control.clamped() {
            ControlEvent::Friction(v) => self.scroller.set_friction(v),
            ControlEvent::Damping(v) => self.scroller.set_damping(v),
        }
    }

    /// Re-derives the pending deadline from the engine's armed state.
    pub fn sync_timer(&mut self, now_ms: u64) {
        self.deadline_ms = if self.scroller.is_armed() {
            Some(now_ms.saturating_add(self.scroller.period_ms()))
        } else {
            None
        };
    }

    /// Fires the pending tick if it is due.
    ///
    /// Returns `None` when nothing is pending or the deadline is still ahead.
    pub fn tick(&mut self, now_ms: u64) -> Option<TickReport> {
        let due = self.deadline_ms?;
        if now_ms < due {
            return None;
        }
        if now_ms > due {
            klog!(trace, due, now_ms, "Controller::tick: late tick");
        }

        let pointer = self.pointer;
        let report = self.scroller.tick(&mut self.viewport, || pointer);
        self.sync_timer(now_ms);
        report
    }

    /// Fires ticks back to back, one period apart, until the engine goes idle or `max_ticks`
    /// have run. Returns the number of ticks fired and the final clock value.
    ///
    /// Useful for headless simulation and tests; interactive hosts call `tick` from their loop.
    pub fn run_until_idle(&mut self, max_ticks: usize) -> (usize, u64) {
        let mut fired = 0usize;
        let mut now_ms = 0u64;
        while let Some(due) = self.deadline_ms {
            if fired >= max_ticks {
                break;
            }
            now_ms = due;
            if self.tick(now_ms).is_some() {
                fired += 1;
            }
        }
        (fired, now_ms)
    }
}
