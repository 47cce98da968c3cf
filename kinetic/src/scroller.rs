use alloc::sync::Arc;

use crate::{
    ConfigError, Direction, Edge, Phase, Point, ScrollSnapshot, ScrollerOptions, TickReport,
    Viewport,
};

/// Weight of the newest drag sample in the low-pass speed filter.
const SPEED_SMOOTHING: f64 = 0.2;

/// A headless kinetic scrolling engine for one axis.
///
/// The engine owns the physics state and a one-shot "tick pending" flag. It does not own a
/// clock: the host (or `kinetic-adapter`) fires [`Scroller::tick`] one period after the tick was
/// armed, and keeps firing while the returned report says `rearmed`.
///
/// Typical wiring:
/// - pointer down: [`Scroller::press`]
/// - pointer up: [`Scroller::release`]
/// - timer: [`Scroller::tick`] with the viewport and a pointer sampler
#[derive(Clone, Debug)]
pub struct Scroller {
    options: ScrollerOptions,
    last_pointer: Option<Point>,
    direction: Option<Direction>,
    speed: f64,
    pressed: bool,
    armed: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::from_valid(ScrollerOptions::default())
    }
}

impl Scroller {
    /// Creates an idle scroller. Fails if the options violate an engine precondition.
    pub fn new(options: ScrollerOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        klog!(
            debug,
            friction = options.friction,
            damping = options.damping,
            period_ms = options.period_ms,
            "Scroller::new"
        );
        Ok(Self::from_valid(options))
    }

    fn from_valid(options: ScrollerOptions) -> Self {
        Self {
            options,
            last_pointer: None,
            direction: None,
            speed: 0.0,
            pressed: false,
            armed: false,
        }
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    /// Replaces the options. Motion state is kept; new values apply from the next tick.
    ///
    /// On error the current options are left untouched.
    pub fn set_options(&mut self, options: ScrollerOptions) -> Result<(), ConfigError> {
        options.validate()?;
        self.options = options;
        klog!(
            trace,
            friction = self.options.friction,
            damping = self.options.damping,
            period_ms = self.options.period_ms,
            "Scroller::set_options"
        );
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut ScrollerOptions),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_speed_changed(
        &mut self,
        on_speed_changed: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) {
        self.options.on_speed_changed = on_speed_changed.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_scroll_finished(
        &mut self,
        on_scroll_finished: Option<impl Fn() + Send + Sync + 'static>,
    ) {
        self.options.on_scroll_finished = on_scroll_finished.map(|f| Arc::new(f) as _);
    }

    /// Sets friction from an integer control value. The conversion to `f64` is exact.
    pub fn set_friction(&mut self, friction: u32) {
        self.options.friction = f64::from(friction);
    }

    /// Sets damping from an integer control value. The conversion to `f64` is exact.
    ///
    /// Zero would turn every bounce into a division by zero, so it is raised to 1 (no loss).
    pub fn set_damping(&mut self, damping: u32) {
        if damping == 0 {
            klog!(warn, "Scroller::set_damping: damping 0 raised to 1");
        }
        self.options.damping = f64::from(damping.max(1));
    }

    pub fn friction(&self) -> f64 {
        self.options.friction
    }

    pub fn damping(&self) -> f64 {
        self.options.damping
    }

    pub fn period_ms(&self) -> u64 {
        self.options.period_ms
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a tick is pending.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn phase(&self) -> Phase {
        if self.pressed {
            Phase::Dragging
        } else if self.armed {
            Phase::Decaying
        } else {
            Phase::Idle
        }
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            phase: self.phase(),
            last_pointer: self.last_pointer,
            direction: self.direction,
            speed: self.speed,
            friction: self.options.friction,
            damping: self.options.damping,
            pressed: self.pressed,
            armed: self.armed,
        }
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Pointer down: drops any motion in flight and starts tracking the drag.
    pub fn press(&mut self) {
        klog!(debug, "Scroller::press");
        self.reset();
        self.set_pressed(true);
        self.start();
    }

    /// Pointer up: the pending tick continues as a decay step.
    pub fn release(&mut self) {
        klog!(debug, speed = self.speed, "Scroller::release");
        self.set_pressed(false);
    }

    /// Clears pointer tracking and motion, and cancels the pending tick.
    pub fn reset(&mut self) {
        self.last_pointer = None;
        self.direction = None;
        self.speed = 0.0;
        self.armed = false;
    }

    /// Arms a tick, due one period from now. Arming twice still leaves a single pending tick.
    pub fn start(&mut self) {
        self.armed = true;
    }

    /// Fires the pending tick.
    ///
    /// `pointer` is sampled only while dragging, before the viewport offset is read.
    ///
    /// Returns `None` when no tick is armed (the engine is idle).
    pub fn tick<V: Viewport + ?Sized>(
        &mut self,
        viewport: &mut V,
        pointer: impl FnOnce() -> Point,
    ) -> Option<TickReport> {
        if !self.armed {
            return None;
        }
        self.armed = false;

        let report = if self.pressed {
            self.drag_step(viewport, pointer())
        } else {
            self.decay_step(viewport)
        };

        if let Some(cb) = &self.options.on_speed_changed {
            cb(report.speed);
        }
        if report.finished {
            klog!(debug, "Scroller: scroll finished");
            if let Some(cb) = &self.options.on_scroll_finished {
                cb();
            }
        }
        Some(report)
    }

    fn drag_step<V: Viewport + ?Sized>(&mut self, viewport: &mut V, p: Point) -> TickReport {
        let x0 = viewport.offset();
        let mut offset = None;

        if let Some(last) = self.last_pointer {
            let delta = last.x - p.x;
            let magnitude = if delta < 0.0 { -delta } else { delta };
            self.direction = Some(Direction::from_delta(delta));
            self.speed = (1.0 - SPEED_SMOOTHING) * self.speed
                + SPEED_SMOOTHING * magnitude / self.options.period_secs();
            let new_x = x0 + delta;
            viewport.set_offset(new_x);
            offset = Some(new_x);
        }
        self.last_pointer = Some(p);
        self.armed = true;

        klog!(trace, x = p.x, offset = x0, speed = self.speed, "Scroller: drag tick");
        TickReport {
            phase: Phase::Dragging,
            offset,
            speed: self.speed,
            direction: self.direction,
            bounced: None,
            rearmed: true,
            finished: false,
        }
    }

    fn decay_step<V: Viewport + ?Sized>(&mut self, viewport: &mut V) -> TickReport {
        let period = self.options.period_secs();
        let x0 = viewport.offset();
        let sign = self.direction.map_or(0.0, Direction::signum);

        let mut new_x = x0 + sign * self.speed * period;
        self.speed -= self.options.friction * period;

        let (min, max) = (viewport.min(), viewport.max());
        if min > max {
            klog!(warn, min, max, "Scroller: viewport reports min > max");
        }

        let mut bounced = None;
        if new_x > max {
            new_x = 2.0 * max - new_x;
            self.direction = Some(Direction::Backward);
            self.speed /= self.options.damping;
            bounced = Some(Edge::Max);
        } else if new_x < min {
            new_x = self.options.edge_reflection.reflect_min(min, new_x);
            self.direction = Some(Direction::Forward);
            self.speed /= self.options.damping;
            bounced = Some(Edge::Min);
        }

        viewport.set_offset(new_x);

        let rearmed = self.speed > 0.0;
        if rearmed {
            self.armed = true;
        } else {
            self.speed = 0.0;
        }

        klog!(
            trace,
            offset = new_x,
            speed = self.speed,
            bounced = bounced.is_some(),
            "Scroller: decay tick"
        );
        TickReport {
            phase: Phase::Decaying,
            offset: Some(new_x),
            speed: self.speed,
            direction: self.direction,
            bounced,
            rearmed,
            finished: !rearmed,
        }
    }
}
