use kinetic::{TickReport, Viewport};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, sleep_until};

use crate::{ControlEvent, Controller, PointerEvent};

/// An event delivered to [`EventLoop::run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Control(ControlEvent),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<ControlEvent> for InputEvent {
    fn from(event: ControlEvent) -> Self {
        Self::Control(event)
    }
}

/// Drives a [`Controller`] from an input channel and a `tokio` one-shot timer.
///
/// Everything runs on the calling task: input handling and ticks are interleaved by
/// `tokio::select!`, so they never overlap. The timer is re-created from the controller's single
/// deadline on every iteration.
///
/// `run` returns once the input channel is closed and the engine is idle, so a fling started
/// before the host shut down still settles.
pub struct EventLoop<V> {
    controller: Controller<V>,
    origin: Instant,
    reports: Option<mpsc::UnboundedSender<TickReport>>,
}

impl<V: Viewport> EventLoop<V> {
    pub fn new(controller: Controller<V>) -> Self {
        Self {
            controller,
            origin: Instant::now(),
            reports: None,
        }
    }

    /// Forwards every fired tick's report to `reports`.
    pub fn with_reports(mut self, reports: mpsc::UnboundedSender<TickReport>) -> Self {
        self.reports = Some(reports);
        self
    }

    pub fn controller(&self) -> &Controller<V> {
        &self.controller
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn instant_at(&self, ms: u64) -> Instant {
        self.origin + Duration::from_millis(ms)
    }

    fn dispatch(&mut self, event: InputEvent) {
        let now_ms = self.now_ms();
        match event {
            InputEvent::Pointer(event) => self.controller.handle(event, now_ms),
            InputEvent::Control(control) => self.controller.apply_control(control),
        }
    }

    fn fire(&mut self) {
        let now_ms = self.now_ms();
        let Some(report) = self.controller.tick(now_ms) else {
            return;
        };
        let receiver_gone = self
            .reports
            .as_ref()
            .is_some_and(|tx| tx.send(report).is_err());
        if receiver_gone {
            klog!(debug, "EventLoop: report receiver dropped");
            self.reports = None;
        }
    }

    /// Runs until `input` is closed and no tick is pending, then hands the controller back.
    pub async fn run(mut self, mut input: mpsc::UnboundedReceiver<InputEvent>) -> Controller<V> {
        let mut input_open = true;
        loop {
            let deadline = self.controller.next_deadline_ms();
            if !input_open && deadline.is_none() {
                break;
            }
            let wake = self.instant_at(deadline.unwrap_or(0));

            tokio::select! {
                biased;

                event = input.recv(), if input_open => match event {
                    Some(event) => self.dispatch(event),
                    None => {
                        klog!(debug, "EventLoop: input closed");
                        input_open = false;
                    }
                },
                _ = sleep_until(wake), if deadline.is_some() => self.fire(),
            }
        }
        klog!(debug, "EventLoop: idle, exiting");
        self.controller
    }
}
