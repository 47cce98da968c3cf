use crate::*;

use kinetic::{Phase, Point, ScrollBar, ScrollRange, Scroller, Viewport};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn controller(max: f64, offset: f64) -> Controller<ScrollBar> {
    let bar = ScrollBar::new(ScrollRange::up_to(max).unwrap(), offset);
    Controller::new(Scroller::default(), bar)
}

#[test]
fn controller_fires_ticks_on_deadlines() {
    let mut c = controller(10_000.0, 1000.0);
    assert!(!c.is_animating());
    assert_eq!(c.tick(0), None);

    c.handle(PointerEvent::Pressed(Point::new(500.0, 0.0)), 0);
    assert_eq!(c.next_deadline_ms(), Some(10));
    assert_eq!(c.tick(5), None);

    let first = c.tick(10).unwrap();
    assert_eq!(first.offset, None);
    assert_eq!(c.next_deadline_ms(), Some(20));

    c.handle(PointerEvent::Moved(Point::new(480.0, 0.0)), 12);
    let drag = c.tick(20).unwrap();
    assert_close(drag.speed, 400.0);
    assert_close(c.viewport().offset(), 1020.0);

    c.handle(PointerEvent::Released, 25);
    assert_eq!(c.phase(), Phase::Decaying);
    let decay = c.tick(30).unwrap();
    assert_eq!(decay.phase, Phase::Decaying);
    assert_close(c.viewport().offset(), 1024.0);

    let (fired, _) = c.run_until_idle(1000);
    assert!(fired >= 7);
    assert!(!c.is_animating());
    assert_eq!(c.phase(), Phase::Idle);
    assert_close(c.viewport().offset(), 1038.0);
}

#[test]
fn late_tick_does_not_queue_catch_up_ticks() {
    let mut c = controller(1000.0, 0.0);
    c.press(Point::new(0.0, 0.0), 0);

    assert!(c.tick(55).is_some());
    assert_eq!(c.next_deadline_ms(), Some(65));
    assert_eq!(c.tick(60), None);
    assert!(c.tick(65).is_some());
}

#[test]
fn press_replaces_the_pending_tick() {
    let mut c = controller(10_000.0, 5000.0);
    c.press(Point::new(100.0, 0.0), 0);
    c.tick(10).unwrap();
    c.handle(PointerEvent::Moved(Point::new(0.0, 0.0)), 15);
    c.tick(20).unwrap();
    c.release();
    c.tick(30).unwrap();
    assert!(c.scroller().speed() > 0.0);

    c.press(Point::new(40.0, 0.0), 33);
    assert_eq!(c.next_deadline_ms(), Some(43));
    assert_eq!(c.scroller().speed(), 0.0);
    assert_eq!(c.phase(), Phase::Dragging);
}

#[test]
fn cancel_stops_motion() {
    let mut c = controller(10_000.0, 5000.0);
    c.press(Point::new(100.0, 0.0), 0);
    c.tick(10).unwrap();
    c.cancel();
    assert!(!c.is_animating());
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.tick(20), None);
}

#[test]
fn sync_timer_follows_direct_engine_changes() {
    let mut c = controller(1000.0, 0.0);
    c.scroller_mut().start();
    assert!(!c.is_animating());
    c.sync_timer(100);
    assert_eq!(c.next_deadline_ms(), Some(110));

    c.scroller_mut().reset();
    assert_eq!(c.tick(110), None);
    assert!(!c.is_animating());
}

#[test]
fn control_events_are_clamped_to_the_recommended_ranges() {
    let mut c = controller(1000.0, 0.0);
    c.apply_control(ControlEvent::Friction(50_000));
    assert_eq!(c.scroller().friction(), 20_000.0);
    c.apply_control(ControlEvent::Damping(0));
    assert_eq!(c.scroller().damping(), 1.0);
    c.apply_control(ControlEvent::Damping(7));
    assert_eq!(c.scroller().damping(), 7.0);
    c.apply_control(ControlEvent::Friction(1200));
    assert_eq!(c.scroller().friction(), 1200.0);
}

#[test]
fn speed_label_formats_two_decimals() {
    assert_eq!(
        std::format!("{}", SpeedLabel(350.0)),
        "pixelsPerSecond: 350.00"
    );
    assert_eq!(
        std::format!("{}", SpeedLabel(3316.666_666)),
        "pixelsPerSecond: 3316.67"
    );
}

#[cfg(feature = "tokio")]
mod event_loop {
    use super::*;

    use std::vec::Vec;
    use tokio::sync::mpsc;
    use tokio::time::{Duration, sleep};

    #[tokio::test(start_paused = true)]
    async fn drag_and_fling_settle_after_input_closes() {
        let (tx, rx) = mpsc::unbounded_channel::<InputEvent>();
        let (report_tx, mut report_rx) = mpsc::unbounded_channel();

        let host = tokio::spawn(async move {
            tx.send(PointerEvent::Pressed(Point::new(500.0, 0.0)).into())
                .unwrap();
            sleep(Duration::from_millis(15)).await;
            tx.send(PointerEvent::Moved(Point::new(480.0, 0.0)).into())
                .unwrap();
            sleep(Duration::from_millis(10)).await;
            tx.send(PointerEvent::Released.into()).unwrap();
        });

        let c = EventLoop::new(controller(10_000.0, 1000.0))
            .with_reports(report_tx)
            .run(rx)
            .await;
        host.await.unwrap();

        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.is_animating());
        assert_close(c.viewport().offset(), 1038.0);

        let mut reports = Vec::new();
        while let Some(r) = report_rx.recv().await {
            reports.push(r);
        }
        let drags = reports
            .iter()
            .filter(|r| r.phase == Phase::Dragging)
            .count();
        assert_eq!(drags, 2);
        assert_eq!(reports.iter().filter(|r| r.finished).count(), 1);
        assert!(reports.last().unwrap().finished);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_input_with_idle_engine_returns_immediately() {
        let (tx, rx) = mpsc::unbounded_channel::<InputEvent>();
        tx.send(ControlEvent::Friction(50_000).into()).unwrap();
        tx.send(ControlEvent::Damping(4).into()).unwrap();
        drop(tx);

        let c = EventLoop::new(controller(1000.0, 10.0)).run(rx).await;
        assert_eq!(c.scroller().friction(), 20_000.0);
        assert_eq!(c.scroller().damping(), 4.0);
        assert_eq!(c.viewport().offset(), 10.0);
        assert_eq!(c.phase(), Phase::Idle);
    }
}
