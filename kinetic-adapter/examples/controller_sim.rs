// Example: a host loop that feeds pointer events into a controller at ~60fps.
use kinetic::{Point, ScrollBar, ScrollRange, Scroller, Viewport};
use kinetic_adapter::{ControlEvent, Controller, PointerEvent, SpeedLabel};

fn main() -> Result<(), kinetic::ConfigError> {
    let bar = ScrollBar::new(ScrollRange::up_to(2_000.0)?, 200.0).with_clamping(true);
    let mut c = Controller::new(Scroller::default(), bar);
    c.apply_control(ControlEvent::Damping(2));

    let mut now_ms = 0u64;
    c.handle(PointerEvent::Pressed(Point::new(800.0, 300.0)), now_ms);

    // Drag left for ~100ms, 8px per millisecond.
    for step in 1..=100u64 {
        now_ms = step;
        let x = 800.0 - 8.0 * step as f64;
        c.handle(PointerEvent::Moved(Point::new(x, 300.0)), now_ms);
        c.tick(now_ms);
    }
    c.handle(PointerEvent::Released, now_ms);

    // Frame callbacks every 16ms; each fires at most one engine tick.
    while c.is_animating() {
        now_ms += 16;
        if let Some(r) = c.tick(now_ms) {
            println!(
                "t={now_ms}ms offset={:.1} {}",
                c.viewport().offset(),
                SpeedLabel(r.speed)
            );
        }
    }
    Ok(())
}
