// Example: drag, release, and let the engine decay against a scrollbar.
use kinetic::{Point, ScrollBar, ScrollRange, Scroller, ScrollerOptions, Viewport};

fn main() -> Result<(), kinetic::ConfigError> {
    let opts = ScrollerOptions::default()
        .with_on_scroll_finished(Some(|| println!("scroll finished")));
    let mut s = Scroller::new(opts)?;
    let mut bar = ScrollBar::new(ScrollRange::up_to(1_200.0)?, 1_000.0);

    // A quick leftward drag: the pointer moves 30px per tick.
    s.press();
    for x in [600.0, 570.0, 540.0, 510.0] {
        s.tick(&mut bar, || Point::new(x, 0.0));
    }
    s.release();
    println!("released: offset={:.1} speed={:.1}", bar.offset(), s.speed());

    let mut n = 0u32;
    while let Some(r) = s.tick(&mut bar, || Point::default()) {
        n += 1;
        if r.bounced.is_some() || n % 5 == 0 {
            println!(
                "tick {n}: offset={:.1} speed={:.1} bounced={:?}",
                bar.offset(),
                r.speed,
                r.bounced
            );
        }
    }
    println!("idle after {n} ticks at offset {:.1}", bar.offset());
    Ok(())
}
