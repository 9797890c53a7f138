//! Swipe the pointer across a strand at a random height and print the
//! strand a few frames later as SVG.
//!
//! Run with `RUST_LOG=debug` to see release events.

use std::rc::Rc;

use rand::distributions::{Distribution, Uniform};

use kurbo::Point;

use spaghetti::{HitCallback, MouseTracker, SpringSettings, Strand};

fn main() {
    env_logger::init();
    let mut rng = rand::thread_rng();
    let on_hit: HitCallback = Rc::new(|| eprintln!("pluck!"));
    let mut strand = Strand::new(
        Point::new(50.0, 250.0),
        Point::new(450.0, 250.0),
        17,
        SpringSettings::default(),
        Some(on_hit),
    );
    let mut mouse = MouseTracker::new();
    let y0 = Uniform::from(150.0..240.0).sample(&mut rng);
    mouse.move_to(Point::new(250.0, y0));
    mouse.press();
    for i in 0..30 {
        mouse.move_to(Point::new(250.0, y0 + 6.0 * i as f64));
        strand.render(&mouse);
    }
    mouse.lift();
    mouse.settle();
    const FRAMES: usize = 12;
    for _ in 0..FRAMES {
        strand.render(&mouse);
    }
    let path = strand.to_bez_path();
    println!(
        r##"<!DOCTYPE html>
    <html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        path.to_svg()
    );
    for v in strand.vertices() {
        let pt = v.current();
        println!(
            r#"      <circle cx="{}" cy="{}" r="3" fill="blue" />"#,
            pt.x, pt.y
        )
    }
    println!(
        r#"    </svg>
    </body>
    </html>"#
    );
}
