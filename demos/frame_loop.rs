//! Drives a button through a simulated 60 Hz frame loop and logs each frame.
//!
//! Run with `RUST_LOG=trace` to see the compositor's own logging as well.

use std::time::{Duration, Instant};

use inkstack::prelude::*;

const FRAME: Duration = Duration::from_micros(16_667);

fn main() {
    env_logger::init();

    let mut button = Surface::new(SurfaceStyle::button(Color::from_hex(0x3F51B5)));
    let constraints = Constraints::new(88.0, 36.0, 400.0, 100.0);

    // Label stand-in: a bar as wide as a short caption
    let mut label = |rec: &mut Recorder, c: Constraints| {
        let size = c.constrain(Size::new(64.0, 14.0));
        rec.fill(Rect::from_size(size), Color::WHITE);
        size
    };

    let start = Instant::now();
    let press_at = start + FRAME * 3;
    let release_at = start + FRAME * 12;
    let mut pressed = false;
    let mut released = false;

    for i in 0..60u32 {
        let now = start + FRAME * i;

        if !pressed && now >= press_at {
            button.press(Point::new(20.0, 18.0), now);
            pressed = true;
        }
        if !released && now >= release_at {
            button.release(now);
            released = true;
        }

        if released && !button.needs_frame() {
            log::info!("frame {i}: idle, loop can sleep");
            break;
        }

        let cx = FrameContext::new(constraints, now);
        let frame = button.compose(&cx, &mut label);
        let flat = match frame.flatten() {
            Ok(flat) => flat,
            Err(err) => {
                log::error!("frame {i}: {err}");
                return;
            }
        };

        let ripple_alpha = flat
            .quads
            .iter()
            .filter(|quad| quad.clips.len() > 1)
            .map(|quad| quad.color.a)
            .fold(0.0f32, f32::max);
        log::info!(
            "frame {i}: {}x{} surface, {} quads, {} ripples, ink alpha {:.3}",
            frame.size.width,
            frame.size.height,
            flat.quads.len(),
            frame.ripples,
            ripple_alpha
        );

        let pruned = button.end_frame(now);
        if pruned > 0 {
            log::info!("frame {i}: pruned {pruned} presses");
        }
    }
}
