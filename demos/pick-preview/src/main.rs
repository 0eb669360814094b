//! Camera projection walkthrough
//!
//! Builds an orbiting camera, projects the corners of a unit cube into the
//! viewport, then casts picking rays back through a few window positions.
//!
//! Usage: cargo run -p pick-preview [width height]
//! Set RUST_LOG=info (or trace) to see the output.

use clipspace::prelude::*;

const DEFAULT_SIZE: (f32, f32) = (800.0, 600.0);

fn viewport_size() -> (f32, f32) {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => DEFAULT_SIZE,
        [w, h] => match (w.parse::<f32>(), h.parse::<f32>()) {
            (Ok(w), Ok(h)) if w > 0.0 && h > 0.0 => (w, h),
            _ => {
                log::warn!("Invalid viewport size {:?} x {:?}, using {:?}", w, h, DEFAULT_SIZE);
                DEFAULT_SIZE
            }
        },
        _ => {
            log::warn!("Expected `width height`, using {:?}", DEFAULT_SIZE);
            DEFAULT_SIZE
        }
    }
}

fn main() {
    env_logger::init();

    let (width, height) = viewport_size();
    let viewport = Vec4::viewport(0.0, 0.0, width, height);

    let mut model_view = Mat4::look_at(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO, Vec3::Y);
    model_view.rotate_y(degrees_to_radians(25.0));
    let projection = Mat4::perspective(degrees_to_radians(60.0), width / height, 0.1, 100.0);

    log::info!("Viewport {}x{}", width, height);

    for corner in 0..8u32 {
        let point = Vec3::new(
            if corner & 1 == 0 { -0.5 } else { 0.5 },
            if corner & 2 == 0 { -0.5 } else { 0.5 },
            if corner & 4 == 0 { -0.5 } else { 0.5 },
        );
        match project(point, &model_view, &projection, viewport) {
            Ok(window) => log::info!(
                "corner {:?} -> window ({:.1}, {:.1}) depth {:.4}",
                point.values,
                window.x(),
                window.y(),
                window.z()
            ),
            Err(e) => log::warn!("corner {:?}: {}", point.values, e),
        }
    }

    let picks = [
        Vec2::new(width * 0.5, height * 0.5),
        Vec2::new(width * 0.25, height * 0.75),
        Vec2::new(width - 1.0, 0.0),
    ];
    for pick in picks {
        match Ray::from_viewport(pick, &model_view, &projection, viewport) {
            Ok(ray) => log::info!(
                "pick ({:.1}, {:.1}) -> origin {:?} direction {:?}, {:.3} from cube center",
                pick.x(),
                pick.y(),
                ray.origin.values,
                ray.direction.values,
                ray.distance_to_point(Vec3::ZERO)
            ),
            Err(e) => log::warn!("pick ({:.1}, {:.1}): {}", pick.x(), pick.y(), e),
        }
    }

    // A flat projection cannot be inverted; the failure is reported, not hidden.
    let flat = Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0));
    let mut out = Vec3::ZERO;
    if !unproject_into(Vec3::new(width * 0.5, height * 0.5, 0.5), &model_view, &flat, viewport, &mut out) {
        log::info!("flat projection: no unprojection, output left at {:?}", out.values);
    }
}
