//! Follow pointer — the circle chases a scripted pointer while it is near and
//! falls back to patrolling when it wanders off.

use std::time::Duration;

use soulpher::prelude::*;

/// Pointer sweeps a wide ellipse around the patrol square.
fn pointer_at(t: f32) -> Vec2 {
    Vec2::new(375.0 + 350.0 * (t * 0.4).cos(), 150.0 + 120.0 * (t * 0.4).sin())
}

fn main() {
    env_logger::init();

    let config = DemoConfig::from_args().or_exit();
    let mut surface = config.open_surface().or_exit();
    let mut steering = config.steering();
    let mut time = Time::new();

    let mut scene = Scene::new();
    let circle = scene.spawn("Circle");
    {
        let circle = circle.borrow();
        if let Some(shape) = circle.shape() {
            let mut shape = shape.borrow_mut();
            shape.create_shape(ShapeKind::Circle);
            shape.set_fill_color(Color::YELLOW);
        }
        if let Some(transform) = circle.transform() {
            transform.borrow_mut().set_position(Vec2::new(600.0, 100.0));
        }
    }

    let step = Duration::from_secs_f32(config.step_secs());
    let mut last_mode = None;
    for _ in 0..config.frames {
        time.advance(step);
        let pointer = pointer_at(time.elapsed_secs());

        let Some(transform) = circle.borrow().transform() else {
            break;
        };
        let mode = steering.steer(&mut transform.borrow_mut(), Some(pointer), time.delta_secs());
        if last_mode != Some(mode) {
            log::info!(
                "t={:.2}s {:?}: circle at {}, pointer at {}",
                time.elapsed_secs(),
                mode,
                transform.borrow().position,
                pointer
            );
            last_mode = Some(mode);
        }

        scene.update(time.delta_secs());
        scene.render(&mut surface);
    }

    log::info!("{} frames presented", surface.frames_presented());
}
