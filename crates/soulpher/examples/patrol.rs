//! Patrol — a yellow circle loops over the configured waypoints, headless.
//!
//! Pass a JSON config path as the first argument to override the defaults.
//! Run with `RUST_LOG=info` to see the positions.

use std::time::Duration;

use soulpher::prelude::*;

fn main() {
    env_logger::init();

    let config = DemoConfig::from_args().or_exit();
    let mut surface = config.open_surface().or_exit();
    let mut route = config.patrol_route();
    let mut time = Time::new();

    let mut scene = Scene::new();
    let circle = spawn_shape(
        &mut scene,
        "Circle",
        ShapeKind::Circle,
        Color::YELLOW,
        Vec2::new(600.0, 100.0),
    );
    spawn_shape(
        &mut scene,
        "Triangle",
        ShapeKind::Triangle,
        Color::CYAN,
        Vec2::new(350.0, 120.0),
    );

    let step = Duration::from_secs_f32(config.step_secs());
    for _ in 0..config.frames {
        time.advance(step);

        if let Some(transform) = circle.borrow().transform() {
            route.step(&mut transform.borrow_mut(), time.delta_secs());
        }

        scene.update(time.delta_secs());
        scene.render(&mut surface);

        if time.frame_count() % 60 == 0 {
            if let Some(transform) = circle.borrow().transform() {
                log::info!(
                    "t={:.1}s circle at {} heading for waypoint {}",
                    time.elapsed_secs(),
                    transform.borrow().position,
                    route.current_index()
                );
            }
        }
    }

    log::info!(
        "{} frames presented, {} draw calls in the last one",
        surface.frames_presented(),
        surface.calls().len()
    );
}

fn spawn_shape(
    scene: &mut Scene,
    name: &str,
    kind: ShapeKind,
    color: Color,
    at: Vec2,
) -> Shared<Actor> {
    let actor = scene.spawn(name);
    {
        let actor = actor.borrow();
        if let Some(shape) = actor.shape() {
            let mut shape = shape.borrow_mut();
            shape.create_shape(kind);
            shape.set_fill_color(color);
        }
        if let Some(transform) = actor.transform() {
            transform.borrow_mut().set_position(at);
        }
    }
    actor
}
