//! Shapes — one actor per primitive kind, drawn once, with the recorded
//! geometry dumped to the log.

use soulpher::prelude::*;

fn main() {
    env_logger::init();

    let config = DemoConfig::from_args().or_exit();
    let mut surface = config.open_surface().or_exit();
    let mut scene = Scene::new();

    let layout = [
        (ShapeKind::Circle, Color::YELLOW, Vec2::new(150.0, 150.0), 0.0),
        (ShapeKind::Rectangle, Color::RED, Vec2::new(350.0, 150.0), 30.0),
        (ShapeKind::Triangle, Color::CYAN, Vec2::new(550.0, 150.0), 0.0),
        (ShapeKind::Empty, Color::WHITE, Vec2::new(700.0, 150.0), 0.0),
    ];

    for (kind, color, position, rotation) in layout {
        let actor = scene.spawn(&kind.to_string());
        let actor = actor.borrow();
        if let Some(shape) = actor.shape() {
            let mut shape = shape.borrow_mut();
            shape.create_shape(kind);
            shape.set_fill_color(color);
        }
        if let Some(transform) = actor.transform() {
            let mut transform = transform.borrow_mut();
            transform.set_position(position);
            transform.set_rotation(rotation);
        }
    }

    scene.update(0.0);
    scene.render(&mut surface);

    for call in surface.calls() {
        let bounds = call.vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), v| (lo.min(Vec2::from(*v)), hi.max(Vec2::from(*v))),
        );
        log::info!(
            "{:?} at {}: {} vertices, {} triangles, bounds {} .. {}",
            call.primitive.geometry(),
            call.primitive.position(),
            call.vertices.len(),
            call.indices.len() / 3,
            bounds.0,
            bounds.1
        );
    }
    log::info!("{} actors, {} draw calls", scene.len(), surface.calls().len());
}
