//! # Scene — A Minimal Frame Driver
//!
//! [`Scene`] owns a list of actors and pushes them through one frame at a
//! time: `update` for every actor, then `render` onto a [`Surface`]. Actors
//! are held as [`Shared`] handles so game code can keep its own handle to an
//! actor it wants to steer.
//!
//! ```ignore
//! let mut scene = Scene::new();
//! let circle = scene.spawn("Circle");
//! // every frame:
//! scene.update(time.delta_secs());
//! scene.render(&mut surface);
//! ```

use crate::ecs::{Actor, Entity, Shared, shared};
use crate::render2d::Surface;

/// Ordered collection of actors driven once per frame.
#[derive(Debug, Default)]
pub struct Scene {
    actors: Vec<Shared<Actor>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an [`Actor::new`] with the given name and add it to the scene.
    pub fn spawn(&mut self, name: &str) -> Shared<Actor> {
        self.insert(Actor::new(name))
    }

    /// Add an already built actor.
    pub fn insert(&mut self, actor: Actor) -> Shared<Actor> {
        let handle = shared(actor);
        self.actors.push(handle.clone());
        handle
    }

    /// First actor with the given name. Names are not required to be unique.
    pub fn get(&self, name: &str) -> Option<Shared<Actor>> {
        self.actors
            .iter()
            .find(|actor| actor.borrow().name() == name)
            .cloned()
    }

    /// Remove the first actor with the given name, calling its `destroy`
    /// hook. Returns `false` if no actor matched.
    ///
    /// Handles held elsewhere keep the actor alive after removal.
    pub fn despawn(&mut self, name: &str) -> bool {
        let Some(index) = self
            .actors
            .iter()
            .position(|actor| actor.borrow().name() == name)
        else {
            return false;
        };
        let actor = self.actors.remove(index);
        actor.borrow_mut().destroy();
        true
    }

    /// Despawn every actor.
    pub fn clear(&mut self) {
        for actor in self.actors.drain(..) {
            actor.borrow_mut().destroy();
        }
    }

    /// Update every actor in spawn order.
    pub fn update(&mut self, delta_time: f32) {
        for actor in &self.actors {
            actor.borrow_mut().update(delta_time);
        }
    }

    /// Clear the surface, render every actor in spawn order, present.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        for actor in &self.actors {
            actor.borrow().render(surface);
        }
        surface.present();
    }

    pub fn actors(&self) -> &[Shared<Actor>] {
        &self.actors
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::math::Vec2;
    use crate::render2d::{Color, FrameRecorder, ShapeKind};

    fn spawn_circle(scene: &mut Scene, name: &str, color: Color) -> Shared<Actor> {
        let actor = scene.spawn(name);
        {
            let actor = actor.borrow();
            let shape = actor.shape().unwrap();
            let mut shape = shape.borrow_mut();
            shape.create_shape(ShapeKind::Circle);
            shape.set_fill_color(color);
        }
        actor
    }

    #[test]
    fn empty_scene_draws_nothing() {
        let scene = Scene::new();
        let mut recorder = FrameRecorder::new();
        scene.render(&mut recorder);
        assert!(recorder.calls().is_empty());
        assert_eq!(recorder.frames_presented(), 1);
    }

    #[test]
    fn frame_updates_then_renders_in_spawn_order() {
        let mut scene = Scene::new();
        let circle = spawn_circle(&mut scene, "Circle", Color::YELLOW);
        spawn_circle(&mut scene, "Triangle", Color::CYAN);

        circle
            .borrow()
            .transform()
            .unwrap()
            .borrow_mut()
            .set_position(Vec2::new(600.0, 100.0));

        let mut recorder = FrameRecorder::new();
        scene.update(0.016);
        scene.render(&mut recorder);

        let calls = recorder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].primitive.fill_color(), Color::YELLOW);
        assert_eq!(calls[0].primitive.position(), Vec2::new(600.0, 100.0));
        assert_eq!(calls[1].primitive.fill_color(), Color::CYAN);
    }

    #[test]
    fn render_clears_previous_frame() {
        let mut scene = Scene::new();
        spawn_circle(&mut scene, "Circle", Color::RED);
        let mut recorder = FrameRecorder::new();
        scene.render(&mut recorder);
        scene.render(&mut recorder);
        assert_eq!(recorder.calls().len(), 1);
        assert_eq!(recorder.frames_presented(), 2);
    }

    #[test]
    fn get_and_despawn_by_name() {
        let mut scene = Scene::new();
        let first = scene.spawn("twin");
        scene.spawn("twin");
        assert_eq!(scene.len(), 2);
        assert!(Rc::ptr_eq(&scene.get("twin").unwrap(), &first));

        assert!(scene.despawn("twin"));
        assert_eq!(scene.len(), 1);
        assert!(!Rc::ptr_eq(&scene.get("twin").unwrap(), &first));
        assert!(!scene.despawn("ghost"));

        // Our handle outlives the scene's.
        assert_eq!(first.borrow().name(), "twin");
    }

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::new();
        scene.spawn("a");
        scene.insert(Actor::bare("b"));
        scene.clear();
        assert!(scene.is_empty());
    }
}
