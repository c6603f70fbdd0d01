//! # Actor — A Named Entity with a Shape and a Transform
//!
//! [`Actor::new`] builds the canonical configuration: an empty [`Shape`]
//! followed by an identity [`Transform`]. Each frame the actor copies the
//! transform onto the shape's primitive (`update`) and then draws every shape
//! it owns (`render`).
//!
//! ```ignore
//! let mut circle = Actor::new("Circle");
//! if let Some(shape) = circle.shape() {
//!     let mut shape = shape.borrow_mut();
//!     shape.create_shape(ShapeKind::Circle);
//!     shape.set_fill_color(Color::YELLOW);
//! }
//! circle.update(dt);
//! circle.render(&mut surface);
//! ```

use std::fmt;

use super::component::{Component, Components, Shared, shared};
use super::entity::{Entity, EntityId};
use super::shape::Shape;
use super::transform::Transform;
use crate::render2d::Surface;

/// Name given to actors built through [`Default`].
pub const DEFAULT_ACTOR_NAME: &str = "Actor";

pub struct Actor {
    id: EntityId,
    name: String,
    active: bool,
    components: Components,
}

impl Actor {
    /// An actor with a fresh empty [`Shape`] and identity [`Transform`]
    /// attached, in that order.
    pub fn new(name: impl Into<String>) -> Self {
        let mut actor = Self::bare(name);
        actor.add_component(shared(Shape::new()));
        actor.add_component(shared(Transform::new()));
        log::debug!("actor `{}` ({}) created", actor.name, actor.id);
        actor
    }

    /// An actor with no components at all.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::next(),
            name: name.into(),
            active: true,
            components: Components::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Inactive actors skip both `update` and `render`.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Shorthand for `get_component::<Transform>()`.
    pub fn transform(&self) -> Option<Shared<Transform>> {
        self.get_component::<Transform>()
    }

    /// Shorthand for `get_component::<Shape>()`.
    pub fn shape(&self) -> Option<Shared<Shape>> {
        self.get_component::<Shape>()
    }

    /// Explicit teardown hook.
    ///
    /// Components are released automatically when the last handle is
    /// dropped, so there is nothing to free here.
    pub fn destroy(&mut self) {
        log::debug!("actor `{}` ({}) destroyed", self.name, self.id);
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTOR_NAME)
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("active", &self.active)
            .field("components", &self.components)
            .finish()
    }
}

impl Entity for Actor {
    fn components(&self) -> &Components {
        &self.components
    }

    fn components_mut(&mut self) -> &mut Components {
        &mut self.components
    }

    /// Run component hooks, then mirror the transform onto the shape.
    ///
    /// An actor missing either component is left alone.
    fn update(&mut self, delta_time: f32) {
        if !self.active {
            return;
        }

        self.components.update_all(delta_time);

        if let (Some(transform), Some(shape)) = (self.transform(), self.shape()) {
            let pose = transform.borrow().pose();
            shape.borrow_mut().apply_pose(pose);
        }
    }

    /// Draw every [`Shape`] in insertion order. Other components are skipped.
    fn render(&self, surface: &mut dyn Surface) {
        if !self.active {
            return;
        }

        for shape in self.components.all_of::<Shape>() {
            shape.borrow().render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::ecs::component::ComponentKind;
    use crate::math::Vec2;
    use crate::render2d::{Color, FrameRecorder, ShapeKind};

    #[test]
    fn new_attaches_shape_then_transform() {
        let actor = Actor::new("Circle");
        assert_eq!(actor.name(), "Circle");
        assert_eq!(
            actor.component_kinds(),
            vec![ComponentKind::Shape, ComponentKind::Transform]
        );
        assert!(actor.transform().is_some());
        assert_eq!(actor.shape().unwrap().borrow().shape_kind(), ShapeKind::Empty);
    }

    #[test]
    fn default_name() {
        assert_eq!(Actor::default().name(), "Actor");
    }

    #[test]
    fn bare_actor_has_nothing() {
        let actor = Actor::bare("logic");
        assert!(actor.get_component::<Transform>().is_none());
        assert!(actor.get_component::<Shape>().is_none());

        let mut recorder = FrameRecorder::new();
        actor.render(&mut recorder);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn update_syncs_pose_onto_shape() {
        let mut actor = Actor::new("Triangle");
        actor.shape().unwrap().borrow_mut().create_shape(ShapeKind::Triangle);
        {
            let transform = actor.transform().unwrap();
            let mut t = transform.borrow_mut();
            t.set_position(Vec2::new(350.0, 120.0));
            t.set_rotation(90.0);
            t.set_scale(Vec2::new(2.0, 3.0));
        }

        actor.update(0.016);

        let shape = actor.shape().unwrap();
        let shape = shape.borrow();
        let primitive = shape.primitive().unwrap();
        assert_eq!(primitive.position(), Vec2::new(350.0, 120.0));
        assert_eq!(primitive.rotation(), 90.0);
        assert_eq!(primitive.scale(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn update_without_shape_is_silent() {
        let mut actor = Actor::bare("brain");
        actor.add_component(shared(Transform::from_xy(1.0, 1.0)));
        actor.update(1.0);
        assert_eq!(actor.transform().unwrap().borrow().position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn handle_kept_by_caller_stays_live() {
        let mut actor = Actor::bare("held");
        let transform = shared(Transform::new());
        actor.add_component(transform.clone());

        transform.borrow_mut().set_position(Vec2::new(7.0, 8.0));
        let found = actor.transform().unwrap();
        assert!(Rc::ptr_eq(&found, &transform));
        assert_eq!(found.borrow().position, Vec2::new(7.0, 8.0));

        drop(actor);
        assert_eq!(transform.borrow().position, Vec2::new(7.0, 8.0));
    }

    #[test]
    fn render_draws_shapes_in_insertion_order() {
        let mut actor = Actor::bare("layers");
        actor.add_component(shared(Shape::with_kind(ShapeKind::Rectangle)));
        actor.add_component(shared(Transform::new()));
        let top = shared(Shape::with_kind(ShapeKind::Circle));
        top.borrow_mut().set_fill_color(Color::CYAN);
        actor.add_component(top);
        actor.add_component(shared(Shape::new()));

        let mut recorder = FrameRecorder::new();
        actor.render(&mut recorder);

        let calls = recorder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].primitive.fill_color(), Color::WHITE);
        assert_eq!(calls[1].primitive.fill_color(), Color::CYAN);
    }

    #[test]
    fn update_uses_first_shape_only() {
        let mut actor = Actor::new("shadowed");
        actor.shape().unwrap().borrow_mut().create_shape(ShapeKind::Circle);
        let second = shared(Shape::with_kind(ShapeKind::Circle));
        actor.add_component(second.clone());
        actor.transform().unwrap().borrow_mut().set_position(Vec2::new(5.0, 5.0));

        actor.update(0.1);

        let first = actor.shape().unwrap();
        assert_eq!(first.borrow().primitive().unwrap().position(), Vec2::new(5.0, 5.0));
        assert_eq!(second.borrow().primitive().unwrap().position(), Vec2::ZERO);
    }

    #[test]
    fn inactive_actor_skips_frame() {
        let mut actor = Actor::new("sleeping");
        actor.shape().unwrap().borrow_mut().create_shape(ShapeKind::Circle);
        actor.transform().unwrap().borrow_mut().set_position(Vec2::new(9.0, 9.0));
        actor.set_active(false);

        actor.update(0.1);
        let mut recorder = FrameRecorder::new();
        actor.render(&mut recorder);

        assert!(recorder.calls().is_empty());
        let shape = actor.shape().unwrap();
        assert_eq!(shape.borrow().primitive().unwrap().position(), Vec2::ZERO);
    }

    #[test]
    fn destroy_leaves_components_reachable() {
        let mut actor = Actor::new("temp");
        actor.destroy();
        assert_eq!(actor.component_count(), 2);
    }
}
