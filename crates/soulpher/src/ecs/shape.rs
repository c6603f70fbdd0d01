//! The [`Shape`] component: owns at most one drawable [`Primitive`].

use super::component::{Component, ComponentKind};
use crate::math::{Pose, Vec2};
use crate::render2d::{Color, Primitive, ShapeKind, Surface};

/// Visual component wrapping a single [`Primitive`].
///
/// The primitive's pose is a copy refreshed by the owning actor from its
/// [`Transform`](super::Transform); the shape never computes a pose itself.
/// Every setter is a silent no-op while the shape is empty.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    kind: ShapeKind,
    primitive: Option<Primitive>,
}

impl Shape {
    /// An empty shape. Draws nothing until [`create_shape`](Shape::create_shape).
    pub fn new() -> Self {
        Self::default()
    }

    /// A shape that immediately builds a primitive of `kind`.
    pub fn with_kind(kind: ShapeKind) -> Self {
        let mut shape = Self::new();
        shape.create_shape(kind);
        shape
    }

    /// Build a new primitive of `kind`, discarding the current one.
    ///
    /// Returns the new primitive, or `None` for [`ShapeKind::Empty`].
    pub fn create_shape(&mut self, kind: ShapeKind) -> Option<&mut Primitive> {
        if self.primitive.is_some() {
            log::debug!("replacing {} primitive with {}", self.kind, kind);
        }
        self.kind = kind;
        self.primitive = Primitive::from_kind(kind);
        self.primitive.as_mut()
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn primitive(&self) -> Option<&Primitive> {
        self.primitive.as_ref()
    }

    pub fn primitive_mut(&mut self) -> Option<&mut Primitive> {
        self.primitive.as_mut()
    }

    pub fn set_position(&mut self, position: Vec2) {
        if let Some(primitive) = &mut self.primitive {
            primitive.set_position(position);
        }
    }

    /// Set the rotation in degrees.
    pub fn set_rotation(&mut self, degrees: f32) {
        if let Some(primitive) = &mut self.primitive {
            primitive.set_rotation(degrees);
        }
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        if let Some(primitive) = &mut self.primitive {
            primitive.set_scale(scale);
        }
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if let Some(primitive) = &mut self.primitive {
            primitive.set_fill_color(color);
        }
    }

    /// Copy position, rotation and scale onto the primitive.
    pub fn apply_pose(&mut self, pose: Pose) {
        self.set_position(pose.position);
        self.set_rotation(pose.rotation);
        self.set_scale(pose.scale);
    }
}

impl Component for Shape {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Shape
    }

    fn render(&self, surface: &mut dyn Surface) {
        if let Some(primitive) = &self.primitive {
            surface.draw(primitive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render2d::{FrameRecorder, Geometry};

    #[test]
    fn new_shape_is_empty() {
        let shape = Shape::new();
        assert_eq!(shape.shape_kind(), ShapeKind::Empty);
        assert!(shape.primitive().is_none());
        assert_eq!(shape.kind(), ComponentKind::Shape);
    }

    #[test]
    fn create_shape_replaces_previous() {
        let mut shape = Shape::new();
        shape.create_shape(ShapeKind::Circle).unwrap().set_fill_color(Color::YELLOW);
        assert_eq!(shape.primitive().unwrap().fill_color(), Color::YELLOW);

        shape.create_shape(ShapeKind::Rectangle);
        assert_eq!(shape.shape_kind(), ShapeKind::Rectangle);
        let primitive = shape.primitive().unwrap();
        assert!(matches!(primitive.geometry(), Geometry::Rectangle { .. }));
        // Fresh primitive, previous color is gone.
        assert_eq!(primitive.fill_color(), Color::WHITE);
    }

    #[test]
    fn create_empty_discards_primitive() {
        let mut shape = Shape::with_kind(ShapeKind::Triangle);
        assert!(shape.primitive().is_some());
        assert!(shape.create_shape(ShapeKind::Empty).is_none());
        assert!(shape.primitive().is_none());
    }

    #[test]
    fn setters_on_empty_shape_are_noops() {
        let mut shape = Shape::new();
        shape.set_position(Vec2::new(1.0, 1.0));
        shape.set_rotation(10.0);
        shape.set_scale(Vec2::splat(3.0));
        shape.set_fill_color(Color::RED);
        assert!(shape.primitive().is_none());
    }

    #[test]
    fn apply_pose_copies_all_fields() {
        let mut shape = Shape::with_kind(ShapeKind::Circle);
        let pose = Pose {
            position: Vec2::new(600.0, 100.0),
            rotation: 33.0,
            scale: Vec2::new(1.5, 0.5),
        };
        shape.apply_pose(pose);
        assert_eq!(shape.primitive().unwrap().pose(), pose);
    }

    #[test]
    fn render_draws_only_when_present() {
        let mut recorder = FrameRecorder::new();
        Shape::new().render(&mut recorder);
        assert!(recorder.calls().is_empty());

        Shape::with_kind(ShapeKind::Circle).render(&mut recorder);
        assert_eq!(recorder.calls().len(), 1);
    }
}
