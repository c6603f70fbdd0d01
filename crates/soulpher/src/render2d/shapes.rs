//! # Primitive — Drawable 2D Geometry
//!
//! A [`Primitive`] is a single drawable shape: a circle-like polygon or a
//! rectangle, a fill color, and a pose. [`Primitive::from_kind`] is the shape
//! factory used by the [`Shape`](crate::ecs::Shape) component.
//!
//! ```ignore
//! let mut circle = Primitive::from_kind(ShapeKind::Circle).unwrap();
//! circle.set_position(Vec2::new(600.0, 100.0));
//! circle.set_fill_color(Color::YELLOW);
//! surface.draw(&circle);
//! ```
//!
//! ## Local Space
//!
//! Geometry is laid out with its bounding box starting at the local origin:
//! a circle of radius `r` spans `(0,0)..(2r,2r)`, a rectangle spans
//! `(0,0)..size`. The [`origin`](Primitive::origin) is the local point that
//! lands on the primitive's position; it defaults to `(0,0)`, so a shape is
//! positioned by its top-left corner unless the caller re-centers it.

use std::fmt;

use super::Color;
use crate::math::{Pose, Vec2};

/// Radius used for `ShapeKind::Circle`.
pub const DEFAULT_CIRCLE_RADIUS: f32 = 15.0;
/// Outline points used for circles.
pub const DEFAULT_CIRCLE_POINTS: u32 = 30;
/// Size used for `ShapeKind::Rectangle`.
pub const DEFAULT_RECTANGLE_SIZE: Vec2 = Vec2::new(100.0, 50.0);
/// Circumradius used for `ShapeKind::Triangle`.
pub const DEFAULT_TRIANGLE_RADIUS: f32 = 50.0;

/// Which primitive a [`Shape`](crate::ecs::Shape) component should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ShapeKind {
    /// No primitive at all. Actors with an empty shape draw nothing.
    #[default]
    Empty = 0,
    Circle = 1,
    Rectangle = 2,
    Triangle = 3,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Empty => "Empty",
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
        };
        f.write_str(name)
    }
}

/// Local-space geometry of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A regular polygon inscribed in a circle. Three points make a triangle.
    Circle { radius: f32, points: u32 },
    Rectangle { size: Vec2 },
}

/// A drawable shape with its own copy of a pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    geometry: Geometry,
    fill_color: Color,
    origin: Vec2,
    pose: Pose,
}

impl Primitive {
    /// Shape factory. Returns `None` for [`ShapeKind::Empty`].
    pub fn from_kind(kind: ShapeKind) -> Option<Self> {
        match kind {
            ShapeKind::Empty => None,
            ShapeKind::Circle => Some(Self::circle(DEFAULT_CIRCLE_RADIUS, DEFAULT_CIRCLE_POINTS)),
            ShapeKind::Rectangle => Some(Self::rectangle(DEFAULT_RECTANGLE_SIZE)),
            ShapeKind::Triangle => Some(Self::circle(DEFAULT_TRIANGLE_RADIUS, 3)),
        }
    }

    /// A regular polygon with `points` vertices (at least 3) inscribed in a
    /// circle of `radius`. White, identity pose.
    pub fn circle(radius: f32, points: u32) -> Self {
        Self::new(Geometry::Circle { radius, points: points.max(3) })
    }

    /// An axis-aligned rectangle of the given size. White, identity pose.
    pub fn rectangle(size: Vec2) -> Self {
        Self::new(Geometry::Rectangle { size })
    }

    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            fill_color: Color::WHITE,
            origin: Vec2::ZERO,
            pose: Pose::IDENTITY,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Set the local point that sits on the primitive's position and around
    /// which it rotates and scales.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> Vec2 {
        self.pose.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.pose.position = position;
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.pose.rotation
    }

    /// Set the rotation in degrees. Not wrapped.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.pose.rotation = degrees;
    }

    pub fn scale(&self) -> Vec2 {
        self.pose.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.pose.scale = scale;
    }

    /// Outline vertices in local space, before the origin offset.
    pub fn outline(&self) -> Vec<Vec2> {
        match &self.geometry {
            Geometry::Circle { radius, points } => outline_circle(*radius, *points),
            Geometry::Rectangle { size } => outline_rectangle(*size),
        }
    }

    /// Outline vertices in world space.
    pub fn world_outline(&self) -> Vec<Vec2> {
        let matrix = self.pose.matrix();
        self.outline()
            .into_iter()
            .map(|p| matrix.transform_point2(p - self.origin))
            .collect()
    }

    /// Tessellate into world-space positions and triangle indices.
    ///
    /// Fan triangulation from the centroid; every primitive is convex.
    pub fn tessellate(&self) -> (Vec<[f32; 2]>, Vec<u32>) {
        tessellate_convex(&self.world_outline())
    }
}

/// Polygon inscribed in a circle, first point at the top, bounding box at the origin.
fn outline_circle(radius: f32, points: u32) -> Vec<Vec2> {
    let n = points.max(3);
    let pi2 = std::f32::consts::PI * 2.0;
    (0..n)
        .map(|i| {
            let theta = i as f32 / n as f32 * pi2 - std::f32::consts::FRAC_PI_2;
            Vec2::new(radius + theta.cos() * radius, radius + theta.sin() * radius)
        })
        .collect()
}

/// Rectangle: 4 vertices, clockwise from the origin corner.
fn outline_rectangle(size: Vec2) -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(size.x, 0.0),
        Vec2::new(size.x, size.y),
        Vec2::new(0.0, size.y),
    ]
}

/// Convex polygon: fan from centroid.
fn tessellate_convex(points: &[Vec2]) -> (Vec<[f32; 2]>, Vec<u32>) {
    if points.len() < 3 {
        return (Vec::new(), Vec::new());
    }

    let n = points.len();
    let mut verts = Vec::with_capacity(n + 1);
    let mut idxs = Vec::with_capacity(n * 3);

    let centroid = points.iter().copied().sum::<Vec2>() / n as f32;
    verts.push([centroid.x, centroid.y]);

    for p in points {
        verts.push([p.x, p.y]);
    }

    for i in 0..n as u32 {
        let curr = 1 + i;
        let next = 1 + (i + 1) % n as u32;
        idxs.extend_from_slice(&[0, curr, next]);
    }

    (verts, idxs)
}
