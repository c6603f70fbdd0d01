//! # Render2d — Drawing Surfaces and 2D Primitives
//!
//! The core never talks to a window or a GPU. It hands finished
//! [`Primitive`]s to whatever implements [`Surface`]; the surface decides what
//! "drawing" means.
//!
//! ```text
//!   Actor::render
//!       │  for each Shape component (insertion order)
//!       ▼
//!   Shape::render ──► surface.draw(&primitive)
//!                          │
//!             ┌────────────┴─────────────┐
//!             ▼                          ▼
//!     FrameRecorder              your window backend
//!     (headless, tests)          (wgpu, SDL, a terminal…)
//! ```
//!
//! ## Design Decisions
//!
//! **Pose is a copy.** A primitive carries its own position, rotation and
//! scale. The owning actor refreshes them from its `Transform` each frame, so
//! a surface never needs to look anything up.
//!
//! **CPU-side tessellation.** [`Primitive::tessellate`] produces world-space
//! triangles, so a backend can batch everything into one vertex buffer
//! without knowing about circles or rectangles.

pub mod recorder;
pub mod shapes;

pub use recorder::{DrawCall, FrameRecorder};
pub use shapes::{Geometry, Primitive, ShapeKind};

/// Something primitives can be drawn onto.
///
/// Only [`draw`](Surface::draw) is required. Drivers call
/// [`clear`](Surface::clear) before a frame and [`present`](Surface::present)
/// after it; both default to doing nothing.
pub trait Surface {
    /// Draw one primitive.
    fn draw(&mut self, primitive: &Primitive);

    /// Start a new frame.
    fn clear(&mut self) {}

    /// Finish the current frame.
    fn present(&mut self) {}
}

/// An RGBA color with floating-point components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    pub const YELLOW: Self = Self { r: 1.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const CYAN: Self = Self { r: 0.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const MAGENTA: Self = Self { r: 1.0, g: 0.0, b: 1.0, a: 1.0 };

    /// Create a color from RGB (alpha = 1).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
