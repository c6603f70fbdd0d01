//! Headless [`Surface`] that records draw calls instead of rasterizing them.
//!
//! Useful for tests and for running a scene without a window. Each recorded
//! [`DrawCall`] keeps a snapshot of the primitive as it was drawn plus its
//! world-space tessellation.

use super::{Primitive, Surface};

/// One recorded `draw` call.
#[derive(Debug, Clone)]
pub struct DrawCall {
    /// Snapshot of the primitive at draw time.
    pub primitive: Primitive,
    /// World-space vertex positions (centroid first).
    pub vertices: Vec<[f32; 2]>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

/// Records every primitive drawn onto it.
///
/// `clear` drops the calls of the previous frame, `present` counts a
/// finished frame. Calls stay readable after `present` until the next
/// `clear` or [`take_calls`](FrameRecorder::take_calls).
#[derive(Debug, Default)]
pub struct FrameRecorder {
    calls: Vec<DrawCall>,
    frames_presented: u64,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls recorded since the last `clear`.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded draw calls, leaving the recorder empty.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of completed frames.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for FrameRecorder {
    fn draw(&mut self, primitive: &Primitive) {
        let (vertices, indices) = primitive.tessellate();
        self.calls.push(DrawCall {
            primitive: primitive.clone(),
            vertices,
            indices,
        });
    }

    fn clear(&mut self) {
        self.calls.clear();
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        log::trace!(
            "frame {} presented with {} draw calls",
            self.frames_presented,
            self.calls.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::render2d::ShapeKind;

    #[test]
    fn records_snapshot_of_each_draw() {
        let mut recorder = FrameRecorder::new();
        let mut circle = Primitive::from_kind(ShapeKind::Circle).unwrap();
        circle.set_position(Vec2::new(1.0, 2.0));
        recorder.draw(&circle);

        circle.set_position(Vec2::new(9.0, 9.0));
        recorder.draw(&circle);

        assert_eq!(recorder.calls().len(), 2);
        assert_eq!(recorder.calls()[0].primitive.position(), Vec2::new(1.0, 2.0));
        assert_eq!(recorder.calls()[1].primitive.position(), Vec2::new(9.0, 9.0));
        // 30 rim points + centroid
        assert_eq!(recorder.calls()[0].vertices.len(), 31);
    }

    #[test]
    fn clear_and_present() {
        let mut recorder = FrameRecorder::new();
        let rect = Primitive::from_kind(ShapeKind::Rectangle).unwrap();

        recorder.clear();
        recorder.draw(&rect);
        recorder.present();
        assert_eq!(recorder.calls().len(), 1);
        assert_eq!(recorder.frames_presented(), 1);

        recorder.clear();
        assert!(recorder.calls().is_empty());
        assert_eq!(recorder.frames_presented(), 1);
    }

    #[test]
    fn take_calls_empties_recorder() {
        let mut recorder = FrameRecorder::new();
        recorder.draw(&Primitive::from_kind(ShapeKind::Triangle).unwrap());
        let taken = recorder.take_calls();
        assert_eq!(taken.len(), 1);
        assert!(recorder.calls().is_empty());
    }
}
