use crate::constants::POINTER_SENTINEL;
use glam::Vec2;

/// Last-known pointer position in surface-local logical coordinates.
///
/// Defaults to a sentinel far outside any plausible surface so the repulsion
/// branch never fires before the first real pointer event. Written only by
/// the input callbacks, read in full each tick; last write wins.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pos: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::from(POINTER_SENTINEL),
        }
    }
}

impl PointerState {
    /// Record a pointer move, converting viewport coordinates to
    /// surface-local by subtracting the surface origin.
    pub fn moved(&mut self, viewport: Vec2, surface_origin: Vec2) {
        self.pos = viewport - surface_origin;
    }

    /// Pointer left the container; park it back at the sentinel.
    pub fn leave(&mut self) {
        self.pos = Vec2::from(POINTER_SENTINEL);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }
}
