/// Index into a fixed-length sequence of zoom levels.
///
/// Index 0 is the smallest image (most zoomed out). Stepping past either
/// end saturates rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomCursor {
    index: usize,
    len: usize,
}

impl ZoomCursor {
    /// Cursor at level 0 of `len` levels. `len` is raised to 1 if zero.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.len
    }

    pub fn last(&self) -> usize {
        self.len - 1
    }

    /// Move one level in. Returns `true` if the index changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = (self.index + 1).min(self.last());
        let moved = next != self.index;
        self.index = next;
        moved
    }

    /// Move one level out. Returns `true` if the index changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = self.index.saturating_sub(1);
        let moved = next != self.index;
        self.index = next;
        moved
    }
}

/// Something that owns a zoom level and reacts to zoom input.
///
/// [`Console`](crate::Console) routes `ZoomIn`/`ZoomOut` events through this
/// so the core stays free of raster data.
pub trait ZoomControl {
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    fn zoom_index(&self) -> usize;
}

impl ZoomControl for ZoomCursor {
    fn zoom_in(&mut self) {
        ZoomCursor::zoom_in(self);
    }

    fn zoom_out(&mut self) {
        ZoomCursor::zoom_out(self);
    }

    fn zoom_index(&self) -> usize {
        self.index
    }
}
