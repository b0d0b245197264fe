// Left-button drag -> radii.
// Visual: drag right to widen, drag up to make the ellipse taller. Radii never go below 1.

use crate::types::ShapeParameters;

/// Snapshot taken when the button goes down; consumed while the button is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub anchor_pointer: (f32, f32), // pointer position at press (screen pixels, y down)
    pub anchor_radii: (f32, f32),   // (rx, ry) at press
}

impl DragState {
    /// Start a drag from the current radii and pointer position.
    pub fn press(&mut self, shape: &ShapeParameters, pointer: (f32, f32)) {
        self.active = true;
        self.anchor_pointer = pointer;
        self.anchor_radii = (shape.rx(), shape.ry());
    }

    /// Recompute radii from the pointer displacement since `press`.
    /// Screen y grows downward, so moving up grows `ry`.
    /// Returns false (and leaves `shape` alone) when no drag is active.
    pub fn drag_to(&self, shape: &mut ShapeParameters, pointer: (f32, f32)) -> bool {
        if !self.active {
            return false;
        }
        let dx = pointer.0 - self.anchor_pointer.0;
        let dy = pointer.1 - self.anchor_pointer.1;
        shape.set_radii(self.anchor_radii.0 + dx, self.anchor_radii.1 - dy);
        true
    }

    /// End the drag. The radii keep their last dragged value.
    pub fn release(&mut self) {
        self.active = false;
    }
}
