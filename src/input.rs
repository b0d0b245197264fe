// Turns polled mouse state (positions + held buttons) into discrete events.
// minifb only tells us "is the button down right now", so press/release are edge-detected here.

use crate::scene::InputEvent;

#[derive(Debug, Default)]
pub struct PointerTracker {
    left_was_down: bool,
    right_was_down: bool,
    last_pos: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Feed one poll. Events come out in the order press, move, release, toggle.
    pub fn update(&mut self, pos: Option<(f32, f32)>, left: bool, right: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if left && !self.left_was_down {
            if let Some((x, y)) = pos {
                events.push(InputEvent::PointerDown { x, y });
            }
        }
        if let Some((x, y)) = pos {
            if self.last_pos != pos {
                events.push(InputEvent::PointerMove { x, y });
            }
        }
        if !left && self.left_was_down {
            events.push(InputEvent::PointerUp);
        }
        // right button press flips animation (release does nothing)
        if right && !self.right_was_down {
            events.push(InputEvent::ToggleAnimation);
        }

        // a press outside the window never started a drag
        self.left_was_down = left && (self.left_was_down || pos.is_some());
        self.right_was_down = right;
        if pos.is_some() {
            self.last_pos = pos;
        }
        events
    }
}
