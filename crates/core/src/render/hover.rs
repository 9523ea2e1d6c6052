//! Hover state machine.
//!
//! Two states: idle (no hover) and hovering a bar index. Pointer moves
//! recompute the nearest index on every event; leaving the surface always
//! returns to idle. This is the only state machine in the system.

/// Current hover state of a chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

impl HoverState {
    /// Transition on pointer move. `hit` is the index under the pointer,
    /// if the pointer is inside the plot area (see
    /// [`hover_index`](crate::render::chart::hover_index)).
    pub fn pointer_moved(&mut self, hit: Option<usize>) {
        *self = match hit {
            Some(index) => HoverState::Hovering(index),
            None => HoverState::Idle,
        };
    }

    /// Transition on pointer leave.
    pub fn pointer_left(&mut self) {
        *self = HoverState::Idle;
    }

    /// The hovered index, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering(index) => Some(*index),
        }
    }
}
