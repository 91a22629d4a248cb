//! Message types for the Elm-style architecture
//!
//! Everything that can change a panel container's state can be expressed
//! as a [`PanelMsg`] and applied with [`crate::update::update`]. Panels use
//! the same messages to make requests through their host handle.

use std::time::Duration;

use crate::host::AnimationId;
use crate::panel::{PanelRef, Slot};

/// Panel container messages
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Put a panel into a slot, or clear the slot with `None`
    Assign {
        slot: Slot,
        panel: Option<PanelRef>,
    },
    /// Remove a panel from whichever slot holds it
    Remove(PanelRef),
    /// Make a slot the current side
    TransitionTo {
        side: Slot,
        animated: bool,
        /// Overrides the container's transition duration
        duration: Option<Duration>,
    },
    /// A contained panel's preferred size changed
    PreferredSizeChanged(PanelRef),
    /// The host finished (or interrupted) an animated layout pass
    AnimationFinished { id: AnimationId, finished: bool },
    /// The host's bounds changed
    BoundsChanged,
}

impl PanelMsg {
    /// Immediate transition with the default duration
    pub fn transition(side: Slot) -> Self {
        PanelMsg::TransitionTo {
            side,
            animated: false,
            duration: None,
        }
    }

    /// Animated transition with the container's duration
    pub fn animated_transition(side: Slot) -> Self {
        PanelMsg::TransitionTo {
            side,
            animated: true,
            duration: None,
        }
    }
}
