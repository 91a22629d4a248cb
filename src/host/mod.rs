//! Layout host abstraction
//!
//! The container never touches a real view hierarchy, constraint engine or
//! animator. It talks to a [`LayoutHost`] instead, which a UI backend
//! implements. [`RecordingHost`] is an in-memory implementation that logs
//! every call and resolves frames itself, for tests and the demo binary.

mod recording;

use std::fmt;
use std::time::Duration;

use crate::layout::{ConstraintSet, Size};
use crate::panel::ViewId;

pub use recording::{HostEvent, RecordingHost};

/// Where a newly attached view goes in the host's z-order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Behind every other view (used for the Center panel)
    Back,
    /// In front of every other view (used for side panels)
    Front,
}

/// Handle for an animated layout pass started by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "anim#{}", self.0)
    }
}

/// View hierarchy, constraint engine and animator seen by the container
pub trait LayoutHost {
    /// Current size of the container's own view
    fn bounds(&self) -> Size;

    /// Insert a child view
    fn attach(&mut self, view: ViewId, placement: Placement);

    /// Remove a child view and every constraint that mentions it
    fn detach(&mut self, view: ViewId);

    /// Replace the installed constraints
    fn apply_constraints(&mut self, constraints: &ConstraintSet);

    /// Run a layout pass now
    fn layout(&mut self);

    /// Start an animated layout pass over `duration`
    ///
    /// The host must later report completion through
    /// `PanelContainer::animation_finished` with the returned id, finished
    /// or not. The container keeps the pass pending until then, and
    /// `is_transitioning()` stays true while any pass is unreported.
    fn animate(&mut self, duration: Duration) -> AnimationId;
}
