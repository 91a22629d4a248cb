//! In-memory layout host
//!
//! Records every call the container makes and resolves frames with
//! [`resolve_frames`]. Animated passes land on their final frames right
//! away; completion is reported when the owner decides, so tests can
//! deliver completions late, out of order, or not at all.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{AnimationId, LayoutHost, Placement};
use crate::layout::{resolve_frames, ConstraintSet, Frames, Rect, Size};
use crate::panel::ViewId;

/// A call made by the container
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Attach { view: ViewId, placement: Placement },
    Detach(ViewId),
    ApplyConstraints { count: usize },
    Layout,
    Animate { id: AnimationId, duration: Duration },
}

#[derive(Debug, Default)]
struct Inner {
    bounds: Size,
    events: Vec<HostEvent>,
    /// Back to front
    views: Vec<ViewId>,
    constraints: ConstraintSet,
    frames: Frames,
    next_animation: u64,
    /// Grows until drained with `take_running`
    running: Vec<AnimationId>,
}

impl Inner {
    fn resolve(&mut self) {
        self.frames = resolve_frames(&self.constraints, self.bounds);
        self.frames.retain(|view, _| self.views.contains(view));
    }
}

/// Layout host that records calls; clones share the same state
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingHost {
    pub fn new(bounds: Size) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                bounds,
                ..Inner::default()
            })),
        }
    }

    /// Change the bounds reported to the container
    pub fn set_bounds(&self, bounds: Size) {
        self.inner.borrow_mut().bounds = bounds;
    }

    /// Every call recorded so far
    pub fn events(&self) -> Vec<HostEvent> {
        self.inner.borrow().events.clone()
    }

    /// Number of recorded calls matching the predicate
    pub fn count(&self, pred: impl Fn(&HostEvent) -> bool) -> usize {
        self.inner.borrow().events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear_events(&self) {
        self.inner.borrow_mut().events.clear();
    }

    /// Attached views, back to front
    pub fn views(&self) -> Vec<ViewId> {
        self.inner.borrow().views.clone()
    }

    /// The last installed constraint set
    pub fn constraints(&self) -> ConstraintSet {
        self.inner.borrow().constraints.clone()
    }

    /// Frames from the most recent layout pass
    pub fn frames(&self) -> Frames {
        self.inner.borrow().frames.clone()
    }

    pub fn frame(&self, view: ViewId) -> Option<Rect> {
        self.inner.borrow().frames.get(&view).copied()
    }

    /// Animated passes that have not been reported finished
    pub fn running_animations(&self) -> Vec<AnimationId> {
        self.inner.borrow().running.clone()
    }

    /// Drain the running animations, oldest first
    ///
    /// Nothing finishes on its own: the caller reports each id to the
    /// container, which otherwise keeps it pending.
    pub fn take_running(&self) -> Vec<AnimationId> {
        std::mem::take(&mut self.inner.borrow_mut().running)
    }
}

impl LayoutHost for RecordingHost {
    fn bounds(&self) -> Size {
        self.inner.borrow().bounds
    }

    fn attach(&mut self, view: ViewId, placement: Placement) {
        let mut inner = self.inner.borrow_mut();
        inner.views.retain(|v| *v != view);
        match placement {
            Placement::Back => inner.views.insert(0, view),
            Placement::Front => inner.views.push(view),
        }
        inner.events.push(HostEvent::Attach { view, placement });
    }

    fn detach(&mut self, view: ViewId) {
        let mut inner = self.inner.borrow_mut();
        inner.views.retain(|v| *v != view);
        inner.frames.remove(&view);
        inner.events.push(HostEvent::Detach(view));
    }

    fn apply_constraints(&mut self, constraints: &ConstraintSet) {
        let mut inner = self.inner.borrow_mut();
        inner.constraints = constraints.clone();
        inner.events.push(HostEvent::ApplyConstraints {
            count: constraints.len(),
        });
    }

    fn layout(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.resolve();
        inner.events.push(HostEvent::Layout);
    }

    fn animate(&mut self, duration: Duration) -> AnimationId {
        let mut inner = self.inner.borrow_mut();
        inner.next_animation += 1;
        let id = AnimationId(inner.next_animation);
        inner.resolve();
        inner.running.push(id);
        inner.events.push(HostEvent::Animate { id, duration });
        id
    }
}
