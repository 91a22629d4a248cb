//! Back-reference from a panel to its container
//!
//! The container hands each attached panel a [`HostHandle`] holding a weak
//! pointer to a small shared block. A panel can read the container's
//! current side and queue messages for it without borrowing the container
//! itself. The handle is cleared on detach and goes dead when the container
//! is dropped.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::component::ContainerId;
use super::slot::Slot;
use crate::messages::PanelMsg;

/// State the container shares with its attached panels
#[derive(Debug)]
pub(crate) struct HostShared {
    pub(crate) current_side: Cell<Slot>,
    pub(crate) requests: RefCell<VecDeque<PanelMsg>>,
}

impl HostShared {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            current_side: Cell::new(Slot::Center),
            requests: RefCell::new(VecDeque::new()),
        })
    }
}

/// Typed handle to the container a panel is attached to
#[derive(Debug, Clone)]
pub struct HostHandle {
    id: ContainerId,
    shared: Weak<HostShared>,
}

impl HostHandle {
    pub(crate) fn new(id: ContainerId, shared: &Rc<HostShared>) -> Self {
        Self {
            id,
            shared: Rc::downgrade(shared),
        }
    }

    pub fn container_id(&self) -> ContainerId {
        self.id
    }

    /// Whether the container still exists
    pub fn is_alive(&self) -> bool {
        self.shared.strong_count() > 0
    }

    /// The container's current side, or `None` if it was dropped
    pub fn current_side(&self) -> Option<Slot> {
        self.shared.upgrade().map(|shared| shared.current_side.get())
    }

    /// Queue a message for the container
    ///
    /// Messages are applied when the owner calls
    /// `PanelContainer::process_requests`. Returns false if the container
    /// is gone.
    pub fn request(&self, msg: PanelMsg) -> bool {
        match self.shared.upgrade() {
            Some(shared) => {
                shared.requests.borrow_mut().push_back(msg);
                true
            }
            None => false,
        }
    }
}
