//! Child panels and their handles
//!
//! A [`Panel`] is the capability set the container drives: containment
//! callbacks around attach/detach and appearance callbacks around
//! transitions. The container never looks inside a panel beyond that.
//!
//! Panels are held through [`PanelRef`], a cheap `Rc` handle whose identity
//! is reference identity. Each handle owns a process-unique [`ViewId`] that
//! names its view in the layout host.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::host_link::HostHandle;
use crate::layout::Size;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a panel's view in the layout host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl ViewId {
    pub(crate) fn next() -> Self {
        ViewId(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Unique identifier for a panel container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u64);

impl ContainerId {
    pub(crate) fn next() -> Self {
        ContainerId(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// Callbacks a container sends to its child panels
///
/// All methods have empty defaults so a panel only implements what it
/// cares about.
pub trait Panel {
    /// Human-readable name used in logs
    fn name(&self) -> &str {
        "panel"
    }

    /// About to be added to (`Some`) or removed from (`None`) a container
    fn will_move_to_parent(&mut self, _parent: Option<ContainerId>) {}

    /// Finished moving into (`Some`) or out of (`None`) a container
    fn did_move_to_parent(&mut self, _parent: Option<ContainerId>) {}

    /// Visibility is about to change
    fn begin_appearance_transition(&mut self, _is_appearing: bool, _animated: bool) {}

    /// The visibility change announced by `begin_appearance_transition` is done
    fn end_appearance_transition(&mut self) {}

    /// Preferred content size, if the panel has one
    fn preferred_size(&self) -> Option<Size> {
        None
    }
}

struct PanelCell {
    view: ViewId,
    panel: RefCell<Box<dyn Panel>>,
    host: RefCell<Option<HostHandle>>,
}

/// Shared handle to a child panel
///
/// Clones refer to the same panel. Equality is reference identity.
#[derive(Clone)]
pub struct PanelRef(Rc<PanelCell>);

impl PanelRef {
    pub fn new(panel: impl Panel + 'static) -> Self {
        Self(Rc::new(PanelCell {
            view: ViewId::next(),
            panel: RefCell::new(Box::new(panel)),
            host: RefCell::new(None),
        }))
    }

    /// View identity in the layout host
    pub fn view_id(&self) -> ViewId {
        self.0.view
    }

    /// Whether both handles refer to the same panel
    pub fn ptr_eq(&self, other: &PanelRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The container this panel is currently attached to, if it is still alive
    pub fn panel_container(&self) -> Option<HostHandle> {
        self.0
            .host
            .borrow()
            .as_ref()
            .filter(|handle| handle.is_alive())
            .cloned()
    }

    pub fn name(&self) -> String {
        self.0.panel.borrow().name().to_string()
    }

    pub fn preferred_size(&self) -> Option<Size> {
        self.0.panel.borrow().preferred_size()
    }

    /// Run a closure against the panel
    pub fn with<R>(&self, f: impl FnOnce(&dyn Panel) -> R) -> R {
        f(self.0.panel.borrow().as_ref())
    }

    pub(crate) fn set_host(&self, host: Option<HostHandle>) {
        *self.0.host.borrow_mut() = host;
    }

    pub(crate) fn will_move_to_parent(&self, parent: Option<ContainerId>) {
        self.0.panel.borrow_mut().will_move_to_parent(parent);
    }

    pub(crate) fn did_move_to_parent(&self, parent: Option<ContainerId>) {
        self.0.panel.borrow_mut().did_move_to_parent(parent);
    }

    pub(crate) fn begin_appearance_transition(&self, is_appearing: bool, animated: bool) {
        self.0
            .panel
            .borrow_mut()
            .begin_appearance_transition(is_appearing, animated);
    }

    pub(crate) fn end_appearance_transition(&self) {
        self.0.panel.borrow_mut().end_appearance_transition();
    }
}

impl PartialEq for PanelRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for PanelRef {}

impl fmt::Debug for PanelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .0
            .panel
            .try_borrow()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|_| "<busy>".to_string());
        f.debug_struct("PanelRef")
            .field("view", &self.0.view)
            .field("name", &name)
            .finish()
    }
}
