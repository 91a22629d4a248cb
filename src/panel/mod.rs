//! Panel system - a Center panel with four sliding side panels
//!
//! A [`PanelContainer`] holds a mandatory Center panel and up to four side
//! panels (left, right, top, bottom). Exactly one slot is current at a
//! time; making a side current slides the Center fully out of view in the
//! opposite direction, uncovering the side panel anchored against it.
//!
//! ## Architecture
//!
//! - `Slot`: Center, Left, Right, Top or Bottom
//! - `Panel` trait: containment and appearance callbacks a child receives
//! - `PanelRef`: shared handle with reference identity and a `ViewId`
//! - `HostHandle`: a panel's weak back-reference to its container
//! - `PanelContainer`: slot registry, current side and transition sequencing
//! - `PanelDelegate`: observer notified around transitions
//!
//! ## Integration
//!
//! The container drives an injected `LayoutHost` (see `host`) and installs
//! constraint sets derived in `layout::constraints`.

mod component;
mod container;
mod host_link;
mod slot;

pub use component::{ContainerId, Panel, PanelRef, ViewId};
pub use container::{
    PanelContainer, PanelContainerBuilder, PanelDelegate, DEFAULT_TRANSITION_DURATION,
};
pub use host_link::HostHandle;
pub use slot::{Axis, Slot};
