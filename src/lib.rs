//! slidepanel - five-slot sliding panel container
//!
//! This crate provides a host-agnostic panel container: a Center panel
//! with up to four side panels that slide into view, driven through an
//! Elm-style message/update loop against an injected layout host.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod layout;
pub mod messages;
pub mod panel;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use config::PanelConfig;
pub use host::{LayoutHost, RecordingHost};
pub use messages::PanelMsg;
pub use panel::{Panel, PanelContainer, PanelDelegate, PanelRef, Slot};
