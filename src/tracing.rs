//! Logging setup and container snapshots
//!
//! Console verbosity comes from `RUST_LOG` (default `warn`); targets follow
//! module paths, e.g. `slidepanel::panel=trace`. A second layer writes
//! everything at `debug` and above to a daily `slidepanel.log` under the
//! config logs directory.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::panel::{PanelContainer, Slot, ViewId};

const LOG_FILE: &str = "slidepanel.log";

/// Install the global subscriber
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|logs_dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE))
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new("debug"))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of container state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub current_side: Slot,
    pub occupied: Vec<(Slot, ViewId)>,
    pub transitioning: bool,
}

impl PanelSnapshot {
    pub fn from_container(container: &PanelContainer) -> Self {
        Self {
            current_side: container.current_side(),
            occupied: container
                .panels()
                .map(|(slot, panel)| (slot, panel.view_id()))
                .collect(),
            transitioning: container.is_transitioning(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.current_side != other.current_side {
            changes.push(format!("side: {} → {}", self.current_side, other.current_side));
        }

        for slot in Slot::ALL {
            let before = self.view_in(slot);
            let after = other.view_in(slot);
            match (before, after) {
                (None, Some(view)) => changes.push(format!("{}: +{}", slot, view)),
                (Some(view), None) => changes.push(format!("{}: -{}", slot, view)),
                (Some(a), Some(b)) if a != b => changes.push(format!("{}: {} → {}", slot, a, b)),
                _ => {}
            }
        }

        if self.transitioning != other.transitioning {
            let status = if other.transitioning {
                "started"
            } else {
                "settled"
            };
            changes.push(format!("animation {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    fn view_in(&self, slot: Slot) -> Option<ViewId> {
        self.occupied
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, view)| *view)
    }
}
