//! Update function for the Elm-style architecture
//!
//! Dispatches a [`PanelMsg`] to the matching container operation.

use crate::messages::PanelMsg;
use crate::panel::PanelContainer;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation and checks the
/// container's invariants after every message.
#[inline]
pub fn update(container: &mut PanelContainer, msg: PanelMsg) {
    #[cfg(debug_assertions)]
    {
        update_traced(container, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(container, msg)
    }
}

fn update_inner(container: &mut PanelContainer, msg: PanelMsg) {
    match msg {
        PanelMsg::Assign { slot, panel } => container.assign(slot, panel),
        PanelMsg::Remove(panel) => container.remove(&panel),
        PanelMsg::TransitionTo {
            side,
            animated,
            duration,
        } => container.set_panel(side, animated, duration),
        PanelMsg::PreferredSizeChanged(panel) => container.preferred_size_did_change(&panel),
        PanelMsg::AnimationFinished { id, finished } => container.animation_finished(id, finished),
        PanelMsg::BoundsChanged => container.bounds_did_change(),
    }
}

#[cfg(debug_assertions)]
fn update_traced(container: &mut PanelContainer, msg: PanelMsg) {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = PanelSnapshot::from_container(container);
    debug!(target: "message", msg = %msg_name, "processing");

    update_inner(container, msg);

    let after = PanelSnapshot::from_container(container);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }

    container.assert_invariants();
}

/// Short name of a message for logs
pub fn msg_type_name(msg: &PanelMsg) -> String {
    match msg {
        PanelMsg::Assign { slot, panel: Some(_) } => format!("Assign({slot})"),
        PanelMsg::Assign { slot, panel: None } => format!("Clear({slot})"),
        PanelMsg::Remove(panel) => format!("Remove({})", panel.view_id()),
        PanelMsg::TransitionTo { side, animated, .. } => {
            if *animated {
                format!("TransitionTo({side}, animated)")
            } else {
                format!("TransitionTo({side})")
            }
        }
        PanelMsg::PreferredSizeChanged(panel) => {
            format!("PreferredSizeChanged({})", panel.view_id())
        }
        PanelMsg::AnimationFinished { id, finished } => {
            format!("AnimationFinished({id}, finished={finished})")
        }
        PanelMsg::BoundsChanged => "BoundsChanged".to_string(),
    }
}
