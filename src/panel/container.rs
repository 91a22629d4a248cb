//! The panel container
//!
//! Owns up to five panels, the current side, and the installed constraint
//! set. Every state change flows through three steps:
//!
//! 1. mutate the slot registry or current side
//! 2. re-derive constraints (slot changes) or update the Center offsets
//!    (side changes)
//! 3. run a layout pass on the host, synchronously or animated
//!
//! Animated passes finish later: the host reports them through
//! [`PanelContainer::animation_finished`], and the completion captured when
//! the pass started runs then. Overlapping transitions are not guarded;
//! the newest side wins and earlier completions still fire for their own
//! targets.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::component::{ContainerId, PanelRef, ViewId};
use super::host_link::{HostHandle, HostShared};
use super::slot::Slot;
use crate::config::PanelConfig;
use crate::host::{AnimationId, LayoutHost, Placement};
use crate::layout::{center_offset, ConstraintSet};

/// Default length of an animated transition
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(250);

/// Observer notified around transitions
///
/// The delegate is taken out of the container while a callback runs, so
/// `container.has_delegate()` reports false from inside it.
pub trait PanelDelegate {
    /// Called before `current_side` changes
    fn will_transition(&mut self, container: &PanelContainer, to: Slot);

    /// Called once the transition's layout pass has completed
    fn did_transition(&mut self, container: &PanelContainer, to: Slot);
}

/// Work to run when a layout pass completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion {
    Transition { target: Slot },
    /// Geometry refresh; nothing to notify
    Refresh,
}

/// Container of a Center panel and up to four side panels
pub struct PanelContainer {
    id: ContainerId,
    slots: [Option<PanelRef>; 5],
    current_side: Slot,
    transition_duration: Duration,
    delegate: Option<Box<dyn PanelDelegate>>,
    host: Box<dyn LayoutHost>,
    constraints: ConstraintSet,
    pending: HashMap<AnimationId, Completion>,
    shared: Rc<HostShared>,
}

impl PanelContainer {
    /// Create a container around its Center panel
    pub fn new(center: PanelRef, host: impl LayoutHost + 'static) -> Self {
        let mut container = Self::empty(Box::new(host));
        container.set_center_panel(Some(center));
        container
    }

    pub fn builder(host: impl LayoutHost + 'static) -> PanelContainerBuilder {
        PanelContainerBuilder::new(Box::new(host))
    }

    fn empty(host: Box<dyn LayoutHost>) -> Self {
        let id = ContainerId::next();
        tracing::debug!(container = %id, "created panel container");
        Self {
            id,
            slots: Default::default(),
            current_side: Slot::Center,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            delegate: None,
            host,
            constraints: ConstraintSet::default(),
            pending: HashMap::new(),
            shared: HostShared::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Occupant of a slot
    pub fn panel(&self, slot: Slot) -> Option<&PanelRef> {
        self.slots[slot.index()].as_ref()
    }

    pub fn center(&self) -> Option<&PanelRef> {
        self.panel(Slot::Center)
    }

    pub fn left(&self) -> Option<&PanelRef> {
        self.panel(Slot::Left)
    }

    pub fn right(&self) -> Option<&PanelRef> {
        self.panel(Slot::Right)
    }

    pub fn top(&self) -> Option<&PanelRef> {
        self.panel(Slot::Top)
    }

    pub fn bottom(&self) -> Option<&PanelRef> {
        self.panel(Slot::Bottom)
    }

    /// Occupied slots and their panels
    pub fn panels(&self) -> impl Iterator<Item = (Slot, &PanelRef)> {
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| self.panel(slot).map(|panel| (slot, panel)))
    }

    /// Which slot holds this panel (reference identity)
    pub fn slot_of(&self, panel: &PanelRef) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|&slot| self.panel(slot).is_some_and(|p| p.ptr_eq(panel)))
    }

    /// The foregrounded slot
    ///
    /// Updated as soon as a transition starts, before its animation runs.
    pub fn current_side(&self) -> Slot {
        self.current_side
    }

    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.transition_duration = duration;
    }

    pub fn set_delegate(&mut self, delegate: impl PanelDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn take_delegate(&mut self) -> Option<Box<dyn PanelDelegate>> {
        self.delegate.take()
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// The installed constraint set
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Installed Center offset, `None` without a Center panel
    pub fn center_offset(&self) -> Option<(f32, f32)> {
        self.constraints.center_offset()
    }

    /// Whether any animated layout pass has not reported completion yet
    pub fn is_transitioning(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn host(&self) -> &dyn LayoutHost {
        self.host.as_ref()
    }

    // ------------------------------------------------------------------------
    // Slot assignment
    // ------------------------------------------------------------------------

    /// Replace the Center panel, or remove it with `None`
    pub fn set_center_panel(&mut self, panel: Option<PanelRef>) {
        self.assign(Slot::Center, panel);
    }

    /// Put a panel into a slot, or clear the slot with `None`
    ///
    /// Side slots need a Center panel; without one the call is dropped.
    /// Assigning the panel already in the slot does nothing. A panel that
    /// sits in another slot is moved out of it first. A panel still owned by
    /// a different live container is left alone.
    pub fn assign(&mut self, slot: Slot, panel: Option<PanelRef>) {
        let Some(panel) = panel else {
            if let Some(current) = self.panel(slot).cloned() {
                self.remove(&current);
            }
            return;
        };

        if let Some(owner) = panel.panel_container().filter(|h| h.container_id() != self.id) {
            tracing::debug!(
                %slot,
                view = %panel.view_id(),
                owner = %owner.container_id(),
                "panel belongs to another container, dropping assignment"
            );
            return;
        }

        if self.panel(slot).is_some_and(|current| current.ptr_eq(&panel)) {
            tracing::trace!(%slot, view = %panel.view_id(), "panel already in slot");
            return;
        }

        if slot.is_side() {
            let Some(center) = self.center() else {
                tracing::debug!(%slot, view = %panel.view_id(), "no center panel, dropping side assignment");
                return;
            };
            if center.ptr_eq(&panel) {
                tracing::debug!(%slot, "center panel cannot move into a side slot");
                return;
            }
        }

        if let Some(previous) = self.slot_of(&panel) {
            tracing::debug!(from = %previous, to = %slot, view = %panel.view_id(), "moving panel between slots");
            self.remove(&panel);
        }

        if let Some(current) = self.panel(slot).cloned() {
            self.remove(&current);
        }

        self.attach(slot, panel);
    }

    fn attach(&mut self, slot: Slot, panel: PanelRef) {
        let view = panel.view_id();
        let placement = if slot.is_side() {
            Placement::Front
        } else {
            Placement::Back
        };

        panel.set_host(Some(HostHandle::new(self.id, &self.shared)));
        panel.will_move_to_parent(Some(self.id));
        self.host.attach(view, placement);

        self.slots[slot.index()] = Some(panel.clone());
        self.install_constraints();

        panel.did_move_to_parent(Some(self.id));
        tracing::debug!(container = %self.id, %slot, %view, name = %panel.name(), "attached panel");

        self.layout_now();
    }

    /// Remove a panel from whichever slot holds it
    ///
    /// Does nothing if the panel is not contained here.
    pub fn remove(&mut self, panel: &PanelRef) {
        let Some(slot) = self.slot_of(panel) else {
            tracing::debug!(view = %panel.view_id(), "panel not in any slot, nothing to remove");
            return;
        };

        self.slots[slot.index()] = None;

        panel.will_move_to_parent(None);
        self.host.detach(panel.view_id());
        panel.did_move_to_parent(None);
        if panel
            .panel_container()
            .map_or(true, |h| h.container_id() == self.id)
        {
            panel.set_host(None);
        }

        tracing::debug!(container = %self.id, %slot, view = %panel.view_id(), "removed panel");

        self.install_constraints();
    }

    /// Re-derive every constraint from the registry and hand it to the host
    fn install_constraints(&mut self) {
        let center = self.center().map(PanelRef::view_id);
        let sides: Vec<(Slot, ViewId)> = Slot::SIDES
            .into_iter()
            .filter_map(|slot| self.panel(slot).map(|p| (slot, p.view_id())))
            .collect();
        let offset = self.constraints.center_offset().unwrap_or((0.0, 0.0));

        self.constraints = ConstraintSet::derive(center, &sides, offset);
        self.host.apply_constraints(&self.constraints);
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Make `target` the current side
    ///
    /// The delegate hears `will_transition` first. A panel in the target
    /// side slot gets `begin_appearance_transition(target != current_side)`,
    /// so repeating the current side reports it as disappearing. Then the
    /// side changes and the Center offsets are laid out, animated over
    /// `duration` (or the container's duration) when `animated` is set.
    /// `did_transition` and the target's `end_appearance_transition` run
    /// once that pass completes.
    pub fn set_panel(&mut self, target: Slot, animated: bool, duration: Option<Duration>) {
        tracing::debug!(container = %self.id, from = %self.current_side, to = %target, animated, "transition");

        self.notify(|delegate, container| delegate.will_transition(container, target));

        if target.is_side() {
            if let Some(panel) = self.panel(target).cloned() {
                panel.begin_appearance_transition(target != self.current_side, animated);
            }
        }

        if !self.pending.is_empty() {
            tracing::debug!(
                in_flight = self.pending.len(),
                "transition started while earlier passes are still animating"
            );
        }

        self.current_side = target;
        self.shared.current_side.set(target);

        let completion = Completion::Transition { target };
        if animated {
            let duration = duration.unwrap_or(self.transition_duration);
            let id = self.layout_animated(duration);
            self.pending.insert(id, completion);
        } else {
            self.layout_now();
            self.complete(completion);
        }
    }

    /// Report that an animated pass ended
    ///
    /// Interrupted passes (`finished == false`) drop their completion.
    pub fn animation_finished(&mut self, id: AnimationId, finished: bool) {
        let Some(completion) = self.pending.remove(&id) else {
            tracing::debug!(animation = %id, "unknown animation finished");
            return;
        };

        if !finished {
            tracing::debug!(animation = %id, ?completion, "animation interrupted, skipping completion");
            return;
        }

        self.complete(completion);
    }

    fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::Transition { target } => {
                self.notify(|delegate, container| delegate.did_transition(container, target));
                if target.is_side() {
                    if let Some(panel) = self.panel(target).cloned() {
                        panel.end_appearance_transition();
                    }
                }
            }
            Completion::Refresh => {}
        }
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn PanelDelegate, &PanelContainer)) {
        if let Some(mut delegate) = self.delegate.take() {
            f(delegate.as_mut(), self);
            self.delegate = Some(delegate);
        }
    }

    // ------------------------------------------------------------------------
    // Geometry refresh
    // ------------------------------------------------------------------------

    /// A contained panel's preferred size changed; re-run layout, animated
    pub fn preferred_size_did_change(&mut self, panel: &PanelRef) {
        let Some(slot) = self.slot_of(panel) else {
            return;
        };
        tracing::trace!(%slot, size = ?panel.preferred_size(), "preferred size changed");

        let id = self.layout_animated(self.transition_duration);
        self.pending.insert(id, Completion::Refresh);
    }

    /// The host's bounds changed; re-run layout now
    pub fn bounds_did_change(&mut self) {
        tracing::trace!(bounds = ?self.host.bounds(), "bounds changed");
        self.layout_now();
    }

    /// Apply every message panels queued through their host handle
    ///
    /// Returns the number of messages processed.
    pub fn process_requests(&mut self) -> usize {
        let mut processed = 0;
        loop {
            let next = self.shared.requests.borrow_mut().pop_front();
            let Some(msg) = next else {
                break;
            };
            crate::update::update(self, msg);
            processed += 1;
        }
        processed
    }

    /// Point the Center offsets at the current side for the host's bounds
    fn update_offsets(&mut self) {
        let offset = center_offset(self.current_side, self.host.bounds());
        if self.constraints.set_center_offset(offset) {
            self.host.apply_constraints(&self.constraints);
        }
    }

    fn layout_now(&mut self) {
        self.update_offsets();
        self.host.layout();
    }

    fn layout_animated(&mut self, duration: Duration) -> AnimationId {
        self.update_offsets();
        self.host.animate(duration)
    }

    /// Check registry invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let occupied: Vec<(Slot, &PanelRef)> = self.panels().collect();
        for (i, (slot, panel)) in occupied.iter().enumerate() {
            for (other_slot, other) in &occupied[i + 1..] {
                debug_assert!(
                    !panel.ptr_eq(other),
                    "Panel {} occupies both {} and {}",
                    panel.view_id(),
                    slot,
                    other_slot
                );
            }
            debug_assert!(
                panel
                    .panel_container()
                    .is_some_and(|h| h.container_id() == self.id),
                "Panel {} in {} has no back-reference to {}",
                panel.view_id(),
                slot,
                self.id
            );
        }
        debug_assert_eq!(
            self.constraints.center_offset().is_some(),
            self.center().is_some(),
            "Center offset constraints must exist exactly when a Center panel does"
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

impl fmt::Debug for PanelContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelContainer")
            .field("id", &self.id)
            .field("slots", &self.slots)
            .field("current_side", &self.current_side)
            .field("transition_duration", &self.transition_duration)
            .field("has_delegate", &self.delegate.is_some())
            .field("pending", &self.pending.len())
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builds a [`PanelContainer`]; a Center panel is mandatory
pub struct PanelContainerBuilder {
    host: Box<dyn LayoutHost>,
    center: Option<PanelRef>,
    sides: Vec<(Slot, PanelRef)>,
    transition_duration: Option<Duration>,
    delegate: Option<Box<dyn PanelDelegate>>,
}

impl PanelContainerBuilder {
    fn new(host: Box<dyn LayoutHost>) -> Self {
        Self {
            host,
            center: None,
            sides: Vec::new(),
            transition_duration: None,
            delegate: None,
        }
    }

    pub fn center(mut self, panel: PanelRef) -> Self {
        self.center = Some(panel);
        self
    }

    /// Queue a panel for a slot; assigned in call order after the Center
    pub fn panel(mut self, slot: Slot, panel: PanelRef) -> Self {
        if slot == Slot::Center {
            self.center = Some(panel);
        } else {
            self.sides.push((slot, panel));
        }
        self
    }

    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = Some(duration);
        self
    }

    pub fn delegate(mut self, delegate: impl PanelDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Take the transition duration from config
    pub fn config(self, config: &PanelConfig) -> Self {
        self.transition_duration(config.transition_duration())
    }

    /// Build the container, failing if no Center panel was given
    pub fn try_build(self) -> anyhow::Result<PanelContainer> {
        let Some(center) = self.center else {
            anyhow::bail!("PanelContainer must be constructed with a center panel");
        };

        let mut container = PanelContainer::empty(self.host);
        if let Some(duration) = self.transition_duration {
            container.transition_duration = duration;
        }
        container.delegate = self.delegate;
        container.set_center_panel(Some(center));
        for (slot, panel) in self.sides {
            container.assign(slot, Some(panel));
        }
        Ok(container)
    }

    /// Build the container
    ///
    /// # Panics
    ///
    /// Panics if no Center panel was given. A container without a Center
    /// is a programming error, not a runtime condition.
    pub fn build(self) -> PanelContainer {
        match self.try_build() {
            Ok(container) => container,
            Err(e) => panic!("{e}"),
        }
    }
}
