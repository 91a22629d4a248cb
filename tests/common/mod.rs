//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use slidepanel::host::RecordingHost;
use slidepanel::layout::Size;
use slidepanel::panel::{ContainerId, Panel, PanelContainer, PanelDelegate, PanelRef, Slot};

pub const BOUNDS: Size = Size {
    width: 320.0,
    height: 480.0,
};

/// Everything panels and the delegate observed, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    WillMove {
        panel: &'static str,
        attached: bool,
    },
    DidMove {
        panel: &'static str,
        attached: bool,
    },
    BeginAppearance {
        panel: &'static str,
        appearing: bool,
        animated: bool,
    },
    EndAppearance {
        panel: &'static str,
    },
    WillTransition {
        to: Slot,
        side_before: Slot,
    },
    DidTransition {
        to: Slot,
        side_at: Slot,
    },
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Panel that records every callback into a shared log
pub struct RecordingPanel {
    name: &'static str,
    log: Log,
    preferred: Option<Size>,
}

impl RecordingPanel {
    /// Panel with a private log nobody reads
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            log: new_log(),
            preferred: None,
        }
    }
}

impl Panel for RecordingPanel {
    fn name(&self) -> &str {
        self.name
    }

    fn will_move_to_parent(&mut self, parent: Option<ContainerId>) {
        self.log.borrow_mut().push(Event::WillMove {
            panel: self.name,
            attached: parent.is_some(),
        });
    }

    fn did_move_to_parent(&mut self, parent: Option<ContainerId>) {
        self.log.borrow_mut().push(Event::DidMove {
            panel: self.name,
            attached: parent.is_some(),
        });
    }

    fn begin_appearance_transition(&mut self, is_appearing: bool, animated: bool) {
        self.log.borrow_mut().push(Event::BeginAppearance {
            panel: self.name,
            appearing: is_appearing,
            animated,
        });
    }

    fn end_appearance_transition(&mut self) {
        self.log
            .borrow_mut()
            .push(Event::EndAppearance { panel: self.name });
    }

    fn preferred_size(&self) -> Option<Size> {
        self.preferred
    }
}

pub fn panel(name: &'static str, log: &Log) -> PanelRef {
    PanelRef::new(RecordingPanel {
        name,
        log: log.clone(),
        preferred: None,
    })
}

pub fn sized_panel(name: &'static str, log: &Log, size: Size) -> PanelRef {
    PanelRef::new(RecordingPanel {
        name,
        log: log.clone(),
        preferred: Some(size),
    })
}

/// Delegate that records transitions and the side seen at each callback
pub struct RecordingDelegate {
    log: Log,
}

impl RecordingDelegate {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl PanelDelegate for RecordingDelegate {
    fn will_transition(&mut self, container: &PanelContainer, to: Slot) {
        self.log.borrow_mut().push(Event::WillTransition {
            to,
            side_before: container.current_side(),
        });
    }

    fn did_transition(&mut self, container: &PanelContainer, to: Slot) {
        self.log.borrow_mut().push(Event::DidTransition {
            to,
            side_at: container.current_side(),
        });
    }
}

/// Container with a recorded Center panel named "center" and a delegate
pub struct Fixture {
    pub container: PanelContainer,
    pub host: RecordingHost,
    pub log: Log,
    pub center: PanelRef,
}

impl Fixture {
    pub fn new() -> Self {
        let log = new_log();
        let host = RecordingHost::new(BOUNDS);
        let center = panel("center", &log);
        let mut container = PanelContainer::new(center.clone(), host.clone());
        container.set_delegate(RecordingDelegate::new(&log));
        log.borrow_mut().clear();
        host.clear_events();
        Self {
            container,
            host,
            log,
            center,
        }
    }

    /// Fixture with a panel in every side slot, named after the slot
    pub fn with_all_sides() -> Self {
        let mut fixture = Self::new();
        for (slot, name) in [
            (Slot::Left, "left"),
            (Slot::Right, "right"),
            (Slot::Top, "top"),
            (Slot::Bottom, "bottom"),
        ] {
            let side = panel(name, &fixture.log);
            fixture.container.assign(slot, Some(side));
        }
        fixture.reset_logs();
        fixture
    }

    pub fn panel(&self, name: &'static str) -> PanelRef {
        panel(name, &self.log)
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn reset_logs(&self) {
        self.log.borrow_mut().clear();
        self.host.clear_events();
    }

    /// Number of completed detach sequences for a panel
    pub fn detaches(&self, name: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::DidMove { panel, attached: false } if *panel == name))
            .count()
    }

    /// Number of completed attach sequences for a panel
    pub fn attaches(&self, name: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::DidMove { panel, attached: true } if *panel == name))
            .count()
    }

    /// Report every running animation to the container
    pub fn finish_animations(&mut self, finished: bool) {
        for id in self.host.take_running() {
            self.container.animation_finished(id, finished);
        }
    }
}
