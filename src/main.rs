//! slidepanel demo binary
//!
//! Builds a container with five labelled panels on a recording host and
//! walks it through a script of transitions, printing the resolved frames
//! after each step.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use slidepanel::cli::{CliArgs, DemoConfig};
use slidepanel::host::RecordingHost;
use slidepanel::layout::Rect;
use slidepanel::messages::PanelMsg;
use slidepanel::panel::{ContainerId, Panel, PanelContainer, PanelDelegate, PanelRef, Slot};
use slidepanel::update::update;
use slidepanel::PanelConfig;

/// Panel that only logs its lifecycle
struct LabelPanel {
    label: String,
}

impl LabelPanel {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }
}

impl Panel for LabelPanel {
    fn name(&self) -> &str {
        &self.label
    }

    fn did_move_to_parent(&mut self, parent: Option<ContainerId>) {
        tracing::info!(panel = %self.label, ?parent, "moved");
    }

    fn begin_appearance_transition(&mut self, is_appearing: bool, animated: bool) {
        tracing::info!(panel = %self.label, is_appearing, animated, "appearance begins");
    }

    fn end_appearance_transition(&mut self) {
        tracing::info!(panel = %self.label, "appearance ends");
    }
}

struct LogDelegate;

impl PanelDelegate for LogDelegate {
    fn will_transition(&mut self, container: &PanelContainer, to: Slot) {
        tracing::info!(from = %container.current_side(), %to, "will transition");
    }

    fn did_transition(&mut self, _container: &PanelContainer, to: Slot) {
        tracing::info!(%to, "did transition");
    }
}

#[derive(Debug, Serialize)]
struct FrameReport {
    slot: Slot,
    name: String,
    frame: Rect,
}

#[derive(Debug, Serialize)]
struct StepReport {
    step: usize,
    side: Slot,
    offset: Option<(f32, f32)>,
    frames: Vec<FrameReport>,
}

fn report(step: usize, container: &PanelContainer, host: &RecordingHost) -> StepReport {
    let frames = container
        .panels()
        .filter_map(|(slot, panel)| {
            host.frame(panel.view_id()).map(|frame| FrameReport {
                slot,
                name: panel.name(),
                frame,
            })
        })
        .collect();

    StepReport {
        step,
        side: container.current_side(),
        offset: container.center_offset(),
        frames,
    }
}

fn print_report(report: &StepReport) {
    let (dx, dy) = report.offset.unwrap_or((0.0, 0.0));
    println!(
        "step {:>2}: side={:<6} offset=({:>7.1}, {:>7.1})",
        report.step, report.side, dx, dy
    );
    for frame in &report.frames {
        let rect = frame.frame;
        println!(
            "    {:<6} {:<8} x={:>7.1} y={:>7.1} w={:>6.1} h={:>6.1}",
            frame.slot, frame.name, rect.x, rect.y, rect.width, rect.height
        );
    }
}

fn run(demo: DemoConfig) -> Result<()> {
    let host = RecordingHost::new(demo.bounds);

    let mut container = PanelContainer::builder(host.clone())
        .center(PanelRef::new(LabelPanel::new("content")))
        .panel(Slot::Left, PanelRef::new(LabelPanel::new("menu")))
        .panel(Slot::Right, PanelRef::new(LabelPanel::new("details")))
        .panel(Slot::Top, PanelRef::new(LabelPanel::new("search")))
        .panel(Slot::Bottom, PanelRef::new(LabelPanel::new("player")))
        .transition_duration(demo.duration)
        .delegate(LogDelegate)
        .try_build()?;

    let mut reports = vec![report(0, &container, &host)];

    for (index, side) in demo.steps.iter().copied().enumerate() {
        update(
            &mut container,
            PanelMsg::TransitionTo {
                side,
                animated: demo.animated,
                duration: None,
            },
        );

        // The recording host lands on final frames immediately; report the
        // animations as finished so completions run before the next step.
        for id in host.take_running() {
            update(&mut container, PanelMsg::AnimationFinished { id, finished: true });
        }

        reports.push(report(index + 1, &container, &host));
    }

    if demo.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    slidepanel::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => PanelConfig::load_from(path),
        None => PanelConfig::load(),
    };
    let demo = args.into_config(&config).map_err(anyhow::Error::msg)?;

    run(demo)
}
