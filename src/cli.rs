//! Command-line argument parsing for the demo walkthrough
//!
//! Supports:
//! - Container bounds
//! - A comma-separated script of transitions
//! - Forcing synchronous transitions or overriding their duration
//! - JSON output of the resolved frames

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::PanelConfig;
use crate::layout::Size;
use crate::panel::Slot;

/// Walk a sliding panel container through a script of transitions
#[derive(Parser, Debug)]
#[command(name = "slidepanel", version, about = "Sliding panel container demo")]
pub struct CliArgs {
    /// Container width in points
    #[arg(long, default_value_t = 320.0)]
    pub width: f32,

    /// Container height in points
    #[arg(long, default_value_t = 480.0)]
    pub height: f32,

    /// Comma-separated slots to transition to, in order
    #[arg(short, long, default_value = "left,center,right,center,top,bottom,center")]
    pub script: String,

    /// Run every transition synchronously
    #[arg(long)]
    pub no_animate: bool,

    /// Override the configured transition duration
    #[arg(long, value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print resolved frames as JSON
    #[arg(long)]
    pub json: bool,
}

/// Demo settings derived from CLI arguments and config
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub bounds: Size,
    pub steps: Vec<Slot>,
    pub animated: bool,
    pub duration: Duration,
    pub json: bool,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded config
    pub fn into_config(self, config: &PanelConfig) -> Result<DemoConfig, String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!(
                "Bounds must be positive, got {}x{}",
                self.width, self.height
            ));
        }

        let steps = parse_script(&self.script)?;

        Ok(DemoConfig {
            bounds: Size::new(self.width, self.height),
            steps,
            animated: config.animate_transitions && !self.no_animate,
            duration: self
                .duration_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.transition_duration()),
            json: self.json,
        })
    }
}

/// Parse `left,center,...` into slots
pub fn parse_script(script: &str) -> Result<Vec<Slot>, String> {
    script
        .split(',')
        .filter(|step| !step.trim().is_empty())
        .map(|step| Slot::from_name(step).ok_or_else(|| format!("Unknown slot '{}'", step.trim())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(script: &str) -> CliArgs {
        CliArgs {
            width: 320.0,
            height: 480.0,
            script: script.to_string(),
            no_animate: false,
            duration_ms: None,
            config: None,
            json: false,
        }
    }

    #[test]
    fn test_parse_script() {
        assert_eq!(
            parse_script("left, center,BOTTOM").unwrap(),
            vec![Slot::Left, Slot::Center, Slot::Bottom]
        );
        assert_eq!(parse_script("").unwrap(), vec![]);
        assert!(parse_script("left,diagonal").unwrap_err().contains("diagonal"));
    }

    #[test]
    fn test_into_config_uses_config_defaults() {
        let config = PanelConfig::default();
        let demo = args("right").into_config(&config).unwrap();
        assert!(demo.animated);
        assert_eq!(demo.duration, Duration::from_millis(250));
        assert_eq!(demo.steps, vec![Slot::Right]);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = PanelConfig::default();
        let mut cli = args("top");
        cli.no_animate = true;
        cli.duration_ms = Some(40);
        let demo = cli.into_config(&config).unwrap();
        assert!(!demo.animated);
        assert_eq!(demo.duration, Duration::from_millis(40));
    }

    #[test]
    fn test_rejects_empty_bounds() {
        let mut cli = args("left");
        cli.width = 0.0;
        assert!(cli.into_config(&PanelConfig::default()).is_err());
    }

    #[test]
    fn test_clap_parses_flags() {
        let cli = CliArgs::parse_from([
            "slidepanel",
            "--width",
            "100",
            "--script",
            "left",
            "--no-animate",
            "--json",
        ]);
        assert_eq!(cli.width, 100.0);
        assert!(cli.no_animate);
        assert!(cli.json);
    }
}
