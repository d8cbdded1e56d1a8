//! Command-line argument parsing
//!
//! Supports:
//! - Loading an alternate config file
//! - Ignoring the config file entirely
//! - Restricting which panels open
//! - Printing or saving the effective config

use clap::Parser;
use std::path::PathBuf;

use crate::config::WidgetsConfig;
use crate::model::PanelKind;

/// Frameless desktop panels you can fling around the screen
#[derive(Parser, Debug)]
#[command(name = "desktop-widgets", version, about = "Flingable desktop widget panels")]
pub struct CliArgs {
    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore any config file and use built-in defaults
    #[arg(long, conflicts_with = "config")]
    pub defaults: bool,

    /// Only open these panels (system-monitor, network, battery, music)
    #[arg(short = 'p', long = "panel", value_name = "KIND")]
    pub panels: Vec<String>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective configuration to the default config file and exit
    #[arg(long, conflicts_with = "print_config")]
    pub save_config: bool,
}

/// Where the config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `~/.config/desktop-widgets/config.yaml`
    Default,
    /// An explicit `--config` path
    File(PathBuf),
    /// `--defaults`: nothing is read from disk
    BuiltIn,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source: ConfigSource,
    /// Empty means "whatever the config lists"
    pub only_panels: Vec<PanelKind>,
    pub print_config: bool,
    pub save_config: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let source = if self.defaults {
            ConfigSource::BuiltIn
        } else if let Some(path) = self.config {
            ConfigSource::File(path)
        } else {
            ConfigSource::Default
        };

        let only_panels = self
            .panels
            .iter()
            .map(|name| {
                PanelKind::from_slug(name).ok_or_else(|| format!("Unknown panel kind: {}", name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StartupConfig {
            source,
            only_panels,
            print_config: self.print_config,
            save_config: self.save_config,
        })
    }
}

impl StartupConfig {
    /// Load the widgets config this startup asks for
    pub fn load_widgets_config(&self) -> WidgetsConfig {
        let mut config = match &self.source {
            ConfigSource::Default => WidgetsConfig::load(),
            ConfigSource::File(path) => WidgetsConfig::load_from(path),
            ConfigSource::BuiltIn => WidgetsConfig::default(),
        };
        self.apply_panel_filter(&mut config);
        config
    }

    /// Drop configured panels that weren't asked for on the command line
    ///
    /// A requested kind missing from the config is opened with the default
    /// layout's anchor for that kind.
    pub fn apply_panel_filter(&self, config: &mut WidgetsConfig) {
        if self.only_panels.is_empty() {
            return;
        }

        config
            .panels
            .retain(|spec| self.only_panels.contains(&spec.kind));

        for kind in &self.only_panels {
            if config.panels.iter().any(|spec| spec.kind == *kind) {
                continue;
            }
            if let Some(spec) = crate::config::default_panels()
                .into_iter()
                .find(|spec| spec.kind == *kind)
            {
                config.panels.push(spec);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelSpec;
    use crate::model::Anchor;

    fn args() -> CliArgs {
        CliArgs {
            config: None,
            defaults: false,
            panels: vec![],
            print_config: false,
            save_config: false,
        }
    }

    #[test]
    fn test_no_args_uses_default_config() {
        let config = args().into_config().unwrap();
        assert_eq!(config.source, ConfigSource::Default);
        assert!(config.only_panels.is_empty());
        assert!(!config.print_config);
    }

    #[test]
    fn test_defaults_flag() {
        let config = CliArgs {
            defaults: true,
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(config.source, ConfigSource::BuiltIn);
    }

    #[test]
    fn test_config_path() {
        let config = CliArgs {
            config: Some(PathBuf::from("/tmp/widgets.yaml")),
            ..args()
        }
        .into_config()
        .unwrap();
        assert_eq!(
            config.source,
            ConfigSource::File(PathBuf::from("/tmp/widgets.yaml"))
        );
    }

    #[test]
    fn test_unknown_panel_is_an_error() {
        let result = CliArgs {
            panels: vec!["weather".to_string()],
            ..args()
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_panel_filter_keeps_requested_kinds() {
        let startup = CliArgs {
            panels: vec!["battery".to_string(), "music".to_string()],
            ..args()
        }
        .into_config()
        .unwrap();

        let mut config = WidgetsConfig::default();
        startup.apply_panel_filter(&mut config);
        let kinds: Vec<_> = config.panels.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![PanelKind::Battery, PanelKind::Music]);
    }

    #[test]
    fn test_panel_filter_adds_missing_kind_with_default_anchor() {
        let startup = CliArgs {
            panels: vec!["network".to_string()],
            ..args()
        }
        .into_config()
        .unwrap();

        let mut config = WidgetsConfig {
            panels: vec![PanelSpec::new(PanelKind::Battery, Anchor::TopLeft)],
            ..WidgetsConfig::default()
        };
        startup.apply_panel_filter(&mut config);
        assert_eq!(
            config.panels,
            vec![PanelSpec::new(PanelKind::Network, Anchor::TopLeft)]
        );
    }

    #[test]
    fn test_clap_parses_repeated_panels() {
        let parsed =
            CliArgs::try_parse_from(["desktop-widgets", "-p", "battery", "--panel", "network"])
                .unwrap();
        assert_eq!(parsed.panels, vec!["battery", "network"]);
    }

    #[test]
    fn test_clap_parses_save_config() {
        let startup = CliArgs::try_parse_from(["desktop-widgets", "--defaults", "--save-config"])
            .unwrap()
            .into_config()
            .unwrap();
        assert!(startup.save_config);
        assert!(!startup.print_config);
        assert_eq!(startup.source, ConfigSource::BuiltIn);
    }

    #[test]
    fn test_clap_rejects_print_with_save() {
        let parsed =
            CliArgs::try_parse_from(["desktop-widgets", "--print-config", "--save-config"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_clap_rejects_config_with_defaults() {
        let parsed =
            CliArgs::try_parse_from(["desktop-widgets", "--defaults", "--config", "x.yaml"]);
        assert!(parsed.is_err());
    }
}
