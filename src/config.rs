//! Display configuration, optionally loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{AdjError, AdjResult};

/// Rank direction of the hierarchical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    TopDown,
    LeftRight,
}

/// Shape drawn for every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    #[default]
    Circle,
    Box,
}

/// How the graph is laid out and which program shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Layout direction.
    #[serde(default)]
    pub direction: Direction,
    /// Node shape.
    #[serde(default)]
    pub shape: NodeShape,
    /// Node width and height in SVG units.
    #[serde(default = "default_node_size")]
    pub node_size: f64,
    /// Viewer command. Platform default when unset.
    #[serde(default)]
    pub viewer: Option<String>,
}

fn default_node_size() -> f64 {
    40.0
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            shape: NodeShape::default(),
            node_size: default_node_size(),
            viewer: None,
        }
    }
}

impl DisplayConfig {
    /// The viewer to launch: the configured one, else the platform opener.
    pub fn viewer_command(&self) -> &str {
        match &self.viewer {
            Some(cmd) => cmd,
            None => default_viewer(),
        }
    }
}

fn default_viewer() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Parse a display configuration from TOML text.
pub fn parse_config(content: &str) -> AdjResult<DisplayConfig> {
    let config: DisplayConfig = toml::from_str(content)
        .map_err(|e| AdjError::Config(format!("Failed to parse config: {e}")))?;
    if !(config.node_size.is_finite() && config.node_size > 0.0) {
        return Err(AdjError::Config(format!(
            "node_size must be positive, got {}",
            config.node_size
        )));
    }
    Ok(config)
}

/// Load a display configuration from a TOML file.
pub fn load_config(path: &Path) -> AdjResult<DisplayConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AdjError::Config(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    log::debug!("Loaded display config from {}", path.display());
    parse_config(&content)
}
