//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/circle-points/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::render::color::ColorToken;
use crate::render::RenderStyle;
use crate::report::ReportSettings;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default circle and style parameters
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Author printed in reports
    #[serde(default)]
    pub author: AuthorConfig,

    /// Preview image settings
    #[serde(default)]
    pub plot: PlotConfig,

    /// Report document settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Default values for generation and rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_center_x")]
    pub center_x: f64,

    #[serde(default = "default_center_y")]
    pub center_y: f64,

    /// Radius in meters
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Number of points on the circle
    #[serde(default = "default_points")]
    pub points: usize,

    #[serde(default = "default_point_color")]
    pub point_color: String,

    #[serde(default = "default_center_color")]
    pub center_color: String,

    /// Number the points on plots
    #[serde(default = "default_show_index")]
    pub show_index: bool,

    /// Coordinate table format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Report author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorConfig {
    #[serde(default = "default_author_name")]
    pub name: String,

    #[serde(default = "default_author_contact")]
    pub contact: String,
}

/// Preview image size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_plot_width")]
    pub width: u32,

    #[serde(default = "default_plot_height")]
    pub height: u32,
}

/// Report document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title line at the top of the page
    #[serde(default = "default_report_title")]
    pub title: String,

    /// Edge length of the embedded plot raster in pixels
    #[serde(default = "default_report_image_size")]
    pub image_size: u32,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions for serde
fn default_center_x() -> f64 {
    DEFAULT_CENTER_X
}
fn default_center_y() -> f64 {
    DEFAULT_CENTER_Y
}
fn default_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_points() -> usize {
    DEFAULT_POINTS
}
fn default_point_color() -> String {
    DEFAULT_POINT_COLOR.to_string()
}
fn default_center_color() -> String {
    DEFAULT_CENTER_COLOR.to_string()
}
fn default_show_index() -> bool {
    DEFAULT_SHOW_INDEX
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_author_name() -> String {
    DEFAULT_AUTHOR_NAME.to_string()
}
fn default_author_contact() -> String {
    DEFAULT_AUTHOR_CONTACT.to_string()
}
fn default_plot_width() -> u32 {
    DEFAULT_PLOT_WIDTH
}
fn default_plot_height() -> u32 {
    DEFAULT_PLOT_HEIGHT
}
fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}
fn default_report_image_size() -> u32 {
    DEFAULT_REPORT_IMAGE_SIZE
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            center_x: default_center_x(),
            center_y: default_center_y(),
            radius: default_radius(),
            points: default_points(),
            point_color: default_point_color(),
            center_color: default_center_color(),
            show_index: default_show_index(),
            format: default_format(),
        }
    }
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: default_author_name(),
            contact: default_author_contact(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_plot_width(),
            height: default_plot_height(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_report_title(),
            image_size: default_report_image_size(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "center_x"] => Some(self.defaults.center_x.to_string()),
            ["defaults", "center_y"] => Some(self.defaults.center_y.to_string()),
            ["defaults", "radius"] => Some(self.defaults.radius.to_string()),
            ["defaults", "points"] => Some(self.defaults.points.to_string()),
            ["defaults", "point_color"] => Some(self.defaults.point_color.clone()),
            ["defaults", "center_color"] => Some(self.defaults.center_color.clone()),
            ["defaults", "show_index"] => Some(self.defaults.show_index.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["author", "name"] => Some(self.author.name.clone()),
            ["author", "contact"] => Some(self.author.contact.clone()),

            ["plot", "width"] => Some(self.plot.width.to_string()),
            ["plot", "height"] => Some(self.plot.height.to_string()),

            ["report", "title"] => Some(self.report.title.clone()),
            ["report", "image_size"] => Some(self.report.image_size.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "center_x"] => {
                self.defaults.center_x = parse_value(value, "center_x")?;
            }
            ["defaults", "center_y"] => {
                self.defaults.center_y = parse_value(value, "center_y")?;
            }
            ["defaults", "radius"] => {
                self.defaults.radius = parse_value(value, "radius")?;
            }
            ["defaults", "points"] => {
                self.defaults.points = parse_value(value, "points")?;
            }
            ["defaults", "point_color"] => {
                self.defaults.point_color = parse_color(value)?;
            }
            ["defaults", "center_color"] => {
                self.defaults.center_color = parse_color(value)?;
            }
            ["defaults", "show_index"] => {
                self.defaults.show_index = parse_value(value, "boolean")?;
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["author", "name"] => {
                self.author.name = value.to_string();
            }
            ["author", "contact"] => {
                self.author.contact = value.to_string();
            }

            ["plot", "width"] => {
                self.plot.width = parse_value(value, "width")?;
            }
            ["plot", "height"] => {
                self.plot.height = parse_value(value, "height")?;
            }

            ["report", "title"] => {
                self.report.title = value.to_string();
            }
            ["report", "image_size"] => {
                self.report.image_size = parse_value(value, "image size")?;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = parse_value(value, "port")?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.center_x",
            "defaults.center_y",
            "defaults.radius",
            "defaults.points",
            "defaults.point_color",
            "defaults.center_color",
            "defaults.show_index",
            "defaults.format",
            "author.name",
            "author.contact",
            "plot.width",
            "plot.height",
            "report.title",
            "report.image_size",
            "server.host",
            "server.port",
        ]
    }

    /// Preview style from the configured defaults
    pub fn render_style(&self) -> Result<RenderStyle> {
        Ok(RenderStyle {
            point_color: self.defaults.point_color.parse::<ColorToken>()?,
            center_color: self.defaults.center_color.parse::<ColorToken>()?,
            show_index: self.defaults.show_index,
            width: self.plot.width,
            height: self.plot.height,
        })
    }

    /// Report settings from the `[report]` section
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            title: self.report.title.clone(),
            image_width: self.report.image_size,
            image_height: self.report.image_size,
        }
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_value<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {} value: {}", what, value)))
}

fn parse_color(value: &str) -> Result<String> {
    let color: ColorToken = value
        .parse()
        .map_err(|e| Error::Config(format!("{}", e)))?;
    Ok(color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.defaults.radius, 5.0);
        assert_eq!(config.defaults.points, 8);
        assert_eq!(config.defaults.point_color, "#ff0000");
        assert_eq!(config.defaults.center_color, "#0000ff");
        assert!(config.defaults.show_index);
        assert_eq!(config.server.port, 7879);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.points"), Some("8".to_string()));

        config.set("defaults.points", "12").unwrap();
        assert_eq!(config.get("defaults.points"), Some("12".to_string()));

        config.set("defaults.radius", "2.5").unwrap();
        assert_eq!(config.defaults.radius, 2.5);

        config.set("author.name", "Jiří Dvořák").unwrap();
        assert_eq!(config.get("author.name"), Some("Jiří Dvořák".to_string()));
    }

    #[test]
    fn test_set_color_normalizes() {
        let mut config = Config::default();
        config.set("defaults.point_color", "#0F0").unwrap();
        assert_eq!(config.defaults.point_color, "#00ff00");
    }

    #[test]
    fn test_set_invalid_color() {
        let mut config = Config::default();
        assert!(config.set("defaults.center_color", "blue").is_err());
        assert_eq!(config.defaults.center_color, "#0000ff");
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        let result = config.set("invalid.key", "value");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("defaults.radius", "not_a_number").is_err());
        assert!(config.set("defaults.show_index", "maybe").is_err());
        assert!(config.set("server.port", "70000").is_err());
    }

    #[test]
    fn test_every_key_readable() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "no value for {}", key);
        }
    }

    #[test]
    fn test_render_style() {
        let config = Config::default();
        let style = config.render_style().unwrap();

        assert_eq!(style.point_color, ColorToken::new(255, 0, 0));
        assert_eq!(style.width, 800);
        assert!(style.show_index);
    }

    #[test]
    fn test_render_style_rejects_bad_color() {
        let mut config = Config::default();
        config.defaults.point_color = "nope".to_string();
        assert!(matches!(config.render_style(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_report_settings() {
        let config = Config::default();
        let settings = config.report_settings();
        assert_eq!(settings.title, "Points on a circle");
        assert_eq!(settings.image_width, 1200);
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.defaults.points = 24;
            config.author.name = "Jan Novak".to_string();
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.defaults.points, 24);
            assert_eq!(loaded.author.name, "Jan Novak");
        });
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.defaults.radius, 5.0);
        assert_eq!(loaded.report.image_size, 1200);
        assert_eq!(loaded.server.port, 7879);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[defaults]\npoints = 3\n").unwrap();
        assert_eq!(loaded.defaults.points, 3);
        assert_eq!(loaded.defaults.radius, 5.0);
        assert_eq!(loaded.author.name, "Jan Novak");
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[author]"));
        assert!(toml.contains("[report]"));
        assert!(toml.contains("[server]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:7879");
    }
}
