use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub background: BackgroundKind,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub terminal: TerminalConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

/// Which decorative layer is drawn behind the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Twinkling stars drifting down, with the scroll-linked rocket
    #[default]
    Starfield,
    /// Pointer-attracted particles joined by faint lines
    Particles,
    /// No background at all
    None,
}

impl std::str::FromStr for BackgroundKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "starfield" | "stars" => Ok(BackgroundKind::Starfield),
            "particles" | "particle-field" => Ok(BackgroundKind::Particles),
            "none" | "off" => Ok(BackgroundKind::None),
            other => Err(ConfigError::ValidationError(format!(
                "unknown background '{other}' (expected starfield, particles or none)"
            ))),
        }
    }
}

/// Animation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Frame rate cap for the throttled starfield
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,

    /// Square pixels of viewport per particle in the particle field
    #[serde(default = "default_particle_area")]
    pub particle_area_px: f64,

    /// Square pixels of viewport per star in the starfield
    #[serde(default = "default_star_area")]
    pub star_area_px: f64,
}

fn default_target_fps() -> u32 {
    60
}

fn default_particle_area() -> f64 {
    15_000.0
}

fn default_star_area() -> f64 {
    3_000.0
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
            particle_area_px: default_particle_area(),
            star_area_px: default_star_area(),
        }
    }
}

/// Command terminal panel behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_false")]
    pub open_on_start: bool,

    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_false() -> bool {
    false
}

fn default_prompt() -> String {
    "visitor@folio:~".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            open_on_start: false,
            prompt: default_prompt(),
        }
    }
}

/// External resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

fn default_resume_url() -> String {
    "https://pratikdesai.dev/resume.pdf".to_string()
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            resume_url: default_resume_url(),
        }
    }
}

/// Contact form delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Form id on the hosted form processor
    #[serde(default = "default_form_id")]
    pub form_id: String,

    #[serde(default = "default_contact_timeout")]
    pub timeout_secs: u64,
}

fn default_form_id() -> String {
    "xreazdyp".to_string()
}

fn default_contact_timeout() -> u64 {
    10
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: default_form_id(),
            timeout_secs: default_contact_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: BackgroundKind::default(),
            animation: AnimationConfig::default(),
            terminal: TerminalConfig::default(),
            links: LinksConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.as_ref().display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        std::fs::write(path.as_ref(), contents)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.target_fps == 0 {
            return Err(ConfigError::ValidationError(
                "animation.target_fps must be greater than 0".to_string(),
            ));
        }

        if !is_positive(self.animation.particle_area_px) || !is_positive(self.animation.star_area_px) {
            return Err(ConfigError::ValidationError(
                "animation areas must be positive".to_string(),
            ));
        }

        if self.contact.form_id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "contact.form_id cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
