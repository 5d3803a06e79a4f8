//! Schema definitions for the brain's `config.json` and the invocation enums.
//!
//! This module provides:
//! - Rust structs representing the `config.json` schema
//! - Feature and auto-behavior lookups with JSON truthiness
//! - The `Mode`, `Zone` and `OutputFormat` selectors with lenient parsing

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::models::json::{deserialize_or_default, display_value, present, truthy};
use crate::{Error, Result};

/// Feature flag names read from `config.json` `features`.
pub mod features {
    pub const ENTITY_MANAGEMENT: &str = "entity_management";
    pub const GSD_WORKFLOW: &str = "gsd_workflow";
    pub const TIME_TRACKING: &str = "time_tracking";
    pub const CONTENT_PIPELINE: &str = "content_pipeline";
    pub const COMMUNICATIONS: &str = "communications";
    pub const INTAKE_PROCESSING: &str = "intake_processing";
    pub const OUTREACH_ENGINE: &str = "outreach_engine";
    pub const MEETING_TRANSCRIPTION: &str = "meeting_transcription";
    pub const PROJECT_TRACKING: &str = "project_tracking";
}

/// Auto-behavior names read from `config.json` `auto_behaviors`.
pub mod behaviors {
    pub const ENTITY_DETECTION: &str = "entity_detection";
    pub const ACTION_ITEM_EXTRACTION: &str = "action_item_extraction";
    pub const DECISION_LOGGING: &str = "decision_logging";
}

/// The auto-behavior value that disables a behavior.
pub const BEHAVIOR_OFF: &str = "off";

/// Output mode: how much detail the header carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Compact,
    Full,
}

impl Mode {
    /// Parse from string. Anything other than `full` is compact.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("full") {
            Mode::Full
        } else {
            Mode::Compact
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Compact => "compact",
            Mode::Full => "full",
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Mode::Full)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the session originates, selecting which generator runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Inside the brain itself
    #[default]
    Brain,
    /// A code workspace
    Workspaces,
    /// The unified launch point
    Launchpad,
    /// Anywhere else on the machine
    External,
}

impl Zone {
    /// Parse from string. Unrecognized zones fall back to `Brain`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "workspaces" => Zone::Workspaces,
            "launchpad" => Zone::Launchpad,
            "external" => Zone::External,
            _ => Zone::Brain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Brain => "brain",
            Zone::Workspaces => "workspaces",
            Zone::Launchpad => "launchpad",
            Zone::External => "external",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output format for the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Raw Markdown (default, what session-start hooks inject)
    #[default]
    Markdown,
    /// JSON envelope around the document
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the entity watchdog treats entity mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogMode {
    /// Update known entities directly and notify the user
    AutoUpdate,
    /// Confirm with the user before any update
    AskFirst,
    /// Off or an unrecognized value; no watchdog text is emitted
    Disabled,
}

impl WatchdogMode {
    pub fn parse(s: &str) -> Self {
        match s {
            "auto_update" => WatchdogMode::AutoUpdate,
            "ask_first" => WatchdogMode::AskFirst,
            _ => WatchdogMode::Disabled,
        }
    }
}

/// Business profile from `config.json`.
///
/// Fields keep whatever JSON the file holds; falsy values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub business_name: Value,
    pub user_name: Value,
    pub business_type: Value,
    pub industry: Value,
}

impl Profile {
    /// Business name, or `My` when unset.
    pub fn business_name(&self) -> String {
        present(&self.business_name).unwrap_or_else(|| "My".to_string())
    }

    /// Owner name, or `Unknown` when unset.
    pub fn user_name(&self) -> String {
        present(&self.user_name).unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn business_type(&self) -> Option<String> {
        present(&self.business_type)
    }

    pub fn industry(&self) -> Option<String> {
        present(&self.industry)
    }
}

/// User preferences from `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub comm_style: Value,
}

impl Preferences {
    pub fn comm_style(&self) -> Option<String> {
        present(&self.comm_style)
    }
}

/// Results of the last machine scan, maintained by the brain's scanner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanCache {
    pub last_scan_at: Value,
    pub project_count: Value,
    pub entity_count: Value,
    pub service_count: Value,
}

impl ScanCache {
    pub fn last_scan_at(&self) -> Option<String> {
        present(&self.last_scan_at)
    }

    pub fn project_count(&self) -> String {
        count(&self.project_count)
    }

    pub fn entity_count(&self) -> String {
        count(&self.entity_count)
    }

    pub fn service_count(&self) -> String {
        count(&self.service_count)
    }
}

/// The brain's `config.json`.
///
/// # Schema
///
/// ```json
/// {
///   "profile": { "businessName": "Acme", "userName": "Sam", "businessType": "agency", "industry": "software" },
///   "features": { "entity_management": true, "time_tracking": false },
///   "auto_behaviors": { "entity_detection": "auto_update", "action_item_extraction": "off" },
///   "preferences": { "commStyle": "concise" },
///   "scan_cache": { "lastScanAt": "2026-01-31T09:00:00Z", "projectCount": 12, "entityCount": 40, "serviceCount": 3 }
/// }
/// ```
///
/// `features` and `auto_behaviors` keep file order so listings match the config.
/// A section that is `null` or not an object reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    #[serde(deserialize_with = "deserialize_or_default")]
    pub profile: Profile,
    #[serde(deserialize_with = "deserialize_or_default")]
    pub features: Map<String, Value>,
    #[serde(deserialize_with = "deserialize_or_default")]
    pub auto_behaviors: Map<String, Value>,
    #[serde(deserialize_with = "deserialize_or_default")]
    pub preferences: Preferences,
    #[serde(deserialize_with = "deserialize_or_default")]
    pub scan_cache: ScanCache,
}

impl BrainConfig {
    /// Load and parse a `config.json`.
    ///
    /// Unlike every other brain file, a config that is not a JSON object is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|source| Error::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Whether a feature flag is on.
    pub fn feature(&self, name: &str) -> bool {
        self.features.get(name).is_some_and(truthy)
    }

    /// Names of enabled features in config order, underscores shown as spaces.
    pub fn active_features(&self) -> Vec<String> {
        self.features
            .iter()
            .filter(|(_, enabled)| truthy(enabled))
            .map(|(name, _)| humanize(name))
            .collect()
    }

    /// Raw mode string of an auto-behavior, if configured.
    pub fn behavior(&self, name: &str) -> Option<String> {
        self.auto_behaviors.get(name).map(display_value)
    }

    /// Whether an auto-behavior is anything other than `off`. Unset counts as on.
    pub fn behavior_enabled(&self, name: &str) -> bool {
        self.behavior(name).as_deref() != Some(BEHAVIOR_OFF)
    }

    /// Configured behaviors that are not `off`, as (humanized name, mode) pairs.
    pub fn active_behaviors(&self) -> Vec<(String, String)> {
        self.auto_behaviors
            .iter()
            .map(|(name, mode)| (humanize(name), display_value(mode)))
            .filter(|(_, mode)| mode != BEHAVIOR_OFF)
            .collect()
    }

    /// Entity watchdog mode; `auto_update` when unset.
    pub fn watchdog_mode(&self) -> WatchdogMode {
        match self.behavior(behaviors::ENTITY_DETECTION) {
            Some(mode) => WatchdogMode::parse(&mode),
            None => WatchdogMode::AutoUpdate,
        }
    }
}

/// `snake_case` key to a readable label.
pub fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

fn count(value: &Value) -> String {
    present(value).unwrap_or_else(|| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "profile": {"businessName": "Acme", "userName": "Sam", "industry": ""},
        "features": {"time_tracking": true, "entity_management": true, "gsd_workflow": false},
        "auto_behaviors": {"entity_detection": "ask_first", "action_item_extraction": "off", "decision_logging": "suggest"},
        "preferences": {"commStyle": "concise"},
        "scan_cache": {"lastScanAt": "2026-01-31T09:00:00Z", "projectCount": 4}
    }"#;

    #[test]
    fn test_zone_parse_falls_back_to_brain() {
        assert_eq!(Zone::parse("workspaces"), Zone::Workspaces);
        assert_eq!(Zone::parse("LAUNCHPAD"), Zone::Launchpad);
        assert_eq!(Zone::parse("external"), Zone::External);
        assert_eq!(Zone::parse("brain"), Zone::Brain);
        assert_eq!(Zone::parse("somewhere-else"), Zone::Brain);
        assert_eq!(Zone::parse(""), Zone::Brain);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("full"), Mode::Full);
        assert_eq!(Mode::parse("compact"), Mode::Compact);
        assert_eq!(Mode::parse("verbose"), Mode::Compact);
        assert_eq!(format!("{}", Mode::Full), "full");
    }

    #[test]
    fn test_parse_sample_config() {
        let config = BrainConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.profile.business_name(), "Acme");
        assert_eq!(config.profile.user_name(), "Sam");
        assert_eq!(config.profile.industry(), None);
        assert_eq!(config.preferences.comm_style().as_deref(), Some("concise"));
        assert_eq!(config.scan_cache.project_count(), "4");
        assert_eq!(config.scan_cache.entity_count(), "0");
    }

    #[test]
    fn test_null_sections_read_as_empty() {
        let config = BrainConfig::parse(
            r#"{"profile": null, "features": null, "auto_behaviors": null, "preferences": null, "scan_cache": null}"#,
        )
        .unwrap();
        assert_eq!(config, BrainConfig::default());
        assert!(config.active_features().is_empty());
        assert_eq!(config.watchdog_mode(), WatchdogMode::AutoUpdate);
    }

    #[test]
    fn test_misshapen_sections_read_as_empty() {
        let config = BrainConfig::parse(
            r#"{"profile": "Acme", "features": ["time_tracking"], "preferences": 3, "scan_cache": true}"#,
        )
        .unwrap();
        assert_eq!(config.profile.business_name(), "My");
        assert!(config.features.is_empty());
        assert_eq!(config.preferences.comm_style(), None);
        assert_eq!(config.scan_cache.last_scan_at(), None);
    }

    #[test]
    fn test_scalar_fields_accept_any_type() {
        let config = BrainConfig::parse(
            r#"{
                "profile": {"businessName": 42, "userName": "", "industry": ["retail", "food"]},
                "preferences": {"commStyle": false},
                "scan_cache": {"lastScanAt": 1706700000, "projectCount": "12", "entityCount": 0, "serviceCount": 2.5}
            }"#,
        )
        .unwrap();
        assert_eq!(config.profile.business_name(), "42");
        assert_eq!(config.profile.user_name(), "Unknown");
        assert_eq!(config.profile.industry().as_deref(), Some("retail, food"));
        assert_eq!(config.preferences.comm_style(), None);
        assert_eq!(config.scan_cache.last_scan_at().as_deref(), Some("1706700000"));
        assert_eq!(config.scan_cache.project_count(), "12");
        assert_eq!(config.scan_cache.entity_count(), "0");
        assert_eq!(config.scan_cache.service_count(), "2.5");
    }

    #[test]
    fn test_active_features_keep_config_order() {
        let config = BrainConfig::parse(SAMPLE).unwrap();
        assert_eq!(
            config.active_features(),
            vec!["time tracking".to_string(), "entity management".to_string()]
        );
        assert!(config.feature(features::ENTITY_MANAGEMENT));
        assert!(!config.feature(features::GSD_WORKFLOW));
        assert!(!config.feature(features::COMMUNICATIONS));
    }

    #[test]
    fn test_behaviors() {
        let config = BrainConfig::parse(SAMPLE).unwrap();
        assert!(!config.behavior_enabled(behaviors::ACTION_ITEM_EXTRACTION));
        assert!(config.behavior_enabled(behaviors::DECISION_LOGGING));
        // unset behaviors count as enabled
        assert!(config.behavior_enabled("relationship_tracking"));
        assert_eq!(
            config.active_behaviors(),
            vec![
                ("entity detection".to_string(), "ask_first".to_string()),
                ("decision logging".to_string(), "suggest".to_string()),
            ]
        );
        assert_eq!(config.watchdog_mode(), WatchdogMode::AskFirst);
    }

    #[test]
    fn test_watchdog_defaults_to_auto_update() {
        let config = BrainConfig::parse("{}").unwrap();
        assert_eq!(config.watchdog_mode(), WatchdogMode::AutoUpdate);
        assert_eq!(config.profile.business_name(), "My");
        assert_eq!(config.profile.user_name(), "Unknown");
    }

    #[test]
    fn test_watchdog_off_is_disabled() {
        let config = BrainConfig::parse(r#"{"auto_behaviors": {"entity_detection": "off"}}"#).unwrap();
        assert_eq!(config.watchdog_mode(), WatchdogMode::Disabled);
    }

    #[test]
    fn test_load_malformed_config_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = BrainConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
