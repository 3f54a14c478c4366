use serde::{Deserialize, Serialize};

/// Root configuration container for the host binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

/// Presentation inputs supplied by the host.
///
/// The panel reads these but never writes them; the host may replace the
/// whole value at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_header: bool,
    #[serde(default)]
    pub show_footer: bool,
    #[serde(default = "default_true")]
    pub show_input: bool,
    #[serde(default = "default_true")]
    pub show_actions: bool,
    #[serde(default = "default_footer_text")]
    pub footer_text: String,
}

/// Settings for the built-in canned item source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Artificial fetch latency in milliseconds (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Start a load right after mount.
    #[serde(default)]
    pub load_on_mount: bool,
}

fn default_title() -> String {
    "Default Title".to_string()
}

fn default_footer_text() -> String {
    "Component Footer".to_string()
}

fn default_true() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_header: true,
            show_footer: false,
            show_input: true,
            show_actions: true,
            footer_text: default_footer_text(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}
