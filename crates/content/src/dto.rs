//! Serialized shape of content files.
//!
//! Two layouts are accepted:
//!
//! ```yaml
//! # catalog: several modules plus shared settings
//! modules:
//!   colors: { display_name: Colors, repeat_count: 3, items: [...] }
//! settings: { default_module: colors, fullscreen: false }
//! ```
//!
//! ```yaml
//! # single module
//! config: { repeat_count: 3 }
//! items: [...]
//! display: { window_width: 1024 }
//! ```
//!
//! Fields are kept loosely typed here so validation can report which value is
//! wrong instead of a bare deserialization failure. Unknown keys in modules and
//! items are rejected so a misspelled field is not silently dropped.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub modules: Option<serde_yaml::Mapping>,
    #[serde(default)]
    pub settings: Option<SettingsFile>,

    #[serde(default)]
    pub items: Option<Vec<ItemFile>>,
    #[serde(default)]
    pub config: Option<ModuleConfigFile>,
    #[serde(default)]
    pub display: Option<DisplayFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleFile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub repeat_count: Option<i64>,
    #[serde(default)]
    pub items: Vec<ItemFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfigFile {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub repeat_count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<Vec<i64>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub audio_hint: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub default_module: Option<String>,
    #[serde(flatten)]
    pub display: DisplayFile,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayFile {
    #[serde(default)]
    pub window_width: Option<u32>,
    #[serde(default)]
    pub window_height: Option<u32>,
    #[serde(default)]
    pub fullscreen: Option<bool>,
    #[serde(default)]
    pub background_color: Option<Vec<i64>>,
    #[serde(default)]
    pub text_color: Option<Vec<i64>>,
    #[serde(default)]
    pub font_size: Option<u32>,
    #[serde(default)]
    pub circle_border_width: Option<u32>,
}
