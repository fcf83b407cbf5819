use std::fmt;

use crate::error::ConfigError;
use crate::model::item::LearningItem;

//
// ─── REPEAT THRESHOLD ──────────────────────────────────────────────────────────
//

/// How many times an item is shown before the session moves on.
///
/// Always in `1..=RepeatThreshold::MAX`; each showing is drawn as a progress dot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepeatThreshold(u32);

impl RepeatThreshold {
    pub const DEFAULT: Self = Self(3);
    pub const MAX: Self = Self(10);

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRepeatThreshold` for zero or anything above
    /// [`RepeatThreshold::MAX`].
    pub fn new(value: u32) -> Result<Self, ConfigError> {
        if value == 0 || value > Self::MAX.0 {
            return Err(ConfigError::InvalidRepeatThreshold {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for RepeatThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for RepeatThreshold {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(|v| Self::new(v).ok())
            .ok_or(ConfigError::InvalidRepeatThreshold { value })
    }
}

impl fmt::Debug for RepeatThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RepeatThreshold({})", self.0)
    }
}

impl fmt::Display for RepeatThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// A named, ordered, non-empty list of items sharing one repeat threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningModule {
    key: String,
    display_name: String,
    repeat_threshold: RepeatThreshold,
    items: Vec<LearningItem>,
}

impl LearningModule {
    /// Creates a validated module.
    ///
    /// A missing or blank `display_name` falls back to the key with its first
    /// letter capitalized.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyModuleKey` for a blank key and
    /// `ConfigError::NoItems` when `items` is empty.
    pub fn new(
        key: impl Into<String>,
        display_name: Option<String>,
        repeat_threshold: RepeatThreshold,
        items: Vec<LearningItem>,
    ) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_owned();
        if key.is_empty() {
            return Err(ConfigError::EmptyModuleKey);
        }
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }

        let display_name = display_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| capitalize(&key));

        Ok(Self {
            key,
            display_name,
            repeat_threshold,
            items,
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn repeat_threshold(&self) -> RepeatThreshold {
        self.repeat_threshold
    }

    #[must_use]
    pub fn items(&self) -> &[LearningItem] {
        &self.items
    }

    /// Never zero for a constructed module.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
