use std::fmt;

use crate::error::ConfigError;

//
// ─── COLOR ─────────────────────────────────────────────────────────────────────
//

/// An sRGB color with 8-bit components.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from loosely typed components, as found in content files.
    ///
    /// Returns `None` unless there are exactly three components, each in `0..=255`.
    #[must_use]
    pub fn from_components(components: &[i64]) -> Option<Self> {
        let [r, g, b] = components else {
            return None;
        };
        Some(Self::new(
            u8::try_from(*r).ok()?,
            u8::try_from(*g).ok()?,
            u8::try_from(*b).ok()?,
        ))
    }

    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

//
// ─── ITEMS ─────────────────────────────────────────────────────────────────────
//

/// How an item is shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemVisual {
    /// A filled swatch of the given color.
    Color(Rgb),
    /// Only the item name (and hint, if any) is shown.
    Label,
}

/// A single unit of learning content.
///
/// Items are created once when content is loaded and never change afterwards.
/// Their identity is their position in the owning module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningItem {
    name: String,
    visual: ItemVisual,
    description: String,
    audio_hint: Option<String>,
}

impl LearningItem {
    /// Creates a new item.
    ///
    /// `position` is only used to describe the failing item in errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyItemName` if `name` is blank.
    pub fn new(
        position: usize,
        name: impl Into<String>,
        visual: ItemVisual,
        description: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ConfigError::EmptyItemName { position });
        }

        Ok(Self {
            name,
            visual,
            description: description.into().trim().to_owned(),
            audio_hint: None,
        })
    }

    /// Convenience constructor for color items.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyItemName` if `name` is blank.
    pub fn color(
        position: usize,
        name: impl Into<String>,
        rgb: Rgb,
        description: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::new(position, name, ItemVisual::Color(rgb), description)
    }

    #[must_use]
    pub fn with_audio_hint(mut self, hint: Option<String>) -> Self {
        self.audio_hint = hint
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn visual(&self) -> ItemVisual {
        self.visual
    }

    #[must_use]
    pub fn color_value(&self) -> Option<Rgb> {
        match self.visual {
            ItemVisual::Color(rgb) => Some(rgb),
            ItemVisual::Label => None,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn audio_hint(&self) -> Option<&str> {
        self.audio_hint.as_deref()
    }
}
