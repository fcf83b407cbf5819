use learn_core::model::{LearningModule, Rgb};
use tracing::debug;

use crate::error::ContentError;

/// Window and palette settings handed to the presentation layer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub window_width: u32,
    pub window_height: u32,
    pub fullscreen: bool,
    pub background_color: Rgb,
    pub text_color: Rgb,
    pub font_size: u32,
    pub circle_border_width: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            fullscreen: false,
            background_color: Rgb::new(245, 245, 245),
            text_color: Rgb::new(50, 50, 50),
            font_size: 72,
            circle_border_width: 5,
        }
    }
}

/// Every module from one content source, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    modules: Vec<LearningModule>,
    default_module: Option<String>,
    display: DisplaySettings,
}

impl ContentCatalog {
    /// # Errors
    ///
    /// Returns `ContentError::NoModules` for an empty module list and
    /// `ContentError::UnknownModule` when `default_module` names a module that
    /// is not in the list.
    pub fn new(
        modules: Vec<LearningModule>,
        default_module: Option<String>,
        display: DisplaySettings,
    ) -> Result<Self, ContentError> {
        if modules.is_empty() {
            return Err(ContentError::NoModules);
        }

        let catalog = Self {
            modules,
            default_module: default_module
                .map(|key| key.trim().to_owned())
                .filter(|key| !key.is_empty()),
            display,
        };
        if let Some(key) = catalog.default_module.as_deref() {
            catalog.module(key)?;
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn modules(&self) -> &[LearningModule] {
        &self.modules
    }

    #[must_use]
    pub fn module_keys(&self) -> Vec<String> {
        self.modules.iter().map(|m| m.key().to_owned()).collect()
    }

    #[must_use]
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// # Errors
    ///
    /// Returns `ContentError::UnknownModule` if no module has this key.
    pub fn module(&self, key: &str) -> Result<&LearningModule, ContentError> {
        self.modules
            .iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| ContentError::UnknownModule {
                key: key.to_owned(),
                available: self.module_keys(),
            })
    }

    /// The module named by `settings.default_module`, or the first one.
    #[must_use]
    pub fn default_module(&self) -> &LearningModule {
        self.default_module
            .as_deref()
            .and_then(|key| self.modules.iter().find(|m| m.key() == key))
            .unwrap_or(&self.modules[0])
    }

    /// Pick the requested module, falling back to the default one.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::UnknownModule` if `requested` does not exist.
    pub fn select(&self, requested: Option<&str>) -> Result<&LearningModule, ContentError> {
        let module = match requested {
            Some(key) => self.module(key)?,
            None => self.default_module(),
        };
        debug!(
            module = module.key(),
            items = module.item_count(),
            repeat_threshold = module.repeat_threshold().get(),
            "selected learning module"
        );
        Ok(module)
    }
}
