use content::DisplaySettings;

/// Inline style for the page background and default text color.
#[must_use]
pub fn page_style(display: &DisplaySettings) -> String {
    format!(
        "background-color: {}; color: {};",
        display.background_color.css(),
        display.text_color.css()
    )
}

/// Font sizes derived from the configured base size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontScale {
    pub large_px: u32,
    pub medium_px: u32,
    pub small_px: u32,
}

impl FontScale {
    #[must_use]
    pub fn from_display(display: &DisplaySettings) -> Self {
        let base = display.font_size.max(3);
        Self {
            large_px: base,
            medium_px: base / 2,
            small_px: base / 3,
        }
    }
}
