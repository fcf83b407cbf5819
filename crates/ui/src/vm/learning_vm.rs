use content::DisplaySettings;
use learn_core::model::ItemVisual;
use services::ProgressInfo;

use crate::vm::theme_vm::FontScale;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwatchVm {
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearningVm {
    pub heading: String,
    pub name: String,
    pub description: Option<String>,
    pub hint: Option<String>,
    pub swatch: Option<SwatchVm>,
    pub dots: Vec<bool>,
    pub progress_label: String,
    pub position_label: String,
    pub name_style: String,
    pub detail_style: String,
    pub instructions_style: String,
}

#[must_use]
pub fn map_learning_item(
    info: &ProgressInfo,
    module_name: &str,
    display: &DisplaySettings,
) -> LearningVm {
    let fonts = FontScale::from_display(display);
    let item = &info.item;

    let swatch = match item.visual() {
        ItemVisual::Color(rgb) => Some(SwatchVm {
            style: format!(
                "background-color: {}; border-width: {}px;",
                rgb.css(),
                display.circle_border_width
            ),
        }),
        ItemVisual::Label => None,
    };

    let description = Some(item.description())
        .filter(|text| !text.is_empty())
        .map(str::to_owned);

    LearningVm {
        heading: format!("Learning: {module_name}"),
        name: item.name().to_owned(),
        description,
        hint: item.audio_hint().map(str::to_owned),
        swatch,
        dots: info.dots(),
        progress_label: format!("{} of {}", info.repeat_number, info.total_repeats),
        position_label: format!("Item {} of {}", info.item_index + 1, info.total_items),
        name_style: format!("font-size: {}px;", fonts.large_px),
        detail_style: format!("font-size: {}px;", fonts.medium_px),
        instructions_style: format!("font-size: {}px;", fonts.small_px),
    }
}
