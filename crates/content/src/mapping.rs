use learn_core::ConfigError;
use learn_core::model::{ItemVisual, LearningItem, LearningModule, RepeatThreshold, Rgb};

use crate::catalog::{ContentCatalog, DisplaySettings};
use crate::dto::{ContentFile, DisplayFile, ItemFile, ModuleFile};
use crate::error::ContentError;

const SINGLE_MODULE_KEY: &str = "learning";

pub(crate) fn map_content_file(file: ContentFile) -> Result<ContentCatalog, ContentError> {
    match file.modules {
        Some(modules) => {
            let settings = file.settings.unwrap_or_default();
            let mut mapped = Vec::with_capacity(modules.len());
            for (key, value) in modules {
                let key = mapping_key(&key)?;
                let module: ModuleFile = serde_yaml::from_value(value)?;
                mapped.push(map_module(&key, module)?);
            }
            let display = map_display(&settings.display)?;
            ContentCatalog::new(mapped, settings.default_module, display)
        }
        None => {
            let Some(items) = file.items else {
                return Err(ContentError::NoModules);
            };
            let config = file.config.unwrap_or_default();
            let key = config
                .module
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| SINGLE_MODULE_KEY.to_owned());
            let module = map_module(
                &key,
                ModuleFile {
                    display_name: config.display_name,
                    repeat_count: config.repeat_count,
                    items,
                },
            )?;
            let display = map_display(&file.display.unwrap_or_default())?;
            ContentCatalog::new(vec![module], None, display)
        }
    }
}

fn mapping_key(key: &serde_yaml::Value) -> Result<String, ContentError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        _ => Err(ContentError::InvalidModuleKey),
    }
}

pub(crate) fn map_module(key: &str, module: ModuleFile) -> Result<LearningModule, ContentError> {
    let threshold = match module.repeat_count {
        Some(value) => {
            RepeatThreshold::try_from(value).map_err(|e| ContentError::module(key, e))?
        }
        None => RepeatThreshold::DEFAULT,
    };

    let items = module
        .items
        .into_iter()
        .enumerate()
        .map(|(position, item)| map_item(position, item))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ContentError::module(key, e))?;

    LearningModule::new(key, module.display_name, threshold, items)
        .map_err(|e| ContentError::module(key, e))
}

fn map_item(position: usize, item: ItemFile) -> Result<LearningItem, ConfigError> {
    let name = item.name.unwrap_or_default();
    let visual = match item.color.as_deref() {
        Some(components) => {
            let rgb = Rgb::from_components(components).ok_or_else(|| {
                ConfigError::InvalidColor {
                    name: name.trim().to_owned(),
                }
            })?;
            ItemVisual::Color(rgb)
        }
        None => ItemVisual::Label,
    };

    Ok(
        LearningItem::new(position, name, visual, item.description.unwrap_or_default())?
            .with_audio_hint(item.audio_hint),
    )
}

pub(crate) fn map_display(file: &DisplayFile) -> Result<DisplaySettings, ContentError> {
    let defaults = DisplaySettings::default();

    Ok(DisplaySettings {
        window_width: positive(file.window_width, defaults.window_width, "window_width")?,
        window_height: positive(file.window_height, defaults.window_height, "window_height")?,
        fullscreen: file.fullscreen.unwrap_or(defaults.fullscreen),
        background_color: color(
            file.background_color.as_deref(),
            defaults.background_color,
            "background_color",
        )?,
        text_color: color(file.text_color.as_deref(), defaults.text_color, "text_color")?,
        font_size: positive(file.font_size, defaults.font_size, "font_size")?,
        circle_border_width: file
            .circle_border_width
            .unwrap_or(defaults.circle_border_width),
    })
}

fn positive(value: Option<u32>, default: u32, field: &'static str) -> Result<u32, ContentError> {
    match value {
        Some(0) => Err(ContentError::InvalidDisplaySize { field }),
        Some(v) => Ok(v),
        None => Ok(default),
    }
}

fn color(
    value: Option<&[i64]>,
    default: Rgb,
    field: &'static str,
) -> Result<Rgb, ContentError> {
    match value {
        Some(components) => {
            Rgb::from_components(components).ok_or(ContentError::InvalidDisplayColor { field })
        }
        None => Ok(default),
    }
}
