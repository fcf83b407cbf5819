use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::ContentCatalog;
use crate::dto::ContentFile;
use crate::error::ContentError;
use crate::mapping::map_content_file;

const BUILTIN_CONTENT: &str = include_str!("../data/builtin.yaml");

/// Somewhere learning content can be loaded from.
pub trait ContentSource {
    /// Load and validate the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the content cannot be read or is invalid.
    fn load(&self) -> Result<ContentCatalog, ContentError>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Parse a YAML document into a validated catalog.
///
/// # Errors
///
/// Returns `ContentError::Empty` for a blank document, `ContentError::Yaml`
/// for malformed YAML, and validation errors for bad modules or settings.
pub fn parse_catalog(yaml: &str) -> Result<ContentCatalog, ContentError> {
    if yaml.trim().is_empty() {
        return Err(ContentError::Empty);
    }
    let file: Option<ContentFile> = serde_yaml::from_str(yaml)?;
    let file = file.ok_or(ContentError::Empty)?;
    map_content_file(file)
}

/// A YAML content file on disk.
#[derive(Debug, Clone)]
pub struct YamlFileSource {
    path: PathBuf,
}

impl YamlFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for YamlFileSource {
    fn load(&self) -> Result<ContentCatalog, ContentError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ContentError::NotFound {
                path: self.path.clone(),
            },
            _ => ContentError::Io {
                path: self.path.clone(),
                source,
            },
        })?;
        let catalog = parse_catalog(&raw)?;
        info!(
            path = %self.path.display(),
            modules = catalog.modules().len(),
            "loaded content file"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// YAML content held in memory, mostly for tests and embedding.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    yaml: String,
}

impl InMemorySource {
    #[must_use]
    pub fn new(yaml: impl Into<String>) -> Self {
        Self { yaml: yaml.into() }
    }
}

impl ContentSource for InMemorySource {
    fn load(&self) -> Result<ContentCatalog, ContentError> {
        parse_catalog(&self.yaml)
    }

    fn describe(&self) -> String {
        "in-memory content".to_owned()
    }
}

/// The catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl ContentSource for BuiltinSource {
    fn load(&self) -> Result<ContentCatalog, ContentError> {
        parse_catalog(BUILTIN_CONTENT)
    }

    fn describe(&self) -> String {
        "built-in content".to_owned()
    }
}

/// Decide where content comes from.
///
/// An explicit path is always used as-is, so a missing file is reported. With
/// no explicit path, `default_path` is used when it exists and the built-in
/// catalog otherwise.
#[must_use]
pub fn resolve_source(explicit: Option<&Path>, default_path: &Path) -> Box<dyn ContentSource> {
    if let Some(path) = explicit {
        return Box::new(YamlFileSource::new(path));
    }
    if default_path.exists() {
        return Box::new(YamlFileSource::new(default_path));
    }
    debug!(
        default_path = %default_path.display(),
        "default content file missing, using built-in content"
    );
    Box::new(BuiltinSource)
}
