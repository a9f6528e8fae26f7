//! Item repository implementations

use crate::error::{Error, Result, ResultExt};
use crate::types::ContentItem;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source of the complete item set for the current request
pub trait ItemRepository<T> {
    /// Return every item, in display order
    fn find_all(&self) -> Result<Vec<T>>;
}

// ============================================================================
// In-Memory Repository
// ============================================================================

/// Repository over an item list held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    /// Create a repository over the given items
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Borrow the items
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> ItemRepository<T> for InMemoryRepository<T> {
    fn find_all(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }
}

impl<T> From<Vec<T>> for InMemoryRepository<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

// ============================================================================
// File Repository
// ============================================================================

/// Repository reading a JSON or YAML item list from disk on every request
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    /// Create a repository for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemRepository<ContentItem> for FileRepository {
    fn find_all(&self) -> Result<Vec<ContentItem>> {
        load_items(&self.path)
    }
}

/// Load content items from a file.
///
/// `.yaml`/`.yml` files are read as a YAML sequence; anything else as a
/// JSON array.
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<ContentItem>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let items: Vec<ContentItem> = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse items from '{}'", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse items from '{}'", path.display()))?
    };

    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}
