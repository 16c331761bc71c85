//! Document storage: enumerate markdown documents and read their raw text
//!
//! The loader only ever sees the [`DocumentStore`] trait. [`DirectoryStore`]
//! serves a flat directory of `*.md` files; [`MemoryStore`] serves documents
//! held in memory (bundled content, tests).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::post::slug_for;
use crate::error::{self, Result};

/// A discovered document: its storage path and derived slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub path: PathBuf,
    pub slug: String,
}

impl DocumentRef {
    /// Build a reference from a storage path. `None` if the path is not a
    /// markdown document.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let slug = slug_for(&path)?;
        Some(Self { path, slug })
    }
}

/// Capability to enumerate and read markdown documents
pub trait DocumentStore {
    /// List every available document, in a stable discovery order.
    fn list(&self) -> Result<Vec<DocumentRef>>;

    /// Read a document's raw text.
    fn read(&self, document: &DocumentRef) -> Result<String>;
}

/// Markdown files directly inside one directory (not recursive)
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for DirectoryStore {
    fn list(&self) -> Result<Vec<DocumentRef>> {
        if !self.root.exists() {
            debug!(root = %self.root.display(), "posts directory missing; no documents");
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                error::documents_unavailable(self.root.display().to_string(), e.to_string())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(document) = DocumentRef::from_path(entry.into_path()) {
                documents.push(document);
            }
        }

        debug!(root = %self.root.display(), count = documents.len(), "discovered documents");
        Ok(documents)
    }

    fn read(&self, document: &DocumentRef) -> Result<String> {
        std::fs::read_to_string(&document.path).map_err(|e| {
            error::document_read_failed(document.path.display().to_string(), e.to_string())
        })
    }
}

/// Documents held in memory, keyed by storage path
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; returns `self` for chaining.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<PathBuf>, raw: impl Into<String>) -> Self {
        self.insert(path, raw);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, raw: impl Into<String>) {
        self.documents.insert(path.into(), raw.into());
    }
}

impl DocumentStore for MemoryStore {
    fn list(&self) -> Result<Vec<DocumentRef>> {
        Ok(self
            .documents
            .keys()
            .filter_map(|path| DocumentRef::from_path(path.clone()))
            .collect())
    }

    fn read(&self, document: &DocumentRef) -> Result<String> {
        self.documents
            .get(&document.path)
            .cloned()
            .ok_or_else(|| {
                error::document_read_failed(document.path.display().to_string(), "not in store")
            })
    }
}
