//! Blog queries over a document store: list all posts, fetch one by slug

use tracing::{debug, warn};

use super::frontmatter::parse_document;
use super::post::{BlogPost, BlogPostSummary, newest_first};
use super::store::DocumentStore;
use crate::error::Result;

/// Answers the list and detail queries of the blog.
///
/// Discovery is lazy: every query enumerates and parses afresh, so documents
/// added to the store are visible on the next call.
pub struct ContentLoader<S> {
    store: S,
}

impl<S: DocumentStore> ContentLoader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every post's metadata, newest first.
    ///
    /// Posts without a parsable date come after all dated posts, in discovery
    /// order. A document that cannot be read is skipped.
    pub fn list_posts(&self) -> Result<Vec<BlogPostSummary>> {
        let documents = self.store.list()?;
        let mut posts = Vec::with_capacity(documents.len());

        for document in &documents {
            let raw = match self.store.read(document) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(slug = %document.slug, error = %err, "skipping unreadable document");
                    continue;
                }
            };
            let post = BlogPost::from_document(document.slug.clone(), parse_document(&raw));
            posts.push(post.summary());
        }

        // stable: equal keys keep discovery order
        posts.sort_by(|a, b| newest_first(a.date, b.date));
        debug!(count = posts.len(), "listed posts");
        Ok(posts)
    }

    /// The post whose slug matches exactly, or `Ok(None)`.
    ///
    /// If several documents share the slug, the last one discovered wins.
    pub fn get_post(&self, slug: &str) -> Result<Option<BlogPost>> {
        let documents = self.store.list()?;
        let Some(document) = documents.iter().rev().find(|d| d.slug == slug) else {
            debug!(slug, "no document for slug");
            return Ok(None);
        };

        let raw = self.store.read(document)?;
        Ok(Some(BlogPost::from_document(
            document.slug.clone(),
            parse_document(&raw),
        )))
    }
}
