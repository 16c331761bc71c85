//! Blog content: markdown documents with YAML front matter
//!
//! - [`frontmatter`]: split raw text into metadata and body
//! - [`post`]: post model, slugs and dates
//! - [`store`]: where documents come from
//! - [`loader`]: the list and detail queries
//! - [`view`]: page state with stale-resolution guarding
//! - [`render`]: markdown to HTML

pub mod frontmatter;
pub mod loader;
pub mod post;
pub mod render;
pub mod store;
pub mod view;

pub use frontmatter::{Metadata, ParsedDocument, parse_document};
pub use loader::ContentLoader;
pub use post::{BlogPost, BlogPostSummary, format_date, parse_date, slug_for};
pub use store::{DirectoryStore, DocumentRef, DocumentStore, MemoryStore};
pub use view::{PostListView, PostTicket, PostView, PostViewState};
