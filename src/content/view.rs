//! View state for the blog pages, guarded against stale resolutions
//!
//! Retrieval is the only suspension point of the blog. Each request hands out
//! a ticket; a resolution is applied only while its ticket is still the
//! current one, so a slow fetch for an old slug cannot overwrite the page the
//! reader has since moved to.

use tracing::debug;

use super::post::{BlogPost, BlogPostSummary};

/// Title shown when a slug has no matching document
pub const NOT_FOUND_TITLE: &str = "Post not found";

/// Body shown when a slug has no matching document
pub const NOT_FOUND_BODY: &str = "This post could not be loaded.";

/// Identifies one in-flight post fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTicket {
    slug: String,
    generation: u64,
}

impl PostTicket {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostViewState {
    /// Nothing requested yet, or a request is in flight
    Loading,
    Loaded(BlogPost),
    NotFound,
}

/// Detail page state for `/blog/{slug}`
#[derive(Debug, Clone)]
pub struct PostView {
    current: Option<PostTicket>,
    generation: u64,
    state: PostViewState,
}

impl Default for PostView {
    fn default() -> Self {
        Self::new()
    }
}

impl PostView {
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
            state: PostViewState::Loading,
        }
    }

    /// Start fetching `slug`; any earlier ticket becomes stale.
    pub fn request(&mut self, slug: impl Into<String>) -> PostTicket {
        self.generation += 1;
        let ticket = PostTicket {
            slug: slug.into(),
            generation: self.generation,
        };
        self.current = Some(ticket.clone());
        self.state = PostViewState::Loading;
        ticket
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when the
    /// ticket has been superseded.
    pub fn resolve(&mut self, ticket: &PostTicket, outcome: Option<BlogPost>) -> bool {
        if self.current.as_ref() != Some(ticket) {
            debug!(slug = %ticket.slug, "discarding stale post resolution");
            return false;
        }
        self.state = match outcome {
            Some(post) => PostViewState::Loaded(post),
            None => PostViewState::NotFound,
        };
        true
    }

    pub fn state(&self) -> &PostViewState {
        &self.state
    }

    /// Slug of the page currently requested
    pub fn target(&self) -> Option<&str> {
        self.current.as_ref().map(PostTicket::slug)
    }

    /// Title and markdown body to render. `None` while loading.
    pub fn display(&self) -> Option<(&str, &str)> {
        match &self.state {
            PostViewState::Loading => None,
            PostViewState::Loaded(post) => Some((post.title.as_str(), post.body.as_str())),
            PostViewState::NotFound => Some((NOT_FOUND_TITLE, NOT_FOUND_BODY)),
        }
    }
}

/// Identifies one in-flight list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket(u64);

/// List page state for `/blog`; renders as empty until loaded
#[derive(Debug, Clone, Default)]
pub struct PostListView {
    generation: u64,
    posts: Vec<BlogPostSummary>,
    loaded: bool,
}

impl PostListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> ListTicket {
        self.generation += 1;
        self.loaded = false;
        self.posts.clear();
        ListTicket(self.generation)
    }

    pub fn resolve(&mut self, ticket: ListTicket, posts: Vec<BlogPostSummary>) -> bool {
        if ticket.0 != self.generation {
            debug!("discarding stale post list resolution");
            return false;
        }
        self.posts = posts;
        self.loaded = true;
        true
    }

    pub fn posts(&self) -> &[BlogPostSummary] {
        &self.posts
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
