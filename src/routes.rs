//! Client-side routes and locations
//!
//! Three routes exist: the sectioned home page (`/`), the post list (`/blog`)
//! and a post (`/blog/{slug}`). Anything else does not match.

use std::fmt;

/// Path prefix shared by every blog route
pub const BLOG_PREFIX: &str = "/blog";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    BlogList,
    BlogPost { slug: String },
}

impl Route {
    /// Match a path. Query strings and fragments are ignored; a trailing
    /// slash is tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let location = Location::parse(path);
        let pathname = location.pathname.trim_end_matches('/');

        if pathname.is_empty() {
            return Some(Route::Home);
        }
        if pathname == BLOG_PREFIX {
            return Some(Route::BlogList);
        }

        let slug = pathname.strip_prefix(BLOG_PREFIX)?.strip_prefix('/')?;
        if slug.is_empty() || slug.contains('/') {
            return None;
        }
        Some(Route::BlogPost {
            slug: slug.to_string(),
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::BlogList => BLOG_PREFIX.to_string(),
            Route::BlogPost { slug } => format!("{BLOG_PREFIX}/{slug}"),
        }
    }

    /// Only the home route is laid out in named sections.
    pub fn is_sectioned(&self) -> bool {
        matches!(self, Route::Home)
    }

    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let path = self.path();
        path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A browser-style location split into path and query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
}

impl Location {
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split_once('#').map_or(href, |(before, _)| before);
        let (pathname, search) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, format!("?{query}")),
            None => (without_fragment, String::new()),
        };
        let pathname = if pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{pathname}")
        };
        Self { pathname, search }
    }

    /// What analytics records for this location
    pub fn page_path(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/#projects"), Some(Route::Home));
    }

    #[test]
    fn test_parse_blog_list() {
        assert_eq!(Route::parse("/blog"), Some(Route::BlogList));
        assert_eq!(Route::parse("/blog/"), Some(Route::BlogList));
        assert_eq!(Route::parse("/blog?page=2"), Some(Route::BlogList));
    }

    #[test]
    fn test_parse_blog_post() {
        assert_eq!(
            Route::parse("/blog/hello-world"),
            Some(Route::BlogPost {
                slug: "hello-world".to_string()
            })
        );
        assert_eq!(
            Route::parse("/blog/Hello/"),
            Some(Route::BlogPost {
                slug: "Hello".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(Route::parse("/blogroll"), None);
        assert_eq!(Route::parse("/blog/a/b"), None);
    }

    #[test]
    fn test_path_round_trip() {
        for path in ["/", "/blog", "/blog/some-post"] {
            assert_eq!(Route::parse(path).unwrap().path(), path);
        }
    }

    #[test]
    fn test_prefix_matching() {
        assert!(Route::BlogList.matches_prefix(BLOG_PREFIX));
        assert!(
            Route::BlogPost {
                slug: "x".to_string()
            }
            .matches_prefix(BLOG_PREFIX)
        );
        assert!(!Route::Home.matches_prefix(BLOG_PREFIX));
        assert!(Route::Home.is_sectioned());
        assert!(!Route::BlogList.is_sectioned());
    }

    #[test]
    fn test_location_page_path() {
        let location = Location::parse("/blog/x?ref=home#intro");
        assert_eq!(location.pathname, "/blog/x");
        assert_eq!(location.search, "?ref=home");
        assert_eq!(location.page_path(), "/blog/x?ref=home");
        assert_eq!(Location::parse("blog").pathname, "/blog");
    }
}
