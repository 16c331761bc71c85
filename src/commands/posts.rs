//! Posts command implementation
//!
//! Lists every post's metadata, newest first.

use console::Style;
use std::path::PathBuf;

use folio::content::{BlogPostSummary, ContentLoader, DirectoryStore, PostListView};
use folio::error::{self, Result};

use crate::cli::PostsArgs;
use crate::commands::helpers::open_site;

/// Run posts command
pub fn run(site: Option<PathBuf>, args: PostsArgs) -> Result<()> {
    let site = open_site(site)?;
    let loader = ContentLoader::new(DirectoryStore::new(site.posts_dir()));

    let mut view = PostListView::new();
    let ticket = view.request();
    view.resolve(ticket, loader.list_posts()?);

    if args.json {
        let json = serde_json::to_string_pretty(view.posts())
            .map_err(|e| error::io_error(format!("Failed to encode posts: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    print_posts(view.posts());
    Ok(())
}

fn print_posts(posts: &[BlogPostSummary]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    println!("Posts ({}):", posts.len());
    println!();
    for post in posts {
        let title = if post.title.is_empty() {
            &post.slug
        } else {
            &post.title
        };
        println!("  {}", Style::new().bold().yellow().apply_to(title));
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Slug:"),
            Style::new().cyan().apply_to(&post.slug)
        );
        if let Some(date) = post.display_date() {
            println!("    {} {}", Style::new().bold().apply_to("Date:"), date);
        }
        if let Some(ref description) = post.description {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Description:"),
                description
            );
        }
        println!();
    }
}
