//! Post command implementation

use console::Style;
use std::path::PathBuf;

use folio::content::{ContentLoader, DirectoryStore, PostView, PostViewState, render};
use folio::error::Result;

use crate::cli::PostArgs;
use crate::commands::helpers::open_site;

/// Run post command
///
/// An unknown slug prints the not-found page rather than failing.
pub fn run(site: Option<PathBuf>, args: PostArgs) -> Result<()> {
    let site = open_site(site)?;
    let loader = ContentLoader::new(DirectoryStore::new(site.posts_dir()));

    let mut view = PostView::new();
    let ticket = view.request(args.slug.as_str());
    view.resolve(&ticket, loader.get_post(&args.slug)?);

    let Some((title, body)) = view.display() else {
        return Ok(());
    };

    println!("{}", Style::new().bold().apply_to(title));
    if let PostViewState::Loaded(post) = view.state() {
        if let Some(date) = post.display_date() {
            println!("{}", Style::new().dim().apply_to(date));
        }
    }
    println!();

    if args.html {
        print!("{}", render::to_html(body));
    } else {
        println!("{body}");
    }

    Ok(())
}
