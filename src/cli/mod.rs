//! CLI definitions using clap derive API
//!
//! One submodule per command holds its argument types.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod content;
pub mod showcase;
pub mod theme;
pub mod track;

pub use completions::CompletionsArgs;
pub use content::{PostArgs, PostsArgs, RouteArgs};
pub use showcase::{ExperienceArgs, ProjectsArgs};
pub use theme::{SystemArg, ThemeArgs, ThemeSubcommand};
pub use track::TrackArgs;

/// Folio - portfolio and blog site core
///
/// Read posts, projects and experience from a site directory and exercise
/// the section tracker against recorded layouts.
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Headless core of a portfolio and blog site",
    long_about = "Folio loads blog posts from Markdown files with YAML front matter, \
                  resolves site routes, keeps the light/dark theme preference and \
                  tracks which home page section is active while scrolling.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  folio posts                         \x1b[90m# List posts, newest first\x1b[0m\n   \
                  folio post hello-world              \x1b[90m# Show a post\x1b[0m\n   \
                  folio route /blog/hello-world       \x1b[90m# Resolve a route\x1b[0m\n   \
                  folio theme toggle                  \x1b[90m# Flip between dark and light\x1b[0m\n   \
                  folio track layout.yaml             \x1b[90m# Replay scroll frames\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Site directory (defaults to current directory)
    #[arg(long, short = 's', global = true, env = "FOLIO_SITE")]
    pub site: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blog posts
    Posts(PostsArgs),

    /// Show a blog post
    Post(PostArgs),

    /// Resolve a path to a route and its active navigation item
    Route(RouteArgs),

    /// Show or change the colour theme
    Theme(ThemeArgs),

    /// List projects or show one
    Projects(ProjectsArgs),

    /// Show work experience and skills
    Experience(ExperienceArgs),

    /// Replay a recorded layout through the section tracker
    Track(TrackArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
