use clap::Parser;

/// Arguments for the posts command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List posts, newest first:\n    folio posts\n\n\
                  Machine-readable output:\n    folio posts --json\n\n\
                  Read posts from another site:\n    folio posts --site ~/my-site")]
pub struct PostsArgs {
    /// Print post metadata as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the post command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a post as Markdown:\n    folio post hello-world\n\n\
                  Render the body to HTML:\n    folio post hello-world --html")]
pub struct PostArgs {
    /// Post slug (file name without .md)
    pub slug: String,

    /// Render the body to HTML
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the route command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Home page:\n    folio route /\n\n\
                  A post, with a query string:\n    folio route '/blog/hello-world?ref=feed'")]
pub struct RouteArgs {
    /// Path to resolve
    pub path: String,
}
