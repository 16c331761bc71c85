//! Folio - portfolio and blog site core
//!
//! Command-line front end over the `folio` library: reads a site directory's
//! posts, projects and experience, resolves routes, keeps the theme preference
//! and replays layouts through the section tracker.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    folio::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Posts(args) => commands::posts::run(cli.site, args),
        Commands::Post(args) => commands::post::run(cli.site, args),
        Commands::Route(args) => commands::route::run(cli.site, args),
        Commands::Theme(args) => commands::theme::run(args),
        Commands::Projects(args) => commands::projects::run(cli.site, args),
        Commands::Experience(args) => commands::experience::run(cli.site, args),
        Commands::Track(args) => commands::track::run(cli.site, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
