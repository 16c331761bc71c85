use clap::Parser;

/// Arguments for the projects command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every project:\n    folio projects\n\n\
                  Only one category:\n    folio projects --category games\n\n\
                  Show one project in full:\n    folio projects --id 3")]
pub struct ProjectsArgs {
    /// Only list projects in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Show the project with this id
    #[arg(long)]
    pub id: Option<u32>,
}

/// Arguments for the experience command
#[derive(Parser, Debug)]
pub struct ExperienceArgs {
    /// Only print the skill groups
    #[arg(long)]
    pub skills: bool,
}
