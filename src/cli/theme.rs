use clap::{Parser, Subcommand, ValueEnum};

/// Arguments for the theme command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the current theme:\n    folio theme\n\n\
                  Flip between dark and light:\n    folio theme toggle\n\n\
                  Pick one explicitly:\n    folio theme set light\n\n\
                  Resolve as if the system preferred light:\n    folio theme --system light")]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: Option<ThemeSubcommand>,

    /// System colour-scheme preference used when nothing is saved
    #[arg(long, value_enum, default_value_t = SystemArg::None, global = true)]
    pub system: SystemArg,
}

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeSubcommand {
    /// Show the current theme and where it came from
    Show,

    /// Switch to the other theme
    Toggle,

    /// Save a theme
    Set {
        /// dark or light
        theme: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemArg {
    Light,
    Dark,
    None,
}
