//! Theme command implementation

use console::Style;

use folio::config::preferences_path;
use folio::error::Result;
use folio::theme::{JsonFileStore, SystemPreference, Theme, ThemePreference, ThemeSource};

use crate::cli::{SystemArg, ThemeArgs, ThemeSubcommand};

/// Run theme command
pub fn run(args: ThemeArgs) -> Result<()> {
    let store = JsonFileStore::new(preferences_path()?);
    let mut preference = ThemePreference::load(store, system_preference(args.system))?;

    match args.command.unwrap_or(ThemeSubcommand::Show) {
        ThemeSubcommand::Show => {}
        ThemeSubcommand::Toggle => {
            preference.toggle()?;
        }
        ThemeSubcommand::Set { theme } => {
            preference.set(theme.parse::<Theme>()?)?;
        }
    }

    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(preference.current()),
        Style::new().dim().apply_to(format!("({})", source_label(preference.source())))
    );
    Ok(())
}

fn system_preference(arg: SystemArg) -> SystemPreference {
    match arg {
        SystemArg::Light => SystemPreference::Light,
        SystemArg::Dark => SystemPreference::Dark,
        SystemArg::None => SystemPreference::NoPreference,
    }
}

fn source_label(source: ThemeSource) -> &'static str {
    match source {
        ThemeSource::Saved => "saved",
        ThemeSource::System => "system",
        ThemeSource::Default => "default",
    }
}
