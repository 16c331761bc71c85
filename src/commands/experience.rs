//! Experience command implementation

use console::Style;
use std::path::PathBuf;

use folio::error::Result;
use folio::showcase::Resume;

use crate::cli::ExperienceArgs;
use crate::commands::helpers::open_site;

/// Run experience command
pub fn run(site: Option<PathBuf>, args: ExperienceArgs) -> Result<()> {
    let site = open_site(site)?;
    let resume = Resume::load(&site.experience_path())?;

    if !args.skills {
        display_experience(&resume);
    }
    display_skills(&resume);

    if let Some(ref url) = resume.resume_url {
        println!("{} {}", Style::new().bold().apply_to("Resume:"), url);
    }
    Ok(())
}

fn display_experience(resume: &Resume) {
    if resume.experience.is_empty() {
        println!("No experience entries.");
        println!();
        return;
    }

    println!("Experience ({}):", resume.experience.len());
    println!();
    for entry in &resume.experience {
        println!("  {}", Style::new().bold().yellow().apply_to(&entry.role));
        println!("    {}", Style::new().dim().apply_to(&entry.period));
        for line in entry.description.lines().filter(|l| !l.trim().is_empty()) {
            println!("    {}", line.trim());
        }
        if !entry.skills.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Skills:"),
                Style::new().cyan().apply_to(entry.skills.join(", "))
            );
        }
        println!();
    }
}

fn display_skills(resume: &Resume) {
    if resume.skills.is_empty() {
        return;
    }
    println!("Skills:");
    for group in &resume.skills {
        println!(
            "  {} {}",
            Style::new().bold().apply_to(format!("{}:", group.name)),
            group.skills.join(", ")
        );
    }
    println!();
}
