//! Projects command implementation

use console::Style;
use std::path::PathBuf;

use folio::error::Result;
use folio::showcase::{Project, ProjectCatalog, ProjectMedia, ProjectModal};

use crate::cli::ProjectsArgs;
use crate::commands::helpers::open_site;

/// Run projects command
pub fn run(site: Option<PathBuf>, args: ProjectsArgs) -> Result<()> {
    let site = open_site(site)?;
    let catalog = ProjectCatalog::load(&site.projects_path())?;

    if let Some(id) = args.id {
        let mut modal = ProjectModal::new();
        modal.open(catalog.get(id)?.clone());
        if let Some(project) = modal.selected() {
            display_project_detailed(project);
        }
        modal.close();
        return Ok(());
    }

    let projects: Vec<&Project> = match args.category.as_deref() {
        Some(category) => catalog.in_category(category).collect(),
        None => catalog.all().iter().collect(),
    };

    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!("Projects ({}):", projects.len());
    println!();
    for project in projects {
        display_project_simple(project);
    }
    Ok(())
}

fn display_project_simple(project: &Project) {
    println!(
        "  {} {}",
        Style::new().dim().apply_to(format!("#{}", project.id)),
        Style::new().bold().yellow().apply_to(&project.title)
    );
    if let Some(ref category) = project.category {
        println!("    {} {}", Style::new().bold().apply_to("Category:"), category);
    }
}

fn display_project_detailed(project: &Project) {
    println!("{}", Style::new().bold().yellow().apply_to(&project.title));
    match project.media() {
        ProjectMedia::Video { embed_url } => {
            println!("{} {}", Style::new().bold().apply_to("Video:"), embed_url);
        }
        ProjectMedia::Image { src } => {
            println!("{} {}", Style::new().bold().apply_to("Image:"), src);
        }
        ProjectMedia::None => {}
    }
    if let Some(link) = project.link() {
        println!(
            "{} {}",
            Style::new().bold().apply_to("Link:"),
            Style::new().cyan().apply_to(link)
        );
    }
    if !project.description.is_empty() {
        println!();
        println!("{}", project.description.trim_end());
    }
}
