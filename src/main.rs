use clap::Parser;
use std::path::PathBuf;

use folio::{Config, PortfolioData, Theme};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio: about, skills, projects and contact")]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Portfolio dataset to show instead of the built-in one
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Section to open at, e.g. `projects` or `#projects`
    #[arg(long, value_name = "SECTION")]
    section: Option<String>,

    /// Color theme (light or dark)
    #[arg(long)]
    theme: Option<Theme>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    folio::logging::init_tracing(args.verbose)?;

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(theme) = args.theme {
        config.ui.theme = theme;
    }
    if let Some(path) = args.data {
        config.data_path = Some(path);
    }

    let data = match &config.data_path {
        Some(path) => PortfolioData::load(path)?,
        None => PortfolioData::embedded()?,
    };
    tracing::info!(
        projects = data.projects.len(),
        categories = data.skill_categories.len(),
        "starting portfolio for {}",
        data.profile.name
    );

    let location = match args.section {
        Some(section) => format!("/#{}", section.trim_start_matches('#')),
        None => "/".to_string(),
    };

    folio::gui::run(config, data, location).map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}
