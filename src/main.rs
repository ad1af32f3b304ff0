// SPDX-License-Identifier: PMPL-1.0-or-later

//! cv-dashboard: bilingual résumé dashboard for the terminal and the desktop.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use colored::*;
use cv_dashboard::config::DashboardConfig;
use cv_dashboard::content::{self, CvData, DataSource};
use cv_dashboard::dashboard::{perform_download, Action, DashboardState, DashboardView, Effect};
use cv_dashboard::logging::{init_logger, LogProfile};
use cv_dashboard::render::{DashboardGui, DashboardTui, ExportFormat, HostOptions, PageFormatter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-dashboard")]
#[command(version)]
#[command(about = "Bilingual résumé dashboard")]
#[command(long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Résumé data file (.json, .yaml, .yml) replacing the built-in data
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Initial language (en, es)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Directory holding the CV PDFs
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard as coloured text
    Show {
        /// Experience entry to show expanded
        #[arg(short, long)]
        expand: Option<u32>,

        /// Line width
        #[arg(short, long, default_value = "100")]
        width: usize,
    },

    /// Interactive terminal dashboard
    Tui,

    /// Desktop window dashboard
    Gui,

    /// Write the resolved page to a file or stdout
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout when omitted; the format's extension is added if missing)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Experience entry to include expanded
        #[arg(short, long)]
        expand: Option<u32>,
    },

    /// Copy the CV for the selected language out of the asset directory
    Download {
        /// Destination directory
        #[arg(short, long)]
        to: Option<PathBuf>,
    },

    /// Check the résumé data and the chrome catalog for gaps
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let profile = match cli.command {
        Commands::Tui | Commands::Gui => LogProfile::Interactive {
            verbose: cli.verbose,
        },
        _ => LogProfile::Cli {
            verbose: cli.verbose,
        },
    };
    init_logger(profile);

    let config = DashboardConfig::load(cli.config.as_deref())?.with_overrides(
        cli.lang.clone(),
        cli.data.clone(),
        cli.assets.clone(),
    );
    let data = DataSource::from_option(config.data.clone())
        .load()
        .context("loading résumé data")?;
    let state = DashboardState::new(config.default_lang())
        .with_assets(config.asset_root.clone())
        .with_contact(data.personal.email.clone());
    let options = HostOptions {
        download_dir: config.download_dir.clone(),
        year: chrono::Local::now().year(),
    };

    match cli.command {
        Commands::Show { expand, width } => {
            let state = expanded(state, &data, expand);
            let mut view = DashboardView::build(&data, &state, options.year);
            // Printed output is static; show the hero in its final state.
            view.hero.visible = true;
            PageFormatter::new(width).print(&view);
        }

        Commands::Tui => DashboardTui::run(&data, &options, state)?,

        Commands::Gui => DashboardGui::run(data, options, state)?,

        Commands::Export {
            format,
            output,
            expand,
        } => {
            let state = expanded(state, &data, expand);
            let view = DashboardView::build(&data, &state, options.year);
            let rendered = format.serialize(&view)?;
            match output {
                Some(path) => {
                    let path = format.output_path(path);
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Page exported to: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Download { to } => {
            let mut state = state;
            let target = to.unwrap_or(options.download_dir);
            if let Some(Effect::Download { file_name, source }) = state.dispatch(Action::DownloadCv) {
                match perform_download(&source, &target) {
                    Some(path) => println!("CV saved to: {}", path.display()),
                    None => println!(
                        "{} {} was not found in {}",
                        "warning:".yellow(),
                        file_name,
                        config.asset_root.display()
                    ),
                }
            }
        }

        Commands::Validate => run_validate(&data)?,
    }

    Ok(())
}

fn expanded(mut state: DashboardState, data: &CvData, expand: Option<u32>) -> DashboardState {
    if let Some(id) = expand {
        if data.experience(id).is_none() {
            tracing::warn!(id, "no experience entry with this id");
        }
        state.dispatch(Action::ToggleExperience(id));
    }
    state
}

fn run_validate(data: &CvData) -> Result<()> {
    let mut issues = content::validate(data);
    issues.extend(content::validate_catalog());

    println!("{}", "CV DATA VALIDATION".bold().cyan());
    println!(
        "  {} experience entries, {} education entries, {} chrome keys",
        data.experience.len(),
        data.education.len(),
        cv_dashboard::i18n::keys().count()
    );

    if issues.is_empty() {
        println!("  {}", "no issues found".green());
        return Ok(());
    }
    for issue in &issues {
        println!("  {} {}", "✗".red(), issue);
    }
    anyhow::bail!("{} validation issue(s)", issues.len())
}
