//! Folio CLI
//!
//! Inspect, replay and validate single-page portfolio sites.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_app::{PageEffect, PageEvent, PortfolioPage};
use folio_content::ContactForm;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::{FolioConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Single-page portfolio toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Site directory containing folio.toml
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the page sections and where they are laid out
    Sections,

    /// Report which section is active at a scroll offset
    Sample {
        /// Viewport scroll offset in pixels
        offset: f32,
    },

    /// Replay a JSON array of page events and print the resulting states
    Replay {
        /// Event script
        events: PathBuf,

        /// Print the final view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the mailto link for a contact message
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// Validate the site configuration and content
    Check,

    /// Write a folio.toml with every default spelled out
    Init {
        /// Overwrite an existing folio.toml
        #[arg(long)]
        force: bool,
    },

    /// Show version and crate information
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Sections => cmd_sections(&cli.dir),
        Commands::Sample { offset } => cmd_sample(&cli.dir, offset),
        Commands::Replay { events, json } => cmd_replay(&cli.dir, &events, json),
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => cmd_contact(&cli.dir, ContactForm::new(name, email, subject, message)),
        Commands::Check => cmd_check(&cli.dir),
        Commands::Init { force } => cmd_init(&cli.dir, force),
        Commands::Info => cmd_info(),
    }
}

fn load_page(dir: &Path) -> Result<PortfolioPage> {
    let config = FolioConfig::load_from_dir(dir)?;
    let portfolio = config.load_portfolio(dir)?;
    PortfolioPage::new(portfolio, config.page_config()).context("Failed to build page")
}

fn cmd_sections(dir: &Path) -> Result<()> {
    let page = load_page(dir)?;
    let layout = page.layout();

    println!("{:<14} {:<12} {:>8} {:>8}", "SECTION", "KIND", "TOP", "HEIGHT");
    for slot in layout.slots() {
        let bounds = slot.bounds();
        println!(
            "{:<14} {:<12} {:>8.0} {:>8.0}",
            slot.id,
            format!("{:?}", slot.kind).to_lowercase(),
            bounds.top(),
            bounds.height
        );
    }
    println!();
    println!(
        "content height {:.0}, viewport {:.0}, max scroll {:.0}",
        layout.content_height(),
        layout.viewport_height(),
        layout.max_scroll()
    );
    Ok(())
}

fn cmd_sample(dir: &Path, offset: f32) -> Result<()> {
    let mut page = load_page(dir)?;
    let outcome = page.scroll(offset);
    let view = page.view();

    info!("Sampled offset {} ({:?})", offset, outcome);
    println!("active section:   {}", view.active_section);
    println!("header condensed: {}", view.header_condensed);
    Ok(())
}

fn cmd_replay(dir: &Path, events: &Path, json: bool) -> Result<()> {
    let script = fs::read_to_string(events)
        .with_context(|| format!("Failed to read {}", events.display()))?;
    let events: Vec<PageEvent> = serde_json::from_str(&script)
        .with_context(|| format!("Failed to parse {}", events.display()))?;

    let mut page = load_page(dir)?;
    info!("Replaying {} events", events.len());

    for (index, event) in events.into_iter().enumerate() {
        let label = format!("{:?}", event);
        match page.handle(event) {
            Ok(effect) => {
                let view = page.view();
                println!(
                    "{:>4}  {:<48} active={} offset={:.0} menu={} dark={} condensed={}",
                    index,
                    label,
                    view.active_section,
                    view.scroll_offset,
                    view.menu_open,
                    view.dark_theme,
                    view.header_condensed
                );
                if let Some(PageEffect::OpenLink { url }) = effect {
                    println!("      open {}", url);
                }
            }
            Err(err) => warn!("Event {} rejected: {}", index, err),
        }
    }

    if json {
        let view = serde_json::to_string_pretty(&page.view())?;
        println!("{}", view);
    }
    Ok(())
}

fn cmd_contact(dir: &Path, mut form: ContactForm) -> Result<()> {
    let mut page = load_page(dir)?;
    let link = page.submit_contact(&mut form)?;
    println!("{}", link);
    Ok(())
}

fn cmd_check(dir: &Path) -> Result<()> {
    let config = FolioConfig::load_from_dir(dir)?;
    let portfolio = config.load_portfolio(dir)?;
    let page = PortfolioPage::new(portfolio, config.page_config())?;
    let portfolio = page.portfolio();

    info!("Checking site: {}", portfolio.personal.name);
    println!("sections:     {}", portfolio.section_ids().join(", "));
    println!(
        "skills:       {} in {} categories",
        portfolio.skills.len(),
        portfolio.skill_categories().len()
    );
    println!("experience:   {}", portfolio.experiences.len());
    println!(
        "projects:     {} in {} categories",
        portfolio.projects.len(),
        portfolio.project_categories().len()
    );
    println!(
        "education:    {} degrees, {} certificates",
        portfolio.education.len(),
        portfolio.certificates.len()
    );
    println!("social links: {}", portfolio.social_links.len());

    if page.layout().max_scroll() <= 0.0 {
        warn!("Content fits in one viewport; scroll tracking will never leave the first section");
    }
    println!("ok");
    Ok(())
}

fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let text = FolioConfig::default().to_toml()?;
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Folio");
    println!("=====");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Crates:");
    println!("  - folio_core      section registry, scroll sampler, navigation state");
    println!("  - folio_animation spring-driven smooth scrolling");
    println!("  - folio_theme     light and dark palettes");
    println!("  - folio_content   portfolio content and contact links");
    println!("  - folio_app       the page: layout, events, view model");
    println!();
    println!("Event types for `folio replay`:");
    println!("  scroll, navigate, get_in_touch, scroll_to_top, toggle_theme, toggle_menu,");
    println!("  frame, settle, resize, filter_skills, filter_projects, submit_contact");

    Ok(())
}
