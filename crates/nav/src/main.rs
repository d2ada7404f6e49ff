//! Stockroom navigation preview tool.
//!
//! Renders the sidebar for a given page, role and user so menu files and
//! template overrides can be checked without the hosting application.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_nav::config::Config;
use stockroom_nav::{MenuEntry, NavView, Role, ViewState};

#[derive(Debug, Parser)]
#[command(
    name = "stockroom-nav",
    version,
    about = "Preview the Stockroom navigation sidebar"
)]
struct Cli {
    /// Menu definition file (overrides NAV_MENU_FILE).
    #[arg(long, global = true)]
    menu: Option<PathBuf>,

    /// Template override directory (overrides NAV_TEMPLATE_DIR).
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Mobile breakpoint in px (overrides NAV_MOBILE_BREAKPOINT).
    #[arg(long, global = true)]
    breakpoint: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the rendered sidebar markup.
    Render {
        #[command(flatten)]
        request: RequestArgs,

        /// Include the stylesheet and script.
        #[arg(long)]
        fragment: bool,
    },
    /// Print the computed navigation view as JSON.
    View {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Validate the menu definition and list its entries.
    Check,
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// Id of the page being viewed.
    #[arg(long, default_value = "")]
    page: String,

    /// Role of the logged-in user (admin, manager, staff).
    #[arg(long, default_value = "staff")]
    role: String,

    /// Display name of the logged-in user.
    #[arg(long, default_value = "")]
    name: String,
}

impl RequestArgs {
    fn view_state(&self) -> ViewState {
        ViewState::new(
            self.page.as_str(),
            Role::from_name(&self.role),
            self.name.as_str(),
        )
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(menu) = cli.menu {
        config.menu_file = Some(menu);
    }
    if let Some(templates) = cli.templates {
        config.template_dir = Some(templates);
    }
    if let Some(breakpoint) = cli.breakpoint {
        config.mobile_breakpoint = breakpoint;
    }

    let menu = config.load_menu()?;

    match cli.command {
        Command::Render { request, fragment } => {
            let engine = config.theme_engine()?;
            let view = NavView::build(&menu, &request.view_state());
            let html = if fragment {
                engine.render_fragment(&view)
            } else {
                engine.render_sidebar(&view)
            }
            .context("failed to render sidebar")?;
            println!("{html}");
        }
        Command::View { request } => {
            let view = NavView::build(&menu, &request.view_state());
            let json =
                serde_json::to_string_pretty(&view).context("failed to serialize view")?;
            println!("{json}");
        }
        Command::Check => {
            println!("{:<16} {:<8} {:<10} {}", "ID", "KIND", "MIN ROLE", "LINKS");
            println!("{}", "-".repeat(44));
            for entry in menu.entries() {
                let (kind, links) = match entry {
                    MenuEntry::Link(_) => ("link", 1),
                    MenuEntry::Group(group) => ("group", group.children.len()),
                };
                let min_role = entry.min_role().map_or("all", |r| r.as_str());
                println!("{:<16} {:<8} {:<10} {}", entry.id(), kind, min_role, links);
            }
            info!(
                entries = menu.len(),
                ids = menu.ids().len(),
                "Menu definition is valid"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so rendered output on stdout stays clean.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
