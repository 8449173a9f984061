use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use algoviz::model::Locator;
use algoviz::remote::{CatalogClient, GistClient};
use algoviz::store::LocalStore;
use algoviz::tui_shell;
use algoviz::workspace::{Workbench, parse_route};

#[derive(Parser)]
#[command(name = "algoviz")]
#[command(about = "Terminal workspace for Algorithm Visualizer content", long_about = None)]
struct Cli {
    /// Route to open, e.g. /sorting/bubble-sort or /scratch-paper/<gist-id>
    route: Option<String>,

    /// Preferred code file extension (overrides the stored config)
    #[arg(long)]
    ext: Option<String>,

    /// Catalog API base URL (overrides the stored config)
    #[arg(long)]
    catalog_url: Option<String>,

    /// Gist API base URL (overrides the stored config)
    #[arg(long)]
    gist_url: Option<String>,

    /// Directory holding the .algoviz store (defaults to the home directory)
    #[arg(long)]
    store_root: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.store_root {
        Some(root) => root,
        None => dirs::home_dir().context("locate home directory")?,
    };
    let store = LocalStore::open_or_init(&root)?;

    let mut cfg = store.read_config()?;
    if let Some(ext) = cli.ext {
        cfg.preferred_ext = ext;
    }
    if let Some(url) = cli.catalog_url {
        cfg.catalog_url = url;
    }
    if let Some(url) = cli.gist_url {
        cfg.gist_url = url;
    }

    let catalog = CatalogClient::new(cfg.catalog_url.clone())?;
    let gists = GistClient::new(cfg.gist_url.clone())?;
    let initial = match cli.route.as_deref() {
        Some(route) => parse_route(route),
        None => Locator::None,
    };

    let bench = Workbench::new(
        Box::new(catalog),
        Box::new(gists),
        Box::new(tui_shell::ConfirmDiscard),
        store,
        cfg.preferred_ext,
    );
    tui_shell::run(bench, initial)
}
