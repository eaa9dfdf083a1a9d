//! Generates a simple static HTML site from the items JSON export.
//!
//! The export carries the `{guns, knives, gloves}` structure; per-item
//! field keys are tolerated across export versions. Output goes to
//! `<out-dir>/<out-file>`.

use clap::Parser;
use snaek_valuelist::errors::Result;
use snaek_valuelist::site::{catalog, render};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate_site", about = "Render a static catalog page from an items JSON export")]
struct Args {
    /// Path to the items JSON export
    #[arg(long, default_value = "data/items_with_images.json")]
    items: PathBuf,

    /// Output directory for the generated site
    #[arg(long, default_value = "mock_site")]
    out_dir: PathBuf,

    /// Output HTML filename
    #[arg(long, default_value = "index.html")]
    out_file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.items)?;
    let data: serde_json::Value = serde_json::from_str(&raw)?;

    let cards = catalog::dedup_cards(catalog::extract_cards(&data));
    let html = render::render_page(&cards);

    fs::create_dir_all(&args.out_dir)?;
    let path = args.out_dir.join(&args.out_file);
    fs::write(&path, html)?;
    println!("Wrote site to: {}", path.display());

    Ok(())
}
