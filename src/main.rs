mod app;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};

use app::WindowRenderer;
use kegg_scatter::data::loader::{load_measurements, load_pathways};
use kegg_scatter::state::create_plot;

const PATHWAY_FILE: &str = "kegg.tsv";
const MEASUREMENT_FILE: &str = "log10.txt";

/// Directory holding the executable; both input tables are read from here.
fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    exe.parent()
        .map(PathBuf::from)
        .with_context(|| format!("{} has no parent directory", exe.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let dir = program_dir()?;
    let pathway_path = dir.join(PATHWAY_FILE);
    let measurement_path = dir.join(MEASUREMENT_FILE);

    let pathways = load_pathways(&pathway_path)
        .with_context(|| format!("loading pathway table {}", pathway_path.display()))?;
    let measurements = load_measurements(&measurement_path)
        .with_context(|| format!("loading measurement table {}", measurement_path.display()))?;

    create_plot(&measurements, &pathways, &mut WindowRenderer::default())
}
