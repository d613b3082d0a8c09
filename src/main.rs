use dotenv::dotenv;
use scraper::Html;
use std::fs;

mod config;
mod extract;
mod recipe;

use config::Config;
use recipe::Recipe;

fn main() -> anyhow::Result<()> {
    // Load all env variables from .env file.
    dotenv().ok();
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let config = Config::default();
    let count = run(&config)?;
    println!("Wrote {} recipes to {}", count, config.output_path.display());
    Ok(())
}

/// Turns the parsed export into records, numbering only the blocks that are kept.
pub fn convert(html: &str) -> Vec<Recipe> {
    let document = Html::parse_document(html);
    let blocks = extract::locate_blocks(&document);
    log::info!("Found {} recipe blocks", blocks.len());

    let mut recipes = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.into_iter().enumerate() {
        let fields = extract::extract_fields(block);
        match Recipe::assemble(fields, recipes.len() + 1) {
            Some(recipe) => {
                log::debug!("Assembled {} {:?}", recipe.id, recipe.title);
                recipes.push(recipe);
            }
            None => log::debug!("Skipping empty block {}", index + 1),
        }
    }
    recipes
}

/// Reads the export, converts it and writes the JSON array. Returns the
/// number of recipes written.
pub fn run(config: &Config) -> anyhow::Result<usize> {
    log::info!("Reading export from {}", config.input_path.display());
    let bytes = fs::read(&config.input_path)?;
    let html = String::from_utf8_lossy(&bytes);

    let recipes = convert(&html);
    let json = serde_json::to_string_pretty(&recipes)?;

    fs::write(&config.output_path, json)?;
    log::info!("Saved recipes to {}", config.output_path.display());

    Ok(recipes.len())
}
