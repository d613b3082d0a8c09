use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "_import/recipes.html";
pub const DEFAULT_OUTPUT_PATH: &str = "recipes.json";

/// Where the export is read from and where `recipes.json` is written.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
