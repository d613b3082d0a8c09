use serde::{Deserialize, Serialize};

use crate::extract::RecipeFields;

/// Title used when a block has content but no readable name.
pub const UNTITLED: &str = "(untitled)";

/// One entry of the exported `recipes.json`.
///
/// `cuisine`, `appliances`, `time_minutes`, `dishes_count`, `tags` and
/// `last_cooked_at` are left blank here and filled in by hand on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub cuisine: String,
    pub appliances: Vec<String>,
    pub time_minutes: Option<u32>,
    pub dishes_count: Option<u32>,
    pub tags: Vec<String>,
    pub cooked_count: u32,
    pub last_cooked_at: Option<String>,
    pub image_url: String,
    pub source_url: String,
    pub servings: String,
    pub categories: Vec<String>,
    pub made_this: String,
    pub starred: String,
    pub rating: String,
    pub ingredients: String,
    pub directions: String,
    pub notes: String,
}

pub fn record_id(position: usize) -> String {
    format!("cmt-{:04}", position)
}

fn number_steps(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Recipe {
    /// Builds the record at 1-based `position`, or `None` for a block with
    /// no title, ingredients or directions.
    pub fn assemble(fields: RecipeFields, position: usize) -> Option<Recipe> {
        let ingredients = fields.ingredients.join("\n").trim().to_string();
        let directions = number_steps(&fields.directions).trim().to_string();

        if fields.title.is_empty() && ingredients.is_empty() && directions.is_empty() {
            return None;
        }

        let title = if fields.title.is_empty() {
            UNTITLED.to_string()
        } else {
            fields.title
        };

        Some(Recipe {
            id: record_id(position),
            title,
            cuisine: String::new(),
            appliances: Vec::new(),
            time_minutes: None,
            dishes_count: None,
            tags: Vec::new(),
            cooked_count: 0,
            last_cooked_at: None,
            image_url: fields.image_url,
            source_url: fields.source_url,
            servings: fields.servings,
            categories: fields.categories,
            made_this: fields.made_this,
            starred: fields.starred,
            rating: fields.rating,
            ingredients,
            directions,
            notes: fields.notes,
        })
    }
}
