use scraper::{ElementRef, Html, Node};

/// Class token carried by every recipe block in the export.
pub const RECIPE_MARKER: &str = "recipe";

pub const TITLE_ID: &str = "name";
pub const SOURCE_LINK_ID: &str = "original_link";
pub const SERVINGS_ID: &str = "servings";
pub const MADE_THIS_ID: &str = "made_this";
pub const STARRED_ID: &str = "starred";
pub const RATING_ID: &str = "rating";
pub const INGREDIENTS_ID: &str = "recipeIngredients";
pub const INSTRUCTIONS_ID: &str = "recipeInstructions";
pub const NOTES_ID: &str = "recipeNotes";

pub const IMAGE_TAG: &str = "img";
pub const IMAGE_MARKER: &str = "recipeImage";
pub const IMAGE_ATTR: &str = "src";
pub const CATEGORY_MARKER: &str = "recipeCategory";
pub const SUBHEADER_MARKER: &str = "recipeIngredient_subheader";
pub const INGREDIENT_MARKER: &str = "recipeIngredient";
pub const INSTRUCTION_MARKER: &str = "instruction";

/// Elements whose content never counts as text.
const NON_TEXT_TAGS: [&str; 2] = ["script", "style"];

/// Raw per-block values, before they are shaped into a `Recipe`.
///
/// `ingredients` and `directions` hold one entry per line; subheaders are
/// already prefixed with `## ` and directions are not numbered yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFields {
    pub title: String,
    pub image_url: String,
    pub source_url: String,
    pub servings: String,
    pub categories: Vec<String>,
    pub made_this: String,
    pub starred: String,
    pub rating: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub notes: String,
}

/// True when `marker` is one of the space separated tokens of `class_list`.
pub fn has_marker(marker: &str, class_list: &str) -> bool {
    class_list.split_whitespace().any(|class| class == marker)
}

fn carries(element: &ElementRef, marker: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|classes| has_marker(marker, classes))
}

/// Elements strictly below `element`, in document order.
fn descendant_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

pub fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_non_text(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| NON_TEXT_TAGS.contains(&element.name()))
}

/// Text nodes under `node`, leaving out script and style bodies.
fn visible_text<'a>(node: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    node.descendants().filter_map(|descendant| match descendant.value() {
        Node::Text(text) if !descendant.ancestors().any(|a| is_non_text(a.value())) => {
            Some(&**text)
        }
        _ => None,
    })
}

/// Single-line text content of `node`, or an empty string when there is no node.
pub fn normalize_text(node: Option<ElementRef>) -> String {
    match node {
        Some(node) => squash_whitespace(&visible_text(node).collect::<Vec<_>>().join(" ")),
        None => String::new(),
    }
}

pub fn collect_text<'a>(nodes: impl IntoIterator<Item = ElementRef<'a>>) -> Vec<String> {
    nodes
        .into_iter()
        .map(|node| normalize_text(Some(node)))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Every element of the document carrying the recipe class token.
pub fn locate_blocks(document: &Html) -> Vec<ElementRef<'_>> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| carries(element, RECIPE_MARKER))
        .collect()
}

pub fn find_by_id<'a>(block: ElementRef<'a>, id: &str) -> Option<ElementRef<'a>> {
    descendant_elements(block).find(|element| element.value().id() == Some(id))
}

fn find_all_marked<'a>(root: ElementRef<'a>, marker: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    descendant_elements(root).filter(move |element| carries(element, marker))
}

/// `src` of the first marked `<img>`, untouched.
pub fn image_url(block: ElementRef) -> String {
    descendant_elements(block)
        .find(|element| element.value().name() == IMAGE_TAG && carries(element, IMAGE_MARKER))
        .and_then(|img| img.value().attr(IMAGE_ATTR))
        .unwrap_or_default()
        .to_string()
}

pub fn categories(block: ElementRef) -> Vec<String> {
    collect_text(find_all_marked(block, CATEGORY_MARKER))
}

/// Walks the ingredients container in document order.
///
/// The subheader and item checks are independent: a node carrying both
/// class tokens yields a `## ` line followed by a plain line.
pub fn ingredient_lines(container: Option<ElementRef>) -> Vec<String> {
    let Some(container) = container else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for node in descendant_elements(container) {
        if carries(&node, SUBHEADER_MARKER) {
            let text = normalize_text(Some(node));
            if !text.is_empty() {
                lines.push(format!("## {}", text));
            }
        }
        if carries(&node, INGREDIENT_MARKER) {
            let text = normalize_text(Some(node));
            if !text.is_empty() {
                lines.push(text);
            }
        }
    }

    // The walk already sees every item node, so this only repeats it.
    if lines.is_empty() {
        lines = collect_text(find_all_marked(container, INGREDIENT_MARKER));
    }
    lines
}

pub fn instruction_lines(container: Option<ElementRef>) -> Vec<String> {
    match container {
        Some(container) => collect_text(find_all_marked(container, INSTRUCTION_MARKER)),
        None => Vec::new(),
    }
}

pub fn extract_fields(block: ElementRef) -> RecipeFields {
    let text_of = |id: &str| normalize_text(find_by_id(block, id));

    RecipeFields {
        title: text_of(TITLE_ID),
        image_url: image_url(block),
        source_url: text_of(SOURCE_LINK_ID),
        servings: text_of(SERVINGS_ID),
        categories: categories(block),
        made_this: text_of(MADE_THIS_ID),
        starred: text_of(STARRED_ID),
        rating: text_of(RATING_ID),
        ingredients: ingredient_lines(find_by_id(block, INGREDIENTS_ID)),
        directions: instruction_lines(find_by_id(block, INSTRUCTIONS_ID)),
        notes: text_of(NOTES_ID),
    }
}
