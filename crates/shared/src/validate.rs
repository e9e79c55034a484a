use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{Category, Error, Result};

pub const WRONG_CATEGORY: &str = "Wrong meal category! Choose from: breakfast, lunch, dinner.";
pub const WRONG_FORMAT: &str = "Wrong format. Use letters only!";

static NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name regex"));
static INGREDIENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z,\s]+$").expect("ingredients regex"));

pub fn parse_category(raw: &str) -> Result<Category> {
    Category::from_str(raw).map_err(|_| Error::Format(WRONG_CATEGORY.to_owned()))
}

/// Accepts letters and whitespace only, with at least one letter. Returns the trimmed name.
pub fn parse_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if !NAME.is_match(raw) || name.is_empty() {
        return Err(Error::Format(WRONG_FORMAT.to_owned()));
    }

    Ok(name.to_owned())
}

/// Splits a comma separated line. A single empty item rejects the whole line.
pub fn parse_ingredients(raw: &str) -> Result<Vec<String>> {
    if !INGREDIENTS.is_match(raw) {
        return Err(Error::Format(WRONG_FORMAT.to_owned()));
    }

    let ingredients = raw
        .split(',')
        .map(|ingredient| ingredient.trim().to_owned())
        .collect::<Vec<_>>();

    if ingredients.iter().any(|ingredient| ingredient.is_empty()) {
        return Err(Error::Format(WRONG_FORMAT.to_owned()));
    }

    Ok(ingredients)
}

pub fn is_letters_only(value: &str) -> bool {
    NAME.is_match(value) && !value.trim().is_empty()
}
