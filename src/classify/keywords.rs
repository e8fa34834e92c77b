//! Prompt to [`Category`] classification.
//!
//! The keyword table is versioned static data. Precedence is the declaration order of the rows
//! and then of the keywords inside a row: the first keyword found anywhere in the prompt wins,
//! even when a later, longer keyword also matches.

use std::collections::HashSet;

use crate::classify::category::Category;
use crate::foundation::error::{ReelError, ReelResult};

/// Keyword table, in precedence order.
pub const CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (Category::BrushTeeth, &["brush", "tooth", "teeth", "toothbrush"]),
    (Category::WakeUp, &["wake", "morning", "get up", "rise"]),
    (
        Category::EatBreakfast,
        &["eat", "food", "breakfast", "meal", "break", "lunch", "dinner"],
    ),
    (
        Category::Dress,
        &[
            "dress", "cloth", "wear", "put on", "shirt", "pants", "shoes", "socks",
        ],
    ),
    (Category::Bath, &["bath", "shower", "tub"]),
    (
        Category::WashHands,
        &["wash hand", "hand wash", "soap", "clean hand"],
    ),
    (
        Category::Play,
        &["play", "game", "toy", "fun", "run", "jump", "dance"],
    ),
    (Category::Read, &["read", "book", "story", "page"]),
    (
        Category::Clean,
        &["clean", "tidy", "organize", "pick up", "put away"],
    ),
];

/// Map a free-text prompt to a category. Total: unmatched prompts map to [`Category::Default`].
pub fn classify(prompt: &str) -> Category {
    classify_with(CATEGORY_TABLE, prompt)
}

pub(crate) fn classify_with(table: &[(Category, &[&str])], prompt: &str) -> Category {
    let prompt = prompt.trim().to_lowercase();
    if prompt.is_empty() {
        return Category::Default;
    }
    table
        .iter()
        .flat_map(|(category, keywords)| keywords.iter().map(move |kw| (*category, *kw)))
        .find(|(_, kw)| prompt.contains(kw))
        .map(|(category, _)| category)
        .unwrap_or(Category::Default)
}

/// Reject duplicate, empty or non-lowercase keywords.
pub fn validate_table(table: &[(Category, &[&str])]) -> ReelResult<()> {
    let mut seen = HashSet::<&str>::new();
    let mut rows = HashSet::<Category>::new();
    for (category, keywords) in table {
        if *category == Category::Default {
            return Err(ReelError::validation(
                "keyword table must not map to the default category",
            ));
        }
        if !rows.insert(*category) {
            return Err(ReelError::validation(format!(
                "category '{category}' appears twice in keyword table"
            )));
        }
        for kw in keywords.iter() {
            check_phrase(kw)?;
            if !seen.insert(*kw) {
                return Err(ReelError::validation(format!(
                    "duplicate keyword '{kw}'"
                )));
            }
        }
    }
    Ok(())
}

/// Shared shape check for table phrases: non-empty, trimmed, lowercase.
pub(crate) fn check_phrase(phrase: &str) -> ReelResult<()> {
    if phrase.trim().is_empty() {
        return Err(ReelError::validation("keyword table contains an empty phrase"));
    }
    if phrase.trim() != phrase {
        return Err(ReelError::validation(format!(
            "keyword '{phrase}' has surrounding whitespace"
        )));
    }
    if phrase.to_lowercase() != phrase {
        return Err(ReelError::validation(format!(
            "keyword '{phrase}' must be lowercase"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/classify/keywords.rs"]
mod tests;
