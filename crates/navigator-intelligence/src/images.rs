// ABOUTME: Recipe image selection from photo search results using keyword scoring
// ABOUTME: Query cleanup, best-match picking, fallback photo URLs, and cache keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use navigator_core::constants::images::{CACHE_KEY_PREFIX, FALLBACK_PHOTO_BASE};
use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_QUERY_CHARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").ok());

/// Photo URLs at the sizes the search API offers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    /// Small rendition, used for recipe cards
    #[serde(default)]
    pub small: Option<String>,
    /// Regular rendition
    #[serde(default)]
    pub regular: Option<String>,
}

/// One photo search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCandidate {
    /// Generated alt text
    #[serde(default)]
    pub alt_description: Option<String>,
    /// Photographer description
    #[serde(default)]
    pub description: Option<String>,
    /// Rendition URLs
    #[serde(default)]
    pub urls: PhotoUrls,
}

impl PhotoCandidate {
    /// Number of keywords found in the alt text or description
    #[must_use]
    pub fn score(&self, keywords: &[&str]) -> usize {
        let text = format!(
            "{} {}",
            self.alt_description.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase();
        keywords.iter().filter(|kw| text.contains(**kw)).count()
    }
}

/// Trim, lower-case, and keep only ASCII letters, digits, and whitespace
#[must_use]
pub fn clean_query(query: &str) -> String {
    let lower = query.trim().to_lowercase();
    match NON_QUERY_CHARS.as_ref() {
        Some(re) => re.replace_all(&lower, "").into_owned(),
        None => lower,
    }
}

/// Keywords of an already-cleaned query
#[must_use]
pub fn keywords(cleaned: &str) -> Vec<&str> {
    cleaned.split_whitespace().collect()
}

/// First candidate with the strictly highest keyword score, or the first one
#[must_use]
pub fn select_best<'a>(candidates: &'a [PhotoCandidate], keywords: &[&str]) -> Option<&'a PhotoCandidate> {
    let mut best = candidates.first()?;
    let mut best_score = 0;
    for candidate in candidates {
        let score = candidate.score(keywords);
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }
    Some(best)
}

/// Small URL of the best match for `cleaned_query`, if any
#[must_use]
pub fn best_image_url(candidates: &[PhotoCandidate], cleaned_query: &str) -> Option<String> {
    select_best(candidates, &keywords(cleaned_query)).and_then(|best| best.urls.small.clone())
}

/// Placeholder photo for the recipe at `index`
#[must_use]
pub fn fallback_image_url(index: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=400&h=300&fit=crop",
        FALLBACK_PHOTO_BASE + index as u64
    )
}

/// Cache key for a recipe name
#[must_use]
pub fn cache_key(recipe_name: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{recipe_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(alt: &str, description: Option<&str>, small: &str) -> PhotoCandidate {
        PhotoCandidate {
            alt_description: Some(alt.to_owned()),
            description: description.map(str::to_owned),
            urls: PhotoUrls {
                small: Some(small.to_owned()),
                regular: None,
            },
        }
    }

    #[test]
    fn test_clean_query_strips_punctuation() {
        assert_eq!(clean_query("  Chicken Stir-Fry! "), "chicken stirfry");
        assert_eq!(clean_query("Café au lait"), "caf au lait");
        assert_eq!(clean_query("Mac & Cheese (2 servings)"), "mac  cheese 2 servings");
    }

    #[test]
    fn test_select_best_prefers_strictly_higher_score() {
        let candidates = vec![
            candidate("a bowl of soup", None, "s1"),
            candidate("fried rice with egg", None, "s2"),
            candidate("egg fried rice close up", Some("rice"), "s3"),
        ];
        let url = best_image_url(&candidates, &clean_query("Egg Fried Rice"));
        assert_eq!(url.as_deref(), Some("s2"));
    }

    #[test]
    fn test_select_best_defaults_to_first() {
        let candidates = vec![candidate("mountains", None, "m1"), candidate("sea", None, "m2")];
        let url = best_image_url(&candidates, "pasta");
        assert_eq!(url.as_deref(), Some("m1"));
        assert!(select_best(&[], &["pasta"]).is_none());
    }

    #[test]
    fn test_missing_small_url_yields_none() {
        let candidates = vec![PhotoCandidate::default()];
        assert_eq!(best_image_url(&candidates, "anything"), None);
    }

    #[test]
    fn test_fallback_and_cache_key() {
        assert_eq!(
            fallback_image_url(2),
            "https://images.unsplash.com/photo-1467003909587?w=400&h=300&fit=crop"
        );
        assert_eq!(cache_key("Burger Bowls"), "recipe_image_Burger Bowls");
    }
}
