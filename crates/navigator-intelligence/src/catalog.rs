// ABOUTME: Immutable recipe catalog with the built-in household recipes and file loading
// ABOUTME: Validates ids, titles, and ingredient lists when loading YAML or JSON catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use navigator_core::errors::{AppError, ErrorCode};
use navigator_core::models::Recipe;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const LUNCH_DINNER: &str = "Lunch/Dinner";

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The catalog document is not valid YAML or JSON
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
    /// A recipe has a blank id
    #[error("Recipe at position {index} has a blank id")]
    BlankId {
        /// Zero-based position in the catalog
        index: usize,
    },
    /// A recipe has a blank title
    #[error("Recipe '{id}' has a blank title")]
    BlankTitle {
        /// Recipe id
        id: String,
    },
    /// A recipe lists no ingredients
    #[error("Recipe '{id}' has no ingredients")]
    NoIngredients {
        /// Recipe id
        id: String,
    },
    /// Two recipes share an id
    #[error("Duplicate recipe id '{id}'")]
    DuplicateId {
        /// Repeated id
        id: String,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match error {
            CatalogError::Io { .. } => ErrorCode::ConfigError,
            _ => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Catalog files are either a bare list or a document with a `recipes` key
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Recipe>),
    Wrapped { recipes: Vec<Recipe> },
}

impl CatalogDocument {
    fn into_recipes(self) -> Vec<Recipe> {
        match self {
            Self::List(recipes) | Self::Wrapped { recipes } => recipes,
        }
    }
}

/// Fixed, validated set of recipes available for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog, validating every recipe
    ///
    /// # Errors
    ///
    /// Returns an error for blank ids or titles, empty ingredient lists, or duplicate ids
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for (index, recipe) in recipes.iter().enumerate() {
            if recipe.id.trim().is_empty() {
                return Err(CatalogError::BlankId { index });
            }
            if recipe.title.trim().is_empty() {
                return Err(CatalogError::BlankTitle {
                    id: recipe.id.clone(),
                });
            }
            if recipe.ingredients.is_empty() {
                return Err(CatalogError::NoIngredients {
                    id: recipe.id.clone(),
                });
            }
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: recipe.id.clone(),
                });
            }
        }
        Ok(Self { recipes })
    }

    /// The built-in household recipes
    #[must_use]
    pub fn stock() -> Self {
        Self {
            recipes: vec![
                Recipe::new(
                    "1",
                    "Egg Fried Rice",
                    &["Eggs", "Rice", "Soy Sauce", "Green Onion"],
                    LUNCH_DINNER,
                    "https://www.allrecipes.com/recipe/23298/egg-fried-rice/",
                ),
                Recipe::new(
                    "2",
                    "Pasta Primavera",
                    &["Pasta", "Tomato", "Garlic", "Olive Oil"],
                    LUNCH_DINNER,
                    "https://www.allrecipes.com/recipe/282286/easy-veggie-pasta-primavera/",
                ),
                Recipe::new(
                    "3",
                    "Chicken Stir Fry",
                    &["Chicken", "Bell Pepper", "Onion", "Soy Sauce"],
                    LUNCH_DINNER,
                    "https://www.momontimeout.com/easy-chicken-stir-fry-recipe/",
                ),
                Recipe::new(
                    "4",
                    "Burger Bowls",
                    &[
                        "Beef",
                        "Burger Seasoning",
                        "Lettuce",
                        "Tomato",
                        "Pickle",
                        "Fries",
                        "Butter",
                        "Ranch",
                        "Mayonnaise",
                        "Ketchup",
                        "Horseradish",
                        "Paprika",
                        "Garlic",
                    ],
                    LUNCH_DINNER,
                    "https://pinchofyum.com/burger-bowls-with-house-sauce-and-ranch-fries",
                ),
                Recipe::new(
                    "5",
                    "Mackerel and Leek Hash",
                    &["Potato", "Olive Oil", "Leek", "Mackerel", "Egg", "Horseradish"],
                    LUNCH_DINNER,
                    "https://www.bbcgoodfood.com/recipes/smoked-mackerel-leek-hash-horseradish",
                ),
            ],
        }
    }

    /// Parse and validate a YAML catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails validation
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_yaml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(document.into_recipes())
    }

    /// Parse and validate a JSON catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or fails validation
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(document.into_recipes())
    }

    /// Load a catalog file, YAML for `.yaml`/`.yml` and JSON otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let catalog = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!(
            path = %path.display(),
            recipes = catalog.len(),
            "Loaded recipe catalog"
        );
        Ok(catalog)
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate recipes in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::stock()
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_stock_catalog_is_valid() {
        let stock = RecipeCatalog::stock();
        assert_eq!(stock.len(), 5);
        assert_eq!(RecipeCatalog::new(stock.recipes().to_vec()).unwrap(), stock);
        assert_eq!(stock.get("4").unwrap().ingredients.len(), 13);
        assert!(stock.iter().all(|recipe| recipe.meal == LUNCH_DINNER));
    }

    #[test]
    fn test_yaml_list_with_numeric_ids() {
        let yaml = "
- id: 10
  title: Toast
  ingredients: [Bread, Butter]
  meal: Breakfast
  link: https://example.com/toast
";
        let catalog = RecipeCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.get("10").unwrap().title, "Toast");
    }

    #[test]
    fn test_json_wrapped_document() {
        let json = r#"{"recipes":[{"id":"a","title":"Salad","ingredients":["Lettuce"],"meal":"Lunch","link":"https://example.com"}]}"#;
        let catalog = RecipeCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_rejects_empty_ingredients() {
        let json = r#"[{"id":"a","title":"Air","ingredients":[],"meal":"Any","link":""}]"#;
        let err = RecipeCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::NoIngredients { ref id } if id == "a"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let recipes = vec![
            Recipe::new("x", "One", &["A"], "Any", ""),
            Recipe::new("x", "Two", &["B"], "Any", ""),
        ];
        let err = RecipeCatalog::new(recipes).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn test_rejects_blank_id_and_title() {
        let blank_id = vec![Recipe::new(" ", "One", &["A"], "Any", "")];
        assert!(matches!(
            RecipeCatalog::new(blank_id).unwrap_err(),
            CatalogError::BlankId { index: 0 }
        ));
        let blank_title = vec![Recipe::new("1", "", &["A"], "Any", "")];
        assert!(matches!(
            RecipeCatalog::new(blank_title).unwrap_err(),
            CatalogError::BlankTitle { .. }
        ));
    }

    #[test]
    fn test_load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("recipes.YML");
        std::fs::write(
            &yaml_path,
            "recipes:\n  - id: t1\n    title: Tea\n    ingredients: [Tea, Water]\n    meal: Snack\n    link: ''\n",
        )
        .unwrap();
        assert_eq!(RecipeCatalog::load(&yaml_path).unwrap().len(), 1);

        let json_path = dir.path().join("recipes.txt");
        std::fs::write(&json_path, "[]").unwrap();
        assert!(RecipeCatalog::load(&json_path).unwrap().is_empty());

        let missing = RecipeCatalog::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, CatalogError::Io { .. }));
        let err: AppError = missing.into();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_catalog_error_maps_to_invalid_input() {
        let err: AppError = CatalogError::Parse("bad".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
