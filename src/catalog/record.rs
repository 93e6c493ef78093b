use crate::error::CatalogError;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::fs;

/// A single recipe record in the catalog.
///
/// Records are immutable once the catalog is built. The `allergens` and
/// `diet` tag lists are normalized during ingestion: empty strings and the
/// literal `"None"` sentinel found in older dataset revisions are dropped,
/// so downstream logic can treat "no allergens" uniformly as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(default, alias = "prepTime")]
    pub prep_time: u32,
    #[serde(default, alias = "cookTime")]
    pub cook_time: u32,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The full, ordered collection of recipes, loaded once and read-only for
/// the rest of the session.
///
/// A `Catalog` can only be obtained through [`Catalog::new`] (or the JSON
/// helpers built on it), which validates ids and normalizes tag lists. All
/// query functions preserve the catalog's original record order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Validates and normalizes a list of recipes into a catalog.
    ///
    /// Ids must be positive and unique. Tag lists are normalized in place:
    /// empty strings and `"None"` sentinels are removed from `allergens`
    /// and `diet`.
    pub fn new(mut recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        for recipe in &mut recipes {
            if recipe.id == 0 {
                return Err(CatalogError::InvalidRecipeId {
                    name: recipe.name.clone(),
                });
            }
            normalize_tags(&mut recipe.allergens);
            normalize_tags(&mut recipe.diet);
        }

        let mut seen: AHashMap<u32, &str> = AHashMap::new();
        for recipe in &recipes {
            if let Some(first) = seen.insert(recipe.id, &recipe.name) {
                return Err(CatalogError::DuplicateRecipeId {
                    id: recipe.id,
                    first: first.to_string(),
                    second: recipe.name.clone(),
                });
            }
        }

        Ok(Self { recipes })
    }

    /// Parses a catalog from its JSON representation (a top-level array of
    /// recipe objects; camelCase field names like `prepTime` are accepted).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        Self::new(recipes)
    }

    /// Loads and parses a catalog from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileError {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The recipes in original catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Finds the recipe with the given id, or `None` if no such recipe
    /// exists. An absent id is an expected outcome, not a failure.
    pub fn lookup_by_id(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Consumes the catalog and returns the underlying records.
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Drops empty strings, the legacy `"None"` sentinel and duplicate entries
/// from a tag list, preserving first-occurrence order.
fn normalize_tags(tags: &mut Vec<String>) {
    let mut seen: AHashSet<String> = AHashSet::new();
    tags.retain(|tag| !tag.is_empty() && tag != "None" && seen.insert(tag.clone()));
}
