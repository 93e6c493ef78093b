use super::record::Catalog;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The three derived filter-option lists: every distinct allergen, diet and
/// cuisine value observed in a catalog, each list sorted ascending.
///
/// These feed the checkbox groups (or any other selection UI) of a consumer.
/// They are a pure function of the catalog, so re-deriving after a catalog
/// reload can never leave stale or invented entries behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub allergens: Vec<String>,
    pub diets: Vec<String>,
    pub cuisines: Vec<String>,
}

impl FilterOptions {
    /// Derives the option lists from a catalog.
    ///
    /// Allergen and diet options are the union over each recipe's tag list;
    /// cuisine options are the union of the single `cuisine` values. Empty
    /// strings are excluded everywhere (the `"None"` sentinel is already
    /// gone by ingestion). An empty catalog yields three empty lists.
    pub fn derive(catalog: &Catalog) -> Self {
        let allergens = catalog
            .iter()
            .flat_map(|recipe| recipe.allergens.iter())
            .filter(|tag| !tag.is_empty())
            .unique()
            .sorted()
            .cloned()
            .collect();

        let diets = catalog
            .iter()
            .flat_map(|recipe| recipe.diet.iter())
            .filter(|tag| !tag.is_empty())
            .unique()
            .sorted()
            .cloned()
            .collect();

        let cuisines = catalog
            .iter()
            .map(|recipe| &recipe.cuisine)
            .filter(|cuisine| !cuisine.is_empty())
            .unique()
            .sorted()
            .cloned()
            .collect();

        Self {
            allergens,
            diets,
            cuisines,
        }
    }
}

impl Catalog {
    /// Convenience accessor for [`FilterOptions::derive`].
    pub fn options(&self) -> FilterOptions {
        FilterOptions::derive(self)
    }
}
