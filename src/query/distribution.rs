use crate::catalog::{Catalog, Recipe};
use ahash::AHashMap;
use itertools::Itertools;

/// A mapping from category value to the number of recipes in a subset
/// exhibiting that value. Keys carry no order guarantee; chart consumers
/// impose their own presentation ordering. Categories absent from the
/// subset are absent from the map (no zero-filled entries).
pub type Distribution = AHashMap<String, usize>;

/// Tallies the single `cuisine` value of each recipe in the subset.
///
/// Each recipe contributes exactly 1, so the counts always sum to the
/// subset length. A recipe with an empty cuisine string counts toward an
/// empty-string bucket rather than being dropped.
pub fn cuisine_distribution<'a>(subset: impl IntoIterator<Item = &'a Recipe>) -> Distribution {
    let mut counts = Distribution::new();
    for recipe in subset {
        *counts.entry(recipe.cuisine.clone()).or_insert(0) += 1;
    }
    counts
}

/// Tallies allergens across the subset. A recipe contributes 1 to the
/// bucket of each distinct allergen it carries, so a recipe with two
/// allergens increments two buckets and the counts may exceed the subset
/// length. Empty entries are skipped.
pub fn allergen_distribution<'a>(subset: impl IntoIterator<Item = &'a Recipe>) -> Distribution {
    tally_tags(subset, |recipe| recipe.allergens.as_slice())
}

/// Tallies diet tags across the subset, with the same multi-increment
/// logic as [`allergen_distribution`].
pub fn diet_distribution<'a>(subset: impl IntoIterator<Item = &'a Recipe>) -> Distribution {
    tally_tags(subset, |recipe| recipe.diet.as_slice())
}

fn tally_tags<'a>(
    subset: impl IntoIterator<Item = &'a Recipe>,
    tags: impl Fn(&'a Recipe) -> &'a [String],
) -> Distribution {
    let mut counts = Distribution::new();
    for recipe in subset {
        // Distinct tags per recipe: a duplicated tag still counts once.
        for tag in tags(recipe).iter().unique() {
            if tag.is_empty() {
                continue;
            }
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

impl Catalog {
    /// [`cuisine_distribution`] over the full catalog.
    pub fn cuisine_distribution(&self) -> Distribution {
        cuisine_distribution(self.iter())
    }

    /// [`allergen_distribution`] over the full catalog.
    pub fn allergen_distribution(&self) -> Distribution {
        allergen_distribution(self.iter())
    }

    /// [`diet_distribution`] over the full catalog.
    pub fn diet_distribution(&self) -> Distribution {
        diet_distribution(self.iter())
    }
}
