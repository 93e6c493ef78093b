use crate::catalog::Recipe;
use ahash::AHashSet;

/// The user-chosen constraint sets for one query: allergens to exclude,
/// diets to require, cuisines to require.
///
/// A `Selection` is owned by the caller (typically the UI layer) and passed
/// by reference into the query functions; the engine never holds or mutates
/// one. Each set may be empty, which means "no constraint" for that
/// dimension. Only membership matters.
///
/// The three dimensions deliberately do not share one matching rule:
/// allergens are exclusion-OR (any shared allergen disqualifies a recipe)
/// while diets and cuisines are inclusion-OR (any shared value qualifies
/// the dimension). See [`Selection::matches`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub excluded_allergens: AHashSet<String>,
    pub required_diets: AHashSet<String>,
    pub required_cuisines: AHashSet<String>,
}

impl Selection {
    /// An unconstrained selection, matching every recipe.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_allergen(mut self, allergen: impl Into<String>) -> Self {
        self.excluded_allergens.insert(allergen.into());
        self
    }

    pub fn require_diet(mut self, diet: impl Into<String>) -> Self {
        self.required_diets.insert(diet.into());
        self
    }

    pub fn require_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.required_cuisines.insert(cuisine.into());
        self
    }

    /// Checkbox semantics: inserts the allergen if absent, removes it if
    /// present.
    pub fn toggle_allergen(&mut self, allergen: &str) {
        toggle(&mut self.excluded_allergens, allergen);
    }

    pub fn toggle_diet(&mut self, diet: &str) {
        toggle(&mut self.required_diets, diet);
    }

    pub fn toggle_cuisine(&mut self, cuisine: &str) {
        toggle(&mut self.required_cuisines, cuisine);
    }

    /// Clears all three sets (the "reset filters" action).
    pub fn clear(&mut self) {
        self.excluded_allergens.clear();
        self.required_diets.clear();
        self.required_cuisines.clear();
    }

    /// `true` when all three sets are empty, i.e. every recipe matches.
    pub fn is_unconstrained(&self) -> bool {
        self.excluded_allergens.is_empty()
            && self.required_diets.is_empty()
            && self.required_cuisines.is_empty()
    }

    /// The filter predicate: a recipe matches iff all three dimension tests
    /// pass (AND across dimensions, OR within each dimension's own set).
    ///
    /// 1. Allergen exclusion: a non-empty `excluded_allergens` rejects the
    ///    recipe if any of its allergens is selected.
    /// 2. Diet inclusion: a non-empty `required_diets` requires at least one
    ///    of the recipe's diet tags to be selected.
    /// 3. Cuisine inclusion: a non-empty `required_cuisines` must contain
    ///    the recipe's single cuisine.
    ///
    /// An empty set always passes its test. Selected values that occur in
    /// no recipe are not errors; they simply match nothing.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.excluded_allergens.is_empty()
            && recipe
                .allergens
                .iter()
                .any(|allergen| self.excluded_allergens.contains(allergen))
        {
            return false;
        }

        if !self.required_diets.is_empty()
            && !recipe
                .diet
                .iter()
                .any(|diet| self.required_diets.contains(diet))
        {
            return false;
        }

        if !self.required_cuisines.is_empty() && !self.required_cuisines.contains(&recipe.cuisine)
        {
            return false;
        }

        true
    }
}

fn toggle(set: &mut AHashSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}
