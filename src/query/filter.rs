use super::selection::Selection;
use crate::catalog::{Catalog, Recipe};

/// Computes the subset of the catalog matching a selection, in original
/// catalog order.
///
/// Pure and deterministic: the same catalog and selection always yield the
/// same ordered subset. An unconstrained selection returns the full catalog;
/// an empty catalog returns an empty subset regardless of the selection.
/// Neither case is an error.
pub fn filter_recipes<'a>(catalog: &'a Catalog, selection: &Selection) -> Vec<&'a Recipe> {
    catalog
        .iter()
        .filter(|recipe| selection.matches(recipe))
        .collect()
}

impl Catalog {
    /// Convenience accessor for [`filter_recipes`].
    pub fn filter(&self, selection: &Selection) -> Vec<&Recipe> {
        filter_recipes(self, selection)
    }
}
