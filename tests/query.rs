//! Tests for the filter predicate and distribution aggregation.
mod common;
use common::*;
use kondate::prelude::*;

#[test]
fn test_empty_selection_returns_full_catalog_in_order() {
    let catalog = mixed_catalog();
    let matches = filter_recipes(&catalog, &Selection::new());
    assert_eq!(ids(&matches), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_empty_catalog_yields_empty_result() {
    let catalog = Catalog::new(vec![]).unwrap();
    let selection = Selection::new().require_diet("Vegan");
    assert!(filter_recipes(&catalog, &selection).is_empty());
    assert!(filter_recipes(&catalog, &Selection::new()).is_empty());
}

#[test]
fn test_allergen_exclusion_rejects_any_intersection() {
    let catalog = two_recipe_catalog();
    let selection = Selection::new().exclude_allergen("Soy");
    // The soy stir fry is rejected; the pasta survives.
    assert_eq!(ids(&filter_recipes(&catalog, &selection)), vec![2]);
}

#[test]
fn test_diet_inclusion_requires_a_shared_tag() {
    let catalog = two_recipe_catalog();
    let selection = Selection::new().require_diet("Vegan");
    assert_eq!(ids(&filter_recipes(&catalog, &selection)), vec![1]);
}

#[test]
fn test_unknown_cuisine_matches_nothing() {
    let catalog = two_recipe_catalog();
    let selection = Selection::new().require_cuisine("French");
    assert!(filter_recipes(&catalog, &selection).is_empty());
}

#[test]
fn test_diet_dimension_is_or_within_itself() {
    let catalog = mixed_catalog();
    // Vegan OR Pescatarian: stir fry, salmon and smoothie qualify.
    let selection = Selection::new().require_diet("Vegan").require_diet("Pescatarian");
    assert_eq!(ids(&filter_recipes(&catalog, &selection)), vec![2, 4, 5]);
}

#[test]
fn test_dimensions_combine_with_and() {
    let catalog = mixed_catalog();
    let selection = Selection::new()
        .exclude_allergen("Soy")
        .require_diet("Vegetarian");
    // Vegetarian recipes are 2, 3, 5; the stir fry carries soy and drops out.
    assert_eq!(ids(&filter_recipes(&catalog, &selection)), vec![3, 5]);
}

#[test]
fn test_and_composability_across_dimensions() {
    // Filtering by the combined selection equals intersecting the three
    // single-dimension results.
    let catalog = mixed_catalog();
    let combined = Selection::new()
        .exclude_allergen("Dairy")
        .require_diet("Vegetarian")
        .require_cuisine("American");

    let by_allergen = filter_recipes(&catalog, &Selection::new().exclude_allergen("Dairy"));
    let by_diet = filter_recipes(&catalog, &Selection::new().require_diet("Vegetarian"));
    let by_cuisine = filter_recipes(&catalog, &Selection::new().require_cuisine("American"));

    let intersected: Vec<u32> = catalog
        .iter()
        .filter(|r| {
            by_allergen.iter().any(|m| m.id == r.id)
                && by_diet.iter().any(|m| m.id == r.id)
                && by_cuisine.iter().any(|m| m.id == r.id)
        })
        .map(|r| r.id)
        .collect();

    assert_eq!(ids(&filter_recipes(&catalog, &combined)), intersected);
}

#[test]
fn test_adding_an_exclusion_never_grows_the_result() {
    let catalog = mixed_catalog();
    let base = Selection::new().require_diet("Vegetarian");
    let baseline = filter_recipes(&catalog, &base).len();

    for allergen in catalog.options().allergens {
        let narrowed = base.clone().exclude_allergen(allergen);
        assert!(filter_recipes(&catalog, &narrowed).len() <= baseline);
    }
}

#[test]
fn test_filter_is_deterministic() {
    let catalog = mixed_catalog();
    let selection = Selection::new().exclude_allergen("Dairy").require_diet("Vegan");
    let first = ids(&filter_recipes(&catalog, &selection));
    let second = ids(&filter_recipes(&catalog, &selection));
    assert_eq!(first, second);
}

#[test]
fn test_cuisine_distribution_counts_sum_to_subset_length() {
    let catalog = mixed_catalog();
    let subset = filter_recipes(&catalog, &Selection::new().require_diet("Vegetarian"));

    let distribution = cuisine_distribution(subset.iter().copied());
    let total: usize = distribution.values().sum();
    assert_eq!(total, subset.len());
}

#[test]
fn test_cuisine_sum_invariant_holds_with_empty_cuisine() {
    // An empty cuisine lands in its own bucket instead of being dropped,
    // so the counts still sum to the subset length.
    let named = recipe(1, "Named", "Italian", &[], &[]);
    let unnamed = recipe(2, "Unnamed", "", &[], &[]);
    let subset = [&named, &unnamed];

    let distribution = cuisine_distribution(subset.iter().copied());
    let total: usize = distribution.values().sum();
    assert_eq!(total, subset.len());
    assert_eq!(distribution.get("Italian"), Some(&1));
    assert_eq!(distribution.get(""), Some(&1));
}

#[test]
fn test_allergen_distribution_multi_increments() {
    // X carries {Dairy, Eggs}, Y carries {Dairy}.
    let x = recipe(1, "X", "Test", &["Dairy", "Eggs"], &[]);
    let y = recipe(2, "Y", "Test", &["Dairy"], &[]);
    let subset = [&x, &y];

    let distribution = allergen_distribution(subset.iter().copied());
    assert_eq!(distribution.get("Dairy"), Some(&2));
    assert_eq!(distribution.get("Eggs"), Some(&1));
    assert_eq!(distribution.len(), 2);
}

#[test]
fn test_diet_distribution_over_full_catalog() {
    let catalog = mixed_catalog();
    let distribution = catalog.diet_distribution();

    assert_eq!(distribution.get("Vegan"), Some(&2));
    assert_eq!(distribution.get("Vegetarian"), Some(&3));
    assert_eq!(distribution.get("Pescatarian"), Some(&1));
    // No zero-filled buckets for absent categories.
    assert_eq!(distribution.get("Keto"), None);
}

#[test]
fn test_distributions_skip_recipes_outside_the_subset() {
    let catalog = mixed_catalog();
    let subset = filter_recipes(&catalog, &Selection::new().require_cuisine("American"));

    let distribution = cuisine_distribution(subset.iter().copied());
    assert_eq!(distribution.get("American"), Some(&2));
    assert_eq!(distribution.get("Asian"), None);
}

#[test]
fn test_distribution_of_empty_subset_is_empty() {
    assert!(cuisine_distribution(std::iter::empty()).is_empty());
    assert!(allergen_distribution(std::iter::empty()).is_empty());
    assert!(diet_distribution(std::iter::empty()).is_empty());
}
