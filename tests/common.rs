//! Common test utilities for building catalogs and recipes.
use kondate::prelude::*;

/// Builds a minimal recipe with the fields the query engine cares about.
#[allow(dead_code)]
pub fn recipe(id: u32, name: &str, cuisine: &str, allergens: &[&str], diet: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        ingredients: vec![],
        allergens: allergens.iter().map(|s| s.to_string()).collect(),
        diet: diet.iter().map(|s| s.to_string()).collect(),
        prep_time: 10,
        cook_time: 10,
        calories: None,
        rating: None,
        instructions: None,
        image: None,
    }
}

/// Two-recipe catalog: a soy vegan stir fry and a gluten vegetarian pasta.
#[allow(dead_code)]
pub fn two_recipe_catalog() -> Catalog {
    Catalog::new(vec![
        recipe(1, "Stir Fry", "Asian", &["Soy"], &["Vegan"]),
        recipe(2, "Pasta", "Italian", &["Gluten"], &["Vegetarian"]),
    ])
    .expect("valid test catalog")
}

/// A wider catalog exercising multi-tag recipes, an allergen-free recipe
/// and repeated cuisines.
#[allow(dead_code)]
pub fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        recipe(1, "Burger", "American", &["Gluten", "Dairy"], &["Non-vegetarian"]),
        recipe(2, "Stir Fry", "Asian", &["Soy"], &["Vegan", "Vegetarian"]),
        recipe(3, "Pancakes", "American", &["Dairy", "Eggs"], &["Vegetarian"]),
        recipe(4, "Salmon", "Mediterranean", &["Fish"], &["Pescatarian"]),
        recipe(5, "Smoothie", "Beverage", &[], &["Vegan", "Vegetarian"]),
    ])
    .expect("valid test catalog")
}

/// The ids of a filtered subset, in result order.
#[allow(dead_code)]
pub fn ids(subset: &[&Recipe]) -> Vec<u32> {
    subset.iter().map(|recipe| recipe.id).collect()
}
