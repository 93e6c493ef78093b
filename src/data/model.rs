use crate::catalog::{Catalog, Recipe};
use crate::error::CatalogError;

/// Builds the built-in demonstration catalog.
///
/// Ten recipes spanning seven cuisines, used by the CLI when no catalog
/// file is supplied and by tests that want realistic data. The dataset
/// goes through the same [`Catalog::new`] validation as any other source.
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    let recipes = vec![
        recipe(
            1,
            "Classic Beef Burger",
            "American",
            &[
                "Ground beef",
                "Burger buns",
                "Lettuce",
                "Tomato",
                "Cheese",
                "Onion",
                "Pickles",
            ],
            &["Gluten", "Dairy"],
            &["Non-vegetarian"],
            20,
            15,
            "1. Form beef patties\n2. Grill patties to desired doneness\n3. Toast buns\n4. Assemble burger with toppings",
            "burger.jpg",
        ),
        recipe(
            2,
            "Vegetable Stir Fry",
            "Asian",
            &[
                "Broccoli",
                "Carrots",
                "Bell peppers",
                "Snow peas",
                "Soy sauce",
                "Ginger",
                "Garlic",
                "Sesame oil",
            ],
            &["Soy"],
            &["Vegan", "Vegetarian"],
            15,
            10,
            "1. Chop vegetables\n2. Heat oil in wok\n3. Stir-fry vegetables until crisp-tender\n4. Add sauce and cook for 1 minute",
            "stirfry.jpg",
        ),
        recipe(
            3,
            "Gluten-Free Pancakes",
            "American",
            &[
                "Gluten-free flour",
                "Eggs",
                "Milk",
                "Baking powder",
                "Sugar",
                "Butter",
            ],
            &["Dairy", "Eggs"],
            &["Vegetarian"],
            10,
            15,
            "1. Mix dry ingredients\n2. Add wet ingredients and mix\n3. Cook on griddle until bubbles form\n4. Flip and cook until golden",
            "pancakes.jpg",
        ),
        recipe(
            4,
            "Quinoa Salad",
            "Mediterranean",
            &[
                "Quinoa",
                "Cucumber",
                "Tomato",
                "Red onion",
                "Feta cheese",
                "Olive oil",
                "Lemon juice",
                "Herbs",
            ],
            &["Dairy"],
            &["Vegetarian"],
            15,
            20,
            "1. Cook quinoa according to package\n2. Chop vegetables\n3. Mix all ingredients with dressing\n4. Chill before serving",
            "quinoa.jpg",
        ),
        recipe(
            5,
            "Grilled Salmon",
            "Mediterranean",
            &[
                "Salmon fillets",
                "Lemon",
                "Olive oil",
                "Garlic",
                "Dill",
                "Salt",
                "Pepper",
            ],
            &["Fish"],
            &["Pescatarian", "Non-vegetarian"],
            10,
            15,
            "1. Season salmon with herbs and spices\n2. Grill for 4-6 minutes per side\n3. Squeeze lemon juice before serving",
            "salmon.jpg",
        ),
        recipe(
            6,
            "Vegan Chocolate Cake",
            "Dessert",
            &[
                "Flour",
                "Sugar",
                "Cocoa powder",
                "Baking soda",
                "Vegetable oil",
                "Vinegar",
                "Vanilla extract",
                "Water",
            ],
            &["Gluten"],
            &["Vegan"],
            15,
            30,
            "1. Mix dry ingredients\n2. Add wet ingredients and mix\n3. Bake at 350°F for 30 minutes\n4. Cool before serving",
            "cake.jpg",
        ),
        recipe(
            7,
            "Chicken Curry",
            "Indian",
            &[
                "Chicken",
                "Onion",
                "Garlic",
                "Ginger",
                "Tomatoes",
                "Coconut milk",
                "Spices",
            ],
            &["Coconut"],
            &["Non-vegetarian"],
            20,
            40,
            "1. Sauté onions, garlic, and ginger\n2. Add spices and cook until fragrant\n3. Add chicken and brown\n4. Add tomatoes and coconut milk, simmer until cooked",
            "curry.jpg",
        ),
        recipe(
            8,
            "Fruit Smoothie",
            "Beverage",
            &["Banana", "Strawberries", "Almond milk", "Honey", "Ice"],
            &[],
            &["Vegan", "Vegetarian"],
            5,
            0,
            "1. Combine all ingredients in blender\n2. Blend until smooth\n3. Serve immediately",
            "smoothie.jpg",
        ),
        recipe(
            9,
            "Asian Chicken Stir Fry",
            "Asian",
            &[
                "Chicken breast",
                "Broccoli",
                "Carrots",
                "Bell peppers",
                "Ginger",
                "Garlic",
                "Soy sauce",
                "Sesame oil",
            ],
            &["Soy"],
            &["Non-vegetarian"],
            15,
            10,
            "1. Cut chicken into strips\n2. Stir-fry chicken until cooked\n3. Add vegetables and stir-fry until tender\n4. Add sauce and cook for 1 minute",
            "chicken-stirfry.jpg",
        ),
        recipe(
            10,
            "Dairy-Free Pasta",
            "Italian",
            &[
                "Pasta",
                "Tomato sauce",
                "Olive oil",
                "Garlic",
                "Basil",
                "Oregano",
            ],
            &["Gluten"],
            &["Vegan", "Vegetarian"],
            10,
            15,
            "1. Cook pasta according to package\n2. Sauté garlic in olive oil\n3. Add tomato sauce and herbs\n4. Combine with pasta and serve",
            "pasta.jpg",
        ),
    ];

    Catalog::new(recipes)
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    name: &str,
    cuisine: &str,
    ingredients: &[&str],
    allergens: &[&str],
    diet: &[&str],
    prep_time: u32,
    cook_time: u32,
    instructions: &str,
    image: &str,
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        allergens: allergens.iter().map(|s| s.to_string()).collect(),
        diet: diet.iter().map(|s| s.to_string()).collect(),
        prep_time,
        cook_time,
        calories: None,
        rating: None,
        instructions: Some(instructions.to_string()),
        image: Some(image.to_string()),
    }
}
