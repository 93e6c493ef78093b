use clap::Parser;
use kondate::catalog::Recipe;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fs;

/// A CLI tool to generate randomized catalog JSON for load testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_catalog.json")]
    output: String,

    /// The number of recipes to generate
    #[arg(short, long, default_value_t = 100)]
    count: u32,
}

const CUISINES: &[&str] = &[
    "American",
    "Asian",
    "Beverage",
    "Dessert",
    "Indian",
    "Italian",
    "Mediterranean",
    "Mexican",
];

const ALLERGENS: &[&str] = &[
    "Coconut", "Dairy", "Eggs", "Fish", "Gluten", "Peanuts", "Shellfish", "Soy",
];

const DIETS: &[&str] = &["Non-vegetarian", "Pescatarian", "Vegan", "Vegetarian"];

const INGREDIENTS: &[&str] = &[
    "Basil", "Carrots", "Garlic", "Ginger", "Lemon", "Olive oil", "Onion", "Pasta", "Rice",
    "Salt", "Spices", "Tomato",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.count == 0 {
        eprintln!("Error: --count must be at least 1");
        std::process::exit(1);
    }

    println!("Generating {} random recipes...", cli.count);

    let recipes: Vec<Recipe> = (1..=cli.count).map(|id| generate_recipe(id, &mut rng)).collect();

    let json_output = serde_json::to_string_pretty(&recipes)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} recipes to '{}'",
        cli.count, cli.output
    );

    Ok(())
}

fn generate_recipe(id: u32, rng: &mut ThreadRng) -> Recipe {
    Recipe {
        id,
        name: format!("Generated Recipe {}", id),
        cuisine: pick_one(CUISINES, rng),
        ingredients: pick_some(INGREDIENTS, rng, 3, 6),
        allergens: pick_some(ALLERGENS, rng, 0, 3),
        diet: pick_some(DIETS, rng, 0, 2),
        prep_time: rng.random_range(5..30),
        cook_time: rng.random_range(0..60),
        calories: Some(rng.random_range(100..900)),
        rating: Some((rng.random_range(10..50) as f32) / 10.0),
        instructions: None,
        image: None,
    }
}

fn pick_one(pool: &[&str], rng: &mut ThreadRng) -> String {
    pool.choose(rng).map(|s| s.to_string()).unwrap_or_default()
}

fn pick_some(pool: &[&str], rng: &mut ThreadRng, min: usize, max: usize) -> Vec<String> {
    let count = rng.random_range(min..=max);
    let mut picked: Vec<&str> = pool.choose_multiple(rng, count).copied().collect();
    picked.sort_unstable();
    picked.into_iter().map(|s| s.to_string()).collect()
}
