use clap::Parser;
use itertools::Itertools;
use kondate::prelude::*;
use std::time::Instant;

/// An allergen-aware recipe catalog filtering and aggregation CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a catalog JSON file (the built-in demo catalog is used when omitted)
    catalog_path: Option<String>,

    /// Load the catalog from a binary artifact instead of JSON
    #[arg(long, conflicts_with = "catalog_path")]
    artifact: Option<String>,

    /// Allergens to exclude (repeatable)
    #[arg(short = 'a', long = "exclude-allergen")]
    excluded_allergens: Vec<String>,

    /// Diets to require, any match qualifies (repeatable)
    #[arg(short = 'd', long = "diet")]
    required_diets: Vec<String>,

    /// Cuisines to require, any match qualifies (repeatable)
    #[arg(short = 'c', long = "cuisine")]
    required_cuisines: Vec<String>,

    /// List the derived filter options and exit
    #[arg(long)]
    options: bool,

    /// Look up a single recipe by id and exit
    #[arg(long)]
    id: Option<u32>,

    /// Print cuisine/allergen/diet distributions for the matching subset
    #[arg(long)]
    distributions: bool,

    /// Save the loaded catalog as a binary artifact to this path
    #[arg(long)]
    save_artifact: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // --- 1. Catalog Loading ---
    let load_start = Instant::now();
    let catalog = load_catalog(&cli);
    let load_duration = load_start.elapsed();
    println!(
        "Loaded catalog with {} recipes in {:?}",
        catalog.len(),
        load_duration
    );

    if let Some(path) = &cli.save_artifact {
        CatalogArtifact::new(catalog.clone())
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        println!("Saved catalog artifact to '{}'", path);
    }

    if cli.options {
        print_options(&catalog.options());
        return;
    }

    if let Some(id) = cli.id {
        match catalog.lookup_by_id(id) {
            Some(recipe) => print_recipe(recipe),
            None => println!("No recipe with id {}", id),
        }
        return;
    }

    // --- 2. Filtering ---
    let mut selection = Selection::new();
    for allergen in &cli.excluded_allergens {
        selection = selection.exclude_allergen(allergen.clone());
    }
    for diet in &cli.required_diets {
        selection = selection.require_diet(diet.clone());
    }
    for cuisine in &cli.required_cuisines {
        selection = selection.require_cuisine(cuisine.clone());
    }

    let filter_start = Instant::now();
    let matches = filter_recipes(&catalog, &selection);
    let filter_duration = filter_start.elapsed();

    if matches.is_empty() {
        println!("\nNo recipes found matching your criteria. Try adjusting your filters.");
    } else {
        println!(
            "\nFound {} recipe{} matching your criteria (in {:?}):\n",
            matches.len(),
            if matches.len() == 1 { "" } else { "s" },
            filter_duration
        );
        for recipe in &matches {
            print_recipe(recipe);
        }
    }

    // --- 3. Distributions ---
    if cli.distributions {
        println!("\n--- Distributions (matching subset) ---");
        print_distribution("Cuisine", &cuisine_distribution(matches.iter().copied()));
        print_distribution("Allergen", &allergen_distribution(matches.iter().copied()));
        print_distribution("Diet", &diet_distribution(matches.iter().copied()));
    }
}

fn load_catalog(cli: &Cli) -> Catalog {
    if let Some(path) = &cli.artifact {
        let artifact = CatalogArtifact::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load artifact: {}", e)));
        return artifact
            .into_catalog()
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid artifact: {}", e)));
    }

    match &cli.catalog_path {
        Some(path) => Catalog::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e))),
        None => {
            println!("No catalog file provided. Using the built-in demo catalog.");
            kondate::data::demo_catalog()
                .unwrap_or_else(|e| exit_with_error(&format!("Demo catalog failed to load: {}", e)))
        }
    }
}

fn print_options(options: &FilterOptions) {
    println!("\n--- Filter Options ---");
    println!("Allergens: {}", options.allergens.join(", "));
    println!("Diets:     {}", options.diets.join(", "));
    println!("Cuisines:  {}", options.cuisines.join(", "));
}

fn print_recipe(recipe: &Recipe) {
    println!(
        "  [{}] {} ({}) - prep {} min, cook {} min",
        recipe.id, recipe.name, recipe.cuisine, recipe.prep_time, recipe.cook_time
    );
    if !recipe.allergens.is_empty() {
        println!("      Allergens: {}", recipe.allergens.join(", "));
    }
    if !recipe.diet.is_empty() {
        println!("      Diets:     {}", recipe.diet.join(", "));
    }
}

fn print_distribution(label: &str, distribution: &Distribution) {
    // The map itself carries no order; sort for stable terminal output.
    let entries = distribution
        .iter()
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(value, count)| format!("{}: {}", value, count))
        .join(", ");
    println!("{:<9} {{{}}}", label, entries);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
