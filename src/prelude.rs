//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! the kondate crate. Import this module to get access to the core
//! functionality without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kondate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a catalog and derive the filter options once.
//! let catalog = Catalog::from_file("path/to/recipes.json")?;
//! let options = catalog.options();
//!
//! // Filter with a caller-owned selection and summarize the result.
//! let selection = Selection::new().exclude_allergen("Gluten");
//! let matches = filter_recipes(&catalog, &selection);
//! let by_diet = diet_distribution(matches.iter().copied());
//!
//! println!("{} matches across {} diets", matches.len(), by_diet.len());
//! # Ok(())
//! # }
//! ```

// Catalog model and ingestion
pub use crate::catalog::{Catalog, CatalogArtifact, FilterOptions, IntoCatalog, Recipe};

// Query surface
pub use crate::query::{
    Distribution, Selection, allergen_distribution, cuisine_distribution, diet_distribution,
    filter_recipes,
};

// Error types
pub use crate::error::{ArtifactError, CatalogConversionError, CatalogError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
