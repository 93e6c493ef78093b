//! # Kondate - Recipe Catalog Filtering and Aggregation Engine
//!
//! **Kondate** is an allergen-aware recipe filtering engine: it holds an
//! immutable in-memory catalog of recipe records, derives the distinct
//! filter options (allergens, diets, cuisines) the catalog actually
//! contains, computes the subset matching a user's selection, and
//! aggregates categorical distributions over any subset for summary
//! charts. The engine is pure computation over resident data; rendering,
//! persistence and transport belong to its callers.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic: it operates on a canonical [`Catalog`]
//! of [`Recipe`] records. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your recipe source into a `Catalog`, either
//!     through the built-in JSON format (`Catalog::from_json`) or by
//!     implementing the `IntoCatalog` trait for your own structs.
//! 2.  **Derive Options**: `Catalog::options` yields the sorted distinct
//!     allergen, diet and cuisine values for building a selection UI.
//! 3.  **Filter**: Collect the user's choices into a [`Selection`] and call
//!     `filter_recipes` (or `Catalog::filter`) to get the matching subset
//!     in catalog order.
//! 4.  **Aggregate**: Feed any subset to the distribution functions to get
//!     category-to-count maps for chart display.
//!
//! ## Quick Start
//!
//! ```rust
//! use kondate::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // The crate ships a small demonstration catalog; real callers load
//!     // their own via `Catalog::from_json` or the `IntoCatalog` trait.
//!     let catalog = kondate::data::demo_catalog()?;
//!
//!     // Derive the filter options a UI would render as checkbox groups.
//!     let options = catalog.options();
//!     println!("Known allergens: {:?}", options.allergens);
//!
//!     // The user wants soy-free vegetarian recipes.
//!     let selection = Selection::new()
//!         .exclude_allergen("Soy")
//!         .require_diet("Vegetarian");
//!
//!     let matches = filter_recipes(&catalog, &selection);
//!     println!("Found {} matching recipes", matches.len());
//!
//!     // Summarize the matching subset for a cuisine chart.
//!     let by_cuisine = cuisine_distribution(matches.iter().copied());
//!     for (cuisine, count) in &by_cuisine {
//!         println!("  {} x{}", cuisine, count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! [`Catalog`]: catalog::Catalog
//! [`Recipe`]: catalog::Recipe
//! [`Selection`]: query::Selection

pub mod catalog;
pub mod data;
pub mod error;
pub mod prelude;
pub mod query;
