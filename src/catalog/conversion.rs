use super::record::Catalog;
use crate::error::CatalogConversionError;

/// A trait for custom data models that can be converted into a `Catalog`.
///
/// This is the extension point for making Kondate format-agnostic. The crate
/// ships JSON loading for the canonical array-of-recipes format, but many
/// sources (CSV exports, API payloads, embedded fixtures) carry their own
/// shapes. Implement this trait on your parsed representation to provide the
/// translation layer into the catalog model.
///
/// # Example
///
/// ```rust,no_run
/// use kondate::prelude::*;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyRow { id: u32, title: String, kitchen: String }
/// struct MyExport { rows: Vec<MyRow> }
///
/// // 2. Implement `IntoCatalog` for your top-level struct.
/// impl IntoCatalog for MyExport {
///     fn into_catalog(self) -> std::result::Result<Catalog, CatalogConversionError> {
///         let recipes = self
///             .rows
///             .into_iter()
///             .map(|row| Recipe {
///                 id: row.id,
///                 name: row.title,
///                 cuisine: row.kitchen,
///                 ingredients: vec![],
///                 allergens: vec![],
///                 diet: vec![],
///                 prep_time: 0,
///                 cook_time: 0,
///                 calories: None,
///                 rating: None,
///                 instructions: None,
///                 image: None,
///             })
///             .collect();
///
///         Catalog::new(recipes)
///             .map_err(|e| CatalogConversionError::ValidationError(e.to_string()))
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a validated `Catalog`.
    fn into_catalog(self) -> Result<Catalog, CatalogConversionError>;
}
