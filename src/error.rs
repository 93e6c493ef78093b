use thiserror::Error;

/// Errors that can occur while ingesting and validating a recipe catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read catalog file '{path}': {message}")]
    FileError { path: String, message: String },

    #[error("Recipe '{name}' has id 0; recipe ids must be positive integers")]
    InvalidRecipeId { name: String },

    #[error("Duplicate recipe id {id}: '{first}' and '{second}' share it")]
    DuplicateRecipeId {
        id: u32,
        first: String,
        second: String,
    },
}

/// Errors that can occur when converting a custom user format into a `Catalog`.
#[derive(Error, Debug, Clone)]
pub enum CatalogConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while saving or loading a binary catalog artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}
