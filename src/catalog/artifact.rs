use super::options::FilterOptions;
use super::record::{Catalog, Recipe};
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A binary snapshot of a validated catalog and its derived filter options.
///
/// Tools that reload the same catalog repeatedly can save an artifact once
/// and skip JSON parsing afterwards. The snapshot is re-validated through
/// [`Catalog::new`] on load, so a stale or hand-edited artifact can never
/// smuggle an invalid catalog into the session.
#[derive(Serialize, Deserialize, Debug)]
pub struct CatalogArtifact {
    recipes: Vec<Recipe>,
    options: FilterOptions,
}

impl CatalogArtifact {
    pub fn new(catalog: Catalog) -> Self {
        let options = catalog.options();
        Self {
            recipes: catalog.into_recipes(),
            options,
        }
    }

    /// The filter options captured when the artifact was created.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Rebuilds the validated catalog from the snapshot.
    pub fn into_catalog(self) -> Result<Catalog, ArtifactError> {
        Catalog::new(self.recipes)
            .map_err(|e| ArtifactError::Generic(format!("Artifact validation failed: {}", e)))
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a catalog artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a catalog artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }
}
