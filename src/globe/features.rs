//! Named placemarks to be drawn on a globe
//!
//! Catalogs are stored as a JSON array of objects:
//!
//! ```json
//! [
//!   { "name": "London", "latitude": 51.5074, "longitude": -0.1278 },
//!   { "name": "Sydney", "latitude": -33.8688, "longitude": 151.2093,
//!     "description": "Harbour city" }
//! ]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::coordinates::{GeoCoordinate, Vector3};
use crate::{GlobeError, Result};

/// A named location on the globe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    /// Unique name within a catalog
    pub name: String,
    /// Where the placemark sits
    #[serde(flatten)]
    pub coordinate: GeoCoordinate,
    /// Free-form label text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Placemark {
    /// Create a placemark without a description
    pub fn new(name: &str, coordinate: GeoCoordinate) -> Self {
        Self {
            name: name.to_string(),
            coordinate,
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// A placemark after it has been put on a globe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedFeature {
    /// Name of the placemark this came from
    pub name: String,
    /// Coordinate as given in the catalog
    pub coordinate: GeoCoordinate,
    /// Position in the globe's Cartesian frame
    pub position: Vector3,
}

/// An ordered collection of uniquely named placemarks
#[derive(Debug, Clone, Default)]
pub struct PlacemarkCatalog {
    placemarks: Vec<Placemark>,
    by_name: HashMap<String, usize>,
}

impl PlacemarkCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placemark, rejecting names already in the catalog
    pub fn add(&mut self, placemark: Placemark) -> Result<()> {
        if self.by_name.contains_key(&placemark.name) {
            return Err(GlobeError::DuplicatePlacemark(placemark.name));
        }
        self.by_name.insert(placemark.name.clone(), self.placemarks.len());
        self.placemarks.push(placemark);
        Ok(())
    }

    /// Get a placemark by name
    pub fn get(&self, name: &str) -> Option<&Placemark> {
        self.by_name.get(name).map(|&idx| &self.placemarks[idx])
    }

    pub fn len(&self) -> usize {
        self.placemarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placemarks.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Placemark> {
        self.placemarks.iter()
    }

    /// Parse a catalog from a JSON array
    pub fn from_json_str(json: &str) -> Result<Self> {
        let placemarks: Vec<Placemark> = serde_json::from_str(json)?;
        Self::try_from(placemarks)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        debug!("Loaded {} placemarks from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serialize the catalog as a pretty-printed JSON array
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.placemarks)?)
    }

    /// Write the catalog to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

impl TryFrom<Vec<Placemark>> for PlacemarkCatalog {
    type Error = GlobeError;

    /// Fails on the first repeated name
    fn try_from(placemarks: Vec<Placemark>) -> Result<Self> {
        let mut catalog = Self::new();
        for placemark in placemarks {
            catalog.add(placemark)?;
        }
        Ok(catalog)
    }
}
