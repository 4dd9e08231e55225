// src/domain/company.rs

use serde::{Deserialize, Serialize};

/// A business as it appears in `companies.json`.
///
/// `name` is the identity of a company: focus actions and marker bindings
/// refer to companies by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    #[serde(default)]
    pub hours: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Company {
    pub fn coordinate(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// Opening hours for display; absent hours render as an empty string.
    pub fn hours_label(&self) -> &str {
        self.hours.as_deref().unwrap_or("")
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
