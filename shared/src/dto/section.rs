//! # List Sections
//!
//! Titled groups of assets as rendered by the currency list.

use serde::{Deserialize, Serialize};

use super::asset::Asset;

/// An ordered, titled group of assets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    pub data: Vec<Asset>,
}

impl Section {
    pub fn new(title: impl Into<String>, data: Vec<Asset>) -> Self {
        Self {
            title: title.into(),
            data,
        }
    }

    /// Single untitled section wrapping `data`.
    pub fn headerless(data: Vec<Asset>) -> Vec<Section> {
        vec![Section::new("", data)]
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
