//! Section feed data model.
//!
//! Plain value types decoded from the JSON feed. A successful fetch
//! replaces the whole section list; nothing here is mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Top-level envelope of the feed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub sections: Vec<Section>,
}

impl Payload {
    /// Decode a payload from raw response bytes.
    ///
    /// All-or-nothing: any malformed section fails the whole document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}

/// A named, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Grouping key, unique across the payload.
    pub id: String,
    /// Display string for the section header.
    pub header: String,
    /// Advisory count, not checked against `items`.
    pub items_total: i64,
    /// Advisory count, not checked against `items`.
    pub items_to_show: i64,
    pub items: Vec<Item>,
}

/// A single renderable entity.
///
/// Equality and hashing use `id` only. Two items with the same id are the
/// same entity for diffing purposes even if title or image differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub image: Image,
    pub title: String,
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Image reference with three resolution variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(rename = "1x")]
    pub x1: String,
    #[serde(rename = "2x")]
    pub x2: String,
    #[serde(rename = "3x")]
    pub x3: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_animation: Option<bool>,
}

impl Image {
    /// URL of the requested resolution variant.
    pub fn url(&self, scale: ImageScale) -> &str {
        match scale {
            ImageScale::X1 => &self.x1,
            ImageScale::X2 => &self.x2,
            ImageScale::X3 => &self.x3,
        }
    }
}

/// Resolution variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageScale {
    #[serde(rename = "1x")]
    X1,
    #[default]
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "3x")]
    X3,
}

impl fmt::Display for ImageScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageScale::X1 => "1x",
            ImageScale::X2 => "2x",
            ImageScale::X3 => "3x",
        };
        f.write_str(label)
    }
}

impl FromStr for ImageScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1x" => Ok(ImageScale::X1),
            "2x" => Ok(ImageScale::X2),
            "3x" => Ok(ImageScale::X3),
            other => Err(format!("unknown image scale '{}' (expected 1x, 2x or 3x)", other)),
        }
    }
}
