// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Descriptive choices sent along with a try-on request.
//!
//! Every field is optional and there are no cross-field constraints.
//! Garment type and style accept values outside the known set because
//! catalogue entries carry their own hand-authored labels.

use serde::{Deserialize, Serialize};

/// Portion of the body shown in the person photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Top,
    Bottom,
    Full,
}

impl ModelType {
    pub const ALL: [ModelType; 3] = [ModelType::Top, ModelType::Bottom, ModelType::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Top => "top",
            ModelType::Bottom => "bottom",
            ModelType::Full => "full",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelType::Top => "Top Half",
            ModelType::Bottom => "Bottom Half",
            ModelType::Full => "Full Body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unisex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unisex => "unisex",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unisex => "Unisex",
        }
    }
}

/// Kind of garment. Unknown values are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GarmentType {
    Shirt,
    Lehenga,
    Saree,
    Kurta,
    Other(String),
}

impl GarmentType {
    pub const KNOWN: [GarmentType; 4] = [
        GarmentType::Shirt,
        GarmentType::Lehenga,
        GarmentType::Saree,
        GarmentType::Kurta,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            GarmentType::Shirt => "shirt",
            GarmentType::Lehenga => "lehenga",
            GarmentType::Saree => "saree",
            GarmentType::Kurta => "kurta",
            GarmentType::Other(value) => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GarmentType::Shirt => "Shirt",
            GarmentType::Lehenga => "Lehenga",
            GarmentType::Saree => "Saree",
            GarmentType::Kurta => "Kurta",
            GarmentType::Other(value) => value,
        }
    }
}

// Matching is exact: "Shirt" stays a catalogue label rather than
// collapsing into the "shirt" option.
impl From<String> for GarmentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "shirt" => GarmentType::Shirt,
            "lehenga" => GarmentType::Lehenga,
            "saree" => GarmentType::Saree,
            "kurta" => GarmentType::Kurta,
            _ => GarmentType::Other(value),
        }
    }
}

impl From<GarmentType> for String {
    fn from(value: GarmentType) -> Self {
        match value {
            GarmentType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Styling of the outfit. Unknown values are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    Casual,
    Formal,
    Festive,
    Traditional,
    Other(String),
}

impl Style {
    pub const KNOWN: [Style; 4] = [Style::Casual, Style::Formal, Style::Festive, Style::Traditional];

    pub fn as_str(&self) -> &str {
        match self {
            Style::Casual => "casual",
            Style::Formal => "formal",
            Style::Festive => "festive",
            Style::Traditional => "traditional",
            Style::Other(value) => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Style::Casual => "Casual",
            Style::Formal => "Formal",
            Style::Festive => "Festive",
            Style::Traditional => "Traditional",
            Style::Other(value) => value,
        }
    }
}

impl From<String> for Style {
    fn from(value: String) -> Self {
        match value.as_str() {
            "casual" => Style::Casual,
            "formal" => Style::Formal,
            "festive" => Style::Festive,
            "traditional" => Style::Traditional,
            _ => Style::Other(value),
        }
    }
}

impl From<Style> for String {
    fn from(value: Style) -> Self {
        match value {
            Style::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// The user's descriptive choices for one try-on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryOnSelection {
    pub model_type: Option<ModelType>,
    pub gender: Option<Gender>,
    pub garment_type: Option<GarmentType>,
    pub style: Option<Style>,
    /// Free-text instructions; empty means none.
    pub instructions: String,
}

impl TryOnSelection {
    /// Selection used by the catalogue: garment fields only.
    pub fn for_garment(garment_type: GarmentType, style: Style) -> Self {
        Self {
            garment_type: Some(garment_type),
            style: Some(style),
            ..Default::default()
        }
    }
}
