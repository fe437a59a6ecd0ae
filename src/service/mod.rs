// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Try-on requests and the remote inference service.
//!
//! A [`TryOnRequest`] bundles two images with the optional descriptive
//! fields. It can only be built when both images are present, so a request
//! that reaches a [`TryOnService`] is always complete. [`client::TryOnClient`]
//! runs requests on a worker thread and allows one in flight at a time.

pub mod client;
pub mod http;

use crate::error::{TryOnError, ValidationError};
use crate::models::image::UploadedImage;
use crate::models::selection::TryOnSelection;
use serde::{Deserialize, Serialize};

/// A complete, validated try-on request.
#[derive(Debug, Clone)]
pub struct TryOnRequest {
    pub person_image: UploadedImage,
    pub cloth_image: UploadedImage,
    pub selection: TryOnSelection,
}

impl TryOnRequest {
    /// Build a request, failing if either image is missing.
    pub fn build(
        person_image: Option<UploadedImage>,
        cloth_image: Option<UploadedImage>,
        selection: TryOnSelection,
    ) -> Result<Self, ValidationError> {
        match (person_image, cloth_image) {
            (Some(person_image), Some(cloth_image)) => Ok(Self {
                person_image,
                cloth_image,
                selection,
            }),
            (None, None) => Err(ValidationError::MissingBothImages),
            (None, Some(_)) => Err(ValidationError::MissingPersonImage),
            (Some(_), None) => Err(ValidationError::MissingGarmentImage),
        }
    }

    /// Optional text fields in wire order. Absent values are omitted.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let selection = &self.selection;
        let mut fields = Vec::new();

        let instructions = selection.instructions.trim();
        if !instructions.is_empty() {
            fields.push(("instructions", instructions.to_string()));
        }
        if let Some(model_type) = selection.model_type {
            fields.push(("model_type", model_type.as_str().to_string()));
        }
        if let Some(gender) = selection.gender {
            fields.push(("gender", gender.as_str().to_string()));
        }
        if let Some(ref garment_type) = selection.garment_type {
            fields.push(("garment_type", garment_type.as_str().to_string()));
        }
        if let Some(ref style) = selection.style {
            fields.push(("style", style.as_str().to_string()));
        }
        fields
    }
}

/// Successful service payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryOnResponse {
    /// URI or `data:` reference to the generated image.
    pub image: String,
    /// Caption describing the result.
    pub text: String,
}

/// Something that can turn a request into a generated image.
#[cfg_attr(test, mockall::automock)]
pub trait TryOnService: Send + Sync {
    /// Perform one attempt. Blocks until the service answers.
    fn try_on(&self, request: &TryOnRequest) -> Result<TryOnResponse, TryOnError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::selection::{Gender, GarmentType, ModelType, Style};

    fn image(name: &str) -> UploadedImage {
        UploadedImage::from_bytes(name, vec![0u8; 4])
    }

    #[test]
    fn test_build_requires_both_images() {
        let selection = TryOnSelection::default();
        assert_eq!(
            TryOnRequest::build(None, None, selection.clone()).unwrap_err(),
            ValidationError::MissingBothImages
        );
        assert_eq!(
            TryOnRequest::build(None, Some(image("c.png")), selection.clone()).unwrap_err(),
            ValidationError::MissingPersonImage
        );
        assert_eq!(
            TryOnRequest::build(Some(image("p.png")), None, selection.clone()).unwrap_err(),
            ValidationError::MissingGarmentImage
        );
        assert!(TryOnRequest::build(Some(image("p.png")), Some(image("c.png")), selection).is_ok());
    }

    #[test]
    fn test_text_fields_in_wire_order() {
        let selection = TryOnSelection {
            model_type: Some(ModelType::Full),
            gender: Some(Gender::Female),
            garment_type: Some(GarmentType::Saree),
            style: Some(Style::Festive),
            instructions: "side view".to_string(),
        };
        let request = TryOnRequest::build(Some(image("p.png")), Some(image("c.png")), selection).unwrap();

        assert_eq!(
            request.text_fields(),
            vec![
                ("instructions", "side view".to_string()),
                ("model_type", "full".to_string()),
                ("gender", "female".to_string()),
                ("garment_type", "saree".to_string()),
                ("style", "festive".to_string()),
            ]
        );
    }

    #[test]
    fn test_text_fields_omit_absent_values() {
        let selection = TryOnSelection {
            instructions: "   ".to_string(),
            ..Default::default()
        };
        let request = TryOnRequest::build(Some(image("p.png")), Some(image("c.png")), selection).unwrap();
        assert!(request.text_fields().is_empty());
    }

    #[test]
    fn test_response_requires_image_and_text() {
        let ok: TryOnResponse = serde_json::from_str(r#"{"image": "data:image/png;base64,AA==", "text": "Nice"}"#).unwrap();
        assert_eq!(ok.text, "Nice");
        assert!(serde_json::from_str::<TryOnResponse>(r#"{"text": "no image"}"#).is_err());
    }
}
