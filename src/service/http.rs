// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! HTTP implementation of the try-on service.
//!
//! Sends a single `multipart/form-data` POST and interprets the JSON reply.
//! One attempt per call: no retry, no partial results.

use super::{TryOnRequest, TryOnResponse, TryOnService};
use crate::error::TryOnError;
use crate::models::image::UploadedImage;
use reqwest::blocking::multipart::{Form, Part};
use std::time::Duration;

/// Try-on service reached over HTTP.
pub struct HttpTryOnService {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTryOnService {
    /// Create a service posting to `endpoint`. `timeout` of `None` waits
    /// for as long as the service takes.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let endpoint = endpoint.into();
        log::info!("Try-on service endpoint: {}", endpoint);
        Ok(Self { client, endpoint })
    }

    fn build_form(request: &TryOnRequest) -> Result<Form, TryOnError> {
        let mut form = Form::new()
            .part("person_image", image_part(&request.person_image)?)
            .part("cloth_image", image_part(&request.cloth_image)?);
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

impl TryOnService for HttpTryOnService {
    fn try_on(&self, request: &TryOnRequest) -> Result<TryOnResponse, TryOnError> {
        let form = Self::build_form(request)?;
        log::debug!(
            "POST {} (person: {} bytes, cloth: {} bytes, fields: {:?})",
            self.endpoint,
            request.person_image.len(),
            request.cloth_image.len(),
            request.text_fields()
        );

        let response = self.client.post(&self.endpoint).multipart(form).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        interpret_response(status, &body)
    }
}

fn image_part(image: &UploadedImage) -> Result<Part, TryOnError> {
    let part = Part::bytes(image.bytes.to_vec())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)?;
    Ok(part)
}

/// Map a status code and body onto the request outcome.
///
/// Any non-2xx status is a failure. A 2xx body must carry `image` and
/// `text`. A string `message` (or FastAPI-style `detail`) is kept so the
/// user sees what the service said.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<TryOnResponse, TryOnError> {
    let json: Option<serde_json::Value> = serde_json::from_slice(body).ok();
    let message = json.as_ref().and_then(service_message);

    if !(200..300).contains(&status) {
        log::warn!("Try-on service returned {}: {:?}", status, message);
        return Err(TryOnError::Status { status, message });
    }

    let Some(json) = json else {
        return Err(TryOnError::Malformed {
            reason: "body is not JSON".to_string(),
            message,
        });
    };

    serde_json::from_value(json).map_err(|e| TryOnError::Malformed {
        reason: e.to_string(),
        message,
    })
}

fn service_message(json: &serde_json::Value) -> Option<String> {
    ["message", "detail"]
        .iter()
        .find_map(|key| {
            json.get(*key)
                .and_then(|v| v.as_str())
                .filter(|text| !text.trim().is_empty())
        })
        .map(str::to_string)
}
