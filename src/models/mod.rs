// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for try-on sessions.

pub mod catalogue;
pub mod image;
pub mod result;
pub mod selection;
