// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: media decoding, assets, catalogue files, preferences.

pub mod assets;
pub mod media;
pub mod preferences;
pub mod serialization;
