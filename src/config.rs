// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/try-on";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tryon-studio",
    version,
    about = "Desktop client for a virtual try-on image service"
)]
pub struct Config {
    /// Try-on service endpoint receiving the multipart POST
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Catalogue asset root: a directory or an http(s) base URL
    #[arg(long, default_value = "assets")]
    pub assets: String,

    /// Replace the built-in catalogue with a YAML or JSON file
    #[arg(long)]
    pub catalogue: Option<PathBuf>,

    /// Give up on a try-on request after this many seconds (default: wait)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
