// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background reading of picked image files.

use super::form::ImageRole;
use crate::models::image::UploadedImage;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Slot a picked file is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Form(ImageRole),
    Catalogue,
}

/// A finished read.
pub struct LoadedUpload {
    pub target: UploadTarget,
    pub path: PathBuf,
    pub result: Result<UploadedImage>,
}

/// Reads picked files off the UI thread.
pub struct UploadLoader {
    sender: Sender<LoadedUpload>,
    receiver: Receiver<LoadedUpload>,
    pending: usize,
}

impl Default for UploadLoader {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            pending: 0,
        }
    }
}

impl UploadLoader {
    /// Start reading `path` for `target`.
    pub fn load(&mut self, target: UploadTarget, path: PathBuf) {
        let sender = self.sender.clone();
        self.pending += 1;

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = UploadedImage::from_path(&path);
            let _ = sender.send(LoadedUpload { target, path, result });
        });
    }

    /// True while any read is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Drain finished reads in completion order.
    pub fn poll(&mut self) -> Vec<LoadedUpload> {
        let loaded: Vec<LoadedUpload> = self.receiver.try_iter().collect();
        self.pending = self.pending.saturating_sub(loaded.len());
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for(loader: &mut UploadLoader, count: usize) -> Vec<LoadedUpload> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut loaded = Vec::new();
        while loaded.len() < count && Instant::now() < deadline {
            loaded.extend(loader.poll());
            std::thread::yield_now();
        }
        loaded
    }

    #[test]
    fn test_reads_file_for_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selfie.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let mut loader = UploadLoader::default();
        loader.load(UploadTarget::Form(ImageRole::Person), path.clone());
        assert!(loader.is_loading());

        let loaded = wait_for(&mut loader, 1);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].target, UploadTarget::Form(ImageRole::Person));
        assert_eq!(loaded[0].path, path);
        let image = loaded[0].result.as_ref().unwrap();
        assert_eq!(image.file_name, "selfie.jpg");
        assert_eq!(image.content_type, "image/jpeg");
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();

        let mut loader = UploadLoader::default();
        loader.load(UploadTarget::Catalogue, dir.path().join("gone.png"));

        let loaded = wait_for(&mut loader, 1);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].target, UploadTarget::Catalogue);
        assert!(loaded[0].result.is_err());
        assert!(!loader.is_loading());
    }
}
