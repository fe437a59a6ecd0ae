// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalogue screen: one person photo plus a fixed list of garments.
//!
//! Picking a garment fetches its asset and sends the same request as the
//! main form, with the item's type and style in place of user choices.
//! Only the latest result is kept here; this screen has no history.

use super::{FlowState, Notification};
use crate::error::{TryOnError, ValidationError};
use crate::io::assets::AssetSource;
use crate::models::catalogue::CatalogueItem;
use crate::models::image::UploadedImage;
use crate::models::result::TryOnResult;
use crate::models::selection::TryOnSelection;
use crate::service::client::{Completion, Ticket, TryOnClient};
use crate::service::TryOnRequest;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

const SUCCESS_MESSAGE: &str = "Try-on generated!";
const GENERIC_FAILURE: &str = "Failed to generate try-on.";

pub struct CatalogueFlow {
    items: Vec<CatalogueItem>,
    assets: Arc<dyn AssetSource>,
    person_image: Option<UploadedImage>,
    current: Option<(Ticket, TryOnResult)>,
    state: FlowState,
    next_ticket: Ticket,
    scroll_to_result: bool,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
}

impl CatalogueFlow {
    pub fn new(items: Vec<CatalogueItem>, assets: Arc<dyn AssetSource>) -> Self {
        let (sender, receiver) = channel();
        Self {
            items,
            assets,
            person_image: None,
            current: None,
            state: FlowState::Idle,
            next_ticket: 1,
            scroll_to_result: false,
            sender,
            receiver,
        }
    }

    pub fn items(&self) -> &[CatalogueItem] {
        &self.items
    }

    pub fn assets(&self) -> Arc<dyn AssetSource> {
        self.assets.clone()
    }

    pub fn set_person_image(&mut self, image: Option<UploadedImage>) {
        self.person_image = image;
    }

    pub fn person_image(&self) -> Option<&UploadedImage> {
        self.person_image.as_ref()
    }

    pub fn current(&self) -> Option<&TryOnResult> {
        self.current.as_ref().map(|(_, result)| result)
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// True when a click on a card would be accepted: this screen is idle
    /// and no other flow holds the client.
    pub fn can_select(&self, client: &TryOnClient) -> bool {
        !self.state.is_busy() && !client.is_busy()
    }

    /// Try on the item at `index`.
    ///
    /// Requires a person photo; without one nothing is fetched or sent.
    pub fn select(&mut self, index: usize, client: &TryOnClient) -> Result<(), TryOnError> {
        if self.state.is_busy() {
            return Err(TryOnError::Busy);
        }
        let Some(person_image) = self.person_image.clone() else {
            log::info!("Catalogue selection rejected: no person photo");
            return Err(ValidationError::MissingPersonPhoto.into());
        };
        let Some(item) = self.items.get(index).cloned() else {
            return Err(TryOnError::Asset(format!("no catalogue item at index {}", index)));
        };

        let ticket = self.next_ticket;
        let assets = self.assets.clone();
        log::info!("Catalogue try-on #{}: {} ({})", ticket, item.name, item.image);

        client.submit_with(ticket, self.sender.clone(), move || {
            let bytes = assets
                .fetch(&item.image)
                .map_err(|e| TryOnError::Asset(format!("{}: {:#}", item.image, e)))?;
            let cloth_image = UploadedImage::from_bytes(item.upload_file_name(), bytes);
            let selection = TryOnSelection::for_garment(item.garment_type, item.style);
            Ok(TryOnRequest::build(Some(person_image), Some(cloth_image), selection)?)
        })?;

        self.next_ticket += 1;
        self.state = FlowState::Submitting { ticket };
        Ok(())
    }

    /// Notification for a failed `select`.
    pub fn select_failure(error: &TryOnError) -> Notification {
        if error.is_validation() {
            log::warn!("Select rejected: {}", error);
        } else {
            log::error!("Select failed: {}", error);
        }
        Notification::Error(error.user_message(GENERIC_FAILURE))
    }

    /// Apply any finished requests. Returns the notifications to show.
    pub fn poll(&mut self) -> Vec<Notification> {
        let mut notifications = Vec::new();
        while let Ok(completion) = self.receiver.try_recv() {
            notifications.push(self.apply(completion));
        }
        notifications
    }

    fn apply(&mut self, completion: Completion) -> Notification {
        if self.state == (FlowState::Submitting { ticket: completion.ticket }) {
            self.state = FlowState::Idle;
        }

        match completion.result {
            Ok(response) => {
                let is_stale = matches!(self.current, Some((shown, _)) if shown > completion.ticket);
                if is_stale {
                    log::warn!("Dropping stale catalogue result #{}", completion.ticket);
                } else {
                    self.current = Some((completion.ticket, TryOnResult::from_response(response)));
                    self.scroll_to_result = true;
                }
                Notification::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(e) => Notification::Error(e.user_message(GENERIC_FAILURE)),
        }
    }

    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_result)
    }

    #[cfg(test)]
    pub(crate) fn wait(&mut self, timeout: std::time::Duration) -> Option<Notification> {
        let completion = self.receiver.recv_timeout(timeout).ok()?;
        Some(self.apply(completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::assets::DirectoryAssets;
    use crate::models::catalogue::{Catalogue, BUILTIN_CATALOGUE};
    use crate::service::{MockTryOnService, TryOnResponse};
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn builtin_items() -> Vec<CatalogueItem> {
        serde_yaml::from_str::<Catalogue>(BUILTIN_CATALOGUE).unwrap().items
    }

    fn asset_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("ProductImages")).unwrap();
        for name in ["1.png", "2.png", "3.png"] {
            std::fs::write(dir.path().join("ProductImages").join(name), b"garment").unwrap();
        }
        dir
    }

    #[test]
    fn test_selection_without_photo_is_rejected() {
        let mut mock = MockTryOnService::new();
        mock.expect_try_on().never();
        let client = TryOnClient::new(Arc::new(mock));
        let dir = asset_dir();

        let mut flow = CatalogueFlow::new(builtin_items(), Arc::new(DirectoryAssets::new(dir.path())));
        let err = flow.select(0, &client).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            CatalogueFlow::select_failure(&err),
            Notification::Error("Please upload your photo first.".to_string())
        );
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(!client.is_busy());
    }

    #[test]
    fn test_item_fields_replace_user_choices() {
        let mut mock = MockTryOnService::new();
        mock.expect_try_on()
            .times(1)
            .withf(|request| {
                request.text_fields()
                    == vec![
                        ("garment_type", "Shirt".to_string()),
                        ("style", "formal".to_string()),
                    ]
                    && request.cloth_image.file_name == "Dress 1.jpg"
                    && &*request.cloth_image.bytes == b"garment"
                    && request.person_image.file_name == "selfie.png"
            })
            .returning(|_| {
                Ok(TryOnResponse {
                    image: "data:image/png;base64,AAAA".to_string(),
                    text: "Sharp".to_string(),
                })
            });
        let client = TryOnClient::new(Arc::new(mock));
        let dir = asset_dir();

        let mut flow = CatalogueFlow::new(builtin_items(), Arc::new(DirectoryAssets::new(dir.path())));
        flow.set_person_image(Some(UploadedImage::from_bytes("selfie.png", vec![9; 8])));
        flow.select(0, &client).unwrap();
        assert!(flow.state().is_busy());

        let notification = flow.wait(WAIT).unwrap();
        assert_eq!(notification, Notification::Success("Try-on generated!".to_string()));
        assert_eq!(flow.current().unwrap().text, "Sharp");
        assert!(flow.take_scroll_request());
    }

    #[test]
    fn test_only_latest_result_is_kept() {
        let mut mock = MockTryOnService::new();
        let mut count = 0;
        mock.expect_try_on().times(2).returning(move |_| {
            count += 1;
            Ok(TryOnResponse {
                image: format!("https://x/{}.png", count),
                text: format!("result {}", count),
            })
        });
        let client = TryOnClient::new(Arc::new(mock));
        let dir = asset_dir();

        let mut flow = CatalogueFlow::new(builtin_items(), Arc::new(DirectoryAssets::new(dir.path())));
        flow.set_person_image(Some(UploadedImage::from_bytes("selfie.png", vec![9; 8])));

        flow.select(0, &client).unwrap();
        flow.wait(WAIT).unwrap();
        flow.select(2, &client).unwrap();
        flow.wait(WAIT).unwrap();

        assert_eq!(flow.current().unwrap().text, "result 2");
    }

    #[test]
    fn test_cards_disabled_while_client_is_busy() {
        let (release_tx, release_rx) = channel::<()>();
        let release_rx = std::sync::Mutex::new(release_rx);
        let mut mock = MockTryOnService::new();
        mock.expect_try_on().times(1).returning(move |_| {
            let _ = release_rx.lock().unwrap().recv();
            Ok(TryOnResponse {
                image: "https://x/y.png".to_string(),
                text: "from the form".to_string(),
            })
        });
        let client = TryOnClient::new(Arc::new(mock));
        let dir = asset_dir();

        let mut flow = CatalogueFlow::new(builtin_items(), Arc::new(DirectoryAssets::new(dir.path())));
        flow.set_person_image(Some(UploadedImage::from_bytes("selfie.png", vec![9; 8])));
        assert!(flow.can_select(&client));

        // Another screen's request holds the shared client.
        let (other_tx, other_rx) = channel();
        let request = TryOnRequest::build(
            Some(UploadedImage::from_bytes("p.png", vec![1])),
            Some(UploadedImage::from_bytes("c.png", vec![2])),
            TryOnSelection::default(),
        )
        .unwrap();
        client.submit(1, request, other_tx).unwrap();
        assert!(!flow.can_select(&client));
        assert_eq!(flow.state(), FlowState::Idle);

        release_tx.send(()).unwrap();
        other_rx.recv_timeout(WAIT).unwrap();
        assert!(flow.can_select(&client));
    }

    #[test]
    fn test_missing_asset_fails_without_service_call() {
        let mut mock = MockTryOnService::new();
        mock.expect_try_on().never();
        let client = TryOnClient::new(Arc::new(mock));
        let empty = tempfile::tempdir().unwrap();

        let mut flow = CatalogueFlow::new(builtin_items(), Arc::new(DirectoryAssets::new(empty.path())));
        flow.set_person_image(Some(UploadedImage::from_bytes("selfie.png", vec![9; 8])));
        flow.select(1, &client).unwrap();

        assert_eq!(
            flow.wait(WAIT).unwrap(),
            Notification::Error("Failed to generate try-on.".to_string())
        );
        assert!(flow.current().is_none());
        assert_eq!(flow.state(), FlowState::Idle);
    }
}
