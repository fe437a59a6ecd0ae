// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main try-on form: two uploads, five descriptive fields, and history.

use super::history::ResultHistory;
use super::{FlowState, Notification};
use crate::error::TryOnError;
use crate::models::image::UploadedImage;
use crate::models::result::TryOnResult;
use crate::models::selection::TryOnSelection;
use crate::service::client::{Completion, Ticket, TryOnClient};
use crate::service::TryOnRequest;
use std::sync::mpsc::{channel, Receiver, Sender};

const SUCCESS_MESSAGE: &str = "Try-on completed!";
const GENERIC_FAILURE: &str = "Something went wrong.";

/// Which upload slot an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Person,
    Garment,
}

/// State of the main form screen.
pub struct MainForm {
    person_image: Option<UploadedImage>,
    cloth_image: Option<UploadedImage>,
    /// Edited in place by the view.
    pub selection: TryOnSelection,
    history: ResultHistory,
    state: FlowState,
    next_ticket: Ticket,
    scroll_to_result: bool,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
}

impl Default for MainForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MainForm {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            person_image: None,
            cloth_image: None,
            selection: TryOnSelection::default(),
            history: ResultHistory::new(),
            state: FlowState::Idle,
            next_ticket: 1,
            scroll_to_result: false,
            sender,
            receiver,
        }
    }

    /// Replace (or clear) the image in one slot.
    pub fn set_image(&mut self, role: ImageRole, image: Option<UploadedImage>) {
        let slot = match role {
            ImageRole::Person => &mut self.person_image,
            ImageRole::Garment => &mut self.cloth_image,
        };
        *slot = image;
    }

    pub fn image(&self, role: ImageRole) -> Option<&UploadedImage> {
        match role {
            ImageRole::Person => self.person_image.as_ref(),
            ImageRole::Garment => self.cloth_image.as_ref(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn history(&self) -> &ResultHistory {
        &self.history
    }

    /// True when the submit button should be enabled.
    pub fn can_submit(&self, client: &TryOnClient) -> bool {
        !self.state.is_busy() && !client.is_busy()
    }

    /// Validate and dispatch the current form.
    ///
    /// Missing images fail immediately without a network call. A submit
    /// while busy is rejected.
    pub fn submit(&mut self, client: &TryOnClient) -> Result<(), TryOnError> {
        if self.state.is_busy() {
            return Err(TryOnError::Busy);
        }

        let request = TryOnRequest::build(
            self.person_image.clone(),
            self.cloth_image.clone(),
            self.selection.clone(),
        )
        .map_err(|e| {
            log::info!("Submission rejected: {:?}", e);
            TryOnError::from(e)
        })?;

        let ticket = self.next_ticket;
        client.submit(ticket, request, self.sender.clone())?;
        self.next_ticket += 1;
        self.state = FlowState::Submitting { ticket };
        Ok(())
    }

    /// Notification for a failed `submit`.
    pub fn submit_failure(error: &TryOnError) -> Notification {
        if error.is_validation() {
            log::warn!("Submit rejected: {}", error);
        } else {
            log::error!("Submit failed: {}", error);
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
                let result = TryOnResult::from_response(response);
                log::info!("Recorded result {} ({} in history)", result.id, self.history.len() + 1);
                if self.history.record(completion.ticket, result) {
                    self.scroll_to_result = true;
                }
                Notification::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(e) => Notification::Error(e.user_message(GENERIC_FAILURE)),
        }
    }

    /// True once after a new current result, so the view scrolls to it.
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
    use crate::models::selection::{GarmentType, Gender, ModelType, Style};
    use crate::service::{MockTryOnService, TryOnResponse, TryOnService};
    use std::sync::Arc;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn image(name: &str) -> UploadedImage {
        UploadedImage::from_bytes(name, vec![0u8; 16])
    }

    fn idle_service() -> TryOnClient {
        let mut mock = MockTryOnService::new();
        mock.expect_try_on().never();
        TryOnClient::new(Arc::new(mock))
    }

    #[test]
    fn test_missing_images_never_reach_network() {
        let client = idle_service();

        let mut form = MainForm::new();
        assert!(form.submit(&client).unwrap_err().is_validation());

        form.set_image(ImageRole::Person, Some(image("p.png")));
        assert!(form.submit(&client).unwrap_err().is_validation());

        form.set_image(ImageRole::Person, None);
        form.set_image(ImageRole::Garment, Some(image("c.png")));
        let err = form.submit(&client).unwrap_err();
        assert_eq!(
            MainForm::submit_failure(&err),
            Notification::Error("Please upload both model and garment images.".to_string())
        );
        assert_eq!(form.state(), FlowState::Idle);
        assert!(form.history().is_empty());
    }

    #[test]
    fn test_end_to_end_success() {
        let mut mock = MockTryOnService::new();
        mock.expect_try_on()
            .times(1)
            .withf(|request| {
                request.text_fields()
                    == vec![
                        ("instructions", "side view".to_string()),
                        ("model_type", "full".to_string()),
                        ("gender", "female".to_string()),
                        ("garment_type", "saree".to_string()),
                        ("style", "festive".to_string()),
                    ]
            })
            .returning(|_| {
                Ok(TryOnResponse {
                    image: "https://x/y.png".to_string(),
                    text: "Looks great".to_string(),
                })
            });
        let client = TryOnClient::new(Arc::new(mock));

        let mut form = MainForm::new();
        form.set_image(ImageRole::Person, Some(image("P.png")));
        form.set_image(ImageRole::Garment, Some(image("C.png")));
        form.selection = TryOnSelection {
            model_type: Some(ModelType::Full),
            gender: Some(Gender::Female),
            garment_type: Some(GarmentType::Saree),
            style: Some(Style::Festive),
            instructions: "side view".to_string(),
        };

        form.submit(&client).unwrap();
        assert!(form.state().is_busy());

        let notification = form.wait(WAIT).unwrap();
        assert_eq!(notification, Notification::Success("Try-on completed!".to_string()));
        assert_eq!(form.state(), FlowState::Idle);

        let history = form.history();
        assert_eq!(history.current().unwrap().text, "Looks great");
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries().next().unwrap().result_image, "https://x/y.png");
        assert!(form.take_scroll_request());
        assert!(!form.take_scroll_request());

        // Selection is not cleared after submission.
        assert_eq!(form.selection.instructions, "side view");
    }

    #[test]
    fn test_failure_leaves_history_unchanged() {
        let mut mock = MockTryOnService::new();
        let mut calls = 0;
        mock.expect_try_on().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(TryOnResponse {
                    image: "https://x/first.png".to_string(),
                    text: "first".to_string(),
                })
            } else {
                Err(TryOnError::Status {
                    status: 400,
                    message: Some("cloth_image: unsupported text/plain".to_string()),
                })
            }
        });
        let client = TryOnClient::new(Arc::new(mock));

        let mut form = MainForm::new();
        form.set_image(ImageRole::Person, Some(image("p.png")));
        form.set_image(ImageRole::Garment, Some(image("c.png")));

        form.submit(&client).unwrap();
        form.wait(WAIT).unwrap();
        assert_eq!(form.history().len(), 1);

        form.submit(&client).unwrap();
        let notification = form.wait(WAIT).unwrap();
        assert_eq!(
            notification,
            Notification::Error("cloth_image: unsupported text/plain".to_string())
        );
        assert_eq!(form.history().len(), 1);
        assert_eq!(form.history().current().unwrap().text, "first");
        assert_eq!(form.state(), FlowState::Idle);
    }

    #[test]
    fn test_generic_message_without_service_message() {
        let mut mock = MockTryOnService::new();
        mock.expect_try_on()
            .times(1)
            .returning(|_| Err(TryOnError::Status { status: 503, message: None }));
        let client = TryOnClient::new(Arc::new(mock));

        let mut form = MainForm::new();
        form.set_image(ImageRole::Person, Some(image("p.png")));
        form.set_image(ImageRole::Garment, Some(image("c.png")));
        form.submit(&client).unwrap();

        assert_eq!(
            form.wait(WAIT).unwrap(),
            Notification::Error("Something went wrong.".to_string())
        );
    }

    #[test]
    fn test_submit_while_busy_is_rejected() {
        let (release_tx, release_rx) = channel::<()>();
        let release_rx = std::sync::Mutex::new(release_rx);
        let mut mock = MockTryOnService::new();
        mock.expect_try_on().times(1).returning(move |_| {
            let _ = release_rx.lock().unwrap().recv();
            Ok(TryOnResponse {
                image: "https://x/y.png".to_string(),
                text: "done".to_string(),
            })
        });
        let client = TryOnClient::new(Arc::new(mock));

        let mut form = MainForm::new();
        form.set_image(ImageRole::Person, Some(image("p.png")));
        form.set_image(ImageRole::Garment, Some(image("c.png")));

        assert!(form.can_submit(&client));
        form.submit(&client).unwrap();
        assert!(!form.can_submit(&client));
        assert!(matches!(form.submit(&client), Err(TryOnError::Busy)));

        release_tx.send(()).unwrap();
        form.wait(WAIT).unwrap();
        assert_eq!(form.history().len(), 1);
    }

    struct PanickingService;

    impl TryOnService for PanickingService {
        fn try_on(&self, _request: &TryOnRequest) -> Result<TryOnResponse, TryOnError> {
            panic!("service crashed")
        }
    }

    #[test]
    fn test_worker_panic_returns_form_to_idle() {
        let client = TryOnClient::new(Arc::new(PanickingService));

        let mut form = MainForm::new();
        form.set_image(ImageRole::Person, Some(image("p.png")));
        form.set_image(ImageRole::Garment, Some(image("c.png")));

        form.submit(&client).unwrap();
        assert_eq!(
            form.wait(WAIT).unwrap(),
            Notification::Error("Something went wrong.".to_string())
        );
        assert_eq!(form.state(), FlowState::Idle);
        assert!(form.history().is_empty());

        // The next submission is accepted rather than rejected as busy.
        form.submit(&client).unwrap();
        form.wait(WAIT).unwrap();
    }

    #[test]
    fn test_poll_without_completions_is_empty() {
        let mut form = MainForm::new();
        assert!(form.poll().is_empty());
    }
}
