//! Compose form. Sending requires every field; a draft only needs one.

use crate::{
    client::{ApiClient, AppError},
    features::{
        mail::{client, types::ComposeRequest},
        notice::Notice,
    },
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeForm {
    pub to_email: String,
    pub subject: String,
    pub body: String,
}

impl ComposeForm {
    #[must_use]
    pub fn new(
        to_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to_email: to_email.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    fn fields(&self) -> [&str; 3] {
        [
            self.to_email.as_str(),
            self.subject.as_str(),
            self.body.as_str(),
        ]
    }

    /// Whether the send action is enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        self.fields().iter().all(|field| !field.trim().is_empty())
    }

    /// Whether the save-draft action is enabled.
    #[must_use]
    pub fn can_save_draft(&self) -> bool {
        self.fields().iter().any(|field| !field.trim().is_empty())
    }

    /// Fields are posted as entered; trimming only decides blankness.
    fn request(&self, is_draft: bool) -> ComposeRequest {
        ComposeRequest {
            to_email: self.to_email.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            is_draft,
        }
    }

    /// Builds the send payload.
    ///
    /// # Errors
    /// Returns `AppError::Validation` when any field is blank.
    pub fn send_request(&self) -> Result<ComposeRequest, AppError> {
        if self.can_send() {
            Ok(self.request(false))
        } else {
            Err(AppError::Validation("Please fill in all fields".to_string()))
        }
    }

    /// Builds the draft payload.
    ///
    /// # Errors
    /// Returns `AppError::Validation` when every field is blank.
    pub fn draft_request(&self) -> Result<ComposeRequest, AppError> {
        if self.can_save_draft() {
            Ok(self.request(true))
        } else {
            Err(AppError::Validation(
                "Please fill in at least one field".to_string(),
            ))
        }
    }

    /// Sends the mail. The form is cleared on success and kept on failure.
    pub async fn send(&mut self, api: &ApiClient) -> Notice {
        let request = match self.send_request() {
            Ok(request) => request,
            Err(err) => return Notice::from_error(&err, "Failed to send email"),
        };
        match client::compose(api, &request).await {
            Ok(_) => {
                *self = Self::default();
                Notice::success("Email sent successfully!")
            }
            Err(err) => Notice::from_error(&err, "Failed to send email"),
        }
    }

    /// Saves the form as a draft. The form is cleared on success.
    pub async fn save_draft(&mut self, api: &ApiClient) -> Notice {
        let request = match self.draft_request() {
            Ok(request) => request,
            Err(err) => return Notice::from_error(&err, "Failed to save draft"),
        };
        match client::compose(api, &request).await {
            Ok(_) => {
                *self = Self::default();
                Notice::success("Draft saved successfully!")
            }
            Err(err) => Notice::from_error(&err, "Failed to save draft"),
        }
    }
}
