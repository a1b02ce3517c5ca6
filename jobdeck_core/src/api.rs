/// Blocking client for the external user-service API.
///
/// One profile update is one multipart POST; session credentials ride on the
/// client's cookie jar and are never passed explicitly. There is no retry and
/// no abort path: an issued request runs to completion.
use crate::profile_form::UpdatePayload;
use crate::types::UpdateResponse;
use log::{debug, warn};
use reqwest::blocking::{multipart, Client};

pub const UPDATE_PROFILE_PATH: &str = "/profile/update";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// User-facing message for a failed submit attempt.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Profile update failed".to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
        }
    }
}

#[derive(Clone)]
pub struct UserApiClient {
    base_url: String,
    client: Client,
}

impl UserApiClient {
    /// `base_url` is the user-service root, e.g. `http://host/api/v1/user`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { base_url, client })
    }

    /// Send one profile update and decode the response envelope.
    ///
    /// A 2xx body is returned as-is, including `success=false`; the caller
    /// decides how to surface it. A non-2xx status becomes
    /// [`ApiError::Rejected`], carrying the server's `message` when the body
    /// decodes, or a generic failure message otherwise.
    pub fn update_profile(&self, payload: &UpdatePayload) -> Result<UpdateResponse, ApiError> {
        let mut form = multipart::Form::new()
            .text("fullname", payload.fullname.clone())
            .text("email", payload.email.clone())
            .text("phoneNumber", payload.phone_number.clone())
            .text("bio", payload.bio.clone())
            .text("skills", payload.skills.clone())
            .text("experience", payload.experience.clone())
            .text("education", payload.education.clone());
        if let Some(attachment) = &payload.attachment {
            let part = multipart::Part::bytes(attachment.bytes.clone())
                .file_name(attachment.filename.clone());
            form = form.part("file", part);
        }

        let url = format!("{}{}", self.base_url, UPDATE_PROFILE_PATH);
        debug!("POST {}", url);

        let response = self.client.post(&url).multipart(form).send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<UpdateResponse>()?);
        }

        let body = response.text()?;
        let message = serde_json::from_str::<UpdateResponse>(&body)
            .map(|envelope| envelope.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "Profile update failed".to_string());
        warn!("profile update rejected ({}): {}", status, message);
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
