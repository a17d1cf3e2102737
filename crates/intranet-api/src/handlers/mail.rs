//! Outbound email handlers — direct contact and announcements.
//!
//! Both endpoints accept a multipart form from the dashboard, validate
//! it, and forward a rebuilt multipart form to the gateway's mail
//! service. Attachments are size-checked here so an oversized upload
//! never leaves the intranet.

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use validator::ValidateEmail;

use intranet_core::error::AppError;
use intranet_core::result::AppResult;

use crate::dto::response::SentResponse;
use crate::extractors::AuthToken;
use crate::state::AppState;

/// Maximum number of attachments per contact email.
const MAX_ATTACHMENTS: usize = 10;

/// Maximum size per attachment or banner image.
const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Content types accepted for announcement banner images.
const ALLOWED_BANNER_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// A file lifted out of the incoming multipart form.
#[derive(Debug, Clone)]
struct UploadedFile {
    name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// Text fields and files collected from a multipart request.
#[derive(Debug, Default)]
struct MailForm {
    fields: Vec<(String, String)>,
    files: Vec<(String, UploadedFile)>,
}

impl MailForm {
    /// Drains an incoming multipart stream into memory.
    async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::validation(format!("Invalid multipart payload: {e}")))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if field.file_name().is_some() {
                let file = UploadedFile {
                    name: field.file_name().unwrap_or("attachment").to_string(),
                    content_type: field.content_type().map(str::to_string),
                    bytes: field.bytes().await.map_err(|e| {
                        AppError::validation(format!("Failed to read uploaded file: {e}"))
                    })?,
                };
                form.files.push((name, file));
            } else {
                let value = field.text().await.map_err(|e| {
                    AppError::validation(format!("Invalid multipart field: {e}"))
                })?;
                form.fields.push((name, value));
            }
        }

        Ok(form)
    }

    /// First non-empty value of a text field.
    fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, value)| field == name && !value.is_empty())
            .map(|(_, value)| value.as_str())
    }

    /// A required text field, or a validation error naming the rule.
    fn required(&self, name: &str, rule: &str) -> AppResult<String> {
        self.text(name)
            .map(str::to_string)
            .ok_or_else(|| AppError::validation(rule.to_string()))
    }

    /// All non-empty files uploaded under the given field name.
    fn files_named(&self, name: &str) -> Vec<&UploadedFile> {
        self.files
            .iter()
            .filter(|(field, file)| field == name && !file.bytes.is_empty())
            .map(|(_, file)| file)
            .collect()
    }
}

/// POST /api/dash/clients/contact
///
/// Sends a custom email to a single client, with up to ten attachments.
pub async fn send_contact_email(
    State(state): State<AppState>,
    token: AuthToken,
    multipart: Multipart,
) -> Result<Json<SentResponse>, AppError> {
    let form = MailForm::read(multipart).await?;

    let email = form.required("email", "email, subject and message are required")?;
    let subject = form.required("subject", "email, subject and message are required")?;
    let message = form.required("message", "email, subject and message are required")?;

    if !email.validate_email() {
        return Err(AppError::validation("Invalid email format"));
    }

    let files = form.files_named("files");
    if files.len() > MAX_ATTACHMENTS {
        return Err(AppError::validation("A maximum of 10 attachments is allowed"));
    }
    for file in &files {
        if file.bytes.len() > MAX_FILE_BYTES {
            return Err(AppError::validation(format!(
                "File {} exceeds the 5MB limit",
                file.name
            )));
        }
    }

    let mut outbound = Form::new()
        .text("email", email)
        .text("subject", subject)
        .text("message", message);
    for optional in ["recipientName", "priority"] {
        if let Some(value) = form.text(optional) {
            outbound = outbound.text(optional, value.to_string());
        }
    }
    for file in files {
        outbound = outbound.part("files", file_part(file)?);
    }

    let data = state
        .gateway
        .post_multipart("mail/send-custom", outbound, &token)
        .await?;

    Ok(Json(SentResponse {
        success: true,
        message: "Email sent successfully".to_string(),
        data: data.get("data").cloned().unwrap_or(Value::Null),
    }))
}

/// POST /api/dash/clients/announce
///
/// Sends an announcement email, optionally with extra message blocks
/// and a banner image.
pub async fn send_announcement_email(
    State(state): State<AppState>,
    token: AuthToken,
    multipart: Multipart,
) -> Result<Json<SentResponse>, AppError> {
    let form = MailForm::read(multipart).await?;

    let rule = "email, subject, title and message are required";
    let email = form.required("email", rule)?;
    let subject = form.required("subject", rule)?;
    let title = form.required("title", rule)?;
    let message = form.required("message", rule)?;

    if !email.validate_email() {
        return Err(AppError::validation("Invalid email format"));
    }

    let additional_messages = form
        .text("additionalMessages")
        .map(validate_additional_messages)
        .transpose()?;

    let banner = form.files_named("bannerImage").into_iter().next();
    if let Some(banner) = banner {
        if banner.bytes.len() > MAX_FILE_BYTES {
            return Err(AppError::validation("Banner image exceeds the 5MB limit"));
        }
        let banner_type = banner.content_type.as_deref().unwrap_or("");
        if !ALLOWED_BANNER_TYPES.contains(&banner_type) {
            return Err(AppError::validation(
                "Invalid image type; only JPEG, PNG, GIF and WebP are allowed",
            ));
        }
    }

    let mut outbound = Form::new()
        .text("email", email)
        .text("subject", subject)
        .text("title", title)
        .text("message", message);
    for optional in ["recipientName", "priority", "senderName"] {
        if let Some(value) = form.text(optional) {
            outbound = outbound.text(optional, value.to_string());
        }
    }
    if let Some(messages) = additional_messages {
        outbound = outbound.text("additionalMessages", messages.to_string());
    }
    if let Some(banner) = banner {
        outbound = outbound.part("bannerImage", file_part(banner)?);
    }

    let data = state
        .gateway
        .post_multipart("mail/send-announcement", outbound, &token)
        .await?;

    Ok(Json(SentResponse {
        success: true,
        message: "Announcement email sent successfully".to_string(),
        data: data.get("data").cloned().unwrap_or(Value::Null),
    }))
}

/// Parses and validates the `additionalMessages` JSON payload: an array
/// whose entries each carry a non-empty `title` and `content`.
fn validate_additional_messages(raw: &str) -> AppResult<Value> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|_| AppError::validation("Invalid JSON in additionalMessages"))?;

    let Some(messages) = parsed.as_array() else {
        return Err(AppError::validation("additionalMessages must be an array"));
    };

    for entry in messages {
        let has_title = entry
            .get("title")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty());
        let has_content = entry
            .get("content")
            .and_then(Value::as_str)
            .is_some_and(|c| !c.is_empty());
        if !has_title || !has_content {
            return Err(AppError::validation(
                "Each additional message needs a title and content",
            ));
        }
    }

    Ok(parsed)
}

/// Rebuilds an uploaded file as an outbound multipart part.
fn file_part(file: &UploadedFile) -> AppResult<Part> {
    let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
    if let Some(content_type) = &file.content_type {
        part = part.mime_str(content_type).map_err(|e| {
            AppError::validation(format!("Invalid attachment content type: {e}"))
        })?;
    }
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additional_messages_valid() {
        let raw = r#"[{"title":"Aviso","content":"Texto"}]"#;
        assert!(validate_additional_messages(raw).is_ok());
    }

    #[test]
    fn test_additional_messages_must_be_array() {
        let err = validate_additional_messages(r#"{"title":"x"}"#).unwrap_err();
        assert!(err.message.contains("array"));
    }

    #[test]
    fn test_additional_messages_entries_need_both_fields() {
        let raw = r#"[{"title":"Aviso"}]"#;
        assert!(validate_additional_messages(raw).is_err());

        let raw = r#"[{"title":"","content":"Texto"}]"#;
        assert!(validate_additional_messages(raw).is_err());
    }

    #[test]
    fn test_additional_messages_invalid_json() {
        assert!(validate_additional_messages("not json").is_err());
    }
}
