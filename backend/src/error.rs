use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::{response, Response};
use std::io::Cursor;
use thiserror::Error;

pub const YOUTUBE_NOT_CONFIGURED: &str =
    "YouTube API key is not configured. Please set the YOUTUBE_API_KEY environment variable.";
pub const GEMINI_NOT_CONFIGURED: &str =
    "Gemini API key is not configured. Please set the GEMINI_API_KEY environment variable.";
pub const YOUTUBE_UPSTREAM_ERROR: &str =
    "An error occurred with the YouTube API. Please check your key and quota.";
pub const GEMINI_UPSTREAM_ERROR: &str =
    "An error occurred with the Gemini API. Please check your key.";

/// Every failure a route can surface. Upstream detail is logged at the call
/// site; only the fixed message in the variant reaches the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotConfigured(&'static str),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("The upstream API did not respond in time.")]
    Timeout,
    #[error("{0}")]
    Upstream(&'static str),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotConfigured(_) => Status::InternalServerError,
            ApiError::MissingField(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Timeout => Status::GatewayTimeout,
            ApiError::Upstream(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::json!({ "error": self.to_string() }).to_string();
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::NotConfigured(YOUTUBE_NOT_CONFIGURED).status(),
            Status::InternalServerError
        );
        assert_eq!(ApiError::MissingField("Keyword").status(), Status::BadRequest);
        assert_eq!(ApiError::NotFound("Channel").status(), Status::NotFound);
        assert_eq!(ApiError::Timeout.status(), Status::GatewayTimeout);
        assert_eq!(
            ApiError::Upstream(GEMINI_UPSTREAM_ERROR).status(),
            Status::InternalServerError
        );
    }

    #[test]
    fn missing_field_names_the_field() {
        assert_eq!(
            ApiError::MissingField("Keyword").to_string(),
            "Keyword is required"
        );
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ApiError::NotFound("Video").to_string(), "Video not found");
    }
}
