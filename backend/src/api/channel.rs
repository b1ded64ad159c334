use crate::api::require;
use crate::error::ApiError;
use crate::models::{ChannelAudit, ChannelSummary};
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{post, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChannelRequest {
    channel_id: Option<String>,
}

#[post("/channel_analytics", data = "<request>")]
pub async fn channel_analytics(
    request: Json<ChannelRequest>,
    state: &State<AppState>,
) -> Result<Json<ChannelSummary>, ApiError> {
    let youtube = state.youtube()?;
    let channel_id = require(&request.channel_id, "Channel ID")?;
    Ok(Json(youtube.channel_summary(channel_id).await?))
}

#[post("/channel_audit", data = "<request>")]
pub async fn channel_audit(
    request: Json<ChannelRequest>,
    state: &State<AppState>,
) -> Result<Json<ChannelAudit>, ApiError> {
    let youtube = state.youtube()?;
    let channel_id = require(&request.channel_id, "Channel ID")?;
    Ok(Json(youtube.channel_audit(channel_id).await?))
}

#[cfg(test)]
mod tests {
    use crate::services::youtube_service::YouTubeClient;
    use crate::{build_rocket, AppState};
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;

    fn with_youtube() -> Client {
        let youtube = YouTubeClient::new("test-key".to_string()).unwrap();
        Client::tracked(build_rocket(AppState {
            youtube: Some(youtube),
            gemini: None,
        }))
        .unwrap()
    }

    #[test]
    fn channel_routes_without_key_are_500() {
        let client = Client::tracked(build_rocket(AppState {
            youtube: None,
            gemini: None,
        }))
        .unwrap();
        for path in ["/api/channel_analytics", "/api/channel_audit"] {
            let response = client
                .post(path)
                .header(ContentType::JSON)
                .body(r#"{"channel_id":"UC_test"}"#)
                .dispatch();
            assert_eq!(response.status(), Status::InternalServerError, "{path}");
            let body: serde_json::Value = response.into_json().unwrap();
            assert!(
                body["error"].as_str().unwrap().contains("YOUTUBE_API_KEY"),
                "{path}"
            );
        }
    }

    #[test]
    fn channel_analytics_empty_body_is_400() {
        let client = with_youtube();
        let response = client
            .post("/api/channel_analytics")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().unwrap();
        assert_eq!(body["error"], "Channel ID is required");
    }

    #[test]
    fn channel_audit_empty_body_is_400() {
        let client = with_youtube();
        let response = client
            .post("/api/channel_audit")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().unwrap();
        assert_eq!(body["error"], "Channel ID is required");
    }
}
