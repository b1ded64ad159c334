use crate::api::require;
use crate::error::ApiError;
use crate::models::VideoDetails;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{post, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    video_id: Option<String>,
}

#[post("/video_details", data = "<request>")]
pub async fn video_details(
    request: Json<VideoRequest>,
    state: &State<AppState>,
) -> Result<Json<VideoDetails>, ApiError> {
    let youtube = state.youtube()?;
    let video_id = require(&request.video_id, "Video ID")?;
    Ok(Json(youtube.video_details(video_id).await?))
}

#[cfg(test)]
mod tests {
    use crate::services::youtube_service::YouTubeClient;
    use crate::{build_rocket, AppState};
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;

    #[test]
    fn video_details_without_key_is_500() {
        let client = Client::tracked(build_rocket(AppState {
            youtube: None,
            gemini: None,
        }))
        .unwrap();
        let response = client
            .post("/api/video_details")
            .header(ContentType::JSON)
            .body(r#"{"video_id":"dQw4w9WgXcQ"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::InternalServerError);
        let body: serde_json::Value = response.into_json().unwrap();
        assert!(body["error"].as_str().unwrap().contains("YOUTUBE_API_KEY"));
    }

    #[test]
    fn video_details_empty_body_is_400() {
        let youtube = YouTubeClient::new("test-key".to_string()).unwrap();
        let client = Client::tracked(build_rocket(AppState {
            youtube: Some(youtube),
            gemini: None,
        }))
        .unwrap();
        let response = client
            .post("/api/video_details")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().unwrap();
        assert_eq!(body["error"], "Video ID is required");
    }
}
