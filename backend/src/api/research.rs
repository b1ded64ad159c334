use crate::api::require;
use crate::error::ApiError;
use crate::models::TrendingVideo;
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{get, post, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct KeywordRequest {
    keyword: Option<String>,
}

#[post("/keyword_research", data = "<request>")]
pub async fn keyword_research(
    request: Json<KeywordRequest>,
    state: &State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let youtube = state.youtube()?;
    let keyword = require(&request.keyword, "Keyword")?;
    Ok(Json(youtube.search(keyword, 10).await?))
}

#[get("/trending_videos?<region_code>")]
pub async fn trending_videos(
    region_code: Option<String>,
    state: &State<AppState>,
) -> Result<Json<Vec<TrendingVideo>>, ApiError> {
    let youtube = state.youtube()?;
    let region = region_code.as_deref().unwrap_or("US");
    Ok(Json(youtube.trending(region, 12).await?))
}

#[cfg(test)]
mod tests {
    use crate::services::youtube_service::YouTubeClient;
    use crate::{build_rocket, AppState};
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;

    fn disabled() -> Client {
        Client::tracked(build_rocket(AppState {
            youtube: None,
            gemini: None,
        }))
        .unwrap()
    }

    fn with_youtube() -> Client {
        let youtube = YouTubeClient::new("test-key".to_string()).unwrap();
        Client::tracked(build_rocket(AppState {
            youtube: Some(youtube),
            gemini: None,
        }))
        .unwrap()
    }

    #[test]
    fn keyword_research_without_key_is_500() {
        let client = disabled();
        let response = client
            .post("/api/keyword_research")
            .header(ContentType::JSON)
            .body(r#"{"keyword":"rust"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::InternalServerError);
        let body: serde_json::Value = response.into_json().unwrap();
        assert!(body["error"].as_str().unwrap().contains("YOUTUBE_API_KEY"));
    }

    #[test]
    fn keyword_research_empty_body_is_400() {
        // Validation runs after the credential check and before any call.
        let client = with_youtube();
        let response = client
            .post("/api/keyword_research")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        let body: serde_json::Value = response.into_json().unwrap();
        assert_eq!(body["error"], "Keyword is required");
    }

    #[test]
    fn trending_without_key_is_500() {
        let client = disabled();
        let response = client.get("/api/trending_videos").dispatch();
        assert_eq!(response.status(), Status::InternalServerError);
        let body: serde_json::Value = response.into_json().unwrap();
        assert!(body["error"].as_str().is_some());
    }
}
