#[macro_use]
extern crate rocket;

mod api;
mod config;
mod error;
mod models;
mod services;

use error::{ApiError, GEMINI_NOT_CONFIGURED, YOUTUBE_NOT_CONFIGURED};
use rocket::http::ContentType;
use rocket::{Build, Rocket};
use services::gemini_service::GeminiClient;
use services::youtube_service::YouTubeClient;

/// Shared, read-only after startup. A `None` client means the feature was
/// disabled at startup because its key was missing or unusable.
pub struct AppState {
    pub youtube: Option<YouTubeClient>,
    pub gemini: Option<GeminiClient>,
}

impl AppState {
    pub fn youtube(&self) -> Result<&YouTubeClient, ApiError> {
        self.youtube
            .as_ref()
            .ok_or(ApiError::NotConfigured(YOUTUBE_NOT_CONFIGURED))
    }

    pub fn gemini(&self) -> Result<&GeminiClient, ApiError> {
        self.gemini
            .as_ref()
            .ok_or(ApiError::NotConfigured(GEMINI_NOT_CONFIGURED))
    }
}

#[get("/")]
fn index() -> (ContentType, &'static str) {
    (ContentType::HTML, include_str!("../static/index.html"))
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let cors = config::create_cors().expect("Failed to create CORS options");
    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", 8080));

    rocket::custom(figment)
        .manage(state)
        .attach(cors)
        .mount("/", routes![index])
        .mount(
            "/api",
            routes![
                api::keyword_research,
                api::trending_videos,
                api::title_generator,
                api::idea_generator,
                api::hashtag_generator,
                api::ai_description_tags,
                api::channel_analytics,
                api::channel_audit,
                api::video_details,
            ],
        )
}

#[launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();
    build_rocket(config::create_app_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;
    use rocket::local::blocking::Client;

    #[test]
    fn index_serves_html() {
        let client = Client::tracked(build_rocket(AppState {
            youtube: None,
            gemini: None,
        }))
        .unwrap();
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));
    }
}
