use crate::services::gemini_service::GeminiClient;
use crate::services::youtube_service::YouTubeClient;
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use log::{error, info, warn, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting Rocket backend...");
}

/// A missing or unusable key disables that feature; the process still starts
/// and the affected routes answer with a configuration error.
pub fn create_app_state() -> AppState {
    let youtube = match env::var("YOUTUBE_API_KEY") {
        Ok(key) if !key.is_empty() => match YouTubeClient::new(key) {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Failed to initialize the YouTube client: {e}");
                None
            }
        },
        _ => {
            warn!("YOUTUBE_API_KEY environment variable not set. YouTube features will not work.");
            None
        }
    };

    let gemini = match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.is_empty() => match GeminiClient::new(key) {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Failed to initialize the Gemini client: {e}");
                None
            }
        },
        _ => {
            warn!("GEMINI_API_KEY environment variable not set. AI features will not work.");
            None
        }
    };

    AppState { youtube, gemini }
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
