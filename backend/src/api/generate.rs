use crate::api::require;
use crate::error::ApiError;
use crate::models::{DescriptionAndTags, HashtagResponse};
use crate::AppState;
use rocket::serde::json::Json;
use rocket::{post, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    text: Option<String>,
}

#[post("/title_generator", data = "<request>")]
pub async fn title_generator(
    request: Json<TopicRequest>,
    state: &State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let gemini = state.gemini()?;
    let topic = require(&request.topic, "Topic")?;
    Ok(Json(gemini.titles(topic).await?))
}

#[post("/idea_generator", data = "<request>")]
pub async fn idea_generator(
    request: Json<TopicRequest>,
    state: &State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let gemini = state.gemini()?;
    let topic = require(&request.topic, "Topic")?;
    Ok(Json(gemini.ideas(topic).await?))
}

#[post("/hashtag_generator", data = "<request>")]
pub async fn hashtag_generator(
    request: Json<TextRequest>,
    state: &State<AppState>,
) -> Result<Json<HashtagResponse>, ApiError> {
    let gemini = state.gemini()?;
    let text = require(&request.text, "Text")?;
    let hashtags = gemini.hashtags(text).await?;
    Ok(Json(HashtagResponse { hashtags }))
}

#[post("/ai_description_tags", data = "<request>")]
pub async fn ai_description_tags(
    request: Json<TopicRequest>,
    state: &State<AppState>,
) -> Result<Json<DescriptionAndTags>, ApiError> {
    let gemini = state.gemini()?;
    let topic = require(&request.topic, "Topic")?;
    Ok(Json(gemini.description_and_tags(topic).await?))
}
