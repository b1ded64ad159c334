use crate::error::{ApiError, GEMINI_UPSTREAM_ERROR};
use crate::models::DescriptionAndTags;
use log::error;
use serde::Deserialize;
use std::time::Duration;

const MODEL: &str = "gemini-1.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle for the Gemini generateContent endpoint. One prompt in, one text
/// response out; the key is injected at construction.
pub struct GeminiClient {
    api_key: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { api_key, http })
    }

    async fn generate(&self, prompt: &str, json_output: bool) -> Result<String, ApiError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent?key={}",
            self.api_key
        );

        let mut body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });
        if json_output {
            body["generationConfig"] =
                serde_json::json!({ "responseMimeType": "application/json" });
        }

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini API returned {status}: {body}");
            return Err(ApiError::Upstream(GEMINI_UPSTREAM_ERROR));
        }

        let parsed: GenerateResponse = response.json().await.map_err(map_reqwest_error)?;
        parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| {
                error!("Gemini response contained no candidates");
                ApiError::Upstream(GEMINI_UPSTREAM_ERROR)
            })
    }

    pub async fn titles(&self, topic: &str) -> Result<Vec<String>, ApiError> {
        let prompt = format!("Generate 5 catchy YouTube titles for a video about {topic}.");
        Ok(split_lines(&self.generate(&prompt, false).await?))
    }

    pub async fn ideas(&self, topic: &str) -> Result<Vec<String>, ApiError> {
        let prompt = format!("Generate 5 creative YouTube video ideas about {topic}.");
        Ok(split_lines(&self.generate(&prompt, false).await?))
    }

    pub async fn hashtags(&self, text: &str) -> Result<String, ApiError> {
        let prompt = format!(
            "Generate a list of 10-15 relevant and trending YouTube hashtags for a video \
             with the following title/description:\n\n{text}\n\nReturn the hashtags as a \
             single line of space-separated text, each starting with a '#' symbol."
        );
        Ok(self.generate(&prompt, false).await?.trim().to_string())
    }

    pub async fn description_and_tags(&self, topic: &str) -> Result<DescriptionAndTags, ApiError> {
        let prompt = format!(
            "Write an engaging, SEO-friendly YouTube video description and a list of tags \
             for a video about {topic}. Respond with a JSON object with exactly two keys: \
             \"description\" (a string) and \"tags\" (an array of strings)."
        );
        let text = self.generate(&prompt, true).await?;
        parse_description_and_tags(&text).ok_or_else(|| {
            error!("Failed to parse Gemini JSON output: {text}");
            ApiError::Upstream(GEMINI_UPSTREAM_ERROR)
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        error!("Gemini API request timed out: {e:?}");
        ApiError::Timeout
    } else {
        error!("Gemini API request failed: {e:?}");
        ApiError::Upstream(GEMINI_UPSTREAM_ERROR)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.trim().split('\n').map(String::from).collect()
}

fn parse_description_and_tags(text: &str) -> Option<DescriptionAndTags> {
    let object = extract_json_object(text)?;
    serde_json::from_str(object).ok()
}

/// Returns the first balanced JSON object in `text`. Models wrap JSON in
/// prose or code fences even when asked not to, so this scans from the first
/// `{` tracking brace depth and string state rather than trusting the last
/// `}` in the text.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
