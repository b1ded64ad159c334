use crate::error::{ApiError, YOUTUBE_UPSTREAM_ERROR};
use crate::models::{ChannelAudit, ChannelSummary, TrendingVideo, VideoDetails, VideoRef};
use log::error;
use serde_json::Value;
use std::time::Duration;

// Documentation: https://developers.google.com/youtube/v3/docs
const API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const AUDIT_LIST_SIZE: u32 = 5;

/// Read-only handle for the YouTube Data API, safe to share across requests.
/// The key is injected at construction; there is no global credential state.
pub struct YouTubeClient {
    api_key: String,
    http: reqwest::Client,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { api_key, http })
    }

    async fn get_json(&self, resource: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = format!("{API_BASE}/{resource}");
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("YouTube API returned {status} for {resource}: {body}");
            return Err(ApiError::Upstream(YOUTUBE_UPSTREAM_ERROR));
        }

        response.json().await.map_err(map_reqwest_error)
    }

    /// Titles of videos matching `keyword`, in upstream relevance order.
    pub async fn search(&self, keyword: &str, max_results: u32) -> Result<Vec<String>, ApiError> {
        let max_results = max_results.to_string();
        let response = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "video"),
                    ("q", keyword),
                    ("maxResults", &max_results),
                ],
            )
            .await?;

        let titles = items(&response)
            .iter()
            .filter_map(|item| item["snippet"]["title"].as_str())
            .map(String::from)
            .collect();
        Ok(titles)
    }

    /// The mostPopular chart for a region, in upstream chart order.
    pub async fn trending(
        &self,
        region_code: &str,
        max_results: u32,
    ) -> Result<Vec<TrendingVideo>, ApiError> {
        let max_results = max_results.to_string();
        let response = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,statistics"),
                    ("chart", "mostPopular"),
                    ("regionCode", region_code),
                    ("maxResults", &max_results),
                ],
            )
            .await?;

        Ok(items(&response).iter().map(parse_trending_video).collect())
    }

    pub async fn channel_summary(&self, channel_id: &str) -> Result<ChannelSummary, ApiError> {
        let response = self
            .get_json(
                "channels",
                &[("part", "snippet,statistics"), ("id", channel_id)],
            )
            .await?;

        match items(&response).first() {
            Some(item) => Ok(parse_channel_summary(item)),
            None => Err(ApiError::NotFound("Channel")),
        }
    }

    pub async fn video_details(&self, video_id: &str) -> Result<VideoDetails, ApiError> {
        let response = self
            .get_json(
                "videos",
                &[
                    ("part", "snippet,statistics,contentDetails,topicDetails"),
                    ("id", video_id),
                ],
            )
            .await?;

        match items(&response).first() {
            Some(item) => Ok(parse_video_details(item)),
            None => Err(ApiError::NotFound("Video")),
        }
    }

    /// Combined channel report: stats, five most recent uploads, five most
    /// viewed uploads. Four sequential round-trips; the last resolves exact
    /// view counts for the popular candidates since search.list carries no
    /// statistics.
    pub async fn channel_audit(&self, channel_id: &str) -> Result<ChannelAudit, ApiError> {
        let channels = self
            .get_json(
                "channels",
                &[("part", "snippet,statistics"), ("id", channel_id)],
            )
            .await?;
        let channel = match items(&channels).first() {
            Some(item) => item.clone(),
            None => return Err(ApiError::NotFound("Channel")),
        };

        let max_results = AUDIT_LIST_SIZE.to_string();
        let recent = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", channel_id),
                    ("type", "video"),
                    ("order", "date"),
                    ("maxResults", &max_results),
                ],
            )
            .await?;
        let recent_videos = parse_search_refs(&recent);

        let popular = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", channel_id),
                    ("type", "video"),
                    ("order", "viewCount"),
                    ("maxResults", &max_results),
                ],
            )
            .await?;
        let candidate_ids: Vec<String> = parse_search_refs(&popular)
            .into_iter()
            .map(|video| video.video_id)
            .collect();

        let popular_videos = if candidate_ids.is_empty() {
            Vec::new()
        } else {
            let details = self
                .get_json(
                    "videos",
                    &[
                        ("part", "snippet,statistics"),
                        ("id", &candidate_ids.join(",")),
                    ],
                )
                .await?;
            rank_by_view_count(&details)
        };

        let view_count = stat_u64(&channel, "viewCount");
        let video_count = stat_u64(&channel, "videoCount");

        Ok(ChannelAudit {
            title: text(&channel["snippet"]["title"]),
            thumbnail: text(&channel["snippet"]["thumbnails"]["default"]["url"]),
            subscriber_count: stat_u64(&channel, "subscriberCount"),
            view_count,
            video_count,
            average_views: average_views(view_count, video_count),
            recent_videos,
            popular_videos,
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        error!("YouTube API request timed out: {e:?}");
        ApiError::Timeout
    } else {
        error!("YouTube API request failed: {e:?}");
        ApiError::Upstream(YOUTUBE_UPSTREAM_ERROR)
    }
}

fn items(response: &Value) -> Vec<Value> {
    response["items"].as_array().cloned().unwrap_or_default()
}

fn text(value: &Value) -> String {
    value.as_str().unwrap_or("").to_string()
}

// Statistics come back as JSON strings; absent ones are carried as "N/A".
fn stat(item: &Value, key: &str) -> String {
    item["statistics"][key].as_str().unwrap_or("N/A").to_string()
}

fn stat_u64(item: &Value, key: &str) -> u64 {
    item["statistics"][key]
        .as_str()
        .unwrap_or("0")
        .parse()
        .unwrap_or(0)
}

fn str_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn average_views(view_count: u64, video_count: u64) -> u64 {
    if video_count == 0 {
        return 0;
    }
    (view_count as f64 / video_count as f64).round() as u64
}

fn parse_trending_video(item: &Value) -> TrendingVideo {
    TrendingVideo {
        title: text(&item["snippet"]["title"]),
        channel_title: text(&item["snippet"]["channelTitle"]),
        thumbnail: text(&item["snippet"]["thumbnails"]["medium"]["url"]),
        view_count: stat(item, "viewCount"),
        like_count: stat(item, "likeCount"),
        video_id: text(&item["id"]),
    }
}

fn parse_channel_summary(item: &Value) -> ChannelSummary {
    ChannelSummary {
        title: text(&item["snippet"]["title"]),
        description: text(&item["snippet"]["description"]),
        thumbnail: text(&item["snippet"]["thumbnails"]["default"]["url"]),
        subscriber_count: stat(item, "subscriberCount"),
        view_count: stat(item, "viewCount"),
        video_count: stat(item, "videoCount"),
    }
}

fn parse_video_details(item: &Value) -> VideoDetails {
    VideoDetails {
        title: text(&item["snippet"]["title"]),
        description: text(&item["snippet"]["description"]),
        tags: str_list(&item["snippet"]["tags"]),
        category_id: text(&item["snippet"]["categoryId"]),
        view_count: stat(item, "viewCount"),
        like_count: stat(item, "likeCount"),
        comment_count: stat(item, "commentCount"),
        duration: text(&item["contentDetails"]["duration"]),
        definition: text(&item["contentDetails"]["definition"]),
        topic_categories: str_list(&item["topicDetails"]["topicCategories"]),
    }
}

// search.list nests the id: items[].id.videoId
fn parse_search_refs(response: &Value) -> Vec<VideoRef> {
    items(response)
        .iter()
        .filter_map(|item| {
            let video_id = item["id"]["videoId"].as_str()?;
            Some(VideoRef {
                title: text(&item["snippet"]["title"]),
                video_id: video_id.to_string(),
            })
        })
        .collect()
}

fn rank_by_view_count(response: &Value) -> Vec<VideoRef> {
    let mut ranked: Vec<(u64, VideoRef)> = items(response)
        .iter()
        .map(|item| {
            (
                stat_u64(item, "viewCount"),
                VideoRef {
                    title: text(&item["snippet"]["title"]),
                    video_id: text(&item["id"]),
                },
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, video)| video).collect()
}
