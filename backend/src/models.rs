use rocket::serde::{Deserialize, Serialize};

/// One entry of the mostPopular chart, in upstream order. Statistic fields
/// are carried as the strings the API returns, "N/A" when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingVideo {
    pub title: String,
    pub channel_title: String,
    pub thumbnail: String,
    pub view_count: String,
    pub like_count: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub subscriber_count: String,
    pub view_count: String,
    pub video_count: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
    pub view_count: String,
    pub like_count: String,
    pub comment_count: String,
    pub duration: String,
    pub definition: String,
    pub topic_categories: Vec<String>,
}

/// A {title, videoId} pair inside an audit's recent/popular lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub title: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAudit {
    pub title: String,
    pub thumbnail: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    pub average_views: u64,
    pub recent_videos: Vec<VideoRef>,
    pub popular_videos: Vec<VideoRef>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HashtagResponse {
    pub hashtags: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionAndTags {
    pub description: String,
    pub tags: Vec<String>,
}
