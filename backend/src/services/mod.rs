pub mod gemini_service;
pub mod youtube_service;
