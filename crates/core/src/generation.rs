//! Prompt construction and result shaping for AI content generation.
//!
//! The chat-completion transport lives in `lego-llm`; this module only
//! decides what is asked and how the answer is packaged.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::brick::{BrickMetadata, BrickType, NewBrick};
use crate::error::CoreError;
use crate::types::{new_id, Timestamp};

/// Nucleus sampling used for every request.
pub const TOP_P: f32 = 0.9;

/// Token budget for rewrites.
pub const REWRITE_MAX_TOKENS: u32 = 2000;

/// Temperature for rewrites and non-creative generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const CREATIVE_TEMPERATURE: f32 = 0.8;

/// Synthetic quality score range, inclusive.
pub const SCORE_MIN: u8 = 70;
pub const SCORE_MAX: u8 = 99;

/// Tag appended to every brick saved from generated content.
pub const AI_GENERATED_TAG: &str = "ai-generated";

pub const REWRITE_SYSTEM_PROMPT: &str = "You are a professional content rewriting assistant. \
Rewrite the content you are given so that it:
1. Keeps the original meaning
2. Changes the wording and sentence structure
3. Improves quality and readability
4. Keeps the original tone
5. Is tighter and more engaging";

// ---------------------------------------------------------------------------
// Request enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Article,
    Social,
    Email,
    Title,
    Summary,
    Ad,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Social => "social",
            Self::Email => "email",
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Ad => "ad",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Social => "social media post",
            Self::Email => "email",
            Self::Title => "headline",
            Self::Summary => "summary",
            Self::Ad => "advertising copy",
        }
    }

    /// Brick type a generated piece of this kind is saved as.
    pub fn brick_type(self) -> BrickType {
        match self {
            Self::Ad => BrickType::Cta,
            _ => BrickType::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Formal,
    Creative,
}

impl Tone {
    fn label(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Creative => "creative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    fn label(self) -> &'static str {
        match self {
            Self::Short => "short (100-300 words)",
            Self::Medium => "medium (300-800 words)",
            Self::Long => "detailed (800-1500 words)",
        }
    }

    pub fn max_tokens(self) -> u32 {
        match self {
            Self::Short => 500,
            Self::Medium => 1200,
            Self::Long => 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl Language {
    fn label(self) -> &'static str {
        match self {
            Self::Zh => "Chinese",
            Self::En => "English",
        }
    }
}

// ---------------------------------------------------------------------------
// Requests and results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub content_type: ContentType,
    pub topic: String,
    pub tone: Tone,
    pub length: Length,
    pub language: Language,
}

impl GenerationRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.topic.trim().is_empty() {
            return Err(CoreError::Validation("Topic must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn system_prompt(&self) -> String {
        let kind = self.content_type.label();
        format!(
            "You are a professional content creation assistant. \
Produce a high-quality {kind} that meets these requirements:

Content type: {kind}
Language: {language}
Tone: {tone}
Length: {length}

Make sure the content:
1. Matches the requested tone and style
2. Is clearly structured and logical
3. Is engaging and useful
4. Is plain text without markdown markup such as #, ** or *",
            language = self.language.label(),
            tone = self.tone.label(),
            length = self.length.label(),
        )
    }

    pub fn user_prompt(&self) -> String {
        format!("Generate content on the following topic: {}", self.topic)
    }

    pub fn max_tokens(&self) -> u32 {
        self.length.max_tokens()
    }

    pub fn temperature(&self) -> f32 {
        match self.tone {
            Tone::Creative => CREATIVE_TEMPERATURE,
            _ => DEFAULT_TEMPERATURE,
        }
    }
}

/// Body of `POST /ai/rewrite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
}

impl RewriteRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.content.trim().is_empty() {
            return Err(CoreError::Validation(
                "Content to rewrite must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn user_prompt(&self) -> String {
        format!("Rewrite the following content:\n\n{}", self.content)
    }
}

/// A generated or rewritten piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub score: u8,
    pub created_at: Timestamp,
}

impl GeneratedContent {
    /// Package model output with a fresh id and a synthetic score.
    pub fn new(content: impl Into<String>, content_type: ContentType, now: Timestamp) -> Self {
        Self {
            id: new_id(),
            content: content.into(),
            content_type,
            score: synthetic_score(),
            created_at: now,
        }
    }
}

/// Quality score shown alongside generated content. Not derived from the text.
pub fn synthetic_score() -> u8 {
    rand::rng().random_range(SCORE_MIN..=SCORE_MAX)
}

/// Body of `POST /ai/save-as-brick`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAsBrickRequest {
    pub content: String,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SaveAsBrickRequest {
    /// Brick draft for saving generated content into the library.
    pub fn into_new_brick(self) -> NewBrick {
        let kind = self.content_type.as_str();
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("AI generated {kind}"));
        let mut tags = self.tags;
        tags.push(AI_GENERATED_TAG.to_string());
        tags.push(kind.to_string());

        NewBrick::new(self.content_type.brick_type(), title, self.content)
            .with_metadata(BrickMetadata {
                description: Some(format!("Generated {kind} content")),
                ..Default::default()
            })
            .with_tags(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::now;

    fn request(tone: Tone, length: Length) -> GenerationRequest {
        GenerationRequest {
            content_type: ContentType::Social,
            topic: "spring product launch".to_string(),
            tone,
            length,
            language: Language::En,
        }
    }

    #[test]
    fn test_sampling_parameters() {
        assert_eq!(request(Tone::Casual, Length::Short).max_tokens(), 500);
        assert_eq!(request(Tone::Casual, Length::Medium).max_tokens(), 1200);
        assert_eq!(request(Tone::Casual, Length::Long).max_tokens(), 2000);
        assert_eq!(request(Tone::Creative, Length::Short).temperature(), 0.8);
        assert_eq!(request(Tone::Formal, Length::Short).temperature(), 0.7);
    }

    #[test]
    fn test_prompts_mention_request_fields() {
        let r = request(Tone::Friendly, Length::Medium);
        let system = r.system_prompt();
        assert!(system.contains("social media post"));
        assert!(system.contains("English"));
        assert!(system.contains("friendly"));
        assert!(r.user_prompt().ends_with("spring product launch"));
    }

    #[test]
    fn test_blank_topic_rejected() {
        let mut r = request(Tone::Casual, Length::Short);
        r.topic = "  ".into();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_score_in_range() {
        for _ in 0..200 {
            let s = synthetic_score();
            assert!((SCORE_MIN..=SCORE_MAX).contains(&s));
        }
    }

    #[test]
    fn test_generated_content_wire_format() {
        let g = GeneratedContent::new("Hello", ContentType::Email, now());
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["type"], "email");
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_rewrite_defaults_to_article() {
        let r: RewriteRequest = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(r.content_type, ContentType::Article);
    }

    #[test]
    fn test_save_ad_as_cta_brick() {
        let draft = SaveAsBrickRequest {
            content: "Buy two, get one free".into(),
            content_type: ContentType::Ad,
            title: None,
            tags: vec!["promo".into()],
        }
        .into_new_brick();
        assert_eq!(draft.brick_type, BrickType::Cta);
        assert_eq!(draft.title, "AI generated ad");
        assert_eq!(draft.tags, ["promo", "ai-generated", "ad"]);
    }

    #[test]
    fn test_save_other_types_as_text_brick() {
        let draft = SaveAsBrickRequest {
            content: "Body".into(),
            content_type: ContentType::Summary,
            title: Some("Weekly recap".into()),
            tags: Vec::new(),
        }
        .into_new_brick();
        assert_eq!(draft.brick_type, BrickType::Text);
        assert_eq!(draft.title, "Weekly recap");
    }
}
