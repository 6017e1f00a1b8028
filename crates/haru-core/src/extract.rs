//! Goal extraction via an LLM collaborator.
//!
//! The model receives one raw user sentence inside a fixed instruction
//! template and must answer with a JSON object carrying `goal` and
//! `deadline`, where `deadline` stays a natural-language phrase. Any
//! transport, decoding, or shape failure drops that single submission;
//! nothing is retried.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::ExtractedGoal;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Turns one raw user sentence into a structured goal record.
#[async_trait]
pub trait GoalExtractor {
    async fn extract(&self, sentence: &str) -> Result<ExtractedGoal, CoreError>;
}

/// Production extractor backed by the Gemini `generateContent` endpoint.
pub struct GeminiExtractor {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiExtractor {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    // Safety-blocked candidates come back without content.
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl GoalExtractor for GeminiExtractor {
    async fn extract(&self, sentence: &str) -> Result<ExtractedGoal, CoreError> {
        let prompt = build_prompt(sentence);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let url = format!(
            "{API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable error body".to_string());
            return Err(CoreError::Extraction(format!(
                "model endpoint returned {status}: {error_body}"
            )));
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim())
            .ok_or_else(|| CoreError::Extraction("reply carried no candidate text".to_string()))?;

        decode_payload(text)
    }
}

/// Fixed instruction template. The deadline must come back as the phrase the
/// user wrote, not a timestamp; resolution happens locally.
fn build_prompt(sentence: &str) -> String {
    format!(
        "다음 문장에서 '목표'와 '마감시간'을 추출해서 JSON으로 반환해줘.\n\
         마감시간은 문장에 쓰인 자연어 표현 그대로 남겨줘.\n\
         예시 형식:\n\
         {{\n  \"goal\": \"블로그 글 작성\",\n  \"deadline\": \"오늘 오후 7시\"\n}}\n\n\
         입력: {sentence}"
    )
}

/// Slice the reply from the first `{` to the last `}` and decode it.
/// Models wrap the object in prose or code fences often enough that decoding
/// the raw text directly is not workable.
fn decode_payload(text: &str) -> Result<ExtractedGoal, CoreError> {
    let start = text
        .find('{')
        .ok_or_else(|| CoreError::Extraction("no JSON object in reply".to_string()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end >= start)
        .ok_or_else(|| CoreError::Extraction("no JSON object in reply".to_string()))?;

    Ok(serde_json::from_str(&text[start..=end])?)
}
