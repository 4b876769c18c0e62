use std::time::Duration;

use async_trait::async_trait;
use lexi_config::tutor::TutorConfig;
use lexi_types::{ChatRole, ChatTurn, FlashcardPick, QuizQuestion, WordDetails};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::prompts;
use crate::{Tutor, TutorError, TutorRequest, TutorResponse};

/// Client for the Gemini `generateContent` REST endpoint
#[derive(Clone)]
pub struct GeminiTutor {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    fast_model: String,
    smart_model: String,
}

/// Flashcard curation reply. The model may send ranks as floats.
#[derive(Debug, Deserialize)]
struct FlashcardBatch {
    #[serde(default)]
    words: Vec<RawPick>,
}

#[derive(Debug, Deserialize)]
struct RawPick {
    word: String,
    #[serde(default)]
    rank: f64,
    #[serde(default)]
    reason: String,
}

impl GeminiTutor {
    pub fn new(config: &TutorConfig) -> Result<Self, TutorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            fast_model: config.fast_model.clone(),
            smart_model: config.smart_model.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_url, model)
    }

    /// One `generateContent` call, returning the first candidate's text
    async fn generate(
        &self,
        model: &str,
        contents: Vec<Value>,
        system_instruction: Option<&str>,
        schema: Option<Value>,
    ) -> Result<String, TutorError> {
        if self.api_key.is_empty() {
            return Err(TutorError::AuthenticationError);
        }

        let mut body = json!({ "contents": contents });
        if let Some(instruction) = system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
        }
        if let Some(schema) = schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(TutorError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(TutorError::AuthenticationError);
        }

        if !status.is_success() {
            return Err(TutorError::ApiError(format!("HTTP {}", status)));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| TutorError::ApiError(format!("Failed to parse response: {}", e)))?;

        candidate_text(&json)
    }

    async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: String,
        schema: Value,
    ) -> Result<T, TutorError> {
        let text = self
            .generate(&self.fast_model, vec![user_content(&prompt)], None, Some(schema))
            .await?;
        parse_json(&text)
    }
}

fn user_content(text: &str) -> Value {
    json!({ "role": "user", "parts": [{ "text": text }] })
}

fn turn_content(turn: &ChatTurn) -> Value {
    let role = match turn.role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    };
    json!({ "role": role, "parts": [{ "text": turn.text }] })
}

/// `candidates[0].content.parts[0].text` of a generateContent reply
pub(crate) fn candidate_text(json: &Value) -> Result<String, TutorError> {
    json["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].get(0))
        .and_then(|p| p["text"].as_str())
        .map(str::to_string)
        .ok_or_else(|| TutorError::InvalidResponse("No text in response".to_string()))
}

/// Decode a JSON reply, tolerating a surrounding Markdown code fence
pub(crate) fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, TutorError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(body.trim()).map_err(|e| TutorError::InvalidResponse(e.to_string()))
}

/// Picks from a flashcard curation reply; blank words are dropped
pub(crate) fn parse_picks(text: &str) -> Result<Vec<FlashcardPick>, TutorError> {
    let batch: FlashcardBatch = parse_json(text)?;

    Ok(batch
        .words
        .into_iter()
        .filter(|p| !p.word.trim().is_empty())
        .map(|p| FlashcardPick {
            word: p.word.trim().to_string(),
            rank: if p.rank.is_finite() && p.rank > 0.0 {
                p.rank as usize
            } else {
                0
            },
            reason: p.reason,
        })
        .collect())
}

#[async_trait]
impl Tutor for GeminiTutor {
    async fn ask(&self, request: TutorRequest) -> Result<TutorResponse, TutorError> {
        tracing::debug!("Tutor request: {}", request.action());

        match request {
            TutorRequest::Detail { word, ground_truth } => {
                let prompt = prompts::detail_prompt(&word, ground_truth.as_deref());
                let details: WordDetails =
                    self.generate_json(prompt, prompts::detail_schema()).await?;
                Ok(TutorResponse::Detail(details))
            }
            TutorRequest::Quiz { word, context } => {
                let prompt = prompts::quiz_prompt(&word, context.as_deref());
                let quiz: QuizQuestion = self.generate_json(prompt, prompts::quiz_schema()).await?;
                Ok(TutorResponse::Quiz(quiz))
            }
            TutorRequest::Chat {
                history,
                message,
                grounding,
            } => {
                let mut contents: Vec<Value> = history.iter().map(turn_content).collect();
                contents.push(user_content(&prompts::augment_message(
                    grounding.as_deref(),
                    &message,
                )));

                let reply = self
                    .generate(
                        &self.smart_model,
                        contents,
                        Some(prompts::CHAT_SYSTEM_INSTRUCTION),
                        None,
                    )
                    .await?;
                Ok(TutorResponse::Chat(reply))
            }
            TutorRequest::FlashcardBatch { candidates, count } => {
                let prompt = prompts::flashcard_prompt(&candidates, count);
                let text = self
                    .generate(
                        &self.fast_model,
                        vec![user_content(&prompt)],
                        None,
                        Some(prompts::flashcard_schema()),
                    )
                    .await?;
                let picks = parse_picks(&text)?;
                Ok(TutorResponse::FlashcardBatch(picks))
            }
        }
    }
}
