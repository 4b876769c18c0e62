use lexi_types::{ChatTurn, FlashcardPick, QuizQuestion, WordDetails};

pub mod gemini;
pub mod prompts;

#[cfg(test)]
mod tests;

pub use gemini::GeminiTutor;

/// Generative tutor backend
#[async_trait::async_trait]
pub trait Tutor: Send + Sync {
    /// Run one request; the response variant always matches the request
    async fn ask(&self, request: TutorRequest) -> Result<TutorResponse, TutorError>;
}

#[derive(Debug, Clone)]
pub enum TutorRequest {
    /// Dictionary entry for a word, optionally anchored on local ground truth
    Detail {
        word: String,
        ground_truth: Option<String>,
    },
    /// Multiple-choice question whose answer is `word`
    Quiz {
        word: String,
        context: Option<String>,
    },
    Chat {
        history: Vec<ChatTurn>,
        message: String,
        grounding: Option<String>,
    },
    /// Pick `count` words out of `candidates`
    FlashcardBatch {
        candidates: Vec<FlashcardPick>,
        count: usize,
    },
}

impl TutorRequest {
    pub fn action(&self) -> &'static str {
        match self {
            TutorRequest::Detail { .. } => "detail",
            TutorRequest::Quiz { .. } => "quiz",
            TutorRequest::Chat { .. } => "chat",
            TutorRequest::FlashcardBatch { .. } => "flashcard-batch",
        }
    }
}

#[derive(Debug, Clone)]
pub enum TutorResponse {
    Detail(WordDetails),
    Quiz(QuizQuestion),
    Chat(String),
    FlashcardBatch(Vec<FlashcardPick>),
}

/// Stand-in used when no API key is configured
pub struct DisabledTutor;

#[async_trait::async_trait]
impl Tutor for DisabledTutor {
    async fn ask(&self, _request: TutorRequest) -> Result<TutorResponse, TutorError> {
        Err(TutorError::Disabled)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Tutor is disabled")]
    Disabled,
}
