use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One record of the frequency corpus. `rank` is the position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub word: String,
    /// Content id of the dictionary page, e.g. `coca_00002_be.html`
    pub html_ref: String,
    pub rank: usize,
}

impl CorpusEntry {
    /// Entries with no word or no content reference are never shown
    pub fn is_valid(&self) -> bool {
        !self.word.is_empty() && !self.html_ref.is_empty()
    }
}

/// Structured form of a dictionary page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWordEntry {
    pub word: String,
    pub audio_ref: Option<String>,
    pub phonetic: String,
    pub definition: String,
    pub usage_blocks: Vec<UsageBlock>,
}

impl ParsedWordEntry {
    pub const MISSING_DEFINITION: &'static str = "No definition available locally.";

    pub fn display_definition(&self) -> &str {
        if self.definition.is_empty() {
            Self::MISSING_DEFINITION
        } else {
            &self.definition
        }
    }

    /// First `limit` examples across all usage blocks, in source order
    pub fn example_preview(&self, limit: usize) -> Vec<&str> {
        self.usage_blocks
            .iter()
            .flat_map(|block| block.examples.iter().map(String::as_str))
            .take(limit)
            .collect()
    }

    /// At most `blocks` usage blocks, each contributing at most `per_block` examples
    pub fn sampled_examples(&self, blocks: usize, per_block: usize) -> Vec<&str> {
        self.usage_blocks
            .iter()
            .take(blocks)
            .flat_map(|block| block.examples.iter().take(per_block).map(String::as_str))
            .collect()
    }
}

/// One part-of-speech scoped cluster of glosses and examples
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageBlock {
    pub part_of_speech: String,
    pub localized_gloss: String,
    pub english_gloss: String,
    pub examples: Vec<String>,
}

/// Word detail enrichment returned by the tutor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetails {
    pub definition: String,
    pub part_of_speech: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonics: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    /// Usage previews shown under a locally generated question
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer.eq_ignore_ascii_case(answer.trim())
    }
}

/// A word picked for a flashcard round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardPick {
    pub word: String,
    pub rank: usize,
    #[serde(default)]
    pub reason: String,
}

/// A flashcard resolved back to its corpus record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub entry: CorpusEntry,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// XP earned on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Short weekday label, e.g. `Mon`
    pub date: String,
    pub full_date: NaiveDate,
    pub xp: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default)]
    pub words_learned: BTreeSet<String>,
    pub xp: u32,
    pub streak: u32,
    pub level: u32,
    #[serde(default)]
    pub history: Vec<DayRecord>,
    #[serde(default)]
    pub last_login: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // Input side
    Browse(char),
    Search(String),
    LookupWord(String),
    RequestFlashcards,
    FlipCard(String),
    MarkLearned(String),
    RequestQuiz { ai: bool },
    AnswerQuiz(String),
    Chat(String),
    RequestStats,

    // Output side
    ShowEntries {
        title: String,
        entries: Vec<CorpusEntry>,
    },
    ShowWord {
        entry: ParsedWordEntry,
        details: Option<WordDetails>,
    },
    ShowFlashcards(Vec<Flashcard>),
    ShowQuiz(QuizQuestion),
    QuizAnswered {
        correct: bool,
        correct_answer: String,
        explanation: String,
    },
    ChatReply(String),
    ShowStats(UserStats),
    Status(String),
    UiEvent(UiEvent),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Help,
    Close,
}
