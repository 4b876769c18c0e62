//! Prompt texts and response schemas for each tutor action.

use lexi_types::{FlashcardPick, ParsedWordEntry};
use serde_json::{Value, json};

pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are a helpful, encouraging English tutor for IELTS/TOEFL. \
Correct the student's grammar gently and encourage sophisticated vocabulary. \
Always prioritize [GROUNDING DATA] if present.";

/// Reply shown when the chat backend fails
pub const CHAT_FAILURE_REPLY: &str = "Sorry, I am having trouble connecting to the brain right now.";

/// "GROUND TRUTH" block for the detail prompt
pub fn ground_truth(entry: &ParsedWordEntry, max_blocks: usize, per_block: usize) -> String {
    let examples = entry
        .sampled_examples(max_blocks, per_block)
        .into_iter()
        .map(|example| format!("- {}", example))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "GROUND TRUTH DEFINITION:\n{}\n\nGROUND TRUTH EXAMPLES:\n{}",
        entry.display_definition(),
        examples
    )
}

/// Definition plus the first two examples, for quiz generation
pub fn quiz_context(entry: &ParsedWordEntry) -> String {
    format!(
        "Definition: {}. Example usage: {}",
        entry.display_definition(),
        entry.example_preview(2).join("; ")
    )
}

pub fn detail_prompt(word: &str, ground_truth: Option<&str>) -> String {
    let grounding = ground_truth
        .map(|block| {
            format!(
                "Use the following GROUND TRUTH data as the primary and authoritative source. Do NOT contradict it:\n{}\n",
                block
            )
        })
        .unwrap_or_default();

    format!(
        "Provide a clear, accurate dictionary entry for the word \"{}\" suitable for an IELTS/TOEFL student.\n\n\
{}\n\
Include a mnemonic device to help remember it.\n\
Respond strictly in the requested JSON format.",
        word, grounding
    )
}

pub fn quiz_prompt(word: &str, context: Option<&str>) -> String {
    let context = context
        .map(|c| format!("Base the question on the following definition and example usage:\n{}\n", c))
        .unwrap_or_default();

    format!(
        "Create a multiple-choice vocabulary question for an IELTS/TOEFL student.\n\n\
The correct answer must be \"{}\".\n\n\
{}\n\
- The question should test understanding of meaning or usage.\n\
- The incorrect options should be plausible but clearly wrong.\n\
- Do not include the correct answer in the question stem.\n\
- Respond strictly in JSON.",
        word, context
    )
}

pub fn flashcard_prompt(candidates: &[FlashcardPick], count: usize) -> String {
    let candidates: Vec<Value> = candidates
        .iter()
        .map(|c| json!({ "word": c.word, "rank": c.rank }))
        .collect();

    format!(
        "You are an English vocabulary tutor.\n\n\
From the list below, select exactly {} words for flashcards.\n\n\
Rules:\n\
- Suitable for IELTS/TOEFL learners\n\
- Avoid archaic or rare words\n\
- Mix nouns, verbs, adjectives\n\
- Prefer academic and conversational usefulness\n\
- Avoid extremely abstract words\n\n\
Candidate words (JSON):\n{}\n\n\
Return JSON only:\n{{ \"words\": [ {{ \"word\": string, \"rank\": number, \"reason\": string }} ] }}",
        count,
        Value::Array(candidates)
    )
}

/// The user's message with the grounding block in front, when there is one
pub fn augment_message(grounding: Option<&str>, message: &str) -> String {
    match grounding {
        Some(block) => format!("{}\n\nUser Message: {}", block, message),
        None => message.to_string(),
    }
}

pub fn detail_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "definition": { "type": "STRING" },
            "partOfSpeech": { "type": "STRING" },
            "synonyms": { "type": "ARRAY", "items": { "type": "STRING" } },
            "examples": { "type": "ARRAY", "items": { "type": "STRING" } },
            "mnemonics": { "type": "STRING" }
        },
        "required": ["definition", "partOfSpeech", "synonyms", "examples"]
    })
}

pub fn quiz_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "question": { "type": "STRING" },
            "options": { "type": "ARRAY", "items": { "type": "STRING" } },
            "correctAnswer": { "type": "STRING" },
            "explanation": { "type": "STRING" }
        },
        "required": ["question", "options", "correctAnswer", "explanation"]
    })
}

pub fn flashcard_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "words": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "word": { "type": "STRING" },
                        "rank": { "type": "NUMBER" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["word", "rank", "reason"]
                }
            }
        },
        "required": ["words"]
    })
}
