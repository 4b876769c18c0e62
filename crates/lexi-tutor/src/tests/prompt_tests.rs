use lexi_types::{FlashcardPick, ParsedWordEntry, UsageBlock};

use crate::prompts::{
    augment_message, detail_prompt, flashcard_prompt, ground_truth, quiz_context, quiz_prompt,
};

fn entry() -> ParsedWordEntry {
    let block = |pos: &str, examples: &[&str]| UsageBlock {
        part_of_speech: pos.to_string(),
        examples: examples.iter().map(|e| e.to_string()).collect(),
        ..Default::default()
    };

    ParsedWordEntry {
        word: "run".to_string(),
        definition: "v. to move fast".to_string(),
        usage_blocks: vec![
            block("VERB", &["She runs daily.", "He ran home."]),
            block("N-COUNT", &["A morning run."]),
            block("VERB-LINK", &["Rivers run dry."]),
        ],
        ..Default::default()
    }
}

#[test]
fn test_ground_truth_samples_blocks() {
    let block = ground_truth(&entry(), 2, 1);
    assert_eq!(
        block,
        "GROUND TRUTH DEFINITION:\nv. to move fast\n\nGROUND TRUTH EXAMPLES:\n- She runs daily.\n- A morning run."
    );
}

#[test]
fn test_ground_truth_placeholder_definition() {
    let empty = ParsedWordEntry::default();
    assert!(ground_truth(&empty, 2, 1).contains(ParsedWordEntry::MISSING_DEFINITION));
}

#[test]
fn test_quiz_context_takes_first_two_examples() {
    assert_eq!(
        quiz_context(&entry()),
        "Definition: v. to move fast. Example usage: She runs daily.; He ran home."
    );
}

#[test]
fn test_detail_prompt_grounding_optional() {
    let grounded = detail_prompt("run", Some("GROUND TRUTH DEFINITION:\nx"));
    assert!(grounded.contains("\"run\""));
    assert!(grounded.contains("Do NOT contradict it:\nGROUND TRUTH DEFINITION:\nx"));

    let bare = detail_prompt("run", None);
    assert!(!bare.contains("GROUND TRUTH"));
}

#[test]
fn test_quiz_prompt_names_answer() {
    let prompt = quiz_prompt("run", Some("Definition: v. to move fast"));
    assert!(prompt.contains("The correct answer must be \"run\"."));
    assert!(prompt.contains("Definition: v. to move fast"));
    assert!(!quiz_prompt("run", None).contains("Base the question"));
}

#[test]
fn test_flashcard_prompt_lists_candidates_without_reasons() {
    let candidates = vec![FlashcardPick {
        word: "harbor".to_string(),
        rank: 1203,
        reason: "ignored".to_string(),
    }];

    let prompt = flashcard_prompt(&candidates, 20);
    assert!(prompt.contains("select exactly 20 words"));
    assert!(prompt.contains(r#"{"rank":1203,"word":"harbor"}"#) || prompt.contains(r#"{"word":"harbor","rank":1203}"#));
    assert!(!prompt.contains("ignored"));
}

#[test]
fn test_augment_message() {
    assert_eq!(augment_message(None, "hi"), "hi");
    assert_eq!(
        augment_message(Some("[GROUNDING]"), "what is zephyr"),
        "[GROUNDING]\n\nUser Message: what is zephyr"
    );
}
