use std::sync::LazyLock;

use lexi_types::{ParsedWordEntry, UsageBlock};
use regex::Regex;

use crate::markup::{BlockNode, BlockNodes, find_tagged_attribute};

/// Inline color that opens a part-of-speech block
pub const POS_MARKER_COLOR: &str = "rosybrown";

const AUDIO_CLASS: &str = "word-audio";
const AUDIO_ATTR: &str = "data-src";

static EXAMPLE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(例|example)[:：]?\s*").expect("valid example label regex"));

/// Where the segmenter is within the current usage block
#[derive(Debug)]
enum ParseState {
    SeekPosMarker,
    CaptureLocalGloss(UsageBlock),
    CaptureEnglishGloss(UsageBlock),
    CollectExamples(UsageBlock),
}

impl ParseState {
    /// Consume one container, pushing a finished block into `blocks`
    fn step(self, node: &BlockNode<'_>, blocks: &mut Vec<UsageBlock>) -> Self {
        match self {
            ParseState::SeekPosMarker => {
                if node.has_color(POS_MARKER_COLOR) {
                    ParseState::CaptureLocalGloss(UsageBlock {
                        part_of_speech: node.text(),
                        ..Default::default()
                    })
                } else {
                    ParseState::SeekPosMarker
                }
            }
            ParseState::CaptureLocalGloss(mut block) => {
                block.localized_gloss = node.text();
                ParseState::CaptureEnglishGloss(block)
            }
            ParseState::CaptureEnglishGloss(mut block) => {
                block.english_gloss = node.text();
                ParseState::CollectExamples(block)
            }
            ParseState::CollectExamples(mut block) => {
                if node.is_line_break() {
                    blocks.push(block);
                    return ParseState::SeekPosMarker;
                }

                let example = strip_example_label(&node.text());
                if !example.is_empty() {
                    block.examples.push(example);
                }
                ParseState::CollectExamples(block)
            }
        }
    }

    /// Block still open when the input ran out
    fn finish(self) -> Option<UsageBlock> {
        match self {
            ParseState::SeekPosMarker => None,
            ParseState::CaptureLocalGloss(block)
            | ParseState::CaptureEnglishGloss(block)
            | ParseState::CollectExamples(block) => Some(block),
        }
    }
}

/// Parse one dictionary page.
///
/// Never fails: missing pieces come back as empty strings or empty lists.
/// `expected_word` is used as the headword whatever the page says.
pub fn parse(raw: &str, expected_word: &str) -> ParsedWordEntry {
    let audio_ref = find_tagged_attribute(raw, AUDIO_CLASS, AUDIO_ATTR);

    let mut nodes = BlockNodes::new(raw);
    let phonetic = nodes.next().map(|n| n.text()).unwrap_or_default();
    let definition = nodes.next().map(|n| n.text()).unwrap_or_default();

    let mut usage_blocks = Vec::new();
    let mut state = ParseState::SeekPosMarker;
    for node in nodes {
        state = state.step(&node, &mut usage_blocks);
    }
    if let Some(block) = state.finish() {
        usage_blocks.push(block);
    }

    ParsedWordEntry {
        word: expected_word.to_string(),
        audio_ref,
        phonetic,
        definition,
        usage_blocks,
    }
}

fn strip_example_label(text: &str) -> String {
    EXAMPLE_LABEL.replace(text, "").trim().to_string()
}
