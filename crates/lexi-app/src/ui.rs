use std::fmt::Write as _;

use kanal::AsyncReceiver;
use lexi_core::FrequencyBand;
use lexi_core::stats::XP_PER_LEVEL;
use lexi_types::{AppEvent, ParsedWordEntry, UiEvent, UserStats, WordDetails};
use tokio::io::AsyncWriteExt;

use crate::events::quiz::CORRECT_ANSWER_XP;

const RULE_WIDTH: usize = 60;
const MAX_LISTED: usize = 40;

pub const HELP: &str = "\
Commands:
  browse <letter>      words starting with a letter
  search <text>        substring search
  word <word>          dictionary page (plus AI details when online)
  cards                new flashcard round
  flip <word>          flip a card (+5 XP, flip back to learn it)
  learn <word>         mark a word learned (+5 XP)
  quiz | aiquiz        local or AI-written question
  answer <word|n>      answer the current question (+10 XP if right)
  chat <message>       talk to the tutor (bare text works too)
  stats                XP, level, streak and the last 7 days
  help | quit";

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Text for one output event; `None` for events with nothing to show
pub fn render(event: &AppEvent) -> Option<String> {
    let mut out = String::new();

    match event {
        AppEvent::ShowEntries { title, entries } => {
            let _ = writeln!(out, "{} ({})", title, entries.len());
            let _ = writeln!(out, "{}", rule());
            for entry in entries.iter().take(MAX_LISTED) {
                let band = FrequencyBand::from_rank(entry.rank);
                let _ = writeln!(
                    out,
                    "{:>6}  {:<20} {:<12} {}",
                    entry.rank,
                    entry.word,
                    band.as_str(),
                    band.stars()
                );
            }
            if entries.len() > MAX_LISTED {
                let _ = writeln!(out, "... and {} more", entries.len() - MAX_LISTED);
            }
        }
        AppEvent::ShowWord { entry, details } => render_word(&mut out, entry, details.as_ref()),
        AppEvent::ShowFlashcards(cards) => {
            let _ = writeln!(out, "Flashcards ({})", cards.len());
            let _ = writeln!(out, "{}", rule());
            for (i, card) in cards.iter().enumerate() {
                let _ = write!(out, "{:>2}. {} (#{})", i + 1, card.entry.word, card.entry.rank);
                if let Some(reason) = &card.reason {
                    let _ = write!(out, " - {}", reason);
                }
                out.push('\n');
            }
        }
        AppEvent::ShowQuiz(question) => {
            let _ = writeln!(out, "{}", question.question);
            for example in &question.examples {
                let _ = writeln!(out, "  e.g. {}", mask(example, &question.correct_answer));
            }
            for (i, option) in question.options.iter().enumerate() {
                let _ = writeln!(out, "  {}) {}", i + 1, option);
            }
        }
        AppEvent::QuizAnswered {
            correct,
            correct_answer,
            explanation,
        } => {
            if *correct {
                let _ = writeln!(out, "Correct! +{} XP", CORRECT_ANSWER_XP);
            } else {
                let _ = writeln!(out, "Not quite. The answer was '{}'.", correct_answer);
            }
            if !explanation.is_empty() {
                let _ = writeln!(out, "{}", explanation);
            }
        }
        AppEvent::ChatReply(reply) => {
            let _ = writeln!(out, "tutor> {}", reply);
        }
        AppEvent::ShowStats(stats) => render_stats(&mut out, stats),
        AppEvent::Status(message) => {
            let _ = writeln!(out, "* {}", message);
        }
        AppEvent::UiEvent(UiEvent::Help) => {
            let _ = writeln!(out, "{}", HELP);
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            let _ = writeln!(out, "Goodbye!");
        }
        _ => return None,
    }

    Some(out)
}

fn render_word(out: &mut String, entry: &ParsedWordEntry, details: Option<&WordDetails>) {
    let _ = writeln!(out, "{}  {}", entry.word, entry.phonetic);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{}", entry.display_definition());

    for block in &entry.usage_blocks {
        let _ = writeln!(out, "\n[{}] {}", block.part_of_speech, block.localized_gloss);
        if !block.english_gloss.is_empty() {
            let _ = writeln!(out, "  {}", block.english_gloss);
        }
        for example in &block.examples {
            let _ = writeln!(out, "  - {}", example);
        }
    }

    if let Some(audio) = &entry.audio_ref {
        let _ = writeln!(out, "\naudio: {}", audio);
    }

    if let Some(details) = details {
        let _ = writeln!(out, "\nAI notes ({})", details.part_of_speech);
        let _ = writeln!(out, "  {}", details.definition);
        if !details.synonyms.is_empty() {
            let _ = writeln!(out, "  synonyms: {}", details.synonyms.join(", "));
        }
        for example in &details.examples {
            let _ = writeln!(out, "  - {}", example);
        }
        if let Some(mnemonic) = &details.mnemonics {
            let _ = writeln!(out, "  mnemonic: {}", mnemonic);
        }
    }
}

fn render_stats(out: &mut String, stats: &UserStats) {
    let into_level = stats.xp % XP_PER_LEVEL;
    let _ = writeln!(
        out,
        "Level {}  ({} XP, {}/{} to next)",
        stats.level, stats.xp, into_level, XP_PER_LEVEL
    );
    let _ = writeln!(out, "Streak: {} day(s)", stats.streak);
    let _ = writeln!(out, "Words learned: {}", stats.words_learned.len());
    let _ = writeln!(out, "{}", rule());
    for day in &stats.history {
        let bar = "#".repeat((day.xp / 5).min(40) as usize);
        let _ = writeln!(out, "{} {:>4}  {}", day.date, day.xp, bar);
    }
}

/// Hide the answer inside an example sentence
fn mask(text: &str, word: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }

    let lower = text.to_lowercase();
    let needle = word.to_lowercase();
    if lower.len() != text.len() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (at, _) in lower.match_indices(&needle) {
        out.push_str(&text[last..at]);
        out.push_str(&"_".repeat(word.chars().count()));
        last = at + needle.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Render output events to stdout until the app closes
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{}\n", HELP).as_bytes()).await?;
    stdout.flush().await?;

    loop {
        let event = app_to_ui_rx.recv().await?;
        let closing = matches!(event, AppEvent::UiEvent(UiEvent::Close));

        if let Some(text) = render(&event) {
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
        }

        if closing {
            return Ok(());
        }
    }
}
