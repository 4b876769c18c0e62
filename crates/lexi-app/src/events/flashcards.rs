use kanal::AsyncSender;
use lexi_core::selection;
use lexi_tutor::{TutorError, TutorRequest, TutorResponse};
use lexi_types::{AppEvent, Flashcard, FlashcardPick};

use crate::state::{AppState, today};

pub const FLIP_XP: u32 = 5;
pub const LEARNED_XP: u32 = 5;

pub async fn handle_request_flashcards(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let selection_config = state.config.read().await.selection.clone();
    let stats = state.tracker.lock().await.stats().clone();
    let seen = state.session.lock().await.seen.clone();

    let candidates: Vec<FlashcardPick> = {
        let mut rng = state.rng.lock().await;
        selection::flashcard_candidates(&state.index, &seen, &stats, &selection_config, &mut *rng)
            .into_iter()
            .map(|entry| FlashcardPick {
                word: entry.word.clone(),
                rank: entry.rank,
                reason: String::new(),
            })
            .collect()
    };

    let request = TutorRequest::FlashcardBatch {
        candidates,
        count: selection_config.batch_size,
    };

    let curated = match state.tutor.ask(request).await {
        Ok(TutorResponse::FlashcardBatch(picks)) => Some(cards_from_picks(state, picks)),
        Ok(other) => {
            tracing::warn!("Unexpected tutor response for flashcards: {:?}", other);
            None
        }
        Err(TutorError::Disabled) => None,
        Err(e) => {
            tracing::warn!("Flashcard curation failed, using local selection: {}", e);
            None
        }
    };

    let cards = match curated.filter(|cards| !cards.is_empty()) {
        Some(cards) => cards,
        None => {
            let mut rng = state.rng.lock().await;
            selection::fallback_batch(&state.index, &seen, selection_config.batch_size, &mut *rng)
                .into_iter()
                .map(|entry| Flashcard {
                    entry: entry.clone(),
                    reason: None,
                })
                .collect()
        }
    };

    {
        let mut session = state.session.lock().await;
        session
            .seen
            .extend(cards.iter().map(|card| card.entry.word.clone()));
        session.flipped.clear();
    }

    tracing::info!("Flashcard round of {} words", cards.len());
    app_to_ui_tx.send(AppEvent::ShowFlashcards(cards)).await?;
    Ok(())
}

/// Map curated picks back onto corpus records, dropping words the corpus
/// does not know
fn cards_from_picks(state: &AppState, picks: Vec<FlashcardPick>) -> Vec<Flashcard> {
    picks
        .into_iter()
        .filter_map(|pick| {
            let entry = state.index.lookup(&pick.word).filter(|e| e.is_valid())?;
            Some(Flashcard {
                entry: entry.clone(),
                reason: Some(pick.reason).filter(|r| !r.is_empty()),
            })
        })
        .collect()
}

/// Flip a card. Turning it over earns XP; turning it back marks the word learned.
pub async fn handle_flip(
    state: &AppState,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = word.trim().to_lowercase();
    let was_flipped = {
        let mut session = state.session.lock().await;
        if !session.flipped.remove(&word) {
            session.flipped.insert(word.clone());
            false
        } else {
            true
        }
    };

    let status = {
        let mut tracker = state.tracker.lock().await;
        if was_flipped {
            tracker.add_words_learned([word.clone()]);
            tracker.add_xp(LEARNED_XP, today());
            format!("Learned '{}' (+{} XP)", word, LEARNED_XP)
        } else {
            tracker.add_xp(FLIP_XP, today());
            format!("Flipped '{}' (+{} XP)", word, FLIP_XP)
        }
    };

    app_to_ui_tx.send(AppEvent::Status(status)).await?;
    Ok(())
}

pub async fn handle_mark_learned(
    state: &AppState,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = word.trim().to_lowercase();
    state.session.lock().await.flipped.remove(&word);

    {
        let mut tracker = state.tracker.lock().await;
        tracker.add_words_learned([word.clone()]);
        tracker.add_xp(LEARNED_XP, today());
    }

    app_to_ui_tx
        .send(AppEvent::Status(format!(
            "Learned '{}' (+{} XP)",
            word, LEARNED_XP
        )))
        .await?;
    Ok(())
}
