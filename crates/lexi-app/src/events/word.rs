use kanal::AsyncSender;
use lexi_tutor::{TutorError, TutorRequest, TutorResponse, prompts};
use lexi_types::{AppEvent, ParsedWordEntry, WordDetails};

use crate::state::AppState;

pub async fn handle_lookup(
    state: &AppState,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(entry) = state.index.lookup(word.trim()) else {
        app_to_ui_tx
            .send(AppEvent::Status(format!("'{}' is not in the corpus", word.trim())))
            .await?;
        return Ok(());
    };

    let parsed = state.resolver.resolve_entry(entry).await;
    let details = enrich(state, &parsed).await;

    state.session.lock().await.seen.insert(entry.word.clone());

    app_to_ui_tx
        .send(AppEvent::ShowWord {
            entry: parsed,
            details,
        })
        .await?;
    Ok(())
}

/// Tutor-written details anchored on the local page; `None` when the tutor
/// is unavailable
async fn enrich(state: &AppState, parsed: &ParsedWordEntry) -> Option<WordDetails> {
    let ground_truth = {
        let config = state.config.read().await;
        prompts::ground_truth(
            parsed,
            config.grounding.max_blocks,
            config.grounding.examples_per_block,
        )
    };

    let request = TutorRequest::Detail {
        word: parsed.word.clone(),
        ground_truth: Some(ground_truth),
    };

    match state.tutor.ask(request).await {
        Ok(TutorResponse::Detail(details)) => Some(details),
        Ok(other) => {
            tracing::warn!("Unexpected tutor response for details: {:?}", other);
            None
        }
        Err(TutorError::Disabled) => None,
        Err(e) => {
            tracing::warn!("Word details unavailable for '{}': {}", parsed.word, e);
            None
        }
    }
}
