use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::{AppEvent, UiEvent};

use crate::state::AppState;

pub mod browse;
pub mod chat;
pub mod flashcards;
pub mod quiz;
pub mod stats;
pub mod word;

use browse::{handle_browse, handle_search};
use chat::handle_chat;
use flashcards::{handle_flip, handle_mark_learned, handle_request_flashcards};
use quiz::{handle_answer, handle_request_quiz};
use stats::handle_stats;
use word::handle_lookup;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );

        if matches!(event, AppEvent::UiEvent(UiEvent::Close)) {
            tracing::info!("[EVENT_LOOP] Close requested");
            let _ = app_to_ui_tx.send(event).await;
            return Ok(());
        }

        if let Err(e) = handle_events(&state, &app_to_ui_tx, event).await {
            tracing::error!("Event handling failed: {:#}", e);
            app_to_ui_tx
                .send(AppEvent::Status(format!("Something went wrong: {}", e)))
                .await?;
        }
    }
}

pub async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Browse(letter) => handle_browse(state, letter, app_to_ui_tx).await?,
        AppEvent::Search(query) => handle_search(state, query, app_to_ui_tx).await?,
        AppEvent::LookupWord(word) => handle_lookup(state, word, app_to_ui_tx).await?,
        AppEvent::RequestFlashcards => handle_request_flashcards(state, app_to_ui_tx).await?,
        AppEvent::FlipCard(word) => handle_flip(state, word, app_to_ui_tx).await?,
        AppEvent::MarkLearned(word) => handle_mark_learned(state, word, app_to_ui_tx).await?,
        AppEvent::RequestQuiz { ai } => handle_request_quiz(state, ai, app_to_ui_tx).await?,
        AppEvent::AnswerQuiz(answer) => handle_answer(state, answer, app_to_ui_tx).await?,
        AppEvent::Chat(message) => handle_chat(state, message, app_to_ui_tx).await?,
        AppEvent::RequestStats => handle_stats(state, app_to_ui_tx).await?,

        // Output-side events are passed straight to the renderer
        event @ (AppEvent::ShowEntries { .. }
        | AppEvent::ShowWord { .. }
        | AppEvent::ShowFlashcards(_)
        | AppEvent::ShowQuiz(_)
        | AppEvent::QuizAnswered { .. }
        | AppEvent::ChatReply(_)
        | AppEvent::ShowStats(_)
        | AppEvent::Status(_)
        | AppEvent::UiEvent(_)) => app_to_ui_tx.send(event).await?,
    }

    Ok(())
}
