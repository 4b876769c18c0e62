use kanal::AsyncSender;
use lexi_lang_english::GroundingBuilder;
use lexi_tutor::{TutorError, TutorRequest, TutorResponse, prompts};
use lexi_types::{AppEvent, ChatRole, ChatTurn};

use crate::state::AppState;

pub async fn handle_chat(
    state: &AppState,
    message: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let grounding_config = state.config.read().await.grounding.clone();
    let grounding = GroundingBuilder::new(&state.index, &state.resolver, &grounding_config)
        .build_context(&message)
        .await;

    let history = state.session.lock().await.chat_history.clone();
    let request = TutorRequest::Chat {
        history,
        message: message.clone(),
        grounding,
    };

    let reply = match state.tutor.ask(request).await {
        Ok(TutorResponse::Chat(reply)) => {
            let mut session = state.session.lock().await;
            session.chat_history.push(ChatTurn {
                role: ChatRole::User,
                text: message,
            });
            session.chat_history.push(ChatTurn {
                role: ChatRole::Model,
                text: reply.clone(),
            });
            reply
        }
        Ok(other) => {
            tracing::warn!("Unexpected tutor response for chat: {:?}", other);
            prompts::CHAT_FAILURE_REPLY.to_string()
        }
        Err(TutorError::Disabled) => {
            "The AI tutor is offline. Set GEMINI_API_KEY to chat.".to_string()
        }
        Err(e) => {
            tracing::error!("Chat failed: {}", e);
            prompts::CHAT_FAILURE_REPLY.to_string()
        }
    };

    app_to_ui_tx.send(AppEvent::ChatReply(reply)).await?;
    Ok(())
}
