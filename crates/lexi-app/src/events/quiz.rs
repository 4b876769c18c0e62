use kanal::AsyncSender;
use lexi_core::selection;
use lexi_tutor::{TutorError, TutorRequest, TutorResponse, prompts};
use lexi_types::{AppEvent, CorpusEntry, QuizQuestion};
use rand::seq::SliceRandom;

use crate::state::{AppState, today};

pub const CORRECT_ANSWER_XP: u32 = 10;
const EXAMPLE_PREVIEWS: usize = 2;

/// Question served when no local question can be built
pub fn fallback_question() -> QuizQuestion {
    let definition = "v. to exist; to take place";
    QuizQuestion {
        question: local_question_text(definition),
        options: ["be", "have", "go", "do"].map(String::from).to_vec(),
        correct_answer: "be".to_string(),
        explanation: definition.to_string(),
        examples: vec!["To be or not to be.".to_string()],
    }
}

fn local_question_text(definition: &str) -> String {
    format!("Which word matches this definition?\n{}", definition)
}

pub async fn handle_request_quiz(
    state: &AppState,
    ai: bool,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let question = if ai {
        match ai_question(state).await {
            Some(question) => question,
            None => {
                app_to_ui_tx
                    .send(AppEvent::Status(
                        "AI quiz unavailable, using a local question".to_string(),
                    ))
                    .await?;
                local_question(state).await
            }
        }
    } else {
        local_question(state).await
    };

    state.session.lock().await.current_quiz = Some(question.clone());
    app_to_ui_tx.send(AppEvent::ShowQuiz(question)).await?;
    Ok(())
}

/// Random target and distractors from the valid pool, definition from its page
pub async fn local_question(state: &AppState) -> QuizQuestion {
    let option_count = state.config.read().await.selection.quiz_options.max(2);
    let pool: Vec<&CorpusEntry> = state.index.valid().collect();

    let picked = {
        let mut rng = state.rng.lock().await;
        pool.choose(&mut *rng).copied().map(|target| {
            let distractors =
                selection::pick_distractors(&pool, &target.word, option_count - 1, &mut *rng);
            let options = selection::shuffled_options(&target.word, &distractors, &mut *rng);
            (target, distractors.len(), options)
        })
    };

    let Some((target, distractor_count, options)) = picked else {
        tracing::warn!("Corpus is empty, serving the fallback question");
        return fallback_question();
    };

    if distractor_count < option_count - 1 {
        tracing::warn!("Not enough distinct words for a quiz, serving the fallback question");
        return fallback_question();
    }

    let parsed = state.resolver.resolve_entry(target).await;
    let definition = parsed.display_definition().to_string();

    QuizQuestion {
        question: local_question_text(&definition),
        options,
        correct_answer: target.word.clone(),
        explanation: definition,
        examples: parsed
            .example_preview(EXAMPLE_PREVIEWS)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

async fn ai_question(state: &AppState) -> Option<QuizQuestion> {
    let target = {
        let pool: Vec<&CorpusEntry> = state.index.valid().collect();
        let mut rng = state.rng.lock().await;
        pool.choose(&mut *rng).copied()?
    };

    let parsed = state.resolver.resolve_entry(target).await;
    let request = TutorRequest::Quiz {
        word: target.word.clone(),
        context: Some(prompts::quiz_context(&parsed)),
    };

    match state.tutor.ask(request).await {
        Ok(TutorResponse::Quiz(question)) if !question.options.is_empty() => Some(question),
        Ok(other) => {
            tracing::warn!("Unusable tutor response for quiz: {:?}", other);
            None
        }
        Err(TutorError::Disabled) => None,
        Err(e) => {
            tracing::warn!("AI quiz failed: {}", e);
            None
        }
    }
}

pub async fn handle_answer(
    state: &AppState,
    answer: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(question) = state.session.lock().await.current_quiz.take() else {
        app_to_ui_tx
            .send(AppEvent::Status("No quiz in progress, type 'quiz' to start one".to_string()))
            .await?;
        return Ok(());
    };

    let correct = question.is_correct(chosen_option(&question, &answer));
    if correct {
        state
            .tracker
            .lock()
            .await
            .add_xp(CORRECT_ANSWER_XP, today());
    }

    app_to_ui_tx
        .send(AppEvent::QuizAnswered {
            correct,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
        })
        .await?;
    Ok(())
}

/// An answer may be typed out or given as the 1-based option number
pub fn chosen_option<'a>(question: &'a QuizQuestion, answer: &'a str) -> &'a str {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i))
        .map(String::as_str)
        .unwrap_or(answer)
}
