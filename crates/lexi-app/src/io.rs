use std::io::BufRead;
use std::thread;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

/// Turn one input line into an event.
///
/// Bare text that is not a command is sent to the tutor chat.
pub fn parse_command(line: &str) -> Option<Result<AppEvent, String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let needs_arg = |usage: &str| -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("Usage: {}", usage))
        } else {
            Ok(rest.to_string())
        }
    };

    let event = match command.to_lowercase().as_str() {
        "browse" | "b" => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_alphabetic() => Ok(AppEvent::Browse(letter)),
                _ => Err("Usage: browse <letter>".to_string()),
            }
        }
        "search" | "s" => needs_arg("search <text>").map(AppEvent::Search),
        "word" | "w" => needs_arg("word <word>").map(AppEvent::LookupWord),
        "cards" | "flashcards" => Ok(AppEvent::RequestFlashcards),
        "flip" => needs_arg("flip <word>").map(AppEvent::FlipCard),
        "learn" | "learned" => needs_arg("learn <word>").map(AppEvent::MarkLearned),
        "quiz" => Ok(AppEvent::RequestQuiz { ai: false }),
        "aiquiz" => Ok(AppEvent::RequestQuiz { ai: true }),
        "answer" | "a" => needs_arg("answer <word or number>").map(AppEvent::AnswerQuiz),
        "chat" | "ask" => needs_arg("chat <message>").map(AppEvent::Chat),
        "stats" => Ok(AppEvent::RequestStats),
        "help" | "?" => Ok(AppEvent::UiEvent(UiEvent::Help)),
        "quit" | "exit" | "q" => Ok(AppEvent::UiEvent(UiEvent::Close)),
        _ => Ok(AppEvent::Chat(line.to_string())),
    };

    Some(event)
}

/// Read lines on a detached OS thread and hand them to async code.
///
/// A read blocked on this thread never holds up runtime shutdown.
pub fn spawn_line_reader<R>(reader: R) -> std::io::Result<AsyncReceiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (lines_tx, lines_rx) = kanal::bounded::<String>(16);

    thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else {
                    break;
                };
                if lines_tx.send(line).is_err() {
                    break;
                }
            }
            tracing::debug!("Input reader thread finished");
        })?;

    Ok(lines_rx.to_async())
}

/// Turn incoming lines into events until EOF, `quit` or cancellation
pub async fn input_loop(
    lines_rx: AsyncReceiver<String>,
    cancel: CancellationToken,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        let line = tokio::select! {
            line = lines_rx.recv() => line.ok(),
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                return Ok(());
            }
        };

        // The reader thread hung up
        let Some(line) = line else {
            tracing::info!("Input closed");
            ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(());
        };

        match parse_command(&line) {
            None => {}
            Some(Ok(event)) => {
                let closing = matches!(event, AppEvent::UiEvent(UiEvent::Close));
                ui_to_app_tx.send(event).await?;
                if closing {
                    return Ok(());
                }
            }
            Some(Err(usage)) => ui_to_app_tx.send(AppEvent::Status(usage)).await?,
        }
    }
}

pub async fn stdin_loop(
    cancel: CancellationToken,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let lines_rx = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))?;
    input_loop(lines_rx, cancel, ui_to_app_tx).await
}
