use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lexi_tutor::DisabledTutor;
use lexi_types::{AppEvent, UiEvent};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::demo_state;
use crate::events::event_loop;
use crate::io::{input_loop, spawn_line_reader};

#[tokio::test]
async fn test_event_loop_answers_and_closes() {
    let (state, _dir) = demo_state(Arc::new(DisabledTutor));
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(8);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(8);

    let handle = tokio::spawn(event_loop(Arc::new(state), ui_rx, app_tx));

    ui_tx.send(AppEvent::Browse('b')).await.expect("send failed");
    let result = timeout(Duration::from_secs(2), app_rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::ShowEntries { entries, .. })) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].word, "be");
        }
        Ok(Ok(other)) => panic!("Wrong event type: {:?}", other),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - event loop never answered"),
    }

    ui_tx
        .send(AppEvent::UiEvent(UiEvent::Close))
        .await
        .expect("send failed");
    let result = timeout(Duration::from_secs(2), app_rx.recv()).await;
    assert!(matches!(
        result,
        Ok(Ok(AppEvent::UiEvent(UiEvent::Close)))
    ));

    let joined = timeout(Duration::from_secs(2), handle)
        .await
        .expect("event loop did not stop");
    assert!(joined.expect("event loop panicked").is_ok());
}

#[tokio::test]
async fn test_input_loop_forwards_commands_then_closes_on_eof() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let lines_rx = spawn_line_reader(Cursor::new(b"word be\n\nbrowse\nstats\n".to_vec())).unwrap();

    timeout(
        Duration::from_secs(2),
        input_loop(lines_rx, CancellationToken::new(), tx),
    )
    .await
    .expect("input loop hung")
    .expect("input loop failed");

    let events: Vec<AppEvent> = std::iter::from_fn(|| rx.try_recv().ok().flatten()).collect();
    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], AppEvent::LookupWord(w) if w == "be"));
    assert!(matches!(&events[1], AppEvent::Status(s) if s.starts_with("Usage")));
    assert!(matches!(events[2], AppEvent::RequestStats));
    assert!(matches!(events[3], AppEvent::UiEvent(UiEvent::Close)));
}

#[tokio::test]
async fn test_input_loop_stops_on_cancel() {
    let (tx, _rx) = kanal::unbounded_async::<AppEvent>();
    // Sender kept alive: no line ever arrives
    let (_lines_tx, lines_rx) = kanal::bounded_async::<String>(1);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = timeout(Duration::from_secs(2), input_loop(lines_rx, cancel, tx))
        .await
        .expect("input loop ignored cancellation");
    assert!(result.is_ok());
}

#[cfg(unix)]
#[test]
fn test_runtime_shutdown_does_not_wait_for_blocked_reader() {
    use std::os::unix::net::UnixStream;

    // Nothing is ever written, so the reader thread stays blocked
    let (_writer, blocked) = UnixStream::pair().unwrap();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();
    let started = Instant::now();

    runtime.block_on(async {
        let (tx, _rx) = kanal::unbounded_async::<AppEvent>();
        let lines_rx = spawn_line_reader(std::io::BufReader::new(blocked)).unwrap();
        let cancel = CancellationToken::new();
        let reader = tokio::spawn(input_loop(lines_rx, cancel.clone(), tx));

        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
        reader.await.unwrap().unwrap();
    });
    drop(runtime);

    assert!(started.elapsed() < Duration::from_secs(2));
}
