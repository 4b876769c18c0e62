use kanal::AsyncSender;
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_browse(
    state: &AppState,
    letter: char,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries: Vec<_> = state
        .index
        .by_prefix(&letter.to_string())
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!("Browse '{}': {} entries", letter, entries.len());

    app_to_ui_tx
        .send(AppEvent::ShowEntries {
            title: format!("Words starting with '{}'", letter.to_ascii_uppercase()),
            entries,
        })
        .await?;
    Ok(())
}

pub async fn handle_search(
    state: &AppState,
    query: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let entries: Vec<_> = state.index.search(&query).into_iter().cloned().collect();
    tracing::debug!("Search '{}': {} entries", query, entries.len());

    app_to_ui_tx
        .send(AppEvent::ShowEntries {
            title: format!("Search results for \"{}\"", query.trim()),
            entries,
        })
        .await?;
    Ok(())
}
