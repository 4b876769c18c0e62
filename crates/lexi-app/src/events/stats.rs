use kanal::AsyncSender;
use lexi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_stats(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let stats = state.tracker.lock().await.stats().clone();
    app_to_ui_tx.send(AppEvent::ShowStats(stats)).await?;
    Ok(())
}
