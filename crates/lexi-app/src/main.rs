use std::sync::Arc;

use clap::Parser;
use lexi_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod io;
mod persistence;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Args, resolve_config};
use self::controller::AppController;
use self::profile::{add_profile_from_default, init_user_config};
use self::state::AppState;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let json_logs = args.json_logs
        || std::env::var("LEXI_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
    init_tracing(json_logs);

    let env_config = Config::new();

    if let Some(name) = &args.new_profile {
        let data_dir = args.data_dir(&env_config);
        init_user_config(&data_dir, &env_config)?;
        let path = add_profile_from_default(&data_dir, name, &env_config)?;
        println!("Created profile '{}' at {}", name, path.display());
        return Ok(());
    }

    let config = resolve_config(&args, env_config)?;
    let state = Arc::new(AppState::from_config(config)?);

    let controller = AppController::new(state).await;
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("Task finished, shutting down"),
                Some(Ok(Err(e))) => tracing::error!("Task failed: {:#}", e),
                Some(Err(e)) => tracing::error!("Task panicked: {}", e),
                None => {}
            }
        }
    }

    controller.shutdown();

    // Let the renderer flush the goodbye line
    let _ = tokio::time::timeout(std::time::Duration::from_millis(200), async {
        while tasks.join_next().await.is_some() {}
    })
    .await;
    tasks.abort_all();

    Ok(())
}
