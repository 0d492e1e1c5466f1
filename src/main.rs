// src/main.rs

use std::error;

use eve_member_webhook_rusty::config::Config;
use eve_member_webhook_rusty::notify::Notifier;
use eve_member_webhook_rusty::reconciler::Reconciler;
use eve_member_webhook_rusty::roster::RosterClient;
use eve_member_webhook_rusty::snapshot::SnapshotStore;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    config.validate()?;

    tracing::info!(
        corp_id = %config.corp_id,
        interval_ms = config.check_interval_ms,
        webhook_configured = config.webhook_target().is_some(),
        "starting EVE member webhook monitor"
    );

    let client = RosterClient::new()?;
    let store = SnapshotStore::new(&config.data_dir);
    let notifier = Notifier::new(config.webhook_target().map(str::to_owned))?;
    let reconciler = Reconciler::new(&config, client, store, notifier);

    // The first tick completes immediately, so the first check runs at
    // startup and then once per interval until the process is killed.
    let mut ticker = tokio::time::interval(config.check_interval());
    loop {
        ticker.tick().await;
        reconciler.run_cycle().await;
    }
}
