// src/reconciler.rs

use crate::config::Config;
use crate::diff::diff_rosters;
use crate::notify::Notifier;
use crate::roster::RosterClient;
use crate::snapshot::SnapshotStore;

/// Runs one fetch → load → diff → notify → persist cycle. Every sub-step
/// isolates its own failure; nothing here is fatal to the process, the
/// interval timer retries the whole cycle on the next tick.
pub struct Reconciler {
    client: RosterClient,
    store: SnapshotStore,
    notifier: Notifier,
    corp_id: String,
}

impl Reconciler {
    pub fn new(config: &Config, client: RosterClient, store: SnapshotStore, notifier: Notifier) -> Self {
        Self {
            client,
            store,
            notifier,
            corp_id: config.corp_id.clone(),
        }
    }

    pub async fn run_cycle(&self) {
        tracing::info!(corp_id = %self.corp_id, "checking members");

        let current = match self.client.fetch_members(&self.corp_id).await {
            Ok(members) => members,
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch members, skipping this check");
                return;
            }
        };

        let previous = match self.store.load().await {
            Ok(Some(members)) => members,
            Ok(None) => {
                tracing::info!(count = current.len(), "first run, saving current member list");
                if let Err(e) = self.store.save(&current).await {
                    tracing::error!(error = %e, "error saving members file");
                }
                return;
            }
            Err(e) => {
                // Treating a corrupt snapshot as empty would announce every
                // current member as freshly joined. Leave the file in place
                // for inspection and retry next tick.
                tracing::error!(error = %e, "unreadable snapshot, skipping this check");
                return;
            }
        };

        let diff = diff_rosters(&current, &previous);

        if !diff.joined.is_empty() {
            tracing::info!(count = diff.joined.len(), "members joined");
            for member in &diff.joined {
                self.notifier
                    .notify(&format!("**{}** has joined the corporation.", member.name))
                    .await;
            }
        }

        if !diff.left.is_empty() {
            tracing::info!(count = diff.left.len(), "members left");
            for member in &diff.left {
                self.notifier
                    .notify(&format!("**{}** has left the corporation.", member.name))
                    .await;
            }
        }

        if diff.is_empty() {
            tracing::info!("no changes detected");
        } else if let Err(e) = self.store.save(&current).await {
            tracing::error!(error = %e, "error saving members file");
        }
    }
}
