//! # Client Admin Demo
//!
//! Starts the client store, seeds a few records, and drives the client list the way
//! the console would: follow snapshots, create a record, search, sort, open a row.

use clap::Parser;
use client_admin::config::{AdminConfig, DEFAULT_PAGE_SIZE};
use client_admin::framework::ActorClient;
use client_admin::i18n::Locale;
use client_admin::lifecycle::{setup_tracing, AdminSystem};
use client_admin::model::ClientUpdate;
use client_admin::navigation::History;
use client_admin::notification::NotificationLog;
use client_admin::view::{ColumnKey, CreateOutcome, RecordListView, SortDirection};
use std::error::Error;
use std::sync::Arc;
use tracing::{info, Instrument};

/// `client-admin` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "client-admin", about = "Client list demo", version)]
struct CliArgs {
    /// Console language (`en` or `fr`).
    #[arg(long, env = "CLIENT_ADMIN_LOCALE", default_value = "en")]
    locale: Locale,
    /// Rows per table page.
    #[arg(long, env = "CLIENT_ADMIN_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    /// Number of sample clients to create before showing the list.
    #[arg(long, env = "CLIENT_ADMIN_SEED", default_value_t = 3)]
    seed: u32,
}

const SAMPLE_NAMES: [&str; 6] = ["Bob", "ann", "Émile", "Carla", "dmitri", "Zoé"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();
    let args = CliArgs::parse();
    let config = AdminConfig::new(args.locale, args.page_size)?;
    info!(locale = %config.locale, page_size = config.page_size, "Starting client admin");

    let system = AdminSystem::new(&config);
    let service = system.client_service.clone();

    let span = tracing::info_span!("seeding");
    async {
        for n in 0..args.seed {
            let id = service.create_client().await?;
            let name = SAMPLE_NAMES[n as usize % SAMPLE_NAMES.len()];
            let update = ClientUpdate {
                name: Some(name.to_owned()),
                email: Some(format!("{}@example.com", name.to_lowercase())),
                phone: Some(format!("555-01{n:02}")),
            };
            service.update_client(id, update).await?;
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let history = Arc::new(History::new());
    let notifications = Arc::new(NotificationLog::new());
    let view = Arc::new(RecordListView::new(
        service.clone(),
        history.clone(),
        notifications.clone(),
        &config,
    ));
    let follower = view.clone().follow(service.subscribe());

    if let CreateOutcome::Created(id) = view.create_record().await {
        info!(%id, "Opened edit view for the new client");
    }
    // Let the follower pick up the snapshot published by the create.
    tokio::task::yield_now().await;

    view.on_sort(ColumnKey::Name, Some(SortDirection::Ascend))?;
    if let Some(page) = view.render() {
        for row in &page.table.rows {
            info!(id = %row.key, name = %row.record.name, email = %row.record.email, "Row");
        }
        info!(total = page.table.pagination.total, "Rendered client list");
    }

    view.on_search("example.com");
    if let Some(row) = view.render().and_then(|page| page.table.rows.into_iter().next()) {
        view.activate_row(row.key)?;
    }
    info!(visits = history.entries().len(), notifications = notifications.shown().len(), "Session done");

    follower.abort();
    let _ = follower.await;
    drop(view);
    drop(service);
    system.shutdown().await?;
    Ok(())
}
