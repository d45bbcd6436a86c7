//! The client list view: state plus the handlers that change it.
//!
//! Rendering stays pure (see [`render`](crate::view::render::render)). Everything
//! with a side effect, i.e. navigation and service calls, happens in the handlers
//! below.

use crate::client_actor::ClientError;
use crate::config::AdminConfig;
use crate::framework::{Published, Snapshots};
use crate::i18n::{Locale, Text};
use crate::model::{Client, ClientId};
use crate::navigation::Navigator;
use crate::notification::{try_and_notify, Notifier};
use crate::services::ClientService;
use crate::view::columns::{ColumnKey, SortDirection, SortOrder};
use crate::view::render::{render, ListPage};
use crate::view::state::ViewState;
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Path of a client's edit view.
pub fn client_path(id: ClientId) -> String {
    format!("/clients/{id}")
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("no row with id {0}")]
    UnknownRow(ClientId),
    #[error("column {0:?} is not sortable")]
    NotSortable(ColumnKey),
    #[error("invalid page number: {0}")]
    InvalidPage(usize),
    #[error("could not serialize navigation state: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result of [`RecordListView::create_record`].
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(ClientId),
    Failed(ClientError),
    /// Another create was still in flight.
    Ignored,
}

struct Inner {
    state: ViewState,
    clients: Published<Client>,
}

/// Searchable, sortable, paginated list of clients.
///
/// Handlers take `&self` and never hold the state lock across an await, so the view
/// can be shared behind an `Arc` and rendered while a create is pending.
pub struct RecordListView {
    service: ClientService,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    locale: Locale,
    inner: Mutex<Inner>,
}

impl RecordListView {
    pub fn new(
        service: ClientService,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        config: &AdminConfig,
    ) -> Self {
        Self {
            service,
            navigator,
            notifier,
            locale: config.locale,
            inner: Mutex::new(Inner {
                state: ViewState::new(config.page_size),
                clients: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    pub fn render(&self) -> Option<ListPage> {
        let inner = self.lock();
        render(inner.clients.as_deref(), &inner.state, self.locale)
    }

    /// Takes a new snapshot from the provider and resyncs the pagination total.
    pub fn on_snapshot(&self, clients: Published<Client>) {
        let mut inner = self.lock();
        if let Some(clients) = &clients {
            inner.state.pagination.total = clients.len();
            debug!(total = clients.len(), "Snapshot received");
        }
        inner.clients = clients;
    }

    /// Applies a search. Surrounding whitespace is ignored; blank text clears it.
    pub fn on_search(&self, text: &str) {
        let term = text.trim();
        let mut inner = self.lock();
        inner.state.search_term = (!term.is_empty()).then(|| term.to_owned());
        inner.state.pagination.current = 1;
        debug!(term, "Search");
    }

    /// Sorts by `column`, or restores source order when `direction` is `None`.
    pub fn on_sort(
        &self,
        column: ColumnKey,
        direction: Option<SortDirection>,
    ) -> Result<(), ViewError> {
        if !column.is_sortable() {
            return Err(ViewError::NotSortable(column));
        }
        self.lock().state.sort = direction.map(|direction| SortOrder { column, direction });
        Ok(())
    }

    pub fn on_page_change(&self, page: usize) -> Result<(), ViewError> {
        if page == 0 {
            return Err(ViewError::InvalidPage(page));
        }
        self.lock().state.pagination.current = page;
        Ok(())
    }

    /// Allocates a blank client and opens its edit view.
    ///
    /// Ignored while a previous create is still pending. `loading` is cleared once
    /// the service answers, whatever the answer.
    #[instrument(skip(self))]
    pub async fn create_record(&self) -> CreateOutcome {
        {
            let mut inner = self.lock();
            if inner.state.loading {
                debug!("Create already in flight");
                return CreateOutcome::Ignored;
            }
            inner.state.loading = true;
        }

        let result = try_and_notify(
            self.notifier.as_ref(),
            async {
                let id = self.service.create_client().await?;
                self.navigator
                    .push(&client_path(id), Some(json!({ "id": id })));
                Ok::<_, ClientError>((id, self.locale.t(Text::ClientCreated).to_owned()))
            },
            || self.lock().state.loading = false,
        )
        .await;

        match result {
            Ok(id) => {
                info!(%id, "Client created");
                CreateOutcome::Created(id)
            }
            Err(e) => {
                warn!(error = %e, "Client creation failed");
                CreateOutcome::Failed(e)
            }
        }
    }

    /// Opens the edit view of the row with `id`, passing the record along.
    pub fn activate_row(&self, id: ClientId) -> Result<(), ViewError> {
        let record = self
            .lock()
            .clients
            .as_deref()
            .and_then(|clients| clients.iter().find(|c| c.id == id))
            .cloned()
            .ok_or(ViewError::UnknownRow(id))?;
        let state = serde_json::to_value(&record)?;
        self.navigator.push(&client_path(id), Some(state));
        Ok(())
    }

    /// Feeds every snapshot from `snapshots` into the view until the provider stops.
    ///
    /// The task keeps the view, and so its service, alive. Abort the handle before
    /// shutting the provider down.
    pub fn follow(self: Arc<Self>, mut snapshots: Snapshots<Client>) -> JoinHandle<()> {
        self.on_snapshot(snapshots.current());
        tokio::spawn(async move {
            while let Some(clients) = snapshots.changed().await {
                self.on_snapshot(clients);
            }
            debug!("Snapshot feed closed");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::navigation::History;
    use crate::notification::NotificationLog;

    fn view(mock: &MockClient<Client>) -> (RecordListView, Arc<History>) {
        let history = Arc::new(History::new());
        let view = RecordListView::new(
            ClientService::new(mock.client()),
            history.clone(),
            Arc::new(NotificationLog::new()),
            &AdminConfig::default(),
        );
        (view, history)
    }

    fn collection() -> Published<Client> {
        Some(
            vec![
                Client::new(ClientId(1), "Bob", "b@x.com", "1"),
                Client::new(ClientId(2), "Ann", "a@x.com", "2"),
            ]
            .into(),
        )
    }

    #[tokio::test]
    async fn test_snapshot_sets_pagination_total() {
        let mock = MockClient::new();
        let (view, _) = view(&mock);
        assert!(view.render().is_none());

        view.on_snapshot(collection());
        assert_eq!(view.state().pagination.total, 2);

        view.on_snapshot(Some(Vec::new().into()));
        assert_eq!(view.state().pagination.total, 0);
        assert!(view.render().is_some());
    }

    #[tokio::test]
    async fn test_search_is_trimmed_and_resets_the_page() {
        let mock = MockClient::new();
        let (view, _) = view(&mock);
        view.on_page_change(4).unwrap();

        view.on_search("  b@x.com ");
        let state = view.state();
        assert_eq!(state.search_term.as_deref(), Some("b@x.com"));
        assert_eq!(state.pagination.current, 1);

        view.on_search("   ");
        assert_eq!(view.state().search_term, None);
    }

    #[tokio::test]
    async fn test_invalid_sort_and_page_requests_are_rejected() {
        let mock = MockClient::new();
        let (view, _) = view(&mock);

        assert!(matches!(
            view.on_sort(ColumnKey::Action, Some(SortDirection::Ascend)),
            Err(ViewError::NotSortable(ColumnKey::Action))
        ));
        assert!(matches!(view.on_page_change(0), Err(ViewError::InvalidPage(0))));

        view.on_sort(ColumnKey::Email, Some(SortDirection::Descend))
            .unwrap();
        view.on_sort(ColumnKey::Email, None).unwrap();
        assert_eq!(view.state().sort, None);
    }

    #[tokio::test]
    async fn test_row_activation_passes_the_record_without_key() {
        let mock = MockClient::new();
        let (view, history) = view(&mock);
        view.on_snapshot(collection());

        view.activate_row(ClientId(2)).unwrap();
        let entry = history.current().unwrap();
        assert_eq!(entry.path, "/clients/2");
        assert_eq!(
            entry.state,
            Some(json!({ "id": 2, "name": "Ann", "email": "a@x.com", "phone": "2" }))
        );

        assert!(matches!(
            view.activate_row(ClientId(9)),
            Err(ViewError::UnknownRow(ClientId(9)))
        ));
    }
}
