use client_admin::config::AdminConfig;
use client_admin::framework::mock::{create_mock_client, expect_create, MockClient};
use client_admin::framework::FrameworkError;
use client_admin::model::{Client, ClientId};
use client_admin::navigation::History;
use client_admin::notification::{Notification, NotificationLog};
use client_admin::services::ClientService;
use client_admin::view::{ButtonIcon, ColumnKey, CreateOutcome, RecordListView, SortDirection};
use serde_json::json;
use std::sync::Arc;

struct Harness {
    view: Arc<RecordListView>,
    history: Arc<History>,
    notifications: Arc<NotificationLog>,
}

fn harness(service: ClientService) -> Harness {
    let history = Arc::new(History::new());
    let notifications = Arc::new(NotificationLog::new());
    let view = Arc::new(RecordListView::new(
        service,
        history.clone(),
        notifications.clone(),
        &AdminConfig::default(),
    ));
    Harness {
        view,
        history,
        notifications,
    }
}

fn bob_and_ann() -> Vec<Client> {
    vec![
        Client::new(ClientId(1), "Bob", "b@x.com", "1"),
        Client::new(ClientId(2), "Ann", "a@x.com", "2"),
    ]
}

fn names(view: &RecordListView) -> Vec<String> {
    view.render()
        .expect("collection should be loaded")
        .table
        .rows
        .into_iter()
        .map(|row| row.record.name)
        .collect()
}

/// Snapshots published by the provider reach the view through `follow`.
#[tokio::test]
async fn test_followed_snapshots_update_the_view() {
    let mock = MockClient::<Client>::new();
    let h = harness(ClientService::new(mock.client()));
    let follower = h.view.clone().follow(mock.client().subscribe());
    assert!(h.view.render().is_none(), "nothing is rendered before the first snapshot");

    mock.publish(bob_and_ann());
    while h.view.render().is_none() {
        tokio::task::yield_now().await;
    }
    assert_eq!(h.view.state().pagination.total, 2);
    assert_eq!(names(&h.view), ["Bob", "Ann"]);

    follower.abort();
}

#[tokio::test]
async fn test_sorting_by_name_ascending() {
    let mock = MockClient::<Client>::new();
    let h = harness(ClientService::new(mock.client()));
    h.view.on_snapshot(Some(bob_and_ann().into()));

    h.view
        .on_sort(ColumnKey::Name, Some(SortDirection::Ascend))
        .unwrap();
    assert_eq!(names(&h.view), ["Ann", "Bob"]);
}

#[tokio::test]
async fn test_search_by_email() {
    let mock = MockClient::<Client>::new();
    let h = harness(ClientService::new(mock.client()));
    h.view.on_snapshot(Some(bob_and_ann().into()));

    h.view.on_search("b@x.com");
    let page = h.view.render().unwrap();
    assert_eq!(page.table.rows.len(), 1);
    assert_eq!(page.table.rows[0].record, bob_and_ann()[0]);
    // The total follows the collection, not the filtered rows.
    assert_eq!(page.table.pagination.total, 2);
}

#[tokio::test]
async fn test_create_navigates_to_the_new_record() {
    let mut mock = MockClient::<Client>::new();
    mock.expect_create().return_ok(ClientId(42));
    let h = harness(ClientService::new(mock.client()));

    let outcome = h.view.create_record().await;

    assert_eq!(outcome, CreateOutcome::Created(ClientId(42)));
    assert!(!h.view.state().loading);
    let entry = h.history.current().expect("navigation should happen");
    assert_eq!(entry.path, "/clients/42");
    assert_eq!(entry.state, Some(json!({ "id": 42 })));
    assert_eq!(
        h.notifications.shown(),
        [Notification::Success("Client created successfully.".into())]
    );
    mock.verify();
}

#[tokio::test]
async fn test_failed_create_resets_loading_without_navigation() {
    let mut mock = MockClient::<Client>::new();
    mock.expect_create().return_err(FrameworkError::ActorClosed);
    let h = harness(ClientService::new(mock.client()));

    let outcome = h.view.create_record().await;

    assert!(matches!(outcome, CreateOutcome::Failed(_)));
    assert!(!h.view.state().loading);
    assert!(h.history.entries().is_empty());
    assert!(matches!(
        h.notifications.shown().as_slice(),
        [Notification::Failure(message)] if message.contains("Actor closed")
    ));
    mock.verify();
}

/// While a create is pending the button is disabled and further creates are ignored.
#[tokio::test]
async fn test_second_create_is_ignored_while_one_is_in_flight() {
    let (client, mut channels) = create_mock_client::<Client>(4);
    let snapshots = client.subscribe();
    let h = harness(ClientService::new(client));
    channels.publisher.send_replace(Some(bob_and_ann().into()));
    let follower = h.view.clone().follow(snapshots);
    assert_eq!(h.view.state().pagination.total, 2);

    let view = h.view.clone();
    let pending = tokio::spawn(async move { view.create_record().await });

    let (_draft, respond_to) = expect_create(&mut channels.requests)
        .await
        .expect("Expected Create request");

    assert!(h.view.state().loading);
    let page = h.view.render().unwrap();
    assert!(page.new_button.disabled);
    assert_eq!(page.new_button.icon, ButtonIcon::Loading);
    assert_eq!(h.view.create_record().await, CreateOutcome::Ignored);

    respond_to.send(Ok(ClientId(7))).unwrap();
    assert_eq!(pending.await.unwrap(), CreateOutcome::Created(ClientId(7)));
    assert!(!h.view.state().loading);
    assert_eq!(h.history.entries().len(), 1);

    follower.abort();
}
