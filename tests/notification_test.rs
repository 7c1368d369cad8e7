//! Integration tests for the notification store and live delivery.

mod common;

use std::sync::Arc;

use eventhub_core::config::realtime::RealtimeConfig;
use eventhub_entity::notification::NotificationKind;
use eventhub_realtime::feed::NotificationSource;
use eventhub_realtime::{FeedState, LiveFeed, NotificationDispatcher};

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_list_returns_newest_first_with_limit() {
    let app = common::TestApp::new().await;
    let ctx = app.new_user();

    for i in 0..15 {
        app.notification_repo
            .create(ctx.user_id, "message", &format!("n{i}"), "body", None)
            .await
            .unwrap();
    }

    let listed = app.notifications.list(&ctx, None).await.unwrap();
    assert_eq!(listed.len(), 10);
    assert_eq!(listed[0].title, "n14");

    let listed_more = app.notifications.list(&ctx, Some(15)).await.unwrap();
    assert_eq!(listed_more.len(), 15);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_mark_all_read_is_idempotent() {
    let app = common::TestApp::new().await;
    let ctx = app.new_user();

    let first = app
        .notification_repo
        .create(ctx.user_id, "message", "one", "body", None)
        .await
        .unwrap();
    app.notification_repo
        .create(ctx.user_id, "message", "two", "body", None)
        .await
        .unwrap();
    app.notification_repo
        .create(ctx.user_id, "message", "three", "body", None)
        .await
        .unwrap();

    // Pre-read one so the call operates on a mixed read/unread set.
    app.notifications.mark_read(&ctx, first.id).await.unwrap();
    assert_eq!(app.notifications.unread_count(&ctx).await.unwrap(), 2);

    let flipped = app.notifications.mark_all_read(&ctx).await.unwrap();
    assert_eq!(flipped, 2);
    assert_eq!(app.notifications.unread_count(&ctx).await.unwrap(), 0);

    // Second call is a no-op in effect.
    let flipped_again = app.notifications.mark_all_read(&ctx).await.unwrap();
    assert_eq!(flipped_again, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_mark_read_scoped_to_owner() {
    let app = common::TestApp::new().await;
    let owner = app.new_user();
    let stranger = app.new_user();

    let notification = app
        .notification_repo
        .create(owner.user_id, "message", "private", "body", None)
        .await
        .unwrap();

    // A different user cannot flip someone else's notification.
    app.notifications
        .mark_read(&stranger, notification.id)
        .await
        .unwrap();
    assert_eq!(app.notifications.unread_count(&owner).await.unwrap(), 1);

    app.notifications.mark_read(&owner, notification.id).await.unwrap();
    assert_eq!(app.notifications.unread_count(&owner).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_dispatched_notification_reaches_live_feed() {
    let app = common::TestApp::new().await;
    let ctx = app.new_user();

    let source: Arc<dyn NotificationSource> = app.notification_repo.clone();
    let mut feed = LiveFeed::new(
        Arc::clone(&app.hub),
        source,
        RealtimeConfig::default(),
        ctx.user_id.into(),
    );
    feed.subscribe().await.unwrap();
    assert_eq!(feed.state(), FeedState::Live);

    let dispatcher = NotificationDispatcher::new(
        Arc::clone(&app.notification_repo),
        Arc::clone(&app.hub),
    );
    let sent = dispatcher
        .notify(
            ctx.user_id.into(),
            NotificationKind::EventUpdate,
            "Venue changed",
            "The venue moved across the street",
            None,
        )
        .await
        .unwrap();

    // The insert is durable regardless of push delivery.
    let listed = app.notifications.list(&ctx, None).await.unwrap();
    assert_eq!(listed[0].id, sent.id);

    for _ in 0..100 {
        if feed.snapshot().first().map(|n| n.id) == Some(sent.id) {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert_eq!(feed.snapshot().first().map(|n| n.id), Some(sent.id));

    feed.unsubscribe();
    assert_eq!(feed.state(), FeedState::Disconnected);
}
