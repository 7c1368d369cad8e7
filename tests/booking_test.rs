//! Integration tests for the booking engine.

mod common;

use eventhub_core::error::ErrorKind;
use eventhub_service::booking::BookingOutcome;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_booking_without_session_is_rejected() {
    let app = common::TestApp::new().await;
    let event = app.create_event(Some(10), 0.0).await;

    let err = app.bookings.book(None, event.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_successful_booking_creates_ticket_and_notification() {
    let app = common::TestApp::new().await;
    let event = app.create_event(Some(10), 25.0).await;
    let ctx = app.new_user();

    let outcome = app.bookings.book(Some(&ctx), event.id).await.unwrap();
    let ticket = match outcome {
        BookingOutcome::Confirmed(ticket) => ticket,
        other => panic!("expected Confirmed, got {other:?}"),
    };

    assert_eq!(ticket.event_id, event.id);
    assert_eq!(ticket.user_id, ctx.user_id);
    assert_eq!(ticket.price_paid, 25.0);
    assert!(!ticket.is_used);
    assert!(ticket.qr_code.starts_with(&format!("{}-{}-", event.id, ctx.user_id)));

    // Exactly one derived notification referencing the event.
    let notifications = app.notifications.list(&ctx, None).await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "ticket_booked");
    assert_eq!(notifications[0].related_id, Some(event.id));
    assert!(notifications[0].is_unread());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_second_booking_returns_already_booked() {
    let app = common::TestApp::new().await;
    let event = app.create_event(Some(10), 0.0).await;
    let ctx = app.new_user();

    let first = app.bookings.book(Some(&ctx), event.id).await.unwrap();
    let BookingOutcome::Confirmed(ticket) = first else {
        panic!("first booking should confirm");
    };

    let second = app.bookings.book(Some(&ctx), event.id).await.unwrap();
    match second {
        BookingOutcome::AlreadyBooked { existing } => assert_eq!(existing.id, ticket.id),
        other => panic!("expected AlreadyBooked, got {other:?}"),
    }

    // No extra row, no extra notification.
    assert_eq!(app.events.attendee_count(event.id).await.unwrap(), 1);
    assert_eq!(app.notifications.list(&ctx, None).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_booking_full_event_is_capacity_exceeded() {
    let app = common::TestApp::new().await;
    let event = app.create_event(Some(1), 0.0).await;

    let holder = app.new_user();
    app.bookings.book(Some(&holder), event.id).await.unwrap();

    let late = app.new_user();
    let err = app.bookings.book(Some(&late), event.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::CapacityExceeded);

    // The failed attempt created neither a ticket nor a notification.
    assert_eq!(app.events.attendee_count(event.id).await.unwrap(), 1);
    assert!(app.notifications.list(&late, None).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_concurrent_bookings_never_oversell() {
    let app = common::TestApp::new().await;
    let capacity = 5;
    let event = app.create_event(Some(capacity), 0.0).await;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let bookings = app.bookings.clone();
        let ctx = app.new_user();
        let event_id = event.id;
        handles.push(tokio::spawn(async move {
            bookings.book(Some(&ctx), event_id).await
        }));
    }

    let mut confirmed = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(BookingOutcome::Confirmed(_)) => confirmed += 1,
            Ok(BookingOutcome::AlreadyBooked { .. }) => {}
            Err(e) if e.kind == ErrorKind::CapacityExceeded => rejected += 1,
            Err(e) => panic!("unexpected booking error: {e}"),
        }
    }

    assert_eq!(confirmed, capacity);
    assert_eq!(rejected, 20 - capacity as usize);
    assert_eq!(
        app.events.attendee_count(event.id).await.unwrap(),
        i64::from(capacity)
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_unlimited_capacity_event_accepts_many() {
    let app = common::TestApp::new().await;
    let event = app.create_event(None, 0.0).await;

    for _ in 0..25 {
        let ctx = app.new_user();
        let outcome = app.bookings.book(Some(&ctx), event.id).await.unwrap();
        assert!(matches!(outcome, BookingOutcome::Confirmed(_)));
    }

    assert_eq!(app.events.attendee_count(event.id).await.unwrap(), 25);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_price_paid_is_frozen_at_booking_time() {
    let app = common::TestApp::new().await;
    let event = app.create_event(Some(10), 15.0).await;
    let ctx = app.new_user();

    let BookingOutcome::Confirmed(ticket) =
        app.bookings.book(Some(&ctx), event.id).await.unwrap()
    else {
        panic!("booking should confirm");
    };

    // A later event price edit must not retroactively change the ticket.
    sqlx::query("UPDATE events SET price = 99.0 WHERE id = $1")
        .bind(event.id)
        .execute(&app.pool)
        .await
        .unwrap();

    let stored = app.tickets.find_ticket(&ctx, event.id).await.unwrap().unwrap();
    assert_eq!(stored.id, ticket.id);
    assert_eq!(stored.price_paid, 15.0);
}
