//! Integration tests for ticket queries and partitioning.

mod common;

use eventhub_service::booking::BookingOutcome;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_tickets_partition_into_upcoming_and_past() {
    let app = common::TestApp::new().await;
    let ctx = app.new_user();

    let upcoming_event = app.create_event(None, 0.0).await;
    let past_event = app.create_past_event().await;

    let BookingOutcome::Confirmed(upcoming_ticket) =
        app.bookings.book(Some(&ctx), upcoming_event.id).await.unwrap()
    else {
        panic!("booking should confirm");
    };
    let BookingOutcome::Confirmed(past_ticket) =
        app.bookings.book(Some(&ctx), past_event.id).await.unwrap()
    else {
        panic!("booking should confirm");
    };

    let partitioned = app.tickets.list_tickets(&ctx).await.unwrap();
    assert_eq!(partitioned.upcoming.len(), 1);
    assert_eq!(partitioned.past.len(), 1);
    assert_eq!(partitioned.upcoming[0].id, upcoming_ticket.id);
    assert_eq!(partitioned.past[0].id, past_ticket.id);

    // The join carries event presentation data.
    assert_eq!(partitioned.upcoming[0].event_title, upcoming_event.title);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_listing_is_newest_booking_first() {
    let app = common::TestApp::new().await;
    let ctx = app.new_user();

    let first_event = app.create_event(None, 0.0).await;
    let second_event = app.create_event(None, 0.0).await;

    app.bookings.book(Some(&ctx), first_event.id).await.unwrap();
    app.bookings.book(Some(&ctx), second_event.id).await.unwrap();

    let partitioned = app.tickets.list_tickets(&ctx).await.unwrap();
    assert_eq!(partitioned.upcoming.len(), 2);
    assert_eq!(partitioned.upcoming[0].event_id, second_event.id);
    assert_eq!(partitioned.upcoming[1].event_id, first_event.id);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn test_credential_is_stable_across_queries() {
    let app = common::TestApp::new().await;
    let ctx = app.new_user();
    let event = app.create_event(None, 0.0).await;

    let BookingOutcome::Confirmed(ticket) =
        app.bookings.book(Some(&ctx), event.id).await.unwrap()
    else {
        panic!("booking should confirm");
    };

    // Rendering the credential is a pure read; repeated queries return the
    // same stored string.
    let once = app.tickets.find_ticket(&ctx, event.id).await.unwrap().unwrap();
    let twice = app.tickets.find_ticket(&ctx, event.id).await.unwrap().unwrap();
    assert_eq!(once.qr_code, ticket.qr_code);
    assert_eq!(twice.qr_code, ticket.qr_code);
}
