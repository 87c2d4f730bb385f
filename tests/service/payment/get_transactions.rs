use turnstile::{
    model::paging::{ListQuery, DEFAULT_PAGE_SIZE},
    service::payment::PaymentService,
};
use turnstile_test_utils::prelude::*;
use uuid::Uuid;

fn query(user_id: Uuid) -> ListQuery {
    ListQuery {
        user_id,
        search: None,
        page: 0,
        page_size: 0,
        order_by: None,
        order_desc: false,
        take_all: false,
        start_date: None,
        end_date: None,
    }
}

/// Tests paging over payments received by an organizer's event. Expected:
/// twelve rows split into a full first page and a two-row second page, with
/// matching metadata.
#[tokio::test]
async fn pages_through_an_organizers_payments() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;

    for i in 0..12 {
        context
            .insert_payment(event.id, buyer.id, &format!("customer{i}"), 1, 10.0)
            .await?;
    }

    let service = PaymentService::new(&context.db);

    let (first_page, metadata) = service
        .get_transactions(organizer.id, &query(organizer.id))
        .await
        .unwrap();
    assert_eq!(first_page.len(), DEFAULT_PAGE_SIZE as usize);
    assert_eq!(metadata.total_count, 12);
    assert_eq!(metadata.total_pages, 2);
    assert!(!metadata.has_previous);
    assert!(metadata.has_next);

    let second = ListQuery {
        page: 2,
        ..query(organizer.id)
    };
    let (second_page, metadata) = service
        .get_transactions(organizer.id, &second)
        .await
        .unwrap();
    assert_eq!(second_page.len(), 2);
    assert_eq!(metadata.current_page, 2);
    assert!(metadata.has_previous);
    assert!(!metadata.has_next);

    Ok(())
}

/// Tests that each returned payment carries its event. Expected: every row
/// is paired with the event the payment was made against.
#[tokio::test]
async fn loads_the_event_for_each_payment() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    context
        .insert_payment(event.id, buyer.id, "Alice", 1, 10.0)
        .await?;

    let (rows, _) = PaymentService::new(&context.db)
        .get_transactions(organizer.id, &query(organizer.id))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let (_, loaded) = &rows[0];
    assert_eq!(loaded.as_ref().map(|event| event.name.as_str()), Some("RustConf"));

    Ok(())
}

/// Tests the customer-name search filter with a term in the wrong case.
/// Expected: only the matching payment comes back regardless of case, with
/// the count reflecting the filter.
#[tokio::test]
async fn filters_by_search_term_case_insensitively() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    context
        .insert_payment(event.id, buyer.id, "Alice", 1, 10.0)
        .await?;
    context
        .insert_payment(event.id, buyer.id, "Bob", 1, 10.0)
        .await?;

    let search = ListQuery {
        search: Some("ALI".to_string()),
        ..query(organizer.id)
    };
    let (rows, metadata) = PaymentService::new(&context.db)
        .get_transactions(organizer.id, &search)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.customer_name, "Alice");
    assert_eq!(metadata.total_count, 1);

    Ok(())
}

/// Tests that transactions are scoped to the organizer. Expected: payments
/// against another organizer's event are not listed.
#[tokio::test]
async fn excludes_other_organizers_events() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let rival = context.insert_user("rival").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    let rival_event = context.insert_event(rival.id, "GopherCon").await?;
    context
        .insert_payment(event.id, buyer.id, "Alice", 1, 10.0)
        .await?;
    context
        .insert_payment(rival_event.id, buyer.id, "Bob", 1, 10.0)
        .await?;

    let (rows, metadata) = PaymentService::new(&context.db)
        .get_transactions(organizer.id, &query(organizer.id))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.customer_name, "Alice");
    assert_eq!(metadata.total_count, 1);

    Ok(())
}

/// Tests the take-all switch. Expected: every matching row lands on a single
/// page regardless of the page-size clamp.
#[tokio::test]
async fn take_all_returns_every_row() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;

    for i in 0..12 {
        context
            .insert_payment(event.id, buyer.id, &format!("customer{i}"), 1, 10.0)
            .await?;
    }

    let take_all = ListQuery {
        take_all: true,
        ..query(organizer.id)
    };
    let (rows, metadata) = PaymentService::new(&context.db)
        .get_transactions(organizer.id, &take_all)
        .await
        .unwrap();

    assert_eq!(rows.len(), 12);
    assert_eq!(metadata.page_size, 12);

    Ok(())
}
