use turnstile::{error::Error, model::paging::ListQuery, service::payment::PaymentService};
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

/// Tests that orders are scoped to the buyer. Expected: only the buyer's own
/// payments come back, each carrying its event.
#[tokio::test]
async fn lists_only_the_buyers_payments() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let other = context.insert_user("other").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    context
        .insert_payment(event.id, buyer.id, "Alice", 1, 10.0)
        .await?;
    context
        .insert_payment(event.id, other.id, "Bob", 1, 10.0)
        .await?;

    let (rows, metadata) = PaymentService::new(&context.db)
        .get_orders(buyer.id, &query(buyer.id))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.user_id, buyer.id);
    assert_eq!(
        rows[0].1.as_ref().map(|event| event.name.as_str()),
        Some("RustConf")
    );
    assert_eq!(metadata.total_count, 1);

    Ok(())
}

/// Tests the event-name search over orders. Expected: only payments against
/// the matching event are listed.
#[tokio::test]
async fn filters_by_event_name() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let rust_conf = context.insert_event(organizer.id, "RustConf").await?;
    let gopher_con = context.insert_event(organizer.id, "GopherCon").await?;
    context
        .insert_payment(rust_conf.id, buyer.id, "Alice", 1, 10.0)
        .await?;
    context
        .insert_payment(gopher_con.id, buyer.id, "Alice", 1, 10.0)
        .await?;

    let search = ListQuery {
        search: Some("rust".to_string()),
        ..query(buyer.id)
    };
    let (rows, metadata) = PaymentService::new(&context.db)
        .get_orders(buyer.id, &search)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.event_id, rust_conf.id);
    assert_eq!(metadata.total_count, 1);

    Ok(())
}

/// Tests searching orders by the organizer's name. Expected: the search
/// matches the name of the user who runs the event, in any case, while the
/// buyer's own name matches nothing.
#[tokio::test]
async fn filters_by_organizer_name() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("olivia").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    context
        .insert_payment(event.id, buyer.id, "Alice", 1, 10.0)
        .await?;

    let service = PaymentService::new(&context.db);

    let by_organizer = ListQuery {
        search: Some("OLIV".to_string()),
        ..query(buyer.id)
    };
    let (rows, metadata) = service.get_orders(buyer.id, &by_organizer).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(metadata.total_count, 1);

    let by_buyer = ListQuery {
        search: Some("buyer".to_string()),
        ..query(buyer.id)
    };
    let (rows, metadata) = service.get_orders(buyer.id, &by_buyer).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(metadata.total_count, 0);

    Ok(())
}

/// Tests ordering by a column outside the sortable set. Expected: the
/// request is rejected before reaching the database.
#[tokio::test]
async fn rejects_an_unsortable_column() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let buyer = context.insert_user("buyer").await?;

    let ordered = ListQuery {
        order_by: Some("customer_name; DROP TABLE payment".to_string()),
        ..query(buyer.id)
    };
    let result = PaymentService::new(&context.db)
        .get_orders(buyer.id, &ordered)
        .await;

    assert!(matches!(result, Err(Error::ParseError(_))));

    Ok(())
}

/// Tests ordering by an explicit column. Expected: rows come back sorted by
/// customer name ascending.
#[tokio::test]
async fn orders_by_the_requested_column() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    for name in ["Cid", "Alice", "Bob"] {
        context.insert_payment(event.id, buyer.id, name, 1, 10.0).await?;
    }

    let ordered = ListQuery {
        order_by: Some("customer_name".to_string()),
        ..query(buyer.id)
    };
    let (rows, _) = PaymentService::new(&context.db)
        .get_orders(buyer.id, &ordered)
        .await
        .unwrap();

    let names: Vec<&str> = rows
        .iter()
        .map(|(payment, _)| payment.customer_name.as_str())
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Cid"]);

    Ok(())
}
