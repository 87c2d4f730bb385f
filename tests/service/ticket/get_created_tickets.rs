use turnstile::{
    error::Error,
    model::{
        paging::ListQuery,
        payment::{CheckoutRequest, TicketLineItem},
    },
    service::{payment::PaymentService, ticket::TicketService},
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

async fn checkout(
    context: &TestContext,
    event_id: Uuid,
    user_id: Uuid,
    ticket_type: &entity::ticket_type::Model,
    quantity: i32,
) -> entity::payment::Model {
    let total = ticket_type.price * f64::from(quantity);

    PaymentService::new(&context.db)
        .checkout(CheckoutRequest {
            event_id,
            user_id,
            coupon_id: None,
            customer_name: "Jamie Doe".to_string(),
            customer_phone: "0123456789".to_string(),
            customer_email: "jamie@example.com".to_string(),
            payment_method_id: "card".to_string(),
            payment_session_id: format!("cs_{}", Uuid::new_v4()),
            total_price: total,
            discount_price: 0.0,
            final_price: total,
            items: vec![TicketLineItem {
                ticket_type_id: ticket_type.id,
                name: ticket_type.name.clone(),
                quantity,
                price: ticket_type.price,
            }],
        })
        .await
        .unwrap()
}

/// Tests listing the tickets a buyer holds. Expected: only that buyer's
/// tickets come back, each paired with its ticket type name.
#[tokio::test]
async fn lists_the_buyers_tickets_with_their_type() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let other = context.insert_user("other").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    let standard = context
        .insert_ticket_type(event.id, "Standard", 100, 10.0)
        .await?;

    checkout(&context, event.id, buyer.id, &standard, 3).await;
    checkout(&context, event.id, other.id, &standard, 2).await;

    let (rows, metadata) = TicketService::new(&context.db)
        .get_created_tickets(buyer.id, &query(buyer.id))
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(metadata.total_count, 3);
    assert!(rows.iter().all(|(ticket, ticket_type)| {
        ticket.user_id == buyer.id
            && ticket_type.as_ref().map(|t| t.name.as_str()) == Some("Standard")
    }));

    Ok(())
}

/// Tests searching tickets by their code in lowercase. Expected: exactly the
/// ticket whose code matches the search term, despite codes being stored in
/// uppercase.
#[tokio::test]
async fn filters_by_ticket_code() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    let standard = context
        .insert_ticket_type(event.id, "Standard", 100, 10.0)
        .await?;

    checkout(&context, event.id, buyer.id, &standard, 2).await;

    let (all, _) = TicketService::new(&context.db)
        .get_created_tickets(buyer.id, &query(buyer.id))
        .await
        .unwrap();
    let wanted = all[0].0.ticket_no.clone();

    let search = ListQuery {
        search: Some(wanted.to_lowercase()),
        ..query(buyer.id)
    };
    let (rows, metadata) = TicketService::new(&context.db)
        .get_created_tickets(buyer.id, &search)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.ticket_no, wanted);
    assert_eq!(metadata.total_count, 1);

    Ok(())
}

/// Tests ordering by a column outside the sortable set. Expected: the
/// request is rejected before reaching the database.
#[tokio::test]
async fn rejects_an_unsortable_column() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let buyer = context.insert_user("buyer").await?;

    let ordered = ListQuery {
        order_by: Some("ticket_no; DROP TABLE ticket".to_string()),
        ..query(buyer.id)
    };
    let result = TicketService::new(&context.db)
        .get_created_tickets(buyer.id, &ordered)
        .await;

    assert!(matches!(result, Err(Error::ParseError(_))));

    Ok(())
}

/// Tests paging over a buyer's tickets. Expected: a twelve-ticket order
/// splits into a ten-row page and a two-row page.
#[tokio::test]
async fn pages_through_tickets() -> Result<(), TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;
    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    let standard = context
        .insert_ticket_type(event.id, "Standard", 100, 10.0)
        .await?;

    checkout(&context, event.id, buyer.id, &standard, 12).await;

    let service = TicketService::new(&context.db);
    let (first_page, metadata) = service
        .get_created_tickets(buyer.id, &query(buyer.id))
        .await
        .unwrap();
    assert_eq!(first_page.len(), 10);
    assert_eq!(metadata.total_pages, 2);

    let second = ListQuery {
        page: 2,
        ..query(buyer.id)
    };
    let (second_page, metadata) = service
        .get_created_tickets(buyer.id, &second)
        .await
        .unwrap();
    assert_eq!(second_page.len(), 2);
    assert!(!metadata.has_next);

    Ok(())
}
