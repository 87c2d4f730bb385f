use std::collections::HashSet;

use sea_orm::EntityTrait;
use turnstile::{
    error::{checkout::CheckoutError, Error},
    model::payment::{CheckoutRequest, TicketLineItem},
    service::payment::PaymentService,
};
use turnstile_test_utils::prelude::*;
use uuid::Uuid;

struct Checkout {
    context: TestContext,
    event: entity::event::Model,
    buyer: entity::user::Model,
}

async fn setup() -> Result<Checkout, TestError> {
    let context = TestBuilder::new().with_core_tables().build().await?;

    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;

    Ok(Checkout {
        context,
        event,
        buyer,
    })
}

fn request(
    event_id: Uuid,
    user_id: Uuid,
    items: Vec<TicketLineItem>,
) -> CheckoutRequest {
    let total_price: f64 = items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum();

    CheckoutRequest {
        event_id,
        user_id,
        coupon_id: None,
        customer_name: "Jamie Doe".to_string(),
        customer_phone: "0123456789".to_string(),
        customer_email: "jamie@example.com".to_string(),
        payment_method_id: "card".to_string(),
        payment_session_id: format!("cs_{}", Uuid::new_v4()),
        total_price,
        discount_price: 0.0,
        final_price: total_price,
        items,
    }
}

fn line(ticket_type: &entity::ticket_type::Model, quantity: i32) -> TicketLineItem {
    TicketLineItem {
        ticket_type_id: ticket_type.id,
        name: ticket_type.name.clone(),
        quantity,
        price: ticket_type.price,
    }
}

/// Tests a checkout with two line items. Expected: one payment, one payment
/// line per item, one coded ticket per unit of quantity, and the sale count
/// of each ticket type bumped by the purchased quantity.
#[tokio::test]
async fn creates_payment_lines_and_tickets() -> Result<(), TestError> {
    let checkout = setup().await?;
    let standard = checkout
        .context
        .insert_ticket_type(checkout.event.id, "Standard", 100, 10.0)
        .await?;
    let vip = checkout
        .context
        .insert_ticket_type(checkout.event.id, "VIP", 10, 25.0)
        .await?;

    let payment = PaymentService::new(&checkout.context.db)
        .checkout(request(
            checkout.event.id,
            checkout.buyer.id,
            vec![line(&standard, 3), line(&vip, 2)],
        ))
        .await
        .unwrap();

    assert_eq!(payment.ticket_quantity, 5);
    assert_eq!(payment.status, entity::payment::PaymentStatus::Success);
    assert_eq!(payment.final_price, 80.0);

    let lines = entity::prelude::PaymentLine::find()
        .all(&checkout.context.db)
        .await?;
    assert_eq!(lines.len(), 2);
    assert!(lines
        .iter()
        .all(|payment_line| payment_line.payment_id == payment.id));
    let standard_line = lines
        .iter()
        .find(|payment_line| payment_line.ticket_type_id == standard.id)
        .unwrap();
    assert_eq!(standard_line.quantity, 3);
    assert_eq!(standard_line.total_price, 30.0);

    let tickets = entity::prelude::Ticket::find()
        .all(&checkout.context.db)
        .await?;
    assert_eq!(tickets.len(), 5);
    assert_eq!(
        tickets
            .iter()
            .filter(|ticket| ticket.ticket_type_id == standard.id)
            .count(),
        3
    );
    assert_eq!(
        tickets
            .iter()
            .filter(|ticket| ticket.ticket_type_id == vip.id)
            .count(),
        2
    );
    assert!(tickets.iter().all(|ticket| {
        ticket.payment_id == payment.id
            && ticket.status == entity::ticket::TicketStatus::Valid
            && ticket.ticket_no.starts_with("TK-")
    }));

    let codes: HashSet<&str> = tickets.iter().map(|ticket| ticket.ticket_no.as_str()).collect();
    assert_eq!(codes.len(), 5);

    let standard = entity::prelude::TicketType::find_by_id(standard.id)
        .one(&checkout.context.db)
        .await?
        .unwrap();
    assert_eq!(standard.sale, 3);
    let vip = entity::prelude::TicketType::find_by_id(vip.id)
        .one(&checkout.context.db)
        .await?
        .unwrap();
    assert_eq!(vip.sale, 2);

    Ok(())
}

/// Tests a checkout where the ticket insert fails because the ticket table
/// is missing. Expected: the payment, its lines, and the sale bump are all
/// rolled back.
#[tokio::test]
async fn rolls_back_when_ticket_insert_fails() -> Result<(), TestError> {
    let context = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Event)
        .with_table(entity::prelude::TicketType)
        .with_table(entity::prelude::Coupon)
        .with_table(entity::prelude::Payment)
        .with_table(entity::prelude::PaymentLine)
        .build()
        .await?;

    let organizer = context.insert_user("organizer").await?;
    let buyer = context.insert_user("buyer").await?;
    let event = context.insert_event(organizer.id, "RustConf").await?;
    let standard = context
        .insert_ticket_type(event.id, "Standard", 100, 10.0)
        .await?;

    let result = PaymentService::new(&context.db)
        .checkout(request(event.id, buyer.id, vec![line(&standard, 2)]))
        .await;
    assert!(result.is_err());

    let payments = entity::prelude::Payment::find().all(&context.db).await?;
    assert!(payments.is_empty());
    let lines = entity::prelude::PaymentLine::find().all(&context.db).await?;
    assert!(lines.is_empty());

    let standard = entity::prelude::TicketType::find_by_id(standard.id)
        .one(&context.db)
        .await?
        .unwrap();
    assert_eq!(standard.sale, 0);

    Ok(())
}

/// Tests a checkout requesting more tickets than the type has left.
/// Expected: a sold-out error and no rows written.
#[tokio::test]
async fn rejects_an_oversell() -> Result<(), TestError> {
    let checkout = setup().await?;
    let scarce = checkout
        .context
        .insert_ticket_type(checkout.event.id, "Scarce", 2, 10.0)
        .await?;

    let result = PaymentService::new(&checkout.context.db)
        .checkout(request(
            checkout.event.id,
            checkout.buyer.id,
            vec![line(&scarce, 3)],
        ))
        .await;

    assert!(matches!(
        result,
        Err(Error::CheckoutError(CheckoutError::SoldOut {
            remaining: 2,
            requested: 3,
            ..
        }))
    ));

    let payments = entity::prelude::Payment::find()
        .all(&checkout.context.db)
        .await?;
    assert!(payments.is_empty());

    let scarce = entity::prelude::TicketType::find_by_id(scarce.id)
        .one(&checkout.context.db)
        .await?
        .unwrap();
    assert_eq!(scarce.sale, 0);

    Ok(())
}

/// Tests a checkout with an empty cart. Expected: an empty-order error.
#[tokio::test]
async fn rejects_an_empty_cart() -> Result<(), TestError> {
    let checkout = setup().await?;

    let result = PaymentService::new(&checkout.context.db)
        .checkout(request(checkout.event.id, checkout.buyer.id, Vec::new()))
        .await;

    assert!(matches!(
        result,
        Err(Error::CheckoutError(CheckoutError::EmptyOrder))
    ));

    Ok(())
}

/// Tests a checkout with a zero-quantity line item. Expected: a
/// non-positive-quantity error naming the ticket type.
#[tokio::test]
async fn rejects_a_zero_quantity_item() -> Result<(), TestError> {
    let checkout = setup().await?;
    let standard = checkout
        .context
        .insert_ticket_type(checkout.event.id, "Standard", 100, 10.0)
        .await?;

    let result = PaymentService::new(&checkout.context.db)
        .checkout(request(
            checkout.event.id,
            checkout.buyer.id,
            vec![line(&standard, 0)],
        ))
        .await;

    match result {
        Err(Error::CheckoutError(CheckoutError::ZeroQuantityItem(id))) => {
            assert_eq!(id, standard.id);
        }
        other => panic!("Expected a zero-quantity error, got {other:?}"),
    }

    Ok(())
}

/// Tests a checkout naming a ticket type that does not exist. Expected: a
/// not-found error.
#[tokio::test]
async fn rejects_an_unknown_ticket_type() -> Result<(), TestError> {
    let checkout = setup().await?;

    let missing = TicketLineItem {
        ticket_type_id: Uuid::new_v4(),
        name: "Ghost".to_string(),
        quantity: 1,
        price: 10.0,
    };
    let result = PaymentService::new(&checkout.context.db)
        .checkout(request(checkout.event.id, checkout.buyer.id, vec![missing]))
        .await;

    assert!(matches!(
        result,
        Err(Error::CheckoutError(CheckoutError::TicketTypeNotFound(_)))
    ));

    Ok(())
}
