//! Fixture inserts for the ticketing tables.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{error::TestError, setup::TestContext};

impl TestContext {
    pub async fn insert_user(&self, user_name: &str) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_name: ActiveValue::Set(user_name.to_string()),
            email: ActiveValue::Set(format!("{user_name}@example.com")),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn insert_event(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<entity::event::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            venue: ActiveValue::Set("Main hall".to_string()),
            starts_at: ActiveValue::Set(now),
            ends_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn insert_ticket_type(
        &self,
        event_id: Uuid,
        name: &str,
        quantity: i32,
        price: f64,
    ) -> Result<entity::ticket_type::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::ticket_type::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_id: ActiveValue::Set(event_id),
            name: ActiveValue::Set(name.to_string()),
            quantity: ActiveValue::Set(quantity),
            sale: ActiveValue::Set(0),
            price: ActiveValue::Set(price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn insert_coupon(
        &self,
        user_id: Uuid,
        name: &str,
        percentage_value: f64,
    ) -> Result<entity::coupon::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::coupon::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(String::new()),
            min_quantity: ActiveValue::Set(0),
            min_price: ActiveValue::Set(0.0),
            percentage_value: ActiveValue::Set(percentage_value),
            expire_date: ActiveValue::Set(now.date()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(&self.db)
        .await?)
    }

    /// Insert a standalone payment row, bypassing the checkout workflow.
    /// Used by the list-endpoint tests that only need rows to page over.
    pub async fn insert_payment(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        customer_name: &str,
        ticket_quantity: i32,
        total_price: f64,
    ) -> Result<entity::payment::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::payment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            coupon_id: ActiveValue::Set(None),
            customer_name: ActiveValue::Set(customer_name.to_string()),
            customer_phone: ActiveValue::Set("0000000000".to_string()),
            customer_email: ActiveValue::Set(format!("{customer_name}@example.com")),
            ticket_quantity: ActiveValue::Set(ticket_quantity),
            total_price: ActiveValue::Set(total_price),
            discount_price: ActiveValue::Set(0.0),
            final_price: ActiveValue::Set(total_price),
            status: ActiveValue::Set(entity::payment::PaymentStatus::Success),
            payment_method_id: ActiveValue::Set("card".to_string()),
            payment_session_id: ActiveValue::Set(format!("cs_{}", Uuid::new_v4())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(&self.db)
        .await?)
    }
}
