pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_event_table;
mod m20260801_000003_create_ticket_type_table;
mod m20260801_000004_create_coupon_table;
mod m20260801_000005_create_payment_table;
mod m20260801_000006_create_payment_line_table;
mod m20260801_000007_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_event_table::Migration),
            Box::new(m20260801_000003_create_ticket_type_table::Migration),
            Box::new(m20260801_000004_create_coupon_table::Migration),
            Box::new(m20260801_000005_create_payment_table::Migration),
            Box::new(m20260801_000006_create_payment_line_table::Migration),
            Box::new(m20260801_000007_create_ticket_table::Migration),
        ]
    }
}
