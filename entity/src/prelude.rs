pub use super::coupon::Entity as Coupon;
pub use super::event::Entity as Event;
pub use super::payment::Entity as Payment;
pub use super::payment_line::Entity as PaymentLine;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_type::Entity as TicketType;
pub use super::user::Entity as User;
