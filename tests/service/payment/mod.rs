mod checkout;
mod get_orders;
mod get_transactions;
