mod get_created_tickets;
