pub mod m20250801_000001_create_tickets;
