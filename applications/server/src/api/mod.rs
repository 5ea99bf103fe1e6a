/// API route modules
pub mod extract;
pub mod guides;
pub mod health;
pub mod users;
