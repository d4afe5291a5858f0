pub mod expense;
pub mod identity;
pub mod user;
