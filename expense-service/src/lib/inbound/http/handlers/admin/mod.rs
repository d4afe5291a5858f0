pub mod list_all_expenses;
pub mod list_users;

pub use list_all_expenses::list_all_expenses;
pub use list_users::list_users;
