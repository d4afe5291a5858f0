pub mod errors;
pub mod resolver;

pub use errors::IdentityError;
pub use resolver::require_admin;
pub use resolver::IdentityResolver;
