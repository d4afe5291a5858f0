pub mod login;
pub mod logout;
pub mod me;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;

use serde::Deserialize;

/// Username and password, as posted to both `/auth/register` and `/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}
