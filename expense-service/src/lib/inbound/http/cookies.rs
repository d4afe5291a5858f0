use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;

use crate::config::DeploymentEnvironment;

/// Name of the cookie carrying the session token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Builds the session cookie with the attributes the deployment requires.
///
/// Development: `HttpOnly; Path=/; SameSite=Lax`.
/// Production adds `Secure` and relaxes to `SameSite=None` for cross-site
/// frontends. No `Max-Age`: the token's own expiry is authoritative.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    environment: DeploymentEnvironment,
}

impl SessionCookies {
    pub fn new(environment: DeploymentEnvironment) -> Self {
        Self { environment }
    }

    pub fn session(&self, token: impl Into<String>) -> Cookie<'static> {
        let builder = Cookie::build((ACCESS_TOKEN_COOKIE, token.into()))
            .path("/")
            .http_only(true);

        if self.environment.is_production() {
            builder.secure(true).same_site(SameSite::None).build()
        } else {
            builder.same_site(SameSite::Lax).build()
        }
    }

    /// Expired, empty copy of the session cookie.
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = self.session("");
        cookie.make_removal();
        cookie
    }
}
