//! Register, login and logout flows.

use crate::commands::{self, ApiClient, Session, Transport};
use crate::config::Routes;
use crate::error::ApiError;
use crate::models::FormFields;
use crate::platform::{Dialogs, Navigator};

pub const AUTH_FAILED_NOTICE: &str = "Could not reach the server. Please try again.";

/// Alert the server's message either way; redirect on success
pub async fn register<T, S, P>(api: &ApiClient<T, S>, platform: &P, fields: &FormFields, routes: &Routes) -> bool
where
    T: Transport,
    S: Session,
    P: Dialogs + Navigator,
{
    match commands::register(api, fields).await {
        Ok(response) => {
            platform.alert(response.message().unwrap_or_default());
            if response.is_success() {
                platform.redirect(&routes.after_register);
            }
            response.is_success()
        }
        Err(err) => {
            log::error!("registration failed: {}", err);
            platform.alert(AUTH_FAILED_NOTICE);
            false
        }
    }
}

/// Redirect on success, otherwise alert the server's message
pub async fn login<T, S, P>(api: &ApiClient<T, S>, platform: &P, fields: &FormFields, routes: &Routes) -> bool
where
    T: Transport,
    S: Session,
    P: Dialogs + Navigator,
{
    match commands::login(api, fields).await.and_then(|response| response.into_result()) {
        Ok(_) => {
            platform.redirect(&routes.after_login);
            true
        }
        Err(ApiError::Rejected { message, .. }) => {
            platform.alert(&message);
            false
        }
        Err(err) => {
            log::error!("login failed: {}", err);
            platform.alert(AUTH_FAILED_NOTICE);
            false
        }
    }
}

/// Redirect only on success; failures are logged
pub async fn logout<T, S, N>(api: &ApiClient<T, S>, navigator: &N, routes: &Routes) -> bool
where
    T: Transport,
    S: Session,
    N: Navigator,
{
    match commands::logout(api).await {
        Ok(response) if response.is_success() => {
            navigator.redirect(&routes.after_logout);
            true
        }
        Ok(response) => {
            log::warn!("logout rejected with HTTP {}", response.status);
            false
        }
        Err(err) => {
            log::error!("logout failed: {}", err);
            false
        }
    }
}
