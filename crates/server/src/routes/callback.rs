//! Login redirect and auth callback routes backed by the external provider.

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;
use web_types::login_error;

use crate::state::AppState;

/// Where a successful login lands when no usable `next` is given.
pub const DEFAULT_NEXT: &str = "/dashboard";

/// Query parameters of `/auth/login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    pub next: Option<String>,
}

/// Query parameters of `/auth/callback`.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub next: Option<String>,
}

/// Placeholder origin used to resolve `next` before it is trusted.
const SITE_ORIGIN: &str = "http://site.invalid/";

/// Keep `next` only if it is a path on this site.
///
/// The result is the path and query of `next` resolved against this site,
/// so it is always a valid `Location` value.
fn safe_next(next: Option<&str>) -> String {
    next.and_then(same_site_path)
        .unwrap_or_else(|| DEFAULT_NEXT.to_string())
}

fn same_site_path(next: &str) -> Option<String> {
    // URL parsers drop tabs and newlines, so "/\t/host" reads as "//host".
    if !next.starts_with('/') || next.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return None;
    }

    let base = Url::parse(SITE_ORIGIN).ok()?;
    let resolved = base.join(next).ok()?;
    if resolved.origin() != base.origin() {
        return None;
    }

    let mut path = resolved.path().to_string();
    if let Some(query) = resolved.query() {
        path.push('?');
        path.push_str(query);
    }
    Some(path)
}

fn login_with_error(code: &str) -> Redirect {
    Redirect::to(&format!("/login?error={code}"))
}

/// GET /auth/login - Send the browser to the provider's authorize page.
pub async fn auth_login(State(state): State<AppState>, Query(params): Query<LoginParams>) -> Redirect {
    let next = safe_next(params.next.as_deref());

    let redirect_to = match Url::parse(&state.callback_url) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("next", &next);
            url
        }
        Err(e) => {
            warn!(error = %e, "callback URL is not a valid URL");
            return login_with_error(login_error::UNAVAILABLE);
        }
    };

    match state.provider.authorize_url(redirect_to.as_str()) {
        Ok(url) => Redirect::to(url.as_str()),
        Err(e) => {
            warn!(error = %e, "could not start provider login");
            login_with_error(login_error::UNAVAILABLE)
        }
    }
}

/// GET /auth/callback - Exchange the provider's code for a session.
pub async fn auth_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        return login_with_error(login_error::INVALID_CODE);
    };

    match state.provider.exchange_code_for_session(code).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "auth callback exchanged code for session");
            Redirect::to(&safe_next(params.next.as_deref()))
        }
        Err(e) => {
            warn!(error = %e, "auth callback exchange failed");
            login_with_error(login_error::CALLBACK_FAILED)
        }
    }
}
