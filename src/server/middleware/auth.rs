use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::app::{AppState, AuthOptions},
    util::password::verify_password,
};

/// Header carrying the service API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Basic authentication over every path outside the allow-list
///
/// An `x-api-key` header is checked on its own and never falls back to Basic credentials.
/// Otherwise the `Authorization: Basic` credentials must match a stored user. Every failure
/// is answered with 401 and a `WWW-Authenticate: Basic` challenge.
pub async fn basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    if is_exempt(request.uri().path(), &state.options.auth.exempt_paths) {
        return Ok(next.run(request).await);
    }

    authenticate(&state, &state.options.auth, request.headers()).await?;

    Ok(next.run(request).await)
}

async fn authenticate(
    state: &AppState,
    options: &AuthOptions,
    headers: &HeaderMap,
) -> Result<(), AuthError> {
    if let Some(api_key) = headers.get(API_KEY_HEADER) {
        return match &options.api_key {
            Some(expected) if api_key.as_bytes() == expected.as_bytes() => Ok(()),
            _ => Err(AuthError::InvalidApiKey),
        };
    }

    let (login, password) = basic_credentials(headers)?;

    let user = UserRepository::new(&state.db)
        .get_by_login(&login)
        .await
        .map_err(|e| AuthError::LookupFailed(e.to_string()))?
        .ok_or_else(|| AuthError::UnknownLogin(login.clone()))?;

    match verify_password(&password, &user.hashed_password) {
        Ok(true) => {
            tracing::debug!(login = %login, "Authorized request");
            Ok(())
        }
        Ok(false) => Err(AuthError::WrongPassword(login)),
        Err(e) => Err(AuthError::LookupFailed(e.to_string())),
    }
}

/// Decodes `Authorization: Basic <base64(login:password)>`, splitting at the first `:`
fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, encoded) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::MalformedHeader);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedHeader)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedHeader)?;

    let (login, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedHeader)?;

    Ok((login.to_string(), password.to_string()))
}

/// A path is exempt when it equals an allow-list entry or lies below one
fn is_exempt(path: &str, exempt_paths: &[String]) -> bool {
    exempt_paths.iter().any(|exempt| {
        let exempt = exempt.trim_end_matches('/');
        !exempt.is_empty()
            && (path == exempt
                || path
                    .strip_prefix(exempt)
                    .is_some_and(|rest| rest.starts_with('/')))
    })
}
