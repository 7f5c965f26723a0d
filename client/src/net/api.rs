//! REST API helpers for the auth flow.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth failures degrade
//! UI behavior without crashing hydration. The session fetch maps into
//! `tabguard::FetchError` so it can be handed straight to `InitGuard`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::Deserialize;
use tabguard::{FetchError, Identity};

#[cfg(any(test, feature = "hydrate"))]
fn request_code_failed_message(status: u16) -> String {
    format!("request code failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_code_failed_message(status: u16) -> String {
    format!("verify code failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_failed_message(status: u16) -> String {
    match status {
        409 => "An account with that email already exists.".to_owned(),
        _ => format!("signup failed: {status}"),
    }
}

/// 401/403 from the identity endpoint mean "signed out", not a failure.
#[cfg(any(test, feature = "hydrate"))]
fn is_signed_out_status(status: u16) -> bool {
    status == 401 || status == 403
}

/// Fetch the current session from `/api/auth/me`.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for unexpected statuses and
/// [`FetchError::Unavailable`] for transport/decode failures or on the server.
pub async fn fetch_session() -> Result<Option<Identity>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;
        if is_signed_out_status(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let user: super::types::User = resp
            .json()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;
        Ok(Some(Identity::from(user.id)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable("not available on server".to_owned()))
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

#[cfg(feature = "hydrate")]
#[derive(Deserialize)]
struct RequestEmailCodeResponse {
    ok: bool,
    code: Option<String>,
}

#[cfg(feature = "hydrate")]
#[derive(Deserialize)]
struct OkResponse {
    ok: bool,
}

/// Request an email access code. Returns the echoed code in dev setups.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_code_failed_message(resp.status()));
        }
        let body: RequestEmailCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Exchange an email + access code for a session cookie.
///
/// # Errors
///
/// Returns an error string if verification fails.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_code_failed_message(resp.status()));
        }
        let body: OkResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("verify code failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns a user-facing error string if registration fails.
pub async fn sign_up(name: &str, email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(signup_failed_message(resp.status()));
        }
        let body: OkResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("signup failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email);
        Err("not available on server".to_owned())
    }
}
