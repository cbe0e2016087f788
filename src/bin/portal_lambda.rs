//! AWS Lambda HTTP entry point for the member portal
//!
//! Routes:
//! - `GET /quote?deposits=..&contribution=..` -> repayment quote JSON
//! - `GET /content` -> site reference data JSON
//! - `POST /view` with `{"state": .., "event": ..}` -> next view state
//! - `POST /login` with `{"credentials": .., "state": ..}` -> member and view state
//!
//! Environment: `PORTAL_CONFIG` (optional config JSON path), `RUST_LOG`.
//!
//! The bundled member directory starts empty; deployments verify against the
//! core banking system through `CredentialVerifier`.

use std::path::PathBuf;
use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Request, RequestExt, Response};
use lambda_runtime::Error;
use log::{info, warn};
use sacco_portal::auth::{login, AuthError, CredentialVerifier, Credentials, InMemoryVerifier};
use sacco_portal::calculator::LoanCalculator;
use sacco_portal::member::MemberInput;
use sacco_portal::{PortalConfig, SiteContent, ViewEvent, ViewState};
use serde::Deserialize;
use serde_json::{json, Value};

/// Loaded once per cold start
struct AppContext {
    config: PortalConfig,
    content: SiteContent,
    calculator: LoanCalculator,
    verifier: InMemoryVerifier,
}

impl AppContext {
    fn new(config: PortalConfig, content: SiteContent) -> Self {
        let verifier = config.verifier();
        Self {
            config,
            content,
            calculator: LoanCalculator::standard(),
            verifier,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ViewRequest {
    #[serde(default)]
    state: ViewState,
    event: ViewEvent,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    credentials: Credentials,
    #[serde(default)]
    state: ViewState,
}

fn parse_amount(name: &str, raw: Option<&str>, default: f64) -> Result<f64, String> {
    match raw {
        None => Ok(default),
        Some(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{} must be a number, got '{}'", name, text)),
    }
}

fn error_body(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

fn auth_status(err: &AuthError) -> u16 {
    match err {
        AuthError::MissingMemberId | AuthError::MissingPassword => 400,
        AuthError::InvalidCredentials => 401,
        AuthError::AccountLocked { .. } => 423,
        AuthError::ServiceUnavailable(_) => 503,
    }
}

fn view_response(ctx: &AppContext, body: &[u8]) -> (u16, Value) {
    let request: ViewRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => return (400, error_body(format!("invalid view request: {}", e))),
    };
    let next = ctx.config.apply_view(&request.state, &request.event);
    match serde_json::to_value(&next) {
        Ok(v) => (200, v),
        Err(e) => (500, error_body(e.to_string())),
    }
}

fn login_response<V: CredentialVerifier>(verifier: &V, body: &[u8]) -> (u16, Value) {
    let request: LoginRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => return (400, error_body(format!("invalid login request: {}", e))),
    };
    match login(verifier, &request.credentials, &request.state) {
        Ok((member, state)) => (200, json!({ "member": member, "state": state })),
        Err(e) => (auth_status(&e), error_body(e.to_string())),
    }
}

/// Route a request to a status code and JSON body
fn respond(
    ctx: &AppContext,
    path: &str,
    deposits: Option<&str>,
    contribution: Option<&str>,
    body: &[u8],
) -> (u16, Value) {
    let path = path.trim_end_matches('/');

    if path.ends_with("/view") {
        return view_response(ctx, body);
    }

    if path.ends_with("/login") {
        return login_response(&ctx.verifier, body);
    }

    if path.ends_with("/content") {
        return match serde_json::to_value(&ctx.content) {
            Ok(v) => (200, v),
            Err(e) => (500, error_body(e.to_string())),
        };
    }

    if path.ends_with("/quote") {
        let deposits = match parse_amount("deposits", deposits, ctx.config.default_deposits) {
            Ok(v) => v,
            Err(msg) => return (400, error_body(msg)),
        };
        let contribution = match parse_amount(
            "contribution",
            contribution,
            ctx.config.default_monthly_contribution,
        ) {
            Ok(v) => v,
            Err(msg) => return (400, error_body(msg)),
        };

        return match MemberInput::with_policy(
            deposits,
            contribution,
            ctx.config.negative_deposit_policy,
        ) {
            Ok(input) => {
                let quote = ctx.calculator.quote_input(&input);
                match serde_json::to_value(&quote) {
                    Ok(v) => (200, v),
                    Err(e) => (500, error_body(e.to_string())),
                }
            }
            Err(e) => {
                warn!("rejected quote request: {}", e);
                (400, error_body(e.to_string()))
            }
        };
    }

    (404, error_body(format!("no route for {}", path)))
}

async fn handler(ctx: Arc<AppContext>, event: Request) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let (status, body) = respond(
        &ctx,
        event.uri().path(),
        params.first("deposits"),
        params.first("contribution"),
        event.body().as_ref(),
    );

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config_path = std::env::var_os("PORTAL_CONFIG").map(PathBuf::from);
    let config = PortalConfig::load_or_default(config_path.as_deref())?;
    let content = config.site_content()?;
    info!(
        "Portal ready with {} tenders, lockout after {} failed logins",
        content.tenders.len(),
        config.max_failed_logins
    );

    let ctx = Arc::new(AppContext::new(config, content));

    run(service_fn(move |event: Request| {
        let ctx = Arc::clone(&ctx);
        async move { handler(ctx, event).await }
    }))
    .await
}
