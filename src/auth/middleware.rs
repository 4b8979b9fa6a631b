//! Edge authorization middleware for axum.
//!
//! Runs once per inbound request, ahead of all route handlers: the request
//! runtime applies the gate's decision before any route logic executes.

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::auth::{cookie, AdminGate, Decision, PathClass};

/// Gate every inbound request.
///
/// Allow forwards the request unchanged (verified claims, when present, ride
/// along in request extensions). Deny is always a redirect to the login
/// entry point, never an error surfaced to downstream handlers.
pub async fn edge_gate(
    State(gate): State<AdminGate>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    // The token slot is only read for protected paths; public traffic passes
    // through without its headers being inspected.
    let token = match gate.policy().classify(&path) {
        PathClass::Protected => {
            cookie::token_from_cookies(request.headers(), gate.policy().cookie_name())
        }
        PathClass::Public | PathClass::LoginExempt => None,
    };

    match gate.authorize_at(&path, token.as_deref(), Utc::now()) {
        Decision::Allow { claims } => {
            if let Some(claims) = claims {
                request.extensions_mut().insert(claims);
            }
            next.run(request).await
        }
        Decision::Deny { redirect_to } => Redirect::to(&redirect_to).into_response(),
    }
}
