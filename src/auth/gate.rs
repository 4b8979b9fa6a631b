//! Edge authorization gate: path classification and the allow/deny decision.
//!
//! The decision core is a pure function of `(path, attached token, now)`.
//! It holds no mutable state and performs no I/O; the axum middleware in
//! [`crate::auth::middleware`] is a thin adapter around it.

use chrono::{DateTime, Utc};

use crate::auth::token::{Claims, TokenService};

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Outside the protected root; never inspected.
    Public,
    /// Inside the protected root; requires a valid token.
    Protected,
    /// The login carve-out inside the protected root; always allowed so a
    /// client with an expired token can still reach the login form.
    LoginExempt,
}

/// Outcome of gating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Forward the request unchanged. Claims are present only when a token
    /// was actually verified (protected paths).
    Allow { claims: Option<Claims> },
    /// Steer the client to the login entry point.
    Deny { redirect_to: String },
}

/// Static protected-path set: one protected root, one login carve-out.
#[derive(Debug, Clone)]
pub struct GatePolicy {
    admin_root: String,
    login_path: String,
    cookie_name: String,
}

impl GatePolicy {
    pub fn new(admin_root: String, login_path: String, cookie_name: String) -> Self {
        Self {
            admin_root,
            login_path,
            cookie_name,
        }
    }

    /// The cookie slot the gate reads the token from.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// The protected root all admin routes live under.
    pub fn admin_root(&self) -> &str {
        &self.admin_root
    }

    /// The exempt login entry point (also the deny redirect target).
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Classify a request path. Exactly one classification applies.
    pub fn classify(&self, path: &str) -> PathClass {
        let path = path.trim_end_matches('/');
        if !is_under(path, &self.admin_root) {
            return PathClass::Public;
        }
        if path == self.login_path.trim_end_matches('/') {
            PathClass::LoginExempt
        } else {
            PathClass::Protected
        }
    }
}

/// Prefix match on path-segment boundaries, so `/admin` does not
/// capture `/administrator`.
fn is_under(path: &str, root: &str) -> bool {
    path == root
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// The gate itself: policy plus the verification key material.
#[derive(Clone)]
pub struct AdminGate {
    policy: GatePolicy,
    tokens: TokenService,
}

impl AdminGate {
    pub fn new(policy: GatePolicy, tokens: TokenService) -> Self {
        Self { policy, tokens }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Decide one request. Pure: same `(path, token, now)` always yields the
    /// same decision. Every verification failure collapses to the same Deny;
    /// the failure kind is logged, never surfaced.
    pub fn authorize_at(
        &self,
        path: &str,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Decision {
        match self.policy.classify(path) {
            PathClass::Public | PathClass::LoginExempt => Decision::Allow { claims: None },
            PathClass::Protected => match self.tokens.verify_at(token.unwrap_or(""), now) {
                Ok(claims) => Decision::Allow {
                    claims: Some(claims),
                },
                Err(reason) => {
                    tracing::debug!(path = %path, reason = %reason, "Gate denied request");
                    Decision::Deny {
                        redirect_to: self.policy.login_path.clone(),
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn gate() -> AdminGate {
        gate_with_secret(SECRET)
    }

    fn gate_with_secret(secret: &str) -> AdminGate {
        AdminGate::new(
            GatePolicy::new(
                "/admin".to_string(),
                "/admin/login".to_string(),
                "admin_token".to_string(),
            ),
            TokenService::new(secret, "academy-cms".to_string(), 24),
        )
    }

    fn deny_to_login() -> Decision {
        Decision::Deny {
            redirect_to: "/admin/login".to_string(),
        }
    }

    #[test]
    fn test_classification() {
        let policy = gate().policy().clone();
        assert_eq!(policy.classify("/"), PathClass::Public);
        assert_eq!(policy.classify("/courses"), PathClass::Public);
        assert_eq!(policy.classify("/admin"), PathClass::Protected);
        assert_eq!(policy.classify("/admin/posts"), PathClass::Protected);
        assert_eq!(policy.classify("/admin/login"), PathClass::LoginExempt);
        assert_eq!(policy.classify("/admin/login/"), PathClass::LoginExempt);
        // Prefix match respects segment boundaries.
        assert_eq!(policy.classify("/administrator"), PathClass::Public);
    }

    #[test]
    fn test_protected_without_token_denies() {
        assert_eq!(
            gate().authorize_at("/admin/dashboard", None, Utc::now()),
            deny_to_login()
        );
        assert_eq!(
            gate().authorize_at("/admin/dashboard", Some(""), Utc::now()),
            deny_to_login()
        );
    }

    #[test]
    fn test_protected_with_valid_token_allows() {
        let gate = gate();
        let now = Utc::now();
        let issued = TokenService::new(SECRET, "academy-cms".to_string(), 24)
            .issue_at("admin@example.com", now)
            .unwrap();

        match gate.authorize_at("/admin/dashboard", Some(&issued.token), now) {
            Decision::Allow { claims: Some(claims) } => {
                assert_eq!(claims.sub, "admin@example.com");
            }
            other => panic!("expected allow with claims, got {:?}", other),
        }
    }

    #[test]
    fn test_foreign_signature_denies() {
        let foreign = TokenService::new(
            "ffffffffffffffffffffffffffffffff",
            "academy-cms".to_string(),
            24,
        )
        .issue("admin@example.com")
        .unwrap();

        assert_eq!(
            gate().authorize_at("/admin/dashboard", Some(&foreign.token), Utc::now()),
            deny_to_login()
        );
    }

    #[test]
    fn test_expired_token_denies() {
        let now = Utc::now();
        let issued = TokenService::new(SECRET, "academy-cms".to_string(), 24)
            .issue_at("admin@example.com", now)
            .unwrap();
        let after_ttl = now + Duration::hours(24) + Duration::seconds(1);

        assert_eq!(
            gate().authorize_at("/admin/dashboard", Some(&issued.token), after_ttl),
            deny_to_login()
        );
    }

    #[test]
    fn test_login_exempt_regardless_of_token() {
        let gate = gate();
        assert_eq!(
            gate.authorize_at("/admin/login", None, Utc::now()),
            Decision::Allow { claims: None }
        );
        assert_eq!(
            gate.authorize_at("/admin/login", Some("garbage"), Utc::now()),
            Decision::Allow { claims: None }
        );
    }

    #[test]
    fn test_public_path_never_inspected() {
        // A token that would fail verification must not matter on public paths.
        assert_eq!(
            gate().authorize_at("/courses", Some("garbage"), Utc::now()),
            Decision::Allow { claims: None }
        );
    }

    #[test]
    fn test_roundtrip_allow_then_expire() {
        let gate = gate();
        let t0 = Utc::now();
        let issued = TokenService::new(SECRET, "academy-cms".to_string(), 24)
            .issue_at("admin@example.com", t0)
            .unwrap();

        assert!(matches!(
            gate.authorize_at("/admin/dashboard", Some(&issued.token), t0),
            Decision::Allow { .. }
        ));
        // Replaying the identical token string after the TTL elapses.
        assert_eq!(
            gate.authorize_at(
                "/admin/dashboard",
                Some(&issued.token),
                t0 + Duration::hours(25)
            ),
            deny_to_login()
        );
    }

    #[test]
    fn test_decision_is_deterministic() {
        let gate = gate();
        let now = Utc::now();
        let first = gate.authorize_at("/admin/posts", Some("garbage"), now);
        let second = gate.authorize_at("/admin/posts", Some("garbage"), now);
        assert_eq!(first, second);
    }
}
