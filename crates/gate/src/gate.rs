use std::sync::Arc;

use chrono::Utc;

use vigil_auth::TokenValidator;

use crate::alert::{AlertEvent, AlertSink, unix_timestamp};
use crate::outcome::{AuthorizationOutcome, DenialReason};

/// Decides ALLOW/DENY for a resource request and raises one alert per
/// denial.
///
/// - No IO of its own (the sink owns delivery)
/// - Never waits on alert delivery
pub struct AuthorizationGate {
    validator: Arc<dyn TokenValidator>,
    alerts: Arc<dyn AlertSink>,
}

impl AuthorizationGate {
    pub fn new(validator: Arc<dyn TokenValidator>, alerts: Arc<dyn AlertSink>) -> Self {
        Self { validator, alerts }
    }

    /// Evaluate a request for `resource_owner_id` carrying the raw
    /// `Authorization` header value. First match wins:
    ///
    /// 1. no header / non-bearer scheme → `NoToken`
    /// 2. token fails validation → `BadToken`
    /// 3. subject != owner → `UnauthorizedAccess`
    /// 4. otherwise → `Allowed`
    pub fn authorize(
        &self,
        bearer_header: Option<&str>,
        resource_owner_id: &str,
    ) -> AuthorizationOutcome {
        // Stamped before any parsing; the sink measures delivery latency
        // against this instant.
        let origin = unix_timestamp(Utc::now());

        let token = match bearer_header.and_then(bearer_token) {
            Some(token) => token,
            None => return self.deny(DenialReason::NoToken, None, resource_owner_id, origin),
        };

        let claims = match self.validator.validate(token, Utc::now()) {
            Ok(claims) => claims,
            Err(_) => return self.deny(DenialReason::BadToken, None, resource_owner_id, origin),
        };

        if claims.sub != resource_owner_id {
            return self.deny(
                DenialReason::UnauthorizedAccess,
                Some(claims.sub),
                resource_owner_id,
                origin,
            );
        }

        AuthorizationOutcome::Allowed
    }

    fn deny(
        &self,
        reason: DenialReason,
        subject: Option<String>,
        customer_id: &str,
        origin: f64,
    ) -> AuthorizationOutcome {
        tracing::debug!(%reason, customer_id, "resource request denied");

        self.alerts
            .dispatch(AlertEvent::denial(reason, customer_id, subject.clone(), origin));

        AuthorizationOutcome::Denied { reason, subject }
    }
}

/// Extract the token from a `bearer`-schemed header, case-insensitively.
/// The token is everything after the first space.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use vigil_auth::{Hs256TokenAuthority, TokenClaims};

    use super::*;

    const SECRET: &str = "test-secret";

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<AlertEvent>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<AlertEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl AlertSink for RecordingSink {
        fn dispatch(&self, event: AlertEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn gate() -> (AuthorizationGate, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let validator = Arc::new(Hs256TokenAuthority::new(SECRET.as_bytes()));
        (AuthorizationGate::new(validator, sink.clone()), sink)
    }

    fn token_for(secret: &str, sub: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: sub.to_string(),
            roles: vec!["customer".to_string()],
            iat: now,
            exp: now + 600,
        };
        Hs256TokenAuthority::new(secret.as_bytes())
            .sign(&claims)
            .unwrap()
    }

    #[test]
    fn missing_header_is_no_token() {
        let (gate, sink) = gate();

        let outcome = gate.authorize(None, "u1");

        assert_eq!(
            outcome,
            AuthorizationOutcome::Denied {
                reason: DenialReason::NoToken,
                subject: None,
            }
        );
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].reason, "no_token");
        assert_eq!(events[0].customer_id, "u1");
        assert_eq!(events[0].subject, None);
    }

    #[test]
    fn non_bearer_scheme_is_no_token() {
        let (gate, sink) = gate();
        let token = token_for(SECRET, "u1");

        let outcome = gate.authorize(Some(&format!("Token {token}")), "u1");

        assert!(matches!(
            outcome,
            AuthorizationOutcome::Denied {
                reason: DenialReason::NoToken,
                ..
            }
        ));
        assert_eq!(sink.events()[0].reason, "no_token");
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        let (gate, sink) = gate();
        let token = token_for(SECRET, "u1");

        let outcome = gate.authorize(Some(&format!("BEARER {token}")), "u1");

        assert_eq!(outcome, AuthorizationOutcome::Allowed);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn garbage_token_is_bad_token() {
        let (gate, sink) = gate();

        let outcome = gate.authorize(Some("Bearer not-a-jwt"), "u1");

        assert_eq!(
            outcome,
            AuthorizationOutcome::Denied {
                reason: DenialReason::BadToken,
                subject: None,
            }
        );
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].reason, "bad_token");
        assert_eq!(events[0].subject, None);
    }

    #[test]
    fn wrong_secret_token_is_bad_token() {
        let (gate, sink) = gate();
        let token = token_for("other-secret", "u1");

        let outcome = gate.authorize(Some(&format!("Bearer {token}")), "u1");

        assert!(matches!(
            outcome,
            AuthorizationOutcome::Denied {
                reason: DenialReason::BadToken,
                ..
            }
        ));
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn subject_mismatch_is_unauthorized_access() {
        let (gate, sink) = gate();
        let token = token_for(SECRET, "u2");

        let outcome = gate.authorize(Some(&format!("Bearer {token}")), "u1");

        assert_eq!(
            outcome,
            AuthorizationOutcome::Denied {
                reason: DenialReason::UnauthorizedAccess,
                subject: Some("u2".to_string()),
            }
        );
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].reason, "unauthorized_access");
        assert_eq!(events[0].customer_id, "u1");
        assert_eq!(events[0].subject.as_deref(), Some("u2"));
    }

    #[test]
    fn matching_subject_is_allowed_with_no_alert() {
        let (gate, sink) = gate();
        let token = token_for(SECRET, "u1");

        let outcome = gate.authorize(Some(&format!("Bearer {token}")), "u1");

        assert_eq!(outcome, AuthorizationOutcome::Allowed);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn alert_carries_the_evaluation_start_timestamp() {
        let (gate, sink) = gate();
        let before = unix_timestamp(Utc::now());

        gate.authorize(None, "u1");

        let after = unix_timestamp(Utc::now());
        let origin = sink.events()[0].origin_timestamp;
        assert!(before <= origin && origin <= after);
    }
}
