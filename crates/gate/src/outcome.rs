use serde::Serialize;

/// Why a resource request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Missing `Authorization` header, or a non-bearer scheme.
    NoToken,

    /// A bearer token was presented and failed validation.
    BadToken,

    /// A valid token whose subject does not own the requested resource.
    UnauthorizedAccess,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::NoToken => "no_token",
            DenialReason::BadToken => "bad_token",
            DenialReason::UnauthorizedAccess => "unauthorized_access",
        }
    }
}

impl core::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request authorization verdict. Computed fresh on every request, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationOutcome {
    Allowed,
    Denied {
        reason: DenialReason,
        /// The validated subject, when one exists (`UnauthorizedAccess`
        /// only).
        subject: Option<String>,
    },
}
