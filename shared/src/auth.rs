//! Authentication capabilities handed to the view.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use tracing::debug;

/// What the current visitor is allowed to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// A valid session exists.
    pub is_authenticated: bool,
    /// The session may update and delete events.
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    exp: Option<i64>,
    #[serde(rename = "isAdmin", default)]
    is_admin: Option<bool>,
    #[serde(default)]
    role: Option<String>,
}

impl AuthContext {
    /// Anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Signed-in visitor without admin rights.
    pub fn user() -> Self {
        Self {
            is_authenticated: true,
            is_admin: false,
        }
    }

    /// Signed-in administrator.
    pub fn admin() -> Self {
        Self {
            is_authenticated: true,
            is_admin: true,
        }
    }

    /// Whether Update/Delete controls are shown and their actions allowed.
    /// Anonymous visitors and plain users get neither.
    pub fn can_manage_events(&self) -> bool {
        self.is_authenticated && self.is_admin
    }

    /// Derive the context from a stored JWT.
    ///
    /// Only the payload is read; the signature is the backend's business.
    /// Tokens that cannot be decoded, or whose `exp` is not after
    /// `now_secs`, count as anonymous.
    pub fn from_token(token: Option<&str>, now_secs: i64) -> Self {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::anonymous();
        };

        let claims = match decode_claims(token) {
            Some(claims) => claims,
            None => {
                debug!("stored token is not a readable JWT");
                return Self::anonymous();
            },
        };

        if claims.exp.is_some_and(|exp| exp <= now_secs) {
            debug!("stored token has expired");
            return Self::anonymous();
        }

        let is_admin = claims.is_admin.unwrap_or(false)
            || claims
                .role
                .as_deref()
                .is_some_and(|role| role.eq_ignore_ascii_case("admin"));

        Self {
            is_authenticated: true,
            is_admin,
        }
    }
}

fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    use super::AuthContext;

    fn token(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn missing_or_blank_token_is_anonymous() {
        assert_eq!(AuthContext::from_token(None, 0), AuthContext::anonymous());
        assert_eq!(AuthContext::from_token(Some("  "), 0), AuthContext::anonymous());
        assert_eq!(AuthContext::from_token(Some("garbage"), 0), AuthContext::anonymous());
    }

    #[test]
    fn reads_admin_claims() {
        let admin = token(r#"{"id":"u1","isAdmin":true,"exp":2000}"#);
        assert_eq!(AuthContext::from_token(Some(&admin), 1000), AuthContext::admin());

        let by_role = token(r#"{"role":"Admin"}"#);
        assert_eq!(AuthContext::from_token(Some(&by_role), 1000), AuthContext::admin());

        let plain = token(r#"{"id":"u2","isAdmin":false}"#);
        assert_eq!(AuthContext::from_token(Some(&plain), 1000), AuthContext::user());
    }

    #[test]
    fn only_admins_manage_events() {
        assert!(!AuthContext::anonymous().can_manage_events());
        assert!(!AuthContext::user().can_manage_events());
        assert!(AuthContext::admin().can_manage_events());

        let stale = AuthContext {
            is_authenticated: false,
            is_admin: true,
        };
        assert!(!stale.can_manage_events());

        let plain = token(r#"{"id":"u2"}"#);
        assert!(!AuthContext::from_token(Some(&plain), 0).can_manage_events());
        let admin = token(r#"{"role":"admin"}"#);
        assert!(AuthContext::from_token(Some(&admin), 0).can_manage_events());
    }

    #[test]
    fn expired_token_is_anonymous() {
        let expired = token(r#"{"isAdmin":true,"exp":1000}"#);
        assert_eq!(AuthContext::from_token(Some(&expired), 1000), AuthContext::anonymous());
    }
}
