//! Role guard evaluated before each protected handler.
//!
//! Identity is established upstream; this stage only reads the caller's role
//! from [`ROLE_HEADER`] and checks it against the operation's [`RolePolicy`].

use std::fmt;
use std::str::FromStr;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use super::error::ApiError;

pub const ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Member,
    Staff,
    Breeder,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "MEMBER",
            Role::Staff => "STAFF",
            Role::Breeder => "BREEDER",
            Role::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `MANAGER` and `ROLE_MANAGER`, case-insensitively.
impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "MEMBER" => Ok(Role::Member),
            "STAFF" => Ok(Role::Staff),
            "BREEDER" => Ok(Role::Breeder),
            "MANAGER" => Ok(Role::Manager),
            _ => Err(()),
        }
    }
}

/// The set of roles allowed to call one operation.
#[derive(Debug, Clone, Copy)]
pub struct RolePolicy(pub &'static [Role]);

impl RolePolicy {
    pub fn allows(&self, role: Role) -> bool {
        self.0.contains(&role)
    }
}

pub const CREATE_ORDER: RolePolicy = RolePolicy(&[Role::Member, Role::Manager]);
pub const LIST_ORDERS: RolePolicy = RolePolicy(&[Role::Manager, Role::Staff]);
pub const VIEW_ORDER: RolePolicy = RolePolicy(&[Role::Member, Role::Staff, Role::Breeder, Role::Manager]);
pub const UPDATE_ORDER: RolePolicy = RolePolicy(&[Role::Manager, Role::Member]);
pub const CHANGE_ORDER_STATUS: RolePolicy = RolePolicy(&[Role::Manager, Role::Staff]);

pub fn caller_role(headers: &HeaderMap) -> Option<Role> {
    headers.get(ROLE_HEADER)?.to_str().ok()?.parse().ok()
}

/// Middleware for `axum::middleware::from_fn_with_state(policy, require_roles)`.
pub async fn require_roles(
    State(policy): State<RolePolicy>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let role = caller_role(request.headers()).ok_or(ApiError::Unauthenticated)?;
    if !policy.allows(role) {
        return Err(ApiError::Forbidden { role });
    }
    debug!(%role, "Role accepted");
    request.extensions_mut().insert(role);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parses_both_role_spellings() {
        assert_eq!("MANAGER".parse::<Role>(), Ok(Role::Manager));
        assert_eq!("ROLE_MEMBER".parse::<Role>(), Ok(Role::Member));
        assert_eq!(" role_staff ".parse::<Role>(), Ok(Role::Staff));
        assert!("ADMIN".parse::<Role>().is_err());
        assert!("ROLE_".parse::<Role>().is_err());
    }

    #[test]
    fn update_policy_allows_manager_and_member_only() {
        assert!(UPDATE_ORDER.allows(Role::Manager));
        assert!(UPDATE_ORDER.allows(Role::Member));
        assert!(!UPDATE_ORDER.allows(Role::Staff));
        assert!(!UPDATE_ORDER.allows(Role::Breeder));
    }

    #[test]
    fn caller_role_reads_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(caller_role(&headers), None);
        headers.insert(ROLE_HEADER, HeaderValue::from_static("ROLE_BREEDER"));
        assert_eq!(caller_role(&headers), Some(Role::Breeder));
    }
}
