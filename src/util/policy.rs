use crate::model::user::Role;

/// Access requirement of a route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Anyone, session or not.
    Public,
    /// Any authenticated user.
    Customer,
    /// Authenticated admin.
    Admin,
}

/// The single authorization decision point. Role comparisons live here
/// instead of being scattered across handlers. Denied HTML routes redirect
/// to the root; denied JSON routes answer `{"success": false}` — there is
/// no 401/403 distinction on the wire.
pub fn authorize(required: Capability, role: Option<Role>) -> bool {
    match required {
        Capability::Public => true,
        Capability::Customer => role.is_some(),
        Capability::Admin => role == Some(Role::Admin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_allow_everyone() {
        assert!(authorize(Capability::Public, None));
        assert!(authorize(Capability::Public, Some(Role::Customer)));
        assert!(authorize(Capability::Public, Some(Role::Admin)));
    }

    #[test]
    fn customer_routes_require_a_session() {
        assert!(!authorize(Capability::Customer, None));
        assert!(authorize(Capability::Customer, Some(Role::Customer)));
        assert!(authorize(Capability::Customer, Some(Role::Admin)));
    }

    #[test]
    fn admin_routes_require_the_admin_role() {
        assert!(!authorize(Capability::Admin, None));
        assert!(!authorize(Capability::Admin, Some(Role::Customer)));
        assert!(authorize(Capability::Admin, Some(Role::Admin)));
    }
}
