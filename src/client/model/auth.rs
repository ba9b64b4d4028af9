use crate::{client::model::error::ApiError, model::user::UserDto};

/// Session user as known to the dashboard, provided as a `Signal<AuthState>` context.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// `/api/auth/user` has not answered yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum Permission {
    LoggedIn,
    Admin,
}

impl AuthState {
    pub fn is_fetched(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.admin)
    }

    /// Whether the user holds every permission; always false when logged out.
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        let Some(user) = self.user() else {
            return false;
        };

        permissions.iter().all(|perm| match perm {
            Permission::LoggedIn => true,
            Permission::Admin => user.admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(admin: bool) -> UserDto {
        UserDto {
            discord_id: 1,
            name: "wren".to_string(),
            admin,
        }
    }

    #[test]
    fn logged_out_has_no_permissions() {
        assert!(!AuthState::NotLoggedIn.has_all_permissions(&[]));
        assert!(!AuthState::Initializing.has_all_permissions(&[Permission::LoggedIn]));
    }

    #[test]
    fn admin_permission_needs_admin_flag() {
        let member = AuthState::Authenticated(user(false));
        let admin = AuthState::Authenticated(user(true));

        assert!(member.has_all_permissions(&[Permission::LoggedIn]));
        assert!(!member.has_all_permissions(&[Permission::Admin]));
        assert!(admin.has_all_permissions(&[Permission::LoggedIn, Permission::Admin]));
    }
}
