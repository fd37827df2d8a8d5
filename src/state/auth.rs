use serde::{Deserialize, Serialize};

use super::actions::{Action, AuthAction};
use crate::domain::User;

/// Auth slice: the signed-in identity plus fetch bookkeeping.
/// Persisted, so a signed-in user stays signed in across launches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub fn reduce(state: &AuthState, action: &Action) -> AuthState {
    let Action::Auth(action) = action else {
        return state.clone();
    };

    match action {
        AuthAction::FetchStart => AuthState {
            user: state.user.clone(),
            is_loading: true,
            error: None,
        },
        AuthAction::FetchSuccess(user) => AuthState {
            user: Some(user.clone()),
            is_loading: false,
            error: None,
        },
        AuthAction::FetchFailure(error) => AuthState {
            user: state.user.clone(),
            is_loading: false,
            error: Some(error.clone()),
        },
        AuthAction::Logout => AuthState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: &AuthState, action: AuthAction) -> AuthState {
        reduce(state, &Action::Auth(action))
    }

    #[test]
    fn test_fetch_start_sets_loading_and_clears_error() {
        let state = AuthState {
            error: Some("stale".to_string()),
            ..Default::default()
        };
        let next = dispatch(&state, AuthAction::FetchStart);
        assert!(next.is_loading);
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_fetch_success_replaces_user() {
        let state = dispatch(&AuthState::default(), AuthAction::FetchStart);
        let user = User::new("a@lurk.app".to_string());
        let next = dispatch(&state, AuthAction::FetchSuccess(user.clone()));
        assert!(!next.is_loading);
        assert_eq!(next.user, Some(user));
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_fetch_failure_keeps_user() {
        let user = User::new("a@lurk.app".to_string());
        let state = dispatch(&AuthState::default(), AuthAction::FetchSuccess(user.clone()));
        let next = dispatch(&state, AuthAction::FetchFailure("network error".to_string()));
        assert!(!next.is_loading);
        assert_eq!(next.error, Some("network error".to_string()));
        assert_eq!(next.user, Some(user));
    }

    #[test]
    fn test_logout_resets_slice() {
        let user = User::new("a@lurk.app".to_string());
        let state = dispatch(&AuthState::default(), AuthAction::FetchSuccess(user));
        let next = dispatch(&state, AuthAction::Logout);
        assert_eq!(next, AuthState::default());
    }

    #[test]
    fn test_foreign_action_is_ignored() {
        let user = User::new("a@lurk.app".to_string());
        let state = dispatch(&AuthState::default(), AuthAction::FetchSuccess(user));
        let next = reduce(&state, &Action::Settings(crate::state::SettingsAction::ToggleTheme));
        assert_eq!(next, state);
    }
}
