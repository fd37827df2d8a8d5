use serde::{Deserialize, Serialize};

use super::actions::{Action, SettingsAction};
use crate::domain::{AutomationSettings, NotificationSettings, Preferences, SecuritySettings};

/// Settings slice: user preferences and feature toggles. Local-only state,
/// no fetch bookkeeping. Persisted so preferences survive restarts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsState {
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub preferences: Preferences,
    pub automation: AutomationSettings,
}

pub fn reduce(state: &SettingsState, action: &Action) -> SettingsState {
    let Action::Settings(action) = action else {
        return state.clone();
    };

    let mut next = state.clone();
    match action {
        SettingsAction::UpdateNotifications(patch) => patch.apply(&mut next.notifications),
        SettingsAction::UpdateSecurity(patch) => patch.apply(&mut next.security),
        SettingsAction::UpdatePreferences(patch) => patch.apply(&mut next.preferences),
        SettingsAction::UpdateAutomation(patch) => patch.apply(&mut next.automation),
        SettingsAction::ToggleTheme => {
            next.preferences.theme = next.preferences.theme.toggled();
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        NotificationSettingsPatch, PaymentPreference, PreferencesPatch, Theme,
    };

    fn dispatch(state: &SettingsState, action: SettingsAction) -> SettingsState {
        reduce(state, &Action::Settings(action))
    }

    #[test]
    fn test_toggle_theme_twice_is_identity() {
        let state = SettingsState::default();
        assert_eq!(state.preferences.theme, Theme::Light);

        let once = dispatch(&state, SettingsAction::ToggleTheme);
        assert_eq!(once.preferences.theme, Theme::Dark);

        let twice = dispatch(&once, SettingsAction::ToggleTheme);
        assert_eq!(twice.preferences.theme, Theme::Light);
    }

    #[test]
    fn test_preferences_patch_is_shallow_merge() {
        let state = dispatch(&SettingsState::default(), SettingsAction::ToggleTheme);
        let next = dispatch(
            &state,
            SettingsAction::UpdatePreferences(PreferencesPatch {
                currency: Some("USD".to_string()),
                ..Default::default()
            }),
        );

        assert_eq!(next.preferences.currency, "USD");
        // Everything the patch did not carry is untouched
        assert_eq!(next.preferences.theme, Theme::Dark);
        assert_eq!(next.preferences.language, "en");
        assert_eq!(next.preferences.date_format, "DD/MM/YYYY");
    }

    #[test]
    fn test_notification_patch_leaves_other_records_alone() {
        let state = SettingsState::default();
        let next = dispatch(
            &state,
            SettingsAction::UpdateNotifications(NotificationSettingsPatch {
                sms: Some(false),
                ..Default::default()
            }),
        );

        assert!(!next.notifications.sms);
        assert!(next.notifications.email);
        assert_eq!(next.security, state.security);
        assert_eq!(next.automation.payment_preference, PaymentPreference::MinimumDue);
    }

    #[test]
    fn test_reducer_does_not_mutate_input() {
        let state = SettingsState::default();
        let _ = dispatch(&state, SettingsAction::ToggleTheme);
        assert_eq!(state.preferences.theme, Theme::Light);
    }
}
