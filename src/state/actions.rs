// src/state/actions.rs
//
// The action surface - the only way collaborators mutate state.
//
// CRITICAL RULES:
// - Actions are immutable descriptions of an intended change
// - Actions carry only the payload the reducer needs
// - No business logic in action types
// - Payloads are not validated here; that is the constructing
//   collaborator's job (see domain::card::invariants)

use uuid::Uuid;

use crate::domain::{
    AutomationSettingsPatch, CreditCard, NotificationSettingsPatch, Payment, PreferencesPatch,
    SecuritySettingsPatch, SpendingInsights, User,
};

/// Top-level action routed to every slice reducer on dispatch.
/// Each reducer matches its own family and clones through everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Cards(CardsAction),
    Analytics(AnalyticsAction),
    Settings(SettingsAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    FetchStart,
    FetchSuccess(User),
    FetchFailure(String),
    /// Clears the signed-in identity and resets the slice
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardsAction {
    FetchStart,
    FetchSuccess(Vec<CreditCard>),
    FetchFailure(String),
    /// Appends unconditionally; uniqueness is the caller's concern
    AddCard(CreditCard),
    /// Replaces the first entry with a matching id in place; no-op otherwise
    UpdateCard(CreditCard),
    /// Removes every entry with this id
    DeleteCard(Uuid),
    /// Sets the selection unconditionally; no existence check
    SelectCard(Option<Uuid>),
    /// Prepends; payments are kept newest-first
    AddPayment(Payment),
    /// Replaces the first payment with a matching id in place; no-op otherwise
    UpdatePayment(Payment),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsAction {
    FetchStart,
    FetchSuccess(SpendingInsights),
    FetchFailure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    UpdateNotifications(NotificationSettingsPatch),
    UpdateSecurity(SecuritySettingsPatch),
    UpdatePreferences(PreferencesPatch),
    UpdateAutomation(AutomationSettingsPatch),
    ToggleTheme,
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<CardsAction> for Action {
    fn from(action: CardsAction) -> Self {
        Action::Cards(action)
    }
}

impl From<AnalyticsAction> for Action {
    fn from(action: AnalyticsAction) -> Self {
        Action::Analytics(action)
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::Settings(action)
    }
}
