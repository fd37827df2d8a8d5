// src/state/mod.rs
//
// State Module - slices and their reducers
//
// Each slice is an independently-addressable partition of the application
// state with a pure reducer: fn(&SliceState, &Action) -> SliceState.
// Reducers never mutate their input, never fail, and ignore actions
// addressed to other slices.

pub mod actions;
pub mod analytics;
pub mod auth;
pub mod cards;
pub mod settings;

pub use actions::{Action, AnalyticsAction, AuthAction, CardsAction, SettingsAction};
pub use analytics::AnalyticsState;
pub use auth::AuthState;
pub use cards::CardsState;
pub use settings::SettingsState;
