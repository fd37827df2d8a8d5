// src/lib.rs
// Lurk - client-side state core for the credit card automation app
//
// Architecture:
// - Domain-centric: entity types and invariants live in domain/
// - Action-driven: all mutation flows through Store::dispatch
// - Pure reducers: state/<slice>.rs, one per slice, no side effects
// - Selective persistence: auth + settings survive restarts, the rest is
//   refetched (store/persistor.rs)
// - Local-first: durable storage is the user's own sqlite database

// ============================================================================
// MODULES
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod state;
pub mod storage;
pub mod store;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_card,
    validate_payment,
    // Settings
    AutomationSettings,
    AutomationSettingsPatch,
    // Auth
    AuthProvider,
    BankName,
    BiometricType,
    CardBrand,
    CardStatus,
    // Cards
    CreditCard,
    // Analytics
    MerchantSpending,
    MonthlySpending,
    NotificationSettings,
    NotificationSettingsPatch,
    Payment,
    PaymentMethod,
    PaymentPreference,
    PaymentStatus,
    PaymentType,
    Preferences,
    PreferencesPatch,
    SecuritySettings,
    SecuritySettingsPatch,
    SpendingInsights,
    SubscriptionTier,
    Theme,
    User,
};

// ============================================================================
// PUBLIC API - Actions & Slices
// ============================================================================

pub use state::{
    Action, AnalyticsAction, AnalyticsState, AuthAction, AuthState, CardsAction, CardsState,
    SettingsAction, SettingsState,
};

// ============================================================================
// PUBLIC API - Store & Storage
// ============================================================================

pub use store::persistor::PERSIST_WHITELIST;
pub use store::{AppState, Store, StorePhase, Subscription};

pub use storage::{MemoryStateStorage, SqliteStateStorage, StateStorage};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};
