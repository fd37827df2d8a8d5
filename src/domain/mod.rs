// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod analytics;
pub mod card;
pub mod settings;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// User / Auth Domain
pub use user::{AuthProvider, SubscriptionTier, User};

// Card Domain
pub use card::{
    validate_card, validate_payment, BankName, CardBrand, CardStatus, CreditCard, Payment,
    PaymentMethod, PaymentStatus, PaymentType,
};

// Settings Domain
pub use settings::{
    AutomationSettings, AutomationSettingsPatch, BiometricType, NotificationSettings,
    NotificationSettingsPatch, PaymentPreference, Preferences, PreferencesPatch,
    SecuritySettings, SecuritySettingsPatch, Theme,
};

// Analytics Domain (Derived Data)
pub use analytics::{MerchantSpending, MonthlySpending, SpendingInsights};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
