use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in identity as the client knows it.
///
/// This mirrors what the backend returns on login; sensitive fields
/// (password hash, KYC document numbers) never reach the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Internal immutable identifier
    pub id: Uuid,

    pub email: String,

    pub phone: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// How this account authenticates
    pub auth_provider: AuthProvider,

    pub subscription_tier: SubscriptionTier,

    /// Whether KYC verification has completed
    pub kyc_verified: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    Email,
    Google,
    Biometric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Free,
    Silver,
    Gold,
    Platinum,
}

impl User {
    /// Create a new User with the fields every account has from day one
    pub fn new(email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            phone: None,
            first_name: None,
            last_name: None,
            auth_provider: AuthProvider::Email,
            subscription_tier: SubscriptionTier::Free,
            kyc_verified: false,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionTier::Free => write!(f, "free"),
            SubscriptionTier::Silver => write!(f, "silver"),
            SubscriptionTier::Gold => write!(f, "gold"),
            SubscriptionTier::Platinum => write!(f, "platinum"),
        }
    }
}
