use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered credit card.
///
/// Card data is tokenized upstream; the client only ever sees the last
/// four digits, never the full PAN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Internal immutable identifier
    pub id: Uuid,

    /// User's custom label for the card ("Work Amex")
    pub card_name: Option<String>,

    /// Last four digits of the card number
    pub card_last4: String,

    pub card_brand: CardBrand,

    pub bank_name: BankName,

    /// Expiry month (1-12)
    pub expiry_month: u8,

    /// Four-digit expiry year
    pub expiry_year: u16,

    pub credit_limit: Option<f64>,

    pub current_balance: f64,

    /// Minimum amount due this cycle
    pub minimum_due: f64,

    /// Total outstanding this cycle
    pub total_due: f64,

    /// Day of month the billing cycle starts (1-31)
    pub billing_cycle_day: u8,

    pub payment_due_date: Option<DateTime<Utc>>,

    pub status: CardStatus,

    /// Whether automated payments are enabled for this card
    pub auto_payment_enabled: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Rupay,
    Discover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankName {
    Hdfc,
    Icici,
    Sbi,
    Axis,
    Kotak,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Active,
    Inactive,
    Blocked,
    Expired,
    PendingVerification,
}

impl CreditCard {
    /// Create a new card pending verification
    pub fn new(card_last4: String, card_brand: CardBrand, bank_name: BankName) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            card_name: None,
            card_last4,
            card_brand,
            bank_name,
            expiry_month: 1,
            expiry_year: 2030,
            credit_limit: None,
            current_balance: 0.0,
            minimum_due: 0.0,
            total_due: 0.0,
            billing_cycle_day: 1,
            payment_due_date: None,
            status: CardStatus::PendingVerification,
            auto_payment_enabled: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A payment made (or attempted) against a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Internal immutable identifier
    pub id: Uuid,

    /// The card this payment settles
    pub card_id: Uuid,

    pub payment_type: PaymentType,

    pub amount: f64,

    /// ISO 4217 currency code
    pub currency: String,

    pub status: PaymentStatus,

    pub method: PaymentMethod,

    /// Gateway transaction id, once assigned
    pub transaction_id: Option<String>,

    pub initiated_at: DateTime<Utc>,

    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Lurk automation
    Automatic,
    /// User initiated
    Manual,
    /// Pre-scheduled
    Scheduled,
    /// Refund/cancellation
    Reversal,
    LateFee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    UpiAutopay,
    UpiCollect,
    Neft,
    Imps,
    DebitCard,
    NetBanking,
}

impl Payment {
    /// Create a pending manual payment
    pub fn new(card_id: Uuid, amount: f64, method: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            card_id,
            payment_type: PaymentType::Manual,
            amount,
            currency: "INR".to_string(),
            status: PaymentStatus::Pending,
            method,
            transaction_id: None,
            initiated_at: Utc::now(),
            completed_at: None,
        }
    }
}

impl std::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardStatus::Active => write!(f, "active"),
            CardStatus::Inactive => write!(f, "inactive"),
            CardStatus::Blocked => write!(f, "blocked"),
            CardStatus::Expired => write!(f, "expired"),
            CardStatus::PendingVerification => write!(f, "pending_verification"),
        }
    }
}
