use super::entity::{CreditCard, Payment};
use crate::domain::{DomainError, DomainResult};

/// Validates all CreditCard invariants
/// These are the absolute rules that must hold for a card to be valid.
/// The reducer layer deliberately does not call this - validation belongs
/// at the boundary where actions are constructed.
pub fn validate_card(card: &CreditCard) -> DomainResult<()> {
    validate_last4(&card.card_last4)?;
    validate_expiry_month(card.expiry_month)?;
    validate_billing_cycle_day(card.billing_cycle_day)?;
    Ok(())
}

/// last4 must be exactly four ASCII digits
fn validate_last4(last4: &str) -> DomainResult<()> {
    if last4.len() != 4 || !last4.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvariantViolation(format!(
            "Card last4 must be exactly 4 digits, got '{}'",
            last4
        )));
    }
    Ok(())
}

fn validate_expiry_month(month: u8) -> DomainResult<()> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvariantViolation(format!(
            "Expiry month must be 1-12, got {}",
            month
        )));
    }
    Ok(())
}

fn validate_billing_cycle_day(day: u8) -> DomainResult<()> {
    if !(1..=31).contains(&day) {
        return Err(DomainError::InvariantViolation(format!(
            "Billing cycle day must be 1-31, got {}",
            day
        )));
    }
    Ok(())
}

/// Validates all Payment invariants
pub fn validate_payment(payment: &Payment) -> DomainResult<()> {
    if payment.amount <= 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Payment amount must be positive, got {}",
            payment.amount
        )));
    }
    if payment.currency.len() != 3 || !payment.currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(DomainError::InvariantViolation(format!(
            "Currency must be a 3-letter ISO code, got '{}'",
            payment.currency
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Card domain:
///
/// 1. Identity (UUID) is immutable
/// 2. The full card number never exists client-side, only last4
/// 3. Expiry month is 1-12, billing cycle day is 1-31
/// 4. Payment amounts are strictly positive
/// 5. Duplicate card ids are the registering collaborator's problem,
///    not the store's - the reducer accepts what it is given

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{BankName, CardBrand, PaymentMethod};
    use uuid::Uuid;

    #[test]
    fn test_valid_card() {
        let card = CreditCard::new("4242".to_string(), CardBrand::Visa, BankName::Hdfc);
        assert!(validate_card(&card).is_ok());
    }

    #[test]
    fn test_non_numeric_last4_fails() {
        let card = CreditCard::new("42ab".to_string(), CardBrand::Visa, BankName::Hdfc);
        assert!(validate_card(&card).is_err());
    }

    #[test]
    fn test_expiry_month_out_of_range_fails() {
        let mut card = CreditCard::new("4242".to_string(), CardBrand::Visa, BankName::Hdfc);
        card.expiry_month = 13;
        assert!(validate_card(&card).is_err());
    }

    #[test]
    fn test_zero_amount_payment_fails() {
        let payment = Payment::new(Uuid::new_v4(), 0.0, PaymentMethod::UpiAutopay);
        assert!(validate_payment(&payment).is_err());
    }

    #[test]
    fn test_lowercase_currency_fails() {
        let mut payment = Payment::new(Uuid::new_v4(), 100.0, PaymentMethod::UpiAutopay);
        payment.currency = "inr".to_string();
        assert!(validate_payment(&payment).is_err());
    }
}
