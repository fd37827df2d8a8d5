use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::actions::{Action, CardsAction};
use crate::domain::{CreditCard, Payment};

/// Cards slice: registered cards, the current selection, and payment
/// history (newest first). Deliberately not persisted - card balances and
/// payment states go stale fast, so they are refetched every launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardsState {
    pub cards: Vec<CreditCard>,
    pub selected_card: Option<Uuid>,
    pub payments: Vec<Payment>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub fn reduce(state: &CardsState, action: &Action) -> CardsState {
    let Action::Cards(action) = action else {
        return state.clone();
    };

    match action {
        CardsAction::FetchStart => CardsState {
            is_loading: true,
            error: None,
            ..state.clone()
        },
        CardsAction::FetchSuccess(cards) => CardsState {
            cards: cards.clone(),
            is_loading: false,
            error: None,
            ..state.clone()
        },
        CardsAction::FetchFailure(error) => CardsState {
            is_loading: false,
            error: Some(error.clone()),
            ..state.clone()
        },
        CardsAction::AddCard(card) => {
            let mut cards = state.cards.clone();
            cards.push(card.clone());
            CardsState {
                cards,
                ..state.clone()
            }
        }
        CardsAction::UpdateCard(card) => {
            let mut cards = state.cards.clone();
            if let Some(existing) = cards.iter_mut().find(|c| c.id == card.id) {
                *existing = card.clone();
            }
            CardsState {
                cards,
                ..state.clone()
            }
        }
        CardsAction::DeleteCard(id) => {
            let cards = state
                .cards
                .iter()
                .filter(|c| c.id != *id)
                .cloned()
                .collect();
            CardsState {
                cards,
                ..state.clone()
            }
        }
        CardsAction::SelectCard(id) => CardsState {
            selected_card: *id,
            ..state.clone()
        },
        CardsAction::AddPayment(payment) => {
            let mut payments = Vec::with_capacity(state.payments.len() + 1);
            payments.push(payment.clone());
            payments.extend(state.payments.iter().cloned());
            CardsState {
                payments,
                ..state.clone()
            }
        }
        CardsAction::UpdatePayment(payment) => {
            let mut payments = state.payments.clone();
            if let Some(existing) = payments.iter_mut().find(|p| p.id == payment.id) {
                *existing = payment.clone();
            }
            CardsState {
                payments,
                ..state.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BankName, CardBrand, PaymentMethod};

    fn dispatch(state: &CardsState, action: CardsAction) -> CardsState {
        reduce(state, &Action::Cards(action))
    }

    fn card(last4: &str) -> CreditCard {
        CreditCard::new(last4.to_string(), CardBrand::Visa, BankName::Hdfc)
    }

    #[test]
    fn test_add_card_appends_in_call_order() {
        let mut state = CardsState::default();
        let a = card("1111");
        let b = card("2222");
        // Same id twice on purpose: the reducer does not deduplicate
        state = dispatch(&state, CardsAction::AddCard(a.clone()));
        state = dispatch(&state, CardsAction::AddCard(b.clone()));
        state = dispatch(&state, CardsAction::AddCard(a.clone()));

        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.cards[0].id, a.id);
        assert_eq!(state.cards[1].id, b.id);
        assert_eq!(state.cards[2].id, a.id);
    }

    #[test]
    fn test_update_card_preserves_position() {
        let a = card("1111");
        let x = card("2222");
        let b = card("3333");
        let mut state = CardsState::default();
        for c in [&a, &x, &b] {
            state = dispatch(&state, CardsAction::AddCard((*c).clone()));
        }

        let mut updated = x.clone();
        updated.card_name = Some("Groceries".to_string());
        state = dispatch(&state, CardsAction::UpdateCard(updated.clone()));

        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.cards[0], a);
        assert_eq!(state.cards[1], updated);
        assert_eq!(state.cards[2], b);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let a = card("1111");
        let state = dispatch(&CardsState::default(), CardsAction::AddCard(a.clone()));
        let next = dispatch(&state, CardsAction::UpdateCard(card("9999")));
        assert_eq!(next.cards, vec![a]);
    }

    #[test]
    fn test_update_cannot_resurrect_deleted_card() {
        let a = card("1111");
        let x = card("2222");
        let mut state = CardsState::default();
        state = dispatch(&state, CardsAction::AddCard(a.clone()));
        state = dispatch(&state, CardsAction::AddCard(x.clone()));

        state = dispatch(&state, CardsAction::DeleteCard(x.id));
        let mut revived = x.clone();
        revived.card_name = Some("zombie".to_string());
        state = dispatch(&state, CardsAction::UpdateCard(revived));

        assert_eq!(state.cards, vec![a]);
    }

    #[test]
    fn test_delete_removes_all_matching_ids_keeps_order() {
        let a = card("1111");
        let dup = card("2222");
        let b = card("3333");
        let mut state = CardsState::default();
        for c in [&a, &dup, &b, &dup] {
            state = dispatch(&state, CardsAction::AddCard((*c).clone()));
        }

        state = dispatch(&state, CardsAction::DeleteCard(dup.id));
        assert_eq!(state.cards, vec![a, b]);
    }

    #[test]
    fn test_select_card_does_not_validate_existence() {
        let ghost = Uuid::new_v4();
        let state = dispatch(&CardsState::default(), CardsAction::SelectCard(Some(ghost)));
        assert_eq!(state.selected_card, Some(ghost));

        let state = dispatch(&state, CardsAction::SelectCard(None));
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn test_add_payment_prepends() {
        let card_id = Uuid::new_v4();
        let first = Payment::new(card_id, 100.0, PaymentMethod::UpiAutopay);
        let second = Payment::new(card_id, 250.0, PaymentMethod::Neft);
        let mut state = CardsState::default();
        state = dispatch(&state, CardsAction::AddPayment(first.clone()));
        state = dispatch(&state, CardsAction::AddPayment(second.clone()));

        assert_eq!(state.payments, vec![second, first]);
    }

    #[test]
    fn test_update_payment_in_place() {
        let card_id = Uuid::new_v4();
        let first = Payment::new(card_id, 100.0, PaymentMethod::UpiAutopay);
        let second = Payment::new(card_id, 250.0, PaymentMethod::Neft);
        let mut state = CardsState::default();
        state = dispatch(&state, CardsAction::AddPayment(first.clone()));
        state = dispatch(&state, CardsAction::AddPayment(second.clone()));

        let mut completed = first.clone();
        completed.status = crate::domain::PaymentStatus::Completed;
        state = dispatch(&state, CardsAction::UpdatePayment(completed.clone()));

        assert_eq!(state.payments, vec![second, completed]);
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = CardsState::default();

        state = dispatch(&state, CardsAction::FetchStart);
        assert!(state.is_loading);
        assert_eq!(state.error, None);

        let fetched = vec![card("1111")];
        state = dispatch(&state, CardsAction::FetchSuccess(fetched.clone()));
        assert!(!state.is_loading);
        assert_eq!(state.cards, fetched);

        state = dispatch(&state, CardsAction::FetchFailure("network error".to_string()));
        assert!(!state.is_loading);
        assert_eq!(state.error, Some("network error".to_string()));
        // Failure leaves previously fetched data untouched
        assert_eq!(state.cards, fetched);
    }
}
