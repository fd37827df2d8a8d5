// src/domain/card/mod.rs
//
// Card Domain - credit cards and the payments made against them

pub mod entity;
pub mod invariants;

pub use entity::{
    BankName, CardBrand, CardStatus, CreditCard, Payment, PaymentMethod, PaymentStatus,
    PaymentType,
};
pub use invariants::{validate_card, validate_payment};
