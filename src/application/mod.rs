//! Application layer orchestrating the wallet session.
//!
//! `PaymentEngine` is the entry point: it turns validated payment requests
//! into terminal ledger records and applies their balance effect through the
//! store port. Randomness and state live behind the `domain::ports` traits.

pub mod engine;
pub mod history;
pub mod risk;
