//! Domain types for the account service.

pub mod account;

pub use account::{Account, AccountDraft};
