//! API clients for exchange-rate providers

pub mod fixer;

pub use fixer::FixerClient;
