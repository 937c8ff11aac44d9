//! # Horizon
//!
//! The two places this crate touches the Horizon HTTP API: reading its error
//! documents, and calling the test-network friendbot faucet.

pub mod error;
pub mod friendbot;

pub use error::{error_string, find_horizon_error, HorizonError, Problem, ResultCodes};
pub use friendbot::{fund_with_friendbot, FriendbotClient, FriendbotError};
