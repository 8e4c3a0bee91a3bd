//! Result shapes and list-filter parameters for the Kaiascan open API.
//!
//! Organized by resource. Field names follow the camelCase wire format.

pub mod account;
pub mod block;
pub mod common;
pub mod contract;
pub mod nft;
pub mod token;
pub mod transaction;

// Re-export all types for convenience
pub use account::*;
pub use block::*;
pub use common::*;
pub use contract::*;
pub use nft::*;
pub use token::*;
pub use transaction::*;
