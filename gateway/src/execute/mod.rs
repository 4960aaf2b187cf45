//! Execute handlers for the asset gateway contract.
//!
//! - `deposit` - native, CW20 pull and CW20 `Send`-hook deposits
//! - `settle` - authority-gated withdrawals

mod deposit;
mod settle;

pub use deposit::*;
pub use settle::*;
