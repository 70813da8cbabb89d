//! fdcalc - Fixed-deposit maturity calculator
//!
//! Computes the maturity value of a fixed deposit with the compound
//! interest formula `A = P(1 + r/n)^(nt)`, and encodes deposit
//! parameters as a shareable query string.
//!
//! ```
//! use fdcalc::{compute_maturity, DepositInput};
//!
//! let result = compute_maturity(&DepositInput::default());
//! assert_eq!(result.maturity_amount, 144994.8);
//! ```

pub mod calculator;
pub mod cli;
pub mod codec;
pub mod config;
pub mod models;
pub mod reporters;

pub use calculator::compute_maturity;
pub use codec::{decode_url, from_query_params, parse_query, shareable_url, to_query_string};
pub use models::{
    Compounding, DepositInput, DepositResult, InputError, ParseEnumError, PartialDepositInput,
    TenureUnit,
};
