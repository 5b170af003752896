//! Swedish salary tax calculator.
//!
//! [`core::compute_tax`] turns a monthly or yearly gross salary into a full
//! breakdown: progressive income tax over three brackets, the capped pension
//! contribution, employer social security and the flat taxes on dividends and
//! capital gains.
//!
//! ```
//! use lonekalk::core::{compute_tax, TaxInput};
//! use rust_decimal_macros::dec;
//!
//! let breakdown = compute_tax(&TaxInput::monthly(dec!(30000))).unwrap();
//! assert_eq!(breakdown.gross_salary, dec!(360000));
//! assert_eq!(breakdown.net_salary, dec!(219600));
//! ```

pub mod core;
pub mod money;
