//! # Accrue
//!
//! Interest and tax calculations with validated inputs.
//!
//! This crate provides three independent, stateless calculations:
//!
//! - **Simple interest**: linear accrual over a period
//! - **Compound interest**: periodic compounding at a configurable frequency
//! - **Tax**: percentage tax on an amount
//!
//! Rates are on the percentage scale throughout (`5.0` means 5%, not 0.05).
//! Every function validates its arguments in full before performing any
//! arithmetic and returns [`AccrueResult`], so a caller never observes a
//! partially computed value.
//!
//! ## Design Philosophy
//!
//! - **Validate First**: range checks complete before any arithmetic
//! - **Native Floats**: plain `f64` arithmetic, no rounding policy imposed
//! - **Pure Functions**: no shared state, thread-safe by construction
//!
//! ## Example
//!
//! ```rust
//! use accrue::prelude::*;
//!
//! let interest = calculate_simple_interest(1000.0, 5.0, 2.0)?;
//! assert_eq!(interest, 100.0);
//!
//! let monthly = CompoundingFrequency::Monthly;
//! let accrued = calculate_compound_interest(1000.0, 12.0, 1.0, monthly.periods_per_year())?;
//! assert!((accrued - 126.83).abs() < 0.01);
//! # Ok::<(), accrue::AccrueError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod frequency;
pub mod interest;
pub mod tax;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AccrueError, AccrueResult};
    pub use crate::frequency::CompoundingFrequency;
    pub use crate::interest::{
        calculate_compound_interest, calculate_compound_interest_annual,
        calculate_simple_interest,
    };
    pub use crate::tax::calculate_tax;
}

// Re-export commonly used items at crate root
pub use error::{AccrueError, AccrueResult};
pub use frequency::CompoundingFrequency;
pub use interest::{
    calculate_compound_interest, calculate_compound_interest_annual, calculate_simple_interest,
};
pub use tax::calculate_tax;
