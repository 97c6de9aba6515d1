//! # qm-cover: minimum covers for sum-of-products minimization
//!
//! **`qm-cover`** implements the tabular phase of the Quine-McCluskey method. Given the
//! prime implicants of a boolean function and the minterms they must cover, it selects a
//! smallest set of implicants whose union covers every minterm.
//!
//! ## Terms
//!
//! Terms are strings with one letter per variable: variable `0` is `a`, variable `1` is `b`,
//! and so on up to `z`. A lowercase letter is the plain literal, an uppercase letter its
//! complement. An implicant lists the literals it constrains (`aC` means `x0 ∧ ¬x2`);
//! a minterm lists the lowercase letters of the variables that are true in it.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qm_cover::table::CoverTable;
//!
//! // 1. Build the implicant × minterm table
//! let table = CoverTable::new(
//!     3,
//!     &["ab", "aC", "BC", "bc"],
//!     &["ABC", "Abc", "aBC", "abC", "abc"],
//! )?;
//!
//! // 2. Reduce it to a minimum cover
//! let cover = table.minimize()?;
//!
//! // Terms come out in the order they were selected (essential implicants first)...
//! assert_eq!(cover.terms(), ["BC", "bc", "ab"]);
//! // ...or in canonical order.
//! assert_eq!(cover.sorted_terms(), ["ab", "BC", "bc"]);
//! # Ok::<(), qm_cover::error::CoverError>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`table`]**: the [`CoverTable`][crate::table::CoverTable] incidence table.
//! - **[`reduce`]**: essential-implicant extraction, dominance pruning and branch-and-bound.
//! - **[`bitvec`]**: the fixed-size [`BitVector`][crate::bitvec::BitVector] behind rows, columns and masks.
//! - **[`order`]**: the canonical term order used to break every tie.
//!
//! The reduction is deterministic: the same input always yields the same cover.

pub mod bitvec;
pub mod config;
pub mod error;
pub mod order;
pub mod reduce;
pub mod table;
pub mod term;

pub use crate::error::CoverError;
pub use crate::reduce::Cover;
pub use crate::table::CoverTable;

/// Computes a minimum cover in one call, returning the selected implicants in selection order.
///
/// ```
/// let cover = qm_cover::minimize(2, &["a", "B"], &["ab", "AB"]).unwrap();
/// assert_eq!(cover, ["a", "B"]);
/// ```
pub fn minimize(
    num_vars: usize,
    implicants: &[impl AsRef<str>],
    minterms: &[impl AsRef<str>],
) -> Result<Vec<String>, CoverError> {
    let table = CoverTable::new(num_vars, implicants, minterms)?;
    Ok(table.minimize()?.into_terms())
}
