//! Configuration for covering-table construction and reduction.
//!
//! Use `CoverConfig::default()` for the permissive, unbounded behaviour.

/// How letters outside the declared variables are treated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LiteralPolicy {
    /// Skip any character that is not one of the first `num_vars` letters (either case).
    #[default]
    Ignore,
    /// Fail with [`CoverError::InvalidLiteral`][crate::error::CoverError::InvalidLiteral].
    Reject,
}

/// Configuration options for [`CoverTable`][crate::table::CoverTable].
///
/// # Examples
///
/// ```
/// use qm_cover::config::{CoverConfig, LiteralPolicy};
/// use qm_cover::table::CoverTable;
///
/// let config = CoverConfig {
///     literal_policy: LiteralPolicy::Reject,
///     max_branches: Some(1000),
/// };
/// let table = CoverTable::with_config(2, &["a", "B"], &["ab", "AB"], &config).unwrap();
/// assert_eq!(table.minimize().unwrap().terms(), ["a", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct CoverConfig {
    /// Treatment of unknown letters in terms (default: `Ignore`)
    pub literal_policy: LiteralPolicy,
    /// Maximum number of branch-and-bound branch points per reduction (default: unbounded)
    pub max_branches: Option<usize>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            literal_policy: LiteralPolicy::Ignore,
            max_branches: None,
        }
    }
}
