//! Error type for building and reducing covering tables.

use std::fmt;

/// Error type for covering-table operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The implicants cannot cover these minterms.
    Uncoverable {
        minterms: Vec<String>,
    },
    /// A term contains a character that is not a literal letter of the declared variables.
    ///
    /// Only reported with [`LiteralPolicy::Reject`][crate::config::LiteralPolicy::Reject].
    InvalidLiteral {
        term: String,
        letter: char,
    },
    /// More variables than there are letters to name them.
    TooManyVariables {
        num_vars: usize,
    },
    /// Branch-and-bound needed more branch points than allowed.
    BranchLimit {
        limit: usize,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::Uncoverable { minterms } => {
                write!(f, "Implicants do not cover minterms: {}", minterms.join(", "))
            }
            CoverError::InvalidLiteral { term, letter } => {
                write!(f, "Invalid literal '{}' in term \"{}\"", letter, term)
            }
            CoverError::TooManyVariables { num_vars } => {
                write!(f, "Too many variables: {} (at most 26)", num_vars)
            }
            CoverError::BranchLimit { limit } => {
                write!(f, "Branch limit of {} exceeded", limit)
            }
        }
    }
}

impl std::error::Error for CoverError {}
