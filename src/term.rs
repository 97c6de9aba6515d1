//! Literal-letter terms.
//!
//! Variable `k` is named by the `k`-th letter of the alphabet: lowercase for the
//! plain literal, uppercase for its complement. An implicant such as `aC` constrains
//! variable 0 to true and variable 2 to false; a minterm lists the lowercase letters
//! of exactly the variables that are true in it.

use crate::bitvec::BitVector;
use crate::config::LiteralPolicy;
use crate::error::CoverError;

/// Largest supported variable count, one letter per variable.
pub const MAX_VARS: usize = 26;

/// Returns the variable index named by `c`, if it is an ASCII letter.
fn variable_of(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// A term decoded into bit vectors over the variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Bit `k` set iff variable `k` appears in either polarity
    mask: BitVector,
    /// Bit `k` set iff variable `k` appears uncomplemented
    assignment: BitVector,
}

impl Term {
    /// Decodes `text` over `num_vars` variables.
    ///
    /// Characters that do not name one of the variables are skipped under
    /// [`LiteralPolicy::Ignore`] and rejected under [`LiteralPolicy::Reject`].
    pub fn parse(num_vars: usize, text: &str, policy: LiteralPolicy) -> Result<Self, CoverError> {
        let mut mask = BitVector::new(num_vars);
        let mut assignment = BitVector::new(num_vars);
        for c in text.chars() {
            match variable_of(c) {
                Some(var) if var < num_vars => {
                    mask.set(var);
                    if c.is_ascii_lowercase() {
                        assignment.set(var);
                    }
                }
                _ => {
                    if policy == LiteralPolicy::Reject {
                        return Err(CoverError::InvalidLiteral {
                            term: text.to_string(),
                            letter: c,
                        });
                    }
                }
            }
        }
        Ok(Self { mask, assignment })
    }

    /// Variables the term mentions.
    pub fn mask(&self) -> &BitVector {
        &self.mask
    }

    /// Variables the term requires to be true.
    ///
    /// For a minterm this is the full input assignment.
    pub fn assignment(&self) -> &BitVector {
        &self.assignment
    }

    /// Returns true if this implicant is satisfied by the given input assignment.
    pub fn covers(&self, assignment: &BitVector) -> bool {
        (&self.mask & assignment).symmetric_difference(&self.assignment).is_zero()
    }
}
