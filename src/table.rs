//! Implicant × minterm incidence table.
//!
//! Row `i` of the table is the set of minterms implicant `i` covers, column `j` the
//! set of implicants covering minterm `j`. Both are stored, as bit vectors, so the
//! reduction can look at either direction without transposing:
//! `rows[i].get(j) == columns[j].get(i)` always holds.

use std::fmt;

use log::debug;

use crate::bitvec::BitVector;
use crate::config::CoverConfig;
use crate::error::CoverError;
use crate::term::{Term, MAX_VARS};

/// Covering table built from implicant and minterm strings.
#[derive(Debug, Clone)]
pub struct CoverTable {
    num_vars: usize,
    implicants: Vec<String>,
    minterms: Vec<String>,
    /// One bit vector over minterm indices per implicant
    rows: Vec<BitVector>,
    /// One bit vector over implicant indices per minterm
    columns: Vec<BitVector>,
    pub(crate) max_branches: Option<usize>,
}

impl CoverTable {
    /// Builds the table with the default [`CoverConfig`].
    ///
    /// ```
    /// use qm_cover::table::CoverTable;
    ///
    /// let table = CoverTable::new(3, &["ab", "aC", "BC", "bc"], &["ABC", "Abc", "aBC", "abC", "abc"]).unwrap();
    /// assert!(table.covers(0, 4)); // ab covers abc
    /// assert!(!table.covers(0, 0)); // ab does not cover ABC
    /// ```
    pub fn new(
        num_vars: usize,
        implicants: &[impl AsRef<str>],
        minterms: &[impl AsRef<str>],
    ) -> Result<Self, CoverError> {
        Self::with_config(num_vars, implicants, minterms, &CoverConfig::default())
    }

    /// Builds the table, decoding terms according to `config`.
    pub fn with_config(
        num_vars: usize,
        implicants: &[impl AsRef<str>],
        minterms: &[impl AsRef<str>],
        config: &CoverConfig,
    ) -> Result<Self, CoverError> {
        if num_vars > MAX_VARS {
            return Err(CoverError::TooManyVariables { num_vars });
        }

        let implicants: Vec<String> = implicants.iter().map(|s| s.as_ref().to_string()).collect();
        let minterms: Vec<String> = minterms.iter().map(|s| s.as_ref().to_string()).collect();
        debug!(
            "CoverTable::with_config(num_vars = {}, implicants = {:?}, minterms = {:?})",
            num_vars, implicants, minterms
        );

        let implicant_terms = implicants
            .iter()
            .map(|s| Term::parse(num_vars, s, config.literal_policy))
            .collect::<Result<Vec<_>, _>>()?;
        let minterm_terms = minterms
            .iter()
            .map(|s| Term::parse(num_vars, s, config.literal_policy))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rows = vec![BitVector::new(minterms.len()); implicants.len()];
        let mut columns = vec![BitVector::new(implicants.len()); minterms.len()];
        for (i, implicant) in implicant_terms.iter().enumerate() {
            for (j, minterm) in minterm_terms.iter().enumerate() {
                if implicant.covers(minterm.assignment()) {
                    rows[i].set(j);
                    columns[j].set(i);
                }
            }
        }

        Ok(Self {
            num_vars,
            implicants,
            minterms,
            rows,
            columns,
            max_branches: config.max_branches,
        })
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn implicants(&self) -> &[String] {
        &self.implicants
    }

    pub fn minterms(&self) -> &[String] {
        &self.minterms
    }

    /// Minterms covered by each implicant.
    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    /// Implicants covering each minterm.
    pub fn columns(&self) -> &[BitVector] {
        &self.columns
    }

    /// Returns true if implicant `i` covers minterm `j`.
    pub fn covers(&self, i: usize, j: usize) -> bool {
        self.rows[i].get(j)
    }

    /// Returns true if the given implicants jointly cover every minterm.
    pub fn is_cover(&self, implicants: &[usize]) -> bool {
        let mut covered = BitVector::new(self.minterms.len());
        for &i in implicants {
            covered = covered.union(&self.rows[i]);
        }
        covered == BitVector::filled(self.minterms.len())
    }

    /// Minterms that no implicant covers.
    pub fn uncovered_minterms(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(&self.minterms)
            .filter(|(column, _)| column.is_zero())
            .map(|(_, minterm)| minterm.clone())
            .collect()
    }
}

/// One line per implicant: the implicant, then its row bits in minterm order.
impl fmt::Display for CoverTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.implicants.iter().map(|s| s.len()).max().unwrap_or(0);
        for (implicant, row) in self.implicants.iter().zip(&self.rows) {
            writeln!(f, "{:<width$} | {}", implicant, row, width = width)?;
        }
        Ok(())
    }
}
