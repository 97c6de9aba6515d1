//! Reduction of a covering table to a minimum cover.
//!
//! The reduction repeats three simplifications until none applies:
//!
//! 1. **Essential implicants.** A live minterm reachable from exactly one live
//!    implicant forces that implicant into the cover; every minterm it covers is resolved.
//! 2. **Row dominance.** An implicant whose live minterms are a subset of another
//!    live implicant's is dropped. Of two implicants with equal coverage, the one
//!    that comes later in [`cmp_terms`] order is dropped.
//! 3. **Column dominance.** A minterm whose live implicants are a superset of another
//!    live minterm's is resolved for free: whatever covers the smaller set covers it
//!    too. Of two minterms with equal sets, the later one in [`cmp_terms`] order goes.
//!
//! When a pass changes nothing, the table is a *cyclic core* and the reduction
//! branches on a pivot implicant (the one covering the most live minterms, earliest
//! in [`cmp_terms`] order on ties): once with the pivot in the cover and once with
//! the pivot discarded. The smaller resulting cover wins; on equal sizes the cover
//! containing the pivot wins.
//!
//! Each branch works on its own copy of the reduction state, so the search is a
//! plain recursive function returning the best cover of its subproblem.

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::bitvec::BitVector;
use crate::error::CoverError;
use crate::order::cmp_terms;
use crate::table::CoverTable;

/// A minimum cover: selected implicants, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    indices: Vec<usize>,
    terms: Vec<String>,
}

impl Cover {
    fn new(table: &CoverTable, indices: Vec<usize>) -> Self {
        let terms = indices.iter().map(|&i| table.implicants()[i].clone()).collect();
        Self { indices, terms }
    }

    /// Selected implicant strings, essential implicants first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Indices of the selected implicants in the table.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }

    /// Selected implicant strings in canonical order.
    pub fn sorted_terms(&self) -> Vec<String> {
        let mut terms = self.terms.clone();
        terms.sort_by(|a, b| cmp_terms(a, b));
        terms
    }
}

/// Sum-of-products notation: `ab + BC + bc`.
impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms.join(" + "))
    }
}

/// Snapshot of a reduction in progress.
#[derive(Debug, Clone)]
struct Reduction {
    /// Implicants still undecided
    rows_alive: BitVector,
    /// Minterms still unresolved
    columns_alive: BitVector,
    /// Implicants selected so far, in selection order
    picked: Vec<usize>,
}

#[derive(Debug)]
enum Outcome {
    /// Every minterm resolved by the picked implicants.
    Covered(Vec<usize>),
    /// Some minterms (given) can no longer be covered.
    Stuck(BitVector),
}

struct Reducer<'a> {
    table: &'a CoverTable,
    branches: usize,
}

impl CoverTable {
    /// Computes a minimum cover of all minterms.
    ///
    /// Fails with [`CoverError::Uncoverable`] when some minterm is covered by no
    /// implicant, and with [`CoverError::BranchLimit`] when the configured branch
    /// budget runs out.
    ///
    /// ```
    /// use qm_cover::table::CoverTable;
    ///
    /// let table = CoverTable::new(3, &["ab", "aC", "BC", "bc"], &["ABC", "Abc", "aBC", "abC", "abc"]).unwrap();
    /// let cover = table.minimize().unwrap();
    /// assert_eq!(cover.terms(), ["BC", "bc", "ab"]);
    /// assert_eq!(cover.sorted_terms(), ["ab", "BC", "bc"]);
    /// ```
    pub fn minimize(&self) -> Result<Cover, CoverError> {
        debug!(
            "minimize({} implicants, {} minterms)",
            self.implicants().len(),
            self.minterms().len()
        );

        let uncovered = self.uncovered_minterms();
        if !uncovered.is_empty() {
            return Err(CoverError::Uncoverable { minterms: uncovered });
        }

        let state = Reduction {
            rows_alive: BitVector::filled(self.implicants().len()),
            columns_alive: BitVector::filled(self.minterms().len()),
            picked: Vec::new(),
        };
        let mut reducer = Reducer { table: self, branches: 0 };
        match reducer.reduce(state)? {
            Outcome::Covered(indices) => {
                debug!("minimize: cover of size {} after {} branches", indices.len(), reducer.branches);
                Ok(Cover::new(self, indices))
            }
            Outcome::Stuck(left) => Err(CoverError::Uncoverable {
                minterms: left.iter().map(|j| self.minterms()[j].clone()).collect(),
            }),
        }
    }
}

impl Reducer<'_> {
    fn reduce(&mut self, mut state: Reduction) -> Result<Outcome, CoverError> {
        while !state.rows_alive.is_zero() && !state.columns_alive.is_zero() {
            if let Some(j) = self.dead_column(&state) {
                trace!("reduce: minterm {} has no implicant left", self.table.minterms()[j]);
                return Ok(Outcome::Stuck(state.columns_alive));
            }

            let mut progress = self.extract_essentials(&mut state);
            progress |= self.prune_dominated_rows(&mut state);
            progress |= self.prune_dominated_columns(&mut state);
            if !progress {
                return self.branch(state);
            }
        }

        if state.columns_alive.is_zero() {
            Ok(Outcome::Covered(state.picked))
        } else {
            Ok(Outcome::Stuck(state.columns_alive))
        }
    }

    /// Finds a live minterm that no live implicant covers.
    fn dead_column(&self, state: &Reduction) -> Option<usize> {
        state
            .columns_alive
            .iter()
            .find(|&j| self.table.columns()[j].intersection(&state.rows_alive).is_zero())
    }

    fn extract_essentials(&self, state: &mut Reduction) -> bool {
        let mut found = false;
        for j in 0..self.table.minterms().len() {
            if !state.columns_alive.get(j) {
                continue;
            }
            let live = self.table.columns()[j].intersection(&state.rows_alive);
            if live.cardinality() != 1 {
                continue;
            }
            if let Some(i) = live.first_set() {
                debug!(
                    "essential: {} (only cover of {})",
                    self.table.implicants()[i],
                    self.table.minterms()[j]
                );
                for k in self.table.rows()[i].iter() {
                    state.columns_alive.clear(k);
                }
                state.rows_alive.clear(i);
                state.picked.push(i);
                found = true;
            }
        }
        found
    }

    fn prune_dominated_rows(&self, state: &mut Reduction) -> bool {
        let implicants = self.table.implicants();
        let rows = self.table.rows();
        let mut changed = false;

        for i in 0..rows.len() {
            for j in (i + 1)..rows.len() {
                if !state.rows_alive.get(i) || !state.rows_alive.get(j) {
                    continue;
                }
                let first = rows[i].intersection(&state.columns_alive);
                let second = rows[j].intersection(&state.columns_alive);
                let removed = match (first.is_superset_of(&second), second.is_superset_of(&first)) {
                    (true, true) => {
                        if cmp_terms(&implicants[i], &implicants[j]) == Ordering::Less {
                            j
                        } else {
                            i
                        }
                    }
                    (true, false) => j,
                    (false, true) => i,
                    (false, false) => continue,
                };
                trace!("row dominance: dropping {}", implicants[removed]);
                state.rows_alive.clear(removed);
                changed = true;
            }
        }
        changed
    }

    fn prune_dominated_columns(&self, state: &mut Reduction) -> bool {
        let minterms = self.table.minterms();
        let columns = self.table.columns();
        let mut changed = false;

        for i in 0..columns.len() {
            for j in (i + 1)..columns.len() {
                if !state.columns_alive.get(i) || !state.columns_alive.get(j) {
                    continue;
                }
                let first = columns[i].intersection(&state.rows_alive);
                let second = columns[j].intersection(&state.rows_alive);
                // The superset column is the one that goes.
                let removed = match (first.is_superset_of(&second), second.is_superset_of(&first)) {
                    (true, true) => {
                        if cmp_terms(&minterms[i], &minterms[j]) == Ordering::Less {
                            j
                        } else {
                            i
                        }
                    }
                    (true, false) => i,
                    (false, true) => j,
                    (false, false) => continue,
                };
                trace!("column dominance: dropping {}", minterms[removed]);
                state.columns_alive.clear(removed);
                changed = true;
            }
        }
        changed
    }

    /// Picks the live implicant covering the most live minterms.
    fn select_pivot(&self, state: &Reduction) -> Option<usize> {
        let implicants = self.table.implicants();
        let mut best: Option<(usize, usize)> = None;
        for i in state.rows_alive.iter() {
            let count = self.table.rows()[i].intersection(&state.columns_alive).cardinality();
            best = match best {
                Some((b, best_count))
                    if best_count > count
                        || (best_count == count && cmp_terms(&implicants[i], &implicants[b]) != Ordering::Less) =>
                {
                    Some((b, best_count))
                }
                _ => Some((i, count)),
            };
        }
        best.map(|(i, _)| i)
    }

    fn branch(&mut self, state: Reduction) -> Result<Outcome, CoverError> {
        self.branches += 1;
        if let Some(limit) = self.table.max_branches {
            if self.branches > limit {
                return Err(CoverError::BranchLimit { limit });
            }
        }

        let Some(pivot) = self.select_pivot(&state) else {
            return Ok(Outcome::Stuck(state.columns_alive));
        };
        debug!(
            "branch #{} on {} ({} implicants picked so far)",
            self.branches,
            self.table.implicants()[pivot],
            state.picked.len()
        );

        let mut include = state.clone();
        include.picked.push(pivot);
        for k in self.table.rows()[pivot].iter() {
            include.columns_alive.clear(k);
        }
        include.rows_alive.clear(pivot);

        let mut exclude = state;
        exclude.rows_alive.clear(pivot);

        let with_pivot = self.reduce(include)?;
        let without_pivot = self.reduce(exclude)?;
        trace!("branch on {}: {:?} vs {:?}", self.table.implicants()[pivot], with_pivot, without_pivot);

        Ok(match (with_pivot, without_pivot) {
            (Outcome::Covered(a), Outcome::Covered(b)) => {
                if a.len() > b.len() {
                    Outcome::Covered(b)
                } else {
                    Outcome::Covered(a)
                }
            }
            (Outcome::Covered(a), Outcome::Stuck(_)) => Outcome::Covered(a),
            (Outcome::Stuck(_), Outcome::Covered(b)) => Outcome::Covered(b),
            (Outcome::Stuck(left), Outcome::Stuck(_)) => Outcome::Stuck(left),
        })
    }
}
