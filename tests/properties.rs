//! Property tests for bit vectors and covers.

use proptest::prelude::*;

use qm_cover::bitvec::BitVector;
use qm_cover::CoverTable;

fn to_bitvec(bits: &[bool]) -> BitVector {
    BitVector::from_indices(bits.len(), bits.iter().enumerate().filter(|(_, &b)| b).map(|(i, _)| i))
}

/// Three bit patterns of one common length.
fn same_size_triple() -> impl Strategy<Value = (Vec<bool>, Vec<bool>, Vec<bool>)> {
    (0usize..200).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

fn letter(var: usize, value: bool) -> char {
    let c = (b'a' + var as u8) as char;
    if value {
        c
    } else {
        c.to_ascii_uppercase()
    }
}

/// A random cover problem that is always coverable: every minterm is also offered as an implicant.
fn cover_problem() -> impl Strategy<Value = (usize, Vec<String>, Vec<String>)> {
    (1usize..=3).prop_flat_map(|num_vars| {
        let all: Vec<usize> = (0..1usize << num_vars).collect();
        let len = all.len();
        (
            Just(num_vars),
            prop::sample::subsequence(all, 1..=len),
            prop::collection::vec(prop::collection::vec(any::<Option<bool>>(), num_vars), 0..4),
        )
            .prop_map(|(num_vars, bits, extra)| {
                let minterms: Vec<String> = bits
                    .iter()
                    .map(|&m| (0..num_vars).map(|k| letter(k, (m >> k) & 1 == 1)).collect())
                    .collect();
                let mut implicants = minterms.clone();
                implicants.extend(extra.iter().map(|term| {
                    term.iter()
                        .enumerate()
                        .filter_map(|(k, value)| value.map(|v| letter(k, v)))
                        .collect::<String>()
                }));
                (num_vars, implicants, minterms)
            })
    })
}

/// Size of the smallest cover, by trying every subset of implicants.
fn brute_force_min(table: &CoverTable) -> usize {
    let n = table.implicants().len();
    (0u32..1 << n)
        .filter_map(|subset| {
            let picked: Vec<usize> = (0..n).filter(|&i| (subset >> i) & 1 == 1).collect();
            table.is_cover(&picked).then_some(picked.len())
        })
        .min()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn set_then_get(bits in prop::collection::vec(any::<bool>(), 1..300)) {
        let mut bv = BitVector::new(bits.len());
        for i in 0..bits.len() {
            bv.set(i);
            prop_assert!(bv.get(i));
            bv.clear(i);
            prop_assert!(!bv.get(i));
        }
        prop_assert!(bv.is_zero());

        let bv = to_bitvec(&bits);
        for (i, &b) in bits.iter().enumerate() {
            prop_assert_eq!(bv.get(i), b);
        }
        prop_assert_eq!(bv.cardinality(), bits.iter().filter(|&&b| b).count());
        prop_assert_eq!(bv.first_set(), bits.iter().position(|&b| b));
    }

    #[test]
    fn algebraic_laws((a, b, c) in same_size_triple()) {
        let (a, b, c) = (to_bitvec(&a), to_bitvec(&b), to_bitvec(&c));

        prop_assert_eq!(&a | &b, &b | &a);
        prop_assert_eq!(&a & &b, &b & &a);
        prop_assert_eq!(&(&a | &b) | &c, &a | &(&b | &c));
        prop_assert_eq!(&(&a & &b) & &c, &a & &(&b & &c));
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert_eq!(&a | &!&a, BitVector::filled(a.size()));
        prop_assert!((&a ^ &a).is_zero());
        prop_assert!((&a | &b).is_superset_of(&a));
    }

    #[test]
    fn cover_is_valid_minimal_and_stable((num_vars, implicants, minterms) in cover_problem()) {
        let table = CoverTable::new(num_vars, &implicants, &minterms).unwrap();
        let cover = table.minimize().unwrap();

        prop_assert!(table.is_cover(cover.indices()));
        for (&i, term) in cover.indices().iter().zip(cover.terms()) {
            prop_assert_eq!(&implicants[i], term);
        }
        prop_assert_eq!(cover.len(), brute_force_min(&table));
        prop_assert_eq!(table.minimize().unwrap(), cover);
    }
}
