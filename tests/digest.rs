extern crate cleavr;

use std::sync::Arc;

use cleavr::errors::ErrorKind;
use cleavr::{Cleavage, DigestCache, Digester, Peptide, Specificity};

const SEQUENCES: [&[u8]; 10] = [
    b"",
    b"K",
    b"KR",
    b"AGGALH",
    b"AGGALP",
    b"AARAGQTVRFSDAAA",
    b"AAAAMAELVIKPYYYYYYY",
    b"MKWVTFISLLFLFSSAYSRGVFRRDAHKSEVAHRFKDLGEENFKALVLIAFAQYLQQCPFEDHVK",
    b"KPKPRPRKRKAGGALHAGGALH",
    b"xkaxdpmkkp",
];

fn trypsin() -> Digester {
    Digester::named("trypsin").unwrap()
}

fn exact_match() -> Digester {
    Digester::new(Specificity::predicate(|window| window == b"MAELVIKP"))
}

fn digesters() -> Vec<Digester> {
    vec![
        trypsin(),
        exact_match(),
        Digester::named("lys-n").unwrap(),
        Digester::named("asp-n").unwrap(),
        Digester::named("caspase-1").unwrap(),
        Digester::new(Specificity::patterns(&["AGGAL[^P]"]).unwrap()),
        Digester::new(Specificity::patterns(&[".{3}[KR]", "....[^P]"]).unwrap()),
        Digester::new(Specificity::predicate(|_| true)),
        Digester::new(Specificity::predicate(|_| false)),
        Digester::new(Specificity::predicate(|window| window.contains(&b'X'))),
    ]
}

fn products(n_terminal: &[u8], c_terminal: &[u8]) -> Cleavage {
    Cleavage::Products {
        n_terminal: n_terminal.to_vec(),
        c_terminal: c_terminal.to_vec(),
    }
}

fn fragments(values: &[&[u8]]) -> Vec<Vec<u8>> {
    values.iter().map(|v| v.to_vec()).collect()
}

#[test]
fn test_trypsin_cut() {
    let digester = trypsin();
    let seq = b"AARAGQTVRFSDAAA";

    assert_eq!(
        digester.cut(seq, 3).unwrap(),
        products(b"AAR", b"AGQTVRFSDAAA")
    );
    assert_eq!(
        digester.cut(seq, 9).unwrap(),
        products(b"AARAGQTVR", b"FSDAAA")
    );
    assert_eq!(digester.cut(seq, 4).unwrap(), Cleavage::Uncleaved);
}

#[test]
fn test_trypsin_digest() {
    let digester = trypsin();

    assert_eq!(
        digester.digest(b"AARAGQTVRFSDAAA"),
        fragments(&[b"AAR", b"AGQTVR", b"FSDAAA"])
    );
    assert_eq!(digester.cleavage_sites(b"AARAGQTVRFSDAAA"), vec![3, 9]);
}

#[test]
fn test_trypsin_skips_proline() {
    let digester = trypsin();

    assert_eq!(digester.cleavage_sites(b"AAKPAARAA"), vec![7]);
    assert_eq!(digester.digest(b"AAKPAARAA"), fragments(&[b"AAKPAAR", b"AA"]));
}

#[test]
fn test_first_bond_uses_sentinels() {
    let digester = trypsin();

    assert_eq!(digester.cut(b"KA", 1).unwrap(), products(b"K", b"A"));
    assert_eq!(digester.digest(b"KAK"), fragments(&[b"K", b"AK"]));
}

#[test]
fn test_last_bond_is_never_cleaved() {
    let digester = Digester::new(Specificity::predicate(|_| true));

    assert_eq!(digester.cut(b"AAK", 3).unwrap(), Cleavage::Uncleaved);
    assert_eq!(digester.cleavage_sites(b"AAK"), vec![1, 2]);
    assert_eq!(digester.digest(b"AAK"), fragments(&[b"A", b"A", b"K"]));
}

#[test]
fn test_exact_match_predicate() {
    assert_eq!(
        exact_match().digest(b"AAAAMAELVIKPYYYYYYY"),
        fragments(&[b"AAAAMAEL", b"VIKPYYYYYYY"])
    );
}

#[test]
fn test_invalid_position() {
    let digester = Digester::new(Specificity::patterns(&["AGGAL[^P]"]).unwrap());

    for &position in &[-1, 0, 7, 100] {
        match digester.cut(b"AGGALH", position) {
            Err(err) => match err.kind() {
                ErrorKind::InvalidPosition(value, length) => {
                    assert_eq!(*value, position);
                    assert_eq!(*length, 6);
                }
                other => panic!("unexpected error {:?}", other),
            },
            Ok(result) => panic!("cut at {} returned {:?}", position, result),
        }
    }

    // Still usable after a failed call
    assert!(digester.cut(b"AGGALH", 4).unwrap().is_cleaved());
}

#[test]
fn test_custom_pattern_substrate() {
    let digester = Digester::new(Specificity::patterns(&["AGGAL[^P]"]).unwrap());

    assert!(digester.is_substrate(b"AGGALH"));
    assert!(!digester.is_substrate(b"AGGALP"));
    assert!(!digester.is_substrate(b""));
}

#[test]
fn test_input_is_normalized() {
    let digester = trypsin();

    assert_eq!(digester.digest(b"aarag"), fragments(&[b"AAR", b"AG"]));
    assert_eq!(digester.cut(b"aarag", 3).unwrap(), products(b"AAR", b"AG"));
}

#[test]
fn test_real_x_residues_are_kept() {
    let digester = trypsin();

    assert_eq!(digester.digest(b"XKAX"), fragments(&[b"XK", b"AX"]));
}

#[test]
fn test_empty_sequence() {
    let digester = trypsin();

    assert_eq!(digester.digest(b""), fragments(&[b""]));
    assert!(digester.cleavage_sites(b"").is_empty());
    assert!(!digester.is_substrate(b""));
    assert!(digester.cut(b"", 1).is_err());
    assert!(digester.peptides(b"", 2).is_empty());
}

#[test]
fn test_digest_round_trip() {
    for digester in digesters() {
        for seq in SEQUENCES.iter() {
            let joined: Vec<u8> = digester.digest(seq).concat();

            assert_eq!(joined, seq.to_ascii_uppercase(), "{:?}", digester);
        }
    }
}

#[test]
fn test_fragments_are_never_empty() {
    for digester in digesters() {
        for seq in SEQUENCES.iter().filter(|seq| !seq.is_empty()) {
            assert!(digester.digest(seq).iter().all(|v| !v.is_empty()));
        }
    }
}

#[test]
fn test_cut_agrees_with_cleavage_sites() {
    for digester in digesters() {
        for seq in SEQUENCES.iter() {
            let sites = digester.cleavage_sites(seq);

            for position in 1..=seq.len() {
                let cleaved = digester.cut(seq, position as isize).unwrap().is_cleaved();

                assert_eq!(cleaved, sites.contains(&position));
            }
        }
    }
}

#[test]
fn test_cleavage_sites_are_ascending() {
    for digester in digesters() {
        for seq in SEQUENCES.iter() {
            let sites = digester.cleavage_sites(seq);

            assert!(sites.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(sites.iter().all(|&site| site >= 1 && site <= seq.len()));
        }
    }
}

#[test]
fn test_fragment_count() {
    for digester in digesters() {
        for seq in SEQUENCES.iter() {
            assert_eq!(
                digester.digest(seq).len(),
                digester.cleavage_sites(seq).len() + 1
            );
        }
    }
}

#[test]
fn test_cut_boundaries() {
    for digester in digesters() {
        for seq in SEQUENCES.iter().filter(|seq| !seq.is_empty()) {
            assert!(digester.cut(seq, 0).is_err());
            assert!(digester.cut(seq, seq.len() as isize + 1).is_err());
        }
    }
}

#[test]
fn test_is_substrate_agrees_with_cleavage_sites() {
    for digester in digesters() {
        for seq in SEQUENCES.iter() {
            assert_eq!(
                digester.is_substrate(seq),
                !digester.cleavage_sites(seq).is_empty()
            );
        }
    }
}

#[test]
fn test_peptides_with_missed_cleavages() {
    let peptide = |start, end, missed_cleavages, sequence: &[u8]| Peptide {
        start,
        end,
        missed_cleavages,
        sequence: sequence.to_vec(),
    };

    assert_eq!(
        trypsin().peptides(b"AARAGQTVRFSDAAA", 1),
        vec![
            peptide(1, 3, 0, b"AAR"),
            peptide(1, 9, 1, b"AARAGQTVR"),
            peptide(4, 9, 0, b"AGQTVR"),
            peptide(4, 15, 1, b"AGQTVRFSDAAA"),
            peptide(10, 15, 0, b"FSDAAA"),
        ]
    );

    let fully_cleaved = trypsin().peptides(b"AARAGQTVRFSDAAA", 0);
    assert_eq!(fully_cleaved.len(), 3);
    assert!(fully_cleaved.iter().all(|v| v.missed_cleavages == 0));
}

#[test]
fn test_cached_results_match() {
    let cached = trypsin().with_cache(DigestCache::new(4));
    let uncached = trypsin();

    for seq in SEQUENCES.iter() {
        for _ in 0..2 {
            assert_eq!(cached.digest(seq), uncached.digest(seq));
            assert_eq!(cached.cleavage_sites(seq), uncached.cleavage_sites(seq));
            assert_eq!(cached.is_substrate(seq), uncached.is_substrate(seq));
        }
    }

    let cache = cached.cache().unwrap();
    assert_eq!(cache.capacity(), 4);
    assert_eq!(cache.len(), 3 * 4);
}

#[test]
fn test_cached_results_are_copies() {
    let digester = trypsin().with_cache(DigestCache::default());

    let mut first = digester.digest(b"AARAGQTVRFSDAAA");
    first.clear();

    assert_eq!(digester.digest(b"AARAGQTVRFSDAAA").len(), 3);
}

#[test]
fn test_cache_is_keyed_by_normalized_sequence() {
    let digester = trypsin().with_cache(DigestCache::default());

    assert_eq!(digester.cleavage_sites(b"aarag"), vec![3]);
    assert_eq!(digester.cleavage_sites(b"AARAG"), vec![3]);
    assert_eq!(digester.cache().unwrap().len(), 1);
}

#[test]
fn test_shared_between_threads() {
    let digester = Arc::new(trypsin().with_cache(DigestCache::default()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let digester = Arc::clone(&digester);

            std::thread::spawn(move || digester.digest(b"AARAGQTVRFSDAAA"))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            fragments(&[b"AAR", b"AGQTVR", b"FSDAAA"])
        );
    }
}
