use tracing::{debug, warn};

use crate::cache::DigestCache;
use crate::constants::{MIN_WINDOW_LEN, PADDING_LEN};
use crate::errors::*;
use crate::specificity::Specificity;
use crate::window::PaddedSequence;

/// Outcome of probing a single bond
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cleavage {
    Products {
        n_terminal: Vec<u8>,
        c_terminal: Vec<u8>,
    },
    Uncleaved,
}

impl Cleavage {
    pub fn is_cleaved(&self) -> bool {
        match self {
            Cleavage::Products { .. } => true,
            Cleavage::Uncleaved => false,
        }
    }
}

/// Peptide spanning one or more consecutive fragments; coordinates are
/// 1-based and inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peptide {
    pub start: usize,
    pub end: usize,
    pub missed_cleavages: usize,
    pub sequence: Vec<u8>,
}

impl Peptide {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Applies a specificity to protein sequences. Holds no mutable state beyond
/// the optional result cache, so a single instance can be shared between
/// threads.
#[derive(Debug)]
pub struct Digester {
    specificity: Specificity,
    cache: Option<DigestCache>,
}

impl Digester {
    pub fn new(specificity: Specificity) -> Digester {
        Digester {
            specificity,
            cache: None,
        }
    }

    pub fn named(name: &str) -> Result<Digester> {
        Ok(Digester::new(Specificity::named(name)?))
    }

    pub fn with_cache(mut self, cache: DigestCache) -> Digester {
        self.cache = Some(cache);
        self
    }

    pub fn specificity(&self) -> &Specificity {
        &self.specificity
    }

    pub fn cache(&self) -> Option<&DigestCache> {
        self.cache.as_ref()
    }

    /// Probes the bond following residue `position` (1-based).
    ///
    /// Returns `InvalidPosition` unless `1 <= position <= len(sequence)`; a
    /// bond that does not match the specificity yields `Cleavage::Uncleaved`.
    pub fn cut(&self, sequence: &[u8], position: isize) -> Result<Cleavage> {
        let sequence = PaddedSequence::new(sequence);

        if position < 1 || position as usize > sequence.len() {
            warn!(
                position,
                length = sequence.len(),
                "cannot cut outside of sequence"
            );

            return Err(ErrorKind::InvalidPosition(position, sequence.len()).into());
        }

        Ok(self.cut_bond(&sequence, position as usize))
    }

    /// Splits the sequence at every cleavable bond in a single forward scan
    pub fn digest(&self, sequence: &[u8]) -> Vec<Vec<u8>> {
        let sequence = PaddedSequence::new(sequence);

        match &self.cache {
            Some(cache) => cache
                .fragments
                .get_or_compute(sequence.sequence(), || self.scan_fragments(&sequence)),
            None => self.scan_fragments(&sequence),
        }
    }

    /// Ascending 1-based positions of all cleavable bonds
    pub fn cleavage_sites(&self, sequence: &[u8]) -> Vec<usize> {
        let sequence = PaddedSequence::new(sequence);

        match &self.cache {
            Some(cache) => cache
                .sites
                .get_or_compute(sequence.sequence(), || self.scan_sites(&sequence)),
            None => self.scan_sites(&sequence),
        }
    }

    /// True if any bond is cleavable; stops at the first one found
    pub fn is_substrate(&self, sequence: &[u8]) -> bool {
        let sequence = PaddedSequence::new(sequence);

        match &self.cache {
            Some(cache) => cache
                .substrates
                .get_or_compute(sequence.sequence(), || self.probe_bonds(&sequence)),
            None => self.probe_bonds(&sequence),
        }
    }

    /// All peptides with up to `missed_cleavages` uncut cleavage sites
    pub fn peptides(&self, sequence: &[u8], missed_cleavages: usize) -> Vec<Peptide> {
        let fragments = self.digest(sequence);

        let mut peptides = Vec::new();
        let mut offset = 0;
        for (idx, fragment) in fragments.iter().enumerate() {
            let mut residues = Vec::new();
            let spans = fragments[idx..]
                .iter()
                .take(missed_cleavages.saturating_add(1));

            for (missed, next) in spans.enumerate() {
                residues.extend_from_slice(next);
                if !residues.is_empty() {
                    peptides.push(Peptide {
                        start: offset + 1,
                        end: offset + residues.len(),
                        missed_cleavages: missed,
                        sequence: residues.clone(),
                    });
                }
            }

            offset += fragment.len();
        }

        peptides
    }

    fn is_cleavable(&self, window: &[u8]) -> bool {
        window.len() >= MIN_WINDOW_LEN && self.specificity.matches(window)
    }

    fn cut_bond(&self, sequence: &PaddedSequence, bond: usize) -> Cleavage {
        if self.is_cleavable(sequence.bond_window(bond)) {
            let (n_terminal, c_terminal) = sequence.sequence().split_at(bond);

            Cleavage::Products {
                n_terminal: n_terminal.to_vec(),
                c_terminal: c_terminal.to_vec(),
            }
        } else {
            Cleavage::Uncleaved
        }
    }

    fn probe_bonds(&self, sequence: &PaddedSequence) -> bool {
        (1..=sequence.len()).any(|bond| self.cut_bond(sequence, bond).is_cleaved())
    }

    fn scan_sites(&self, sequence: &PaddedSequence) -> Vec<usize> {
        let sites: Vec<usize> = (1..=sequence.len())
            .filter(|&bond| self.is_cleavable(sequence.bond_window(bond)))
            .collect();

        debug!(
            specificity = %self.specificity,
            length = sequence.len(),
            sites = sites.len(),
            "scanned for cleavage sites"
        );

        sites
    }

    fn scan_fragments(&self, sequence: &PaddedSequence) -> Vec<Vec<u8>> {
        let mut fragments = Vec::new();
        // Padded offset of the first residue of the pending fragment
        let mut pending = PADDING_LEN;

        if !sequence.is_empty() {
            let first = PaddedSequence::window_start(1);
            let last = PaddedSequence::window_start(sequence.len());

            for start in first..=last {
                if self.is_cleavable(sequence.window(start)) {
                    let cut = PaddedSequence::cut_offset(start);

                    fragments.push(sequence.fragment(pending, cut).to_vec());
                    pending = cut;
                }
            }
        }

        fragments.push(sequence.fragment(pending, sequence.padded().len()).to_vec());

        debug!(
            specificity = %self.specificity,
            length = sequence.len(),
            fragments = fragments.len(),
            "digested sequence"
        );

        fragments
    }
}
