use std::cmp::min;

use crate::constants::*;

/// Uppercased working copy of a sequence with `PADDING_LEN` sentinels
/// prepended, so that every bond has a P4..P1 context.
///
/// Bonds are numbered from 1 by the residue on their N-terminal side; the
/// window for bond `p` starts at padded offset `p - 1 + PADDING_LEN - 3`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaddedSequence {
    residues: Vec<u8>,
}

impl PaddedSequence {
    pub fn new(sequence: &[u8]) -> PaddedSequence {
        let mut residues = Vec::with_capacity(sequence.len() + PADDING_LEN);
        residues.resize(PADDING_LEN, SENTINEL);
        residues.extend(sequence.iter().map(u8::to_ascii_uppercase));

        PaddedSequence { residues }
    }

    /// Number of real (unpadded) residues
    pub fn len(&self) -> usize {
        self.residues.len() - PADDING_LEN
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalized sequence without sentinels
    pub fn sequence(&self) -> &[u8] {
        &self.residues[PADDING_LEN..]
    }

    pub fn padded(&self) -> &[u8] {
        &self.residues
    }

    /// Padded offset of the first window symbol (P4) for a 1-based bond
    pub fn window_start(bond: usize) -> usize {
        debug_assert!(bond >= 1);
        bond - 1 + PADDING_LEN - (WINDOW_P_SIDE - 1)
    }

    /// Padded offset of the first residue C-terminal to the window at `start`
    pub fn cut_offset(start: usize) -> usize {
        start + WINDOW_P_SIDE
    }

    /// Up to `WINDOW_LEN` symbols starting at the given padded offset;
    /// shorter near the C-terminus, empty past the end.
    pub fn window(&self, start: usize) -> &[u8] {
        let start = min(start, self.residues.len());
        let end = min(start + WINDOW_LEN, self.residues.len());

        &self.residues[start..end]
    }

    pub fn bond_window(&self, bond: usize) -> &[u8] {
        self.window(Self::window_start(bond))
    }

    /// Residues between two padded offsets, never including sentinels
    pub fn fragment(&self, start: usize, end: usize) -> &[u8] {
        let start = start.max(PADDING_LEN).min(self.residues.len());
        let end = end.max(start).min(self.residues.len());

        &self.residues[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding() {
        let seq = PaddedSequence::new(b"aagk");

        assert_eq!(seq.padded(), b"XXXXAAGK");
        assert_eq!(seq.sequence(), b"AAGK");
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert!(PaddedSequence::new(b"").is_empty());
    }

    #[test]
    fn test_bond_windows() {
        let seq = PaddedSequence::new(b"AARAGQTVRFSDAAA");

        assert_eq!(seq.bond_window(1), b"XXXAARAG");
        assert_eq!(seq.bond_window(3), b"XAARAGQT");
        assert_eq!(seq.bond_window(9), b"QTVRFSDA");
        assert_eq!(seq.bond_window(14), b"SDAAA");
        assert_eq!(seq.bond_window(15), b"DAAA");
    }

    #[test]
    fn test_windows_past_end() {
        let seq = PaddedSequence::new(b"AK");

        assert_eq!(seq.window(5), b"K");
        assert_eq!(seq.window(6), b"");
        assert_eq!(seq.window(100), b"");
    }

    #[test]
    fn test_fragments_exclude_sentinels() {
        let seq = PaddedSequence::new(b"XAK");

        assert_eq!(seq.fragment(0, 5), b"X");
        assert_eq!(seq.fragment(5, 7), b"AK");
        assert_eq!(seq.fragment(5, 100), b"AK");
        assert_eq!(seq.fragment(6, 5), b"");
    }
}
