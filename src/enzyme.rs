use crate::errors::*;
use crate::motif::Motif;

/// Entry in the built-in table of specificities. A window is cleavable if it
/// matches every pattern; patterns are anchored at P4 so e.g. `...K` pins K
/// to P1 and `....[^P]` excludes proline at P1'.
#[derive(Clone, Debug, PartialEq)]
pub struct Enzyme {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

const ENZYMES: [Enzyme; 19] = [
    Enzyme {
        name: "Trypsin",
        patterns: &["...[KR]", "....[^P]"],
    },
    Enzyme {
        name: "Lys-C",
        patterns: &["...K"],
    },
    Enzyme {
        name: "Lys-N",
        patterns: &["....K"],
    },
    Enzyme {
        name: "Arg-C",
        patterns: &["...R", "....[^P]"],
    },
    Enzyme {
        name: "Asp-N",
        patterns: &["....D"],
    },
    Enzyme {
        name: "Glu-C",
        patterns: &["...E"],
    },
    Enzyme {
        name: "Glu-C-DE",
        patterns: &["...[DE]"],
    },
    Enzyme {
        name: "Chymotrypsin",
        patterns: &["...[FYW]", "....[^P]"],
    },
    Enzyme {
        name: "Proline-Endopeptidase",
        patterns: &["..[HKR]P", "....[^P]"],
    },
    Enzyme {
        name: "Thrombin",
        patterns: &["..GRG"],
    },
    Enzyme {
        name: "Factor-Xa",
        patterns: &["[AFGILTVM][DE]GR"],
    },
    Enzyme {
        name: "Enterokinase",
        patterns: &["[DE][DE][DE]K"],
    },
    Enzyme {
        name: "Granzyme-B",
        patterns: &["IEPD"],
    },
    Enzyme {
        name: "Caspase-1",
        patterns: &["[FWYL].[HAT]D", "....[^PEDQKR]"],
    },
    Enzyme {
        name: "CNBr",
        patterns: &["...M"],
    },
    Enzyme {
        name: "Formic-Acid",
        patterns: &["...D"],
    },
    Enzyme {
        name: "Iodosobenzoic-Acid",
        patterns: &["...W"],
    },
    Enzyme {
        name: "NTCB",
        patterns: &["....C"],
    },
    Enzyme {
        name: "Hydroxylamine",
        patterns: &["...NG"],
    },
];

impl Enzyme {
    pub fn get(name: &str) -> Option<Enzyme> {
        ENZYMES
            .iter()
            .find(|enzyme| enzyme.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    pub fn all() -> &'static [Enzyme] {
        &ENZYMES
    }

    pub fn trypsin() -> Enzyme {
        ENZYMES[0].clone()
    }

    pub fn motifs(&self) -> Result<Vec<Motif>> {
        self.patterns
            .iter()
            .map(|pattern| Motif::new(pattern))
            .collect::<Result<Vec<_>>>()
            .chain_err(|| format!("invalid built-in specificity {:?}", self.name))
    }
}
