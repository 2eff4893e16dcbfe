use std::fmt;
use std::sync::Arc;

use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::motif::Motif;

pub type Predicate = Arc<dyn Fn(&[u8]) -> bool + Send + Sync>;

/// Decides whether the bond at the center of an 8 residue window
/// (P4 P3 P2 P1 | P1' P2' P3' P4') is cleavable.
///
/// Named specificities and pattern lists both compile to a list of motifs
/// that must all match; predicates are evaluated as-is. Implementations must
/// be deterministic, since results may be cached per sequence.
#[derive(Clone)]
pub enum Specificity {
    Motifs { name: String, motifs: Vec<Motif> },
    Predicate(Predicate),
}

impl Specificity {
    /// Looks up a specificity in the built-in table of enzymes
    pub fn named(name: &str) -> Result<Specificity> {
        match Enzyme::get(name) {
            Some(enzyme) => Ok(Specificity::Motifs {
                name: enzyme.name.to_owned(),
                motifs: enzyme.motifs()?,
            }),
            None => Err(ErrorKind::UnknownSpecificity(name.to_owned()).into()),
        }
    }

    /// Custom specificity where every pattern must match the window
    pub fn patterns<I, S>(patterns: I) -> Result<Specificity>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let motifs = patterns
            .into_iter()
            .map(|pattern| Motif::new(pattern.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        if motifs.is_empty() {
            let reason = "no patterns given".to_owned();

            return Err(ErrorKind::InvalidPattern(String::new(), reason).into());
        }

        let name = motifs
            .iter()
            .map(Motif::pattern)
            .collect::<Vec<_>>()
            .join(" & ");

        Ok(Specificity::Motifs { name, motifs })
    }

    pub fn predicate<F>(func: F) -> Specificity
    where
        F: Fn(&[u8]) -> bool + Send + Sync + 'static,
    {
        Specificity::Predicate(Arc::new(func))
    }

    pub fn matches(&self, window: &[u8]) -> bool {
        match self {
            Specificity::Motifs { motifs, .. } => motifs.iter().all(|motif| motif.matches(window)),
            Specificity::Predicate(func) => func(window),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Specificity::Motifs { name, .. } => name,
            Specificity::Predicate(_) => "custom predicate",
        }
    }
}

impl fmt::Debug for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Specificity::Motifs { name, motifs } => f
                .debug_struct("Motifs")
                .field("name", name)
                .field("motifs", motifs)
                .finish(),
            Specificity::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
