use std::fmt;

use crate::alphabet;
use crate::constants::WINDOW_LEN;
use crate::errors::*;

/// Residues accepted at a single window position
#[derive(Clone, Debug, PartialEq)]
pub enum Residues {
    Any,
    OneOf(Vec<u8>),
    NoneOf(Vec<u8>),
}

impl Residues {
    pub fn matches(&self, candidate: u8) -> bool {
        let accepts = |members: &[u8]| {
            members
                .iter()
                .any(|&query| alphabet::matches(query, candidate))
        };

        match self {
            Residues::Any => true,
            Residues::OneOf(members) => accepts(members),
            Residues::NoneOf(members) => !accepts(members),
        }
    }
}

/// Positional pattern anchored at the first (P4) symbol of a window.
#[derive(Clone, Debug, PartialEq)]
pub struct Motif {
    pattern: String,
    positions: Vec<Residues>,
}

impl Motif {
    /// Compiles a pattern such as `...[KR][^P]` or `AGGAL[^P]`.
    ///
    /// Each element pins one window position: a residue letter, `.` for any
    /// symbol, `[..]` / `[^..]` for (negated) classes, optionally followed by
    /// `{n}` to repeat the element `n` times.
    pub fn new(pattern: &str) -> Result<Motif> {
        let positions = parse(pattern)
            .map_err(|reason| ErrorKind::InvalidPattern(pattern.into(), reason))?;

        Ok(Motif {
            pattern: pattern.to_owned(),
            positions,
        })
    }

    pub fn matches(&self, window: &[u8]) -> bool {
        self.len() <= window.len()
            && self
                .positions
                .iter()
                .zip(window.iter())
                .all(|(residues, &candidate)| residues.matches(candidate))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

fn parse(pattern: &str) -> ::std::result::Result<Vec<Residues>, String> {
    let mut positions: Vec<Residues> = Vec::new();
    let mut symbols = pattern.bytes().peekable();

    while let Some(symbol) = symbols.next() {
        match symbol {
            b'.' => positions.push(Residues::Any),
            b'[' => {
                let negated = symbols.peek() == Some(&b'^');
                if negated {
                    symbols.next();
                }

                let mut members = Vec::new();
                loop {
                    match symbols.next() {
                        Some(b']') => break,
                        Some(member) if alphabet::is_residue(member) => {
                            members.push(member.to_ascii_uppercase())
                        }
                        Some(member) => {
                            return Err(format!("unexpected {:?} in class", member as char))
                        }
                        None => return Err("unterminated class".into()),
                    }
                }

                if members.is_empty() {
                    return Err("empty class".into());
                } else if negated {
                    positions.push(Residues::NoneOf(members));
                } else {
                    positions.push(Residues::OneOf(members));
                }
            }
            b'{' => {
                let last = match positions.pop() {
                    Some(last) => last,
                    None => return Err("repeat without preceding element".into()),
                };

                let mut digits = String::new();
                loop {
                    match symbols.next() {
                        Some(b'}') => break,
                        Some(digit) if digit.is_ascii_digit() => digits.push(digit as char),
                        Some(other) => {
                            return Err(format!("unexpected {:?} in repeat", other as char))
                        }
                        None => return Err("unterminated repeat".into()),
                    }
                }

                let count: usize = digits
                    .parse()
                    .map_err(|_| format!("invalid repeat count {:?}", digits))?;
                if count == 0 {
                    return Err("repeat count must be positive".into());
                }

                for _ in 0..count.min(WINDOW_LEN + 1) {
                    positions.push(last.clone());
                }
            }
            symbol if alphabet::is_residue(symbol) => {
                positions.push(Residues::OneOf(vec![symbol.to_ascii_uppercase()]))
            }
            symbol => return Err(format!("unexpected {:?}", symbol as char)),
        }

        if positions.len() > WINDOW_LEN {
            return Err(format!("longer than the {} residue window", WINDOW_LEN));
        }
    }

    if positions.is_empty() {
        Err("empty pattern".into())
    } else {
        Ok(positions)
    }
}
