const AMBIGUITY: [(u8, &[u8]); 3] = [(b'B', b"DNB"), (b'Z', b"EQZ"), (b'J', b"ILJ")];

lazy_static! {
    static ref RESIDUES: Vec<bool> = {
        let mut table = vec![false; 26 * 26];

        for query in b'A'..=b'Z' {
            table[offset(query, query)] = true;
        }

        for (query, matches) in &AMBIGUITY {
            for &candidate in matches.iter() {
                table[offset(*query, candidate)] = true;
            }
        }

        table
    };
}

fn offset(query: u8, candidate: u8) -> usize {
    (query - b'A') as usize * 26 + (candidate - b'A') as usize
}

pub fn is_residue(symbol: u8) -> bool {
    symbol.is_ascii_alphabetic()
}

/// Returns true if the (possibly ambiguous) residue `query` accepts `candidate`
pub fn matches(query: u8, candidate: u8) -> bool {
    let query = query.to_ascii_uppercase();
    let candidate = candidate.to_ascii_uppercase();

    if query == candidate {
        true
    } else if query.is_ascii_uppercase() && candidate.is_ascii_uppercase() {
        RESIDUES[offset(query, candidate)]
    } else {
        false
    }
}
