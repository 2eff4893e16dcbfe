/// Placeholder residue used to pad the N-terminal end of a sequence
pub const SENTINEL: u8 = b'X';

/// Number of sentinels prepended to a sequence before scanning
pub const PADDING_LEN: usize = 4;

/// Window size (P4 to P4')
pub const WINDOW_LEN: usize = 8;

/// Number of window positions on the N-terminal side of the scissile bond
pub const WINDOW_P_SIDE: usize = 4;

// Windows shorter than this lack a P1' residue and are never cleavable
pub const MIN_WINDOW_LEN: usize = WINDOW_P_SIDE + 1;

pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
