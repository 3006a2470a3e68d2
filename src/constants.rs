/// Largest value held in the small-value caches.
pub const MAX_CONSTANT: usize = 16;

/// Operands shorter than this many decimal digits are multiplied directly in
/// native arithmetic instead of recursing.
pub const KARATSUBA_BASE_DIGITS: usize = 5;

/// Characters of context kept around the offending character in a parse
/// error snippet.
pub const FORMAT_CONTEXT_CHARS: usize = 4;
