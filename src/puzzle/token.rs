//! The token alphabet used to label cell values

/// A single-glyph cell value
pub type Token = char;

/// Placeholder for an unassigned cell; never a member of the alphabet
pub const OPEN_TOKEN: Token = '0';

const DIGITS: &[u8; 35] = b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The number of distinct single-glyph tokens
pub const MAX_ALPHABET: usize = DIGITS.len();

/// Maps a positive integer to its bijective base-35 numeral over the
/// digit alphabet `1-9,A-Z`.
///
/// This is an odometer-style system with no zero digit: counting runs
/// `1..9,A..Z,11,12,..` so that every positive integer has exactly one
/// representation. Grid sizes are capped at 35 so puzzle tokens are all
/// single glyphs, but the numbering itself has no such limit.
pub fn token_for(n: u32) -> String {
    assert!(n >= 1, "token numbering starts at 1");
    let mut n = n as usize;
    let mut token = String::new();
    while n > 0 {
        n -= 1;
        token.insert(0, DIGITS[n % MAX_ALPHABET] as char);
        n /= MAX_ALPHABET;
    }
    token
}

/// The first `size` tokens in numbering order; requires `size <= 35`
pub fn alphabet(size: usize) -> Vec<Token> {
    assert!(size <= MAX_ALPHABET);
    DIGITS[..size].iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::{alphabet, token_for, OPEN_TOKEN};

    #[test]
    fn single_digit_tokens() {
        assert_eq!(token_for(1), "1");
        assert_eq!(token_for(9), "9");
        assert_eq!(token_for(10), "A");
        assert_eq!(token_for(35), "Z");
    }

    #[test]
    fn odometer_carries() {
        assert_eq!(token_for(36), "11");
        assert_eq!(token_for(70), "1Z");
        assert_eq!(token_for(71), "21");
        assert_eq!(token_for(35 + 35 * 35), "ZZ");
        assert_eq!(token_for(36 + 35 * 35), "111");
    }

    #[test]
    fn tokens_are_distinct_and_reproducible() {
        let first: Vec<_> = (1..=100).map(token_for).collect();
        let second: Vec<_> = (1..=100).map(token_for).collect();
        assert_eq!(first, second);
        for (i, a) in first.iter().enumerate() {
            for b in &first[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn alphabet_matches_numbering() {
        let tokens = alphabet(35);
        assert_eq!(tokens.len(), 35);
        for (i, &token) in tokens.iter().enumerate() {
            assert_eq!(token.to_string(), token_for(i as u32 + 1));
        }
        assert!(!tokens.contains(&OPEN_TOKEN));
    }
}
