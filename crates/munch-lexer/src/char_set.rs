const SIZE: usize = 2;

/// A set of ASCII characters, usable in `const` contexts.
///
/// Characters outside the ASCII range are never members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CharSet {
    bits: [u64; SIZE],
}

impl CharSet {
    pub const EMPTY: Self = Self { bits: [0; SIZE] };
    const BITS_PER_SLOT: u32 = u64::BITS;

    pub const BINARY_DIGITS: Self = Self::new("01");
    pub const DIGITS: Self = Self::new("0123456789");
    pub const HEX_DIGITS: Self = Self::DIGITS.union(&Self::new("abcdef"));
    pub const LOWER: Self = Self::new("abcdefghijklmnopqrstuvwxyz");
    pub const UPPER: Self = Self::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    pub const IDENTIFIER: Self =
        Self::LOWER.union(&Self::UPPER).union(&Self::DIGITS).union(&Self::new("_"));
    pub const WHITESPACE: Self = Self::new(" \t\n\r");

    /// Builds a set from the ASCII bytes of `chars`.
    ///
    /// Panics (at compile time when used in a constant) on non-ASCII input.
    pub const fn new(chars: &str) -> Self {
        let bytes = chars.as_bytes();
        let mut set = Self::EMPTY;

        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i].is_ascii(), "CharSet only holds ASCII characters");
            set = set.with(bytes[i]);
            i += 1;
        }

        set
    }

    const fn with(mut self, byte: u8) -> Self {
        let slot_index = (byte as u32 / Self::BITS_PER_SLOT) as usize;
        let bit_index = byte as u32 % Self::BITS_PER_SLOT;
        self.bits[slot_index] |= 1 << bit_index;
        self
    }

    pub const fn union(mut self, other: &Self) -> Self {
        let mut i = 0;

        while i < self.bits.len() {
            self.bits[i] |= other.bits[i];
            i += 1;
        }

        self
    }

    pub const fn contains(&self, c: char) -> bool {
        if !c.is_ascii() {
            return false;
        }

        let byte = c as u32;
        let slot_index = (byte / Self::BITS_PER_SLOT) as usize;
        let bit_index = byte % Self::BITS_PER_SLOT;
        let mask = 1 << bit_index;

        self.bits[slot_index] & mask != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits[0] == 0 && self.bits[1] == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_sets() {
        assert!(CharSet::DIGITS.contains('7'));
        assert!(!CharSet::DIGITS.contains('a'));
        assert!(CharSet::HEX_DIGITS.contains('f'));
        assert!(!CharSet::HEX_DIGITS.contains('F'));
        assert!(CharSet::BINARY_DIGITS.contains('1'));
        assert!(!CharSet::BINARY_DIGITS.contains('2'));
        assert!(CharSet::IDENTIFIER.contains('_'));
        assert!(CharSet::IDENTIFIER.contains('Z'));
        assert!(CharSet::IDENTIFIER.contains('0'));
        assert!(!CharSet::IDENTIFIER.contains('-'));
        assert!(CharSet::WHITESPACE.contains('\n'));
        assert!(CharSet::EMPTY.is_empty());
    }

    #[test]
    fn non_ascii_is_never_a_member() {
        let set = CharSet::LOWER.union(&CharSet::UPPER);
        assert!(!set.contains('é'));
        assert!(!set.contains('λ'));
    }

    #[test]
    fn high_ascii_lands_in_second_slot() {
        let set = CharSet::new("~");
        assert!(set.contains('~'));
        assert!(!set.contains('>'));
        assert!(!set.is_empty());
    }
}
