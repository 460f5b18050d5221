use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt;

// a c1 c2 c3 c4 c5 c6
static TABLE: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    BiMap::from_iter([
        ("0", 0b0101010),
        ("1", 0b0111111),
        ("-1", 0b0111010),
        ("D", 0b0001100),
        ("A", 0b0110000),
        ("!D", 0b0001101),
        ("!A", 0b0110001),
        ("-D", 0b0001111),
        ("-A", 0b0110011),
        ("D+1", 0b0011111),
        ("A+1", 0b0110111),
        ("D-1", 0b0001110),
        ("A-1", 0b0110010),
        ("D+A", 0b0000010),
        ("D-A", 0b0010011),
        ("A-D", 0b0000111),
        ("D&A", 0b0000000),
        ("D|A", 0b0010101),
        ("M", 0b1110000),
        ("!M", 0b1110001),
        ("-M", 0b1110011),
        ("M+1", 0b1110111),
        ("M-1", 0b1110010),
        ("D+M", 0b1000010),
        ("D-M", 0b1010011),
        ("M-D", 0b1000111),
        ("D&M", 0b1000000),
        ("D|M", 0b1010101),
    ])
});

/// Computation field of a C-instruction (7 bits, `a` bit first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comp(u8);

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match TABLE.get_by_left(s) {
            Some(bits) => Ok(Comp(*bits)),
            None => Err(format!("Unknown comp: {s}")),
        }
    }

    /// Only the 28 defined bit patterns are accepted.
    pub fn from_bits(bits: u8) -> Option<Self> {
        TABLE.contains_right(&bits).then_some(Comp(bits))
    }

    pub fn bits(self) -> u16 {
        self.0 as u16
    }

    pub fn mnemonic(self) -> &'static str {
        TABLE.get_by_right(&self.0).copied().unwrap_or("?")
    }

    /// Whether the computation reads `M` rather than `A`.
    pub fn uses_memory(self) -> bool {
        self.0 & 0b1000000 != 0
    }
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
