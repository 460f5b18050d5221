use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;

/// Largest value an A-instruction can load.
pub const ADDR_MAX: u16 = 0x7FFF;

const C_PREFIX: u16 = 0b111 << 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    A(u16),
    C { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    /// `None` when the address does not fit in 15 bits.
    pub fn a(addr: u16) -> Option<Inst> {
        (addr <= ADDR_MAX).then_some(Inst::A(addr))
    }

    // 0vvv vvvv vvvv vvvv
    // 111a cccc ccdd djjj
    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(addr) => addr & ADDR_MAX,
            Inst::C { dest, comp, jump } => {
                C_PREFIX | comp.bits() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        if bin & C_PREFIX != C_PREFIX {
            return None;
        }
        let comp = Comp::from_bits(((bin >> 6) & 0x7F) as u8)?;
        let dest = Dest::from(((bin >> 3) & 0b111) as u8);
        let jump = Jump::from((bin & 0b111) as u8);
        Some(Inst::C { dest, comp, jump })
    }

    pub fn to_bin_str(&self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<r>@</><y>{}</>", addr),
            Inst::C { dest, comp, jump } => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => cformat!("<b>{}</>=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => cformat!(";<r>{}</>", j),
                };
                // M-reads stand out from A/D arithmetic
                let comp = match comp.uses_memory() {
                    true => cformat!("<m>{}</>", comp),
                    false => cformat!("<g>{}</>", comp),
                };
                format!("{}{}{}", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(dest: &str, comp: &str, jump: &str) -> Inst {
        Inst::C {
            dest: if dest.is_empty() { Dest::Null } else { Dest::parse(dest).unwrap() },
            comp: Comp::parse(comp).unwrap(),
            jump: if jump.is_empty() { Jump::Null } else { Jump::parse(jump).unwrap() },
        }
    }

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_bin_str(), $bin);
                    assert_eq!(Inst::from_bin(inst.to_bin()), Some(inst));
                }
            )*
        }
    }

    test_inst! {
        test_a_zero: Inst::A(0) => "0000000000000000",
        test_a_max: Inst::A(32767) => "0111111111111111",
        test_a_two: Inst::A(2) => "0000000000000010",
        test_d_eq_a: c("D", "A", "") => "1110110000010000",
        test_d_eq_d_plus_a: c("D", "D+A", "") => "1110000010010000",
        test_m_eq_d: c("M", "D", "") => "1110001100001000",
        test_jmp: c("", "0", "JMP") => "1110101010000111",
        test_amd_jle: c("AMD", "M-1", "JLE") => "1111110010111110",
        test_d_jgt: c("", "D", "JGT") => "1110001100000001",
    }

    #[test]
    fn test_range() {
        assert_eq!(Inst::a(ADDR_MAX), Some(Inst::A(32767)));
        assert_eq!(Inst::a(ADDR_MAX + 1), None);
    }

    #[test]
    fn test_cformat_memory() {
        let magenta = "\u{1b}[35m";
        assert!(c("D", "M+1", "").cformat().contains(magenta));
        assert!(!c("D", "A+1", "").cformat().contains(magenta));
        assert!(c("", "D", "JGT").cformat().contains("JGT"));
    }

    #[test]
    fn test_invalid_word() {
        // prefix 101
        assert_eq!(Inst::from_bin(0b1010_1010_1000_0111), None);
        // undefined comp
        assert_eq!(Inst::from_bin(0b1111_1111_1100_0000), None);
    }
}
