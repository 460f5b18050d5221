use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::{
    error::{Error, Field},
    parser::CInst,
};

/// `0` followed by the 15-bit address. `operand` is the text reported on overflow.
pub fn encode_a(addr: u32, operand: &str) -> Result<Inst, Error> {
    u16::try_from(addr)
        .ok()
        .and_then(Inst::a)
        .ok_or_else(|| Error::AddressRange(operand.to_string()))
}

/// `111` + comp + dest + jump. Omitted dest and jump encode as `000`.
pub fn encode_c(c: &CInst) -> Result<Inst, Error> {
    let comp = Comp::parse(&c.comp)
        .map_err(|_| Error::UnknownMnemonic(Field::Comp, c.comp.clone()))?;
    let dest = match &c.dest {
        Some(d) => Dest::parse(d).map_err(|_| Error::UnknownMnemonic(Field::Dest, d.clone()))?,
        None => Dest::Null,
    };
    let jump = match &c.jump {
        Some(j) => Jump::parse(j).map_err(|_| Error::UnknownMnemonic(Field::Jump, j.clone()))?,
        None => Jump::Null,
    };
    Ok(Inst::C { dest, comp, jump })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(dest: Option<&str>, comp: &str, jump: Option<&str>) -> CInst {
        CInst {
            dest: dest.map(str::to_string),
            comp: comp.to_string(),
            jump: jump.map(str::to_string),
        }
    }

    #[test]
    fn test_a_bounds() {
        assert_eq!(encode_a(0, "0").unwrap().to_bin_str(), "0000000000000000");
        assert_eq!(encode_a(32767, "32767").unwrap().to_bin_str(), "0111111111111111");
        assert!(matches!(encode_a(32768, "32768"), Err(Error::AddressRange(s)) if s == "32768"));
        assert!(matches!(encode_a(70000, "x"), Err(Error::AddressRange(_))));
    }

    #[test]
    fn test_c() {
        let bin = |c: CInst| encode_c(&c).unwrap().to_bin_str();
        assert_eq!(bin(c(Some("D"), "A", None)), "1110110000010000");
        assert_eq!(bin(c(Some("M"), "D", None)), "1110001100001000");
        assert_eq!(bin(c(None, "0", Some("JMP"))), "1110101010000111");
        assert_eq!(bin(c(Some("DM"), "M+1", None)), "1111110111011000");
    }

    #[test]
    fn test_unknown_mnemonic() {
        let field = |c: CInst| match encode_c(&c) {
            Err(Error::UnknownMnemonic(field, text)) => Some((field, text)),
            _ => None,
        };
        assert_eq!(
            field(c(Some("D"), "A+D", None)),
            Some((Field::Comp, "A+D".to_string()))
        );
        assert_eq!(
            field(c(Some("X"), "A", None)),
            Some((Field::Dest, "X".to_string()))
        );
        assert_eq!(
            field(c(None, "D", Some("JUMP"))),
            Some((Field::Jump, "JUMP".to_string()))
        );
    }
}
