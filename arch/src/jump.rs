use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

/// Jump field of a C-instruction: `j1 j2 j3` = `<0 =0 >0`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(Jump::Null) | Err(_) => Err(format!("Unknown jump: {s}")),
            Ok(j) => Ok(j),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("JGT"), Ok(Jump::JGT));
    assert_eq!(Jump::parse("JMP").map(Jump::bits), Ok(0b111));
    assert_eq!(Jump::parse("JNE").map(Jump::bits), Ok(0b101));
    assert!(Jump::parse("jmp").is_err());
    assert!(Jump::parse("null").is_err());
    assert!(Jump::parse("JMPX").is_err());
    assert_eq!(Jump::from(0b110), Jump::JLE);
}
