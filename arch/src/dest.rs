use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

/// Destination field of a C-instruction: `d1 d2 d3` = `A D M`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    #[strum(to_string = "MD", serialize = "DM")]
    MD = 0b011,
    A = 0b100,
    #[strum(to_string = "AM", serialize = "MA")]
    AM = 0b101,
    #[strum(to_string = "AD", serialize = "DA")]
    AD = 0b110,
    #[strum(
        to_string = "AMD",
        serialize = "ADM",
        serialize = "MAD",
        serialize = "MDA",
        serialize = "DAM",
        serialize = "DMA"
    )]
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(Dest::Null) | Err(_) => Err(format!("Unknown dest: {s}")),
            Ok(d) => Ok(d),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}
