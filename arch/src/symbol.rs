use once_cell::sync::Lazy;
use std::collections::HashMap;

/// First RAM address handed out to variables.
pub const VARIABLE_BASE: u16 = 16;

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

static PREDEFINED: Lazy<HashMap<String, u16>> = Lazy::new(|| {
    let mut map: HashMap<String, u16> = [
        ("SP", 0),
        ("LCL", 1),
        ("ARG", 2),
        ("THIS", 3),
        ("THAT", 4),
        ("SCREEN", SCREEN),
        ("KBD", KBD),
    ]
    .into_iter()
    .map(|(name, addr)| (name.to_string(), addr))
    .collect();
    for r in 0..16 {
        map.insert(format!("R{r}"), r);
    }
    map
});

/// Address of a built-in symbol.
pub fn predefined(name: &str) -> Option<u16> {
    PREDEFINED.get(name).copied()
}

#[test]
fn test() {
    assert_eq!(predefined("SP"), Some(0));
    assert_eq!(predefined("THAT"), Some(4));
    assert_eq!(predefined("R0"), Some(0));
    assert_eq!(predefined("R15"), Some(15));
    assert_eq!(predefined("SCREEN"), Some(16384));
    assert_eq!(predefined("KBD"), Some(24576));
    assert_eq!(predefined("R16"), None);
    assert_eq!(predefined("sp"), None);
}
