use crate::error::Error;

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `@123`
    ALiteral(u32),
    /// `@name`
    ASymbol(String),
    /// `dest=comp;jump`
    C(CInst),
    /// `(name)`
    Label(String),
}

/// C-instruction fields as written, looked up when encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CInst {
    pub dest: Option<String>,
    pub comp: String,
    pub jump: Option<String>,
}

impl Stmt {
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        let unknown = || Error::Classification(code.to_string());

        if let Some(inner) = code.strip_prefix('(') {
            // (LOOP)
            let name = inner.strip_suffix(')').ok_or_else(unknown)?;
            return match is_symbol(name) {
                true => Ok(Stmt::Label(name.to_string())),
                false => Err(unknown()),
            };
        }

        if let Some(operand) = code.strip_prefix('@') {
            // @123
            if !operand.is_empty() && operand.bytes().all(|b| b.is_ascii_digit()) {
                return match operand.parse::<u32>() {
                    Ok(v) => Ok(Stmt::ALiteral(v)),
                    Err(_) => Err(Error::AddressRange(operand.to_string())),
                };
            }
            // @name
            return match is_symbol(operand) {
                true => Ok(Stmt::ASymbol(operand.to_string())),
                false => Err(unknown()),
            };
        }

        if code.contains('=') || code.contains(';') {
            return CInst::parse(code).map(Stmt::C).ok_or_else(unknown);
        }

        Err(unknown())
    }
}

impl CInst {
    fn parse(code: &str) -> Option<CInst> {
        let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();

        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Some(dest), rest),
            None => (None, code.as_str()),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump)),
            None => (rest, None),
        };

        let field = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Some(CInst {
            dest: match dest {
                Some(d) => Some(field(d)?),
                None => None,
            },
            comp: field(comp)?,
            jump: match jump {
                Some(j) => Some(field(j)?),
                None => None,
            },
        })
    }
}

/// Letters, digits, `_`, `.`, `$`, `:`; not starting with a digit.
pub fn is_symbol(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(head) if !head.is_ascii_digit() && is_symbol_char(head) => chars.all(is_symbol_char),
        _ => false,
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(dest: Option<&str>, comp: &str, jump: Option<&str>) -> Stmt {
        Stmt::C(CInst {
            dest: dest.map(str::to_string),
            comp: comp.to_string(),
            jump: jump.map(str::to_string),
        })
    }

    macro_rules! test_parse {
        ($($name:ident: $code:expr => $stmt:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(Stmt::parse($code).ok(), Some($stmt));
                }
            )*
        }
    }

    test_parse! {
        test_literal: "@21" => Stmt::ALiteral(21),
        test_literal_zero: "@0" => Stmt::ALiteral(0),
        test_literal_big: "@40000" => Stmt::ALiteral(40000),
        test_symbol: "@LOOP" => Stmt::ASymbol("LOOP".to_string()),
        test_symbol_dotted: "@Main.sum$ret.1" => Stmt::ASymbol("Main.sum$ret.1".to_string()),
        test_label: "(END)" => Stmt::Label("END".to_string()),
        test_dest_comp: "D=A" => c(Some("D"), "A", None),
        test_comp_jump: "0;JMP" => c(None, "0", Some("JMP")),
        test_full: "AM=M-1;JNE" => c(Some("AM"), "M-1", Some("JNE")),
        test_spaces: "D = D + A ; JGT" => c(Some("D"), "D+A", Some("JGT")),
    }

    macro_rules! test_reject {
        ($($name:ident: $code:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert!(matches!(Stmt::parse($code), Err(Error::Classification(_))));
                }
            )*
        }
    }

    test_reject! {
        test_reject_bare: "D",
        test_reject_word: "hello",
        test_reject_empty_label: "()",
        test_reject_open_label: "(END",
        test_reject_numeric_label: "(1ABC)",
        test_reject_empty_operand: "@",
        test_reject_negative: "@-1",
        test_reject_digit_symbol: "@1x",
        test_reject_empty_dest: "=M",
        test_reject_empty_comp: "D=",
        test_reject_empty_jump: "0;",
    }

    #[test]
    fn test_literal_overflow() {
        assert!(matches!(
            Stmt::parse("@99999999999"),
            Err(Error::AddressRange(_))
        ));
    }

    #[test]
    fn test_symbol_name() {
        assert!(is_symbol("a_b.c$d:e"));
        assert!(is_symbol("R0"));
        assert!(!is_symbol("0R"));
        assert!(!is_symbol(""));
        assert!(!is_symbol("a-b"));
    }
}
