// ----------------------------------------------------------------------------
// Line

/// A comment-free, trimmed, non-empty source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    code: String,
}

impl Line {
    pub fn new(path: &str, idx: usize, raw: &str) -> Self {
        let code = match raw.split_once("//") {
            Some((code, _comment)) => code,
            None => raw,
        };
        Self {
            path: path.to_string(),
            idx,
            raw: raw.trim_end().to_string(),
            code: code.trim().to_string(),
        }
    }

    pub fn pos(&self) -> String {
        format!("{}:{}", self.path, self.no())
    }

    /// 1-based line number in the original source.
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Strip comments and blank lines, keeping source order and original line numbers.
pub fn normalize(path: &str, src: &str) -> Vec<Line> {
    src.lines()
        .enumerate()
        .map(|(idx, raw)| Line::new(path, idx, raw))
        .filter(|line| !line.code.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip() {
        let src = "// header\n\n   @2   // load\r\nD=A\n\t\n  // only comment\n(END)";
        let lines = normalize("t.asm", src);
        let codes: Vec<&str> = lines.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["@2", "D=A", "(END)"]);
        assert_eq!(lines[0].no(), 3);
        assert_eq!(lines[0].raw(), "   @2   // load");
        assert_eq!(lines[2].pos(), "t.asm:7");
    }

    #[test]
    fn test_slash_in_code() {
        // a single slash is not a comment marker
        let lines = normalize("t.asm", "D=A / x");
        assert_eq!(lines[0].code(), "D=A / x");
    }

    #[test]
    fn test_empty() {
        assert!(normalize("t.asm", "").is_empty());
        assert!(normalize("t.asm", "\n\n// a\n   \n").is_empty());
    }
}
