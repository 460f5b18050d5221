use color_print::cformat;
use std::ops::Range;

use crate::{
    error::{Error, LineError},
    normalize::Line,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Error,
    Warn,
    Note,
}

impl MsgKind {
    fn tag(self) -> String {
        match self {
            MsgKind::Error => cformat!("<red,bold>error</>"),
            MsgKind::Warn => cformat!("<yellow,bold>warn</>"),
            MsgKind::Note => cformat!("<green,bold>note</>"),
        }
    }
}

/// A diagnostic pinned to one source line.
#[derive(Debug)]
pub struct Msg<'a> {
    pub kind: MsgKind,
    pub text: String,
    pub line: &'a Line,
    /// Character columns of the raw line to underline.
    pub mark: Option<Range<usize>>,
}

impl<'a> Msg<'a> {
    pub fn new(kind: MsgKind, text: String, line: &'a Line) -> Self {
        Msg {
            kind,
            text,
            line,
            mark: None,
        }
    }

    pub fn warn(text: String, line: &'a Line) -> Self {
        Msg::new(MsgKind::Warn, text, line)
    }

    pub fn note(text: String, line: &'a Line) -> Self {
        Msg::new(MsgKind::Note, text, line)
    }

    /// Underline the first occurrence of `needle` in the raw line, if any.
    pub fn mark(mut self, needle: &str) -> Self {
        let raw = self.line.raw();
        if let Some(start) = raw.find(needle).filter(|_| !needle.is_empty()) {
            let col = raw[..start].chars().count();
            self.mark = Some(col..col + needle.chars().count());
        }
        self
    }

    pub fn render(&self) -> String {
        let mut out = vec![
            format!("{}: {}", self.kind.tag(), self.text),
            cformat!("     <blue>--></> <underline>{}</>", self.line.pos()),
            cformat!("      <blue>|</>"),
            cformat!(" <blue>{:>4} |</> {}", self.line.no(), self.line.raw()),
        ];
        match &self.mark {
            Some(cols) => out.push(cformat!(
                "      <blue>|</> {}<red,bold>{}</>",
                " ".repeat(cols.start),
                "^".repeat(cols.len())
            )),
            None => out.push(cformat!("      <blue>|</>")),
        }
        out.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

impl<'a> From<&'a LineError> for Msg<'a> {
    fn from(err: &'a LineError) -> Self {
        let needle = match &err.error {
            Error::UnknownMnemonic(_, text) => text.as_str(),
            _ => err.line.code(),
        };
        Msg::new(MsgKind::Error, err.error.to_string(), &err.line).mark(needle)
    }
}

pub fn dump(msgs: &[Msg]) {
    for msg in msgs {
        msg.print();
    }
}
