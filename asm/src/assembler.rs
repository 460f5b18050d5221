use arch::inst::Inst;
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    encode::{encode_a, encode_c},
    error::{Error, LineError},
    msg::Msg,
    normalize::{normalize, Line},
    parser::Stmt,
    symbol::{Labels, SymbolTable},
};

/// One encoded instruction and the index of the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub line: usize,
    pub inst: Inst,
}

impl Word {
    pub fn bin(&self) -> u16 {
        self.inst.to_bin()
    }
}

/// Output of pass 2.
#[derive(Debug)]
pub struct Encoded {
    pub words: Vec<Word>,
    pub variables: IndexMap<String, u32>,
}

/// Pass 2: classify, resolve and encode every instruction line in order.
///
/// Label declarations emit nothing. Stops at the first error.
pub fn encode(lines: &[Line], labels: &Labels) -> Result<Encoded, LineError> {
    let mut table = SymbolTable::new(labels);
    let mut words = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let stmt = Stmt::parse(line.code()).map_err(|e| LineError::new(line, e))?;
        let inst = match &stmt {
            Stmt::Label(_) => continue,
            Stmt::ALiteral(v) => encode_a(*v, &v.to_string()),
            Stmt::ASymbol(name) => {
                let addr = table.resolve(name);
                encode_a(addr, &format!("{} = {}", name, addr))
            }
            Stmt::C(c) => encode_c(c),
        }
        .map_err(|e| LineError::new(line, e))?;
        words.push(Word { line: idx, inst });
    }

    Ok(Encoded {
        words,
        variables: table.into_variables(),
    })
}

#[derive(Debug)]
pub struct Assembled<'a> {
    pub words: Vec<Word>,
    pub labels: Labels,
    pub variables: IndexMap<String, u32>,
    /// Pass 1 warnings.
    pub msgs: Vec<Msg<'a>>,
}

/// Collect labels over the whole program, then encode it.
pub fn assemble(lines: &[Line]) -> Result<Assembled<'_>, LineError> {
    let (labels, msgs) = Labels::collect(lines);
    let Encoded { words, variables } = encode(lines, &labels)?;
    Ok(Assembled {
        words,
        labels,
        variables,
        msgs,
    })
}

/// Assemble source text straight to `.hack` text.
pub fn assemble_text(path: &str, src: &str) -> Result<String, LineError> {
    let lines = normalize(path, src);
    let assembled = assemble(&lines)?;
    Ok(assembled.to_text())
}

#[derive(Serialize)]
struct SymbolMap<'a> {
    labels: IndexMap<&'a str, u32>,
    variables: &'a IndexMap<String, u32>,
}

impl Assembled<'_> {
    /// One 16-character binary word per line.
    pub fn to_text(&self) -> String {
        self.words
            .iter()
            .map(|w| format!("{}\n", w.inst.to_bin_str()))
            .collect()
    }

    pub fn bins(&self) -> Vec<u16> {
        self.words.iter().map(Word::bin).collect()
    }

    /// Labels and variables, in declaration and allocation order, as YAML.
    pub fn symbol_map(&self) -> Result<String, Error> {
        let map = SymbolMap {
            labels: self.labels.iter().collect(),
            variables: &self.variables,
        };
        serde_yaml::to_string(&map).map_err(Error::SymbolDump)
    }
}
