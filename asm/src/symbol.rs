use arch::symbol::{predefined, VARIABLE_BASE};
use indexmap::IndexMap;

use crate::{msg::Msg, normalize::Line, parser::Stmt};

// ----------------------------------------------------------------------------
// Labels (pass 1)

#[derive(Debug, Clone)]
pub struct Label {
    pub addr: u32,
    /// Index of the declaring line.
    pub decl: usize,
}

/// Label partition of the symbol table, frozen once collected.
#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, Label>);

impl Labels {
    /// Record the address of every `(name)` declaration.
    ///
    /// A label's address is the number of instruction lines before it.
    /// Lines that fail to classify still count as instructions; pass 2
    /// reports them. The first declaration of a name wins.
    pub fn collect(lines: &[Line]) -> (Labels, Vec<Msg<'_>>) {
        let mut labels = Labels::default();
        let mut msgs = vec![];
        let mut pc: u32 = 0;

        for (idx, line) in lines.iter().enumerate() {
            let name = match Stmt::parse(line.code()) {
                Ok(Stmt::Label(name)) => name,
                _ => {
                    pc += 1;
                    continue;
                }
            };

            if let Some(prev) = labels.0.get(&name) {
                msgs.push(Msg::warn(format!("Re-defined label: `{}`", name), line));
                msgs.push(Msg::note(
                    format!("First defined here (address {}); the later declaration is ignored", prev.addr),
                    &lines[prev.decl],
                ));
                continue;
            }

            if let Some(addr) = predefined(&name) {
                msgs.push(Msg::warn(
                    format!(
                        "Label `{}` is shadowed by the predefined symbol ({}); references resolve to the predefined address",
                        name, addr
                    ),
                    line,
                ));
            }

            labels.0.insert(
                name,
                Label {
                    addr: pc,
                    decl: idx,
                },
            );
        }

        (labels, msgs)
    }

    pub fn get_val(&self, name: &str) -> Option<u32> {
        self.0.get(name).map(|label| label.addr)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, label)| (name.as_str(), label.addr))
    }
}

// ----------------------------------------------------------------------------
// Symbol table (pass 2)

/// Resolves `@name` operands: predefined, then labels, then variables.
#[derive(Debug)]
pub struct SymbolTable<'a> {
    labels: &'a Labels,
    variables: IndexMap<String, u32>,
}

impl<'a> SymbolTable<'a> {
    pub fn new(labels: &'a Labels) -> Self {
        SymbolTable {
            labels,
            variables: IndexMap::new(),
        }
    }

    /// Never fails: an unknown name becomes the next variable.
    pub fn resolve(&mut self, name: &str) -> u32 {
        if let Some(addr) = predefined(name) {
            return addr as u32;
        }
        if let Some(addr) = self.labels.get_val(name) {
            return addr;
        }
        if let Some(addr) = self.variables.get(name) {
            return *addr;
        }
        let addr = VARIABLE_BASE as u32 + self.variables.len() as u32;
        self.variables.insert(name.to_string(), addr);
        addr
    }

    pub fn into_variables(self) -> IndexMap<String, u32> {
        self.variables
    }
}
