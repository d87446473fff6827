use std::fmt;

use declit::Literal;

/// Parsed structure handed over by the upstream grammar, in source
/// declaration order. Key paths are resolved by the binder while
/// walking this tree; this core never parses dotted keys itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Scalar(Literal),
    Table(Vec<(String, Parsed)>),
    Array(Vec<Parsed>),
}

impl Parsed {
    pub fn table(entries: Vec<(&str, Parsed)>) -> Self {
        Self::Table(
            entries
                .into_iter()
                .map(|(key, node)| (key.to_string(), node))
                .collect(),
        )
    }

    pub fn table_entries(&self) -> Option<&[(String, Parsed)]> {
        match self {
            Self::Table(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "literal",
            Self::Table(_) => "table",
            Self::Array(_) => "array",
        }
    }
}

impl From<Literal> for Parsed {
    fn from(literal: Literal) -> Self {
        Self::Scalar(literal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Dotted location of a destination leaf, maintained by the binder
/// during traversal and rendered into error context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath(Vec<Segment>);

impl KeyPath {
    pub fn push_key(&mut self, key: &str) {
        self.0.push(Segment::Key(key.to_string()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.0.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{key}")?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
