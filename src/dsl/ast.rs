//! Abstract Syntax Tree types for the network DSL.

/// Complete AST representation of a parsed network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkAst {
    /// All declarations, in source order
    pub declarations: Vec<Declaration>,
}

impl NetworkAst {
    /// Create a new empty network AST.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the declaration heading the given module name.
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }
}

/// A single `head -> dest, dest, ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Tag of the declaration head
    pub kind: DeclarationKind,
    /// Module name, without its tag
    pub name: String,
    /// Destination module names, in declaration order
    pub destinations: Vec<String>,
    /// Source line number for error reporting
    pub line: usize,
}

impl Declaration {
    /// Create a declaration (mostly useful for building networks in code).
    pub fn new<S: Into<String>>(
        kind: DeclarationKind,
        name: impl Into<String>,
        destinations: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            destinations: destinations.into_iter().map(Into::into).collect(),
            line: 0,
        }
    }
}

/// Declaration tags supported by the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// No tag; only valid for the broadcaster
    Untagged,
    /// `%` prefix
    FlipFlop,
    /// `&` prefix
    Conjunction,
}

impl DeclarationKind {
    /// Parse a declaration kind from its DSL prefix.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            '%' => Some(Self::FlipFlop),
            '&' => Some(Self::Conjunction),
            _ => None,
        }
    }
}
