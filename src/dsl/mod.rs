//! DSL (Domain Specific Language) parser for network descriptions.
//!
//! Networks are described one module per line: the module's name, an
//! optional type tag, and the ordered list of modules it sends pulses to.
//!
//! # Grammar Overview
//!
//! ```text
//! network     = { line }
//! line        = comment | declaration | empty
//! comment     = '#' { any_char }
//! declaration = module_ref '->' module_ref { ',' module_ref }
//! module_ref  = [ tag ] identifier
//!
//! tag         = '%' | '&'
//! identifier  = (letter | digit | '_') { letter | digit | '_' }
//! ```
//!
//! # Module Types
//!
//! | Tag | Description | Syntax |
//! |-----|-------------|--------|
//! | (none) | Broadcaster, the network entry point | `broadcaster -> <dest>, ...` |
//! | `%` | Flip-flop | `%<name> -> <dest>, ...` |
//! | `&` | Conjunction | `&<name> -> <dest>, ...` |
//!
//! Destinations that are never declared become sinks when the network is
//! built; the parser does not resolve names.
//!
//! # Example
//!
//! ```text
//! # Three flip-flops in a ring closed by an inverter
//! broadcaster -> a, b, c
//! %a -> b
//! %b -> c
//! %c -> inv
//! &inv -> a
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a network DSL string into an AST.
pub fn parse(input: &str) -> Result<NetworkAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Parse a network DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<NetworkAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::PulseError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
