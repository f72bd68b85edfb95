//! Parser for the network DSL.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{PulseError, Result};

/// Parser for network DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            current: Token {
                kind: TokenKind::Newline,
                text: String::new(),
                line: 1,
                column: 1,
            },
        }
    }

    /// Parse the entire network description.
    pub fn parse(&mut self) -> Result<NetworkAst> {
        let mut ast = NetworkAst::new();
        self.advance()?;

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            let declaration = self.parse_declaration()?;
            ast.declarations.push(declaration);

            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => break,
                _ => {
                    return Err(PulseError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(PulseError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    /// Parse an optionally tagged module name.
    fn parse_module_ref(&mut self) -> Result<(DeclarationKind, String)> {
        let kind = if self.current.kind == TokenKind::Tag {
            let tag = self.current.text.chars().next().unwrap_or('?');
            self.advance()?;
            DeclarationKind::from_prefix(tag).ok_or_else(|| {
                PulseError::parse(self.current.line, format!("unknown tag '{}'", tag))
            })?
        } else {
            DeclarationKind::Untagged
        };
        let name = self.expect(TokenKind::Identifier)?.text;
        Ok((kind, name))
    }

    fn parse_declaration(&mut self) -> Result<Declaration> {
        let line = self.current.line;
        let (kind, name) = self.parse_module_ref()?;
        self.expect(TokenKind::Arrow)?;

        // Destination tags carry no meaning; only the name is kept
        let mut destinations = vec![self.parse_module_ref()?.1];
        while self.current.kind == TokenKind::Comma {
            self.advance()?;
            destinations.push(self.parse_module_ref()?.1);
        }

        Ok(Declaration {
            kind,
            name,
            destinations,
            line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_broadcaster() {
        let ast = super::super::parse("broadcaster -> a, b, c").unwrap();
        assert_eq!(ast.declarations.len(), 1);
        let decl = &ast.declarations[0];
        assert_eq!(decl.kind, DeclarationKind::Untagged);
        assert_eq!(decl.name, "broadcaster");
        assert_eq!(decl.destinations, vec!["a", "b", "c"]);
        assert_eq!(decl.line, 1);
    }

    #[test]
    fn test_parse_tags() {
        let ast = super::super::parse("%a -> inv, con\n&inv -> b\n").unwrap();
        assert_eq!(ast.declarations[0].kind, DeclarationKind::FlipFlop);
        assert_eq!(ast.declarations[1].kind, DeclarationKind::Conjunction);
        assert_eq!(ast.declarations[1].name, "inv");
        assert_eq!(ast.declarations[1].line, 2);
    }

    #[test]
    fn test_parse_strips_destination_tags() {
        let ast = super::super::parse("%a -> &inv, %b").unwrap();
        assert_eq!(ast.declarations[0].destinations, vec!["inv", "b"]);
    }

    #[test]
    fn test_parse_with_comments_and_blank_lines() {
        let input = "# header\n\nbroadcaster -> a\n\n%a -> output # sink\n";
        let ast = super::super::parse(input).unwrap();
        assert_eq!(ast.declarations.len(), 2);
        assert_eq!(ast.declarations[1].line, 5);
    }

    #[test]
    fn test_parse_missing_arrow() {
        let err = super::super::parse("broadcaster -> a\n%a b").unwrap_err();
        assert!(matches!(err, PulseError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_parse_missing_destinations() {
        assert!(super::super::parse("%a ->").is_err());
        assert!(super::super::parse("%a -> b,").is_err());
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let err = super::super::parse("%a -> b c").unwrap_err();
        assert!(matches!(err, PulseError::ParseError { line: 1, .. }));
    }
}
