//! Lexer (tokenizer) for the network DSL.

use crate::error::{PulseError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A module name
    Identifier,
    /// A type tag ('%' or '&')
    Tag,
    /// Arrow '->'
    Arrow,
    /// Comma ','
    Comma,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing network DSL input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;
        let token = |kind, text: String| Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        };

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => return Ok(token(TokenKind::Eof, String::new())),
        };

        match ch {
            '\n' => {
                self.advance();
                Ok(token(TokenKind::Newline, "\n".to_string()))
            }
            '%' | '&' => {
                self.advance();
                Ok(token(TokenKind::Tag, ch.to_string()))
            }
            ',' => {
                self.advance();
                Ok(token(TokenKind::Comma, ",".to_string()))
            }
            '-' => {
                self.advance();
                if self.chars.peek() == Some(&'>') {
                    self.advance();
                    Ok(token(TokenKind::Arrow, "->".to_string()))
                } else {
                    Err(PulseError::lexer(
                        start_line,
                        start_column,
                        "expected '>' after '-'",
                    ))
                }
            }
            _ if ch.is_alphanumeric() || ch == '_' => {
                let text = self.read_identifier();
                Ok(token(TokenKind::Identifier, text))
            }
            _ => Err(PulseError::lexer(
                start_line,
                start_column,
                format!("unexpected character '{}'", ch),
            )),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if done {
                return out;
            }
        }
    }

    #[test]
    fn test_lexer_declaration() {
        assert_eq!(
            kinds("%a -> b, c"),
            vec![
                TokenKind::Tag,
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_positions() {
        let mut lexer = Lexer::new("broadcaster -> a\n&inv -> b");
        let names: Vec<Token> = std::iter::from_fn(|| {
            let tok = lexer.next_token().unwrap();
            (tok.kind != TokenKind::Eof).then_some(tok)
        })
        .collect();

        let inv = names.iter().find(|t| t.text == "inv").unwrap();
        assert_eq!(inv.line, 2);
        assert_eq!(inv.column, 2);
    }

    #[test]
    fn test_lexer_skips_comments() {
        assert_eq!(
            kinds("# header\nbroadcaster -> a # trailing"),
            vec![
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_rejects_lone_dash() {
        let mut lexer = Lexer::new("a - b");
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, PulseError::LexerError { line: 1, column: 3, .. }));
    }

    #[test]
    fn test_lexer_rejects_unknown_character() {
        let mut lexer = Lexer::new("$a -> b");
        assert!(lexer.next_token().is_err());
    }
}
