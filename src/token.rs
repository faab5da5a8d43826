//! Single-token-lookahead tokenizer.
//!
//! Streams characters out of the source text and produces a closed set of
//! [`Token`]s. The tokenizer always has a "current" token available via
//! [`Tokenizer::current`] until [`Tokenizer::eof`] becomes true.

use crate::error::{InterpError, InterpResult};

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    OpenParen,
    CloseParen,
    Quote,
    Dot,
    Boolean(bool),
    Integer(i64),
    Symbol(String),
}

/// Characters (beyond alphanumerics) a symbol may start with.
const SYMBOL_START_EXTRA: &[char] = &['<', '=', '>', '*', '/', '#', '+', '-'];
/// Characters (beyond alphanumerics) a symbol may continue with.
const SYMBOL_CONTINUE_EXTRA: &[char] = &['<', '=', '>', '*', '/', '#', '?', '!', '-'];

/// A single-token-lookahead stream over source text.
pub(crate) struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    current: Option<Token>,
}

impl Tokenizer {
    /// Constructs a tokenizer and reads the first token.
    pub fn new(source: &str) -> InterpResult<Self> {
        let mut tokenizer = Self {
            chars: source.chars().collect(),
            pos: 0,
            current: None,
        };
        tokenizer.next()?;
        Ok(tokenizer)
    }

    /// True once the last token has been consumed.
    pub fn eof(&self) -> bool {
        self.current.is_none()
    }

    /// The current token, or `None` at end of stream.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Advances to the next token.
    pub fn next(&mut self) -> InterpResult<()> {
        self.skip_whitespace();
        self.current = self.lex_one()?;
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn lex_one(&mut self) -> InterpResult<Option<Token>> {
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let token = match c {
            '(' => {
                self.advance();
                Token::OpenParen
            }
            ')' => {
                self.advance();
                Token::CloseParen
            }
            '\'' => {
                self.advance();
                Token::Quote
            }
            '.' => {
                self.advance();
                Token::Dot
            }
            '#' => {
                self.advance();
                match self.advance() {
                    Some('t') => Token::Boolean(true),
                    Some('f') => Token::Boolean(false),
                    other => {
                        return Err(InterpError::syntax(format!(
                            "expected #t or #f, found {:?}",
                            other
                        )));
                    }
                }
            }
            _ if is_number_start(c, self.peek_at(1)) => self.lex_number(),
            _ if is_symbol_start(c) => self.lex_symbol(),
            other => {
                return Err(InterpError::syntax(format!("unexpected character {other:?}")));
            }
        };
        Ok(Some(token))
    }

    fn lex_number(&mut self) -> Token {
        let mut text = String::new();
        if matches!(self.peek(), Some('+') | Some('-')) {
            text.push(self.advance().expect("sign char present"));
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            text.push(self.advance().expect("digit present"));
        }
        let value = text.parse::<i64>().unwrap_or(0);
        Token::Integer(value)
    }

    fn lex_symbol(&mut self) -> Token {
        let mut text = String::new();
        while matches!(self.peek(), Some(c) if is_symbol_continue(c)) {
            text.push(self.advance().expect("symbol char present"));
        }
        Token::Symbol(text)
    }
}

fn is_number_start(c: char, next: Option<char>) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    (c == '+' || c == '-') && matches!(next, Some(n) if n.is_ascii_digit())
}

fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || SYMBOL_START_EXTRA.contains(&c)
}

fn is_symbol_continue(c: char) -> bool {
    c.is_alphanumeric() || SYMBOL_CONTINUE_EXTRA.contains(&c)
}
