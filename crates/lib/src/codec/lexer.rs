//! JSON token stream.
//!
//! Converts raw input bytes into a forward-only sequence of tokens for the
//! decoder. The whole input is UTF-8 validated up front, so string scanning
//! can slice the input directly between ASCII delimiters.

use serde_json::Number;

use super::errors::CodecError;
use super::limits::Limits;

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    Null,
    Bool(bool),
    /// String value with escapes resolved
    String(String),
    Number(Number),
    /// End of input
    Eof,
}

impl Token {
    /// Short human-readable description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::LeftBrace => "'{'".to_string(),
            Token::RightBrace => "'}'".to_string(),
            Token::LeftBracket => "'['".to_string(),
            Token::RightBracket => "']'".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Null => "null".to_string(),
            Token::Bool(b) => format!("bool {b}"),
            Token::String(s) => format!("string {s:?}"),
            Token::Number(n) => format!("number {n}"),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// Forward-only JSON tokenizer with one token of lookahead.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    peeked: Option<Spanned>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer, rejecting oversized or non-UTF-8 input.
    pub(crate) fn new(input: &'a [u8], limits: &Limits) -> Result<Self, CodecError> {
        if input.len() > limits.max_input_size {
            return Err(CodecError::InputTooLarge {
                size: input.len(),
                max: limits.max_input_size,
            });
        }

        let input = std::str::from_utf8(input).map_err(|e| CodecError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;

        Ok(Self {
            input,
            pos: 0,
            peeked: None,
        })
    }

    /// Current byte offset into the input.
    pub(crate) fn position(&self) -> usize {
        match &self.peeked {
            Some(spanned) => spanned.offset,
            None => self.pos,
        }
    }

    /// Look at the next token without consuming it.
    pub(crate) fn peek(&mut self) -> Result<&Spanned, CodecError> {
        let spanned = match self.peeked.take() {
            Some(spanned) => spanned,
            None => self.scan()?,
        };
        Ok(self.peeked.insert(spanned))
    }

    /// Consume and return the next token.
    pub(crate) fn next_token(&mut self) -> Result<Spanned, CodecError> {
        match self.peeked.take() {
            Some(spanned) => Ok(spanned),
            None => self.scan(),
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek_byte();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek_byte() {
            self.pos += 1;
        }
    }

    /// The character at the current position, for error reporting.
    fn char_at(&self, offset: usize) -> char {
        self.input[offset..].chars().next().unwrap_or('\0')
    }

    fn scan(&mut self) -> Result<Spanned, CodecError> {
        self.skip_whitespace();
        let offset = self.pos;

        let token = match self.peek_byte() {
            None => Token::Eof,
            Some(b'{') => self.single(Token::LeftBrace),
            Some(b'}') => self.single(Token::RightBrace),
            Some(b'[') => self.single(Token::LeftBracket),
            Some(b']') => self.single(Token::RightBracket),
            Some(b':') => self.single(Token::Colon),
            Some(b',') => self.single(Token::Comma),
            Some(b'"') => Token::String(self.read_string()?),
            Some(b'-' | b'0'..=b'9') => Token::Number(self.read_number()?),
            Some(b't') => {
                self.expect_literal("true")?;
                Token::Bool(true)
            }
            Some(b'f') => {
                self.expect_literal("false")?;
                Token::Bool(false)
            }
            Some(b'n') => {
                self.expect_literal("null")?;
                Token::Null
            }
            Some(_) => {
                return Err(CodecError::UnexpectedCharacter {
                    found: self.char_at(offset),
                    offset,
                });
            }
        };

        Ok(Spanned { token, offset })
    }

    fn single(&mut self, token: Token) -> Token {
        self.pos += 1;
        token
    }

    fn expect_literal(&mut self, literal: &str) -> Result<(), CodecError> {
        for expected in literal.bytes() {
            let offset = self.pos;
            match self.advance() {
                Some(b) if b == expected => {}
                Some(_) => {
                    return Err(CodecError::UnexpectedCharacter {
                        found: self.char_at(offset),
                        offset,
                    });
                }
                None => return Err(CodecError::UnexpectedEof { offset }),
            }
        }
        Ok(())
    }

    /// Read a string literal, resolving escape sequences.
    fn read_string(&mut self) -> Result<String, CodecError> {
        // Opening quote
        self.pos += 1;
        let mut result = String::new();

        loop {
            // Copy the run of plain characters; every stop byte is ASCII so
            // the slice boundaries are always char boundaries.
            let start = self.pos;
            while let Some(b) = self.peek_byte() {
                if b == b'"' || b == b'\\' || b < 0x20 {
                    break;
                }
                self.pos += 1;
            }
            result.push_str(&self.input[start..self.pos]);

            let offset = self.pos;
            match self.advance() {
                None => return Err(CodecError::UnexpectedEof { offset }),
                Some(b'"') => return Ok(result),
                Some(b'\\') => result.push(self.read_escape(offset)?),
                Some(b) => {
                    return Err(CodecError::UnexpectedCharacter {
                        found: b as char,
                        offset,
                    });
                }
            }
        }
    }

    /// Read the escape after a backslash located at `start`.
    fn read_escape(&mut self, start: usize) -> Result<char, CodecError> {
        match self.advance() {
            None => Err(CodecError::UnexpectedEof { offset: self.pos }),
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\x08'),
            Some(b'f') => Ok('\x0C'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => self.read_unicode_escape(start),
            Some(_) => Err(CodecError::InvalidEscape { offset: start }),
        }
    }

    /// Read the `XXXX` of a `\uXXXX` escape, pairing surrogates.
    fn read_unicode_escape(&mut self, start: usize) -> Result<char, CodecError> {
        let first = self.read_hex4(start)?;

        let codepoint = match first {
            0xD800..=0xDBFF => {
                if self.advance() != Some(b'\\') || self.advance() != Some(b'u') {
                    return Err(CodecError::InvalidEscape { offset: start });
                }
                let low = self.read_hex4(start)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(CodecError::InvalidEscape { offset: start });
                }
                0x10000 + ((first - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(CodecError::InvalidEscape { offset: start }),
            other => other,
        };

        char::from_u32(codepoint).ok_or(CodecError::InvalidEscape { offset: start })
    }

    fn read_hex4(&mut self, start: usize) -> Result<u32, CodecError> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = match self.advance() {
                Some(b) => (b as char)
                    .to_digit(16)
                    .ok_or(CodecError::InvalidEscape { offset: start })?,
                None => return Err(CodecError::UnexpectedEof { offset: self.pos }),
            };
            value = (value << 4) | digit;
        }
        Ok(value)
    }

    /// Read a number literal following the RFC 8259 grammar.
    fn read_number(&mut self) -> Result<Number, CodecError> {
        let start = self.pos;
        let mut integral = true;

        if self.peek_byte() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek_byte() {
            Some(b'0') => {
                self.pos += 1;
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.number_error()),
        }

        if self.peek_byte() == Some(b'.') {
            integral = false;
            self.pos += 1;
            if !matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                return Err(self.number_error());
            }
            self.skip_digits();
        }

        if let Some(b'e' | b'E') = self.peek_byte() {
            integral = false;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek_byte() {
                self.pos += 1;
            }
            if !matches!(self.peek_byte(), Some(b'0'..=b'9')) {
                return Err(self.number_error());
            }
            self.skip_digits();
        }

        let literal = &self.input[start..self.pos];
        to_number(literal, integral).ok_or_else(|| CodecError::InvalidNumber {
            literal: literal.to_string(),
            offset: start,
        })
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek_byte() {
            self.pos += 1;
        }
    }

    fn number_error(&self) -> CodecError {
        match self.peek_byte() {
            None => CodecError::UnexpectedEof { offset: self.pos },
            Some(_) => CodecError::UnexpectedCharacter {
                found: self.char_at(self.pos),
                offset: self.pos,
            },
        }
    }
}

/// Integers that fit `i64`/`u64` stay integral, everything else is `f64`.
fn to_number(literal: &str, integral: bool) -> Option<Number> {
    if integral {
        if let Ok(n) = literal.parse::<i64>() {
            return Some(Number::from(n));
        }
        if let Ok(n) = literal.parse::<u64>() {
            return Some(Number::from(n));
        }
    }
    literal.parse::<f64>().ok().and_then(Number::from_f64)
}
