//! Recursive descent decoder driven by the token stream.
//!
//! The top-level object is read by a small forward-only state machine; nested
//! objects and arrays recurse through [`Decoder::parse_element`]. Members are
//! stored with [`OrderedMap::set`] in arrival order, which is what keeps the
//! source key order intact.

use super::errors::CodecError;
use super::lexer::{Lexer, Spanned, Token};
use super::limits::Limits;
use crate::map::{OrderedMap, Value};

/// Progress through the top-level object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    ExpectObjectOpen,
    ReadingMembers,
    ExpectObjectClose,
    Done,
}

/// Result of reading one element in value position.
enum Element {
    Value(Value),
    /// A `]` was read; only meaningful to the enclosing array
    EndOfArray { offset: usize },
}

pub(crate) struct Decoder<'a> {
    lexer: Lexer<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(input: &'a [u8], limits: Limits) -> Result<Self, CodecError> {
        Ok(Self {
            lexer: Lexer::new(input, &limits)?,
            limits,
            depth: 0,
        })
    }

    /// Byte offset of the next unread token.
    pub(crate) fn position(&self) -> usize {
        self.lexer.position()
    }

    /// Decode a single top-level object into `target`.
    ///
    /// On error `target` keeps whatever members were stored before the failure.
    pub(crate) fn decode_object(&mut self, target: &mut OrderedMap) -> Result<(), CodecError> {
        let mut state = DecodeState::ExpectObjectOpen;

        while state != DecodeState::Done {
            state = match state {
                DecodeState::ExpectObjectOpen => {
                    let Spanned { token, offset } = self.lexer.next_token()?;
                    if token != Token::LeftBrace {
                        return Err(CodecError::ExpectedObjectOpen {
                            found: token.describe(),
                            offset,
                        });
                    }
                    self.enter()?;
                    DecodeState::ReadingMembers
                }
                DecodeState::ReadingMembers => {
                    self.read_members(target)?;
                    DecodeState::ExpectObjectClose
                }
                DecodeState::ExpectObjectClose => {
                    self.expect_object_close()?;
                    DecodeState::Done
                }
                DecodeState::Done => DecodeState::Done,
            };
        }

        Ok(())
    }

    /// Require that nothing but whitespace follows the decoded object.
    pub(crate) fn finish(&mut self) -> Result<(), CodecError> {
        let Spanned { token, offset } = self.lexer.next_token()?;
        match token {
            Token::Eof => Ok(()),
            _ => Err(CodecError::TrailingData { offset }),
        }
    }

    fn enter(&mut self) -> Result<(), CodecError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(CodecError::NestingTooDeep {
                depth: self.depth,
                max: self.limits.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Read `"key": value` members up to, but not including, the closing `}`.
    fn read_members(&mut self, map: &mut OrderedMap) -> Result<(), CodecError> {
        if self.lexer.peek()?.token == Token::RightBrace {
            return Ok(());
        }

        loop {
            let Spanned { token, offset } = self.lexer.next_token()?;
            let key = match token {
                Token::String(key) => key,
                other => {
                    return Err(CodecError::NonStringKey {
                        found: other.describe(),
                        offset,
                    });
                }
            };

            self.expect_colon()?;

            let value = match self.parse_element()? {
                Element::Value(value) => value,
                Element::EndOfArray { offset } => {
                    return Err(CodecError::UnexpectedDelimiter {
                        delimiter: ']',
                        offset,
                    });
                }
            };
            map.set(key, value);

            if self.lexer.peek()?.token != Token::Comma {
                return Ok(());
            }
            self.lexer.next_token()?;
        }
    }

    fn expect_colon(&mut self) -> Result<(), CodecError> {
        let Spanned { token, offset } = self.lexer.next_token()?;
        match token {
            Token::Colon => Ok(()),
            other => Err(CodecError::ExpectedSeparator {
                expected: "':'",
                found: other.describe(),
                offset,
            }),
        }
    }

    fn expect_object_close(&mut self) -> Result<(), CodecError> {
        let Spanned { token, offset } = self.lexer.next_token()?;
        match token {
            Token::RightBrace => {
                self.leave();
                Ok(())
            }
            other => Err(CodecError::ExpectedObjectClose {
                found: other.describe(),
                offset,
            }),
        }
    }

    /// Read one token in value position and build the value it starts.
    fn parse_element(&mut self) -> Result<Element, CodecError> {
        let Spanned { token, offset } = self.lexer.next_token()?;

        let value = match token {
            Token::LeftBracket => self.parse_list()?,
            Token::LeftBrace => {
                self.enter()?;
                let mut nested = OrderedMap::new();
                self.read_members(&mut nested)?;
                self.expect_object_close()?;
                Value::Map(nested)
            }
            Token::RightBracket => return Ok(Element::EndOfArray { offset }),
            Token::RightBrace => {
                return Err(CodecError::UnexpectedDelimiter {
                    delimiter: '}',
                    offset,
                });
            }
            Token::Colon => {
                return Err(CodecError::UnexpectedCharacter { found: ':', offset });
            }
            Token::Comma => {
                return Err(CodecError::UnexpectedCharacter { found: ',', offset });
            }
            Token::Eof => return Err(CodecError::UnexpectedEof { offset }),
            Token::Null => Value::Null,
            Token::Bool(b) => Value::Bool(b),
            Token::Number(n) => Value::Number(n),
            Token::String(s) => Value::Text(s),
        };

        Ok(Element::Value(value))
    }

    /// Read array elements after the opening `[` through the closing `]`.
    fn parse_list(&mut self) -> Result<Value, CodecError> {
        self.enter()?;
        let mut items = Vec::new();

        loop {
            match self.parse_element()? {
                Element::Value(value) => items.push(value),
                // `]` right after `[` closes an empty array
                Element::EndOfArray { .. } if items.is_empty() => break,
                // `]` right after `,` is a trailing comma
                Element::EndOfArray { offset } => {
                    return Err(CodecError::UnexpectedDelimiter {
                        delimiter: ']',
                        offset,
                    });
                }
            }

            let Spanned { token, offset } = self.lexer.next_token()?;
            match token {
                Token::Comma => continue,
                Token::RightBracket => break,
                other => {
                    return Err(CodecError::ExpectedSeparator {
                        expected: "',' or ']'",
                        found: other.describe(),
                        offset,
                    });
                }
            }
        }

        self.leave();
        Ok(Value::List(items))
    }
}
