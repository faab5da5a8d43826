//! Recursive-descent parser: tokens to value trees.
//!
//! Produces ordinary `Value` trees built out of heap-allocated cells, the
//! same representation the evaluator and builtins operate on — there is no
//! separate AST type. A source string parses to exactly one top-level
//! datum; trailing tokens after it, or no tokens at all, are syntax errors.

use crate::{
    error::{InterpError, InterpResult},
    heap::{CellData, Heap, HeapData},
    intern::Interner,
    token::{Token, Tokenizer},
    value::Value,
};

/// Parses the single top-level datum in `source`.
pub(crate) fn parse_one(source: &str, heap: &mut Heap, interner: &mut Interner) -> InterpResult<Value> {
    let mut tokenizer = Tokenizer::new(source)?;
    if tokenizer.eof() {
        return Err(InterpError::syntax("empty input"));
    }
    let datum = read(&mut tokenizer, heap, interner)?;
    if !tokenizer.eof() {
        return Err(InterpError::syntax("trailing input after datum"));
    }
    Ok(datum)
}

/// Reads a single form from `tokenizer`.
fn read(tokenizer: &mut Tokenizer, heap: &mut Heap, interner: &mut Interner) -> InterpResult<Value> {
    let token = tokenizer
        .current()
        .cloned()
        .ok_or_else(|| InterpError::syntax("unexpected end of input"))?;

    match token {
        Token::OpenParen => {
            tokenizer.next()?;
            read_list(tokenizer, heap, interner)
        }
        Token::CloseParen => Err(InterpError::syntax("unexpected ')'")),
        Token::Dot => {
            tokenizer.next()?;
            Ok(Value::Symbol(interner.intern(".")))
        }
        Token::Quote => {
            tokenizer.next()?;
            let quoted = read(tokenizer, heap, interner)?;
            let quote_sym = Value::Symbol(interner.intern("quote"));
            let inner = heap.allocate(HeapData::Cell(CellData {
                first: quoted,
                rest: Value::Nil,
            }));
            Ok(Value::Ref(heap.allocate(HeapData::Cell(CellData {
                first: quote_sym,
                rest: Value::Ref(inner),
            }))))
        }
        Token::Boolean(b) => {
            tokenizer.next()?;
            Ok(Value::Boolean(b))
        }
        Token::Integer(n) => {
            tokenizer.next()?;
            Ok(Value::Number(n))
        }
        Token::Symbol(text) => {
            tokenizer.next()?;
            Ok(Value::Symbol(interner.intern(&text)))
        }
    }
}

/// Reads the elements of a list after its opening `(` has been consumed,
/// including optional `. tail` dotted-pair syntax, up through the closing
/// `)`.
fn read_list(tokenizer: &mut Tokenizer, heap: &mut Heap, interner: &mut Interner) -> InterpResult<Value> {
    match tokenizer.current() {
        None => Err(InterpError::syntax("unexpected end of input inside list")),
        Some(Token::CloseParen) => {
            tokenizer.next()?;
            Ok(Value::Nil)
        }
        Some(Token::Dot) => Err(InterpError::syntax("unexpected '.' at start of list")),
        Some(_) => {
            let first = read(tokenizer, heap, interner)?;
            let rest = match tokenizer.current() {
                Some(Token::Dot) => {
                    tokenizer.next()?;
                    let tail = read(tokenizer, heap, interner)?;
                    match tokenizer.current() {
                        Some(Token::CloseParen) => {
                            tokenizer.next()?;
                            tail
                        }
                        _ => return Err(InterpError::syntax("expected ')' after dotted tail")),
                    }
                }
                _ => read_list(tokenizer, heap, interner)?,
            };
            Ok(Value::Ref(heap.allocate(HeapData::Cell(CellData { first, rest }))))
        }
    }
}
