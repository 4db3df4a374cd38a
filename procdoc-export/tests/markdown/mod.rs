//! Markdown tokenizer tests
//!
//! The adapter is exercised on whole documents; single constructs are covered
//! by the unit tests next to the parser.

mod tokenize;
