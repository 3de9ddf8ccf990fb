//! Turns regular-expression patterns into syntax trees.
//!
//! [`regex::tokenize`] maps each character to a token and
//! [`regex::Parser`] runs recursive descent over those tokens.
//! [`regex::parse_regex`] does both.

pub mod regex;

pub use regex::{Ast, ParserConfig, SyntaxError, Symbol, parse_regex, parse_regex_with, tokenize};
