use std::io;
use std::io::IsTerminal;

use clap::{Parser, ValueEnum};
use rxparse::regex::DEFAULT_MAX_DEPTH;
use rxparse::ParserConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Always,
    Never,
    Auto,
}

/// Parse regular expressions and print their syntax trees.
#[derive(Debug, Clone, Parser)]
#[command(name = "rxparse", version)]
pub struct Config {
    /// Patterns to parse; read one per line from stdin when omitted
    pub patterns: Vec<String>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    pub tokens: bool,

    /// Maximum number of nested groups
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Highlight error positions
    #[arg(long, value_enum, default_value_t = ColorWhen::Never)]
    pub color: ColorWhen,
}

impl Config {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            max_depth: self.max_depth,
        }
    }
}

// diagnostics go to stderr, so that is the stream that decides `auto`
pub fn resolve_use_color(color: ColorWhen) -> bool {
    match color {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => io::stderr().is_terminal(),
    }
}
