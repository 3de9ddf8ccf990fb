use std::io::{self, Read};

use anyhow::{Context, Result};
use rxparse::{ParserConfig, parse_regex_with, tokenize};

use crate::cli::{Config, resolve_use_color};
use crate::output::render_error;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Parsed(String),
    Failed(String),
}

pub fn process_pattern(
    pattern: &str,
    dump_tokens: bool,
    config: ParserConfig,
    use_color: bool,
) -> Outcome {
    if dump_tokens {
        let shown: Vec<String> = tokenize(pattern).iter().map(|t| t.to_string()).collect();
        return Outcome::Parsed(shown.join(" "));
    }
    match parse_regex_with(pattern, config) {
        Ok(ast) => Outcome::Parsed(ast.to_string()),
        Err(err) => Outcome::Failed(render_error(pattern, &err, use_color)),
    }
}

/// Returns whether every pattern parsed.
pub fn run(cfg: Config) -> Result<bool> {
    let use_color = resolve_use_color(cfg.color);

    let patterns = if cfg.patterns.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read patterns from stdin")?;
        buffer.lines().map(str::to_owned).collect()
    } else {
        cfg.patterns.clone()
    };

    let mut all_parsed = true;
    for pattern in &patterns {
        match process_pattern(pattern, cfg.tokens, cfg.parser_config(), use_color) {
            Outcome::Parsed(line) => println!("{line}"),
            Outcome::Failed(report) => {
                all_parsed = false;
                eprintln!("{report}");
            }
        }
    }

    Ok(all_parsed)
}
