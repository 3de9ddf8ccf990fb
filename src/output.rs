use rxparse::SyntaxError;

const COLOR_START: &str = "\x1b[01;31m";
const COLOR_RESET: &str = "\x1b[m";

pub fn maybe_colorize(s: &str, use_color: bool) -> String {
    if use_color {
        format!("{COLOR_START}{s}{COLOR_RESET}")
    } else {
        s.to_string()
    }
}

/// Error message, then the pattern with a caret under the failing position.
pub fn render_error(pattern: &str, err: &SyntaxError, use_color: bool) -> String {
    // positions are char indexes; a caret at the end marks a missing character
    let pad: String = pattern
        .chars()
        .take(err.position())
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let caret = maybe_colorize("^", use_color);
    format!("error: {err}\n  {pattern}\n  {pad}{caret}")
}
