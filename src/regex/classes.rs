use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::regex::symbol::{CharSet, Symbol};

const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\u{b}', '\u{c}'];

fn any_of_ranges<const N: usize>(ranges: [(char, char); N]) -> Symbol {
    Symbol::AnyOf(CharSet::from_ranges(ranges))
}

fn digits() -> Symbol {
    any_of_ranges([('0', '9')])
}

fn word() -> Symbol {
    any_of_ranges([('0', '9'), ('A', 'Z'), ('_', '_'), ('a', 'z')])
}

fn hex_digits() -> Symbol {
    any_of_ranges([('0', '9'), ('A', 'F'), ('a', 'f')])
}

// Escape letter -> predefined symbol, for `\d`, `\W`, `\n` and friends.
static CLASSES: Lazy<HashMap<char, Symbol>> = Lazy::new(|| {
    HashMap::from([
        ('s', Symbol::any_of(WHITESPACE)),
        ('S', Symbol::not(Symbol::any_of(WHITESPACE))),
        ('d', digits()),
        ('D', Symbol::not(digits())),
        ('w', word()),
        ('W', Symbol::not(word())),
        ('x', hex_digits()),
        ('O', any_of_ranges([('0', '7')])),
        ('n', Symbol::Char('\n')),
        ('r', Symbol::Char('\r')),
        ('t', Symbol::Char('\t')),
        ('v', Symbol::Char('\u{b}')),
        ('f', Symbol::Char('\u{c}')),
    ])
});

pub fn is_recognized(letter: char) -> bool {
    CLASSES.contains_key(&letter)
}

pub fn lookup(letter: char) -> Option<&'static Symbol> {
    CLASSES.get(&letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_exactly_the_table_letters() {
        for letter in "sSdDwWxOnrtvf".chars() {
            assert!(is_recognized(letter), "{letter}");
        }
        for letter in "aqXoNbB1\\".chars() {
            assert!(!is_recognized(letter), "{letter}");
            assert!(lookup(letter).is_none());
        }
    }

    #[test]
    fn digit_and_negation_agree() {
        let d = lookup('d').unwrap();
        let not_d = lookup('D').unwrap();
        for c in ['0', '5', '9', 'a', ' ', '_'] {
            assert_ne!(d.matches(c), not_d.matches(c), "{c:?}");
        }
    }

    #[test]
    fn word_class_includes_underscore() {
        let w = lookup('w').unwrap();
        assert!(w.matches('_'));
        assert!(w.matches('Q'));
        assert!(!w.matches('-'));
    }

    #[test]
    fn hex_and_octal_bounds() {
        let x = lookup('x').unwrap();
        assert!(x.matches('F') && x.matches('a') && !x.matches('g'));

        let o = lookup('O').unwrap();
        assert!(o.matches('7') && !o.matches('8'));
    }

    #[test]
    fn control_escapes_are_single_chars() {
        assert_eq!(lookup('n'), Some(&Symbol::Char('\n')));
        assert_eq!(lookup('v'), Some(&Symbol::Char('\u{b}')));
        assert!(lookup('s').unwrap().matches('\u{c}'));
    }
}
