use std::cmp::Ordering;
use std::fmt;

/// Sorted, non-overlapping inclusive character ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    ranges: Vec<(char, char)>,
}

impl CharSet {
    /// Builds a set from ranges given in any order; each range must have
    /// `start <= end`. Overlapping and touching ranges are merged.
    pub fn from_ranges(ranges: impl IntoIterator<Item = (char, char)>) -> CharSet {
        let mut sorted: Vec<(char, char)> = ranges.into_iter().collect();
        sorted.sort_unstable();

        let mut merged: Vec<(char, char)> = Vec::with_capacity(sorted.len());
        for (start, end) in sorted {
            match merged.last_mut() {
                Some(last) if start as u32 <= last.1 as u32 + 1 => {
                    last.1 = last.1.max(end);
                }
                _ => merged.push((start, end)),
            }
        }
        CharSet { ranges: merged }
    }

    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|&(start, end)| {
                if end < c {
                    Ordering::Less
                } else if start > c {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharSet::from_ranges(iter.into_iter().map(|c| (c, c)))
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(start, end)) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if start == end {
                write!(f, "{start:?}")?;
            } else {
                write!(f, "{start:?}-{end:?}")?;
            }
        }
        Ok(())
    }
}

/// What a single character-matching node accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    Any,             // .
    AnyOf(CharSet),  // [abc]
    NoneOf(CharSet), // [^abc]
    Not(Box<Symbol>),
}

impl Symbol {
    pub fn any_of(chars: impl IntoIterator<Item = char>) -> Symbol {
        Symbol::AnyOf(chars.into_iter().collect())
    }

    pub fn none_of(chars: impl IntoIterator<Item = char>) -> Symbol {
        Symbol::NoneOf(chars.into_iter().collect())
    }

    pub fn not(inner: Symbol) -> Symbol {
        Symbol::Not(Box::new(inner))
    }

    pub fn matches(&self, c: char) -> bool {
        match self {
            Symbol::Char(l) => c == *l,
            Symbol::Any => true,
            Symbol::AnyOf(members) => members.contains(c),
            Symbol::NoneOf(members) => !members.contains(c),
            Symbol::Not(inner) => !inner.matches(c),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c:?}"),
            Symbol::Any => f.write_str("any"),
            Symbol::AnyOf(members) => write!(f, "(any-of {members})"),
            Symbol::NoneOf(members) => write!(f, "(none-of {members})"),
            Symbol::Not(inner) => write!(f, "(not {inner})"),
        }
    }
}
