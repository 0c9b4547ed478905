use std::collections::HashMap;

/// A case-folded search pattern with its bad-character table.
#[derive(Debug, Clone)]
pub struct Pattern {
    chars: Vec<char>,
    last: HashMap<char, usize>,
}

impl Pattern {
    /// Fold `pattern` to lowercase and index the last position of every
    /// character in it.
    pub fn new(pattern: &str) -> Self {
        let chars = fold(pattern);
        let mut last = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            last.insert(c, i);
        }
        Self { chars, last }
    }

    /// Length of the folded pattern, in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Highest index at which `c` (already folded) appears in the pattern.
    pub fn last_occurrence(&self, c: char) -> Option<usize> {
        self.last.get(&c).copied()
    }

    /// Whether the pattern occurs in `text`, ignoring case.
    ///
    /// An empty pattern never matches.
    pub fn is_in(&self, text: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.scan(&fold(text))
    }

    fn scan(&self, text: &[char]) -> bool {
        let m = self.chars.len();
        let n = text.len();
        if m == 0 || m > n {
            return false;
        }

        let mut shift = 0;
        while shift <= n - m {
            // Compare right to left; `j` counts the characters still unmatched.
            let mut j = m;
            while j > 0 && self.chars[j - 1] == text[shift + j - 1] {
                j -= 1;
            }
            if j == 0 {
                return true;
            }

            let mismatch = j - 1;
            shift += match self.last_occurrence(text[shift + mismatch]) {
                Some(k) if k < mismatch => mismatch - k,
                Some(_) => 1,
                None => mismatch + 1,
            };
        }
        false
    }
}

/// Whether `pattern` occurs in `text`, ignoring case.
///
/// An empty pattern, or one longer than the text, never matches.
pub fn contains(text: &str, pattern: &str) -> bool {
    Pattern::new(pattern).is_in(text)
}

/// Lowercase `s` with context-aware rules, then merge final sigma into `σ` so
/// a word-final `Σ` still matches mid-word occurrences.
fn fold(s: &str) -> Vec<char> {
    s.to_lowercase()
        .chars()
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}
