//! Keyword predicates shared by the per-function classifiers.
//!
//! Rules are evaluated in declaration order against the lower-cased input;
//! the first rule with any matching keyword wins.

/// A single keyword predicate and the value it selects.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub value: &'static str,
}

impl KeywordRule {
    pub(crate) const fn new(keywords: &'static [&'static str], value: &'static str) -> Self {
        Self { keywords, value }
    }

    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Lower-cased view of operator input.
#[derive(Debug, Clone)]
pub(crate) struct Cues {
    text: String,
}

impl Cues {
    pub(crate) fn new(raw: &str) -> Self {
        Self {
            text: raw.to_lowercase(),
        }
    }

    /// Value of the first matching rule, or `default` when none match.
    pub(crate) fn classify(&self, rules: &[KeywordRule], default: &'static str) -> String {
        rules
            .iter()
            .find(|rule| rule.matches(&self.text))
            .map_or(default, |rule| rule.value)
            .to_string()
    }

    pub(crate) fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.text.contains(keyword))
    }

    /// First 24-hour `HHMM` token in the input, e.g. `0600` in "0600시".
    pub(crate) fn time_token(&self) -> Option<&str> {
        find_time_token(&self.text)
    }
}

const DATE_SEPARATORS: [char; 4] = ['-', '/', '.', ':'];

fn is_time_boundary(c: Option<char>, trailing: bool) -> bool {
    match c {
        None => true,
        Some(c) if c.is_ascii_digit() || DATE_SEPARATORS.contains(&c) => false,
        // "1500m" is a distance, "0600h" and "0600z" are times.
        Some(c) if trailing && c.is_ascii_alphabetic() => matches!(c, 'h' | 'z'),
        // Only 시 (and 시간) marks a clock time; 명, 리터, 년 and the like are counts.
        Some(c) if trailing && is_hangul(c) => c == '시',
        Some(_) => true,
    }
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

fn find_time_token(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }

        if end - start == 4 {
            let before = text[..start].chars().next_back();
            let after = text[end..].chars().next();
            let hours = (bytes[start] - b'0') * 10 + (bytes[start + 1] - b'0');
            let minutes = (bytes[start + 2] - b'0') * 10 + (bytes[start + 3] - b'0');
            if hours < 24
                && minutes < 60
                && is_time_boundary(before, false)
                && is_time_boundary(after, true)
            {
                return Some(&text[start..end]);
            }
        }
        start = end;
    }
    None
}
