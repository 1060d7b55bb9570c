/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Token characters and their order are left untouched, so two strings
/// normalize equal exactly when they hold the same whitespace-separated tokens.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First position where two outputs stop agreeing, in whitespace tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    /// `None` when the expected output ran out of tokens first.
    pub expected: Option<String>,
    /// `None` when the captured output ran out of tokens first.
    pub actual: Option<String>,
}

/// Locate the first differing token, or `None` if both normalize equal.
pub fn first_mismatch(expected: &str, actual: &str) -> Option<Mismatch> {
    let mut exp = expected.split_whitespace();
    let mut act = actual.split_whitespace();
    let mut index = 0;
    loop {
        match (exp.next(), act.next()) {
            (None, None) => return None,
            (e, a) if e == a => index += 1,
            (e, a) => {
                return Some(Mismatch {
                    index,
                    expected: e.map(str::to_string),
                    actual: a.map(str::to_string),
                })
            }
        }
    }
}
