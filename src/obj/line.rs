//! Line classification for OBJ text.
//!
//! Each surviving line (non-empty, non-comment) is matched against a small
//! fixed grammar: a directive keyword followed by a fixed-arity token list.
//! `v`/`vn` take exactly three float tokens, `vt` exactly two, `f` exactly
//! three or four plain integer tokens. Anything else is ignored.
//!
//! The face grammar deliberately does not admit the compound
//! `vertex/texture/normal` slash-separated token form; such lines fail to
//! classify and are dropped, matching the shipped pattern this parser
//! reproduces.

use std::str::SplitAsciiWhitespace;

/// A face line's signed index tokens (3 or 4 corners).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FaceLine {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: Option<i32>,
}

/// Result of classifying one trimmed line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum LineKind {
    /// `v x y z`
    Position([f32; 3]),
    /// `vn x y z`
    Normal([f32; 3]),
    /// `vt u v`
    TexCoord([f32; 2]),
    /// `f a b c [d]`
    Face(FaceLine),
    /// Unrecognized or unconvertible; already reported, nothing to do.
    Skip,
}

enum Scan<T> {
    /// The token list matched the grammar.
    Matched(T),
    /// The token list does not fit any recognized shape.
    NoMatch,
    /// Grammar matched but a token failed numeric conversion.
    BadNumber(String),
}

impl<T> Scan<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Scan<U> {
        match self {
            Self::Matched(value) => Scan::Matched(f(value)),
            Self::NoMatch => Scan::NoMatch,
            Self::BadNumber(token) => Scan::BadNumber(token),
        }
    }
}

/// Classify one trimmed, non-empty, non-comment line.
///
/// Unrecognized lines are an explicit "ignore unknown directive" branch,
/// not an error: they classify as [`LineKind::Skip`].
pub(super) fn classify(line: &str, number: usize) -> LineKind {
    let mut tokens = line.split_ascii_whitespace();
    let Some(directive) = tokens.next() else {
        return LineKind::Skip;
    };

    let scanned = match directive {
        "v" => scan_floats::<3>(&mut tokens).map(LineKind::Position),
        "vn" => scan_floats::<3>(&mut tokens).map(LineKind::Normal),
        "vt" => scan_floats::<2>(&mut tokens).map(LineKind::TexCoord),
        "f" => scan_face(&mut tokens).map(LineKind::Face),
        _ => Scan::NoMatch,
    };

    match scanned {
        Scan::Matched(kind) => kind,
        Scan::NoMatch => {
            log::debug!("line {number}: ignoring unrecognized line {line:?}");
            LineKind::Skip
        }
        Scan::BadNumber(token) => {
            log::warn!("line {number}: skipping {directive:?} line, token {token:?} is not convertible");
            LineKind::Skip
        }
    }
}

/// Scan exactly `N` float tokens, then end of line.
fn scan_floats<const N: usize>(tokens: &mut SplitAsciiWhitespace<'_>) -> Scan<[f32; N]> {
    let mut components = [0.0f32; N];
    for slot in &mut components {
        let Some(token) = tokens.next() else {
            return Scan::NoMatch;
        };
        if !is_float_token(token) {
            return Scan::NoMatch;
        }
        match token.parse::<f32>() {
            Ok(value) => *slot = value,
            Err(_) => return Scan::BadNumber(token.to_string()),
        }
    }
    if tokens.next().is_some() {
        return Scan::NoMatch;
    }
    Scan::Matched(components)
}

/// Scan three or four plain signed-integer tokens, then end of line.
fn scan_face(tokens: &mut SplitAsciiWhitespace<'_>) -> Scan<FaceLine> {
    let mut corners = [0i32; 4];
    let mut count = 0;
    for token in tokens.by_ref() {
        if count == 4 {
            // faces with more than four vertices are not recognized
            return Scan::NoMatch;
        }
        if !is_int_token(token) {
            return Scan::NoMatch;
        }
        match token.parse::<i32>() {
            Ok(value) => {
                corners[count] = value;
                count += 1;
            }
            Err(_) => return Scan::BadNumber(token.to_string()),
        }
    }
    if count < 3 {
        return Scan::NoMatch;
    }
    Scan::Matched(FaceLine {
        a: corners[0],
        b: corners[1],
        c: corners[2],
        d: (count == 4).then_some(corners[3]),
    })
}

/// Check a token against the float literal grammar:
/// `sign? digits ('.' digits*)? (('e'|'E') sign? digits)?`
fn is_float_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Check a token against the face index grammar: `'-'? digits`.
fn is_int_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", true)]
    #[case("-1", true)]
    #[case("+0.5", true)]
    #[case("3.", true)]
    #[case("1e-3", true)]
    #[case("2.5E2", true)]
    #[case("", false)]
    #[case(".5", false)]
    #[case("1e", false)]
    #[case("1.0.0", false)]
    #[case("nan", false)]
    #[case("1/2", false)]
    fn test_float_token(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_float_token(token), expected);
    }

    #[rstest]
    #[case("3", true)]
    #[case("-12", true)]
    #[case("+3", false)]
    #[case("3.0", false)]
    #[case("1/1/1", false)]
    #[case("-", false)]
    #[case("", false)]
    fn test_int_token(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_int_token(token), expected);
    }

    #[test]
    fn test_classify_declarations() {
        assert_eq!(
            classify("v 1.0 -2.0 3e1", 1),
            LineKind::Position([1.0, -2.0, 30.0])
        );
        assert_eq!(
            classify("vn 0 0 1", 1),
            LineKind::Normal([0.0, 0.0, 1.0])
        );
        assert_eq!(classify("vt 0.5 1", 1), LineKind::TexCoord([0.5, 1.0]));
    }

    #[test]
    fn test_classify_faces() {
        assert_eq!(
            classify("f 1 2 3", 1),
            LineKind::Face(FaceLine {
                a: 1,
                b: 2,
                c: 3,
                d: None
            })
        );
        assert_eq!(
            classify("f -4 -3 -2 -1", 1),
            LineKind::Face(FaceLine {
                a: -4,
                b: -3,
                c: -2,
                d: Some(-1)
            })
        );
    }

    #[rstest]
    #[case("f 1/1/1 2/2/2 3/3/3")] // compound tokens are a grammar boundary
    #[case("f 1 2")]
    #[case("f 1 2 3 4 5")]
    #[case("f 1 2 3.5")]
    #[case("v 1 2")]
    #[case("v 1 2 3 4")]
    #[case("vt 0.5")]
    #[case("usemtl shiny")]
    #[case("g body")]
    #[case("mtllib scene.mtl")]
    fn test_classify_skips(#[case] line: &str) {
        assert_eq!(classify(line, 1), LineKind::Skip);
    }
}
