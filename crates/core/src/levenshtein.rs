use serde::{Deserialize, Serialize};

/// The atomic unit a string is split into before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Unicode scalar values (`char`). Combining marks count as their own unit.
    #[default]
    Char,
    /// Raw UTF-8 bytes.
    Byte,
}

impl Unit {
    /// Length of `s` counted in this unit.
    pub fn count(self, s: &str) -> usize {
        match self {
            Unit::Char => s.chars().count(),
            Unit::Byte => s.len(),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Char => write!(f, "char"),
            Unit::Byte => write!(f, "byte"),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "char" => Ok(Unit::Char),
            "byte" => Ok(Unit::Byte),
            other => Err(format!("Unknown unit: '{other}'")),
        }
    }
}

/// Levenshtein distance between two strings, compared per Unicode scalar value.
///
/// The distance is the number of characters that must be added, removed or
/// substituted to turn `source` into `target`. `"bad-password--2018-03"` and
/// `"bad-password--2019-09"` are only 2 apart, which is why this is useful for
/// spotting passwords that are trivial variants of each other.
pub fn distance(source: &str, target: &str) -> usize {
    distance_with(source, target, Unit::Char)
}

/// Levenshtein distance between two strings, compared per `unit`.
pub fn distance_with(source: &str, target: &str, unit: Unit) -> usize {
    match unit {
        Unit::Char => {
            let source: Vec<char> = source.chars().collect();
            let target: Vec<char> = target.chars().collect();
            sequence_distance(&source, &target)
        }
        Unit::Byte => sequence_distance(source.as_bytes(), target.as_bytes()),
    }
}

/// Wagner-Fischer over the full `(len(source)+1) x (len(target)+1)` matrix.
///
/// Cell `(y, x)` holds the distance between the first `y` units of `source`
/// and the first `x` units of `target`. Row 0 and column 0 are the pure
/// insertion/deletion costs; every other cell is filled row-major from its
/// left, top and top-left neighbours.
pub fn sequence_distance<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    let rows = source.len() + 1;
    let cols = target.len() + 1;
    let mut score = ScoreMatrix::new(rows, cols);

    for y in 0..rows {
        score.set(y, 0, y);
    }
    for x in 0..cols {
        score.set(0, x, x);
    }

    for y in 1..rows {
        for x in 1..cols {
            let substitution = usize::from(source[y - 1] != target[x - 1]);
            let insertion = score.get(y, x - 1) + 1;
            let deletion = score.get(y - 1, x) + 1;
            let diagonal = score.get(y - 1, x - 1) + substitution;
            score.set(y, x, insertion.min(deletion).min(diagonal));
        }
    }

    score.get(rows - 1, cols - 1)
}

/// Row-major `rows x cols` table backed by one allocation.
struct ScoreMatrix {
    cols: usize,
    cells: Vec<usize>,
}

impl ScoreMatrix {
    /// Panics with "capacity overflow" like `Vec` when `rows * cols` does not
    /// fit in `usize`.
    fn new(rows: usize, cols: usize) -> Self {
        let len = rows.checked_mul(cols).expect("capacity overflow");
        Self {
            cols,
            cells: vec![0; len],
        }
    }

    #[inline]
    fn get(&self, y: usize, x: usize) -> usize {
        self.cells[y * self.cols + x]
    }

    #[inline]
    fn set(&mut self, y: usize, x: usize, value: usize) {
        self.cells[y * self.cols + x] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_are_zero() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("bad-password", "bad-password"), 0);
        assert_eq!(distance("KDSGe7C4zXeCDaeJk2", "KDSGe7C4zXeCDaeJk2"), 0);
        assert_eq!(
            distance("#:qWgKYxgHM)g#'G=7-z!,MS", "#:qWgKYxgHM)g#'G=7-z!,MS"),
            0
        );
    }

    #[test]
    fn addition_of_characters_only() {
        assert_eq!(distance("", "p"), 1);
        assert_eq!(distance("", "pass"), 4);
        assert_eq!(distance("", "password"), 8);
        assert_eq!(distance("password", "password1"), 1);
        assert_eq!(distance("password", "password2019"), 4);
        assert_eq!(distance("password", "1password"), 1);
        assert_eq!(distance("password", "2019password"), 4);
        assert_eq!(distance("password", "1password1"), 2);
        assert_eq!(distance("password", "1password2019"), 5);
        assert_eq!(distance("password", "2019password1"), 5);
        assert_eq!(distance("password", "2019password2019"), 8);
        assert_eq!(distance("password", "pass1word"), 1);
        assert_eq!(distance("password", "pass2019word"), 4);
        assert_eq!(distance("password", "p-a-s-s-w-o-r-d"), 7);
    }

    #[test]
    fn removal_of_characters_only() {
        assert_eq!(distance("password", ""), 8);
        assert_eq!(distance("pass", ""), 4);
        assert_eq!(distance("p", ""), 1);
        assert_eq!(distance("password1", "password"), 1);
        assert_eq!(distance("password2019", "password"), 4);
        assert_eq!(distance("1password", "password"), 1);
        assert_eq!(distance("2019password", "password"), 4);
        assert_eq!(distance("1password1", "password"), 2);
        assert_eq!(distance("1password2019", "password"), 5);
        assert_eq!(distance("2019password1", "password"), 5);
        assert_eq!(distance("2019password2019", "password"), 8);
        assert_eq!(distance("pass1word", "password"), 1);
        assert_eq!(distance("pass2019word", "password"), 4);
        assert_eq!(distance("p-a-s-s-w-o-r-d", "password"), 7);
    }

    #[test]
    fn substitution_of_characters_only() {
        let cases = [
            ("1assword", 1),
            ("12ssword", 2),
            ("123sword", 3),
            ("1234word", 4),
            ("12345ord", 5),
            ("123456rd", 6),
            ("1234567d", 7),
            ("12345678", 8),
            ("p2345678", 7),
            ("pa345678", 6),
            ("pas45678", 5),
            ("pass5678", 4),
            ("passw678", 3),
            ("passwo78", 2),
            ("passwor8", 1),
            ("pXssword", 1),
            ("paXsword", 1),
            ("pasXword", 1),
            ("passXord", 1),
            ("passwXrd", 1),
            ("passwoXd", 1),
            ("pXsXword", 2),
            ("paXsXord", 2),
            ("pasXwXrd", 2),
            ("passXoXd", 2),
        ];
        for (target, expected) in cases {
            assert_eq!(distance("password", target), expected, "target {target}");
        }
    }

    #[test]
    fn addition_and_substitution() {
        assert_eq!(distance("password", "XXassword"), 2);
        assert_eq!(distance("password", "XXXXssword"), 4);
        assert_eq!(distance("password", "passworXX"), 2);
        assert_eq!(distance("password", "passwoXXXX"), 4);
        assert_eq!(distance("password", "XpassworX"), 2);
        assert_eq!(distance("password", "XXpasswoXX"), 4);
        assert_eq!(distance("password", "XasswordX"), 2);
        assert_eq!(distance("password", "XXsswordXX"), 4);
        assert_eq!(distance("password", "XpaXswXrdX"), 4);
    }

    #[test]
    fn removal_and_substitution() {
        assert_eq!(distance("password", "assworX"), 2);
        assert_eq!(distance("password", "sswoXX"), 4);
        assert_eq!(distance("password", "swXXX"), 6);
        assert_eq!(distance("password", "XXXX"), 8);
        assert_eq!(distance("password", "Xasswor"), 2);
        assert_eq!(distance("password", "XXsswo"), 4);
        assert_eq!(distance("password", "XXXsw"), 6);
    }

    #[test]
    fn addition_removal_and_substitution() {
        // add 1, substitute 2, remove 1
        assert_eq!(distance("password", "XpasXXor"), 4);
        // add 2, substitute 4, remove 2
        assert_eq!(distance("password", "XXpaXXXX"), 8);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(distance("Password", "password"), 1);
        assert_eq!(distance("PASSWORD", "password"), 8);
    }

    #[test]
    fn unit_changes_non_ascii_distance() {
        assert_eq!(distance_with("é", "e", Unit::Char), 1);
        assert_eq!(distance_with("é", "e", Unit::Byte), 2);
        assert_eq!(distance_with("pässword", "password", Unit::Char), 1);
        assert_eq!(distance_with("pässword", "password", Unit::Byte), 2);
    }

    #[test]
    fn combining_marks_are_separate_units() {
        // "e" + U+0301 renders like "é" but is two scalar values.
        assert_eq!(distance("e\u{0301}", "e"), 1);
        assert_eq!(distance("e\u{0301}", "\u{00e9}"), 2);
    }

    #[test]
    fn ascii_units_agree() {
        assert_eq!(
            distance_with("bad-password", "bad-password-2018", Unit::Char),
            distance_with("bad-password", "bad-password-2018", Unit::Byte)
        );
        assert_eq!(distance("bad-password", "bad-password-2018"), 5);
        assert_eq!(distance("bad-password--2018-03", "bad-password--2019-09"), 2);
    }

    #[test]
    fn generic_sequences() {
        assert_eq!(sequence_distance(&[1, 2, 3], &[1, 3]), 1);
        assert_eq!(sequence_distance::<u8>(&[], &[]), 0);
        assert_eq!(sequence_distance(&["a", "b"], &["b", "a"]), 2);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn oversized_matrix_panics_instead_of_wrapping() {
        let _ = ScoreMatrix::new(usize::MAX / 2 + 2, 2);
    }

    #[test]
    fn matrix_cells_are_row_major() {
        let mut score = ScoreMatrix::new(2, 3);
        score.set(1, 0, 7);
        assert_eq!(score.cells, vec![0, 0, 0, 7, 0, 0]);
        assert_eq!(score.get(1, 0), 7);
    }

    #[test]
    fn inputs_are_not_modified() {
        let source = String::from("password");
        let target = String::from("1password");
        let _ = distance(&source, &target);
        assert_eq!(source, "password");
        assert_eq!(target, "1password");
    }

    #[test]
    fn unit_parses_and_displays() {
        assert_eq!("char".parse::<Unit>().unwrap(), Unit::Char);
        assert_eq!("BYTE".parse::<Unit>().unwrap(), Unit::Byte);
        assert!("grapheme".parse::<Unit>().is_err());
        assert_eq!(Unit::Byte.to_string(), "byte");
        assert_eq!(Unit::Char.count("pässword"), 8);
        assert_eq!(Unit::Byte.count("pässword"), 9);
    }

    #[test]
    fn unit_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Char).unwrap(), "\"char\"");
        let unit: Unit = serde_json::from_str("\"byte\"").unwrap();
        assert_eq!(unit, Unit::Byte);
    }
}
