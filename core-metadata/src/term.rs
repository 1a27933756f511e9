//! Semester and year inference

use regex::Regex;
use std::sync::LazyLock;

/// A season name, optionally followed directly by a 4-digit year.
static SEASON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(spring|summer|fall|winter)\s*(\d{4})?").expect("pattern is valid")
});

/// A bare year in this century.
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{2}").expect("pattern is valid"));

/// Academic term inferred from a file's name and path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Term {
    pub semester: Option<String>,
    pub year: Option<i32>,
}

/// Extracts semester and year from the file name and ancestor folder names.
///
/// The semester is the first season keyword found, capitalized. The year
/// prefers a 4-digit number adjacent to that season and otherwise falls
/// back to the first `20xx` number anywhere in the text. Both fields stay
/// unset when nothing matches.
pub fn infer_term(file_name: &str, path: &[String]) -> Term {
    let haystack = format!("{} {}", path.join(" "), file_name);

    let mut term = Term::default();

    if let Some(captures) = SEASON_PATTERN.captures(&haystack) {
        term.semester = Some(capitalize(&captures[1]));
        term.year = captures.get(2).and_then(|m| m.as_str().parse().ok());
    }

    if term.year.is_none() {
        term.year = YEAR_PATTERN
            .find(&haystack)
            .and_then(|m| m.as_str().parse().ok());
    }

    term
}

/// First letter uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_season_with_adjacent_year() {
        let term = infer_term("Midterm Fall 2023.pdf", &[]);

        assert_eq!(term.semester.as_deref(), Some("Fall"));
        assert_eq!(term.year, Some(2023));
    }

    #[test]
    fn test_year_without_season() {
        let term = infer_term("Notes 2021.pdf", &[]);

        assert_eq!(term.semester, None);
        assert_eq!(term.year, Some(2021));
    }

    #[test]
    fn test_no_match_leaves_both_unset() {
        let term = infer_term("Syllabus.pdf", &[]);

        assert_eq!(term, Term::default());
    }

    #[test]
    fn test_season_without_adjacent_year_picks_up_stray_year() {
        // "2019" is not adjacent to "Fall" but still fills the year.
        let term = infer_term("Fall Midterm 2019.pdf", &[]);

        assert_eq!(term.semester.as_deref(), Some("Fall"));
        assert_eq!(term.year, Some(2019));
    }

    #[test]
    fn test_season_alone() {
        let term = infer_term("spring review.pdf", &[]);

        assert_eq!(term.semester.as_deref(), Some("Spring"));
        assert_eq!(term.year, None);
    }

    #[test]
    fn test_season_and_year_without_space() {
        let term = infer_term("SUMMER2022.pdf", &[]);

        assert_eq!(term.semester.as_deref(), Some("Summer"));
        assert_eq!(term.year, Some(2022));
    }

    #[test]
    fn test_mixed_case_season_is_capitalized() {
        let term = infer_term("fAlL 2020.pdf", &[]);

        assert_eq!(term.semester.as_deref(), Some("Fall"));
        assert_eq!(term.year, Some(2020));
    }

    #[test]
    fn test_ancestor_folder_name_contributes() {
        let term = infer_term("exam.pdf", &path(&["Fall 2020"]));

        assert_eq!(term.semester.as_deref(), Some("Fall"));
        assert_eq!(term.year, Some(2020));
    }

    #[test]
    fn test_year_adjacent_to_season_may_predate_2000() {
        let term = infer_term("Winter 1999.pdf", &[]);

        assert_eq!(term.semester.as_deref(), Some("Winter"));
        assert_eq!(term.year, Some(1999));
    }

    #[test]
    fn test_bare_year_must_be_in_this_century() {
        let term = infer_term("Notes 1999.pdf", &[]);

        assert_eq!(term.semester, None);
        assert_eq!(term.year, None);
    }
}
