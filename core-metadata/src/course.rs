//! Course attribute inference
//!
//! Maps a course folder name to a structured `{code, name, department}`
//! record. The code is the natural key courses are upserted by, so its
//! normalization (uppercase, collapsed whitespace) must stay stable across
//! runs.

use regex::Regex;
use std::sync::LazyLock;

/// `<CODE> - <TITLE>` folder names: two or more letters and two or more
/// digits (optionally space-separated), a hyphen or en-dash, then the title.
static CODE_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,}\s?\d{2,})\s*[-–]\s*(.+)$").expect("pattern is valid")
});

/// Course attributes inferred from a folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredCourse {
    pub code: String,
    pub name: String,
    pub department: String,
}

/// Infers course code and name from a course folder's name.
///
/// `"CMPS200 - Intro to CS"` yields code `CMPS200` and name `Intro to CS`.
/// Names without a recognizable separator fall back to the first two
/// whitespace-separated tokens as the code and the remainder as the name,
/// or the whole name when nothing remains. Total over every input: even an
/// empty string yields a non-empty code and name.
pub fn infer_course(folder_name: &str, department: &str) -> InferredCourse {
    let name = folder_name.trim();

    if let Some(captures) = CODE_TITLE_PATTERN.captures(name) {
        return InferredCourse {
            code: collapse_whitespace(&captures[1]).to_uppercase(),
            name: captures[2].trim().to_string(),
            department: department.to_string(),
        };
    }

    let tokens: Vec<&str> = name.split_whitespace().collect();
    if tokens.is_empty() {
        return InferredCourse {
            code: "UNKNOWN".to_string(),
            name: "Unknown".to_string(),
            department: department.to_string(),
        };
    }

    let split_at = tokens.len().min(2);
    let code = tokens[..split_at].join(" ").to_uppercase();
    let remainder = tokens[split_at..].join(" ");
    let title = if remainder.is_empty() {
        name.to_string()
    } else {
        remainder
    };

    InferredCourse {
        code,
        name: title,
        department: department.to_string(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
