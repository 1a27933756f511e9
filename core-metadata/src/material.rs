//! Material classification and title normalization
//!
//! Classification searches the file name together with its ancestor folder
//! names, so a file called `q1.pdf` inside an `Exams` folder still lands in
//! the right category.

use regex::Regex;
use std::sync::LazyLock;

/// Trailing extension: the last dot and everything after it.
static EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^.]+$").expect("pattern is valid"));

/// Runs of underscores and hyphens.
static SEPARATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-]+").expect("pattern is valid"));

/// Material categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialType {
    Exam,
    Quiz,
    Assignment,
    Notes,
    Solution,
    Other,
}

impl MaterialType {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Exam => "exam",
            MaterialType::Quiz => "quiz",
            MaterialType::Assignment => "assignment",
            MaterialType::Notes => "notes",
            MaterialType::Solution => "solution",
            MaterialType::Other => "other",
        }
    }
}

/// Keyword groups tested in order; the first group with any match wins.
/// "final exam solutions" must classify as an exam, so the exam family
/// stays ahead of the solution family.
const TYPE_RULES: &[(&[&str], MaterialType)] = &[
    (&["exam", "midterm", "final", "makeup"], MaterialType::Exam),
    (&["quiz"], MaterialType::Quiz),
    (
        &["assignment", "project", "homework", "hw"],
        MaterialType::Assignment,
    ),
    (&["note", "lecture", "summary"], MaterialType::Notes),
    (&["solution", "answer", "key"], MaterialType::Solution),
];

/// Classifies a material by keyword, searching the file name and every
/// ancestor folder name case-insensitively.
pub fn infer_material_type(file_name: &str, path: &[String]) -> MaterialType {
    let haystack = format!("{} {}", path.join(" "), file_name).to_lowercase();

    for (keywords, material_type) in TYPE_RULES {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *material_type;
        }
    }

    MaterialType::Other
}

/// Derives a display title from a file name: the trailing extension is
/// stripped and runs of underscores and hyphens become single spaces.
pub fn normalize_title(file_name: &str) -> String {
    let stem = EXTENSION_PATTERN.replace(file_name, "");
    SEPARATOR_PATTERN.replace_all(&stem, " ").trim().to_string()
}
