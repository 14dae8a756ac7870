use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// Kinds of inconsistency, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingClass {
    DuplicateId,
    UnspecifiedCategory,
    MissingCategoryRow,
    CategoryMismatch,
    UnexpectedDeprecatedMarker,
    DuplicateCategoryRow,
    UnknownCategoryRow,
    MissingOptionRow,
    OptionMismatch,
    DuplicateOptionRow,
    UnknownOptionRow,
    TokenRoundTrip,
    UnreachableToken,
    SpecialToken,
    SingleTokenMismatch,
}

impl FindingClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            FindingClass::DuplicateId => "duplicate-id",
            FindingClass::UnspecifiedCategory => "unspecified-category",
            FindingClass::MissingCategoryRow => "missing-category-row",
            FindingClass::CategoryMismatch => "category-mismatch",
            FindingClass::UnexpectedDeprecatedMarker => "unexpected-deprecated-marker",
            FindingClass::DuplicateCategoryRow => "duplicate-category-row",
            FindingClass::UnknownCategoryRow => "unknown-category-row",
            FindingClass::MissingOptionRow => "missing-option-row",
            FindingClass::OptionMismatch => "option-mismatch",
            FindingClass::DuplicateOptionRow => "duplicate-option-row",
            FindingClass::UnknownOptionRow => "unknown-option-row",
            FindingClass::TokenRoundTrip => "token-round-trip",
            FindingClass::UnreachableToken => "unreachable-token",
            FindingClass::SpecialToken => "special-token",
            FindingClass::SingleTokenMismatch => "single-token-mismatch",
        }
    }

    /// Phase 1 covers ids and categories, phase 2 options and tokens.
    pub const fn phase(self) -> u8 {
        match self {
            FindingClass::DuplicateId
            | FindingClass::UnspecifiedCategory
            | FindingClass::MissingCategoryRow
            | FindingClass::CategoryMismatch
            | FindingClass::UnexpectedDeprecatedMarker
            | FindingClass::DuplicateCategoryRow
            | FindingClass::UnknownCategoryRow => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for FindingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Finding {
    pub class: FindingClass,
    pub subject: String,
    pub expected: String,
    pub actual: String,
}

impl Finding {
    pub fn new(
        class: FindingClass,
        subject: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            class,
            subject: subject.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: expected {}, found {}",
            self.class, self.subject, self.expected, self.actual
        )
    }
}

/// Regenerated replacement for one checked-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegeneratedTable {
    pub name: &'static str,
    pub path: &'static str,
    pub source: String,
    /// `false` when the checked-in rows already match.
    pub changed: bool,
}

/// Outcome of a validator run.
///
/// Findings are sorted by class and subject so two runs over the same input
/// render byte-identical reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub category_table: RegeneratedTable,
    pub option_table: RegeneratedTable,
    /// SHA-256 of both regenerated tables, lowercase hex.
    pub fingerprint: String,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn counts(&self) -> BTreeMap<FindingClass, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.class).or_insert(0) += 1;
        }
        counts
    }

    pub fn findings_of(&self, class: FindingClass) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.class == class)
    }

    pub fn has(&self, class: FindingClass, subject: &str) -> bool {
        self.findings_of(class)
            .any(|finding| finding.subject == subject)
    }

    /// Findings only, one per line.
    pub fn render_findings(&self) -> String {
        let mut out = String::new();
        for finding in &self.findings {
            out.push_str(&finding.to_string());
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "registry is consistent (tables {})", self.fingerprint);
        }
        writeln!(f, "registry validation found {} problem(s):", self.findings.len())?;
        for (class, count) in self.counts() {
            writeln!(f, "  {class}: {count}")?;
        }
        writeln!(f)?;
        f.write_str(&self.render_findings())?;
        for table in [&self.category_table, &self.option_table] {
            if table.changed {
                writeln!(f)?;
                writeln!(
                    f,
                    "// Replace the {} table in {} with:",
                    table.name, table.path
                )?;
                f.write_str(&table.source)?;
            }
        }
        writeln!(f, "// tables {}", self.fingerprint)
    }
}

impl std::error::Error for Report {}
