//! Offline consistency check of the whole registry.
//!
//! Phase 1 checks the id space and the category table, phase 2 the option
//! table and the warning tokens. Both phases always run to completion so a
//! single report lists every drift, together with regenerated tables that
//! can replace the checked-in ones.

pub mod regen;
pub mod report;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, trace};

pub use report::{Finding, FindingClass, RegeneratedTable, Report};

use crate::{
    category::{
        Category, category_of,
        expected::{CATEGORY_TABLE, CategoryExpectation},
    },
    irritant::{Irritant, IrritantSet, tokens},
    options::{
        SeverityOption,
        expected::{OPTION_TABLE, OptionExpectation},
        option_for,
    },
    problem::{ProblemId, ProblemKind},
};

/// One problem as the validator sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemEntry {
    pub name: String,
    pub id: ProblemId,
    pub deprecated: bool,
    pub category: Category,
    pub option: Option<SeverityOption>,
}

impl ProblemEntry {
    pub fn from_kind(kind: ProblemKind) -> Self {
        Self {
            name: kind.name().to_string(),
            id: kind.id(),
            deprecated: kind.is_deprecated(),
            category: category_of(kind),
            option: option_for(kind),
        }
    }
}

/// Every declared problem kind, in declaration order.
pub fn registry_entries() -> Vec<ProblemEntry> {
    ProblemKind::ALL
        .iter()
        .map(|kind| ProblemEntry::from_kind(*kind))
        .collect()
}

/// The token side of the registry, so alternative token tables can be
/// checked against the same rules.
pub trait TokenRegistry {
    fn declared_tokens(&self) -> &[&'static str];
    fn special_tokens(&self) -> &[&'static str];
    fn token_to_irritants(&self, token: &str) -> Option<IrritantSet>;
    fn irritant_to_token(&self, irritant: Irritant) -> Option<&'static str>;
}

/// The compiled-in warning tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTokens;

impl TokenRegistry for BuiltinTokens {
    fn declared_tokens(&self) -> &[&'static str] {
        tokens::WARNING_TOKENS
    }

    fn special_tokens(&self) -> &[&'static str] {
        tokens::SPECIAL_TOKENS
    }

    fn token_to_irritants(&self, token: &str) -> Option<IrritantSet> {
        tokens::token_to_irritants(token)
    }

    fn irritant_to_token(&self, irritant: Irritant) -> Option<&'static str> {
        tokens::irritant_to_token(irritant)
    }
}

pub struct Validator<'a> {
    entries: Vec<ProblemEntry>,
    category_table: &'a [(ProblemKind, CategoryExpectation)],
    option_table: &'a [(ProblemKind, OptionExpectation)],
    tokens: &'a dyn TokenRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(
        entries: Vec<ProblemEntry>,
        category_table: &'a [(ProblemKind, CategoryExpectation)],
        option_table: &'a [(ProblemKind, OptionExpectation)],
    ) -> Self {
        Self {
            entries,
            category_table,
            option_table,
            tokens: &BuiltinTokens,
        }
    }

    /// The compiled-in registry against the checked-in tables.
    pub fn for_registry() -> Validator<'static> {
        Validator::new(registry_entries(), CATEGORY_TABLE, OPTION_TABLE)
    }

    pub fn with_tokens(mut self, tokens: &'a dyn TokenRegistry) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn entries(&self) -> &[ProblemEntry] {
        &self.entries
    }

    pub fn run(&self) -> Result<(), Report> {
        let report = self.inspect();
        if report.is_clean() {
            Ok(())
        } else {
            Err(report)
        }
    }

    /// Runs both phases and returns the report even when it is clean.
    pub fn inspect(&self) -> Report {
        let mut findings = Vec::new();

        self.check_ids(&mut findings);
        self.check_categories(&mut findings);
        debug!(
            "phase 1: {} entries, {} category rows, {} findings",
            self.entries.len(),
            self.category_table.len(),
            findings.len()
        );

        let phase_one = findings.len();
        self.check_options(&mut findings);
        self.check_tokens(&mut findings);
        debug!(
            "phase 2: {} option rows, {} tokens, {} findings",
            self.option_table.len(),
            self.tokens.declared_tokens().len(),
            findings.len() - phase_one
        );

        findings.sort();
        findings.dedup();
        for finding in &findings {
            trace!("{finding}");
        }

        let category_table = self.regenerate_category_table();
        let option_table = self.regenerate_option_table();
        let fingerprint = regen::fingerprint(&[&category_table.source, &option_table.source]);

        Report {
            findings,
            category_table,
            option_table,
            fingerprint,
        }
    }

    /// Entries that carry a real category, sorted by name.
    fn categorized(&self) -> Vec<&ProblemEntry> {
        let mut entries: Vec<&ProblemEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id.is_categorized())
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    fn check_ids(&self, findings: &mut Vec<Finding>) {
        let mut by_id: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
        for entry in self.entries.iter().filter(|entry| !entry.deprecated) {
            by_id.entry(entry.id.raw()).or_default().push(entry.name.as_str());
        }
        for (raw, mut names) in by_id {
            if names.len() > 1 {
                names.sort_unstable();
                findings.push(Finding::new(
                    FindingClass::DuplicateId,
                    ProblemId::new(raw).to_string(),
                    "a single non-deprecated problem",
                    names.join(", "),
                ));
            }
        }
    }

    fn check_categories(&self, findings: &mut Vec<Finding>) {
        let rows = index_rows(self.category_table, FindingClass::DuplicateCategoryRow, findings);
        let categorized = self.categorized();

        for entry in &categorized {
            if entry.category == Category::Unspecified {
                findings.push(Finding::new(
                    FindingClass::UnspecifiedCategory,
                    &entry.name,
                    "a specific category",
                    Category::Unspecified.name(),
                ));
            }
            match rows.get(entry.name.as_str()) {
                None => findings.push(Finding::new(
                    FindingClass::MissingCategoryRow,
                    &entry.name,
                    "a category row",
                    format!("no row (classified as {})", entry.category),
                )),
                Some(CategoryExpectation::Is(category)) if *category != entry.category => {
                    findings.push(Finding::new(
                        FindingClass::CategoryMismatch,
                        &entry.name,
                        category.name(),
                        entry.category.name(),
                    ))
                }
                Some(CategoryExpectation::Deprecated) if !entry.deprecated => {
                    findings.push(Finding::new(
                        FindingClass::UnexpectedDeprecatedMarker,
                        &entry.name,
                        "a deprecated problem",
                        format!("a current problem classified as {}", entry.category),
                    ))
                }
                Some(_) => {}
            }
        }

        let known: BTreeSet<&str> = categorized.iter().map(|entry| entry.name.as_str()).collect();
        for name in rows.keys().filter(|name| !known.contains(*name)) {
            findings.push(Finding::new(
                FindingClass::UnknownCategoryRow,
                *name,
                "a categorized problem",
                "no such problem",
            ));
        }
    }

    fn check_options(&self, findings: &mut Vec<Finding>) {
        let rows = index_rows(self.option_table, FindingClass::DuplicateOptionRow, findings);
        let categorized = self.categorized();

        for entry in &categorized {
            let live = entry.option.map_or("none".to_string(), |option| option.key().to_string());
            match rows.get(entry.name.as_str()) {
                None => findings.push(Finding::new(
                    FindingClass::MissingOptionRow,
                    &entry.name,
                    "an option row",
                    format!("no row (option {live})"),
                )),
                Some(OptionExpectation::Configurable(option)) if Some(*option) != entry.option => {
                    findings.push(Finding::new(
                        FindingClass::OptionMismatch,
                        &entry.name,
                        option.key(),
                        live,
                    ))
                }
                Some(OptionExpectation::Skip) if entry.option.is_some() => {
                    findings.push(Finding::new(
                        FindingClass::OptionMismatch,
                        &entry.name,
                        "none",
                        live,
                    ))
                }
                Some(_) => {}
            }
        }

        let known: BTreeSet<&str> = categorized.iter().map(|entry| entry.name.as_str()).collect();
        for name in rows.keys().filter(|name| !known.contains(*name)) {
            findings.push(Finding::new(
                FindingClass::UnknownOptionRow,
                *name,
                "a categorized problem",
                "no such problem",
            ));
        }
    }

    fn check_tokens(&self, findings: &mut Vec<Finding>) {
        let declared = self.tokens.declared_tokens();
        let special = self.tokens.special_tokens();
        let mut produced: BTreeSet<&'static str> = BTreeSet::new();

        for irritant in Irritant::grid() {
            let Some(token) = self.tokens.irritant_to_token(irritant) else {
                continue;
            };
            produced.insert(token);
            let covered = self
                .tokens
                .token_to_irritants(token)
                .is_some_and(|set| set.contains(irritant));
            if !covered {
                findings.push(Finding::new(
                    FindingClass::TokenRoundTrip,
                    format!("irritant {irritant}"),
                    format!("'{token}' to include it"),
                    describe_set(self.tokens.token_to_irritants(token)),
                ));
            }
            if !declared.contains(&token) {
                findings.push(Finding::new(
                    FindingClass::TokenRoundTrip,
                    format!("irritant {irritant}"),
                    "a declared token",
                    format!("undeclared '{token}'"),
                ));
            }
        }

        for token in declared.iter().filter(|token| !special.contains(*token)) {
            if !produced.contains(token) {
                findings.push(Finding::new(
                    FindingClass::UnreachableToken,
                    format!("'{token}'"),
                    "produced by some irritant",
                    "never produced",
                ));
            }
            if let Some(only) = self.tokens.token_to_irritants(token).and_then(|set| set.single()) {
                let back = self.tokens.irritant_to_token(only);
                if back != Some(*token) {
                    findings.push(Finding::new(
                        FindingClass::SingleTokenMismatch,
                        format!("'{token}'"),
                        format!("irritant {only} to map back to '{token}'"),
                        back.map_or("no token".to_string(), |back| format!("'{back}'")),
                    ));
                }
            }
        }

        let every = declared
            .iter()
            .filter(|token| !special.contains(*token))
            .filter_map(|token| self.tokens.token_to_irritants(token))
            .fold(IrritantSet::EMPTY, |acc, set| acc.union(&set));
        for token in special {
            if !declared.contains(token) {
                findings.push(Finding::new(
                    FindingClass::SpecialToken,
                    format!("'{token}'"),
                    "a declared token",
                    "undeclared",
                ));
            }
            if produced.contains(token) {
                findings.push(Finding::new(
                    FindingClass::SpecialToken,
                    format!("'{token}'"),
                    "no irritant to map back to it",
                    "produced by an irritant",
                ));
            }
            match self.tokens.token_to_irritants(token) {
                None => findings.push(Finding::new(
                    FindingClass::SpecialToken,
                    format!("'{token}'"),
                    "to resolve to irritants",
                    "unresolved",
                )),
                Some(set) if *token == "all" && !set.is_superset(&every) => {
                    findings.push(Finding::new(
                        FindingClass::SpecialToken,
                        "'all'",
                        "every irritant named by a token",
                        format!("missing {}", every.difference(&set)),
                    ))
                }
                Some(_) => {}
            }
        }
    }

    fn regenerate_category_table(&self) -> RegeneratedTable {
        let existing = first_rows(self.category_table);
        let rows: Vec<(&str, CategoryExpectation)> = self
            .categorized()
            .into_iter()
            .map(|entry| {
                let keep_marker = entry.deprecated
                    && existing.get(entry.name.as_str()) == Some(&CategoryExpectation::Deprecated);
                let expectation = if keep_marker {
                    CategoryExpectation::Deprecated
                } else {
                    CategoryExpectation::Is(entry.category)
                };
                (entry.name.as_str(), expectation)
            })
            .collect();
        let source = regen::render_category_table(rows);
        let current = regen::render_category_table(
            self.category_table
                .iter()
                .map(|(kind, expectation)| (kind.name(), *expectation)),
        );
        RegeneratedTable {
            name: "CATEGORY_TABLE",
            path: regen::CATEGORY_TABLE_PATH,
            changed: source != current,
            source,
        }
    }

    fn regenerate_option_table(&self) -> RegeneratedTable {
        let rows: Vec<(&str, OptionExpectation)> = self
            .categorized()
            .into_iter()
            .map(|entry| {
                let expectation = entry
                    .option
                    .map_or(OptionExpectation::Skip, OptionExpectation::Configurable);
                (entry.name.as_str(), expectation)
            })
            .collect();
        let source = regen::render_option_table(rows);
        let current = regen::render_option_table(
            self.option_table
                .iter()
                .map(|(kind, expectation)| (kind.name(), *expectation)),
        );
        RegeneratedTable {
            name: "OPTION_TABLE",
            path: regen::OPTION_TABLE_PATH,
            changed: source != current,
            source,
        }
    }
}

/// Runs the validator over the compiled-in registry.
pub fn validate_registry() -> Result<(), Report> {
    Validator::for_registry().run()
}

/// First row per problem name; later rows are reported as duplicates.
fn index_rows<T: Copy>(
    table: &[(ProblemKind, T)],
    duplicate: FindingClass,
    findings: &mut Vec<Finding>,
) -> BTreeMap<&'static str, T> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for (kind, _) in table {
        *counts.entry(kind.name()).or_insert(0) += 1;
    }
    for (name, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
        findings.push(Finding::new(
            duplicate,
            name,
            "exactly one row",
            format!("{count} rows"),
        ));
    }
    first_rows(table)
}

fn first_rows<T: Copy>(table: &[(ProblemKind, T)]) -> BTreeMap<&'static str, T> {
    let mut rows = BTreeMap::new();
    for (kind, expectation) in table {
        rows.entry(kind.name()).or_insert(*expectation);
    }
    rows
}

fn describe_set(set: Option<IrritantSet>) -> String {
    match set {
        Some(set) => set.to_string(),
        None => "an unknown token".to_string(),
    }
}

#[cfg(test)]
mod validate_test;
