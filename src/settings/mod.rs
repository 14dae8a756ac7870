//! User problem settings: per-option severity overrides, `-warn` style token
//! specs and token-based suppression.
//!
//! Only optional problems can be tuned. A problem no option governs is
//! always an error, whatever the settings say.

mod error;

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use log::{debug, trace};
use serde::Deserialize;

pub use error::SettingsError;

use crate::{
    irritant::{IrritantSet, tokens::token_to_irritants},
    options::{Severity, SeverityOption, option_for},
    problem::ProblemKind,
};

/// On-disk settings, e.g.
/// `{ "severities": { "unusedImport": "ignore" }, "warn": "+boxing", "suppress": ["unused"] }`.
///
/// `suppress_optional_errors` lets suppression also silence optional
/// problems configured as errors; it is off by default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub severities: BTreeMap<String, String>,
    pub warn: Option<String>,
    pub suppress: Vec<String>,
    pub suppress_optional_errors: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemSettings {
    overrides: HashMap<SeverityOption, Severity>,
    suppressed: IrritantSet,
    suppress_optional_errors: bool,
}

impl ProblemSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading problem settings from {}", path.display());
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = serde_json::from_str(text)?;
        Self::from_settings_file(&file)
    }

    pub fn from_settings_file(file: &SettingsFile) -> Result<Self, SettingsError> {
        let mut settings = Self::new();
        settings.set_suppress_optional_errors(file.suppress_optional_errors);
        for (key, value) in &file.severities {
            settings.set_severity_by_key(key, value)?;
        }
        if let Some(spec) = &file.warn {
            settings.apply_warn_spec(spec)?;
        }
        for token in &file.suppress {
            settings.suppress(token)?;
        }
        debug!(
            "problem settings: {} overrides, {} suppressed irritants",
            settings.overrides.len(),
            settings.suppressed.len()
        );
        Ok(settings)
    }

    pub fn set_severity(&mut self, option: SeverityOption, severity: Severity) {
        trace!("{} = {}", option.qualified_key(), severity);
        self.overrides.insert(option, severity);
    }

    /// Accepts bare or `compiler.problem.` qualified keys.
    pub fn set_severity_by_key(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let option =
            SeverityOption::from_key(key).ok_or_else(|| SettingsError::UnknownOption(key.to_string()))?;
        let severity = value
            .parse::<Severity>()
            .map_err(|value| SettingsError::UnknownSeverity {
                key: key.to_string(),
                value,
            })?;
        self.set_severity(option, severity);
        Ok(())
    }

    pub fn option_severity(&self, option: SeverityOption) -> Severity {
        self.overrides
            .get(&option)
            .copied()
            .unwrap_or_else(|| option.default_severity())
    }

    /// Severity `kind` is reported at under these settings.
    pub fn effective_severity(&self, kind: ProblemKind) -> Severity {
        match option_for(kind) {
            None => Severity::Error,
            Some(option) if self.suppresses(option) => Severity::Ignore,
            Some(option) => self.option_severity(option),
        }
    }

    pub fn is_suppressed(&self, kind: ProblemKind) -> bool {
        option_for(kind).is_some_and(|option| self.suppresses(option))
    }

    /// Optional errors are only suppressed when explicitly allowed.
    fn suppresses(&self, option: SeverityOption) -> bool {
        self.suppressed.contains(option.irritant())
            && (self.suppress_optional_errors || self.option_severity(option) < Severity::Error)
    }

    pub fn suppress_optional_errors(&self) -> bool {
        self.suppress_optional_errors
    }

    pub fn set_suppress_optional_errors(&mut self, enabled: bool) {
        self.suppress_optional_errors = enabled;
    }

    /// Suppresses every optional problem a token names. Mandatory problems
    /// and, unless [`Self::set_suppress_optional_errors`] is on, optional
    /// problems configured as errors stay reported.
    pub fn suppress(&mut self, token: &str) -> Result<(), SettingsError> {
        let irritants = resolve_token(token)?;
        self.suppressed = self.suppressed.union(&irritants);
        Ok(())
    }

    pub fn suppressed(&self) -> &IrritantSet {
        &self.suppressed
    }

    /// Applies a comma separated `-warn` spec.
    ///
    /// `+tok` raises the token's options to warning, `-tok` silences them.
    /// A bare list first silences every option currently at info or
    /// warning, then enables exactly the listed tokens.
    pub fn apply_warn_spec(&mut self, spec: &str) -> Result<(), SettingsError> {
        let items: Vec<&str> = spec
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            return Err(SettingsError::MalformedWarnSpec {
                spec: spec.to_string(),
                reason: "no tokens given",
            });
        }
        let incremental = items
            .iter()
            .filter(|item| item.starts_with('+') || item.starts_with('-'))
            .count();
        if incremental != 0 && incremental != items.len() {
            return Err(SettingsError::MalformedWarnSpec {
                spec: spec.to_string(),
                reason: "cannot mix +/- tokens with a bare token list",
            });
        }

        if incremental == 0 {
            let enabled = items
                .iter()
                .map(|token| resolve_token(token))
                .collect::<Result<Vec<_>, _>>()?;
            for option in SeverityOption::ALL {
                if matches!(self.option_severity(*option), Severity::Info | Severity::Warning) {
                    self.set_severity(*option, Severity::Ignore);
                }
            }
            for irritants in enabled {
                self.set_irritants(&irritants, Severity::Warning);
            }
            return Ok(());
        }

        for item in items {
            let (severity, token) = match item.split_at(1) {
                ("+", token) => (Severity::Warning, token),
                (_, token) => (Severity::Ignore, token),
            };
            let irritants = resolve_token(token)?;
            self.set_irritants(&irritants, severity);
        }
        Ok(())
    }

    fn set_irritants(&mut self, irritants: &IrritantSet, severity: Severity) {
        for irritant in irritants.iter() {
            if let Some(option) = SeverityOption::from_irritant(irritant) {
                self.set_severity(option, severity);
            }
        }
    }
}

fn resolve_token(token: &str) -> Result<IrritantSet, SettingsError> {
    token_to_irritants(token).ok_or_else(|| SettingsError::UnknownToken(token.to_string()))
}

#[cfg(test)]
mod settings_test;
