//! Numeric problem identifiers.
//!
//! The low 21 bits of an id are a sequential index; the high bits carry the
//! coarse category flags that the classifier falls back on.

use std::fmt;

pub const PREVIEW_RELATED: u32 = 0x0020_0000;
pub const COMPLIANCE: u32 = 0x0040_0000;
pub const MODULE_RELATED: u32 = 0x0080_0000;
pub const TYPE_RELATED: u32 = 0x0100_0000;
pub const FIELD_RELATED: u32 = 0x0200_0000;
pub const METHOD_RELATED: u32 = 0x0400_0000;
pub const CONSTRUCTOR_RELATED: u32 = 0x0800_0000;
pub const IMPORT_RELATED: u32 = 0x1000_0000;
pub const INTERNAL: u32 = 0x2000_0000;
pub const SYNTAX: u32 = 0x4000_0000;
pub const JAVADOC: u32 = 0x8000_0000;

pub const IGNORE_CATEGORIES_MASK: u32 = 0x001F_FFFF;

/// Every flag bit, highest first, with the name used in reports.
pub const ID_FLAGS: &[(u32, &str)] = &[
    (JAVADOC, "Javadoc"),
    (SYNTAX, "Syntax"),
    (INTERNAL, "Internal"),
    (IMPORT_RELATED, "ImportRelated"),
    (CONSTRUCTOR_RELATED, "ConstructorRelated"),
    (METHOD_RELATED, "MethodRelated"),
    (FIELD_RELATED, "FieldRelated"),
    (TYPE_RELATED, "TypeRelated"),
    (MODULE_RELATED, "ModuleRelated"),
    (COMPLIANCE, "Compliance"),
    (PREVIEW_RELATED, "PreviewRelated"),
];

/// Masked index bits of a raw id.
pub const fn category_bits_of(raw: u32) -> u32 {
    raw & IGNORE_CATEGORIES_MASK
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemId(u32);

impl ProblemId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn index(self) -> u32 {
        category_bits_of(self.0)
    }

    pub const fn flags(self) -> u32 {
        self.0 & !IGNORE_CATEGORIES_MASK
    }

    pub const fn has_flag(self, flag: u32) -> bool {
        self.0 & flag != 0
    }

    /// `false` for sentinel ids whose index is all zeros or all ones.
    pub const fn is_categorized(self) -> bool {
        let bits = self.index();
        bits != 0 && bits != IGNORE_CATEGORIES_MASK
    }

    pub fn flag_names(self) -> Vec<&'static str> {
        ID_FLAGS
            .iter()
            .filter(|(flag, _)| self.has_flag(*flag))
            .map(|(_, name)| *name)
            .collect()
    }

    /// Parses `1234`, `0x2000001` or a flag expression such as
    /// `TypeRelated+2`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            return u32::from_str_radix(&hex.replace('_', ""), 16)
                .ok()
                .map(Self);
        }
        if let Ok(value) = text.parse::<u32>() {
            return Some(Self(value));
        }
        let mut raw = 0u32;
        for part in text.split(['+', '|']) {
            let part = part.trim();
            if let Ok(index) = part.parse::<u32>() {
                if index > IGNORE_CATEGORIES_MASK {
                    return None;
                }
                raw |= index;
            } else {
                let (flag, _) = ID_FLAGS.iter().find(|(_, name)| *name == part)?;
                raw |= flag;
            }
        }
        Some(Self(raw))
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.flag_names();
        if names.is_empty() {
            write!(f, "{}", self.index())
        } else {
            write!(f, "{}+{}", names.join("+"), self.index())
        }
    }
}
