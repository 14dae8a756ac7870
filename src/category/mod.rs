//! Problem categories: the coarse grouping tools use to present problems.
//!
//! A problem's category comes from the irritant that governs it when that
//! irritant implies one, then from a short list of explicit overrides, and
//! finally from the flag bits embedded in its id.

pub mod expected;

use std::{collections::HashMap, fmt, sync::LazyLock};

use serde::Serialize;

use crate::{
    irritant::Irritant,
    options::irritant_of,
    problem::{
        ProblemId, ProblemKind,
        id::{
            COMPLIANCE, CONSTRUCTOR_RELATED, FIELD_RELATED, IMPORT_RELATED, JAVADOC,
            METHOD_RELATED, MODULE_RELATED, PREVIEW_RELATED, SYNTAX, TYPE_RELATED,
        },
    },
};

macro_rules! define_categories {
    ($($variant:ident = $code:literal => $name:literal, $label:literal;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(into = "&'static str")]
        pub enum Category {
            $($variant,)*
        }

        impl Category {
            pub const ALL: &'static [Category] = &[$(Category::$variant,)*];

            pub const fn code(self) -> u32 {
                match self {
                    $(Category::$variant => $code,)*
                }
            }

            pub const fn from_code(code: u32) -> Option<Category> {
                match code {
                    $($code => Some(Category::$variant),)*
                    _ => None,
                }
            }

            /// Constant name, e.g. `CAT_MEMBER`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Category::$variant => $name,)*
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $(Category::$variant => $label,)*
                }
            }

            /// Variant identifier as it appears in generated source.
            pub const fn variant_name(self) -> &'static str {
                match self {
                    $(Category::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

define_categories! {
    Unspecified = 0 => "CAT_UNSPECIFIED", "Unspecified";
    Buildpath = 10 => "CAT_BUILDPATH", "Build path";
    Syntax = 20 => "CAT_SYNTAX", "Syntax";
    Import = 30 => "CAT_IMPORT", "Import";
    Type = 40 => "CAT_TYPE", "Type";
    Member = 50 => "CAT_MEMBER", "Member";
    Internal = 60 => "CAT_INTERNAL", "Internal";
    Javadoc = 70 => "CAT_JAVADOC", "Javadoc";
    CodeStyle = 80 => "CAT_CODE_STYLE", "Code style";
    PotentialProgrammingProblem = 90 => "CAT_POTENTIAL_PROGRAMMING_PROBLEM", "Potential programming problem";
    NameShadowingConflict = 100 => "CAT_NAME_SHADOWING_CONFLICT", "Name shadowing and conflicts";
    Deprecation = 110 => "CAT_DEPRECATION", "Deprecation";
    UnnecessaryCode = 120 => "CAT_UNNECESSARY_CODE", "Unnecessary code";
    UncheckedRaw = 130 => "CAT_UNCHECKED_RAW", "Generic types";
    Nls = 140 => "CAT_NLS", "String externalization";
    Restriction = 150 => "CAT_RESTRICTION", "Restricted API";
    Module = 160 => "CAT_MODULE", "Module";
    Compliance = 170 => "CAT_COMPLIANCE", "Compliance";
    PreviewRelated = 180 => "CAT_PREVIEW_RELATED", "Preview feature";
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.name()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category implied by an irritant for every problem it governs.
pub const fn irritant_category(irritant: Irritant) -> Option<Category> {
    Some(match irritant {
        Irritant::METHOD_WITH_CONSTRUCTOR_NAME
        | Irritant::ACCESS_EMULATION
        | Irritant::ASSERT_USED_AS_AN_IDENTIFIER
        | Irritant::NON_STATIC_ACCESS_TO_STATIC
        | Irritant::UNQUALIFIED_FIELD_ACCESS
        | Irritant::UNDOCUMENTED_EMPTY_BLOCK
        | Irritant::INDIRECT_STATIC_ACCESS
        | Irritant::FINAL_PARAMETER_BOUND
        | Irritant::ENUM_USED_AS_AN_IDENTIFIER
        | Irritant::AUTO_BOXING
        | Irritant::ANNOTATION_SUPER_INTERFACE
        | Irritant::MISSING_OVERRIDE_ANNOTATION
        | Irritant::MISSING_DEPRECATED_ANNOTATION
        | Irritant::PARAMETER_ASSIGNMENT
        | Irritant::METHOD_CAN_BE_STATIC
        | Irritant::METHOD_CAN_BE_POTENTIALLY_STATIC
        | Irritant::EXPLICITLY_CLOSED_AUTO_CLOSEABLE => Category::CodeStyle,
        Irritant::OVERRIDDEN_PACKAGE_DEFAULT_METHOD
        | Irritant::INCOMPATIBLE_NON_INHERITED_INTERFACE_METHOD
        | Irritant::LOCAL_VARIABLE_HIDING
        | Irritant::FIELD_HIDING
        | Irritant::TYPE_HIDING => Category::NameShadowingConflict,
        Irritant::USING_DEPRECATED_API
        | Irritant::USING_TERMINALLY_DEPRECATED_API => Category::Deprecation,
        Irritant::MASKED_CATCH_BLOCK
        | Irritant::NO_IMPLICIT_STRING_CONVERSION
        | Irritant::NO_EFFECT_ASSIGNMENT
        | Irritant::ACCIDENTAL_BOOLEAN_ASSIGN
        | Irritant::EMPTY_STATEMENT
        | Irritant::FINALLY_BLOCK_NOT_COMPLETING
        | Irritant::MISSING_SERIAL_VERSION
        | Irritant::VARARGS_ARGUMENT_NEED_CAST
        | Irritant::NULL_REFERENCE
        | Irritant::MISSING_ENUM_CONSTANT_CASE
        | Irritant::FALLTHROUGH_CASE
        | Irritant::OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION
        | Irritant::POTENTIAL_NULL_REFERENCE
        | Irritant::REDUNDANT_NULL_CHECK
        | Irritant::COMPARING_IDENTICAL
        | Irritant::MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD
        | Irritant::SHOULD_IMPLEMENT_HASHCODE
        | Irritant::DEAD_CODE
        | Irritant::UNUSED_OBJECT_ALLOCATION
        | Irritant::UNCLOSED_CLOSEABLE
        | Irritant::POTENTIALLY_UNCLOSED_CLOSEABLE
        | Irritant::NULL_SPEC_VIOLATION
        | Irritant::NULL_ANNOTATION_INFERENCE_CONFLICT
        | Irritant::NULL_UNCHECKED_CONVERSION
        | Irritant::MISSING_NON_NULL_BY_DEFAULT_ANNOTATION
        | Irritant::MISSING_DEFAULT_CASE
        | Irritant::NONNULL_PARAMETER_ANNOTATION_DROPPED
        | Irritant::PESSIMISTIC_NULL_ANALYSIS_FOR_FREE_TYPE_VARIABLES
        | Irritant::NON_NULL_TYPE_VARIABLE_FROM_LEGACY_INVOCATION
        | Irritant::UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE
        | Irritant::UNLIKELY_EQUALS_ARGUMENT_TYPE
        | Irritant::API_LEAK
        | Irritant::UNSTABLE_AUTO_MODULE_NAME
        | Irritant::ANNOTATED_TYPE_ARGUMENT_TO_UNANNOTATED
        | Irritant::INCOMPATIBLE_OWNING_CONTRACT
        | Irritant::INSUFFICIENT_RESOURCE_MANAGEMENT => Category::PotentialProgrammingProblem,
        Irritant::UNUSED_LOCAL_VARIABLE
        | Irritant::UNUSED_ARGUMENT
        | Irritant::UNUSED_IMPORT
        | Irritant::UNUSED_PRIVATE_MEMBER
        | Irritant::UNUSED_DECLARED_THROWN_EXCEPTION
        | Irritant::UNNECESSARY_TYPE_CHECK
        | Irritant::UNNECESSARY_ELSE
        | Irritant::UNHANDLED_WARNING_TOKEN
        | Irritant::UNUSED_LABEL
        | Irritant::UNUSED_WARNING_TOKEN
        | Irritant::REDUNDANT_SUPERINTERFACE
        | Irritant::REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS
        | Irritant::REDUNDANT_NULL_ANNOTATION
        | Irritant::UNUSED_TYPE_PARAMETER
        | Irritant::UNUSED_EXCEPTION_PARAMETER
        | Irritant::SUPPRESS_WARNINGS_NOT_ANALYSED
        | Irritant::UNUSED_LAMBDA_PARAMETER => Category::UnnecessaryCode,
        Irritant::NON_EXTERNALIZED_STRING => Category::Nls,
        Irritant::MISSING_JAVADOC_COMMENTS
        | Irritant::MISSING_JAVADOC_TAGS
        | Irritant::INVALID_JAVADOC
        | Irritant::MISSING_JAVADOC_TAG_DESCRIPTION => Category::Javadoc,
        Irritant::UNCHECKED_TYPE_OPERATION
        | Irritant::RAW_TYPE_REFERENCE => Category::UncheckedRaw,
        Irritant::FORBIDDEN_REFERENCE
        | Irritant::DISCOURAGED_REFERENCE => Category::Restriction,
        Irritant::PREVIEW_FEATURE_USED => Category::PreviewRelated,
        _ => return None,
    })
}

/// Problems whose category overrides what their id flags say.
const fn explicit_category(kind: ProblemKind) -> Option<Category> {
    use ProblemKind as P;

    Some(match kind {
        P::IsClassPathCorrect
        | P::IsClassPathCorrectWithReferencingType
        | P::CorruptedSignature
        | P::MissingNullAnnotationImplicitlyUsed
        | P::UndefinedModuleAddReads => Category::Buildpath,
        P::JavadocInvalidModule => Category::Internal,
        P::UninitializedNonNullField
        | P::UninitializedNonNullFieldHintMissingDefault
        | P::IllegalParameterNullityRedefinition
        | P::UninitializedFreeTypeVariableField
        | P::UninitializedFreeTypeVariableFieldHintMissingDefault
        | P::NonNullArrayContentNotInitialized
        | P::ShouldMarkMethodAsOwning => Category::PotentialProgrammingProblem,
        _ => return None,
    })
}

/// Classifies by the flag bits alone, in priority order.
pub const fn flag_category(id: ProblemId) -> Category {
    if !id.is_categorized() {
        return Category::Unspecified;
    }
    if id.has_flag(SYNTAX) {
        Category::Syntax
    } else if id.has_flag(IMPORT_RELATED) {
        Category::Import
    } else if id.has_flag(TYPE_RELATED) {
        Category::Type
    } else if id.has_flag(FIELD_RELATED | METHOD_RELATED | CONSTRUCTOR_RELATED) {
        Category::Member
    } else if id.has_flag(JAVADOC) {
        Category::Javadoc
    } else if id.has_flag(MODULE_RELATED) {
        Category::Module
    } else if id.has_flag(COMPLIANCE) {
        Category::Compliance
    } else if id.has_flag(PREVIEW_RELATED) {
        Category::PreviewRelated
    } else {
        Category::Internal
    }
}

pub const fn category_of(kind: ProblemKind) -> Category {
    let id = kind.id();
    if !id.is_categorized() {
        return Category::Unspecified;
    }
    if let Some(irritant) = irritant_of(kind) {
        if let Some(category) = irritant_category(irritant) {
            return category;
        }
    }
    if let Some(category) = explicit_category(kind) {
        return category;
    }
    flag_category(id)
}

/// Classifies a raw id. Ids that name no declared problem fall back on
/// their flag bits.
pub fn category_of_id(id: ProblemId) -> Category {
    match crate::problem::kind_of_id(id) {
        Some(kind) => category_of(kind),
        None => flag_category(id),
    }
}

static CATEGORIES_BY_NAME: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(Category::ALL.len() * 2);
    for category in Category::ALL {
        let previous = index.insert(category.name(), *category);
        debug_assert!(previous.is_none(), "duplicate category name {}", category.name());
        index.insert(category.variant_name(), *category);
    }
    index
});

/// Resolves `CAT_MEMBER` or `Member`.
pub fn category_name_of(name: &str) -> Option<Category> {
    CATEGORIES_BY_NAME.get(name).copied()
}

#[cfg(test)]
mod category_test;
