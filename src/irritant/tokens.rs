//! Warning tokens: the short names used by `-warn:` flags and suppression
//! annotations to refer to groups of irritants.

use super::{Irritant, IrritantSet};

/// Declared tokens, sorted.
pub const WARNING_TOKENS: &[&str] = &[
    "all",
    "boxing",
    "cast",
    "dep-ann",
    "deprecation",
    "exports",
    "fallthrough",
    "finally",
    "hiding",
    "incomplete-switch",
    "javadoc",
    "module",
    "nls",
    "null",
    "preview",
    "rawtypes",
    "removal",
    "resource",
    "restriction",
    "serial",
    "static-access",
    "static-method",
    "super",
    "sync-override",
    "synthetic-access",
    "unchecked",
    "unlikely-arg-type",
    "unqualified-field-access",
    "unused",
];

/// Tokens no irritant maps back to: `all` covers everything and `preview`
/// names an irritant that is never suppressible by itself.
pub const SPECIAL_TOKENS: &[&str] = &["all", "preview"];

pub const ALL_IRRITANTS: IrritantSet = IrritantSet::of(Irritant::DECLARED);

const HIDING: IrritantSet = IrritantSet::of(&[
    Irritant::MASKED_CATCH_BLOCK,
    Irritant::LOCAL_VARIABLE_HIDING,
    Irritant::FIELD_HIDING,
    Irritant::TYPE_HIDING,
]);

const JAVADOC: IrritantSet = IrritantSet::of(&[
    Irritant::MISSING_JAVADOC_COMMENTS,
    Irritant::MISSING_JAVADOC_TAGS,
    Irritant::INVALID_JAVADOC,
    Irritant::MISSING_JAVADOC_TAG_DESCRIPTION,
]);

const NULL: IrritantSet = IrritantSet::of(&[
    Irritant::NULL_REFERENCE,
    Irritant::POTENTIAL_NULL_REFERENCE,
    Irritant::REDUNDANT_NULL_CHECK,
    Irritant::NULL_SPEC_VIOLATION,
    Irritant::NULL_ANNOTATION_INFERENCE_CONFLICT,
    Irritant::NULL_UNCHECKED_CONVERSION,
    Irritant::REDUNDANT_NULL_ANNOTATION,
    Irritant::MISSING_NON_NULL_BY_DEFAULT_ANNOTATION,
    Irritant::NONNULL_PARAMETER_ANNOTATION_DROPPED,
    Irritant::PESSIMISTIC_NULL_ANALYSIS_FOR_FREE_TYPE_VARIABLES,
    Irritant::NON_NULL_TYPE_VARIABLE_FROM_LEGACY_INVOCATION,
    Irritant::ANNOTATED_TYPE_ARGUMENT_TO_UNANNOTATED,
]);

const RESOURCE: IrritantSet = IrritantSet::of(&[
    Irritant::UNCLOSED_CLOSEABLE,
    Irritant::POTENTIALLY_UNCLOSED_CLOSEABLE,
    Irritant::EXPLICITLY_CLOSED_AUTO_CLOSEABLE,
    Irritant::INCOMPATIBLE_OWNING_CONTRACT,
    Irritant::INSUFFICIENT_RESOURCE_MANAGEMENT,
]);

const UNUSED: IrritantSet = IrritantSet::of(&[
    Irritant::UNUSED_LOCAL_VARIABLE,
    Irritant::UNUSED_ARGUMENT,
    Irritant::UNUSED_IMPORT,
    Irritant::UNUSED_PRIVATE_MEMBER,
    Irritant::UNUSED_DECLARED_THROWN_EXCEPTION,
    Irritant::UNUSED_LABEL,
    Irritant::UNUSED_TYPE_ARGUMENTS,
    Irritant::REDUNDANT_SUPERINTERFACE,
    Irritant::DEAD_CODE,
    Irritant::UNUSED_OBJECT_ALLOCATION,
    Irritant::REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS,
    Irritant::UNUSED_TYPE_PARAMETER,
    Irritant::UNUSED_EXCEPTION_PARAMETER,
    Irritant::UNUSED_LAMBDA_PARAMETER,
]);

/// Irritants a token enables or suppresses. Unknown tokens yield `None`.
pub fn token_to_irritants(token: &str) -> Option<IrritantSet> {
    let single = |irritant: Irritant| Some(IrritantSet::EMPTY.with(irritant));
    match token {
        "all" => Some(ALL_IRRITANTS),
        "boxing" => single(Irritant::AUTO_BOXING),
        "cast" => single(Irritant::UNNECESSARY_TYPE_CHECK),
        "dep-ann" => single(Irritant::MISSING_DEPRECATED_ANNOTATION),
        "deprecation" => single(Irritant::USING_DEPRECATED_API),
        "exports" => single(Irritant::API_LEAK),
        "fallthrough" => single(Irritant::FALLTHROUGH_CASE),
        "finally" => single(Irritant::FINALLY_BLOCK_NOT_COMPLETING),
        "hiding" => Some(HIDING),
        "incomplete-switch" => Some(IrritantSet::of(&[
            Irritant::MISSING_ENUM_CONSTANT_CASE,
            Irritant::MISSING_DEFAULT_CASE,
        ])),
        "javadoc" => Some(JAVADOC),
        "module" => single(Irritant::UNSTABLE_AUTO_MODULE_NAME),
        "nls" => single(Irritant::NON_EXTERNALIZED_STRING),
        "null" => Some(NULL),
        "preview" => single(Irritant::PREVIEW_FEATURE_USED),
        "rawtypes" => single(Irritant::RAW_TYPE_REFERENCE),
        "removal" => single(Irritant::USING_TERMINALLY_DEPRECATED_API),
        "resource" => Some(RESOURCE),
        "restriction" => Some(IrritantSet::of(&[
            Irritant::FORBIDDEN_REFERENCE,
            Irritant::DISCOURAGED_REFERENCE,
        ])),
        "serial" => single(Irritant::MISSING_SERIAL_VERSION),
        "static-access" => Some(IrritantSet::of(&[
            Irritant::NON_STATIC_ACCESS_TO_STATIC,
            Irritant::INDIRECT_STATIC_ACCESS,
        ])),
        "static-method" => Some(IrritantSet::of(&[
            Irritant::METHOD_CAN_BE_STATIC,
            Irritant::METHOD_CAN_BE_POTENTIALLY_STATIC,
        ])),
        "super" => single(Irritant::OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION),
        "synthetic-access" => single(Irritant::ACCESS_EMULATION),
        "sync-override" => single(Irritant::MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD),
        "unchecked" => single(Irritant::UNCHECKED_TYPE_OPERATION),
        "unlikely-arg-type" => Some(IrritantSet::of(&[
            Irritant::UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE,
            Irritant::UNLIKELY_EQUALS_ARGUMENT_TYPE,
        ])),
        "unqualified-field-access" => single(Irritant::UNQUALIFIED_FIELD_ACCESS),
        "unused" => Some(UNUSED),
        _ => None,
    }
}

/// The token that names `irritant` in suppression annotations, if any.
pub const fn irritant_to_token(irritant: Irritant) -> Option<&'static str> {
    Some(match irritant {
        Irritant::AUTO_BOXING => "boxing",
        Irritant::UNNECESSARY_TYPE_CHECK => "cast",
        Irritant::MISSING_DEPRECATED_ANNOTATION => "dep-ann",
        Irritant::USING_DEPRECATED_API => "deprecation",
        Irritant::API_LEAK => "exports",
        Irritant::FALLTHROUGH_CASE => "fallthrough",
        Irritant::FINALLY_BLOCK_NOT_COMPLETING => "finally",
        Irritant::MASKED_CATCH_BLOCK
        | Irritant::LOCAL_VARIABLE_HIDING
        | Irritant::FIELD_HIDING
        | Irritant::TYPE_HIDING => "hiding",
        Irritant::MISSING_ENUM_CONSTANT_CASE | Irritant::MISSING_DEFAULT_CASE => {
            "incomplete-switch"
        }
        Irritant::MISSING_JAVADOC_COMMENTS
        | Irritant::MISSING_JAVADOC_TAGS
        | Irritant::INVALID_JAVADOC
        | Irritant::MISSING_JAVADOC_TAG_DESCRIPTION => "javadoc",
        Irritant::UNSTABLE_AUTO_MODULE_NAME => "module",
        Irritant::NON_EXTERNALIZED_STRING => "nls",
        Irritant::NULL_REFERENCE
        | Irritant::POTENTIAL_NULL_REFERENCE
        | Irritant::REDUNDANT_NULL_CHECK
        | Irritant::NULL_SPEC_VIOLATION
        | Irritant::NULL_ANNOTATION_INFERENCE_CONFLICT
        | Irritant::NULL_UNCHECKED_CONVERSION
        | Irritant::REDUNDANT_NULL_ANNOTATION
        | Irritant::MISSING_NON_NULL_BY_DEFAULT_ANNOTATION
        | Irritant::NONNULL_PARAMETER_ANNOTATION_DROPPED
        | Irritant::PESSIMISTIC_NULL_ANALYSIS_FOR_FREE_TYPE_VARIABLES
        | Irritant::NON_NULL_TYPE_VARIABLE_FROM_LEGACY_INVOCATION
        | Irritant::ANNOTATED_TYPE_ARGUMENT_TO_UNANNOTATED => "null",
        Irritant::RAW_TYPE_REFERENCE => "rawtypes",
        Irritant::USING_TERMINALLY_DEPRECATED_API => "removal",
        Irritant::UNCLOSED_CLOSEABLE
        | Irritant::POTENTIALLY_UNCLOSED_CLOSEABLE
        | Irritant::EXPLICITLY_CLOSED_AUTO_CLOSEABLE
        | Irritant::INCOMPATIBLE_OWNING_CONTRACT
        | Irritant::INSUFFICIENT_RESOURCE_MANAGEMENT => "resource",
        Irritant::FORBIDDEN_REFERENCE | Irritant::DISCOURAGED_REFERENCE => "restriction",
        Irritant::MISSING_SERIAL_VERSION => "serial",
        Irritant::NON_STATIC_ACCESS_TO_STATIC | Irritant::INDIRECT_STATIC_ACCESS => {
            "static-access"
        }
        Irritant::METHOD_CAN_BE_STATIC | Irritant::METHOD_CAN_BE_POTENTIALLY_STATIC => {
            "static-method"
        }
        Irritant::OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION => "super",
        Irritant::ACCESS_EMULATION => "synthetic-access",
        Irritant::MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD => "sync-override",
        Irritant::UNCHECKED_TYPE_OPERATION => "unchecked",
        Irritant::UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE
        | Irritant::UNLIKELY_EQUALS_ARGUMENT_TYPE => "unlikely-arg-type",
        Irritant::UNQUALIFIED_FIELD_ACCESS => "unqualified-field-access",
        Irritant::UNUSED_LOCAL_VARIABLE
        | Irritant::UNUSED_ARGUMENT
        | Irritant::UNUSED_IMPORT
        | Irritant::UNUSED_PRIVATE_MEMBER
        | Irritant::UNUSED_DECLARED_THROWN_EXCEPTION
        | Irritant::UNUSED_LABEL
        | Irritant::UNUSED_TYPE_ARGUMENTS
        | Irritant::REDUNDANT_SUPERINTERFACE
        | Irritant::DEAD_CODE
        | Irritant::UNUSED_OBJECT_ALLOCATION
        | Irritant::REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS
        | Irritant::UNUSED_TYPE_PARAMETER
        | Irritant::UNUSED_EXCEPTION_PARAMETER
        | Irritant::UNUSED_LAMBDA_PARAMETER => "unused",
        _ => return None,
    })
}

/// The irritant behind a token that names exactly one.
pub fn only_irritant_of(token: &str) -> Option<Irritant> {
    token_to_irritants(token)?.single()
}

pub fn is_special_token(token: &str) -> bool {
    SPECIAL_TOKENS.contains(&token)
}

pub fn is_warning_token(token: &str) -> bool {
    WARNING_TOKENS.binary_search(&token).is_ok()
}
