//! Severity options: the user-facing knobs that raise, lower or silence a
//! class of problems.
//!
//! Each option is bound to exactly one irritant. Problems that no option
//! governs are mandatory and always reported as errors.

pub mod expected;
pub mod severity;
mod tuning;

use std::fmt;

use serde::Serialize;

pub use severity::Severity;
pub use tuning::irritant_of;

use crate::{irritant::Irritant, problem::ProblemKind};

pub const OPTION_KEY_PREFIX: &str = "compiler.problem.";

macro_rules! define_options {
    (
        $(
            $(#[$meta:meta])*
            $name:ident / $konst:ident = ($group:literal, $bit:literal) => $key:literal, $default:ident;
        )*
    ) => {
        impl Irritant {
            $($(#[$meta])* pub const $konst: Irritant = Irritant::new($group, $bit);)*

            /// Every irritant an option is declared for.
            pub const DECLARED: &'static [Irritant] = &[$(Irritant::$konst,)*];
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(into = "&'static str")]
        pub enum SeverityOption {
            $($name,)*
        }

        impl SeverityOption {
            pub const ALL: &'static [SeverityOption] = &[$(SeverityOption::$name,)*];
            pub const COUNT: usize = SeverityOption::ALL.len();

            pub const fn key(self) -> &'static str {
                match self {
                    $(SeverityOption::$name => $key,)*
                }
            }

            pub const fn qualified_key(self) -> &'static str {
                match self {
                    $(SeverityOption::$name => concat!("compiler.problem.", $key),)*
                }
            }

            pub const fn irritant(self) -> Irritant {
                match self {
                    $(SeverityOption::$name => Irritant::$konst,)*
                }
            }

            pub const fn default_severity(self) -> Severity {
                match self {
                    $(SeverityOption::$name => Severity::$default,)*
                }
            }

            pub const fn variant_name(self) -> &'static str {
                match self {
                    $(SeverityOption::$name => stringify!($name),)*
                }
            }

            pub const fn from_irritant(irritant: Irritant) -> Option<SeverityOption> {
                match irritant {
                    $(Irritant::$konst => Some(SeverityOption::$name),)*
                    _ => None,
                }
            }

            /// Accepts both the bare and the `compiler.problem.` qualified key.
            pub fn from_key(key: &str) -> Option<SeverityOption> {
                let key = key.strip_prefix(OPTION_KEY_PREFIX).unwrap_or(key);
                match key {
                    $($key => Some(SeverityOption::$name),)*
                    _ => None,
                }
            }
        }
    };
}

define_options! {
    // Group 0
    MethodWithConstructorName / METHOD_WITH_CONSTRUCTOR_NAME = (0, 0) => "methodWithConstructorName", Warning;
    OverriddenPackageDefaultMethod / OVERRIDDEN_PACKAGE_DEFAULT_METHOD = (0, 1) => "overridingPackageDefaultMethod", Warning;
    UsingDeprecatedApi / USING_DEPRECATED_API = (0, 2) => "deprecation", Warning;
    MaskedCatchBlock / MASKED_CATCH_BLOCK = (0, 3) => "hiddenCatchBlock", Warning;
    UnusedLocalVariable / UNUSED_LOCAL_VARIABLE = (0, 4) => "unusedLocal", Warning;
    UnusedArgument / UNUSED_ARGUMENT = (0, 5) => "unusedParameter", Ignore;
    NoImplicitStringConversion / NO_IMPLICIT_STRING_CONVERSION = (0, 6) => "noImplicitStringConversion", Warning;
    AccessEmulation / ACCESS_EMULATION = (0, 7) => "syntheticAccessEmulation", Ignore;
    NonExternalizedString / NON_EXTERNALIZED_STRING = (0, 8) => "nonExternalizedStringLiteral", Ignore;
    AssertUsedAsAnIdentifier / ASSERT_USED_AS_AN_IDENTIFIER = (0, 9) => "assertIdentifier", Warning;
    UnusedImport / UNUSED_IMPORT = (0, 10) => "unusedImport", Warning;
    NonStaticAccessToStatic / NON_STATIC_ACCESS_TO_STATIC = (0, 11) => "staticAccessReceiver", Warning;
    NoEffectAssignment / NO_EFFECT_ASSIGNMENT = (0, 13) => "noEffectAssignment", Warning;
    IncompatibleNonInheritedInterfaceMethod / INCOMPATIBLE_NON_INHERITED_INTERFACE_METHOD = (0, 14) => "incompatibleNonInheritedInterfaceMethod", Warning;
    UnusedPrivateMember / UNUSED_PRIVATE_MEMBER = (0, 15) => "unusedPrivateMember", Warning;
    LocalVariableHiding / LOCAL_VARIABLE_HIDING = (0, 16) => "localVariableHiding", Ignore;
    FieldHiding / FIELD_HIDING = (0, 17) => "fieldHiding", Ignore;
    AccidentalBooleanAssign / ACCIDENTAL_BOOLEAN_ASSIGN = (0, 18) => "possibleAccidentalBooleanAssignment", Ignore;
    EmptyStatement / EMPTY_STATEMENT = (0, 19) => "emptyStatement", Ignore;
    MissingJavadocComments / MISSING_JAVADOC_COMMENTS = (0, 20) => "missingJavadocComments", Ignore;
    MissingJavadocTags / MISSING_JAVADOC_TAGS = (0, 21) => "missingJavadocTags", Ignore;
    UnqualifiedFieldAccess / UNQUALIFIED_FIELD_ACCESS = (0, 22) => "unqualifiedFieldAccess", Ignore;
    UnusedDeclaredThrownException / UNUSED_DECLARED_THROWN_EXCEPTION = (0, 23) => "unusedDeclaredThrownException", Ignore;
    FinallyBlockNotCompleting / FINALLY_BLOCK_NOT_COMPLETING = (0, 24) => "finallyBlockNotCompletingNormally", Warning;
    InvalidJavadoc / INVALID_JAVADOC = (0, 25) => "invalidJavadoc", Ignore;
    UnnecessaryTypeCheck / UNNECESSARY_TYPE_CHECK = (0, 26) => "unnecessaryTypeCheck", Ignore;
    UndocumentedEmptyBlock / UNDOCUMENTED_EMPTY_BLOCK = (0, 27) => "undocumentedEmptyBlock", Ignore;
    IndirectStaticAccess / INDIRECT_STATIC_ACCESS = (0, 28) => "indirectStaticAccess", Ignore;

    // Group 1
    UnnecessaryElse / UNNECESSARY_ELSE = (1, 0) => "unnecessaryElse", Ignore;
    UncheckedTypeOperation / UNCHECKED_TYPE_OPERATION = (1, 1) => "uncheckedTypeOperation", Warning;
    FinalParameterBound / FINAL_PARAMETER_BOUND = (1, 2) => "finalParameterBound", Warning;
    MissingSerialVersion / MISSING_SERIAL_VERSION = (1, 3) => "missingSerialVersion", Warning;
    EnumUsedAsAnIdentifier / ENUM_USED_AS_AN_IDENTIFIER = (1, 4) => "enumIdentifier", Warning;
    ForbiddenReference / FORBIDDEN_REFERENCE = (1, 5) => "forbiddenReference", Error;
    VarargsArgumentNeedCast / VARARGS_ARGUMENT_NEED_CAST = (1, 6) => "varargsArgumentNeedCast", Warning;
    NullReference / NULL_REFERENCE = (1, 7) => "nullReference", Warning;
    AutoBoxing / AUTO_BOXING = (1, 8) => "autoboxing", Ignore;
    AnnotationSuperInterface / ANNOTATION_SUPER_INTERFACE = (1, 9) => "annotationSuperInterface", Warning;
    TypeHiding / TYPE_HIDING = (1, 10) => "typeParameterHiding", Warning;
    MissingOverrideAnnotation / MISSING_OVERRIDE_ANNOTATION = (1, 11) => "missingOverrideAnnotation", Ignore;
    MissingEnumConstantCase / MISSING_ENUM_CONSTANT_CASE = (1, 12) => "incompleteEnumSwitch", Warning;
    MissingDeprecatedAnnotation / MISSING_DEPRECATED_ANNOTATION = (1, 13) => "missingDeprecatedAnnotation", Ignore;
    DiscouragedReference / DISCOURAGED_REFERENCE = (1, 14) => "discouragedReference", Warning;
    UnhandledWarningToken / UNHANDLED_WARNING_TOKEN = (1, 15) => "unhandledWarningToken", Warning;
    RawTypeReference / RAW_TYPE_REFERENCE = (1, 16) => "rawTypeReference", Warning;
    UnusedLabel / UNUSED_LABEL = (1, 17) => "unusedLabel", Warning;
    ParameterAssignment / PARAMETER_ASSIGNMENT = (1, 18) => "parameterAssignment", Ignore;
    FallthroughCase / FALLTHROUGH_CASE = (1, 19) => "fallthroughCase", Ignore;
    OverridingMethodWithoutSuperInvocation / OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION = (1, 20) => "overridingMethodWithoutSuperInvocation", Ignore;
    PotentialNullReference / POTENTIAL_NULL_REFERENCE = (1, 21) => "potentialNullReference", Ignore;
    RedundantNullCheck / REDUNDANT_NULL_CHECK = (1, 22) => "redundantNullCheck", Ignore;
    MissingJavadocTagDescription / MISSING_JAVADOC_TAG_DESCRIPTION = (1, 23) => "missingJavadocTagDescription", Ignore;
    UnusedTypeArguments / UNUSED_TYPE_ARGUMENTS = (1, 24) => "unusedTypeArgumentsForMethodInvocation", Warning;
    UnusedWarningToken / UNUSED_WARNING_TOKEN = (1, 25) => "unusedWarningToken", Warning;
    RedundantSuperinterface / REDUNDANT_SUPERINTERFACE = (1, 26) => "redundantSuperinterface", Ignore;
    ComparingIdentical / COMPARING_IDENTICAL = (1, 27) => "comparingIdentical", Warning;
    MissingSynchronizedModifierInInheritedMethod / MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD = (1, 28) => "missingSynchronizedOnInheritedMethod", Ignore;

    // Group 2
    ShouldImplementHashcode / SHOULD_IMPLEMENT_HASHCODE = (2, 0) => "missingHashCodeMethod", Ignore;
    DeadCode / DEAD_CODE = (2, 1) => "deadCode", Warning;
    Tasks / TASKS = (2, 2) => "tasks", Warning;
    UnusedObjectAllocation / UNUSED_OBJECT_ALLOCATION = (2, 3) => "unusedObjectAllocation", Ignore;
    MethodCanBeStatic / METHOD_CAN_BE_STATIC = (2, 4) => "reportMethodCanBeStatic", Ignore;
    MethodCanBePotentiallyStatic / METHOD_CAN_BE_POTENTIALLY_STATIC = (2, 5) => "reportMethodCanBePotentiallyStatic", Ignore;
    RedundantSpecificationOfTypeArguments / REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS = (2, 6) => "redundantSpecificationOfTypeArguments", Ignore;
    UnclosedCloseable / UNCLOSED_CLOSEABLE = (2, 7) => "unclosedCloseable", Warning;
    PotentiallyUnclosedCloseable / POTENTIALLY_UNCLOSED_CLOSEABLE = (2, 8) => "potentiallyUnclosedCloseable", Ignore;
    ExplicitlyClosedAutoCloseable / EXPLICITLY_CLOSED_AUTO_CLOSEABLE = (2, 9) => "explicitlyClosedAutoCloseable", Ignore;
    NullSpecViolation / NULL_SPEC_VIOLATION = (2, 10) => "nullSpecViolation", Error;
    NullAnnotationInferenceConflict / NULL_ANNOTATION_INFERENCE_CONFLICT = (2, 11) => "nullAnnotationInferenceConflict", Error;
    NullUncheckedConversion / NULL_UNCHECKED_CONVERSION = (2, 12) => "nullUncheckedConversion", Warning;
    RedundantNullAnnotation / REDUNDANT_NULL_ANNOTATION = (2, 13) => "redundantNullAnnotation", Warning;
    MissingNonNullByDefaultAnnotation / MISSING_NON_NULL_BY_DEFAULT_ANNOTATION = (2, 14) => "missingNonNullByDefaultAnnotation", Ignore;
    MissingDefaultCase / MISSING_DEFAULT_CASE = (2, 15) => "missingDefaultCase", Ignore;
    UnusedTypeParameter / UNUSED_TYPE_PARAMETER = (2, 16) => "unusedTypeParameter", Ignore;
    NonnullParameterAnnotationDropped / NONNULL_PARAMETER_ANNOTATION_DROPPED = (2, 17) => "nonnullParameterAnnotationDropped", Warning;
    UnusedExceptionParameter / UNUSED_EXCEPTION_PARAMETER = (2, 18) => "unusedExceptionParameter", Ignore;
    PessimisticNullAnalysisForFreeTypeVariables / PESSIMISTIC_NULL_ANALYSIS_FOR_FREE_TYPE_VARIABLES = (2, 19) => "pessimisticNullAnalysisForFreeTypeVariables", Warning;
    NonNullTypeVariableFromLegacyInvocation / NON_NULL_TYPE_VARIABLE_FROM_LEGACY_INVOCATION = (2, 20) => "nonnullTypeVariableFromLegacyInvocation", Warning;
    UnlikelyCollectionMethodArgumentType / UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE = (2, 21) => "unlikelyCollectionMethodArgumentType", Warning;
    UnlikelyEqualsArgumentType / UNLIKELY_EQUALS_ARGUMENT_TYPE = (2, 22) => "unlikelyEqualsArgumentType", Info;
    UsingTerminallyDeprecatedApi / USING_TERMINALLY_DEPRECATED_API = (2, 23) => "terminalDeprecation", Warning;
    ApiLeak / API_LEAK = (2, 24) => "APILeak", Warning;
    UnstableAutoModuleName / UNSTABLE_AUTO_MODULE_NAME = (2, 25) => "unstableAutoModuleName", Warning;
    PreviewFeatureUsed / PREVIEW_FEATURE_USED = (2, 26) => "reportPreviewFeatures", Warning;
    SuppressWarningsNotAnalysed / SUPPRESS_WARNINGS_NOT_ANALYSED = (2, 27) => "suppressWarningsNotFullyAnalysed", Info;
    AnnotatedTypeArgumentToUnannotated / ANNOTATED_TYPE_ARGUMENT_TO_UNANNOTATED = (2, 28) => "annotatedTypeArgumentToUnannotated", Info;

    // Group 3
    UnusedLambdaParameter / UNUSED_LAMBDA_PARAMETER = (3, 0) => "unusedLambdaParameter", Ignore;
    IncompatibleOwningContract / INCOMPATIBLE_OWNING_CONTRACT = (3, 1) => "incompatibleOwningContract", Warning;
    InsufficientResourceManagement / INSUFFICIENT_RESOURCE_MANAGEMENT = (3, 2) => "recommendedResourceManagement", Ignore;
}

impl From<SeverityOption> for &'static str {
    fn from(option: SeverityOption) -> Self {
        option.key()
    }
}

impl fmt::Display for SeverityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The option that governs `kind`, or `None` for a mandatory problem.
pub fn option_for(kind: ProblemKind) -> Option<SeverityOption> {
    irritant_of(kind).and_then(SeverityOption::from_irritant)
}

/// Severity a problem is reported at when the user configured nothing.
pub fn default_severity(kind: ProblemKind) -> Severity {
    option_for(kind).map_or(Severity::Error, SeverityOption::default_severity)
}

#[cfg(test)]
mod options_test;
