//! Which irritant governs each optional problem.

use crate::{irritant::Irritant, problem::ProblemKind};

/// The irritant governing `kind`; `None` for mandatory problems.
pub const fn irritant_of(kind: ProblemKind) -> Option<Irritant> {
    use ProblemKind as P;

    Some(match kind {
        P::MethodButWithConstructorName => Irritant::METHOD_WITH_CONSTRUCTOR_NAME,
        P::OverridingNonVisibleMethod => Irritant::OVERRIDDEN_PACKAGE_DEFAULT_METHOD,
        P::UsingDeprecatedType
        | P::UsingDeprecatedField
        | P::UsingDeprecatedMethod
        | P::UsingDeprecatedConstructor
        | P::OverridingDeprecatedMethod
        | P::UsingDeprecatedSinceVersionType
        | P::UsingDeprecatedSinceVersionMethod
        | P::UsingDeprecatedSinceVersionConstructor
        | P::UsingDeprecatedSinceVersionField
        | P::OverridingDeprecatedSinceVersionMethod
        | P::UsingDeprecatedModule
        | P::UsingDeprecatedSinceVersionModule => Irritant::USING_DEPRECATED_API,
        P::MaskedCatch => Irritant::MASKED_CATCH_BLOCK,
        P::LocalVariableIsNeverUsed => Irritant::UNUSED_LOCAL_VARIABLE,
        P::ArgumentIsNeverUsed => Irritant::UNUSED_ARGUMENT,
        P::NoImplicitStringConversionForCharArrayExpression => Irritant::NO_IMPLICIT_STRING_CONVERSION,
        P::NeedToEmulateFieldReadAccess
        | P::NeedToEmulateFieldWriteAccess
        | P::NeedToEmulateMethodAccess
        | P::NeedToEmulateConstructorAccess
        | P::SyntheticAccessorNotEnclosingMethod => Irritant::ACCESS_EMULATION,
        P::NonExternalizedStringLiteral
        | P::UnnecessaryNLSTag => Irritant::NON_EXTERNALIZED_STRING,
        P::UseAssertAsAnIdentifier => Irritant::ASSERT_USED_AS_AN_IDENTIFIER,
        P::UnusedImport => Irritant::UNUSED_IMPORT,
        P::NonStaticAccessToStaticField
        | P::NonStaticAccessToStaticMethod => Irritant::NON_STATIC_ACCESS_TO_STATIC,
        P::AssignmentHasNoEffect => Irritant::NO_EFFECT_ASSIGNMENT,
        P::IncompatibleReturnTypeForNonInheritedInterfaceMethod
        | P::IncompatibleExceptionInThrowsClauseForNonInheritedInterfaceMethod => Irritant::INCOMPATIBLE_NON_INHERITED_INTERFACE_METHOD,
        P::UnusedPrivateType
        | P::UnusedPrivateField
        | P::UnusedPrivateMethod
        | P::UnusedPrivateConstructor => Irritant::UNUSED_PRIVATE_MEMBER,
        P::LocalVariableHidingLocalVariable
        | P::LocalVariableHidingField
        | P::ArgumentHidingLocalVariable
        | P::ArgumentHidingField => Irritant::LOCAL_VARIABLE_HIDING,
        P::FieldHidingLocalVariable
        | P::FieldHidingField => Irritant::FIELD_HIDING,
        P::PossibleAccidentalBooleanAssignment => Irritant::ACCIDENTAL_BOOLEAN_ASSIGN,
        P::SuperfluousSemicolon
        | P::EmptyControlFlowStatement => Irritant::EMPTY_STATEMENT,
        P::JavadocMissing => Irritant::MISSING_JAVADOC_COMMENTS,
        P::JavadocMissingParamTag
        | P::JavadocMissingReturnTag
        | P::JavadocMissingThrowsTag
        | P::JavadocMissingUsesTag
        | P::JavadocMissingProvidesTag => Irritant::MISSING_JAVADOC_TAGS,
        P::UnqualifiedFieldAccess => Irritant::UNQUALIFIED_FIELD_ACCESS,
        P::UnusedMethodDeclaredThrownException
        | P::UnusedConstructorDeclaredThrownException => Irritant::UNUSED_DECLARED_THROWN_EXCEPTION,
        P::FinallyMustCompleteNormally => Irritant::FINALLY_BLOCK_NOT_COMPLETING,
        P::JavadocInvalidSeeUrlReference
        | P::JavadocMissingTagDescription
        | P::JavadocDuplicateTag
        | P::JavadocHiddenReference
        | P::JavadocInvalidMemberTypeQualification
        | P::JavadocMissingIdentifier
        | P::JavadocNonStaticTypeFromStaticInvocation
        | P::JavadocInvalidParamTagTypeParameter
        | P::JavadocUnexpectedTag
        | P::JavadocMissingParamName
        | P::JavadocDuplicateParamName
        | P::JavadocInvalidParamName
        | P::JavadocDuplicateReturnTag
        | P::JavadocMissingThrowsClassName
        | P::JavadocInvalidThrowsClass
        | P::JavadocDuplicateThrowsClassName
        | P::JavadocInvalidThrowsClassName
        | P::JavadocMissingSeeReference
        | P::JavadocInvalidSeeReference
        | P::JavadocInvalidSeeHref
        | P::JavadocInvalidSeeArgs
        | P::JavadocInvalidTag
        | P::JavadocUndefinedField
        | P::JavadocNotVisibleField
        | P::JavadocAmbiguousField
        | P::JavadocUsingDeprecatedField
        | P::JavadocUndefinedConstructor
        | P::JavadocNotVisibleConstructor
        | P::JavadocAmbiguousConstructor
        | P::JavadocUsingDeprecatedConstructor
        | P::JavadocUndefinedMethod
        | P::JavadocNotVisibleMethod
        | P::JavadocAmbiguousMethod
        | P::JavadocUsingDeprecatedMethod
        | P::JavadocNoMessageSendOnBaseType
        | P::JavadocParameterMismatch
        | P::JavadocNoMessageSendOnArrayType
        | P::JavadocUndefinedType
        | P::JavadocNotVisibleType
        | P::JavadocAmbiguousType
        | P::JavadocUsingDeprecatedType
        | P::JavadocInternalTypeNameProvided
        | P::JavadocInheritedMethodHidesEnclosingName
        | P::JavadocInheritedFieldHidesEnclosingName
        | P::JavadocInheritedNameHidesEnclosingTypeName
        | P::JavadocAmbiguousMethodReference
        | P::JavadocUnterminatedInlineTag
        | P::JavadocMalformedSeeReference
        | P::JavadocMissingHashCharacter
        | P::JavadocEmptyReturnTag
        | P::JavadocInvalidValueReference
        | P::JavadocUnexpectedText
        | P::JavadocInvalidParamTagName
        | P::JavadocDuplicateUsesTag
        | P::JavadocMissingUsesClassName
        | P::JavadocInvalidUsesClassName
        | P::JavadocInvalidUsesClass
        | P::JavadocDuplicateProvidesTag
        | P::JavadocMissingProvidesClassName
        | P::JavadocInvalidProvidesClassName
        | P::JavadocInvalidProvidesClass
        | P::JavadocInvalidModuleQualification
        | P::JavadocInvalidSnippet
        | P::JavadocInvalidSnippetMissingColon
        | P::JavadocInvalidSnippetContentNewLine
        | P::JavadocInvalidSnippetRegionNotClosed
        | P::JavadocInvalidSnippetRegexSubstringTogether
        | P::JavadocInvalidSnippetDuplicateRegions
        | P::JavadocGenericMethodTypeArgumentMismatch
        | P::JavadocNonGenericMethod
        | P::JavadocIncorrectArityForParameterizedMethod
        | P::JavadocParameterizedMethodArgumentTypeMismatch
        | P::JavadocTypeArgumentsForRawGenericMethod
        | P::JavadocGenericConstructorTypeArgumentMismatch
        | P::JavadocNonGenericConstructor
        | P::JavadocIncorrectArityForParameterizedConstructor
        | P::JavadocParameterizedConstructorArgumentTypeMismatch
        | P::JavadocTypeArgumentsForRawGenericConstructor
        | P::JavadocNotAccessibleType => Irritant::INVALID_JAVADOC,
        P::UnnecessaryCast
        | P::UnnecessaryInstanceof => Irritant::UNNECESSARY_TYPE_CHECK,
        P::UndocumentedEmptyBlock => Irritant::UNDOCUMENTED_EMPTY_BLOCK,
        P::IndirectAccessToStaticType
        | P::IndirectAccessToStaticField
        | P::IndirectAccessToStaticMethod => Irritant::INDIRECT_STATIC_ACCESS,
        P::UnnecessaryElse => Irritant::UNNECESSARY_ELSE,
        P::UnsafeRawConstructorInvocation
        | P::UnsafeRawMethodInvocation
        | P::UnsafeTypeConversion
        | P::UnsafeRawFieldAssignment
        | P::UnsafeGenericCast
        | P::UnsafeReturnTypeOverride
        | P::UnsafeRawGenericConstructorInvocation
        | P::UnsafeRawGenericMethodInvocation
        | P::UnsafeGenericArrayForVarargs
        | P::UnsafeElementTypeConversion
        | P::PotentialHeapPollutionFromVararg => Irritant::UNCHECKED_TYPE_OPERATION,
        P::FinalBoundForTypeVariable => Irritant::FINAL_PARAMETER_BOUND,
        P::MissingSerialVersion => Irritant::MISSING_SERIAL_VERSION,
        P::UseEnumAsAnIdentifier => Irritant::ENUM_USED_AS_AN_IDENTIFIER,
        P::ForbiddenReference => Irritant::FORBIDDEN_REFERENCE,
        P::MethodVarargsArgumentNeedCast
        | P::ConstructorVarargsArgumentNeedCast => Irritant::VARARGS_ARGUMENT_NEED_CAST,
        P::NullLocalVariableReference
        | P::NullUnboxing
        | P::NullExpressionReference => Irritant::NULL_REFERENCE,
        P::BoxingConversion
        | P::UnboxingConversion => Irritant::AUTO_BOXING,
        P::AnnotationTypeUsedAsSuperInterface => Irritant::ANNOTATION_SUPER_INTERFACE,
        P::TypeHidingType
        | P::TypeParameterHidingType
        | P::TypeHidingTypeParameterFromType
        | P::TypeHidingTypeParameterFromMethod => Irritant::TYPE_HIDING,
        P::MissingOverrideAnnotation
        | P::MissingOverrideAnnotationForInterfaceMethodImplementation => Irritant::MISSING_OVERRIDE_ANNOTATION,
        P::MissingEnumConstantCase
        | P::MissingEnumConstantCaseDespiteDefault => Irritant::MISSING_ENUM_CONSTANT_CASE,
        P::FieldMissingDeprecatedAnnotation
        | P::MethodMissingDeprecatedAnnotation
        | P::TypeMissingDeprecatedAnnotation => Irritant::MISSING_DEPRECATED_ANNOTATION,
        P::DiscouragedReference => Irritant::DISCOURAGED_REFERENCE,
        P::UnhandledWarningToken => Irritant::UNHANDLED_WARNING_TOKEN,
        P::RawTypeReference => Irritant::RAW_TYPE_REFERENCE,
        P::UnusedLabel => Irritant::UNUSED_LABEL,
        P::ParameterAssignment => Irritant::PARAMETER_ASSIGNMENT,
        P::FallthroughCase => Irritant::FALLTHROUGH_CASE,
        P::OverridingMethodWithoutSuperInvocation => Irritant::OVERRIDING_METHOD_WITHOUT_SUPER_INVOCATION,
        P::PotentialNullLocalVariableReference
        | P::PotentialNullUnboxing
        | P::PotentialNullExpressionReference
        | P::PotentialNullMessageSendReference
        | P::NullableFieldReference
        | P::ArrayReferencePotentialNullReference
        | P::DereferencingNullableExpression => Irritant::POTENTIAL_NULL_REFERENCE,
        P::RedundantNullCheckOnNullLocalVariable
        | P::NullLocalVariableComparisonYieldsFalse
        | P::RedundantLocalVariableNullAssignment
        | P::NullLocalVariableInstanceofYieldsFalse
        | P::RedundantNullCheckOnNonNullLocalVariable
        | P::NonNullLocalVariableComparisonYieldsFalse
        | P::NonNullExpressionComparisonYieldsFalse
        | P::RedundantNullCheckOnNonNullExpression
        | P::RedundantNullCheckOnNonNullMessageSend
        | P::RedundantNullCheckOnSpecdNonNullLocalVariable
        | P::SpecdNonNullLocalVariableComparisonYieldsFalse
        | P::NonNullMessageSendComparisonYieldsFalse
        | P::RedundantNullCheckOnNonNullSpecdField
        | P::NonNullSpecdFieldComparisonYieldsFalse
        | P::RedundantNullCheckOnField
        | P::FieldComparisonYieldsFalse
        | P::RedundantNullCheckOnConstNonNullField
        | P::ConstNonNullFieldComparisonYieldsFalse
        | P::RedundantNullCheckAgainstNonNullType
        | P::UnnecessaryNullCaseInSwitchOverNonNull => Irritant::REDUNDANT_NULL_CHECK,
        P::UnusedTypeArgumentsForMethodInvocation
        | P::UnusedTypeArgumentsForConstructorInvocation => Irritant::UNUSED_TYPE_ARGUMENTS,
        P::UnusedWarningToken => Irritant::UNUSED_WARNING_TOKEN,
        P::RedundantSuperinterface
        | P::SuperclassNotVisible => Irritant::REDUNDANT_SUPERINTERFACE,
        P::ComparingIdentical => Irritant::COMPARING_IDENTICAL,
        P::MissingSynchronizedModifierInInheritedMethod => Irritant::MISSING_SYNCHRONIZED_MODIFIER_IN_INHERITED_METHOD,
        P::ShouldImplementHashcode
        | P::SuperclassAmbiguous => Irritant::SHOULD_IMPLEMENT_HASHCODE,
        P::DeadCode => Irritant::DEAD_CODE,
        P::UnusedObjectAllocation => Irritant::UNUSED_OBJECT_ALLOCATION,
        P::MethodCanBeStatic => Irritant::METHOD_CAN_BE_STATIC,
        P::MethodCanBePotentiallyStatic => Irritant::METHOD_CAN_BE_POTENTIALLY_STATIC,
        P::RedundantSpecificationOfTypeArguments => Irritant::REDUNDANT_SPECIFICATION_OF_TYPE_ARGUMENTS,
        P::UnclosedCloseable
        | P::UnclosedCloseableAtExit
        | P::MandatoryCloseNotShown
        | P::MandatoryCloseNotShownAtExit => Irritant::UNCLOSED_CLOSEABLE,
        P::PotentiallyUnclosedCloseable
        | P::PotentiallyUnclosedCloseableAtExit => Irritant::POTENTIALLY_UNCLOSED_CLOSEABLE,
        P::ExplicitlyClosedAutoCloseable => Irritant::EXPLICITLY_CLOSED_AUTO_CLOSEABLE,
        P::RequiredNonNullButProvidedNull
        | P::IllegalReturnNullityRedefinition
        | P::IllegalRedefinitionToNonNullParameter
        | P::IllegalDefinitionToNonNullParameter
        | P::ParameterLackingNullableAnnotation
        | P::CannotImplementIncompatibleNullness
        | P::ContradictoryNullAnnotations
        | P::RequiredNonNullButProvidedSpecdNullable
        | P::ConflictingNullAnnotations
        | P::ConflictingInheritedNullAnnotations
        | P::NullityMismatchingTypeAnnotation
        | P::NullityMismatchingTypeAnnotationSuperHint
        | P::ReferenceExpressionParameterNullityMismatch
        | P::ReferenceExpressionReturnNullRedef
        | P::NullityMismatchTypeArgument
        | P::ContradictoryNullAnnotationsOnBound
        | P::ContradictoryNullAnnotationsInferred
        | P::ContradictoryNullAnnotationsInferredFunctionType
        | P::IllegalReturnNullityRedefinitionFreeTypeVariable
        | P::IllegalRedefinitionOfTypeVariable => Irritant::NULL_SPEC_VIOLATION,
        P::RequiredNonNullButProvidedPotentialNull => Irritant::NULL_ANNOTATION_INFERENCE_CONFLICT,
        P::RequiredNonNullButProvidedUnknown
        | P::NullityUncheckedTypeAnnotationDetail
        | P::NullityUncheckedTypeAnnotationDetailSuperHint
        | P::ReferenceExpressionParameterNullityUnchecked
        | P::ReferenceExpressionReturnNullRedefUnchecked
        | P::UnsafeNullnessCast
        | P::NullityUncheckedTypeAnnotation => Irritant::NULL_UNCHECKED_CONVERSION,
        P::RedundantNullAnnotation
        | P::RedundantNullDefaultAnnotation
        | P::RedundantNullDefaultAnnotationPackage
        | P::RedundantNullDefaultAnnotationType
        | P::RedundantNullDefaultAnnotationMethod
        | P::RedundantNullDefaultAnnotationModule
        | P::RedundantNullDefaultAnnotationLocal
        | P::RedundantNullDefaultAnnotationField => Irritant::REDUNDANT_NULL_ANNOTATION,
        P::MissingNonNullByDefaultAnnotationOnPackage
        | P::MissingNonNullByDefaultAnnotationOnType => Irritant::MISSING_NON_NULL_BY_DEFAULT_ANNOTATION,
        P::MissingEnumDefaultCase
        | P::MissingDefaultCase => Irritant::MISSING_DEFAULT_CASE,
        P::UnusedTypeParameter => Irritant::UNUSED_TYPE_PARAMETER,
        P::ParameterLackingNonNullAnnotation
        | P::InheritedParameterLackingNonNullAnnotation => Irritant::NONNULL_PARAMETER_ANNOTATION_DROPPED,
        P::ExceptionParameterIsNeverUsed => Irritant::UNUSED_EXCEPTION_PARAMETER,
        P::NullNotCompatibleToFreeTypeVariable
        | P::NullityMismatchAgainstFreeTypeVariable
        | P::UncheckedAccessOfValueOfFreeTypeVariable
        | P::RequiredNonNullButProvidedFreeTypeVariable => Irritant::PESSIMISTIC_NULL_ANALYSIS_FOR_FREE_TYPE_VARIABLES,
        P::NonNullTypeVariableFromLegacyMethod
        | P::NonNullMethodTypeVariableFromLegacyMethod => Irritant::NON_NULL_TYPE_VARIABLE_FROM_LEGACY_INVOCATION,
        P::UnlikelyCollectionMethodArgumentType => Irritant::UNLIKELY_COLLECTION_METHOD_ARGUMENT_TYPE,
        P::UnlikelyEqualsArgumentType => Irritant::UNLIKELY_EQUALS_ARGUMENT_TYPE,
        P::UsingTerminallyDeprecatedType
        | P::UsingTerminallyDeprecatedMethod
        | P::UsingTerminallyDeprecatedConstructor
        | P::UsingTerminallyDeprecatedField
        | P::OverridingTerminallyDeprecatedMethod
        | P::UsingTerminallyDeprecatedSinceVersionType
        | P::UsingTerminallyDeprecatedSinceVersionMethod
        | P::UsingTerminallyDeprecatedSinceVersionConstructor
        | P::UsingTerminallyDeprecatedSinceVersionField
        | P::OverridingTerminallyDeprecatedSinceVersionMethod
        | P::UsingTerminallyDeprecatedModule
        | P::UsingTerminallyDeprecatedSinceVersionModule => Irritant::USING_TERMINALLY_DEPRECATED_API,
        P::NonPublicTypeInAPI
        | P::NotExportedTypeInAPI
        | P::MissingRequiresTransitiveForTypeInAPI => Irritant::API_LEAK,
        P::UnstableAutoModuleName => Irritant::UNSTABLE_AUTO_MODULE_NAME,
        P::ProblemNotAnalysed => Irritant::SUPPRESS_WARNINGS_NOT_ANALYSED,
        P::AnnotatedTypeArgumentToUnannotated
        | P::AnnotatedTypeArgumentToUnannotatedSuperHint => Irritant::ANNOTATED_TYPE_ARGUMENT_TO_UNANNOTATED,
        P::OverrideReducingParamterOwning
        | P::OverrideAddingReturnOwning => Irritant::INCOMPATIBLE_OWNING_CONTRACT,
        P::NotOwningResourceField
        | P::OwningFieldInNonResourceClass
        | P::OwningFieldShouldImplementClose
        | P::StaticResourceField => Irritant::INSUFFICIENT_RESOURCE_MANAGEMENT,
        _ => return None,
    })
}
