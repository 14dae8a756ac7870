//! Checked-in severity option of every categorized problem, sorted by name.
//!
//! `Skip` rows mark mandatory problems. `problem-registry regen options`
//! prints a replacement for the table below.

use super::SeverityOption as O;
use crate::problem::ProblemKind as P;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionExpectation {
    Configurable(O),
    Skip,
}

use OptionExpectation::{Configurable, Skip};

pub const OPTION_TABLE: &[(P, OptionExpectation)] = &[
    (P::AbstractMethodCannotBeOverridden, Skip),
    (P::AbstractMethodInAbstractClass, Skip),
    (P::AbstractMethodInEnum, Skip),
    (P::AbstractMethodMustBeImplemented, Skip),
    (P::AbstractMethodMustBeImplementedOverConcreteMethod, Skip),
    (P::AbstractMethodsInConcreteClass, Skip),
    (P::AbstractServiceImplementation, Skip),
    (P::AmbiguousConstructor, Skip),
    (P::AmbiguousConstructorInDefaultConstructor, Skip),
    (P::AmbiguousConstructorInImplicitConstructorCall, Skip),
    (P::AmbiguousField, Skip),
    (P::AmbiguousMethod, Skip),
    (P::AmbiguousType, Skip),
    (P::AnnotatedTypeArgumentToUnannotated, Configurable(O::AnnotatedTypeArgumentToUnannotated)),
    (P::AnnotatedTypeArgumentToUnannotatedSuperHint, Configurable(O::AnnotatedTypeArgumentToUnannotated)),
    (P::AnnotationCannotOverrideMethod, Skip),
    (P::AnnotationCircularity, Skip),
    (P::AnnotationCircularitySelfReference, Skip),
    (P::AnnotationFieldNeedConstantInitialization, Skip),
    (P::AnnotationMembersCannotHaveParameters, Skip),
    (P::AnnotationMembersCannotHaveTypeParameters, Skip),
    (P::AnnotationTypeDeclarationCannotHaveConstructor, Skip),
    (P::AnnotationTypeDeclarationCannotHaveSuperclass, Skip),
    (P::AnnotationTypeDeclarationCannotHaveSuperinterfaces, Skip),
    (P::AnnotationTypeUsedAsSuperInterface, Configurable(O::AnnotationSuperInterface)),
    (P::AnnotationValueMustBeAnEnumConstant, Skip),
    (P::AnnotationValueMustBeAnnotation, Skip),
    (P::AnnotationValueMustBeArrayInitializer, Skip),
    (P::AnnotationValueMustBeClassLiteral, Skip),
    (P::AnnotationValueMustBeConstant, Skip),
    (P::AnonymousClassCannotExtendFinalClass, Skip),
    (P::ApplicableMethodOverriddenByInapplicable, Skip),
    (P::ArgumentHidingField, Configurable(O::LocalVariableHiding)),
    (P::ArgumentHidingLocalVariable, Configurable(O::LocalVariableHiding)),
    (P::ArgumentIsNeverUsed, Configurable(O::UnusedArgument)),
    (P::ArgumentTypeAmbiguous, Skip),
    (P::ArgumentTypeCannotBeVoid, Skip),
    (P::ArgumentTypeCannotBeVoidArray, Skip),
    (P::ArgumentTypeInheritedNameHidesEnclosingName, Skip),
    (P::ArgumentTypeInternalNameProvided, Skip),
    (P::ArgumentTypeNotFound, Skip),
    (P::ArgumentTypeNotVisible, Skip),
    (P::ArrayConstantsOnlyInArrayInitializers, Skip),
    (P::ArrayReferencePotentialNullReference, Configurable(O::PotentialNullReference)),
    (P::ArrayReferenceRequired, Skip),
    (P::ArrowInCaseStatementsNotSupported, Skip),
    (P::AssignmentHasNoEffect, Configurable(O::NoEffectAssignment)),
    (P::AssignmentToMultiCatchParameter, Skip),
    (P::AssignmentToResource, Skip),
    (P::AutoManagedResourceNotBelow17, Skip),
    (P::AutoManagedVariableResourceNotBelow9, Skip),
    (P::BinaryLiteralNotBelow17, Skip),
    (P::BodyForAbstractMethod, Skip),
    (P::BodyForNativeMethod, Skip),
    (P::BoundCannotBeArray, Skip),
    (P::BoundHasConflictingArguments, Skip),
    (P::BoundMustBeAnInterface, Skip),
    (P::BoxingConversion, Configurable(O::AutoBoxing)),
    (P::BytecodeExceeds64KLimit, Skip),
    (P::BytecodeExceeds64KLimitForClinit, Skip),
    (P::BytecodeExceeds64KLimitForConstructor, Skip),
    (P::BytecodeExceeds64KLimitForSwitchTable, Skip),
    (P::CannotAllocateVoidArray, Skip),
    (P::CannotDeclareEnumSpecialMethod, Skip),
    (P::CannotDefineAnnotationInLocalType, Skip),
    (P::CannotDefineDimensionExpressionsWithInit, Skip),
    (P::CannotDefineEnumInLocalType, Skip),
    (P::CannotDefineInterfaceInLocalType, Skip),
    (P::CannotDefineStaticInitializerInLocalType, Skip),
    (P::CannotExtendEnum, Skip),
    (P::CannotHideAnInstanceMethodWithAStaticMethod, Skip),
    (P::CannotImplementIncompatibleNullness, Configurable(O::NullSpecViolation)),
    (P::CannotImportPackage, Skip),
    (P::CannotInferElidedTypes, Skip),
    (P::CannotInferInvocationType, Skip),
    (P::CannotInferRecordPatternTypes, Skip),
    (P::CannotInvokeSuperConstructorInEnum, Skip),
    (P::CannotOverrideAStaticMethodWithAnInstanceMethod, Skip),
    (P::CannotReadSource, Skip),
    (P::CannotReturnInInitializer, Skip),
    (P::CannotThrowNull, Skip),
    (P::CannotThrowType, Skip),
    (P::CannotUseDiamondWithAnonymousClasses, Skip),
    (P::CannotUseDiamondWithExplicitTypeArguments, Skip),
    (P::CannotUseSuperInCodeSnippet, Skip),
    (P::ClassExtendFinalClass, Skip),
    (P::ClassExtendFinalRecord, Skip),
    (P::CodeCannotBeReached, Skip),
    (P::CodeSnippetMissingClass, Skip),
    (P::CodeSnippetMissingMethod, Skip),
    (P::ComparingIdentical, Configurable(O::ComparingIdentical)),
    (P::ConflictingImport, Skip),
    (P::ConflictingInheritedNullAnnotations, Configurable(O::NullSpecViolation)),
    (P::ConflictingNullAnnotations, Configurable(O::NullSpecViolation)),
    (P::ConflictingPackageFromModules, Skip),
    (P::ConflictingPackageFromOtherModules, Skip),
    (P::ConflictingPackageInModules, Skip),
    (P::ConstNonNullFieldComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::ConstantWithPatternIncompatible, Skip),
    (P::ConstructedArrayIncompatible, Skip),
    (P::ConstructionTypeMismatch, Skip),
    (P::ConstructorReferenceNotBelow18, Skip),
    (P::ConstructorVarargsArgumentNeedCast, Configurable(O::VarargsArgumentNeedCast)),
    (P::ContainerAnnotationTypeHasNonDefaultMembers, Skip),
    (P::ContainerAnnotationTypeHasShorterRetention, Skip),
    (P::ContainerAnnotationTypeHasWrongValueType, Skip),
    (P::ContainerAnnotationTypeMustHaveValue, Skip),
    (P::ContradictoryNullAnnotations, Configurable(O::NullSpecViolation)),
    (P::ContradictoryNullAnnotationsInferred, Configurable(O::NullSpecViolation)),
    (P::ContradictoryNullAnnotationsInferredFunctionType, Configurable(O::NullSpecViolation)),
    (P::ContradictoryNullAnnotationsOnBound, Configurable(O::NullSpecViolation)),
    (P::CorruptedSignature, Skip),
    (P::CyclicModuleDependency, Skip),
    (P::DanglingReference, Skip),
    (P::DeadCode, Configurable(O::DeadCode)),
    (P::DefaultMethodNotBelow18, Skip),
    (P::DefaultMethodOverridesObjectMethod, Skip),
    (P::DereferencingNullableExpression, Configurable(O::PotentialNullReference)),
    (P::DiamondNotBelow17, Skip),
    (P::DimensionsIllegalOnRecordPattern, Skip),
    (P::DirectInvocationOfAbstractMethod, Skip),
    (P::DisallowedExplicitThisParameter, Skip),
    (P::DisallowedStatementInPrologue, Skip),
    (P::DisallowedTargetForAnnotation, Skip),
    (P::DisallowedTargetForContainerAnnotationType, Skip),
    (P::DiscouragedReference, Configurable(O::DiscouragedReference)),
    (P::DiscouragedValueBasedTypeSynchronization, Skip),
    (P::DuplicateAnnotation, Skip),
    (P::DuplicateAnnotationMember, Skip),
    (P::DuplicateAnnotationNotMarkedRepeatable, Skip),
    (P::DuplicateBlankFinalFieldInitialization, Skip),
    (P::DuplicateBoundInIntersectionCast, Skip),
    (P::DuplicateBounds, Skip),
    (P::DuplicateCase, Skip),
    (P::DuplicateDefaultCase, Skip),
    (P::DuplicateExports, Skip),
    (P::DuplicateField, Skip),
    (P::DuplicateFinalLocalInitialization, Skip),
    (P::DuplicateImport, Skip),
    (P::DuplicateInheritedDefaultMethods, Skip),
    (P::DuplicateInheritedMethods, Skip),
    (P::DuplicateLabel, Skip),
    (P::DuplicateMethod, Skip),
    (P::DuplicateMethodErasure, Skip),
    (P::DuplicateModifierForArgument, Skip),
    (P::DuplicateModifierForField, Skip),
    (P::DuplicateModifierForMethod, Skip),
    (P::DuplicateModifierForType, Skip),
    (P::DuplicateModifierForVariable, Skip),
    (P::DuplicateModuleRef, Skip),
    (P::DuplicateNestedType, Skip),
    (P::DuplicateOpens, Skip),
    (P::DuplicateParameterizedMethods, Skip),
    (P::DuplicateRequires, Skip),
    (P::DuplicateResource, Skip),
    (P::DuplicateServices, Skip),
    (P::DuplicateSuperInterface, Skip),
    (P::DuplicateTargetInTargetAnnotation, Skip),
    (P::DuplicateTotalPattern, Skip),
    (P::DuplicateTypeVariable, Skip),
    (P::DuplicateTypes, Skip),
    (P::DuplicateUses, Skip),
    (P::EmptyControlFlowStatement, Configurable(O::EmptyStatement)),
    (P::EnclosingInstanceInConstructorCall, Skip),
    (P::EndOfSource, Skip),
    (P::EnhancedSwitchMissingDefault, Skip),
    (P::EnumAbstractMethodMustBeImplemented, Skip),
    (P::EnumConstantCannotDefineAbstractMethod, Skip),
    (P::EnumConstantMustImplementAbstractMethod, Skip),
    (P::EnumConstantsCannotBeSurroundedByParenthesis, Skip),
    (P::EnumStaticFieldInInInitializerContext, Skip),
    (P::EnumSwitchCannotTargetField, Skip),
    (P::ErrorUseOfUnderscoreAsAnIdentifier, Skip),
    (P::ExceptionParameterIsNeverUsed, Configurable(O::UnusedExceptionParameter)),
    (P::ExceptionTypeAmbiguous, Skip),
    (P::ExceptionTypeInheritedNameHidesEnclosingName, Skip),
    (P::ExceptionTypeInternalNameProvided, Skip),
    (P::ExceptionTypeNotFound, Skip),
    (P::ExceptionTypeNotVisible, Skip),
    (P::ExplicitAnnotationTargetRequired, Skip),
    (P::ExplicitThisParameterNotBelow18, Skip),
    (P::ExplicitThisParameterNotInLambda, Skip),
    (P::ExplicitlyClosedAutoCloseable, Configurable(O::ExplicitlyClosedAutoCloseable)),
    (P::ExportingForeignPackage, Skip),
    (P::ExpressionInPreConstructorContext, Skip),
    (P::ExpressionShouldBeAVariable, Skip),
    (P::ExternalProblemFixable, Skip),
    (P::ExternalProblemNotFixable, Skip),
    (P::FallthroughCase, Configurable(O::FallthroughCase)),
    (P::FalseConstantInGuard, Skip),
    (P::FeatureNotSupported, Skip),
    (P::FieldComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::FieldHidingField, Configurable(O::FieldHiding)),
    (P::FieldHidingLocalVariable, Configurable(O::FieldHiding)),
    (P::FieldMissingDeprecatedAnnotation, Configurable(O::MissingDeprecatedAnnotation)),
    (P::FieldMustBeFinal, Skip),
    (P::FieldTypeAmbiguous, Skip),
    (P::FieldTypeInheritedNameHidesEnclosingName, Skip),
    (P::FieldTypeInternalNameProvided, Skip),
    (P::FieldTypeNotFound, Skip),
    (P::FieldTypeNotVisible, Skip),
    (P::FinalBoundForTypeVariable, Configurable(O::FinalParameterBound)),
    (P::FinalFieldAssignment, Skip),
    (P::FinalMethodCannotBeOverridden, Skip),
    (P::FinalOuterLocalAssignment, Skip),
    (P::FinallyMustCompleteNormally, Configurable(O::FinallyBlockNotCompleting)),
    (P::ForbiddenReference, Configurable(O::ForbiddenReference)),
    (P::GenericConstructorTypeArgumentMismatch, Skip),
    (P::GenericInferenceError, Skip),
    (P::GenericMethodTypeArgumentMismatch, Skip),
    (P::GenericTypeCannotExtendThrowable, Skip),
    (P::HidingEnclosingType, Skip),
    (P::HierarchyCircularity, Skip),
    (P::HierarchyCircularitySelfReference, Skip),
    (P::HierarchyHasProblems, Skip),
    (P::IllegalAbstractModifierCombinationForMethod, Skip),
    (P::IllegalAccessFromTypeVariable, Skip),
    (P::IllegalAnnotationForBaseType, Skip),
    (P::IllegalArrayOfUnionType, Skip),
    (P::IllegalArrayTypeInIntersectionCast, Skip),
    (P::IllegalBasetypeInIntersectionCast, Skip),
    (P::IllegalCast, Skip),
    (P::IllegalClassLiteralForTypeVariable, Skip),
    (P::IllegalDeclarationOfThisParameter, Skip),
    (P::IllegalDefaultModifierSpecification, Skip),
    (P::IllegalDefinitionToNonNullParameter, Configurable(O::NullSpecViolation)),
    (P::IllegalDimension, Skip),
    (P::IllegalEnclosingInstanceSpecification, Skip),
    (P::IllegalExtendedDimensions, Skip),
    (P::IllegalExtendedDimensionsForVarArgs, Skip),
    (P::IllegalFallthroughFromAPattern, Skip),
    (P::IllegalFallthroughToPattern, Skip),
    (P::IllegalGenericArray, Skip),
    (P::IllegalHexaLiteral, Skip),
    (P::IllegalInstanceofParameterizedType, Skip),
    (P::IllegalInstanceofTypeParameter, Skip),
    (P::IllegalModifierCombinationFinalAbstractForClass, Skip),
    (P::IllegalModifierCombinationFinalVolatileForField, Skip),
    (P::IllegalModifierCombinationForInterfaceMethod, Skip),
    (P::IllegalModifierCombinationForPrivateInterfaceMethod9, Skip),
    (P::IllegalModifierForAnnotationField, Skip),
    (P::IllegalModifierForAnnotationMemberType, Skip),
    (P::IllegalModifierForAnnotationMethod, Skip),
    (P::IllegalModifierForAnnotationType, Skip),
    (P::IllegalModifierForArgument, Skip),
    (P::IllegalModifierForClass, Skip),
    (P::IllegalModifierForConstructor, Skip),
    (P::IllegalModifierForEnum, Skip),
    (P::IllegalModifierForEnumConstant, Skip),
    (P::IllegalModifierForEnumConstructor, Skip),
    (P::IllegalModifierForField, Skip),
    (P::IllegalModifierForInterface, Skip),
    (P::IllegalModifierForInterfaceField, Skip),
    (P::IllegalModifierForInterfaceMethod, Skip),
    (P::IllegalModifierForInterfaceMethod18, Skip),
    (P::IllegalModifierForInterfaceMethod9, Skip),
    (P::IllegalModifierForLocalClass, Skip),
    (P::IllegalModifierForLocalEnum, Skip),
    (P::IllegalModifierForLocalEnumDeclaration, Skip),
    (P::IllegalModifierForMemberClass, Skip),
    (P::IllegalModifierForMemberEnum, Skip),
    (P::IllegalModifierForMemberInterface, Skip),
    (P::IllegalModifierForMethod, Skip),
    (P::IllegalModifierForModule, Skip),
    (P::IllegalModifierForPatternVariable, Skip),
    (P::IllegalModifierForVariable, Skip),
    (P::IllegalModifiers, Skip),
    (P::IllegalModifiersForElidedType, Skip),
    (P::IllegalParameterNullityRedefinition, Skip),
    (P::IllegalPrimitiveOrArrayTypeForEnclosingInstance, Skip),
    (P::IllegalQualifiedEnumConstantLabel, Skip),
    (P::IllegalQualifiedParameterizedTypeAllocation, Skip),
    (P::IllegalQualifierForExplicitThis, Skip),
    (P::IllegalQualifierForExplicitThis2, Skip),
    (P::IllegalRecordPattern, Skip),
    (P::IllegalRedefinitionOfTypeVariable, Configurable(O::NullSpecViolation)),
    (P::IllegalRedefinitionToNonNullParameter, Configurable(O::NullSpecViolation)),
    (P::IllegalReturnNullityRedefinition, Configurable(O::NullSpecViolation)),
    (P::IllegalReturnNullityRedefinitionFreeTypeVariable, Configurable(O::NullSpecViolation)),
    (P::IllegalStaticModifierForMemberType, Skip),
    (P::IllegalStrictfpForAbstractInterfaceMethod, Skip),
    (P::IllegalTotalPatternWithDefault, Skip),
    (P::IllegalTypeAnnotationsInStaticMemberAccess, Skip),
    (P::IllegalTypeArgumentsInRawConstructorReference, Skip),
    (P::IllegalTypeForExplicitThis, Skip),
    (P::IllegalTypeVariableSuperReference, Skip),
    (P::IllegalUnderscorePosition, Skip),
    (P::IllegalUsageOfQualifiedTypeReference, Skip),
    (P::IllegalUsageOfTypeAnnotations, Skip),
    (P::IllegalUseOfUnderscoreAsAnIdentifier, Skip),
    (P::IllegalVararg, Skip),
    (P::IllegalVarargInLambda, Skip),
    (P::IllegalVisibilityModifierCombinationForField, Skip),
    (P::IllegalVisibilityModifierCombinationForMemberType, Skip),
    (P::IllegalVisibilityModifierCombinationForMethod, Skip),
    (P::IllegalVisibilityModifierForInterfaceMemberType, Skip),
    (P::ImplicitClassMissingMainMethod, Skip),
    (P::ImplicitObjectBoundNoNullDefault, Skip),
    (P::ImportAmbiguous, Skip),
    (P::ImportInheritedNameHidesEnclosingName, Skip),
    (P::ImportInternalNameProvided, Skip),
    (P::ImportNotFound, Skip),
    (P::ImportNotVisible, Skip),
    (P::IncompatibleExceptionInInheritedMethodThrowsClause, Skip),
    (P::IncompatibleExceptionInThrowsClause, Skip),
    (P::IncompatibleExceptionInThrowsClauseForNonInheritedInterfaceMethod, Configurable(O::IncompatibleNonInheritedInterfaceMethod)),
    (P::IncompatibleLambdaParameterType, Skip),
    (P::IncompatibleMethodReference, Skip),
    (P::IncompatibleReturnType, Skip),
    (P::IncompatibleReturnTypeForNonInheritedInterfaceMethod, Configurable(O::IncompatibleNonInheritedInterfaceMethod)),
    (P::IncompatibleTypesInConditionalOperator, Skip),
    (P::IncompatibleTypesInEqualityOperator, Skip),
    (P::IncompatibleTypesInForeach, Skip),
    (P::IncorrectArityForParameterizedConstructor, Skip),
    (P::IncorrectArityForParameterizedMethod, Skip),
    (P::IncorrectArityForParameterizedType, Skip),
    (P::IncorrectEnclosingInstanceReference, Skip),
    (P::IncorrectSwitchType, Skip),
    (P::IncorrectSwitchType17, Skip),
    (P::IndirectAccessToStaticField, Configurable(O::IndirectStaticAccess)),
    (P::IndirectAccessToStaticMethod, Configurable(O::IndirectStaticAccess)),
    (P::IndirectAccessToStaticType, Configurable(O::IndirectStaticAccess)),
    (P::InheritedDefaultMethodConflictsWithOtherInherited, Skip),
    (P::InheritedFieldHidesEnclosingName, Skip),
    (P::InheritedIncompatibleReturnType, Skip),
    (P::InheritedMethodHidesEnclosingName, Skip),
    (P::InheritedMethodReducesVisibility, Skip),
    (P::InheritedParameterLackingNonNullAnnotation, Configurable(O::NonnullParameterAnnotationDropped)),
    (P::InheritedTypeHidesEnclosingName, Skip),
    (P::InitializerMustCompleteNormally, Skip),
    (P::InstanceFieldDuringConstructorInvocation, Skip),
    (P::InstanceMethodDuringConstructorInvocation, Skip),
    (P::InterfaceAmbiguous, Skip),
    (P::InterfaceCannotHaveConstructors, Skip),
    (P::InterfaceCannotHaveInitializers, Skip),
    (P::InterfaceInheritedNameHidesEnclosingName, Skip),
    (P::InterfaceInternalNameProvided, Skip),
    (P::InterfaceNotFound, Skip),
    (P::InterfaceNotFunctionalInterface, Skip),
    (P::InterfaceNotVisible, Skip),
    (P::InterfaceStaticMethodInvocationNotBelow18, Skip),
    (P::InterfaceSuperInvocationNotBelow18, Skip),
    (P::InternalTypeNameProvided, Skip),
    (P::IntersectionCastNotBelow18, Skip),
    (P::InvalidAnnotationMemberType, Skip),
    (P::InvalidArrayConstructorReference, Skip),
    (P::InvalidBinary, Skip),
    (P::InvalidBreak, Skip),
    (P::InvalidCatchBlockSequence, Skip),
    (P::InvalidCharacterConstant, Skip),
    (P::InvalidClassInstantiation, Skip),
    (P::InvalidContinue, Skip),
    (P::InvalidDigit, Skip),
    (P::InvalidEncoding, Skip),
    (P::InvalidEscape, Skip),
    (P::InvalidExplicitConstructorCall, Skip),
    (P::InvalidExpressionAsStatement, Skip),
    (P::InvalidFileNameForPackageAnnotations, Skip),
    (P::InvalidFloat, Skip),
    (P::InvalidHexa, Skip),
    (P::InvalidHighSurrogate, Skip),
    (P::InvalidInput, Skip),
    (P::InvalidLowSurrogate, Skip),
    (P::InvalidNullToSynchronized, Skip),
    (P::InvalidOctal, Skip),
    (P::InvalidOpensStatement, Skip),
    (P::InvalidOperator, Skip),
    (P::InvalidParameterizedExceptionType, Skip),
    (P::InvalidParenthesizedExpression, Skip),
    (P::InvalidServiceImplType, Skip),
    (P::InvalidServiceIntfType, Skip),
    (P::InvalidTypeArguments, Skip),
    (P::InvalidTypeExpression, Skip),
    (P::InvalidTypeForCollection, Skip),
    (P::InvalidTypeForCollectionTarget14, Skip),
    (P::InvalidTypeForStaticImport, Skip),
    (P::InvalidTypeToSynchronized, Skip),
    (P::InvalidTypeVariableExceptionType, Skip),
    (P::InvalidUnaryExpression, Skip),
    (P::InvalidUnicodeEscape, Skip),
    (P::InvalidUnionTypeReferenceSequence, Skip),
    (P::InvalidUsageOfAnnotationDeclarations, Skip),
    (P::InvalidUsageOfAnnotations, Skip),
    (P::InvalidUsageOfEnumDeclarations, Skip),
    (P::InvalidUsageOfForeachStatements, Skip),
    (P::InvalidUsageOfStaticImports, Skip),
    (P::InvalidUsageOfTypeAnnotations, Skip),
    (P::InvalidUsageOfTypeArguments, Skip),
    (P::InvalidUsageOfTypeParameters, Skip),
    (P::InvalidUsageOfTypeParametersForAnnotationDeclaration, Skip),
    (P::InvalidUsageOfTypeParametersForEnumDeclaration, Skip),
    (P::InvalidUsageOfVarargs, Skip),
    (P::InvalidUsageOfWildcard, Skip),
    (P::InvalidVoidExpression, Skip),
    (P::IsClassPathCorrect, Skip),
    (P::IsClassPathCorrectWithReferencingType, Skip),
    (P::JavadocAmbiguousConstructor, Configurable(O::InvalidJavadoc)),
    (P::JavadocAmbiguousField, Configurable(O::InvalidJavadoc)),
    (P::JavadocAmbiguousMethod, Configurable(O::InvalidJavadoc)),
    (P::JavadocAmbiguousMethodReference, Configurable(O::InvalidJavadoc)),
    (P::JavadocAmbiguousType, Configurable(O::InvalidJavadoc)),
    (P::JavadocDuplicateParamName, Configurable(O::InvalidJavadoc)),
    (P::JavadocDuplicateProvidesTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocDuplicateReturnTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocDuplicateTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocDuplicateThrowsClassName, Configurable(O::InvalidJavadoc)),
    (P::JavadocDuplicateUsesTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocEmptyReturnTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocGenericConstructorTypeArgumentMismatch, Configurable(O::InvalidJavadoc)),
    (P::JavadocGenericMethodTypeArgumentMismatch, Configurable(O::InvalidJavadoc)),
    (P::JavadocHiddenReference, Configurable(O::InvalidJavadoc)),
    (P::JavadocIncorrectArityForParameterizedConstructor, Configurable(O::InvalidJavadoc)),
    (P::JavadocIncorrectArityForParameterizedMethod, Configurable(O::InvalidJavadoc)),
    (P::JavadocInheritedFieldHidesEnclosingName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInheritedMethodHidesEnclosingName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInheritedNameHidesEnclosingTypeName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInternalTypeNameProvided, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidMemberTypeQualification, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidModule, Skip),
    (P::JavadocInvalidModuleQualification, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidParamName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidParamTagName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidParamTagTypeParameter, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidProvidesClass, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidProvidesClassName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSeeArgs, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSeeHref, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSeeReference, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSeeUrlReference, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSnippet, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSnippetContentNewLine, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSnippetDuplicateRegions, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSnippetMissingColon, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSnippetRegexSubstringTogether, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidSnippetRegionNotClosed, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidThrowsClass, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidThrowsClassName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidUsesClass, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidUsesClassName, Configurable(O::InvalidJavadoc)),
    (P::JavadocInvalidValueReference, Configurable(O::InvalidJavadoc)),
    (P::JavadocMalformedSeeReference, Configurable(O::InvalidJavadoc)),
    (P::JavadocMessagePrefix, Skip),
    (P::JavadocMissing, Configurable(O::MissingJavadocComments)),
    (P::JavadocMissingHashCharacter, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingIdentifier, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingParamName, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingParamTag, Configurable(O::MissingJavadocTags)),
    (P::JavadocMissingProvidesClassName, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingProvidesTag, Configurable(O::MissingJavadocTags)),
    (P::JavadocMissingReturnTag, Configurable(O::MissingJavadocTags)),
    (P::JavadocMissingSeeReference, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingTagDescription, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingThrowsClassName, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingThrowsTag, Configurable(O::MissingJavadocTags)),
    (P::JavadocMissingUsesClassName, Configurable(O::InvalidJavadoc)),
    (P::JavadocMissingUsesTag, Configurable(O::MissingJavadocTags)),
    (P::JavadocNoMessageSendOnArrayType, Configurable(O::InvalidJavadoc)),
    (P::JavadocNoMessageSendOnBaseType, Configurable(O::InvalidJavadoc)),
    (P::JavadocNonGenericConstructor, Configurable(O::InvalidJavadoc)),
    (P::JavadocNonGenericMethod, Configurable(O::InvalidJavadoc)),
    (P::JavadocNonStaticTypeFromStaticInvocation, Configurable(O::InvalidJavadoc)),
    (P::JavadocNotAccessibleType, Configurable(O::InvalidJavadoc)),
    (P::JavadocNotVisibleConstructor, Configurable(O::InvalidJavadoc)),
    (P::JavadocNotVisibleField, Configurable(O::InvalidJavadoc)),
    (P::JavadocNotVisibleMethod, Configurable(O::InvalidJavadoc)),
    (P::JavadocNotVisibleType, Configurable(O::InvalidJavadoc)),
    (P::JavadocParameterMismatch, Configurable(O::InvalidJavadoc)),
    (P::JavadocParameterizedConstructorArgumentTypeMismatch, Configurable(O::InvalidJavadoc)),
    (P::JavadocParameterizedMethodArgumentTypeMismatch, Configurable(O::InvalidJavadoc)),
    (P::JavadocTypeArgumentsForRawGenericConstructor, Configurable(O::InvalidJavadoc)),
    (P::JavadocTypeArgumentsForRawGenericMethod, Configurable(O::InvalidJavadoc)),
    (P::JavadocUndefinedConstructor, Configurable(O::InvalidJavadoc)),
    (P::JavadocUndefinedField, Configurable(O::InvalidJavadoc)),
    (P::JavadocUndefinedMethod, Configurable(O::InvalidJavadoc)),
    (P::JavadocUndefinedType, Configurable(O::InvalidJavadoc)),
    (P::JavadocUnexpectedTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocUnexpectedText, Configurable(O::InvalidJavadoc)),
    (P::JavadocUnterminatedInlineTag, Configurable(O::InvalidJavadoc)),
    (P::JavadocUsingDeprecatedConstructor, Configurable(O::InvalidJavadoc)),
    (P::JavadocUsingDeprecatedField, Configurable(O::InvalidJavadoc)),
    (P::JavadocUsingDeprecatedMethod, Configurable(O::InvalidJavadoc)),
    (P::JavadocUsingDeprecatedType, Configurable(O::InvalidJavadoc)),
    (P::LambdaDescriptorMentionsUnmentionable, Skip),
    (P::LambdaExpressionNotBelow18, Skip),
    (P::LambdaRedeclaresArgument, Skip),
    (P::LambdaRedeclaresLocal, Skip),
    (P::LambdaShapeComputationError, Skip),
    (P::LocalReferencedInGuardMustBeEffectivelyFinal, Skip),
    (P::LocalStaticsIllegalVisibilityModifierForInterfaceLocalType, Skip),
    (P::LocalVariableCanOnlyBeNull, Skip),
    (P::LocalVariableCannotBeNull, Skip),
    (P::LocalVariableHidingField, Configurable(O::LocalVariableHiding)),
    (P::LocalVariableHidingLocalVariable, Configurable(O::LocalVariableHiding)),
    (P::LocalVariableIsNeverUsed, Configurable(O::UnusedLocalVariable)),
    (P::LocalVariableMayBeNull, Skip),
    (P::MandatoryCloseNotShown, Configurable(O::UnclosedCloseable)),
    (P::MandatoryCloseNotShownAtExit, Configurable(O::UnclosedCloseable)),
    (P::MaskedCatch, Configurable(O::MaskedCatchBlock)),
    (P::MethodButWithConstructorName, Configurable(O::MethodWithConstructorName)),
    (P::MethodCanBePotentiallyStatic, Configurable(O::MethodCanBePotentiallyStatic)),
    (P::MethodCanBeStatic, Configurable(O::MethodCanBeStatic)),
    (P::MethodMissingDeprecatedAnnotation, Configurable(O::MissingDeprecatedAnnotation)),
    (P::MethodMustOverride, Skip),
    (P::MethodMustOverrideOrImplement, Skip),
    (P::MethodNameClash, Skip),
    (P::MethodNameClashHidden, Skip),
    (P::MethodReducesVisibility, Skip),
    (P::MethodReferenceNotBelow18, Skip),
    (P::MethodReferenceSwingsBothWays, Skip),
    (P::MethodRequiresBody, Skip),
    (P::MethodReturnsVoid, Skip),
    (P::MethodVarargsArgumentNeedCast, Configurable(O::VarargsArgumentNeedCast)),
    (P::MisplacedTypeAnnotations, Skip),
    (P::MissingArgumentsForParameterizedMemberType, Skip),
    (P::MissingDefaultCase, Configurable(O::MissingDefaultCase)),
    (P::MissingEnclosingInstance, Skip),
    (P::MissingEnclosingInstanceForConstructorCall, Skip),
    (P::MissingEnumConstantCase, Configurable(O::MissingEnumConstantCase)),
    (P::MissingEnumConstantCaseDespiteDefault, Configurable(O::MissingEnumConstantCase)),
    (P::MissingEnumDefaultCase, Configurable(O::MissingDefaultCase)),
    (P::MissingNonNullByDefaultAnnotationOnPackage, Configurable(O::MissingNonNullByDefaultAnnotation)),
    (P::MissingNonNullByDefaultAnnotationOnType, Configurable(O::MissingNonNullByDefaultAnnotation)),
    (P::MissingNullAnnotationImplicitlyUsed, Skip),
    (P::MissingOverrideAnnotation, Configurable(O::MissingOverrideAnnotation)),
    (P::MissingOverrideAnnotationForInterfaceMethodImplementation, Configurable(O::MissingOverrideAnnotation)),
    (P::MissingRequiresTransitiveForTypeInAPI, Configurable(O::ApiLeak)),
    (P::MissingReturnType, Skip),
    (P::MissingSemiColon, Skip),
    (P::MissingSerialVersion, Configurable(O::MissingSerialVersion)),
    (P::MissingSynchronizedModifierInInheritedMethod, Configurable(O::MissingSynchronizedModifierInInheritedMethod)),
    (P::MissingTypeInConstructor, Skip),
    (P::MissingTypeInLambda, Skip),
    (P::MissingTypeInMethod, Skip),
    (P::MissingValueForAnnotationMember, Skip),
    (P::MissingValueFromLambda, Skip),
    (P::MultiCatchNotBelow17, Skip),
    (P::MultiConstantCaseLabelsNotSupported, Skip),
    (P::MultipleFunctionalInterfaces, Skip),
    (P::MustDefineEitherDimensionExpressionsOrInitializer, Skip),
    (P::MustSpecifyPackage, Skip),
    (P::NamedPatternVariablesDisallowedHere, Skip),
    (P::NativeMethodsCannotBeStrictfp, Skip),
    (P::NeedToEmulateConstructorAccess, Configurable(O::AccessEmulation)),
    (P::NeedToEmulateFieldReadAccess, Configurable(O::AccessEmulation)),
    (P::NeedToEmulateFieldWriteAccess, Configurable(O::AccessEmulation)),
    (P::NeedToEmulateMethodAccess, Configurable(O::AccessEmulation)),
    (P::NestedServiceImpl, Skip),
    (P::NoAdditionalBoundAfterTypeVariable, Skip),
    (P::NoFieldOnBaseType, Skip),
    (P::NoGenericLambda, Skip),
    (P::NoImplicitStringConversionForCharArrayExpression, Configurable(O::NoImplicitStringConversion)),
    (P::NoMessageSendOnArrayType, Skip),
    (P::NoMessageSendOnBaseType, Skip),
    (P::NoSuperInInterfaceContext, Skip),
    (P::NonBlankFinalLocalAssignment, Skip),
    (P::NonConstantExpression, Skip),
    (P::NonDenotableTypeArgumentForAnonymousDiamond, Skip),
    (P::NonExternalizedStringLiteral, Configurable(O::NonExternalizedString)),
    (P::NonGenericConstructor, Skip),
    (P::NonGenericMethod, Skip),
    (P::NonGenericType, Skip),
    (P::NonNullArrayContentNotInitialized, Skip),
    (P::NonNullDefaultDetailIsNotEvaluated, Skip),
    (P::NonNullExpressionComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::NonNullLocalVariableComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::NonNullMessageSendComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::NonNullMethodTypeVariableFromLegacyMethod, Configurable(O::NonNullTypeVariableFromLegacyInvocation)),
    (P::NonNullSpecdFieldComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::NonNullTypeVariableFromLegacyMethod, Configurable(O::NonNullTypeVariableFromLegacyInvocation)),
    (P::NonPublicTypeInAPI, Configurable(O::ApiLeak)),
    (P::NonStaticAccessToStaticField, Configurable(O::NonStaticAccessToStatic)),
    (P::NonStaticAccessToStaticMethod, Configurable(O::NonStaticAccessToStatic)),
    (P::NonStaticContextForEnumMemberType, Skip),
    (P::NonStaticFieldFromStaticInvocation, Skip),
    (P::NonStaticOrAlienTypeReceiver, Skip),
    (P::NonStaticTypeFromStaticInvocation, Skip),
    (P::NotAccessibleConstructor, Skip),
    (P::NotAccessibleField, Skip),
    (P::NotAccessibleMethod, Skip),
    (P::NotAccessiblePackage, Skip),
    (P::NotAccessibleType, Skip),
    (P::NotAnnotationType, Skip),
    (P::NotExportedTypeInAPI, Configurable(O::ApiLeak)),
    (P::NotOwningResourceField, Configurable(O::InsufficientResourceManagement)),
    (P::NotVisibleConstructor, Skip),
    (P::NotVisibleConstructorInDefaultConstructor, Skip),
    (P::NotVisibleConstructorInImplicitConstructorCall, Skip),
    (P::NotVisibleField, Skip),
    (P::NotVisibleMethod, Skip),
    (P::NotVisibleType, Skip),
    (P::NullAnnotationAtQualifyingType, Skip),
    (P::NullAnnotationUnsupportedLocation, Skip),
    (P::NullAnnotationUnsupportedLocationAtType, Skip),
    (P::NullExpressionReference, Configurable(O::NullReference)),
    (P::NullLocalVariableComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::NullLocalVariableInstanceofYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::NullLocalVariableReference, Configurable(O::NullReference)),
    (P::NullNotCompatibleToFreeTypeVariable, Configurable(O::PessimisticNullAnalysisForFreeTypeVariables)),
    (P::NullSourceString, Skip),
    (P::NullUnboxing, Configurable(O::NullReference)),
    (P::NullableFieldReference, Configurable(O::PotentialNullReference)),
    (P::NullityMismatchAgainstFreeTypeVariable, Configurable(O::PessimisticNullAnalysisForFreeTypeVariables)),
    (P::NullityMismatchTypeArgument, Configurable(O::NullSpecViolation)),
    (P::NullityMismatchingTypeAnnotation, Configurable(O::NullSpecViolation)),
    (P::NullityMismatchingTypeAnnotationSuperHint, Configurable(O::NullSpecViolation)),
    (P::NullityUncheckedTypeAnnotation, Configurable(O::NullUncheckedConversion)),
    (P::NullityUncheckedTypeAnnotationDetail, Configurable(O::NullUncheckedConversion)),
    (P::NullityUncheckedTypeAnnotationDetailSuperHint, Configurable(O::NullUncheckedConversion)),
    (P::NumericValueOutOfRange, Skip),
    (P::ObjectCannotBeGeneric, Skip),
    (P::ObjectCannotHaveSuperTypes, Skip),
    (P::ObjectHasNoSuperclass, Skip),
    (P::ObjectMustBeClass, Skip),
    (P::OperandStackExceeds64KLimit, Skip),
    (P::OperandStackSizeInappropriate, Skip),
    (P::OuterLocalMustBeEffectivelyFinal, Skip),
    (P::OuterLocalMustBeFinal, Skip),
    (P::OverrideAddingReturnOwning, Configurable(O::IncompatibleOwningContract)),
    (P::OverrideReducingParamterOwning, Configurable(O::IncompatibleOwningContract)),
    (P::OverridingDeprecatedMethod, Configurable(O::UsingDeprecatedApi)),
    (P::OverridingDeprecatedSinceVersionMethod, Configurable(O::UsingDeprecatedApi)),
    (P::OverridingMethodWithoutSuperInvocation, Configurable(O::OverridingMethodWithoutSuperInvocation)),
    (P::OverridingNonVisibleMethod, Configurable(O::OverriddenPackageDefaultMethod)),
    (P::OverridingTerminallyDeprecatedMethod, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::OverridingTerminallyDeprecatedSinceVersionMethod, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::OwningFieldInNonResourceClass, Configurable(O::InsufficientResourceManagement)),
    (P::OwningFieldShouldImplementClose, Configurable(O::InsufficientResourceManagement)),
    (P::PackageCollidesWithType, Skip),
    (P::PackageDoesNotExistOrIsEmpty, Skip),
    (P::PackageIsNotExpectedPackage, Skip),
    (P::ParameterAssignment, Configurable(O::ParameterAssignment)),
    (P::ParameterLackingNonNullAnnotation, Configurable(O::NonnullParameterAnnotationDropped)),
    (P::ParameterLackingNullableAnnotation, Configurable(O::NullSpecViolation)),
    (P::ParameterMismatch, Skip),
    (P::ParameterizedConstructorArgumentTypeMismatch, Skip),
    (P::ParameterizedMethodArgumentTypeMismatch, Skip),
    (P::ParsingError, Skip),
    (P::ParsingErrorDeleteToken, Skip),
    (P::ParsingErrorDeleteTokens, Skip),
    (P::ParsingErrorInsertToComplete, Skip),
    (P::ParsingErrorInsertToCompletePhrase, Skip),
    (P::ParsingErrorInsertToCompleteScope, Skip),
    (P::ParsingErrorInsertTokenAfter, Skip),
    (P::ParsingErrorInsertTokenBefore, Skip),
    (P::ParsingErrorInvalidToken, Skip),
    (P::ParsingErrorMergeTokens, Skip),
    (P::ParsingErrorMisplacedConstruct, Skip),
    (P::ParsingErrorNoSuggestion, Skip),
    (P::ParsingErrorNoSuggestionForTokens, Skip),
    (P::ParsingErrorOnKeyword, Skip),
    (P::ParsingErrorOnKeywordNoSuggestion, Skip),
    (P::ParsingErrorReplaceTokens, Skip),
    (P::ParsingErrorUnexpectedEOF, Skip),
    (P::PatternDominated, Skip),
    (P::PatternSubtypeOfExpression, Skip),
    (P::PatternSwitchCaseDefaultOnlyAsSecond, Skip),
    (P::PatternSwitchNullOnlyOrFirstWithDefault, Skip),
    (P::PatternTypeMismatch, Skip),
    (P::PatternVariableNotInScope, Skip),
    (P::PatternVariableRedeclared, Skip),
    (P::PatternVariableRedefined, Skip),
    (P::PolymorphicMethodNotBelow17, Skip),
    (P::PossibleAccidentalBooleanAssignment, Configurable(O::AccidentalBooleanAssign)),
    (P::PotentialHeapPollutionFromVararg, Configurable(O::UncheckedTypeOperation)),
    (P::PotentialNullExpressionReference, Configurable(O::PotentialNullReference)),
    (P::PotentialNullLocalVariableReference, Configurable(O::PotentialNullReference)),
    (P::PotentialNullMessageSendReference, Configurable(O::PotentialNullReference)),
    (P::PotentialNullUnboxing, Configurable(O::PotentialNullReference)),
    (P::PotentiallyUnclosedCloseable, Configurable(O::PotentiallyUnclosedCloseable)),
    (P::PotentiallyUnclosedCloseableAtExit, Configurable(O::PotentiallyUnclosedCloseable)),
    (P::PreviewAPIUsed, Skip),
    (P::PreviewFeatureDisabled, Skip),
    (P::PreviewFeatureNotSupported, Skip),
    (P::PreviewFeatureUsed, Skip),
    (P::PreviewFeaturesNotAllowed, Skip),
    (P::ProblemNotAnalysed, Configurable(O::SuppressWarningsNotAnalysed)),
    (P::ProviderMethodOrConstructorRequiredForServiceImpl, Skip),
    (P::PublicClassMustMatchFileName, Skip),
    (P::RawMemberTypeCannotBeParameterized, Skip),
    (P::RawTypeInRecordPattern, Skip),
    (P::RawTypeReference, Configurable(O::RawTypeReference)),
    (P::RecordAccessorMethodHasThrowsClause, Skip),
    (P::RecordAccessorMethodShouldBePublic, Skip),
    (P::RecordAccessorMethodShouldNotBeGeneric, Skip),
    (P::RecordAccessorMethodShouldNotBeStatic, Skip),
    (P::RecordCannotDefineRecordInLocalType, Skip),
    (P::RecordCannotExtendRecord, Skip),
    (P::RecordCanonicalConstructorHasExplicitConstructorCall, Skip),
    (P::RecordCanonicalConstructorHasReturnStatement, Skip),
    (P::RecordCanonicalConstructorHasThrowsClause, Skip),
    (P::RecordCanonicalConstructorShouldNotBeGeneric, Skip),
    (P::RecordCanonicalConstructorVisibilityReduced, Skip),
    (P::RecordCompactConstructorHasExplicitConstructorCall, Skip),
    (P::RecordCompactConstructorHasReturnStatement, Skip),
    (P::RecordComponentCannotBeVoid, Skip),
    (P::RecordComponentsCannotHaveModifiers, Skip),
    (P::RecordDuplicateComponent, Skip),
    (P::RecordErasureIncompatibilityInCanonicalConstructor, Skip),
    (P::RecordIllegalAccessorReturnType, Skip),
    (P::RecordIllegalComponentNameInRecord, Skip),
    (P::RecordIllegalExplicitFinalFieldAssignInCompactConstructor, Skip),
    (P::RecordIllegalExtendedDimensionsForRecordComponent, Skip),
    (P::RecordIllegalModifierForInnerRecord, Skip),
    (P::RecordIllegalModifierForLocalRecord, Skip),
    (P::RecordIllegalModifierForRecord, Skip),
    (P::RecordIllegalNativeModifierInRecord, Skip),
    (P::RecordIllegalParameterNameInCanonicalConstructor, Skip),
    (P::RecordIllegalStaticModifierForLocalClassOrInterface, Skip),
    (P::RecordIllegalVararg, Skip),
    (P::RecordInstanceInitializerBlockInRecord, Skip),
    (P::RecordMissingExplicitConstructorCallInNonCanonicalConstructor, Skip),
    (P::RecordMultipleCanonicalConstructors, Skip),
    (P::RecordNestedRecordInherentlyStatic, Skip),
    (P::RecordNonStaticFieldDeclarationInRecord, Skip),
    (P::RecordPatternMismatch, Skip),
    (P::RecordStaticReferenceToOuterLocalVariable, Skip),
    (P::RecursiveConstructorInvocation, Skip),
    (P::RedefinedArgument, Skip),
    (P::RedefinedLocal, Skip),
    (P::RedundantLocalVariableNullAssignment, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullAnnotation, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantNullCheckAgainstNonNullType, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnConstNonNullField, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnField, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnNonNullExpression, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnNonNullLocalVariable, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnNonNullMessageSend, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnNonNullSpecdField, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnNullLocalVariable, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullCheckOnSpecdNonNullLocalVariable, Configurable(O::RedundantNullCheck)),
    (P::RedundantNullDefaultAnnotation, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantNullDefaultAnnotationField, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantNullDefaultAnnotationLocal, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantNullDefaultAnnotationMethod, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantNullDefaultAnnotationModule, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantNullDefaultAnnotationPackage, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantNullDefaultAnnotationType, Configurable(O::RedundantNullAnnotation)),
    (P::RedundantSpecificationOfTypeArguments, Configurable(O::RedundantSpecificationOfTypeArguments)),
    (P::RedundantSuperinterface, Configurable(O::RedundantSuperinterface)),
    (P::ReferenceExpressionParameterNullityMismatch, Configurable(O::NullSpecViolation)),
    (P::ReferenceExpressionParameterNullityUnchecked, Configurable(O::NullUncheckedConversion)),
    (P::ReferenceExpressionReturnNullRedef, Configurable(O::NullSpecViolation)),
    (P::ReferenceExpressionReturnNullRedefUnchecked, Configurable(O::NullUncheckedConversion)),
    (P::ReferenceToForwardField, Skip),
    (P::ReferenceToForwardTypeVariable, Skip),
    (P::RepeatableAnnotationTypeIsDocumented, Skip),
    (P::RepeatableAnnotationTypeIsInherited, Skip),
    (P::RepeatableAnnotationTypeTargetMismatch, Skip),
    (P::RepeatableAnnotationWithRepeatingContainerAnnotation, Skip),
    (P::RepeatedAnnotationWithContainerAnnotation, Skip),
    (P::RequiredNonNullButProvidedFreeTypeVariable, Configurable(O::PessimisticNullAnalysisForFreeTypeVariables)),
    (P::RequiredNonNullButProvidedNull, Configurable(O::NullSpecViolation)),
    (P::RequiredNonNullButProvidedPotentialNull, Configurable(O::NullAnnotationInferenceConflict)),
    (P::RequiredNonNullButProvidedSpecdNullable, Configurable(O::NullSpecViolation)),
    (P::RequiredNonNullButProvidedUnknown, Configurable(O::NullUncheckedConversion)),
    (P::ResourceHasToImplementAutoCloseable, Skip),
    (P::ResourceIsNotAValue, Skip),
    (P::RestrictedTypeName, Skip),
    (P::ReturnTypeAmbiguous, Skip),
    (P::ReturnTypeCannotBeVoidArray, Skip),
    (P::ReturnTypeInheritedNameHidesEnclosingName, Skip),
    (P::ReturnTypeInternalNameProvided, Skip),
    (P::ReturnTypeMismatch, Skip),
    (P::ReturnTypeNotFound, Skip),
    (P::ReturnTypeNotVisible, Skip),
    (P::SafeVarargsOnFixedArityMethod, Skip),
    (P::SafeVarargsOnNonFinalInstanceMethod, Skip),
    (P::SafeVarargsOnSyntheticRecordAccessor, Skip),
    (P::SealedAnonymousClassCannotExtendSealedType, Skip),
    (P::SealedDisAllowedNonSealedModifierInClass, Skip),
    (P::SealedDisAllowedNonSealedModifierInInterface, Skip),
    (P::SealedDuplicateTypeInPermits, Skip),
    (P::SealedInterfaceIsSealedAndNonSealed, Skip),
    (P::SealedLocalDirectSuperTypeSealed, Skip),
    (P::SealedMissingClassModifier, Skip),
    (P::SealedMissingInterfaceModifier, Skip),
    (P::SealedMissingSealedModifier, Skip),
    (P::SealedNotDirectSuperClass, Skip),
    (P::SealedNotDirectSuperInterface, Skip),
    (P::SealedPermittedTypeOutsideOfModule, Skip),
    (P::SealedPermittedTypeOutsideOfPackage, Skip),
    (P::SealedSealedTypeMissingPermits, Skip),
    (P::SealedSuperClassDoesNotPermit, Skip),
    (P::SealedSuperInterfaceDoesNotPermit, Skip),
    (P::SealedSuperTypeDisallowed, Skip),
    (P::SealedSuperTypeInDifferentPackage, Skip),
    (P::ServiceImplDefaultConstructorNotPublic, Skip),
    (P::ServiceImplNotDefinedByModule, Skip),
    (P::ShouldImplementHashcode, Configurable(O::ShouldImplementHashcode)),
    (P::ShouldMarkMethodAsOwning, Skip),
    (P::ShouldReturnValue, Skip),
    (P::ShouldReturnValueHintMissingDefault, Skip),
    (P::SpecdNonNullLocalVariableComparisonYieldsFalse, Configurable(O::RedundantNullCheck)),
    (P::StaticInheritedMethodConflicts, Skip),
    (P::StaticInterfaceMethodNotBelow18, Skip),
    (P::StaticMemberOfParameterizedType, Skip),
    (P::StaticMethodRequested, Skip),
    (P::StaticMethodShouldBeAccessedStatically, Skip),
    (P::StaticResourceField, Configurable(O::InsufficientResourceManagement)),
    (P::StrictfpNotRequired, Skip),
    (P::StringConstantIsExceedingUtf8Limit, Skip),
    (P::SuperAccessCannotBypassDirectSuper, Skip),
    (P::SuperCallCannotBypassOverride, Skip),
    (P::SuperInterfaceMustBeAnInterface, Skip),
    (P::SuperInterfacesCollide, Skip),
    (P::SuperTypeUsingWildcard, Skip),
    (P::SuperclassAmbiguous, Configurable(O::ShouldImplementHashcode)),
    (P::SuperclassInheritedNameHidesEnclosingName, Skip),
    (P::SuperclassInternalNameProvided, Skip),
    (P::SuperclassMustBeAClass, Skip),
    (P::SuperclassNotFound, Skip),
    (P::SuperclassNotVisible, Configurable(O::RedundantSuperinterface)),
    (P::SuperfluousSemicolon, Configurable(O::EmptyStatement)),
    (P::SwitchExpressionBreakMissingValue, Skip),
    (P::SwitchExpressionIllegalLastStatement, Skip),
    (P::SwitchExpressionLastStatementCompletesNormally, Skip),
    (P::SwitchExpressionMissingDefaultCase, Skip),
    (P::SwitchExpressionMissingEnumConstantCase, Skip),
    (P::SwitchExpressionSwitchLabeledBlockCompletesNormally, Skip),
    (P::SwitchExpressionTrailingSwitchLabels, Skip),
    (P::SwitchExpressionaYieldSwitchLabeledBlockCompletesNormally, Skip),
    (P::SwitchExpressionsBreakOutOfSwitchExpression, Skip),
    (P::SwitchExpressionsContinueOutOfSwitchExpression, Skip),
    (P::SwitchExpressionsEmptySwitchBlock, Skip),
    (P::SwitchExpressionsIncompatibleResultExpressionTypes, Skip),
    (P::SwitchExpressionsNoResultExpression, Skip),
    (P::SwitchExpressionsNotSupported, Skip),
    (P::SwitchExpressionsReturnWithinSwitchExpression, Skip),
    (P::SwitchExpressionsYieldBreakNotAllowed, Skip),
    (P::SwitchExpressionsYieldEmptySwitchBlock, Skip),
    (P::SwitchExpressionsYieldIllegalLastStatement, Skip),
    (P::SwitchExpressionsYieldIllegalStatement, Skip),
    (P::SwitchExpressionsYieldIncompatibleResultExpressionTypes, Skip),
    (P::SwitchExpressionsYieldLastStatementCompletesNormally, Skip),
    (P::SwitchExpressionsYieldMissingDefaultCase, Skip),
    (P::SwitchExpressionsYieldMissingEnumConstantCase, Skip),
    (P::SwitchExpressionsYieldMissingValue, Skip),
    (P::SwitchExpressionsYieldNoResultExpression, Skip),
    (P::SwitchExpressionsYieldOutsideSwitchExpression, Skip),
    (P::SwitchExpressionsYieldRestrictedGeneralWarning, Skip),
    (P::SwitchExpressionsYieldTrailingSwitchLabels, Skip),
    (P::SwitchExpressionsYieldTypeDeclarationError, Skip),
    (P::SwitchExpressionsYieldTypeDeclarationWarning, Skip),
    (P::SwitchExpressionsYieldUnqualifiedMethodError, Skip),
    (P::SwitchExpressionsYieldUnqualifiedMethodWarning, Skip),
    (P::SwitchOnEnumNotBelow15, Skip),
    (P::SwitchOnStringsNotBelow17, Skip),
    (P::SwitchPreviewMixedCase, Skip),
    (P::SyntheticAccessorNotEnclosingMethod, Configurable(O::AccessEmulation)),
    (P::TargetTypeNotAFunctionalInterface, Skip),
    (P::Task, Skip),
    (P::ThisInStaticContext, Skip),
    (P::ThisSuperDuringConstructorInvocation, Skip),
    (P::ToleratedMisplacedTypeAnnotations, Skip),
    (P::TooManyArgumentSlots, Skip),
    (P::TooManyArrayDimensions, Skip),
    (P::TooManyBytesForStringConstant, Skip),
    (P::TooManyConstantsInConstantPool, Skip),
    (P::TooManyFields, Skip),
    (P::TooManyLocalVariableSlots, Skip),
    (P::TooManyMethods, Skip),
    (P::TooManyParametersForSyntheticMethod, Skip),
    (P::TooManySyntheticArgumentSlots, Skip),
    (P::TypeAnnotationAtQualifiedName, Skip),
    (P::TypeArgumentMismatch, Skip),
    (P::TypeArgumentsForRawGenericConstructor, Skip),
    (P::TypeArgumentsForRawGenericMethod, Skip),
    (P::TypeCollidesWithPackage, Skip),
    (P::TypeHidingType, Configurable(O::TypeHiding)),
    (P::TypeHidingTypeParameterFromMethod, Configurable(O::TypeHiding)),
    (P::TypeHidingTypeParameterFromType, Configurable(O::TypeHiding)),
    (P::TypeMismatch, Skip),
    (P::TypeMissingDeprecatedAnnotation, Configurable(O::MissingDeprecatedAnnotation)),
    (P::TypeParameterHidingType, Configurable(O::TypeHiding)),
    (P::UnboxingConversion, Configurable(O::AutoBoxing)),
    (P::UncheckedAccessOfValueOfFreeTypeVariable, Configurable(O::PessimisticNullAnalysisForFreeTypeVariables)),
    (P::UnclosedCloseable, Configurable(O::UnclosedCloseable)),
    (P::UnclosedCloseableAtExit, Configurable(O::UnclosedCloseable)),
    (P::UndefinedAnnotationMember, Skip),
    (P::UndefinedConstructor, Skip),
    (P::UndefinedConstructorInDefaultConstructor, Skip),
    (P::UndefinedConstructorInImplicitConstructorCall, Skip),
    (P::UndefinedField, Skip),
    (P::UndefinedLabel, Skip),
    (P::UndefinedMethod, Skip),
    (P::UndefinedModule, Skip),
    (P::UndefinedModuleAddReads, Skip),
    (P::UndefinedName, Skip),
    (P::UndefinedType, Skip),
    (P::UndefinedTypeVariable, Skip),
    (P::UnderscoreCannotBeUsedHere, Skip),
    (P::UnderscoresInLiteralsNotBelow17, Skip),
    (P::UndocumentedEmptyBlock, Configurable(O::UndocumentedEmptyBlock)),
    (P::UnexpectedStaticModifierForField, Skip),
    (P::UnexpectedStaticModifierForMethod, Skip),
    (P::UnexpectedTypeinRecordPattern, Skip),
    (P::UnexpectedTypeinSwitchPattern, Skip),
    (P::UnhandledException, Skip),
    (P::UnhandledExceptionInDefaultConstructor, Skip),
    (P::UnhandledExceptionInImplicitConstructorCall, Skip),
    (P::UnhandledExceptionOnAutoClose, Skip),
    (P::UnhandledWarningToken, Configurable(O::UnhandledWarningToken)),
    (P::UninitializedBlankFinalField, Skip),
    (P::UninitializedBlankFinalFieldHintMissingDefault, Skip),
    (P::UninitializedFreeTypeVariableField, Skip),
    (P::UninitializedFreeTypeVariableFieldHintMissingDefault, Skip),
    (P::UninitializedLocalVariable, Skip),
    (P::UninitializedLocalVariableHintMissingDefault, Skip),
    (P::UninitializedNonNullField, Skip),
    (P::UninitializedNonNullFieldHintMissingDefault, Skip),
    (P::UninternedIdentityComparison, Skip),
    (P::UnlikelyCollectionMethodArgumentType, Configurable(O::UnlikelyCollectionMethodArgumentType)),
    (P::UnlikelyEqualsArgumentType, Configurable(O::UnlikelyEqualsArgumentType)),
    (P::UnmatchedBracket, Skip),
    (P::UnnamedPackageInNamedModule, Skip),
    (P::UnnamedVariableMustHaveInitializer, Skip),
    (P::UnnecessaryArgumentCast, Skip),
    (P::UnnecessaryCast, Configurable(O::UnnecessaryTypeCheck)),
    (P::UnnecessaryElse, Configurable(O::UnnecessaryElse)),
    (P::UnnecessaryInstanceof, Configurable(O::UnnecessaryTypeCheck)),
    (P::UnnecessaryNLSTag, Configurable(O::NonExternalizedString)),
    (P::UnnecessaryNullCaseInSwitchOverNonNull, Configurable(O::RedundantNullCheck)),
    (P::UnqualifiedFieldAccess, Configurable(O::UnqualifiedFieldAccess)),
    (P::UnreachableCatch, Skip),
    (P::UnresolvedVariable, Skip),
    (P::UnsafeCast, Skip),
    (P::UnsafeElementTypeConversion, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeGenericArrayForVarargs, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeGenericCast, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeNullnessCast, Configurable(O::NullUncheckedConversion)),
    (P::UnsafeRawConstructorInvocation, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeRawFieldAssignment, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeRawGenericConstructorInvocation, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeRawGenericMethodInvocation, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeRawMethodInvocation, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeReturnTypeOverride, Configurable(O::UncheckedTypeOperation)),
    (P::UnsafeTypeConversion, Configurable(O::UncheckedTypeOperation)),
    (P::UnstableAutoModuleName, Configurable(O::UnstableAutoModuleName)),
    (P::UnterminatedComment, Skip),
    (P::UnterminatedString, Skip),
    (P::UnterminatedTextBlock, Skip),
    (P::UnusedConstructorDeclaredThrownException, Configurable(O::UnusedDeclaredThrownException)),
    (P::UnusedImport, Configurable(O::UnusedImport)),
    (P::UnusedLabel, Configurable(O::UnusedLabel)),
    (P::UnusedMethodDeclaredThrownException, Configurable(O::UnusedDeclaredThrownException)),
    (P::UnusedObjectAllocation, Configurable(O::UnusedObjectAllocation)),
    (P::UnusedPrivateConstructor, Configurable(O::UnusedPrivateMember)),
    (P::UnusedPrivateField, Configurable(O::UnusedPrivateMember)),
    (P::UnusedPrivateMethod, Configurable(O::UnusedPrivateMember)),
    (P::UnusedPrivateType, Configurable(O::UnusedPrivateMember)),
    (P::UnusedTypeArgumentsForConstructorInvocation, Configurable(O::UnusedTypeArguments)),
    (P::UnusedTypeArgumentsForMethodInvocation, Configurable(O::UnusedTypeArguments)),
    (P::UnusedTypeParameter, Configurable(O::UnusedTypeParameter)),
    (P::UnusedWarningToken, Configurable(O::UnusedWarningToken)),
    (P::UseAssertAsAnIdentifier, Configurable(O::AssertUsedAsAnIdentifier)),
    (P::UseEnumAsAnIdentifier, Configurable(O::EnumUsedAsAnIdentifier)),
    (P::UsingDeprecatedConstructor, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedField, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedMethod, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedModule, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedPackage, Skip),
    (P::UsingDeprecatedSinceVersionConstructor, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedSinceVersionField, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedSinceVersionMethod, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedSinceVersionModule, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedSinceVersionPackage, Skip),
    (P::UsingDeprecatedSinceVersionType, Configurable(O::UsingDeprecatedApi)),
    (P::UsingDeprecatedType, Configurable(O::UsingDeprecatedApi)),
    (P::UsingTerminallyDeprecatedConstructor, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedField, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedMethod, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedModule, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedPackage, Skip),
    (P::UsingTerminallyDeprecatedSinceVersionConstructor, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedSinceVersionField, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedSinceVersionMethod, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedSinceVersionModule, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedSinceVersionPackage, Skip),
    (P::UsingTerminallyDeprecatedSinceVersionType, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::UsingTerminallyDeprecatedType, Configurable(O::UsingTerminallyDeprecatedApi)),
    (P::VarCannotBeMixedWithNonVarParams, Skip),
    (P::VarCannotBeUsedWithTypeArguments, Skip),
    (P::VarIsNotAllowedHere, Skip),
    (P::VarIsReserved, Skip),
    (P::VarIsReservedInFuture, Skip),
    (P::VarLocalCannotBeArray, Skip),
    (P::VarLocalCannotBeArrayInitalizers, Skip),
    (P::VarLocalCannotBeLambda, Skip),
    (P::VarLocalCannotBeMethodReference, Skip),
    (P::VarLocalInitializedToNull, Skip),
    (P::VarLocalInitializedToVoid, Skip),
    (P::VarLocalMultipleDeclarators, Skip),
    (P::VarLocalReferencesItself, Skip),
    (P::VarLocalWithoutInitizalier, Skip),
    (P::VarargsConflict, Skip),
    (P::VarargsElementTypeNotVisible, Skip),
    (P::VarargsElementTypeNotVisibleForConstructor, Skip),
    (P::VariableTypeCannotBeVoid, Skip),
    (P::VariableTypeCannotBeVoidArray, Skip),
    (P::VoidMethodReturnsValue, Skip),
    (P::WildcardConstructorInvocation, Skip),
    (P::WildcardFieldAssignment, Skip),
    (P::WildcardMethodInvocation, Skip),
    (P::illFormedParameterizationOfFunctionalInterface, Skip),
    (P::lambdaParameterTypeMismatched, Skip),
    (P::lambdaSignatureMismatched, Skip),
    (P::switchMixedCase, Skip),
];
