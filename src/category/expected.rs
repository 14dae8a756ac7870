//! Checked-in category of every categorized problem, sorted by name.
//!
//! The validator compares this table with the live classification. When they
//! drift apart, `problem-registry regen categories` prints a replacement for
//! the table below.

use super::Category as C;
use crate::problem::ProblemKind as P;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryExpectation {
    Is(C),
    /// The problem is no longer reported; its category is not checked.
    Deprecated,
}

use CategoryExpectation::{Deprecated, Is};

pub const CATEGORY_TABLE: &[(P, CategoryExpectation)] = &[
    (P::AbstractMethodCannotBeOverridden, Is(C::Member)),
    (P::AbstractMethodInAbstractClass, Is(C::Member)),
    (P::AbstractMethodInEnum, Is(C::Member)),
    (P::AbstractMethodMustBeImplemented, Is(C::Member)),
    (P::AbstractMethodMustBeImplementedOverConcreteMethod, Is(C::Member)),
    (P::AbstractMethodsInConcreteClass, Is(C::Type)),
    (P::AbstractServiceImplementation, Is(C::Type)),
    (P::AmbiguousConstructor, Is(C::Member)),
    (P::AmbiguousConstructorInDefaultConstructor, Is(C::Member)),
    (P::AmbiguousConstructorInImplicitConstructorCall, Is(C::Member)),
    (P::AmbiguousField, Is(C::Member)),
    (P::AmbiguousMethod, Is(C::Member)),
    (P::AmbiguousType, Is(C::Type)),
    (P::AnnotatedTypeArgumentToUnannotated, Is(C::PotentialProgrammingProblem)),
    (P::AnnotatedTypeArgumentToUnannotatedSuperHint, Is(C::PotentialProgrammingProblem)),
    (P::AnnotationCannotOverrideMethod, Is(C::Member)),
    (P::AnnotationCircularity, Is(C::Type)),
    (P::AnnotationCircularitySelfReference, Is(C::Type)),
    (P::AnnotationFieldNeedConstantInitialization, Deprecated),
    (P::AnnotationMembersCannotHaveParameters, Is(C::Syntax)),
    (P::AnnotationMembersCannotHaveTypeParameters, Is(C::Syntax)),
    (P::AnnotationTypeDeclarationCannotHaveConstructor, Is(C::Syntax)),
    (P::AnnotationTypeDeclarationCannotHaveSuperclass, Is(C::Syntax)),
    (P::AnnotationTypeDeclarationCannotHaveSuperinterfaces, Is(C::Syntax)),
    (P::AnnotationTypeUsedAsSuperInterface, Is(C::CodeStyle)),
    (P::AnnotationValueMustBeAnEnumConstant, Is(C::Internal)),
    (P::AnnotationValueMustBeAnnotation, Is(C::Internal)),
    (P::AnnotationValueMustBeArrayInitializer, Is(C::Internal)),
    (P::AnnotationValueMustBeClassLiteral, Is(C::Internal)),
    (P::AnnotationValueMustBeConstant, Is(C::Internal)),
    (P::AnonymousClassCannotExtendFinalClass, Is(C::Type)),
    (P::ApplicableMethodOverriddenByInapplicable, Is(C::Member)),
    (P::ArgumentHidingField, Is(C::NameShadowingConflict)),
    (P::ArgumentHidingLocalVariable, Is(C::NameShadowingConflict)),
    (P::ArgumentIsNeverUsed, Is(C::UnnecessaryCode)),
    (P::ArgumentTypeAmbiguous, Deprecated),
    (P::ArgumentTypeCannotBeVoid, Is(C::Member)),
    (P::ArgumentTypeCannotBeVoidArray, Deprecated),
    (P::ArgumentTypeInheritedNameHidesEnclosingName, Deprecated),
    (P::ArgumentTypeInternalNameProvided, Deprecated),
    (P::ArgumentTypeNotFound, Deprecated),
    (P::ArgumentTypeNotVisible, Deprecated),
    (P::ArrayConstantsOnlyInArrayInitializers, Is(C::Syntax)),
    (P::ArrayReferencePotentialNullReference, Is(C::PotentialProgrammingProblem)),
    (P::ArrayReferenceRequired, Is(C::Internal)),
    (P::ArrowInCaseStatementsNotSupported, Is(C::Syntax)),
    (P::AssignmentHasNoEffect, Is(C::PotentialProgrammingProblem)),
    (P::AssignmentToMultiCatchParameter, Is(C::Internal)),
    (P::AssignmentToResource, Is(C::Internal)),
    (P::AutoManagedResourceNotBelow17, Is(C::Syntax)),
    (P::AutoManagedVariableResourceNotBelow9, Is(C::Syntax)),
    (P::BinaryLiteralNotBelow17, Is(C::Syntax)),
    (P::BodyForAbstractMethod, Is(C::Member)),
    (P::BodyForNativeMethod, Is(C::Member)),
    (P::BoundCannotBeArray, Is(C::Type)),
    (P::BoundHasConflictingArguments, Is(C::Type)),
    (P::BoundMustBeAnInterface, Is(C::Type)),
    (P::BoxingConversion, Is(C::CodeStyle)),
    (P::BytecodeExceeds64KLimit, Is(C::Internal)),
    (P::BytecodeExceeds64KLimitForClinit, Is(C::Internal)),
    (P::BytecodeExceeds64KLimitForConstructor, Is(C::Internal)),
    (P::BytecodeExceeds64KLimitForSwitchTable, Is(C::Internal)),
    (P::CannotAllocateVoidArray, Is(C::Internal)),
    (P::CannotDeclareEnumSpecialMethod, Is(C::Member)),
    (P::CannotDefineAnnotationInLocalType, Is(C::Internal)),
    (P::CannotDefineDimensionExpressionsWithInit, Is(C::Internal)),
    (P::CannotDefineEnumInLocalType, Is(C::Internal)),
    (P::CannotDefineInterfaceInLocalType, Is(C::Internal)),
    (P::CannotDefineStaticInitializerInLocalType, Is(C::Internal)),
    (P::CannotExtendEnum, Is(C::Type)),
    (P::CannotHideAnInstanceMethodWithAStaticMethod, Is(C::Member)),
    (P::CannotImplementIncompatibleNullness, Is(C::PotentialProgrammingProblem)),
    (P::CannotImportPackage, Is(C::Import)),
    (P::CannotInferElidedTypes, Is(C::Type)),
    (P::CannotInferInvocationType, Is(C::Type)),
    (P::CannotInferRecordPatternTypes, Is(C::PreviewRelated)),
    (P::CannotInvokeSuperConstructorInEnum, Is(C::Member)),
    (P::CannotOverrideAStaticMethodWithAnInstanceMethod, Is(C::Member)),
    (P::CannotReadSource, Is(C::Internal)),
    (P::CannotReturnInInitializer, Is(C::Internal)),
    (P::CannotThrowNull, Is(C::Internal)),
    (P::CannotThrowType, Is(C::Type)),
    (P::CannotUseDiamondWithAnonymousClasses, Is(C::Type)),
    (P::CannotUseDiamondWithExplicitTypeArguments, Is(C::Type)),
    (P::CannotUseSuperInCodeSnippet, Is(C::Internal)),
    (P::ClassExtendFinalClass, Is(C::Type)),
    (P::ClassExtendFinalRecord, Is(C::Type)),
    (P::CodeCannotBeReached, Is(C::Internal)),
    (P::CodeSnippetMissingClass, Is(C::Internal)),
    (P::CodeSnippetMissingMethod, Is(C::Internal)),
    (P::ComparingIdentical, Is(C::PotentialProgrammingProblem)),
    (P::ConflictingImport, Is(C::Import)),
    (P::ConflictingInheritedNullAnnotations, Is(C::PotentialProgrammingProblem)),
    (P::ConflictingNullAnnotations, Is(C::PotentialProgrammingProblem)),
    (P::ConflictingPackageFromModules, Is(C::Module)),
    (P::ConflictingPackageFromOtherModules, Is(C::Module)),
    (P::ConflictingPackageInModules, Is(C::Module)),
    (P::ConstNonNullFieldComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::ConstantWithPatternIncompatible, Is(C::PreviewRelated)),
    (P::ConstructedArrayIncompatible, Is(C::Member)),
    (P::ConstructionTypeMismatch, Is(C::Type)),
    (P::ConstructorReferenceNotBelow18, Is(C::Syntax)),
    (P::ConstructorVarargsArgumentNeedCast, Is(C::PotentialProgrammingProblem)),
    (P::ContainerAnnotationTypeHasNonDefaultMembers, Is(C::Type)),
    (P::ContainerAnnotationTypeHasShorterRetention, Is(C::Type)),
    (P::ContainerAnnotationTypeHasWrongValueType, Is(C::Type)),
    (P::ContainerAnnotationTypeMustHaveValue, Is(C::Type)),
    (P::ContradictoryNullAnnotations, Is(C::PotentialProgrammingProblem)),
    (P::ContradictoryNullAnnotationsInferred, Is(C::PotentialProgrammingProblem)),
    (P::ContradictoryNullAnnotationsInferredFunctionType, Is(C::PotentialProgrammingProblem)),
    (P::ContradictoryNullAnnotationsOnBound, Is(C::PotentialProgrammingProblem)),
    (P::CorruptedSignature, Is(C::Buildpath)),
    (P::CyclicModuleDependency, Is(C::Module)),
    (P::DanglingReference, Is(C::Member)),
    (P::DeadCode, Is(C::PotentialProgrammingProblem)),
    (P::DefaultMethodNotBelow18, Is(C::Syntax)),
    (P::DefaultMethodOverridesObjectMethod, Is(C::Member)),
    (P::DereferencingNullableExpression, Is(C::PotentialProgrammingProblem)),
    (P::DiamondNotBelow17, Is(C::Type)),
    (P::DimensionsIllegalOnRecordPattern, Is(C::Internal)),
    (P::DirectInvocationOfAbstractMethod, Is(C::Member)),
    (P::DisallowedExplicitThisParameter, Is(C::Syntax)),
    (P::DisallowedStatementInPrologue, Is(C::PreviewRelated)),
    (P::DisallowedTargetForAnnotation, Is(C::Type)),
    (P::DisallowedTargetForContainerAnnotationType, Is(C::Type)),
    (P::DiscouragedReference, Is(C::Restriction)),
    (P::DiscouragedValueBasedTypeSynchronization, Is(C::Internal)),
    (P::DuplicateAnnotation, Is(C::Type)),
    (P::DuplicateAnnotationMember, Is(C::Internal)),
    (P::DuplicateAnnotationNotMarkedRepeatable, Is(C::Type)),
    (P::DuplicateBlankFinalFieldInitialization, Is(C::Member)),
    (P::DuplicateBoundInIntersectionCast, Is(C::Type)),
    (P::DuplicateBounds, Is(C::Type)),
    (P::DuplicateCase, Is(C::Member)),
    (P::DuplicateDefaultCase, Is(C::Internal)),
    (P::DuplicateExports, Is(C::Module)),
    (P::DuplicateField, Is(C::Member)),
    (P::DuplicateFinalLocalInitialization, Is(C::Internal)),
    (P::DuplicateImport, Is(C::Import)),
    (P::DuplicateInheritedDefaultMethods, Is(C::Member)),
    (P::DuplicateInheritedMethods, Is(C::Member)),
    (P::DuplicateLabel, Is(C::Internal)),
    (P::DuplicateMethod, Is(C::Member)),
    (P::DuplicateMethodErasure, Is(C::Type)),
    (P::DuplicateModifierForArgument, Is(C::Member)),
    (P::DuplicateModifierForField, Is(C::Member)),
    (P::DuplicateModifierForMethod, Is(C::Member)),
    (P::DuplicateModifierForType, Is(C::Type)),
    (P::DuplicateModifierForVariable, Is(C::Member)),
    (P::DuplicateModuleRef, Is(C::Module)),
    (P::DuplicateNestedType, Is(C::Type)),
    (P::DuplicateOpens, Is(C::Module)),
    (P::DuplicateParameterizedMethods, Is(C::Member)),
    (P::DuplicateRequires, Is(C::Module)),
    (P::DuplicateResource, Is(C::Internal)),
    (P::DuplicateServices, Is(C::Module)),
    (P::DuplicateSuperInterface, Is(C::Type)),
    (P::DuplicateTargetInTargetAnnotation, Is(C::Internal)),
    (P::DuplicateTotalPattern, Is(C::PreviewRelated)),
    (P::DuplicateTypeVariable, Is(C::Internal)),
    (P::DuplicateTypes, Is(C::Type)),
    (P::DuplicateUses, Is(C::Module)),
    (P::EmptyControlFlowStatement, Is(C::PotentialProgrammingProblem)),
    (P::EnclosingInstanceInConstructorCall, Is(C::Internal)),
    (P::EndOfSource, Is(C::Syntax)),
    (P::EnhancedSwitchMissingDefault, Is(C::PreviewRelated)),
    (P::EnumAbstractMethodMustBeImplemented, Is(C::Member)),
    (P::EnumConstantCannotDefineAbstractMethod, Is(C::Member)),
    (P::EnumConstantMustImplementAbstractMethod, Is(C::Member)),
    (P::EnumConstantsCannotBeSurroundedByParenthesis, Is(C::Syntax)),
    (P::EnumStaticFieldInInInitializerContext, Is(C::Member)),
    (P::EnumSwitchCannotTargetField, Is(C::Member)),
    (P::ErrorUseOfUnderscoreAsAnIdentifier, Is(C::Syntax)),
    (P::ExceptionParameterIsNeverUsed, Is(C::UnnecessaryCode)),
    (P::ExceptionTypeAmbiguous, Deprecated),
    (P::ExceptionTypeInheritedNameHidesEnclosingName, Deprecated),
    (P::ExceptionTypeInternalNameProvided, Deprecated),
    (P::ExceptionTypeNotFound, Deprecated),
    (P::ExceptionTypeNotVisible, Deprecated),
    (P::ExplicitAnnotationTargetRequired, Is(C::Type)),
    (P::ExplicitThisParameterNotBelow18, Is(C::Syntax)),
    (P::ExplicitThisParameterNotInLambda, Is(C::Syntax)),
    (P::ExplicitlyClosedAutoCloseable, Is(C::CodeStyle)),
    (P::ExportingForeignPackage, Is(C::Module)),
    (P::ExpressionInPreConstructorContext, Is(C::PreviewRelated)),
    (P::ExpressionShouldBeAVariable, Is(C::Syntax)),
    (P::ExternalProblemFixable, Is(C::Internal)),
    (P::ExternalProblemNotFixable, Is(C::Internal)),
    (P::FallthroughCase, Is(C::PotentialProgrammingProblem)),
    (P::FalseConstantInGuard, Is(C::PreviewRelated)),
    (P::FeatureNotSupported, Is(C::Compliance)),
    (P::FieldComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::FieldHidingField, Is(C::NameShadowingConflict)),
    (P::FieldHidingLocalVariable, Is(C::NameShadowingConflict)),
    (P::FieldMissingDeprecatedAnnotation, Is(C::CodeStyle)),
    (P::FieldMustBeFinal, Is(C::Internal)),
    (P::FieldTypeAmbiguous, Deprecated),
    (P::FieldTypeInheritedNameHidesEnclosingName, Deprecated),
    (P::FieldTypeInternalNameProvided, Deprecated),
    (P::FieldTypeNotFound, Deprecated),
    (P::FieldTypeNotVisible, Deprecated),
    (P::FinalBoundForTypeVariable, Is(C::CodeStyle)),
    (P::FinalFieldAssignment, Is(C::Member)),
    (P::FinalMethodCannotBeOverridden, Is(C::Member)),
    (P::FinalOuterLocalAssignment, Is(C::Internal)),
    (P::FinallyMustCompleteNormally, Is(C::PotentialProgrammingProblem)),
    (P::ForbiddenReference, Is(C::Restriction)),
    (P::GenericConstructorTypeArgumentMismatch, Is(C::Type)),
    (P::GenericInferenceError, Is(C::Internal)),
    (P::GenericMethodTypeArgumentMismatch, Is(C::Type)),
    (P::GenericTypeCannotExtendThrowable, Is(C::Type)),
    (P::HidingEnclosingType, Is(C::Type)),
    (P::HierarchyCircularity, Is(C::Type)),
    (P::HierarchyCircularitySelfReference, Is(C::Type)),
    (P::HierarchyHasProblems, Is(C::Type)),
    (P::IllegalAbstractModifierCombinationForMethod, Is(C::Member)),
    (P::IllegalAccessFromTypeVariable, Is(C::Type)),
    (P::IllegalAnnotationForBaseType, Is(C::Type)),
    (P::IllegalArrayOfUnionType, Is(C::Type)),
    (P::IllegalArrayTypeInIntersectionCast, Is(C::Type)),
    (P::IllegalBasetypeInIntersectionCast, Is(C::Type)),
    (P::IllegalCast, Is(C::Type)),
    (P::IllegalClassLiteralForTypeVariable, Is(C::Type)),
    (P::IllegalDeclarationOfThisParameter, Is(C::Syntax)),
    (P::IllegalDefaultModifierSpecification, Is(C::Member)),
    (P::IllegalDefinitionToNonNullParameter, Is(C::PotentialProgrammingProblem)),
    (P::IllegalDimension, Is(C::Internal)),
    (P::IllegalEnclosingInstanceSpecification, Is(C::Type)),
    (P::IllegalExtendedDimensions, Is(C::Member)),
    (P::IllegalExtendedDimensionsForVarArgs, Is(C::Syntax)),
    (P::IllegalFallthroughFromAPattern, Is(C::PreviewRelated)),
    (P::IllegalFallthroughToPattern, Is(C::PreviewRelated)),
    (P::IllegalGenericArray, Is(C::Type)),
    (P::IllegalHexaLiteral, Is(C::Syntax)),
    (P::IllegalInstanceofParameterizedType, Is(C::Internal)),
    (P::IllegalInstanceofTypeParameter, Is(C::Internal)),
    (P::IllegalModifierCombinationFinalAbstractForClass, Is(C::Type)),
    (P::IllegalModifierCombinationFinalVolatileForField, Is(C::Member)),
    (P::IllegalModifierCombinationForInterfaceMethod, Is(C::Member)),
    (P::IllegalModifierCombinationForPrivateInterfaceMethod9, Is(C::Member)),
    (P::IllegalModifierForAnnotationField, Is(C::Internal)),
    (P::IllegalModifierForAnnotationMemberType, Is(C::Type)),
    (P::IllegalModifierForAnnotationMethod, Is(C::Member)),
    (P::IllegalModifierForAnnotationType, Is(C::Type)),
    (P::IllegalModifierForArgument, Is(C::Member)),
    (P::IllegalModifierForClass, Is(C::Type)),
    (P::IllegalModifierForConstructor, Is(C::Member)),
    (P::IllegalModifierForEnum, Is(C::Type)),
    (P::IllegalModifierForEnumConstant, Is(C::Member)),
    (P::IllegalModifierForEnumConstructor, Is(C::Member)),
    (P::IllegalModifierForField, Is(C::Member)),
    (P::IllegalModifierForInterface, Is(C::Type)),
    (P::IllegalModifierForInterfaceField, Is(C::Member)),
    (P::IllegalModifierForInterfaceMethod, Is(C::Member)),
    (P::IllegalModifierForInterfaceMethod18, Is(C::Member)),
    (P::IllegalModifierForInterfaceMethod9, Is(C::Member)),
    (P::IllegalModifierForLocalClass, Is(C::Type)),
    (P::IllegalModifierForLocalEnum, Is(C::Type)),
    (P::IllegalModifierForLocalEnumDeclaration, Is(C::Type)),
    (P::IllegalModifierForMemberClass, Is(C::Type)),
    (P::IllegalModifierForMemberEnum, Is(C::Type)),
    (P::IllegalModifierForMemberInterface, Is(C::Type)),
    (P::IllegalModifierForMethod, Is(C::Member)),
    (P::IllegalModifierForModule, Is(C::Module)),
    (P::IllegalModifierForPatternVariable, Is(C::Internal)),
    (P::IllegalModifierForVariable, Is(C::Member)),
    (P::IllegalModifiers, Is(C::Internal)),
    (P::IllegalModifiersForElidedType, Is(C::Internal)),
    (P::IllegalParameterNullityRedefinition, Is(C::PotentialProgrammingProblem)),
    (P::IllegalPrimitiveOrArrayTypeForEnclosingInstance, Is(C::Type)),
    (P::IllegalQualifiedEnumConstantLabel, Is(C::Member)),
    (P::IllegalQualifiedParameterizedTypeAllocation, Is(C::Type)),
    (P::IllegalQualifierForExplicitThis, Is(C::Syntax)),
    (P::IllegalQualifierForExplicitThis2, Is(C::Syntax)),
    (P::IllegalRecordPattern, Is(C::Type)),
    (P::IllegalRedefinitionOfTypeVariable, Is(C::PotentialProgrammingProblem)),
    (P::IllegalRedefinitionToNonNullParameter, Is(C::PotentialProgrammingProblem)),
    (P::IllegalReturnNullityRedefinition, Is(C::PotentialProgrammingProblem)),
    (P::IllegalReturnNullityRedefinitionFreeTypeVariable, Is(C::PotentialProgrammingProblem)),
    (P::IllegalStaticModifierForMemberType, Is(C::Type)),
    (P::IllegalStrictfpForAbstractInterfaceMethod, Is(C::Member)),
    (P::IllegalTotalPatternWithDefault, Is(C::PreviewRelated)),
    (P::IllegalTypeAnnotationsInStaticMemberAccess, Is(C::Syntax)),
    (P::IllegalTypeArgumentsInRawConstructorReference, Is(C::Type)),
    (P::IllegalTypeForExplicitThis, Is(C::Syntax)),
    (P::IllegalTypeVariableSuperReference, Is(C::Internal)),
    (P::IllegalUnderscorePosition, Is(C::Syntax)),
    (P::IllegalUsageOfQualifiedTypeReference, Is(C::Syntax)),
    (P::IllegalUsageOfTypeAnnotations, Is(C::Syntax)),
    (P::IllegalUseOfUnderscoreAsAnIdentifier, Is(C::Syntax)),
    (P::IllegalVararg, Is(C::Member)),
    (P::IllegalVarargInLambda, Is(C::Type)),
    (P::IllegalVisibilityModifierCombinationForField, Is(C::Member)),
    (P::IllegalVisibilityModifierCombinationForMemberType, Is(C::Type)),
    (P::IllegalVisibilityModifierCombinationForMethod, Is(C::Member)),
    (P::IllegalVisibilityModifierForInterfaceMemberType, Is(C::Type)),
    (P::ImplicitClassMissingMainMethod, Is(C::PreviewRelated)),
    (P::ImplicitObjectBoundNoNullDefault, Is(C::Internal)),
    (P::ImportAmbiguous, Deprecated),
    (P::ImportInheritedNameHidesEnclosingName, Deprecated),
    (P::ImportInternalNameProvided, Deprecated),
    (P::ImportNotFound, Is(C::Import)),
    (P::ImportNotVisible, Deprecated),
    (P::IncompatibleExceptionInInheritedMethodThrowsClause, Is(C::Member)),
    (P::IncompatibleExceptionInThrowsClause, Is(C::Member)),
    (P::IncompatibleExceptionInThrowsClauseForNonInheritedInterfaceMethod, Is(C::NameShadowingConflict)),
    (P::IncompatibleLambdaParameterType, Is(C::Type)),
    (P::IncompatibleMethodReference, Is(C::Member)),
    (P::IncompatibleReturnType, Is(C::Member)),
    (P::IncompatibleReturnTypeForNonInheritedInterfaceMethod, Is(C::NameShadowingConflict)),
    (P::IncompatibleTypesInConditionalOperator, Is(C::Type)),
    (P::IncompatibleTypesInEqualityOperator, Is(C::Type)),
    (P::IncompatibleTypesInForeach, Is(C::Type)),
    (P::IncorrectArityForParameterizedConstructor, Is(C::Type)),
    (P::IncorrectArityForParameterizedMethod, Is(C::Type)),
    (P::IncorrectArityForParameterizedType, Is(C::Type)),
    (P::IncorrectEnclosingInstanceReference, Is(C::Type)),
    (P::IncorrectSwitchType, Is(C::Type)),
    (P::IncorrectSwitchType17, Is(C::Type)),
    (P::IndirectAccessToStaticField, Is(C::CodeStyle)),
    (P::IndirectAccessToStaticMethod, Is(C::CodeStyle)),
    (P::IndirectAccessToStaticType, Is(C::CodeStyle)),
    (P::InheritedDefaultMethodConflictsWithOtherInherited, Is(C::Member)),
    (P::InheritedFieldHidesEnclosingName, Is(C::Member)),
    (P::InheritedIncompatibleReturnType, Is(C::Member)),
    (P::InheritedMethodHidesEnclosingName, Is(C::Member)),
    (P::InheritedMethodReducesVisibility, Is(C::Member)),
    (P::InheritedParameterLackingNonNullAnnotation, Is(C::PotentialProgrammingProblem)),
    (P::InheritedTypeHidesEnclosingName, Is(C::Type)),
    (P::InitializerMustCompleteNormally, Is(C::Internal)),
    (P::InstanceFieldDuringConstructorInvocation, Is(C::Member)),
    (P::InstanceMethodDuringConstructorInvocation, Is(C::Member)),
    (P::InterfaceAmbiguous, Deprecated),
    (P::InterfaceCannotHaveConstructors, Is(C::Syntax)),
    (P::InterfaceCannotHaveInitializers, Is(C::Type)),
    (P::InterfaceInheritedNameHidesEnclosingName, Deprecated),
    (P::InterfaceInternalNameProvided, Deprecated),
    (P::InterfaceNotFound, Deprecated),
    (P::InterfaceNotFunctionalInterface, Is(C::Type)),
    (P::InterfaceNotVisible, Deprecated),
    (P::InterfaceStaticMethodInvocationNotBelow18, Is(C::Syntax)),
    (P::InterfaceSuperInvocationNotBelow18, Is(C::Syntax)),
    (P::InternalTypeNameProvided, Is(C::Type)),
    (P::IntersectionCastNotBelow18, Is(C::Type)),
    (P::InvalidAnnotationMemberType, Is(C::Type)),
    (P::InvalidArrayConstructorReference, Is(C::Member)),
    (P::InvalidBinary, Is(C::Syntax)),
    (P::InvalidBreak, Is(C::Internal)),
    (P::InvalidCatchBlockSequence, Is(C::Type)),
    (P::InvalidCharacterConstant, Is(C::Syntax)),
    (P::InvalidClassInstantiation, Is(C::Type)),
    (P::InvalidContinue, Is(C::Internal)),
    (P::InvalidDigit, Is(C::Syntax)),
    (P::InvalidEncoding, Is(C::Internal)),
    (P::InvalidEscape, Is(C::Syntax)),
    (P::InvalidExplicitConstructorCall, Is(C::Syntax)),
    (P::InvalidExpressionAsStatement, Is(C::Syntax)),
    (P::InvalidFileNameForPackageAnnotations, Is(C::Syntax)),
    (P::InvalidFloat, Is(C::Syntax)),
    (P::InvalidHexa, Is(C::Syntax)),
    (P::InvalidHighSurrogate, Is(C::Syntax)),
    (P::InvalidInput, Is(C::Syntax)),
    (P::InvalidLowSurrogate, Is(C::Syntax)),
    (P::InvalidNullToSynchronized, Is(C::Internal)),
    (P::InvalidOctal, Is(C::Syntax)),
    (P::InvalidOpensStatement, Is(C::Module)),
    (P::InvalidOperator, Is(C::Internal)),
    (P::InvalidParameterizedExceptionType, Is(C::Type)),
    (P::InvalidParenthesizedExpression, Is(C::Syntax)),
    (P::InvalidServiceImplType, Is(C::Module)),
    (P::InvalidServiceIntfType, Is(C::Module)),
    (P::InvalidTypeArguments, Is(C::Type)),
    (P::InvalidTypeExpression, Is(C::Internal)),
    (P::InvalidTypeForCollection, Is(C::Internal)),
    (P::InvalidTypeForCollectionTarget14, Is(C::Internal)),
    (P::InvalidTypeForStaticImport, Is(C::Import)),
    (P::InvalidTypeToSynchronized, Is(C::Internal)),
    (P::InvalidTypeVariableExceptionType, Is(C::Type)),
    (P::InvalidUnaryExpression, Is(C::Syntax)),
    (P::InvalidUnicodeEscape, Is(C::Syntax)),
    (P::InvalidUnionTypeReferenceSequence, Is(C::Type)),
    (P::InvalidUsageOfAnnotationDeclarations, Is(C::Syntax)),
    (P::InvalidUsageOfAnnotations, Is(C::Syntax)),
    (P::InvalidUsageOfEnumDeclarations, Is(C::Syntax)),
    (P::InvalidUsageOfForeachStatements, Is(C::Syntax)),
    (P::InvalidUsageOfStaticImports, Is(C::Syntax)),
    (P::InvalidUsageOfTypeAnnotations, Is(C::Syntax)),
    (P::InvalidUsageOfTypeArguments, Is(C::Syntax)),
    (P::InvalidUsageOfTypeParameters, Is(C::Syntax)),
    (P::InvalidUsageOfTypeParametersForAnnotationDeclaration, Is(C::Syntax)),
    (P::InvalidUsageOfTypeParametersForEnumDeclaration, Is(C::Syntax)),
    (P::InvalidUsageOfVarargs, Is(C::Syntax)),
    (P::InvalidUsageOfWildcard, Is(C::Syntax)),
    (P::InvalidVoidExpression, Is(C::Internal)),
    (P::IsClassPathCorrect, Is(C::Buildpath)),
    (P::IsClassPathCorrectWithReferencingType, Is(C::Buildpath)),
    (P::JavadocAmbiguousConstructor, Is(C::Javadoc)),
    (P::JavadocAmbiguousField, Is(C::Javadoc)),
    (P::JavadocAmbiguousMethod, Is(C::Javadoc)),
    (P::JavadocAmbiguousMethodReference, Is(C::Javadoc)),
    (P::JavadocAmbiguousType, Is(C::Javadoc)),
    (P::JavadocDuplicateParamName, Is(C::Javadoc)),
    (P::JavadocDuplicateProvidesTag, Is(C::Javadoc)),
    (P::JavadocDuplicateReturnTag, Is(C::Javadoc)),
    (P::JavadocDuplicateTag, Is(C::Javadoc)),
    (P::JavadocDuplicateThrowsClassName, Is(C::Javadoc)),
    (P::JavadocDuplicateUsesTag, Is(C::Javadoc)),
    (P::JavadocEmptyReturnTag, Is(C::Javadoc)),
    (P::JavadocGenericConstructorTypeArgumentMismatch, Is(C::Javadoc)),
    (P::JavadocGenericMethodTypeArgumentMismatch, Is(C::Javadoc)),
    (P::JavadocHiddenReference, Is(C::Javadoc)),
    (P::JavadocIncorrectArityForParameterizedConstructor, Is(C::Javadoc)),
    (P::JavadocIncorrectArityForParameterizedMethod, Is(C::Javadoc)),
    (P::JavadocInheritedFieldHidesEnclosingName, Is(C::Javadoc)),
    (P::JavadocInheritedMethodHidesEnclosingName, Is(C::Javadoc)),
    (P::JavadocInheritedNameHidesEnclosingTypeName, Is(C::Javadoc)),
    (P::JavadocInternalTypeNameProvided, Is(C::Javadoc)),
    (P::JavadocInvalidMemberTypeQualification, Is(C::Javadoc)),
    (P::JavadocInvalidModule, Is(C::Internal)),
    (P::JavadocInvalidModuleQualification, Is(C::Javadoc)),
    (P::JavadocInvalidParamName, Is(C::Javadoc)),
    (P::JavadocInvalidParamTagName, Is(C::Javadoc)),
    (P::JavadocInvalidParamTagTypeParameter, Is(C::Javadoc)),
    (P::JavadocInvalidProvidesClass, Is(C::Javadoc)),
    (P::JavadocInvalidProvidesClassName, Is(C::Javadoc)),
    (P::JavadocInvalidSeeArgs, Is(C::Javadoc)),
    (P::JavadocInvalidSeeHref, Is(C::Javadoc)),
    (P::JavadocInvalidSeeReference, Is(C::Javadoc)),
    (P::JavadocInvalidSeeUrlReference, Is(C::Javadoc)),
    (P::JavadocInvalidSnippet, Is(C::Javadoc)),
    (P::JavadocInvalidSnippetContentNewLine, Is(C::Javadoc)),
    (P::JavadocInvalidSnippetDuplicateRegions, Is(C::Javadoc)),
    (P::JavadocInvalidSnippetMissingColon, Is(C::Javadoc)),
    (P::JavadocInvalidSnippetRegexSubstringTogether, Is(C::Javadoc)),
    (P::JavadocInvalidSnippetRegionNotClosed, Is(C::Javadoc)),
    (P::JavadocInvalidTag, Is(C::Javadoc)),
    (P::JavadocInvalidThrowsClass, Is(C::Javadoc)),
    (P::JavadocInvalidThrowsClassName, Is(C::Javadoc)),
    (P::JavadocInvalidUsesClass, Is(C::Javadoc)),
    (P::JavadocInvalidUsesClassName, Is(C::Javadoc)),
    (P::JavadocInvalidValueReference, Is(C::Javadoc)),
    (P::JavadocMalformedSeeReference, Is(C::Javadoc)),
    (P::JavadocMessagePrefix, Is(C::Internal)),
    (P::JavadocMissing, Is(C::Javadoc)),
    (P::JavadocMissingHashCharacter, Is(C::Javadoc)),
    (P::JavadocMissingIdentifier, Is(C::Javadoc)),
    (P::JavadocMissingParamName, Is(C::Javadoc)),
    (P::JavadocMissingParamTag, Is(C::Javadoc)),
    (P::JavadocMissingProvidesClassName, Is(C::Javadoc)),
    (P::JavadocMissingProvidesTag, Is(C::Javadoc)),
    (P::JavadocMissingReturnTag, Is(C::Javadoc)),
    (P::JavadocMissingSeeReference, Is(C::Javadoc)),
    (P::JavadocMissingTagDescription, Is(C::Javadoc)),
    (P::JavadocMissingThrowsClassName, Is(C::Javadoc)),
    (P::JavadocMissingThrowsTag, Is(C::Javadoc)),
    (P::JavadocMissingUsesClassName, Is(C::Javadoc)),
    (P::JavadocMissingUsesTag, Is(C::Javadoc)),
    (P::JavadocNoMessageSendOnArrayType, Is(C::Javadoc)),
    (P::JavadocNoMessageSendOnBaseType, Is(C::Javadoc)),
    (P::JavadocNonGenericConstructor, Is(C::Javadoc)),
    (P::JavadocNonGenericMethod, Is(C::Javadoc)),
    (P::JavadocNonStaticTypeFromStaticInvocation, Is(C::Javadoc)),
    (P::JavadocNotAccessibleType, Is(C::Javadoc)),
    (P::JavadocNotVisibleConstructor, Is(C::Javadoc)),
    (P::JavadocNotVisibleField, Is(C::Javadoc)),
    (P::JavadocNotVisibleMethod, Is(C::Javadoc)),
    (P::JavadocNotVisibleType, Is(C::Javadoc)),
    (P::JavadocParameterMismatch, Is(C::Javadoc)),
    (P::JavadocParameterizedConstructorArgumentTypeMismatch, Is(C::Javadoc)),
    (P::JavadocParameterizedMethodArgumentTypeMismatch, Is(C::Javadoc)),
    (P::JavadocTypeArgumentsForRawGenericConstructor, Is(C::Javadoc)),
    (P::JavadocTypeArgumentsForRawGenericMethod, Is(C::Javadoc)),
    (P::JavadocUndefinedConstructor, Is(C::Javadoc)),
    (P::JavadocUndefinedField, Is(C::Javadoc)),
    (P::JavadocUndefinedMethod, Is(C::Javadoc)),
    (P::JavadocUndefinedType, Is(C::Javadoc)),
    (P::JavadocUnexpectedTag, Is(C::Javadoc)),
    (P::JavadocUnexpectedText, Is(C::Javadoc)),
    (P::JavadocUnterminatedInlineTag, Is(C::Javadoc)),
    (P::JavadocUsingDeprecatedConstructor, Is(C::Javadoc)),
    (P::JavadocUsingDeprecatedField, Is(C::Javadoc)),
    (P::JavadocUsingDeprecatedMethod, Is(C::Javadoc)),
    (P::JavadocUsingDeprecatedType, Is(C::Javadoc)),
    (P::LambdaDescriptorMentionsUnmentionable, Is(C::Internal)),
    (P::LambdaExpressionNotBelow18, Is(C::Syntax)),
    (P::LambdaRedeclaresArgument, Is(C::Internal)),
    (P::LambdaRedeclaresLocal, Is(C::Internal)),
    (P::LambdaShapeComputationError, Is(C::Internal)),
    (P::LocalReferencedInGuardMustBeEffectivelyFinal, Is(C::PreviewRelated)),
    (P::LocalStaticsIllegalVisibilityModifierForInterfaceLocalType, Is(C::Type)),
    (P::LocalVariableCanOnlyBeNull, Deprecated),
    (P::LocalVariableCannotBeNull, Deprecated),
    (P::LocalVariableHidingField, Is(C::NameShadowingConflict)),
    (P::LocalVariableHidingLocalVariable, Is(C::NameShadowingConflict)),
    (P::LocalVariableIsNeverUsed, Is(C::UnnecessaryCode)),
    (P::LocalVariableMayBeNull, Deprecated),
    (P::MandatoryCloseNotShown, Is(C::PotentialProgrammingProblem)),
    (P::MandatoryCloseNotShownAtExit, Is(C::PotentialProgrammingProblem)),
    (P::MaskedCatch, Is(C::PotentialProgrammingProblem)),
    (P::MethodButWithConstructorName, Is(C::CodeStyle)),
    (P::MethodCanBePotentiallyStatic, Is(C::CodeStyle)),
    (P::MethodCanBeStatic, Is(C::CodeStyle)),
    (P::MethodMissingDeprecatedAnnotation, Is(C::CodeStyle)),
    (P::MethodMustOverride, Is(C::Member)),
    (P::MethodMustOverrideOrImplement, Is(C::Member)),
    (P::MethodNameClash, Is(C::Member)),
    (P::MethodNameClashHidden, Is(C::Member)),
    (P::MethodReducesVisibility, Is(C::Member)),
    (P::MethodReferenceNotBelow18, Is(C::Syntax)),
    (P::MethodReferenceSwingsBothWays, Is(C::Member)),
    (P::MethodRequiresBody, Is(C::Member)),
    (P::MethodReturnsVoid, Is(C::Member)),
    (P::MethodVarargsArgumentNeedCast, Is(C::PotentialProgrammingProblem)),
    (P::MisplacedTypeAnnotations, Is(C::Syntax)),
    (P::MissingArgumentsForParameterizedMemberType, Is(C::Type)),
    (P::MissingDefaultCase, Is(C::PotentialProgrammingProblem)),
    (P::MissingEnclosingInstance, Is(C::Type)),
    (P::MissingEnclosingInstanceForConstructorCall, Is(C::Type)),
    (P::MissingEnumConstantCase, Is(C::PotentialProgrammingProblem)),
    (P::MissingEnumConstantCaseDespiteDefault, Is(C::PotentialProgrammingProblem)),
    (P::MissingEnumDefaultCase, Is(C::PotentialProgrammingProblem)),
    (P::MissingNonNullByDefaultAnnotationOnPackage, Is(C::PotentialProgrammingProblem)),
    (P::MissingNonNullByDefaultAnnotationOnType, Is(C::PotentialProgrammingProblem)),
    (P::MissingNullAnnotationImplicitlyUsed, Is(C::Buildpath)),
    (P::MissingOverrideAnnotation, Is(C::CodeStyle)),
    (P::MissingOverrideAnnotationForInterfaceMethodImplementation, Is(C::CodeStyle)),
    (P::MissingRequiresTransitiveForTypeInAPI, Is(C::PotentialProgrammingProblem)),
    (P::MissingReturnType, Is(C::Type)),
    (P::MissingSemiColon, Is(C::Syntax)),
    (P::MissingSerialVersion, Is(C::PotentialProgrammingProblem)),
    (P::MissingSynchronizedModifierInInheritedMethod, Is(C::PotentialProgrammingProblem)),
    (P::MissingTypeInConstructor, Is(C::Member)),
    (P::MissingTypeInLambda, Is(C::Member)),
    (P::MissingTypeInMethod, Is(C::Member)),
    (P::MissingValueForAnnotationMember, Is(C::Type)),
    (P::MissingValueFromLambda, Is(C::Internal)),
    (P::MultiCatchNotBelow17, Is(C::Syntax)),
    (P::MultiConstantCaseLabelsNotSupported, Is(C::Syntax)),
    (P::MultipleFunctionalInterfaces, Is(C::Type)),
    (P::MustDefineEitherDimensionExpressionsOrInitializer, Is(C::Internal)),
    (P::MustSpecifyPackage, Is(C::Internal)),
    (P::NamedPatternVariablesDisallowedHere, Is(C::Internal)),
    (P::NativeMethodsCannotBeStrictfp, Is(C::Member)),
    (P::NeedToEmulateConstructorAccess, Is(C::CodeStyle)),
    (P::NeedToEmulateFieldReadAccess, Is(C::CodeStyle)),
    (P::NeedToEmulateFieldWriteAccess, Is(C::CodeStyle)),
    (P::NeedToEmulateMethodAccess, Is(C::CodeStyle)),
    (P::NestedServiceImpl, Is(C::Type)),
    (P::NoAdditionalBoundAfterTypeVariable, Is(C::Type)),
    (P::NoFieldOnBaseType, Is(C::Member)),
    (P::NoGenericLambda, Is(C::Type)),
    (P::NoImplicitStringConversionForCharArrayExpression, Is(C::PotentialProgrammingProblem)),
    (P::NoMessageSendOnArrayType, Is(C::Member)),
    (P::NoMessageSendOnBaseType, Is(C::Member)),
    (P::NoSuperInInterfaceContext, Is(C::Syntax)),
    (P::NonBlankFinalLocalAssignment, Is(C::Internal)),
    (P::NonConstantExpression, Is(C::Internal)),
    (P::NonDenotableTypeArgumentForAnonymousDiamond, Is(C::Type)),
    (P::NonExternalizedStringLiteral, Is(C::Nls)),
    (P::NonGenericConstructor, Is(C::Type)),
    (P::NonGenericMethod, Is(C::Type)),
    (P::NonGenericType, Is(C::Type)),
    (P::NonNullArrayContentNotInitialized, Is(C::PotentialProgrammingProblem)),
    (P::NonNullDefaultDetailIsNotEvaluated, Is(C::Internal)),
    (P::NonNullExpressionComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::NonNullLocalVariableComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::NonNullMessageSendComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::NonNullMethodTypeVariableFromLegacyMethod, Is(C::PotentialProgrammingProblem)),
    (P::NonNullSpecdFieldComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::NonNullTypeVariableFromLegacyMethod, Is(C::PotentialProgrammingProblem)),
    (P::NonPublicTypeInAPI, Is(C::PotentialProgrammingProblem)),
    (P::NonStaticAccessToStaticField, Is(C::CodeStyle)),
    (P::NonStaticAccessToStaticMethod, Is(C::CodeStyle)),
    (P::NonStaticContextForEnumMemberType, Is(C::Internal)),
    (P::NonStaticFieldFromStaticInvocation, Is(C::Member)),
    (P::NonStaticOrAlienTypeReceiver, Is(C::Member)),
    (P::NonStaticTypeFromStaticInvocation, Is(C::Internal)),
    (P::NotAccessibleConstructor, Is(C::Member)),
    (P::NotAccessibleField, Is(C::Member)),
    (P::NotAccessibleMethod, Is(C::Member)),
    (P::NotAccessiblePackage, Is(C::Import)),
    (P::NotAccessibleType, Is(C::Type)),
    (P::NotAnnotationType, Is(C::Type)),
    (P::NotExportedTypeInAPI, Is(C::PotentialProgrammingProblem)),
    (P::NotOwningResourceField, Is(C::PotentialProgrammingProblem)),
    (P::NotVisibleConstructor, Is(C::Member)),
    (P::NotVisibleConstructorInDefaultConstructor, Is(C::Member)),
    (P::NotVisibleConstructorInImplicitConstructorCall, Is(C::Member)),
    (P::NotVisibleField, Is(C::Member)),
    (P::NotVisibleMethod, Is(C::Member)),
    (P::NotVisibleType, Is(C::Type)),
    (P::NullAnnotationAtQualifyingType, Is(C::Syntax)),
    (P::NullAnnotationUnsupportedLocation, Is(C::Internal)),
    (P::NullAnnotationUnsupportedLocationAtType, Is(C::Internal)),
    (P::NullExpressionReference, Is(C::PotentialProgrammingProblem)),
    (P::NullLocalVariableComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::NullLocalVariableInstanceofYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::NullLocalVariableReference, Is(C::PotentialProgrammingProblem)),
    (P::NullNotCompatibleToFreeTypeVariable, Is(C::PotentialProgrammingProblem)),
    (P::NullSourceString, Is(C::Syntax)),
    (P::NullUnboxing, Is(C::PotentialProgrammingProblem)),
    (P::NullableFieldReference, Is(C::PotentialProgrammingProblem)),
    (P::NullityMismatchAgainstFreeTypeVariable, Is(C::PotentialProgrammingProblem)),
    (P::NullityMismatchTypeArgument, Is(C::PotentialProgrammingProblem)),
    (P::NullityMismatchingTypeAnnotation, Is(C::PotentialProgrammingProblem)),
    (P::NullityMismatchingTypeAnnotationSuperHint, Is(C::PotentialProgrammingProblem)),
    (P::NullityUncheckedTypeAnnotation, Is(C::PotentialProgrammingProblem)),
    (P::NullityUncheckedTypeAnnotationDetail, Is(C::PotentialProgrammingProblem)),
    (P::NullityUncheckedTypeAnnotationDetailSuperHint, Is(C::PotentialProgrammingProblem)),
    (P::NumericValueOutOfRange, Is(C::Internal)),
    (P::ObjectCannotBeGeneric, Is(C::Internal)),
    (P::ObjectCannotHaveSuperTypes, Is(C::Internal)),
    (P::ObjectHasNoSuperclass, Is(C::Type)),
    (P::ObjectMustBeClass, Is(C::Internal)),
    (P::OperandStackExceeds64KLimit, Is(C::Internal)),
    (P::OperandStackSizeInappropriate, Is(C::Internal)),
    (P::OuterLocalMustBeEffectivelyFinal, Is(C::Internal)),
    (P::OuterLocalMustBeFinal, Is(C::Internal)),
    (P::OverrideAddingReturnOwning, Is(C::PotentialProgrammingProblem)),
    (P::OverrideReducingParamterOwning, Is(C::PotentialProgrammingProblem)),
    (P::OverridingDeprecatedMethod, Is(C::Deprecation)),
    (P::OverridingDeprecatedSinceVersionMethod, Is(C::Deprecation)),
    (P::OverridingMethodWithoutSuperInvocation, Is(C::PotentialProgrammingProblem)),
    (P::OverridingNonVisibleMethod, Is(C::NameShadowingConflict)),
    (P::OverridingTerminallyDeprecatedMethod, Is(C::Deprecation)),
    (P::OverridingTerminallyDeprecatedSinceVersionMethod, Is(C::Deprecation)),
    (P::OwningFieldInNonResourceClass, Is(C::PotentialProgrammingProblem)),
    (P::OwningFieldShouldImplementClose, Is(C::PotentialProgrammingProblem)),
    (P::PackageCollidesWithType, Is(C::Type)),
    (P::PackageDoesNotExistOrIsEmpty, Is(C::Module)),
    (P::PackageIsNotExpectedPackage, Is(C::Internal)),
    (P::ParameterAssignment, Is(C::CodeStyle)),
    (P::ParameterLackingNonNullAnnotation, Is(C::PotentialProgrammingProblem)),
    (P::ParameterLackingNullableAnnotation, Is(C::PotentialProgrammingProblem)),
    (P::ParameterMismatch, Is(C::Member)),
    (P::ParameterizedConstructorArgumentTypeMismatch, Is(C::Type)),
    (P::ParameterizedMethodArgumentTypeMismatch, Is(C::Type)),
    (P::ParsingError, Is(C::Syntax)),
    (P::ParsingErrorDeleteToken, Is(C::Syntax)),
    (P::ParsingErrorDeleteTokens, Is(C::Syntax)),
    (P::ParsingErrorInsertToComplete, Is(C::Syntax)),
    (P::ParsingErrorInsertToCompletePhrase, Is(C::Syntax)),
    (P::ParsingErrorInsertToCompleteScope, Is(C::Syntax)),
    (P::ParsingErrorInsertTokenAfter, Is(C::Syntax)),
    (P::ParsingErrorInsertTokenBefore, Is(C::Syntax)),
    (P::ParsingErrorInvalidToken, Is(C::Syntax)),
    (P::ParsingErrorMergeTokens, Is(C::Syntax)),
    (P::ParsingErrorMisplacedConstruct, Is(C::Syntax)),
    (P::ParsingErrorNoSuggestion, Is(C::Syntax)),
    (P::ParsingErrorNoSuggestionForTokens, Is(C::Syntax)),
    (P::ParsingErrorOnKeyword, Is(C::Syntax)),
    (P::ParsingErrorOnKeywordNoSuggestion, Is(C::Syntax)),
    (P::ParsingErrorReplaceTokens, Is(C::Syntax)),
    (P::ParsingErrorUnexpectedEOF, Is(C::Syntax)),
    (P::PatternDominated, Is(C::PreviewRelated)),
    (P::PatternSubtypeOfExpression, Is(C::Internal)),
    (P::PatternSwitchCaseDefaultOnlyAsSecond, Is(C::PreviewRelated)),
    (P::PatternSwitchNullOnlyOrFirstWithDefault, Is(C::PreviewRelated)),
    (P::PatternTypeMismatch, Is(C::PreviewRelated)),
    (P::PatternVariableNotInScope, Is(C::PreviewRelated)),
    (P::PatternVariableRedeclared, Is(C::Internal)),
    (P::PatternVariableRedefined, Is(C::Internal)),
    (P::PolymorphicMethodNotBelow17, Is(C::Member)),
    (P::PossibleAccidentalBooleanAssignment, Is(C::PotentialProgrammingProblem)),
    (P::PotentialHeapPollutionFromVararg, Is(C::UncheckedRaw)),
    (P::PotentialNullExpressionReference, Is(C::PotentialProgrammingProblem)),
    (P::PotentialNullLocalVariableReference, Is(C::PotentialProgrammingProblem)),
    (P::PotentialNullMessageSendReference, Is(C::PotentialProgrammingProblem)),
    (P::PotentialNullUnboxing, Is(C::PotentialProgrammingProblem)),
    (P::PotentiallyUnclosedCloseable, Is(C::PotentialProgrammingProblem)),
    (P::PotentiallyUnclosedCloseableAtExit, Is(C::PotentialProgrammingProblem)),
    (P::PreviewAPIUsed, Is(C::Compliance)),
    (P::PreviewFeatureDisabled, Is(C::Compliance)),
    (P::PreviewFeatureNotSupported, Is(C::Compliance)),
    (P::PreviewFeatureUsed, Is(C::Compliance)),
    (P::PreviewFeaturesNotAllowed, Is(C::PreviewRelated)),
    (P::ProblemNotAnalysed, Is(C::UnnecessaryCode)),
    (P::ProviderMethodOrConstructorRequiredForServiceImpl, Is(C::Type)),
    (P::PublicClassMustMatchFileName, Is(C::Type)),
    (P::RawMemberTypeCannotBeParameterized, Is(C::Type)),
    (P::RawTypeInRecordPattern, Is(C::PreviewRelated)),
    (P::RawTypeReference, Is(C::UncheckedRaw)),
    (P::RecordAccessorMethodHasThrowsClause, Is(C::Type)),
    (P::RecordAccessorMethodShouldBePublic, Is(C::Type)),
    (P::RecordAccessorMethodShouldNotBeGeneric, Is(C::Type)),
    (P::RecordAccessorMethodShouldNotBeStatic, Is(C::Type)),
    (P::RecordCannotDefineRecordInLocalType, Is(C::Type)),
    (P::RecordCannotExtendRecord, Is(C::Type)),
    (P::RecordCanonicalConstructorHasExplicitConstructorCall, Is(C::Type)),
    (P::RecordCanonicalConstructorHasReturnStatement, Is(C::Type)),
    (P::RecordCanonicalConstructorHasThrowsClause, Is(C::Type)),
    (P::RecordCanonicalConstructorShouldNotBeGeneric, Is(C::Type)),
    (P::RecordCanonicalConstructorVisibilityReduced, Is(C::Type)),
    (P::RecordCompactConstructorHasExplicitConstructorCall, Is(C::Type)),
    (P::RecordCompactConstructorHasReturnStatement, Is(C::Type)),
    (P::RecordComponentCannotBeVoid, Is(C::Type)),
    (P::RecordComponentsCannotHaveModifiers, Is(C::Type)),
    (P::RecordDuplicateComponent, Is(C::Type)),
    (P::RecordErasureIncompatibilityInCanonicalConstructor, Is(C::Type)),
    (P::RecordIllegalAccessorReturnType, Is(C::Type)),
    (P::RecordIllegalComponentNameInRecord, Is(C::Type)),
    (P::RecordIllegalExplicitFinalFieldAssignInCompactConstructor, Is(C::Type)),
    (P::RecordIllegalExtendedDimensionsForRecordComponent, Is(C::Syntax)),
    (P::RecordIllegalModifierForInnerRecord, Is(C::Type)),
    (P::RecordIllegalModifierForLocalRecord, Is(C::Type)),
    (P::RecordIllegalModifierForRecord, Is(C::Type)),
    (P::RecordIllegalNativeModifierInRecord, Is(C::Type)),
    (P::RecordIllegalParameterNameInCanonicalConstructor, Is(C::Type)),
    (P::RecordIllegalStaticModifierForLocalClassOrInterface, Is(C::Type)),
    (P::RecordIllegalVararg, Is(C::Type)),
    (P::RecordInstanceInitializerBlockInRecord, Is(C::Type)),
    (P::RecordMissingExplicitConstructorCallInNonCanonicalConstructor, Is(C::Type)),
    (P::RecordMultipleCanonicalConstructors, Is(C::Type)),
    (P::RecordNestedRecordInherentlyStatic, Is(C::Type)),
    (P::RecordNonStaticFieldDeclarationInRecord, Is(C::Type)),
    (P::RecordPatternMismatch, Is(C::PreviewRelated)),
    (P::RecordStaticReferenceToOuterLocalVariable, Is(C::Type)),
    (P::RecursiveConstructorInvocation, Is(C::Member)),
    (P::RedefinedArgument, Is(C::Internal)),
    (P::RedefinedLocal, Is(C::Internal)),
    (P::RedundantLocalVariableNullAssignment, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullAnnotation, Is(C::UnnecessaryCode)),
    (P::RedundantNullCheckAgainstNonNullType, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnConstNonNullField, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnField, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnNonNullExpression, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnNonNullLocalVariable, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnNonNullMessageSend, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnNonNullSpecdField, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnNullLocalVariable, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullCheckOnSpecdNonNullLocalVariable, Is(C::PotentialProgrammingProblem)),
    (P::RedundantNullDefaultAnnotation, Is(C::UnnecessaryCode)),
    (P::RedundantNullDefaultAnnotationField, Is(C::UnnecessaryCode)),
    (P::RedundantNullDefaultAnnotationLocal, Is(C::UnnecessaryCode)),
    (P::RedundantNullDefaultAnnotationMethod, Is(C::UnnecessaryCode)),
    (P::RedundantNullDefaultAnnotationModule, Is(C::UnnecessaryCode)),
    (P::RedundantNullDefaultAnnotationPackage, Is(C::UnnecessaryCode)),
    (P::RedundantNullDefaultAnnotationType, Is(C::UnnecessaryCode)),
    (P::RedundantSpecificationOfTypeArguments, Is(C::UnnecessaryCode)),
    (P::RedundantSuperinterface, Is(C::UnnecessaryCode)),
    (P::ReferenceExpressionParameterNullityMismatch, Is(C::PotentialProgrammingProblem)),
    (P::ReferenceExpressionParameterNullityUnchecked, Is(C::PotentialProgrammingProblem)),
    (P::ReferenceExpressionReturnNullRedef, Is(C::PotentialProgrammingProblem)),
    (P::ReferenceExpressionReturnNullRedefUnchecked, Is(C::PotentialProgrammingProblem)),
    (P::ReferenceToForwardField, Is(C::Member)),
    (P::ReferenceToForwardTypeVariable, Is(C::Type)),
    (P::RepeatableAnnotationTypeIsDocumented, Is(C::Type)),
    (P::RepeatableAnnotationTypeIsInherited, Is(C::Type)),
    (P::RepeatableAnnotationTypeTargetMismatch, Is(C::Type)),
    (P::RepeatableAnnotationWithRepeatingContainerAnnotation, Is(C::Type)),
    (P::RepeatedAnnotationWithContainerAnnotation, Is(C::Type)),
    (P::RequiredNonNullButProvidedFreeTypeVariable, Is(C::PotentialProgrammingProblem)),
    (P::RequiredNonNullButProvidedNull, Is(C::PotentialProgrammingProblem)),
    (P::RequiredNonNullButProvidedPotentialNull, Is(C::PotentialProgrammingProblem)),
    (P::RequiredNonNullButProvidedSpecdNullable, Is(C::PotentialProgrammingProblem)),
    (P::RequiredNonNullButProvidedUnknown, Is(C::PotentialProgrammingProblem)),
    (P::ResourceHasToImplementAutoCloseable, Is(C::Type)),
    (P::ResourceIsNotAValue, Is(C::Internal)),
    (P::RestrictedTypeName, Is(C::Type)),
    (P::ReturnTypeAmbiguous, Deprecated),
    (P::ReturnTypeCannotBeVoidArray, Deprecated),
    (P::ReturnTypeInheritedNameHidesEnclosingName, Deprecated),
    (P::ReturnTypeInternalNameProvided, Deprecated),
    (P::ReturnTypeMismatch, Is(C::Type)),
    (P::ReturnTypeNotFound, Deprecated),
    (P::ReturnTypeNotVisible, Deprecated),
    (P::SafeVarargsOnFixedArityMethod, Is(C::Member)),
    (P::SafeVarargsOnNonFinalInstanceMethod, Is(C::Member)),
    (P::SafeVarargsOnSyntheticRecordAccessor, Is(C::Type)),
    (P::SealedAnonymousClassCannotExtendSealedType, Is(C::Type)),
    (P::SealedDisAllowedNonSealedModifierInClass, Is(C::Type)),
    (P::SealedDisAllowedNonSealedModifierInInterface, Is(C::Type)),
    (P::SealedDuplicateTypeInPermits, Is(C::Type)),
    (P::SealedInterfaceIsSealedAndNonSealed, Is(C::Type)),
    (P::SealedLocalDirectSuperTypeSealed, Is(C::Type)),
    (P::SealedMissingClassModifier, Is(C::Type)),
    (P::SealedMissingInterfaceModifier, Is(C::Type)),
    (P::SealedMissingSealedModifier, Is(C::Type)),
    (P::SealedNotDirectSuperClass, Is(C::Type)),
    (P::SealedNotDirectSuperInterface, Is(C::Type)),
    (P::SealedPermittedTypeOutsideOfModule, Is(C::Type)),
    (P::SealedPermittedTypeOutsideOfPackage, Is(C::Type)),
    (P::SealedSealedTypeMissingPermits, Is(C::Type)),
    (P::SealedSuperClassDoesNotPermit, Is(C::Type)),
    (P::SealedSuperInterfaceDoesNotPermit, Is(C::Type)),
    (P::SealedSuperTypeDisallowed, Is(C::Type)),
    (P::SealedSuperTypeInDifferentPackage, Is(C::Type)),
    (P::ServiceImplDefaultConstructorNotPublic, Is(C::Type)),
    (P::ServiceImplNotDefinedByModule, Is(C::Type)),
    (P::ShouldImplementHashcode, Is(C::PotentialProgrammingProblem)),
    (P::ShouldMarkMethodAsOwning, Is(C::PotentialProgrammingProblem)),
    (P::ShouldReturnValue, Is(C::Member)),
    (P::ShouldReturnValueHintMissingDefault, Is(C::Member)),
    (P::SpecdNonNullLocalVariableComparisonYieldsFalse, Is(C::PotentialProgrammingProblem)),
    (P::StaticInheritedMethodConflicts, Is(C::Member)),
    (P::StaticInterfaceMethodNotBelow18, Is(C::Syntax)),
    (P::StaticMemberOfParameterizedType, Is(C::Type)),
    (P::StaticMethodRequested, Is(C::Member)),
    (P::StaticMethodShouldBeAccessedStatically, Is(C::Member)),
    (P::StaticResourceField, Is(C::PotentialProgrammingProblem)),
    (P::StrictfpNotRequired, Is(C::Syntax)),
    (P::StringConstantIsExceedingUtf8Limit, Is(C::Internal)),
    (P::SuperAccessCannotBypassDirectSuper, Is(C::Type)),
    (P::SuperCallCannotBypassOverride, Is(C::Member)),
    (P::SuperInterfaceMustBeAnInterface, Is(C::Type)),
    (P::SuperInterfacesCollide, Is(C::Type)),
    (P::SuperTypeUsingWildcard, Is(C::Type)),
    (P::SuperclassAmbiguous, Deprecated),
    (P::SuperclassInheritedNameHidesEnclosingName, Deprecated),
    (P::SuperclassInternalNameProvided, Deprecated),
    (P::SuperclassMustBeAClass, Is(C::Type)),
    (P::SuperclassNotFound, Deprecated),
    (P::SuperclassNotVisible, Deprecated),
    (P::SuperfluousSemicolon, Is(C::PotentialProgrammingProblem)),
    (P::SwitchExpressionBreakMissingValue, Is(C::Internal)),
    (P::SwitchExpressionIllegalLastStatement, Is(C::Internal)),
    (P::SwitchExpressionLastStatementCompletesNormally, Is(C::Internal)),
    (P::SwitchExpressionMissingDefaultCase, Is(C::Internal)),
    (P::SwitchExpressionMissingEnumConstantCase, Is(C::Internal)),
    (P::SwitchExpressionSwitchLabeledBlockCompletesNormally, Is(C::Internal)),
    (P::SwitchExpressionTrailingSwitchLabels, Is(C::Internal)),
    (P::SwitchExpressionaYieldSwitchLabeledBlockCompletesNormally, Is(C::Internal)),
    (P::SwitchExpressionsBreakOutOfSwitchExpression, Is(C::Syntax)),
    (P::SwitchExpressionsContinueOutOfSwitchExpression, Is(C::Syntax)),
    (P::SwitchExpressionsEmptySwitchBlock, Is(C::Internal)),
    (P::SwitchExpressionsIncompatibleResultExpressionTypes, Is(C::Type)),
    (P::SwitchExpressionsNoResultExpression, Is(C::Type)),
    (P::SwitchExpressionsNotSupported, Is(C::Syntax)),
    (P::SwitchExpressionsReturnWithinSwitchExpression, Is(C::Syntax)),
    (P::SwitchExpressionsYieldBreakNotAllowed, Is(C::Syntax)),
    (P::SwitchExpressionsYieldEmptySwitchBlock, Is(C::Syntax)),
    (P::SwitchExpressionsYieldIllegalLastStatement, Is(C::Internal)),
    (P::SwitchExpressionsYieldIllegalStatement, Is(C::Internal)),
    (P::SwitchExpressionsYieldIncompatibleResultExpressionTypes, Is(C::Type)),
    (P::SwitchExpressionsYieldLastStatementCompletesNormally, Is(C::Internal)),
    (P::SwitchExpressionsYieldMissingDefaultCase, Is(C::Syntax)),
    (P::SwitchExpressionsYieldMissingEnumConstantCase, Is(C::Syntax)),
    (P::SwitchExpressionsYieldMissingValue, Is(C::Syntax)),
    (P::SwitchExpressionsYieldNoResultExpression, Is(C::Internal)),
    (P::SwitchExpressionsYieldOutsideSwitchExpression, Is(C::Syntax)),
    (P::SwitchExpressionsYieldRestrictedGeneralWarning, Is(C::Internal)),
    (P::SwitchExpressionsYieldTrailingSwitchLabels, Is(C::Internal)),
    (P::SwitchExpressionsYieldTypeDeclarationError, Is(C::Internal)),
    (P::SwitchExpressionsYieldTypeDeclarationWarning, Is(C::Internal)),
    (P::SwitchExpressionsYieldUnqualifiedMethodError, Is(C::Syntax)),
    (P::SwitchExpressionsYieldUnqualifiedMethodWarning, Is(C::Syntax)),
    (P::SwitchOnEnumNotBelow15, Is(C::Type)),
    (P::SwitchOnStringsNotBelow17, Is(C::Type)),
    (P::SwitchPreviewMixedCase, Is(C::Syntax)),
    (P::SyntheticAccessorNotEnclosingMethod, Is(C::CodeStyle)),
    (P::TargetTypeNotAFunctionalInterface, Is(C::Type)),
    (P::Task, Is(C::Internal)),
    (P::ThisInStaticContext, Is(C::Internal)),
    (P::ThisSuperDuringConstructorInvocation, Is(C::Member)),
    (P::ToleratedMisplacedTypeAnnotations, Is(C::Syntax)),
    (P::TooManyArgumentSlots, Is(C::Internal)),
    (P::TooManyArrayDimensions, Is(C::Internal)),
    (P::TooManyBytesForStringConstant, Is(C::Internal)),
    (P::TooManyConstantsInConstantPool, Is(C::Internal)),
    (P::TooManyFields, Is(C::Internal)),
    (P::TooManyLocalVariableSlots, Is(C::Internal)),
    (P::TooManyMethods, Is(C::Internal)),
    (P::TooManyParametersForSyntheticMethod, Is(C::Internal)),
    (P::TooManySyntheticArgumentSlots, Is(C::Internal)),
    (P::TypeAnnotationAtQualifiedName, Is(C::Syntax)),
    (P::TypeArgumentMismatch, Is(C::Type)),
    (P::TypeArgumentsForRawGenericConstructor, Is(C::Type)),
    (P::TypeArgumentsForRawGenericMethod, Is(C::Type)),
    (P::TypeCollidesWithPackage, Is(C::Type)),
    (P::TypeHidingType, Is(C::NameShadowingConflict)),
    (P::TypeHidingTypeParameterFromMethod, Is(C::NameShadowingConflict)),
    (P::TypeHidingTypeParameterFromType, Is(C::NameShadowingConflict)),
    (P::TypeMismatch, Is(C::Type)),
    (P::TypeMissingDeprecatedAnnotation, Is(C::CodeStyle)),
    (P::TypeParameterHidingType, Is(C::NameShadowingConflict)),
    (P::UnboxingConversion, Is(C::CodeStyle)),
    (P::UncheckedAccessOfValueOfFreeTypeVariable, Is(C::PotentialProgrammingProblem)),
    (P::UnclosedCloseable, Is(C::PotentialProgrammingProblem)),
    (P::UnclosedCloseableAtExit, Is(C::PotentialProgrammingProblem)),
    (P::UndefinedAnnotationMember, Is(C::Member)),
    (P::UndefinedConstructor, Is(C::Member)),
    (P::UndefinedConstructorInDefaultConstructor, Is(C::Member)),
    (P::UndefinedConstructorInImplicitConstructorCall, Is(C::Member)),
    (P::UndefinedField, Is(C::Member)),
    (P::UndefinedLabel, Is(C::Internal)),
    (P::UndefinedMethod, Is(C::Member)),
    (P::UndefinedModule, Is(C::Module)),
    (P::UndefinedModuleAddReads, Is(C::Buildpath)),
    (P::UndefinedName, Is(C::Member)),
    (P::UndefinedType, Is(C::Type)),
    (P::UndefinedTypeVariable, Is(C::Internal)),
    (P::UnderscoreCannotBeUsedHere, Is(C::PreviewRelated)),
    (P::UnderscoresInLiteralsNotBelow17, Is(C::Syntax)),
    (P::UndocumentedEmptyBlock, Is(C::CodeStyle)),
    (P::UnexpectedStaticModifierForField, Is(C::Member)),
    (P::UnexpectedStaticModifierForMethod, Is(C::Member)),
    (P::UnexpectedTypeinRecordPattern, Is(C::PreviewRelated)),
    (P::UnexpectedTypeinSwitchPattern, Is(C::PreviewRelated)),
    (P::UnhandledException, Is(C::Type)),
    (P::UnhandledExceptionInDefaultConstructor, Is(C::Type)),
    (P::UnhandledExceptionInImplicitConstructorCall, Is(C::Type)),
    (P::UnhandledExceptionOnAutoClose, Is(C::Type)),
    (P::UnhandledWarningToken, Is(C::UnnecessaryCode)),
    (P::UninitializedBlankFinalField, Is(C::Member)),
    (P::UninitializedBlankFinalFieldHintMissingDefault, Is(C::Member)),
    (P::UninitializedFreeTypeVariableField, Is(C::PotentialProgrammingProblem)),
    (P::UninitializedFreeTypeVariableFieldHintMissingDefault, Is(C::PotentialProgrammingProblem)),
    (P::UninitializedLocalVariable, Is(C::Internal)),
    (P::UninitializedLocalVariableHintMissingDefault, Is(C::Internal)),
    (P::UninitializedNonNullField, Is(C::PotentialProgrammingProblem)),
    (P::UninitializedNonNullFieldHintMissingDefault, Is(C::PotentialProgrammingProblem)),
    (P::UninternedIdentityComparison, Is(C::Syntax)),
    (P::UnlikelyCollectionMethodArgumentType, Is(C::PotentialProgrammingProblem)),
    (P::UnlikelyEqualsArgumentType, Is(C::PotentialProgrammingProblem)),
    (P::UnmatchedBracket, Is(C::Syntax)),
    (P::UnnamedPackageInNamedModule, Is(C::Module)),
    (P::UnnamedVariableMustHaveInitializer, Is(C::PreviewRelated)),
    (P::UnnecessaryArgumentCast, Deprecated),
    (P::UnnecessaryCast, Is(C::UnnecessaryCode)),
    (P::UnnecessaryElse, Is(C::UnnecessaryCode)),
    (P::UnnecessaryInstanceof, Is(C::UnnecessaryCode)),
    (P::UnnecessaryNLSTag, Is(C::Nls)),
    (P::UnnecessaryNullCaseInSwitchOverNonNull, Is(C::PotentialProgrammingProblem)),
    (P::UnqualifiedFieldAccess, Is(C::CodeStyle)),
    (P::UnreachableCatch, Is(C::Type)),
    (P::UnresolvedVariable, Is(C::Member)),
    (P::UnsafeCast, Is(C::Type)),
    (P::UnsafeElementTypeConversion, Is(C::UncheckedRaw)),
    (P::UnsafeGenericArrayForVarargs, Is(C::UncheckedRaw)),
    (P::UnsafeGenericCast, Is(C::UncheckedRaw)),
    (P::UnsafeNullnessCast, Is(C::PotentialProgrammingProblem)),
    (P::UnsafeRawConstructorInvocation, Is(C::UncheckedRaw)),
    (P::UnsafeRawFieldAssignment, Is(C::UncheckedRaw)),
    (P::UnsafeRawGenericConstructorInvocation, Is(C::UncheckedRaw)),
    (P::UnsafeRawGenericMethodInvocation, Is(C::UncheckedRaw)),
    (P::UnsafeRawMethodInvocation, Is(C::UncheckedRaw)),
    (P::UnsafeReturnTypeOverride, Is(C::UncheckedRaw)),
    (P::UnsafeTypeConversion, Is(C::UncheckedRaw)),
    (P::UnstableAutoModuleName, Is(C::PotentialProgrammingProblem)),
    (P::UnterminatedComment, Is(C::Syntax)),
    (P::UnterminatedString, Is(C::Syntax)),
    (P::UnterminatedTextBlock, Is(C::PreviewRelated)),
    (P::UnusedConstructorDeclaredThrownException, Is(C::UnnecessaryCode)),
    (P::UnusedImport, Is(C::UnnecessaryCode)),
    (P::UnusedLabel, Is(C::UnnecessaryCode)),
    (P::UnusedMethodDeclaredThrownException, Is(C::UnnecessaryCode)),
    (P::UnusedObjectAllocation, Is(C::PotentialProgrammingProblem)),
    (P::UnusedPrivateConstructor, Is(C::UnnecessaryCode)),
    (P::UnusedPrivateField, Is(C::UnnecessaryCode)),
    (P::UnusedPrivateMethod, Is(C::UnnecessaryCode)),
    (P::UnusedPrivateType, Is(C::UnnecessaryCode)),
    (P::UnusedTypeArgumentsForConstructorInvocation, Is(C::Member)),
    (P::UnusedTypeArgumentsForMethodInvocation, Is(C::Member)),
    (P::UnusedTypeParameter, Is(C::UnnecessaryCode)),
    (P::UnusedWarningToken, Is(C::UnnecessaryCode)),
    (P::UseAssertAsAnIdentifier, Is(C::CodeStyle)),
    (P::UseEnumAsAnIdentifier, Is(C::CodeStyle)),
    (P::UsingDeprecatedConstructor, Is(C::Deprecation)),
    (P::UsingDeprecatedField, Is(C::Deprecation)),
    (P::UsingDeprecatedMethod, Is(C::Deprecation)),
    (P::UsingDeprecatedModule, Is(C::Deprecation)),
    (P::UsingDeprecatedPackage, Is(C::Module)),
    (P::UsingDeprecatedSinceVersionConstructor, Is(C::Deprecation)),
    (P::UsingDeprecatedSinceVersionField, Is(C::Deprecation)),
    (P::UsingDeprecatedSinceVersionMethod, Is(C::Deprecation)),
    (P::UsingDeprecatedSinceVersionModule, Is(C::Deprecation)),
    (P::UsingDeprecatedSinceVersionPackage, Is(C::Module)),
    (P::UsingDeprecatedSinceVersionType, Is(C::Deprecation)),
    (P::UsingDeprecatedType, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedConstructor, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedField, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedMethod, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedModule, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedPackage, Is(C::Module)),
    (P::UsingTerminallyDeprecatedSinceVersionConstructor, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedSinceVersionField, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedSinceVersionMethod, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedSinceVersionModule, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedSinceVersionPackage, Is(C::Module)),
    (P::UsingTerminallyDeprecatedSinceVersionType, Is(C::Deprecation)),
    (P::UsingTerminallyDeprecatedType, Is(C::Deprecation)),
    (P::VarCannotBeMixedWithNonVarParams, Is(C::Syntax)),
    (P::VarCannotBeUsedWithTypeArguments, Is(C::Syntax)),
    (P::VarIsNotAllowedHere, Is(C::Syntax)),
    (P::VarIsReserved, Is(C::Syntax)),
    (P::VarIsReservedInFuture, Is(C::Syntax)),
    (P::VarLocalCannotBeArray, Is(C::Syntax)),
    (P::VarLocalCannotBeArrayInitalizers, Is(C::Type)),
    (P::VarLocalCannotBeLambda, Is(C::Type)),
    (P::VarLocalCannotBeMethodReference, Is(C::Type)),
    (P::VarLocalInitializedToNull, Is(C::Type)),
    (P::VarLocalInitializedToVoid, Is(C::Type)),
    (P::VarLocalMultipleDeclarators, Is(C::Syntax)),
    (P::VarLocalReferencesItself, Is(C::Syntax)),
    (P::VarLocalWithoutInitizalier, Is(C::Syntax)),
    (P::VarargsConflict, Is(C::Member)),
    (P::VarargsElementTypeNotVisible, Is(C::Member)),
    (P::VarargsElementTypeNotVisibleForConstructor, Is(C::Member)),
    (P::VariableTypeCannotBeVoid, Is(C::Internal)),
    (P::VariableTypeCannotBeVoidArray, Deprecated),
    (P::VoidMethodReturnsValue, Is(C::Member)),
    (P::WildcardConstructorInvocation, Is(C::Type)),
    (P::WildcardFieldAssignment, Is(C::Type)),
    (P::WildcardMethodInvocation, Is(C::Type)),
    (P::illFormedParameterizationOfFunctionalInterface, Is(C::Type)),
    (P::lambdaParameterTypeMismatched, Is(C::Type)),
    (P::lambdaSignatureMismatched, Is(C::Type)),
    (P::switchMixedCase, Is(C::Syntax)),
];
