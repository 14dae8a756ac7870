//! Declaration of every problem kind and its id.
//!
//! Ids are the bitwise OR of the category flags and the sequential index.
//! Entries marked `deprecated` are no longer reported but stay resolvable.

use super::id::*;

define_problems! {
    Unclassified = 0;
    ObjectHasNoSuperclass = TYPE_RELATED | 1;
    UndefinedType = TYPE_RELATED | 2;
    NotVisibleType = TYPE_RELATED | 3;
    AmbiguousType = TYPE_RELATED | 4;
    UsingDeprecatedType = TYPE_RELATED | 5;
    InternalTypeNameProvided = TYPE_RELATED | 6;
    UnusedPrivateType = INTERNAL | TYPE_RELATED | 7;
    IncompatibleTypesInEqualityOperator = TYPE_RELATED | 15;
    IncompatibleTypesInConditionalOperator = TYPE_RELATED | 16;
    TypeMismatch = TYPE_RELATED | 17;
    IndirectAccessToStaticType = INTERNAL | TYPE_RELATED | 18;
    ReturnTypeMismatch = TYPE_RELATED | 19;
    MissingEnclosingInstanceForConstructorCall = TYPE_RELATED | 20;
    MissingEnclosingInstance = TYPE_RELATED | 21;
    IncorrectEnclosingInstanceReference = TYPE_RELATED | 22;
    IllegalEnclosingInstanceSpecification = TYPE_RELATED | 23;
    CannotDefineStaticInitializerInLocalType = INTERNAL | 24;
    OuterLocalMustBeFinal = INTERNAL | 25;
    CannotDefineInterfaceInLocalType = INTERNAL | 26;
    IllegalPrimitiveOrArrayTypeForEnclosingInstance = TYPE_RELATED | 27;
    EnclosingInstanceInConstructorCall = INTERNAL | 28;
    AnonymousClassCannotExtendFinalClass = TYPE_RELATED | 29;
    CannotDefineAnnotationInLocalType = INTERNAL | 30;
    CannotDefineEnumInLocalType = INTERNAL | 31;
    NonStaticContextForEnumMemberType = INTERNAL | 32;
    TypeHidingType = TYPE_RELATED | 33;
    NotAnnotationType = TYPE_RELATED | 34;
    UndefinedName = INTERNAL | FIELD_RELATED | 50;
    UninitializedLocalVariable = INTERNAL | 51;
    VariableTypeCannotBeVoid = INTERNAL | 52;
    VariableTypeCannotBeVoidArray = INTERNAL | 53, deprecated;
    CannotAllocateVoidArray = INTERNAL | 54;
    RedefinedLocal = INTERNAL | 55;
    RedefinedArgument = INTERNAL | 56;
    DuplicateFinalLocalInitialization = INTERNAL | 57;
    NonBlankFinalLocalAssignment = INTERNAL | 58;
    ParameterAssignment = INTERNAL | 59;
    FinalOuterLocalAssignment = INTERNAL | 60;
    LocalVariableIsNeverUsed = INTERNAL | 61;
    ArgumentIsNeverUsed = INTERNAL | 62;
    BytecodeExceeds64KLimit = INTERNAL | 63;
    BytecodeExceeds64KLimitForClinit = INTERNAL | 64;
    TooManyArgumentSlots = INTERNAL | 65;
    TooManyLocalVariableSlots = INTERNAL | 66;
    TooManySyntheticArgumentSlots = INTERNAL | 67;
    TooManyArrayDimensions = INTERNAL | 68;
    BytecodeExceeds64KLimitForConstructor = INTERNAL | 69;
    UndefinedField = FIELD_RELATED | 70;
    NotVisibleField = FIELD_RELATED | 71;
    AmbiguousField = FIELD_RELATED | 72;
    UsingDeprecatedField = FIELD_RELATED | 73;
    NonStaticFieldFromStaticInvocation = FIELD_RELATED | 74;
    ReferenceToForwardField = INTERNAL | FIELD_RELATED | 75;
    NonStaticAccessToStaticField = INTERNAL | FIELD_RELATED | 76;
    UnusedPrivateField = INTERNAL | FIELD_RELATED | 77;
    IndirectAccessToStaticField = INTERNAL | FIELD_RELATED | 78;
    UnqualifiedFieldAccess = INTERNAL | FIELD_RELATED | 79;
    FinalFieldAssignment = FIELD_RELATED | 80;
    UninitializedBlankFinalField = FIELD_RELATED | 81;
    DuplicateBlankFinalFieldInitialization = FIELD_RELATED | 82;
    UnresolvedVariable = FIELD_RELATED | 83;
    NonStaticOrAlienTypeReceiver = METHOD_RELATED | 84;
    ExceptionParameterIsNeverUsed = INTERNAL | 85;
    BytecodeExceeds64KLimitForSwitchTable = INTERNAL | 86;
    OperandStackExceeds64KLimit = INTERNAL | 87;
    OperandStackSizeInappropriate = INTERNAL | 88;
    LocalVariableHidingLocalVariable = INTERNAL | 90;
    LocalVariableHidingField = INTERNAL | FIELD_RELATED | 91;
    FieldHidingLocalVariable = INTERNAL | FIELD_RELATED | 92;
    FieldHidingField = INTERNAL | FIELD_RELATED | 93;
    ArgumentHidingLocalVariable = INTERNAL | 94;
    ArgumentHidingField = INTERNAL | 95;
    MissingSerialVersion = INTERNAL | 96;
    LambdaRedeclaresArgument = INTERNAL | 97;
    LambdaRedeclaresLocal = INTERNAL | 98;
    LambdaDescriptorMentionsUnmentionable = 99;
    UndefinedMethod = METHOD_RELATED | 100;
    NotVisibleMethod = METHOD_RELATED | 101;
    AmbiguousMethod = METHOD_RELATED | 102;
    UsingDeprecatedMethod = METHOD_RELATED | 103;
    DirectInvocationOfAbstractMethod = METHOD_RELATED | 104;
    VoidMethodReturnsValue = METHOD_RELATED | 105;
    MethodReturnsVoid = METHOD_RELATED | 106;
    MethodRequiresBody = INTERNAL | METHOD_RELATED | 107;
    ShouldReturnValue = INTERNAL | METHOD_RELATED | 108;
    MethodButWithConstructorName = METHOD_RELATED | 110;
    MissingReturnType = TYPE_RELATED | 111;
    BodyForNativeMethod = INTERNAL | METHOD_RELATED | 112;
    BodyForAbstractMethod = INTERNAL | METHOD_RELATED | 113;
    NoMessageSendOnBaseType = METHOD_RELATED | 114;
    ParameterMismatch = METHOD_RELATED | 115;
    NoMessageSendOnArrayType = METHOD_RELATED | 116;
    NonStaticAccessToStaticMethod = INTERNAL | METHOD_RELATED | 117;
    UnusedPrivateMethod = INTERNAL | METHOD_RELATED | 118;
    IndirectAccessToStaticMethod = INTERNAL | METHOD_RELATED | 119;
    MissingTypeInMethod = METHOD_RELATED | 120;
    MethodCanBeStatic = INTERNAL | METHOD_RELATED | 121;
    MethodCanBePotentiallyStatic = INTERNAL | METHOD_RELATED | 122;
    MethodReferenceSwingsBothWays = INTERNAL | METHOD_RELATED | 123;
    StaticMethodShouldBeAccessedStatically = INTERNAL | METHOD_RELATED | 124;
    InvalidArrayConstructorReference = INTERNAL | METHOD_RELATED | 125;
    ConstructedArrayIncompatible = INTERNAL | METHOD_RELATED | 126;
    DanglingReference = INTERNAL | METHOD_RELATED | 127;
    IncompatibleMethodReference = INTERNAL | METHOD_RELATED | 128;
    MissingTypeInConstructor = CONSTRUCTOR_RELATED | 129;
    UndefinedConstructor = CONSTRUCTOR_RELATED | 130;
    NotVisibleConstructor = CONSTRUCTOR_RELATED | 131;
    AmbiguousConstructor = CONSTRUCTOR_RELATED | 132;
    UsingDeprecatedConstructor = CONSTRUCTOR_RELATED | 133;
    UnusedPrivateConstructor = INTERNAL | METHOD_RELATED | 134;
    InstanceFieldDuringConstructorInvocation = CONSTRUCTOR_RELATED | 135;
    InstanceMethodDuringConstructorInvocation = CONSTRUCTOR_RELATED | 136;
    RecursiveConstructorInvocation = CONSTRUCTOR_RELATED | 137;
    ThisSuperDuringConstructorInvocation = CONSTRUCTOR_RELATED | 138;
    InvalidExplicitConstructorCall = SYNTAX | CONSTRUCTOR_RELATED | 139;
    UndefinedConstructorInDefaultConstructor = CONSTRUCTOR_RELATED | 140;
    NotVisibleConstructorInDefaultConstructor = CONSTRUCTOR_RELATED | 141;
    AmbiguousConstructorInDefaultConstructor = CONSTRUCTOR_RELATED | 142;
    UndefinedConstructorInImplicitConstructorCall = CONSTRUCTOR_RELATED | 143;
    NotVisibleConstructorInImplicitConstructorCall = CONSTRUCTOR_RELATED | 144;
    AmbiguousConstructorInImplicitConstructorCall = CONSTRUCTOR_RELATED | 145;
    UnhandledExceptionInDefaultConstructor = TYPE_RELATED | 146;
    UnhandledExceptionInImplicitConstructorCall = TYPE_RELATED | 147;
    UnusedObjectAllocation = INTERNAL | 148;
    DeadCode = INTERNAL | 149;
    ArrayReferenceRequired = INTERNAL | 150;
    NoImplicitStringConversionForCharArrayExpression = INTERNAL | 151;
    StringConstantIsExceedingUtf8Limit = INTERNAL | 152;
    NonConstantExpression = INTERNAL | 153;
    NumericValueOutOfRange = INTERNAL | 154;
    IllegalCast = TYPE_RELATED | 156;
    InvalidClassInstantiation = TYPE_RELATED | 157;
    CannotDefineDimensionExpressionsWithInit = INTERNAL | 158;
    MustDefineEitherDimensionExpressionsOrInitializer = INTERNAL | 159;
    InvalidOperator = INTERNAL | 160;
    CodeCannotBeReached = INTERNAL | 161;
    CannotReturnInInitializer = INTERNAL | 162;
    InitializerMustCompleteNormally = INTERNAL | 163;
    InvalidVoidExpression = INTERNAL | 164;
    MaskedCatch = TYPE_RELATED | 165;
    DuplicateDefaultCase = INTERNAL | 166;
    UnreachableCatch = METHOD_RELATED | TYPE_RELATED | 167;
    UnhandledException = TYPE_RELATED | 168;
    IncorrectSwitchType = TYPE_RELATED | 169;
    DuplicateCase = FIELD_RELATED | 170;
    DuplicateLabel = INTERNAL | 171;
    InvalidBreak = INTERNAL | 172;
    InvalidContinue = INTERNAL | 173;
    UndefinedLabel = INTERNAL | 174;
    InvalidTypeToSynchronized = INTERNAL | 175;
    InvalidNullToSynchronized = INTERNAL | 176;
    CannotThrowNull = INTERNAL | 177;
    AssignmentHasNoEffect = INTERNAL | 178;
    PossibleAccidentalBooleanAssignment = INTERNAL | 179;
    SuperfluousSemicolon = INTERNAL | 180;
    UnnecessaryCast = INTERNAL | TYPE_RELATED | 181;
    UnnecessaryArgumentCast = INTERNAL | TYPE_RELATED | 182, deprecated;
    UnnecessaryInstanceof = INTERNAL | TYPE_RELATED | 183;
    FinallyMustCompleteNormally = INTERNAL | 184;
    UnusedMethodDeclaredThrownException = INTERNAL | 185;
    UnusedConstructorDeclaredThrownException = INTERNAL | 186;
    InvalidCatchBlockSequence = INTERNAL | TYPE_RELATED | 187;
    EmptyControlFlowStatement = INTERNAL | TYPE_RELATED | 188;
    UnnecessaryElse = INTERNAL | 189;
    NeedToEmulateFieldReadAccess = FIELD_RELATED | 190;
    NeedToEmulateFieldWriteAccess = FIELD_RELATED | 191;
    NeedToEmulateMethodAccess = METHOD_RELATED | 192;
    NeedToEmulateConstructorAccess = METHOD_RELATED | 193;
    FallthroughCase = INTERNAL | 194;
    InheritedMethodHidesEnclosingName = METHOD_RELATED | 195;
    InheritedFieldHidesEnclosingName = FIELD_RELATED | 196;
    InheritedTypeHidesEnclosingName = TYPE_RELATED | 197;
    IllegalUsageOfQualifiedTypeReference = SYNTAX | INTERNAL | 198;
    UnusedLabel = INTERNAL | 199;
    ThisInStaticContext = INTERNAL | 200;
    StaticMethodRequested = INTERNAL | METHOD_RELATED | 201;
    IllegalDimension = INTERNAL | 202;
    InvalidTypeExpression = INTERNAL | 203, deprecated;
    ParsingError = SYNTAX | INTERNAL | 204;
    ParsingErrorNoSuggestion = SYNTAX | INTERNAL | 205;
    InvalidUnaryExpression = SYNTAX | INTERNAL | 206;
    InterfaceCannotHaveConstructors = SYNTAX | INTERNAL | 207;
    ArrayConstantsOnlyInArrayInitializers = SYNTAX | INTERNAL | 208;
    ParsingErrorOnKeyword = SYNTAX | INTERNAL | 209;
    ParsingErrorOnKeywordNoSuggestion = SYNTAX | INTERNAL | 210;
    ComparingIdentical = INTERNAL | 211;
    UnsafeCast = TYPE_RELATED | 212;
    UnmatchedBracket = SYNTAX | INTERNAL | 220;
    NoFieldOnBaseType = FIELD_RELATED | 221;
    InvalidExpressionAsStatement = SYNTAX | INTERNAL | 222;
    ExpressionShouldBeAVariable = SYNTAX | INTERNAL | 223;
    MissingSemiColon = SYNTAX | INTERNAL | 224;
    InvalidParenthesizedExpression = SYNTAX | INTERNAL | 225;
    NoSuperInInterfaceContext = SYNTAX | INTERNAL | 226;
    ParsingErrorInsertTokenBefore = SYNTAX | INTERNAL | 230;
    ParsingErrorInsertTokenAfter = SYNTAX | INTERNAL | 231;
    ParsingErrorDeleteToken = SYNTAX | INTERNAL | 232;
    ParsingErrorDeleteTokens = SYNTAX | INTERNAL | 233;
    ParsingErrorMergeTokens = SYNTAX | INTERNAL | 234;
    ParsingErrorInvalidToken = SYNTAX | INTERNAL | 235;
    ParsingErrorMisplacedConstruct = SYNTAX | INTERNAL | 236;
    ParsingErrorReplaceTokens = SYNTAX | INTERNAL | 237;
    ParsingErrorNoSuggestionForTokens = SYNTAX | INTERNAL | 238;
    ParsingErrorUnexpectedEOF = SYNTAX | INTERNAL | 239;
    ParsingErrorInsertToComplete = SYNTAX | INTERNAL | 240;
    ParsingErrorInsertToCompleteScope = SYNTAX | INTERNAL | 241;
    ParsingErrorInsertToCompletePhrase = SYNTAX | INTERNAL | 242;
    EndOfSource = SYNTAX | INTERNAL | 250;
    InvalidHexa = SYNTAX | INTERNAL | 251;
    InvalidOctal = SYNTAX | INTERNAL | 252;
    InvalidCharacterConstant = SYNTAX | INTERNAL | 253;
    InvalidEscape = SYNTAX | INTERNAL | 254;
    InvalidInput = SYNTAX | INTERNAL | 255;
    InvalidUnicodeEscape = SYNTAX | INTERNAL | 256;
    InvalidFloat = SYNTAX | INTERNAL | 257;
    NullSourceString = SYNTAX | INTERNAL | 258;
    UnterminatedString = SYNTAX | INTERNAL | 259;
    UnterminatedComment = SYNTAX | INTERNAL | 260;
    NonExternalizedStringLiteral = INTERNAL | 261;
    InvalidDigit = SYNTAX | INTERNAL | 262;
    InvalidLowSurrogate = SYNTAX | INTERNAL | 263;
    InvalidHighSurrogate = SYNTAX | INTERNAL | 264;
    UnnecessaryNLSTag = INTERNAL | 265;
    InvalidBinary = SYNTAX | INTERNAL | 266;
    BinaryLiteralNotBelow17 = SYNTAX | INTERNAL | 267;
    IllegalUnderscorePosition = SYNTAX | INTERNAL | 268;
    UnderscoresInLiteralsNotBelow17 = SYNTAX | INTERNAL | 269;
    IllegalHexaLiteral = SYNTAX | INTERNAL | 270;
    MissingTypeInLambda = METHOD_RELATED | 271;
    UnterminatedTextBlock = PREVIEW_RELATED | 272;
    DiscouragedReference = TYPE_RELATED | 280;
    InterfaceCannotHaveInitializers = TYPE_RELATED | 300;
    DuplicateModifierForType = TYPE_RELATED | 301;
    IllegalModifierForClass = TYPE_RELATED | 302;
    IllegalModifierForInterface = TYPE_RELATED | 303;
    IllegalModifierForMemberClass = TYPE_RELATED | 304;
    IllegalModifierForMemberInterface = TYPE_RELATED | 305;
    IllegalModifierForLocalClass = TYPE_RELATED | 306;
    ForbiddenReference = TYPE_RELATED | 307;
    IllegalModifierCombinationFinalAbstractForClass = TYPE_RELATED | 308;
    IllegalVisibilityModifierForInterfaceMemberType = TYPE_RELATED | 309;
    IllegalVisibilityModifierCombinationForMemberType = TYPE_RELATED | 310;
    IllegalStaticModifierForMemberType = TYPE_RELATED | 311;
    SuperclassMustBeAClass = TYPE_RELATED | 312;
    ClassExtendFinalClass = TYPE_RELATED | 313;
    DuplicateSuperInterface = TYPE_RELATED | 314;
    SuperInterfaceMustBeAnInterface = TYPE_RELATED | 315;
    HierarchyCircularitySelfReference = TYPE_RELATED | 316;
    HierarchyCircularity = TYPE_RELATED | 317;
    HidingEnclosingType = TYPE_RELATED | 318;
    DuplicateNestedType = TYPE_RELATED | 319;
    CannotThrowType = TYPE_RELATED | 320;
    PackageCollidesWithType = TYPE_RELATED | 321;
    TypeCollidesWithPackage = TYPE_RELATED | 322;
    DuplicateTypes = TYPE_RELATED | 323;
    IsClassPathCorrect = TYPE_RELATED | 324;
    PublicClassMustMatchFileName = TYPE_RELATED | 325;
    MustSpecifyPackage = INTERNAL | 326, deprecated;
    HierarchyHasProblems = TYPE_RELATED | 327;
    PackageIsNotExpectedPackage = INTERNAL | 328;
    ObjectCannotHaveSuperTypes = INTERNAL | 329;
    ObjectMustBeClass = INTERNAL | 330;
    RedundantSuperinterface = TYPE_RELATED | 331;
    ShouldImplementHashcode = TYPE_RELATED | 332;
    AbstractMethodsInConcreteClass = TYPE_RELATED | 333;
    SuperclassNotFound = TYPE_RELATED | 330, deprecated;
    SuperclassNotVisible = TYPE_RELATED | 331, deprecated;
    SuperclassAmbiguous = TYPE_RELATED | 332, deprecated;
    SuperclassInternalNameProvided = TYPE_RELATED | 333, deprecated;
    SuperclassInheritedNameHidesEnclosingName = TYPE_RELATED | 334, deprecated;
    InterfaceNotFound = TYPE_RELATED | 335, deprecated;
    InterfaceNotVisible = TYPE_RELATED | 336, deprecated;
    InterfaceAmbiguous = TYPE_RELATED | 337, deprecated;
    InterfaceInternalNameProvided = TYPE_RELATED | 338, deprecated;
    InterfaceInheritedNameHidesEnclosingName = TYPE_RELATED | 339, deprecated;
    DuplicateField = FIELD_RELATED | 340;
    DuplicateModifierForField = FIELD_RELATED | 341;
    IllegalModifierForField = FIELD_RELATED | 342;
    IllegalModifierForInterfaceField = FIELD_RELATED | 343;
    IllegalVisibilityModifierCombinationForField = FIELD_RELATED | 344;
    IllegalModifierCombinationFinalVolatileForField = FIELD_RELATED | 345;
    UnexpectedStaticModifierForField = FIELD_RELATED | 346;
    IsClassPathCorrectWithReferencingType = TYPE_RELATED | 347;
    FieldTypeNotFound = FIELD_RELATED | 350, deprecated;
    FieldTypeNotVisible = FIELD_RELATED | 351, deprecated;
    FieldTypeAmbiguous = FIELD_RELATED | 352, deprecated;
    FieldTypeInternalNameProvided = FIELD_RELATED | 353, deprecated;
    FieldTypeInheritedNameHidesEnclosingName = FIELD_RELATED | 354, deprecated;
    DuplicateMethod = METHOD_RELATED | 355;
    IllegalModifierForArgument = METHOD_RELATED | 356;
    DuplicateModifierForMethod = METHOD_RELATED | 357;
    IllegalModifierForMethod = METHOD_RELATED | 358;
    IllegalModifierForInterfaceMethod = METHOD_RELATED | 359;
    IllegalVisibilityModifierCombinationForMethod = METHOD_RELATED | 360;
    UnexpectedStaticModifierForMethod = METHOD_RELATED | 361;
    IllegalAbstractModifierCombinationForMethod = METHOD_RELATED | 362;
    AbstractMethodInAbstractClass = METHOD_RELATED | 363;
    ArgumentTypeCannotBeVoid = METHOD_RELATED | 364;
    ArgumentTypeCannotBeVoidArray = METHOD_RELATED | 365, deprecated;
    ReturnTypeCannotBeVoidArray = METHOD_RELATED | 366, deprecated;
    NativeMethodsCannotBeStrictfp = METHOD_RELATED | 367;
    DuplicateModifierForArgument = METHOD_RELATED | 368;
    IllegalModifierForConstructor = METHOD_RELATED | 369;
    ArgumentTypeNotFound = METHOD_RELATED | 370, deprecated;
    ArgumentTypeNotVisible = METHOD_RELATED | 371, deprecated;
    ArgumentTypeAmbiguous = METHOD_RELATED | 372, deprecated;
    ArgumentTypeInternalNameProvided = METHOD_RELATED | 373, deprecated;
    ArgumentTypeInheritedNameHidesEnclosingName = METHOD_RELATED | 374, deprecated;
    ExceptionTypeNotFound = METHOD_RELATED | 375, deprecated;
    ExceptionTypeNotVisible = METHOD_RELATED | 376, deprecated;
    ExceptionTypeAmbiguous = METHOD_RELATED | 377, deprecated;
    ExceptionTypeInternalNameProvided = METHOD_RELATED | 378, deprecated;
    ExceptionTypeInheritedNameHidesEnclosingName = METHOD_RELATED | 379, deprecated;
    ReturnTypeNotFound = METHOD_RELATED | 380, deprecated;
    ReturnTypeNotVisible = METHOD_RELATED | 381, deprecated;
    ReturnTypeAmbiguous = METHOD_RELATED | 382, deprecated;
    ReturnTypeInternalNameProvided = METHOD_RELATED | 383, deprecated;
    ReturnTypeInheritedNameHidesEnclosingName = METHOD_RELATED | 384, deprecated;
    ConflictingImport = IMPORT_RELATED | 385;
    DuplicateImport = IMPORT_RELATED | 386;
    CannotImportPackage = IMPORT_RELATED | 387;
    UnusedImport = IMPORT_RELATED | 388;
    ImportNotFound = IMPORT_RELATED | 390;
    ImportNotVisible = IMPORT_RELATED | 391, deprecated;
    ImportAmbiguous = IMPORT_RELATED | 392, deprecated;
    ImportInternalNameProvided = IMPORT_RELATED | 393, deprecated;
    ImportInheritedNameHidesEnclosingName = IMPORT_RELATED | 394, deprecated;
    InvalidTypeForStaticImport = IMPORT_RELATED | 391;
    DuplicateModifierForVariable = METHOD_RELATED | 395;
    IllegalModifierForVariable = METHOD_RELATED | 396;
    LocalVariableCannotBeNull = INTERNAL | 397, deprecated;
    LocalVariableCanOnlyBeNull = INTERNAL | 398, deprecated;
    LocalVariableMayBeNull = INTERNAL | 399, deprecated;
    AbstractMethodMustBeImplemented = METHOD_RELATED | 400;
    FinalMethodCannotBeOverridden = METHOD_RELATED | 401;
    IncompatibleExceptionInThrowsClause = METHOD_RELATED | 402;
    IncompatibleExceptionInInheritedMethodThrowsClause = METHOD_RELATED | 403;
    IncompatibleReturnType = METHOD_RELATED | 404;
    InheritedMethodReducesVisibility = METHOD_RELATED | 405;
    CannotOverrideAStaticMethodWithAnInstanceMethod = METHOD_RELATED | 406;
    CannotHideAnInstanceMethodWithAStaticMethod = METHOD_RELATED | 407;
    StaticInheritedMethodConflicts = METHOD_RELATED | 408;
    MethodReducesVisibility = METHOD_RELATED | 409;
    OverridingNonVisibleMethod = METHOD_RELATED | 410;
    AbstractMethodCannotBeOverridden = METHOD_RELATED | 411;
    OverridingDeprecatedMethod = METHOD_RELATED | 412;
    IncompatibleReturnTypeForNonInheritedInterfaceMethod = METHOD_RELATED | 413;
    IncompatibleExceptionInThrowsClauseForNonInheritedInterfaceMethod = METHOD_RELATED | 414;
    IllegalVararg = METHOD_RELATED | 415;
    OverridingMethodWithoutSuperInvocation = METHOD_RELATED | 416;
    MissingSynchronizedModifierInInheritedMethod = METHOD_RELATED | 417;
    AbstractMethodMustBeImplementedOverConcreteMethod = METHOD_RELATED | 418;
    InheritedIncompatibleReturnType = METHOD_RELATED | 419;
    CodeSnippetMissingClass = INTERNAL | 420;
    CodeSnippetMissingMethod = INTERNAL | 421;
    CannotUseSuperInCodeSnippet = INTERNAL | 422;
    TooManyConstantsInConstantPool = INTERNAL | 430;
    TooManyBytesForStringConstant = INTERNAL | 431;
    TooManyFields = INTERNAL | 432;
    TooManyMethods = INTERNAL | 433;
    TooManyParametersForSyntheticMethod = INTERNAL | 434;
    UseAssertAsAnIdentifier = INTERNAL | 440;
    UseEnumAsAnIdentifier = INTERNAL | 441;
    EnumConstantsCannotBeSurroundedByParenthesis = SYNTAX | INTERNAL | 442;
    IllegalUseOfUnderscoreAsAnIdentifier = SYNTAX | INTERNAL | 443;
    UninternedIdentityComparison = SYNTAX | INTERNAL | 444;
    ErrorUseOfUnderscoreAsAnIdentifier = SYNTAX | INTERNAL | 445;
    Task = INTERNAL | 450;
    NullLocalVariableReference = INTERNAL | 451;
    PotentialNullLocalVariableReference = INTERNAL | 452;
    RedundantNullCheckOnNullLocalVariable = INTERNAL | 453;
    NullLocalVariableComparisonYieldsFalse = INTERNAL | 454;
    RedundantLocalVariableNullAssignment = INTERNAL | 455;
    NullLocalVariableInstanceofYieldsFalse = INTERNAL | 456;
    RedundantNullCheckOnNonNullLocalVariable = INTERNAL | 457;
    NonNullLocalVariableComparisonYieldsFalse = INTERNAL | 458;
    PotentialNullUnboxing = INTERNAL | 459;
    NullUnboxing = INTERNAL | 461;
    UndocumentedEmptyBlock = INTERNAL | 460;
    JavadocInvalidSeeUrlReference = JAVADOC | INTERNAL | 462;
    JavadocMissingTagDescription = JAVADOC | INTERNAL | 463;
    JavadocDuplicateTag = JAVADOC | INTERNAL | 464;
    JavadocHiddenReference = JAVADOC | INTERNAL | 465;
    JavadocInvalidMemberTypeQualification = JAVADOC | INTERNAL | 466;
    JavadocMissingIdentifier = JAVADOC | INTERNAL | 467;
    JavadocNonStaticTypeFromStaticInvocation = JAVADOC | INTERNAL | 468;
    JavadocInvalidParamTagTypeParameter = JAVADOC | INTERNAL | 469;
    JavadocUnexpectedTag = JAVADOC | INTERNAL | 470;
    JavadocMissingParamTag = JAVADOC | INTERNAL | 471;
    JavadocMissingParamName = JAVADOC | INTERNAL | 472;
    JavadocDuplicateParamName = JAVADOC | INTERNAL | 473;
    JavadocInvalidParamName = JAVADOC | INTERNAL | 474;
    JavadocMissingReturnTag = JAVADOC | INTERNAL | 475;
    JavadocDuplicateReturnTag = JAVADOC | INTERNAL | 476;
    JavadocMissingThrowsTag = JAVADOC | INTERNAL | 477;
    JavadocMissingThrowsClassName = JAVADOC | INTERNAL | 478;
    JavadocInvalidThrowsClass = JAVADOC | INTERNAL | 479;
    JavadocDuplicateThrowsClassName = JAVADOC | INTERNAL | 480;
    JavadocInvalidThrowsClassName = JAVADOC | INTERNAL | 481;
    JavadocMissingSeeReference = JAVADOC | INTERNAL | 482;
    JavadocInvalidSeeReference = JAVADOC | INTERNAL | 483;
    JavadocInvalidSeeHref = JAVADOC | INTERNAL | 484;
    JavadocInvalidSeeArgs = JAVADOC | INTERNAL | 485;
    JavadocMissing = JAVADOC | INTERNAL | 486;
    JavadocInvalidTag = JAVADOC | INTERNAL | 487;
    JavadocUndefinedField = JAVADOC | INTERNAL | 488;
    JavadocNotVisibleField = JAVADOC | INTERNAL | 489;
    JavadocAmbiguousField = JAVADOC | INTERNAL | 490;
    JavadocUsingDeprecatedField = JAVADOC | INTERNAL | 491;
    JavadocUndefinedConstructor = JAVADOC | INTERNAL | 492;
    JavadocNotVisibleConstructor = JAVADOC | INTERNAL | 493;
    JavadocAmbiguousConstructor = JAVADOC | INTERNAL | 494;
    JavadocUsingDeprecatedConstructor = JAVADOC | INTERNAL | 495;
    JavadocUndefinedMethod = JAVADOC | INTERNAL | 496;
    JavadocNotVisibleMethod = JAVADOC | INTERNAL | 497;
    JavadocAmbiguousMethod = JAVADOC | INTERNAL | 498;
    JavadocUsingDeprecatedMethod = JAVADOC | INTERNAL | 499;
    JavadocNoMessageSendOnBaseType = JAVADOC | INTERNAL | 500;
    JavadocParameterMismatch = JAVADOC | INTERNAL | 501;
    JavadocNoMessageSendOnArrayType = JAVADOC | INTERNAL | 502;
    JavadocUndefinedType = JAVADOC | INTERNAL | 503;
    JavadocNotVisibleType = JAVADOC | INTERNAL | 504;
    JavadocAmbiguousType = JAVADOC | INTERNAL | 505;
    JavadocUsingDeprecatedType = JAVADOC | INTERNAL | 506;
    JavadocInternalTypeNameProvided = JAVADOC | INTERNAL | 507;
    JavadocInheritedMethodHidesEnclosingName = JAVADOC | INTERNAL | 508;
    JavadocInheritedFieldHidesEnclosingName = JAVADOC | INTERNAL | 509;
    JavadocInheritedNameHidesEnclosingTypeName = JAVADOC | INTERNAL | 510;
    JavadocAmbiguousMethodReference = JAVADOC | INTERNAL | 511;
    JavadocUnterminatedInlineTag = JAVADOC | INTERNAL | 512;
    JavadocMalformedSeeReference = JAVADOC | INTERNAL | 513;
    JavadocMessagePrefix = INTERNAL | 514;
    JavadocMissingHashCharacter = JAVADOC | INTERNAL | 515;
    JavadocEmptyReturnTag = JAVADOC | INTERNAL | 516;
    JavadocInvalidValueReference = JAVADOC | INTERNAL | 517;
    JavadocUnexpectedText = JAVADOC | INTERNAL | 518;
    JavadocInvalidParamTagName = JAVADOC | INTERNAL | 519;
    JavadocMissingUsesTag = JAVADOC | INTERNAL | 1800;
    JavadocDuplicateUsesTag = JAVADOC | INTERNAL | 1801;
    JavadocMissingUsesClassName = JAVADOC | INTERNAL | 1802;
    JavadocInvalidUsesClassName = JAVADOC | INTERNAL | 1803;
    JavadocInvalidUsesClass = JAVADOC | INTERNAL | 1804;
    JavadocMissingProvidesTag = JAVADOC | INTERNAL | 1805;
    JavadocDuplicateProvidesTag = JAVADOC | INTERNAL | 1806;
    JavadocMissingProvidesClassName = JAVADOC | INTERNAL | 1807;
    JavadocInvalidProvidesClassName = JAVADOC | INTERNAL | 1808;
    JavadocInvalidProvidesClass = JAVADOC | INTERNAL | 1809;
    JavadocInvalidModuleQualification = JAVADOC | INTERNAL | 1810;
    JavadocInvalidModule = JAVADOC | INTERNAL | 1811;
    JavadocInvalidSnippet = JAVADOC | INTERNAL | 1812;
    JavadocInvalidSnippetMissingColon = JAVADOC | INTERNAL | 1813;
    JavadocInvalidSnippetContentNewLine = JAVADOC | INTERNAL | 1814;
    JavadocInvalidSnippetRegionNotClosed = JAVADOC | INTERNAL | 1815;
    JavadocInvalidSnippetRegexSubstringTogether = JAVADOC | INTERNAL | 1816;
    JavadocInvalidSnippetDuplicateRegions = JAVADOC | INTERNAL | 1817;
    DuplicateTypeVariable = INTERNAL | 520;
    IllegalTypeVariableSuperReference = INTERNAL | 521;
    NonStaticTypeFromStaticInvocation = INTERNAL | 522;
    ObjectCannotBeGeneric = INTERNAL | 523;
    NonGenericType = TYPE_RELATED | 524;
    IncorrectArityForParameterizedType = TYPE_RELATED | 525;
    TypeArgumentMismatch = TYPE_RELATED | 526;
    DuplicateMethodErasure = TYPE_RELATED | 527;
    ReferenceToForwardTypeVariable = TYPE_RELATED | 528;
    BoundMustBeAnInterface = TYPE_RELATED | 529;
    UnsafeRawConstructorInvocation = TYPE_RELATED | 530;
    UnsafeRawMethodInvocation = TYPE_RELATED | 531;
    UnsafeTypeConversion = TYPE_RELATED | 532;
    InvalidTypeVariableExceptionType = TYPE_RELATED | 533;
    InvalidParameterizedExceptionType = TYPE_RELATED | 534;
    IllegalGenericArray = TYPE_RELATED | 535;
    UnsafeRawFieldAssignment = TYPE_RELATED | 536;
    FinalBoundForTypeVariable = TYPE_RELATED | 537;
    UndefinedTypeVariable = INTERNAL | 538;
    SuperInterfacesCollide = TYPE_RELATED | 539;
    WildcardConstructorInvocation = TYPE_RELATED | 540;
    WildcardMethodInvocation = TYPE_RELATED | 541;
    WildcardFieldAssignment = TYPE_RELATED | 542;
    GenericMethodTypeArgumentMismatch = TYPE_RELATED | 543;
    GenericConstructorTypeArgumentMismatch = TYPE_RELATED | 544;
    UnsafeGenericCast = TYPE_RELATED | 545;
    IllegalInstanceofParameterizedType = INTERNAL | 546;
    IllegalInstanceofTypeParameter = INTERNAL | 547;
    NonGenericMethod = TYPE_RELATED | 548;
    IncorrectArityForParameterizedMethod = TYPE_RELATED | 549;
    ParameterizedMethodArgumentTypeMismatch = TYPE_RELATED | 550;
    NonGenericConstructor = TYPE_RELATED | 551;
    IncorrectArityForParameterizedConstructor = TYPE_RELATED | 552;
    ParameterizedConstructorArgumentTypeMismatch = TYPE_RELATED | 553;
    TypeArgumentsForRawGenericMethod = TYPE_RELATED | 554;
    TypeArgumentsForRawGenericConstructor = TYPE_RELATED | 555;
    SuperTypeUsingWildcard = TYPE_RELATED | 556;
    GenericTypeCannotExtendThrowable = TYPE_RELATED | 557;
    IllegalClassLiteralForTypeVariable = TYPE_RELATED | 558;
    UnsafeReturnTypeOverride = METHOD_RELATED | 559;
    MethodNameClash = METHOD_RELATED | 560;
    RawMemberTypeCannotBeParameterized = TYPE_RELATED | 561;
    MissingArgumentsForParameterizedMemberType = TYPE_RELATED | 562;
    StaticMemberOfParameterizedType = TYPE_RELATED | 563;
    BoundHasConflictingArguments = TYPE_RELATED | 564;
    DuplicateParameterizedMethods = METHOD_RELATED | 565;
    IllegalQualifiedParameterizedTypeAllocation = TYPE_RELATED | 566;
    DuplicateBounds = TYPE_RELATED | 567;
    BoundCannotBeArray = TYPE_RELATED | 568;
    UnsafeRawGenericConstructorInvocation = TYPE_RELATED | 569;
    UnsafeRawGenericMethodInvocation = TYPE_RELATED | 570;
    TypeParameterHidingType = TYPE_RELATED | 571;
    RawTypeReference = TYPE_RELATED | 572;
    NoAdditionalBoundAfterTypeVariable = TYPE_RELATED | 573;
    UnsafeGenericArrayForVarargs = METHOD_RELATED | 574;
    IllegalAccessFromTypeVariable = TYPE_RELATED | 575;
    TypeHidingTypeParameterFromType = TYPE_RELATED | 576;
    TypeHidingTypeParameterFromMethod = TYPE_RELATED | 577;
    InvalidUsageOfWildcard = SYNTAX | INTERNAL | 578;
    UnusedTypeArgumentsForMethodInvocation = METHOD_RELATED | 579;
    IncompatibleTypesInForeach = TYPE_RELATED | 580;
    InvalidTypeForCollection = INTERNAL | 581;
    InvalidTypeForCollectionTarget14 = INTERNAL | 582;
    DuplicateInheritedMethods = METHOD_RELATED | 583;
    MethodNameClashHidden = METHOD_RELATED | 584;
    UnsafeElementTypeConversion = TYPE_RELATED | 585;
    InvalidTypeArguments = METHOD_RELATED | TYPE_RELATED | 586;
    InvalidUsageOfTypeParameters = SYNTAX | INTERNAL | 590;
    InvalidUsageOfStaticImports = SYNTAX | INTERNAL | 591;
    InvalidUsageOfForeachStatements = SYNTAX | INTERNAL | 592;
    InvalidUsageOfTypeArguments = SYNTAX | INTERNAL | 593;
    InvalidUsageOfEnumDeclarations = SYNTAX | INTERNAL | 594;
    InvalidUsageOfVarargs = SYNTAX | INTERNAL | 595;
    InvalidUsageOfAnnotations = SYNTAX | INTERNAL | 596;
    InvalidUsageOfAnnotationDeclarations = SYNTAX | INTERNAL | 597;
    InvalidUsageOfTypeParametersForAnnotationDeclaration = SYNTAX | INTERNAL | 598;
    InvalidUsageOfTypeParametersForEnumDeclaration = SYNTAX | INTERNAL | 599;
    IllegalModifierForAnnotationMethod = METHOD_RELATED | 600;
    IllegalExtendedDimensions = METHOD_RELATED | 601;
    InvalidFileNameForPackageAnnotations = SYNTAX | INTERNAL | 602;
    IllegalModifierForAnnotationType = TYPE_RELATED | 603;
    IllegalModifierForAnnotationMemberType = TYPE_RELATED | 604;
    InvalidAnnotationMemberType = TYPE_RELATED | 605;
    AnnotationCircularitySelfReference = TYPE_RELATED | 606;
    AnnotationCircularity = TYPE_RELATED | 607;
    DuplicateAnnotation = TYPE_RELATED | 608;
    MissingValueForAnnotationMember = TYPE_RELATED | 609;
    DuplicateAnnotationMember = INTERNAL | 610;
    UndefinedAnnotationMember = METHOD_RELATED | 611;
    AnnotationValueMustBeClassLiteral = INTERNAL | 612;
    AnnotationValueMustBeConstant = INTERNAL | 613;
    AnnotationFieldNeedConstantInitialization = INTERNAL | 614, deprecated;
    IllegalModifierForAnnotationField = INTERNAL | 615;
    AnnotationCannotOverrideMethod = METHOD_RELATED | 616;
    AnnotationMembersCannotHaveParameters = SYNTAX | INTERNAL | 617;
    AnnotationMembersCannotHaveTypeParameters = SYNTAX | INTERNAL | 618;
    AnnotationTypeDeclarationCannotHaveSuperclass = SYNTAX | INTERNAL | 619;
    AnnotationTypeDeclarationCannotHaveSuperinterfaces = SYNTAX | INTERNAL | 620;
    DuplicateTargetInTargetAnnotation = INTERNAL | 621;
    DisallowedTargetForAnnotation = TYPE_RELATED | 622;
    MethodMustOverride = METHOD_RELATED | 623;
    AnnotationTypeDeclarationCannotHaveConstructor = SYNTAX | INTERNAL | 624;
    AnnotationValueMustBeAnnotation = INTERNAL | 625;
    AnnotationTypeUsedAsSuperInterface = TYPE_RELATED | 626;
    MissingOverrideAnnotation = METHOD_RELATED | 627;
    FieldMissingDeprecatedAnnotation = INTERNAL | 628;
    MethodMissingDeprecatedAnnotation = INTERNAL | 629;
    TypeMissingDeprecatedAnnotation = INTERNAL | 630;
    UnhandledWarningToken = INTERNAL | 631;
    AnnotationValueMustBeArrayInitializer = INTERNAL | 632;
    AnnotationValueMustBeAnEnumConstant = INTERNAL | 633;
    MethodMustOverrideOrImplement = METHOD_RELATED | 634;
    UnusedWarningToken = INTERNAL | 635;
    MissingOverrideAnnotationForInterfaceMethodImplementation = METHOD_RELATED | 636;
    InvalidUsageOfTypeAnnotations = SYNTAX | INTERNAL | 637;
    DisallowedExplicitThisParameter = SYNTAX | INTERNAL | 638;
    MisplacedTypeAnnotations = SYNTAX | INTERNAL | 639;
    IllegalTypeAnnotationsInStaticMemberAccess = SYNTAX | INTERNAL | 640;
    IllegalUsageOfTypeAnnotations = SYNTAX | INTERNAL | 641;
    IllegalDeclarationOfThisParameter = SYNTAX | INTERNAL | 642;
    ExplicitThisParameterNotBelow18 = SYNTAX | INTERNAL | 643;
    DefaultMethodNotBelow18 = SYNTAX | INTERNAL | 644;
    LambdaExpressionNotBelow18 = SYNTAX | INTERNAL | 645;
    MethodReferenceNotBelow18 = SYNTAX | INTERNAL | 646;
    ConstructorReferenceNotBelow18 = SYNTAX | INTERNAL | 647;
    ExplicitThisParameterNotInLambda = SYNTAX | INTERNAL | 648;
    ExplicitAnnotationTargetRequired = TYPE_RELATED | 649;
    IllegalTypeForExplicitThis = SYNTAX | INTERNAL | 650;
    IllegalQualifierForExplicitThis = SYNTAX | INTERNAL | 651;
    IllegalQualifierForExplicitThis2 = SYNTAX | INTERNAL | 652;
    TargetTypeNotAFunctionalInterface = INTERNAL | TYPE_RELATED | 653;
    IllegalVarargInLambda = INTERNAL | TYPE_RELATED | 654;
    illFormedParameterizationOfFunctionalInterface = INTERNAL | TYPE_RELATED | 655;
    lambdaSignatureMismatched = INTERNAL | TYPE_RELATED | 656;
    lambdaParameterTypeMismatched = INTERNAL | TYPE_RELATED | 657;
    IncompatibleLambdaParameterType = INTERNAL | TYPE_RELATED | 658;
    NoGenericLambda = INTERNAL | TYPE_RELATED | 659;
    UnusedTypeArgumentsForConstructorInvocation = METHOD_RELATED | 660;
    UnusedTypeParameter = TYPE_RELATED | 661;
    IllegalArrayOfUnionType = TYPE_RELATED | 662;
    OuterLocalMustBeEffectivelyFinal = INTERNAL | 663;
    InterfaceNotFunctionalInterface = INTERNAL | TYPE_RELATED | 664;
    ConstructionTypeMismatch = INTERNAL | TYPE_RELATED | 665;
    ToleratedMisplacedTypeAnnotations = SYNTAX | INTERNAL | 666;
    InterfaceSuperInvocationNotBelow18 = SYNTAX | INTERNAL | 667;
    InterfaceStaticMethodInvocationNotBelow18 = SYNTAX | INTERNAL | 668;
    FieldMustBeFinal = INTERNAL | 669;
    NonNullExpressionComparisonYieldsFalse = INTERNAL | 670;
    RedundantNullCheckOnNonNullExpression = INTERNAL | 671;
    NullExpressionReference = INTERNAL | 672;
    PotentialNullExpressionReference = INTERNAL | 673;
    CorruptedSignature = INTERNAL | 700;
    InvalidEncoding = INTERNAL | 701;
    CannotReadSource = INTERNAL | 702;
    BoxingConversion = INTERNAL | 720;
    UnboxingConversion = INTERNAL | 721;
    StrictfpNotRequired = SYNTAX | INTERNAL | 741;
    IllegalModifierForEnum = TYPE_RELATED | 750;
    IllegalModifierForEnumConstant = FIELD_RELATED | 751;
    IllegalModifierForLocalEnum = TYPE_RELATED | 752, deprecated;
    IllegalModifierForMemberEnum = TYPE_RELATED | 753;
    CannotDeclareEnumSpecialMethod = METHOD_RELATED | 754;
    IllegalQualifiedEnumConstantLabel = FIELD_RELATED | 755;
    CannotExtendEnum = TYPE_RELATED | 756;
    CannotInvokeSuperConstructorInEnum = METHOD_RELATED | 757;
    EnumAbstractMethodMustBeImplemented = METHOD_RELATED | 758;
    EnumSwitchCannotTargetField = FIELD_RELATED | 759;
    IllegalModifierForEnumConstructor = METHOD_RELATED | 760;
    MissingEnumConstantCase = FIELD_RELATED | 761;
    EnumStaticFieldInInInitializerContext = FIELD_RELATED | 762;
    EnumConstantMustImplementAbstractMethod = METHOD_RELATED | 763;
    EnumConstantCannotDefineAbstractMethod = METHOD_RELATED | 764;
    AbstractMethodInEnum = METHOD_RELATED | 765;
    MissingEnumDefaultCase = INTERNAL | 766;
    MissingDefaultCase = INTERNAL | 767;
    MissingEnumConstantCaseDespiteDefault = FIELD_RELATED | 768;
    UninitializedLocalVariableHintMissingDefault = INTERNAL | 769;
    UninitializedBlankFinalFieldHintMissingDefault = FIELD_RELATED | 770;
    ShouldReturnValueHintMissingDefault = METHOD_RELATED | 771;
    IllegalExtendedDimensionsForVarArgs = SYNTAX | INTERNAL | 800;
    MethodVarargsArgumentNeedCast = METHOD_RELATED | 801;
    ConstructorVarargsArgumentNeedCast = CONSTRUCTOR_RELATED | 802;
    VarargsConflict = METHOD_RELATED | 803;
    SafeVarargsOnFixedArityMethod = METHOD_RELATED | 804;
    SafeVarargsOnNonFinalInstanceMethod = METHOD_RELATED | 805;
    PotentialHeapPollutionFromVararg = METHOD_RELATED | 806;
    VarargsElementTypeNotVisible = METHOD_RELATED | 807;
    VarargsElementTypeNotVisibleForConstructor = CONSTRUCTOR_RELATED | 808;
    ApplicableMethodOverriddenByInapplicable = METHOD_RELATED | 809;
    JavadocGenericMethodTypeArgumentMismatch = JAVADOC | INTERNAL | 850;
    JavadocNonGenericMethod = JAVADOC | INTERNAL | 851;
    JavadocIncorrectArityForParameterizedMethod = JAVADOC | INTERNAL | 852;
    JavadocParameterizedMethodArgumentTypeMismatch = JAVADOC | INTERNAL | 853;
    JavadocTypeArgumentsForRawGenericMethod = JAVADOC | INTERNAL | 854;
    JavadocGenericConstructorTypeArgumentMismatch = JAVADOC | INTERNAL | 855;
    JavadocNonGenericConstructor = JAVADOC | INTERNAL | 856;
    JavadocIncorrectArityForParameterizedConstructor = JAVADOC | INTERNAL | 857;
    JavadocParameterizedConstructorArgumentTypeMismatch = JAVADOC | INTERNAL | 858;
    JavadocTypeArgumentsForRawGenericConstructor = JAVADOC | INTERNAL | 859;
    AssignmentToMultiCatchParameter = INTERNAL | 870;
    ResourceHasToImplementAutoCloseable = TYPE_RELATED | 871;
    AssignmentToResource = INTERNAL | 872;
    InvalidUnionTypeReferenceSequence = INTERNAL | TYPE_RELATED | 873;
    AutoManagedResourceNotBelow17 = SYNTAX | INTERNAL | 874;
    MultiCatchNotBelow17 = SYNTAX | INTERNAL | 875;
    PolymorphicMethodNotBelow17 = METHOD_RELATED | 876;
    IncorrectSwitchType17 = TYPE_RELATED | 877;
    CannotInferElidedTypes = TYPE_RELATED | 878;
    CannotUseDiamondWithExplicitTypeArguments = TYPE_RELATED | 879;
    CannotUseDiamondWithAnonymousClasses = TYPE_RELATED | 880;
    SwitchOnStringsNotBelow17 = TYPE_RELATED | 881;
    UnhandledExceptionOnAutoClose = TYPE_RELATED | 882;
    DiamondNotBelow17 = TYPE_RELATED | 883;
    RedundantSpecificationOfTypeArguments = TYPE_RELATED | 884;
    PotentiallyUnclosedCloseable = INTERNAL | 885;
    PotentiallyUnclosedCloseableAtExit = INTERNAL | 886;
    UnclosedCloseable = INTERNAL | 887;
    UnclosedCloseableAtExit = INTERNAL | 888;
    ExplicitlyClosedAutoCloseable = INTERNAL | 889;
    SwitchOnEnumNotBelow15 = TYPE_RELATED | 890;
    IntersectionCastNotBelow18 = TYPE_RELATED | 891;
    IllegalBasetypeInIntersectionCast = TYPE_RELATED | 892;
    IllegalArrayTypeInIntersectionCast = TYPE_RELATED | 893;
    DuplicateBoundInIntersectionCast = TYPE_RELATED | 894;
    MultipleFunctionalInterfaces = TYPE_RELATED | 895, deprecated;
    StaticInterfaceMethodNotBelow18 = SYNTAX | INTERNAL | 896;
    DuplicateAnnotationNotMarkedRepeatable = TYPE_RELATED | 897;
    DisallowedTargetForContainerAnnotationType = TYPE_RELATED | 898;
    RepeatedAnnotationWithContainerAnnotation = TYPE_RELATED | 899;
    AutoManagedVariableResourceNotBelow9 = SYNTAX | INTERNAL | 1351;
    ExternalProblemNotFixable = 900;
    ExternalProblemFixable = 901;
    ContainerAnnotationTypeHasWrongValueType = TYPE_RELATED | 902;
    ContainerAnnotationTypeMustHaveValue = TYPE_RELATED | 903;
    ContainerAnnotationTypeHasNonDefaultMembers = TYPE_RELATED | 904;
    ContainerAnnotationTypeHasShorterRetention = TYPE_RELATED | 905;
    RepeatableAnnotationTypeTargetMismatch = TYPE_RELATED | 906;
    RepeatableAnnotationTypeIsDocumented = TYPE_RELATED | 907;
    RepeatableAnnotationTypeIsInherited = TYPE_RELATED | 908;
    RepeatableAnnotationWithRepeatingContainerAnnotation = TYPE_RELATED | 909;
    RequiredNonNullButProvidedNull = TYPE_RELATED | 910;
    RequiredNonNullButProvidedPotentialNull = TYPE_RELATED | 911;
    RequiredNonNullButProvidedUnknown = TYPE_RELATED | 912;
    MissingNonNullByDefaultAnnotationOnPackage = INTERNAL | 913;
    IllegalReturnNullityRedefinition = METHOD_RELATED | 914;
    IllegalRedefinitionToNonNullParameter = METHOD_RELATED | 915;
    IllegalDefinitionToNonNullParameter = METHOD_RELATED | 916;
    ParameterLackingNonNullAnnotation = METHOD_RELATED | 917;
    ParameterLackingNullableAnnotation = METHOD_RELATED | 918;
    PotentialNullMessageSendReference = INTERNAL | 919;
    RedundantNullCheckOnNonNullMessageSend = INTERNAL | 920;
    CannotImplementIncompatibleNullness = INTERNAL | 921;
    RedundantNullAnnotation = METHOD_RELATED | 922;
    IllegalAnnotationForBaseType = TYPE_RELATED | 923;
    NullableFieldReference = FIELD_RELATED | 924;
    RedundantNullDefaultAnnotation = INTERNAL | 925;
    RedundantNullDefaultAnnotationPackage = INTERNAL | 926;
    RedundantNullDefaultAnnotationType = INTERNAL | 927;
    RedundantNullDefaultAnnotationMethod = INTERNAL | 928;
    ContradictoryNullAnnotations = INTERNAL | 929;
    MissingNonNullByDefaultAnnotationOnType = INTERNAL | 930;
    RedundantNullCheckOnSpecdNonNullLocalVariable = INTERNAL | 931;
    SpecdNonNullLocalVariableComparisonYieldsFalse = INTERNAL | 932;
    RequiredNonNullButProvidedSpecdNullable = INTERNAL | 933;
    UninitializedNonNullField = FIELD_RELATED | 934;
    UninitializedNonNullFieldHintMissingDefault = FIELD_RELATED | 935;
    NonNullMessageSendComparisonYieldsFalse = INTERNAL | 936;
    RedundantNullCheckOnNonNullSpecdField = INTERNAL | 937;
    NonNullSpecdFieldComparisonYieldsFalse = INTERNAL | 938;
    ConflictingNullAnnotations = METHOD_RELATED | 939;
    ConflictingInheritedNullAnnotations = METHOD_RELATED | 940;
    RedundantNullCheckOnField = INTERNAL | 941;
    FieldComparisonYieldsFalse = INTERNAL | 942;
    RedundantNullDefaultAnnotationModule = INTERNAL | 943;
    RedundantNullCheckOnConstNonNullField = INTERNAL | 944;
    ConstNonNullFieldComparisonYieldsFalse = INTERNAL | 945;
    InheritedParameterLackingNonNullAnnotation = METHOD_RELATED | 946;
    ArrayReferencePotentialNullReference = INTERNAL | 951;
    DereferencingNullableExpression = INTERNAL | 952;
    NullityMismatchingTypeAnnotation = INTERNAL | 953;
    NullityMismatchingTypeAnnotationSuperHint = INTERNAL | 954;
    NullityUncheckedTypeAnnotationDetail = INTERNAL | 955;
    NullityUncheckedTypeAnnotationDetailSuperHint = INTERNAL | 956;
    ReferenceExpressionParameterNullityMismatch = METHOD_RELATED | 957;
    ReferenceExpressionParameterNullityUnchecked = METHOD_RELATED | 958;
    ReferenceExpressionReturnNullRedef = METHOD_RELATED | 959;
    ReferenceExpressionReturnNullRedefUnchecked = METHOD_RELATED | 960;
    RedundantNullCheckAgainstNonNullType = INTERNAL | 961;
    NullAnnotationUnsupportedLocation = INTERNAL | 962;
    NullAnnotationUnsupportedLocationAtType = INTERNAL | 963;
    NullityMismatchTypeArgument = INTERNAL | 964;
    ContradictoryNullAnnotationsOnBound = INTERNAL | 965;
    ContradictoryNullAnnotationsInferred = INTERNAL | 966;
    UnsafeNullnessCast = INTERNAL | 967;
    NonNullDefaultDetailIsNotEvaluated = 968;
    NullNotCompatibleToFreeTypeVariable = 969;
    NullityMismatchAgainstFreeTypeVariable = 970;
    ImplicitObjectBoundNoNullDefault = 971;
    IllegalParameterNullityRedefinition = METHOD_RELATED | 972;
    ContradictoryNullAnnotationsInferredFunctionType = METHOD_RELATED | 973;
    IllegalReturnNullityRedefinitionFreeTypeVariable = METHOD_RELATED | 974;
    IllegalRedefinitionOfTypeVariable = 975;
    UncheckedAccessOfValueOfFreeTypeVariable = 976;
    UninitializedFreeTypeVariableField = 977;
    UninitializedFreeTypeVariableFieldHintMissingDefault = 978;
    RequiredNonNullButProvidedFreeTypeVariable = TYPE_RELATED | 979;
    NonNullTypeVariableFromLegacyMethod = TYPE_RELATED | 980;
    NonNullMethodTypeVariableFromLegacyMethod = TYPE_RELATED | 981;
    MissingNullAnnotationImplicitlyUsed = INTERNAL | 982;
    AnnotatedTypeArgumentToUnannotated = INTERNAL | 983;
    AnnotatedTypeArgumentToUnannotatedSuperHint = INTERNAL | 984;
    NonNullArrayContentNotInitialized = INTERNAL | 985;
    NullityUncheckedTypeAnnotation = INTERNAL | 986;
    IllegalModifiersForElidedType = INTERNAL | 1001;
    IllegalModifiers = INTERNAL | 1002;
    IllegalTypeArgumentsInRawConstructorReference = TYPE_RELATED | 1003;
    MissingValueFromLambda = INTERNAL | 1004;
    IllegalModifierForInterfaceMethod18 = METHOD_RELATED | 1050;
    DefaultMethodOverridesObjectMethod = METHOD_RELATED | 1051;
    InheritedDefaultMethodConflictsWithOtherInherited = METHOD_RELATED | 1052;
    DuplicateInheritedDefaultMethods = METHOD_RELATED | 1053;
    SuperAccessCannotBypassDirectSuper = TYPE_RELATED | 1054;
    SuperCallCannotBypassOverride = METHOD_RELATED | 1055;
    IllegalModifierCombinationForInterfaceMethod = METHOD_RELATED | 1056;
    IllegalStrictfpForAbstractInterfaceMethod = METHOD_RELATED | 1057;
    IllegalDefaultModifierSpecification = METHOD_RELATED | 1058;
    CannotInferInvocationType = TYPE_RELATED | 1059;
    TypeAnnotationAtQualifiedName = SYNTAX | INTERNAL | 1060;
    NullAnnotationAtQualifyingType = SYNTAX | INTERNAL | 1061;
    IllegalModifierForInterfaceMethod9 = METHOD_RELATED | 1071;
    IllegalModifierCombinationForPrivateInterfaceMethod9 = METHOD_RELATED | 1070;
    UndefinedModule = MODULE_RELATED | 1300;
    DuplicateRequires = MODULE_RELATED | 1301;
    DuplicateExports = MODULE_RELATED | 1302;
    DuplicateUses = MODULE_RELATED | 1303;
    DuplicateServices = MODULE_RELATED | 1304;
    CyclicModuleDependency = MODULE_RELATED | 1305;
    AbstractServiceImplementation = TYPE_RELATED | 1306;
    ProviderMethodOrConstructorRequiredForServiceImpl = TYPE_RELATED | 1307;
    ServiceImplDefaultConstructorNotPublic = TYPE_RELATED | 1308;
    NestedServiceImpl = TYPE_RELATED | 1309;
    ServiceImplNotDefinedByModule = TYPE_RELATED | 1310;
    PackageDoesNotExistOrIsEmpty = MODULE_RELATED | 1311;
    NonDenotableTypeArgumentForAnonymousDiamond = TYPE_RELATED | 1312;
    DuplicateOpens = MODULE_RELATED | 1313;
    DuplicateModuleRef = MODULE_RELATED | 1314;
    InvalidOpensStatement = MODULE_RELATED | 1315;
    InvalidServiceIntfType = MODULE_RELATED | 1316;
    InvalidServiceImplType = MODULE_RELATED | 1317;
    IllegalModifierForModule = MODULE_RELATED | 1318;
    UndefinedModuleAddReads = MODULE_RELATED | 1319;
    ExportingForeignPackage = MODULE_RELATED | 1320;
    DuplicateResource = INTERNAL | 1251;
    ShouldMarkMethodAsOwning = INTERNAL | 1260;
    MandatoryCloseNotShown = INTERNAL | 1261;
    MandatoryCloseNotShownAtExit = INTERNAL | 1262;
    NotOwningResourceField = INTERNAL | 1263;
    OwningFieldInNonResourceClass = INTERNAL | 1264;
    OwningFieldShouldImplementClose = INTERNAL | 1265;
    OverrideReducingParamterOwning = INTERNAL | 1266;
    OverrideAddingReturnOwning = INTERNAL | 1267;
    StaticResourceField = INTERNAL | 1268;
    ResourceIsNotAValue = INTERNAL | 1269;
    UsingTerminallyDeprecatedType = TYPE_RELATED | 1400;
    UsingTerminallyDeprecatedMethod = METHOD_RELATED | 1401;
    UsingTerminallyDeprecatedConstructor = METHOD_RELATED | 1402;
    UsingTerminallyDeprecatedField = FIELD_RELATED | 1403;
    OverridingTerminallyDeprecatedMethod = METHOD_RELATED | 1404;
    UsingDeprecatedSinceVersionType = TYPE_RELATED | 1405;
    UsingDeprecatedSinceVersionMethod = METHOD_RELATED | 1406;
    UsingDeprecatedSinceVersionConstructor = METHOD_RELATED | 1407;
    UsingDeprecatedSinceVersionField = FIELD_RELATED | 1408;
    OverridingDeprecatedSinceVersionMethod = METHOD_RELATED | 1409;
    UsingTerminallyDeprecatedSinceVersionType = TYPE_RELATED | 1410;
    UsingTerminallyDeprecatedSinceVersionMethod = METHOD_RELATED | 1411;
    UsingTerminallyDeprecatedSinceVersionConstructor = METHOD_RELATED | 1412;
    UsingTerminallyDeprecatedSinceVersionField = FIELD_RELATED | 1413;
    OverridingTerminallyDeprecatedSinceVersionMethod = METHOD_RELATED | 1414;
    UsingDeprecatedPackage = MODULE_RELATED | 1425;
    UsingDeprecatedSinceVersionPackage = MODULE_RELATED | 1426;
    UsingTerminallyDeprecatedPackage = MODULE_RELATED | 1427;
    UsingTerminallyDeprecatedSinceVersionPackage = MODULE_RELATED | 1428;
    UsingDeprecatedModule = MODULE_RELATED | 1429;
    UsingDeprecatedSinceVersionModule = MODULE_RELATED | 1430;
    UsingTerminallyDeprecatedModule = MODULE_RELATED | 1431;
    UsingTerminallyDeprecatedSinceVersionModule = MODULE_RELATED | 1432;
    NotAccessibleType = TYPE_RELATED | 1450;
    NotAccessibleField = FIELD_RELATED | 1451;
    NotAccessibleMethod = METHOD_RELATED | 1452;
    NotAccessibleConstructor = METHOD_RELATED | 1453;
    NotAccessiblePackage = IMPORT_RELATED | 1454;
    ConflictingPackageFromModules = MODULE_RELATED | 1455;
    ConflictingPackageFromOtherModules = MODULE_RELATED | 1456;
    NonPublicTypeInAPI = MODULE_RELATED | 1457;
    NotExportedTypeInAPI = MODULE_RELATED | 1458;
    MissingRequiresTransitiveForTypeInAPI = MODULE_RELATED | 1459;
    UnnamedPackageInNamedModule = MODULE_RELATED | 1460;
    UnstableAutoModuleName = MODULE_RELATED | 1461;
    ConflictingPackageInModules = MODULE_RELATED | 1462;
    JavadocNotAccessibleType = JAVADOC | TYPE_RELATED | 1450;
    RedundantNullDefaultAnnotationLocal = INTERNAL | 1062;
    RedundantNullDefaultAnnotationField = INTERNAL | 1063;
    GenericInferenceError = 1100;
    LambdaShapeComputationError = 1101, deprecated;
    ProblemNotAnalysed = 1102;
    PreviewFeatureDisabled = COMPLIANCE | 1103;
    PreviewFeatureUsed = COMPLIANCE | 1104;
    PreviewFeatureNotSupported = COMPLIANCE | 1105;
    PreviewFeaturesNotAllowed = PREVIEW_RELATED | 1106;
    FeatureNotSupported = COMPLIANCE | 1107;
    PreviewAPIUsed = COMPLIANCE | 1108;
    UnlikelyCollectionMethodArgumentType = 1200;
    UnlikelyEqualsArgumentType = 1201;
    VarLocalMultipleDeclarators = SYNTAX | 1500;
    VarLocalCannotBeArray = SYNTAX | 1501;
    VarLocalReferencesItself = SYNTAX | 1502;
    VarLocalWithoutInitizalier = SYNTAX | 1503;
    VarLocalInitializedToNull = TYPE_RELATED | 1504;
    VarLocalInitializedToVoid = TYPE_RELATED | 1505;
    VarLocalCannotBeArrayInitalizers = TYPE_RELATED | 1506;
    VarLocalCannotBeLambda = TYPE_RELATED | 1507;
    VarLocalCannotBeMethodReference = TYPE_RELATED | 1508;
    VarIsReserved = SYNTAX | 1509;
    VarIsReservedInFuture = SYNTAX | 1510;
    VarIsNotAllowedHere = SYNTAX | 1511;
    VarCannotBeMixedWithNonVarParams = SYNTAX | 1512;
    VarCannotBeUsedWithTypeArguments = SYNTAX | 1513;
    SwitchExpressionsIncompatibleResultExpressionTypes = TYPE_RELATED | 1600, deprecated;
    SwitchExpressionsEmptySwitchBlock = INTERNAL | 1601, deprecated;
    SwitchExpressionsNoResultExpression = TYPE_RELATED | 1602, deprecated;
    SwitchExpressionSwitchLabeledBlockCompletesNormally = INTERNAL | 1603, deprecated;
    SwitchExpressionLastStatementCompletesNormally = INTERNAL | 1604, deprecated;
    SwitchExpressionTrailingSwitchLabels = INTERNAL | 1605, deprecated;
    switchMixedCase = SYNTAX | 1606, deprecated;
    SwitchExpressionMissingDefaultCase = INTERNAL | 1607, deprecated;
    SwitchExpressionBreakMissingValue = INTERNAL | 1610, deprecated;
    SwitchExpressionMissingEnumConstantCase = INTERNAL | 1611, deprecated;
    SwitchExpressionIllegalLastStatement = INTERNAL | 1612, deprecated;
    SwitchExpressionsYieldIncompatibleResultExpressionTypes = TYPE_RELATED | 1700;
    SwitchExpressionsYieldEmptySwitchBlock = SYNTAX | 1701;
    SwitchExpressionsYieldNoResultExpression = INTERNAL | 1702;
    SwitchExpressionaYieldSwitchLabeledBlockCompletesNormally = INTERNAL | 1703;
    SwitchExpressionsYieldLastStatementCompletesNormally = INTERNAL | 1704;
    SwitchExpressionsYieldTrailingSwitchLabels = INTERNAL | 1705;
    SwitchPreviewMixedCase = SYNTAX | 1706;
    SwitchExpressionsYieldMissingDefaultCase = SYNTAX | 1707;
    SwitchExpressionsYieldMissingValue = SYNTAX | 1708;
    SwitchExpressionsYieldMissingEnumConstantCase = SYNTAX | 1709;
    SwitchExpressionsYieldIllegalLastStatement = INTERNAL | 1710;
    SwitchExpressionsYieldBreakNotAllowed = SYNTAX | 1711;
    SwitchExpressionsYieldUnqualifiedMethodWarning = SYNTAX | 1712;
    SwitchExpressionsYieldUnqualifiedMethodError = SYNTAX | 1713;
    SwitchExpressionsYieldOutsideSwitchExpression = SYNTAX | 1714;
    SwitchExpressionsYieldRestrictedGeneralWarning = INTERNAL | 1715;
    SwitchExpressionsYieldIllegalStatement = INTERNAL | 1716;
    SwitchExpressionsYieldTypeDeclarationWarning = INTERNAL | 1717;
    SwitchExpressionsYieldTypeDeclarationError = INTERNAL | 1718;
    MultiConstantCaseLabelsNotSupported = SYNTAX | 1719;
    ArrowInCaseStatementsNotSupported = SYNTAX | 1720;
    SwitchExpressionsNotSupported = SYNTAX | 1721;
    SwitchExpressionsBreakOutOfSwitchExpression = SYNTAX | 1722;
    SwitchExpressionsContinueOutOfSwitchExpression = SYNTAX | 1723;
    SwitchExpressionsReturnWithinSwitchExpression = SYNTAX | 1724;
    RecordIllegalModifierForInnerRecord = TYPE_RELATED | 1730;
    RecordIllegalModifierForRecord = TYPE_RELATED | 1731;
    RecordIllegalComponentNameInRecord = TYPE_RELATED | 1732;
    RecordNonStaticFieldDeclarationInRecord = TYPE_RELATED | 1733;
    RecordAccessorMethodHasThrowsClause = TYPE_RELATED | 1734;
    RecordCanonicalConstructorHasThrowsClause = TYPE_RELATED | 1735;
    RecordCanonicalConstructorVisibilityReduced = TYPE_RELATED | 1736;
    RecordMultipleCanonicalConstructors = TYPE_RELATED | 1737;
    RecordCompactConstructorHasReturnStatement = TYPE_RELATED | 1738;
    RecordDuplicateComponent = TYPE_RELATED | 1739;
    RecordIllegalNativeModifierInRecord = TYPE_RELATED | 1740;
    RecordInstanceInitializerBlockInRecord = TYPE_RELATED | 1741;
    RestrictedTypeName = TYPE_RELATED | 1742;
    RecordIllegalAccessorReturnType = TYPE_RELATED | 1743;
    RecordAccessorMethodShouldNotBeGeneric = TYPE_RELATED | 1744;
    RecordAccessorMethodShouldBePublic = TYPE_RELATED | 1745;
    RecordCanonicalConstructorShouldNotBeGeneric = TYPE_RELATED | 1746;
    RecordCanonicalConstructorHasReturnStatement = TYPE_RELATED | 1747;
    RecordCanonicalConstructorHasExplicitConstructorCall = TYPE_RELATED | 1748;
    RecordCompactConstructorHasExplicitConstructorCall = TYPE_RELATED | 1749;
    RecordNestedRecordInherentlyStatic = TYPE_RELATED | 1750;
    RecordAccessorMethodShouldNotBeStatic = TYPE_RELATED | 1751;
    RecordCannotExtendRecord = TYPE_RELATED | 1752;
    RecordComponentCannotBeVoid = TYPE_RELATED | 1753;
    RecordIllegalVararg = TYPE_RELATED | 1754;
    RecordStaticReferenceToOuterLocalVariable = TYPE_RELATED | 1755;
    RecordCannotDefineRecordInLocalType = TYPE_RELATED | 1756;
    RecordComponentsCannotHaveModifiers = TYPE_RELATED | 1757;
    RecordIllegalParameterNameInCanonicalConstructor = TYPE_RELATED | 1758;
    RecordIllegalExplicitFinalFieldAssignInCompactConstructor = TYPE_RELATED | 1759;
    RecordMissingExplicitConstructorCallInNonCanonicalConstructor = TYPE_RELATED | 1760;
    RecordIllegalStaticModifierForLocalClassOrInterface = TYPE_RELATED | 1761;
    RecordIllegalModifierForLocalRecord = TYPE_RELATED | 1762;
    RecordIllegalExtendedDimensionsForRecordComponent = SYNTAX | INTERNAL | 1763;
    SafeVarargsOnSyntheticRecordAccessor = TYPE_RELATED | 1764;
    LocalStaticsIllegalVisibilityModifierForInterfaceLocalType = TYPE_RELATED | 1765;
    IllegalModifierForLocalEnumDeclaration = TYPE_RELATED | 1766;
    ClassExtendFinalRecord = TYPE_RELATED | 1767;
    RecordErasureIncompatibilityInCanonicalConstructor = TYPE_RELATED | 1768;
    PatternVariableNotInScope = PREVIEW_RELATED | 1780, deprecated;
    PatternVariableRedefined = INTERNAL | 1781;
    PatternSubtypeOfExpression = INTERNAL | 1782, deprecated;
    IllegalModifierForPatternVariable = INTERNAL | 1783;
    PatternVariableRedeclared = INTERNAL | 1784;
    DimensionsIllegalOnRecordPattern = INTERNAL | 1785;
    DiscouragedValueBasedTypeSynchronization = INTERNAL | 1820;
    SealedMissingClassModifier = TYPE_RELATED | 1850;
    SealedDisAllowedNonSealedModifierInClass = TYPE_RELATED | 1851;
    SealedSuperClassDoesNotPermit = TYPE_RELATED | 1852;
    SealedSuperInterfaceDoesNotPermit = TYPE_RELATED | 1853;
    SealedMissingSealedModifier = TYPE_RELATED | 1854;
    SealedMissingInterfaceModifier = TYPE_RELATED | 1855;
    SealedDuplicateTypeInPermits = TYPE_RELATED | 1856;
    SealedNotDirectSuperClass = TYPE_RELATED | 1857;
    SealedPermittedTypeOutsideOfModule = TYPE_RELATED | 1858;
    SealedPermittedTypeOutsideOfPackage = TYPE_RELATED | 1859;
    SealedSealedTypeMissingPermits = TYPE_RELATED | 1860;
    SealedInterfaceIsSealedAndNonSealed = TYPE_RELATED | 1861;
    SealedDisAllowedNonSealedModifierInInterface = TYPE_RELATED | 1862;
    SealedNotDirectSuperInterface = TYPE_RELATED | 1863;
    SealedLocalDirectSuperTypeSealed = TYPE_RELATED | 1864;
    SealedAnonymousClassCannotExtendSealedType = TYPE_RELATED | 1865;
    SealedSuperTypeInDifferentPackage = TYPE_RELATED | 1866;
    SealedSuperTypeDisallowed = TYPE_RELATED | 1867;
    LocalReferencedInGuardMustBeEffectivelyFinal = PREVIEW_RELATED | 1900;
    ConstantWithPatternIncompatible = PREVIEW_RELATED | 1901;
    IllegalFallthroughToPattern = PREVIEW_RELATED | 1902;
    PatternDominated = PREVIEW_RELATED | 1906;
    IllegalTotalPatternWithDefault = PREVIEW_RELATED | 1907;
    EnhancedSwitchMissingDefault = PREVIEW_RELATED | 1908;
    DuplicateTotalPattern = PREVIEW_RELATED | 1909;
    PatternSwitchNullOnlyOrFirstWithDefault = PREVIEW_RELATED | 1920;
    PatternSwitchCaseDefaultOnlyAsSecond = PREVIEW_RELATED | 1921;
    IllegalFallthroughFromAPattern = PREVIEW_RELATED | 1922;
    UnnecessaryNullCaseInSwitchOverNonNull = PREVIEW_RELATED | 1910;
    UnexpectedTypeinSwitchPattern = PREVIEW_RELATED | 1911;
    UnexpectedTypeinRecordPattern = PREVIEW_RELATED | 1912;
    RecordPatternMismatch = PREVIEW_RELATED | 1913;
    PatternTypeMismatch = PREVIEW_RELATED | 1914;
    RawTypeInRecordPattern = PREVIEW_RELATED | 1915, deprecated;
    FalseConstantInGuard = PREVIEW_RELATED | 1916;
    CannotInferRecordPatternTypes = PREVIEW_RELATED | 1940;
    IllegalRecordPattern = TYPE_RELATED | 1941;
    NamedPatternVariablesDisallowedHere = INTERNAL | 1942;
    ImplicitClassMissingMainMethod = PREVIEW_RELATED | 1950;
    SyntheticAccessorNotEnclosingMethod = METHOD_RELATED | 1990;
    UnderscoreCannotBeUsedHere = PREVIEW_RELATED | 2000;
    UnnamedVariableMustHaveInitializer = PREVIEW_RELATED | 2001;
    ExpressionInPreConstructorContext = PREVIEW_RELATED | 2022;
    DisallowedStatementInPrologue = PREVIEW_RELATED | 2023;
}
