use serde::{Deserialize, Serialize};

/// Index of a node inside its [`SourceFile`](crate::source::SourceFile) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Half-open byte range `[start, end)` into the snippet source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

/// One-based line and column of a source offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Node kinds produced by the upstream parser.
///
/// Child layouts are fixed per kind, e.g. `BinaryExpression` is
/// `[left, operator, right]` and `CallExpression` is `[callee, args...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    SourceFile,

    // Statements
    Block,
    ExpressionStatement,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    ReturnStatement,
    IfStatement,
    ForOfStatement,
    ImportDeclaration,

    // Declarations
    ClassDeclaration,
    InterfaceDeclaration,
    PropertyDeclaration,
    PropertySignature,
    MethodDeclaration,
    MethodSignature,
    Constructor,
    FunctionDeclaration,
    Parameter,

    // Literals and names
    Identifier,
    StringLiteral,
    NoSubstitutionTemplateLiteral,
    NumericLiteral,
    TemplateExpression,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    ThisKeyword,
    SuperKeyword,
    Token,

    // Expressions
    BinaryExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    Decorator,
    PropertyAccessExpression,
    ElementAccessExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    ArrayLiteralExpression,
    SpreadElement,
    ParenthesizedExpression,
    AsExpression,
    NonNullExpression,
    ArrowFunction,
    VoidExpression,
}

impl SyntaxKind {
    /// Call-like kinds whose signature the type surface can resolve.
    pub fn is_call_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::CallExpression
                | SyntaxKind::NewExpression
                | SyntaxKind::TaggedTemplateExpression
                | SyntaxKind::Decorator
        )
    }

    pub fn is_string_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral
        )
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Arena entry for a single node.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Cooked text: unquoted string literal contents, identifier names.
    pub value: Option<String>,
}
