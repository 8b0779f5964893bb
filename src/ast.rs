// File: src/ast.rs
//
// Abstract Syntax Tree (AST) definitions for the Rill programming language.
// Defines the structure of Rill programs as handed to the analysis passes.
//
// The tree is a strict ownership hierarchy: every node is owned by exactly
// one parent, and analysis passes borrow it immutably. Expressions (Expr)
// represent values and computations, while Statements (Stmt) represent
// actions and control flow. A Program is the single root node.

use std::fmt;

use serde::Serialize;

/// Declared-type tags for bindings, literals, and function signatures.
///
/// Name resolution only cares about the existence of a binding and whether
/// it is a function, so the tags carry no structure beyond their identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Int,
    Float,
    Bool,
    Str,
    Void,
    /// The tag bound to every function name in the global scope.
    Function,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::Str => "string",
            TypeTag::Void => "void",
            TypeTag::Function => "function",
        };
        write!(f, "{}", name)
    }
}

/// A variable declaration: `int x = 5;`
///
/// Used both for globals (owned by the Program) and for locals (wrapped in
/// `Stmt::VarDecl`). The initializer is optional.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub ty: TypeTag,
    pub name: String,
    pub init: Option<Expr>,
}

/// A function parameter: a name with its declared type.
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: TypeTag,
    pub name: String,
}

/// A function declaration with an optional body.
///
/// A function without a body is a pure declaration; its name still enters
/// the global scope.
#[derive(Debug, Clone)]
pub struct Function {
    pub return_type: TypeTag,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Option<Stmt>,
}

/// Represents a statement in Rill - an action or control-flow construct.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `{ ... }` - introduces one new lexical scope.
    Block(Vec<Stmt>),
    /// A local variable declaration; binds a name in the current scope.
    VarDecl(VarDecl),
    /// `target = value;` - does not introduce a binding.
    Assign { target: String, value: Expr },
    /// An expression in statement position, e.g. a bare call.
    ExprStmt(Expr),
    /// `return;` or `return expr;`
    Return(Option<Expr>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    /// `for (init; condition; step) body`
    ///
    /// The header and the body share one lexical scope, so a variable
    /// declared in `init` is visible to `condition`, `step`, and `body`.
    For {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        step: Option<Box<Stmt>>,
        body: Box<Stmt>,
    },
}

/// Represents an expression in Rill - something that evaluates to a value.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A literal with its type tag and textual value, e.g. `("int", "42")`.
    Literal { ty: TypeTag, value: String },
    /// A bare name used as a value (variable read).
    Name(String),
    BinaryOp {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call { name: String, args: Vec<Expr> },
}

/// An entire Rill program: global variables followed by functions.
///
/// Both sequences preserve declaration order; the analyzer reports errors
/// in that order. Either sequence may be empty.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub globals: Vec<VarDecl>,
    pub functions: Vec<Function>,
}
