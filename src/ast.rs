use std::fmt;

/// A complete parsed program: the ordered sequence of top-level statements.
///
/// `Program` is the root of every AST and the sole input of the evaluator.
/// Its `Display` implementation re-prints the tree in a canonical,
/// fully-parenthesized form that the test suite relies on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the consequence and alternative of `if` expressions and
/// as function bodies. A block is not an expression on its own; it only
/// exists inside those constructs.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>;`.
    Let {
        /// The identifier being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
    },
    /// A `return` statement with an optional value: `return <value>;`.
    Return {
        /// The returned expression, absent for a bare `return;`.
        value: Option<Expr>,
    },
    /// A bare expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// An expression node.
///
/// Monkey is expression-oriented: everything from literals to `if` and
/// function literals produces a value. Each variant owns its children; the
/// tree is acyclic and immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A name to resolve against the environment chain.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// A double-quoted string literal (contents only, no quotes).
    StringLiteral(String),
    /// A prefix operation such as `!ok` or `-x`.
    Prefix {
        /// The operator to apply.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Expr>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional expression with an optional `else` branch.
    If {
        /// The condition deciding which branch runs.
        condition:   Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStmt,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStmt>,
    },
    /// A function literal: `fn(<params>) { <body> }`.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStmt,
    },
    /// A call expression: `<callee>(<arguments>)`.
    Call {
        /// The expression producing the function to call.
        callee:    Box<Expr>,
        /// Argument expressions in call order.
        arguments: Vec<Expr>,
    },
    /// An array literal: `[<elements>]`.
    ArrayLiteral {
        /// Element expressions in source order.
        elements: Vec<Expr>,
    },
    /// An index expression: `<collection>[<index>]`.
    Index {
        /// The array or hash being indexed.
        collection: Box<Expr>,
        /// The index or key expression.
        index:      Box<Expr>,
    },
    /// A hash literal: `{<key>: <value>, ...}`.
    HashLiteral {
        /// Key/value expression pairs in source order.
        pairs: Vec<(Expr, Expr)>,
    },
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// An infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// Writes a statement sequence separated by single spaces.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (index, statement) in statements.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{statement}")?;
    }
    Ok(())
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Index { collection, index } => write!(f, "({collection}[{index}])"),
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
