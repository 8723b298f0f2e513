use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Signs are not part of the
    /// literal; `-42` lexes as `-` followed by `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// String literal tokens, such as `"hello"`. No escape sequences are
    /// processed. A string missing its closing quote captures everything up
    /// to the end of input.
    #[regex(r#""[^"]*"?"#, parse_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// An unrecognized character, carried verbatim for diagnostics. The
    /// catch-all pattern loses every priority tie, so it only matches
    /// characters no other rule wants; the parser reports it as a syntax
    /// error instead of the lexer aborting the scan.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
    /// End of input. Appended by [`tokenize`]; the parser relies on it as a
    /// sentinel for its two-token lookahead.
    Eof,

    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds between tokens.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Token {
    /// Returns the token-kind name used in parser diagnostics.
    ///
    /// Single-character operators and delimiters are named by their own
    /// spelling; everything else uses an upper-case tag such as `IDENT` or
    /// `FUNCTION`. These names appear in messages like
    /// `expected next token to be =, got IDENT instead`.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INT",
            Self::Bool(true) => "TRUE",
            Self::Bool(false) => "FALSE",
            Self::Str(_) => "STRING",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Identifier(_) => "IDENT",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Eof => "EOF",
            // NewLine and Ignored are skipped during lexing and never reach
            // the token stream.
            Self::Illegal(_) | Self::NewLine | Self::Ignored => "ILLEGAL",
        }
    }
}

/// Tokenizes an entire source string.
///
/// Unrecognized characters surface as [`Token::Illegal`] entries instead
/// of aborting the scan, so the parser can report them alongside any
/// other syntax errors. The stream is terminated by a single
/// [`Token::Eof`].
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// Every token paired with the line it starts on.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let five = 5;");
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[3], (Token::Integer(5), 1));
/// assert_eq!(tokens.last(), Some(&(Token::Eof, 1)));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line));
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    tokens
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in 64 bits; the slice then
///   surfaces as [`Token::Illegal`].
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Extracts the contents of a string literal, dropping the surrounding
/// quotes. The closing quote may be missing at end of input; the capture is
/// kept as-is in that case. Embedded newlines still advance the line
/// counter.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let newlines = slice.chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;

    let body = &slice[1..];
    body.strip_suffix('"').unwrap_or(body).to_string()
}
