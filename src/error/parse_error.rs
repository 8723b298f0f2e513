#[derive(Debug)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Parse errors are collected by the parser rather than raised: a failed
/// statement is skipped and parsing resumes at the next statement boundary,
/// so a single pass reports every syntax problem it can find.
pub enum ParseError {
    /// The parser required a specific token and found something else.
    ExpectedToken {
        /// The token-kind name that was required.
        expected: &'static str,
        /// The token-kind name actually found.
        got:      String,
    },
    /// No expression can start with the token at the current position.
    NoPrefixParse {
        /// The token-kind name of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected, got } => {
                write!(f, "expected next token to be {expected}, got {got} instead")
            },

            Self::NoPrefixParse { token, line } => write!(f,
                                                          "Error on line {line}: no prefix parse function for {token} found."),
        }
    }
}

impl std::error::Error for ParseError {}
