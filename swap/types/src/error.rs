use thiserror::Error;

/// Failure to parse one of the primitive identities from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("name `{input}` is longer than 13 characters")]
    NameTooLong { input: String },

    #[error("name `{input}` contains invalid character `{ch}`")]
    NameInvalidChar { input: String, ch: char },

    #[error("thirteenth character of name `{input}` must be one of `.1-5a-j`")]
    NameInvalidLastChar { input: String },

    #[error("symbol code `{input}` is longer than 7 characters")]
    SymbolCodeTooLong { input: String },

    #[error("symbol code `{input}` contains non-ascii characters")]
    SymbolCodeNotAscii { input: String },

    #[error("symbol `{input}` must be in the form `<precision>,<CODE>`")]
    SymbolMalformed { input: String },

    #[error("asset `{input}` must be in the form `<amount> <CODE>`")]
    AssetMalformed { input: String },
}

pub type ParseResult<T> = core::result::Result<T, ParseError>;
