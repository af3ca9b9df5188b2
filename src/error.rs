use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The embedded curl argument parser rejected the token stream.
    #[error(transparent)]
    Argument(#[from] clap::Error),

    #[error("no closing quotation in curl command, near `{0}`")]
    UnbalancedQuote(String),

    #[error("header `{0}` has no `:` separator")]
    HeaderFormat(String),
}
