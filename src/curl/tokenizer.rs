use nom::{
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, recognize},
    error::context,
    multi::{fold_many0, many1},
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::{ConvertError, Result};

/// Collapse shell line continuations (" \<newline>") into a single space.
///
/// Idempotent: a second pass finds nothing left to replace.
pub fn normalize_newlines(multiline_text: &str) -> String {
    multiline_text.replace(" \\\n", " ")
}

/// A quoted span keeps its surrounding quotes; stripping them is a
/// per-argument concern that happens after the tokens are classified.
fn single_quoted_span(input: &str) -> IResult<&str, &str> {
    context(
        "single quoted span",
        recognize(delimited(char('\''), take_till(|c| c == '\''), char('\''))),
    )(input)
}

fn double_quoted_span(input: &str) -> IResult<&str, &str> {
    context(
        "double quoted span",
        recognize(delimited(char('"'), take_till(|c| c == '"'), char('"'))),
    )(input)
}

fn bare_span(input: &str) -> IResult<&str, &str> {
    context(
        "bare span",
        take_while1(|c: char| !c.is_whitespace() && c != '\'' && c != '"'),
    )(input)
}

/// One token: adjacent quoted and bare spans concatenated, e.g.
/// `-H` or `'Accept: */*'`.
fn token(input: &str) -> IResult<&str, String> {
    context(
        "token",
        preceded(
            multispace0,
            map(
                many1(alt((single_quoted_span, double_quoted_span, bare_span))),
                |spans| spans.concat(),
            ),
        ),
    )(input)
}

fn tokens(input: &str) -> IResult<&str, Vec<String>> {
    context(
        "tokens",
        fold_many0(token, Vec::new, |mut acc: Vec<String>, t| {
            acc.push(t);
            acc
        }),
    )(input)
}

/// Split a command line into shell-like tokens.
///
/// Tokens are separated by whitespace. Quoted spans may contain whitespace
/// and are carried verbatim, quotes included; nothing is word-split or
/// glob-expanded. A quote that never closes leaves residual input behind,
/// which is reported as an error.
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let (rest, parsed) = tokens(input)
        .map_err(|_| ConvertError::UnbalancedQuote(input.trim().to_owned()))?;
    if rest.trim().is_empty() {
        Ok(parsed)
    } else {
        #[cfg(feature = "debug-print")]
        eprintln!("tokenizer stopped with residual input: ({})", rest);

        Err(ConvertError::UnbalancedQuote(rest.trim().to_owned()))
    }
}
