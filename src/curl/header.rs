use winnow::{
    combinator::preceded,
    token::{take_until, take_while},
    ModalResult, Parser,
};

use crate::error::{ConvertError, Result};

/// Split on the first colon; everything after it belongs to the value.
fn header_pair<'a>(s: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    let name = take_until(0.., ':').parse_next(s)?;
    let value = preceded(':', take_while(0.., |_: char| true)).parse_next(s)?;
    Ok((name, value))
}

/// Split a raw `name: value` header into its name and value parts.
///
/// A header without a colon separator is malformed and fails the whole run.
pub fn split_header(raw: &str) -> Result<(String, String)> {
    let mut s = raw;
    header_pair(&mut s)
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .map_err(|_| ConvertError::HeaderFormat(raw.to_owned()))
}

/// Strip the single leading quote a raw copy-paste leaves on the name.
pub fn normalize_name(name: &str) -> String {
    name.strip_prefix('\'').unwrap_or(name).to_owned()
}

/// Strip the single trailing quote, trim, and single-quote the value again
/// when it contains a space or a double quote.
pub fn normalize_value(value: &str) -> String {
    let value = value.strip_suffix('\'').unwrap_or(value);
    let value = value.trim();
    if value.contains(' ') || value.contains('"') {
        format!("'{value}'")
    } else {
        value.to_owned()
    }
}
