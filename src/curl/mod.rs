pub mod header;
pub mod tokenizer;

use clap::{Arg, ArgAction, Command};

use crate::error::Result;

/// Header names dropped during translation, matched case-insensitively.
/// These are browser-specific and would mismatch between capture time and
/// playback time.
pub const EXCLUDE_HEADERS: [&str; 2] = ["sec-ch-ua", "user-agent"];

/// Ordered collection of HTTP headers.
///
/// Iteration follows insertion order. Assigning a name that is already
/// present replaces the value in place; the entry keeps its original
/// position instead of moving to the end. Name matching for replacement is
/// exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parsed curl command: the target url and the headers worth keeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContext {
    pub url: String,
    pub headers: Headers,
}

/// The argument surface of a captured curl command. Anything a browser's
/// "copy as curl" emits beyond this is rejected, not silently skipped.
fn curl_args() -> Command {
    Command::new("curl")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("command")
                .help("The curl command word itself")
                .required(true),
        )
        .arg(Arg::new("url").help("The target url").required(true))
        .arg(
            Arg::new("header")
                .short('H')
                .long("header")
                .help("A raw `name: value` request header")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("compressed")
                .long("compressed")
                .help("Accepted for compatibility, has no effect")
                .action(ArgAction::SetTrue),
        )
}

fn strip_url_quotes(url: &str) -> &str {
    let url = url.strip_prefix('\'').unwrap_or(url);
    url.strip_suffix('\'').unwrap_or(url)
}

/// Parse the given curl command and extract the url and headers.
///
/// Headers in [`EXCLUDE_HEADERS`] are dropped; the rest keep the order they
/// were captured in.
pub fn parse_context(curl_command: &str) -> Result<ParsedContext> {
    let tokens = tokenizer::tokenize(&tokenizer::normalize_newlines(curl_command))?;
    let matches = curl_args().try_get_matches_from(tokens)?;

    let url = matches.get_one::<String>("url").expect("url is required");
    let url = strip_url_quotes(url).to_owned();

    let mut headers = Headers::new();
    if let Some(raw_headers) = matches.get_many::<String>("header") {
        for raw in raw_headers {
            let (name, value) = header::split_header(raw)?;
            let name = header::normalize_name(&name);
            if EXCLUDE_HEADERS
                .iter()
                .any(|excluded| name.eq_ignore_ascii_case(excluded))
            {
                continue;
            }
            headers.set(name, header::normalize_value(&value));
        }
    }

    Ok(ParsedContext { url, headers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_headers_keep_insertion_order() {
        let mut headers = Headers::new();
        headers.set("B", "2");
        headers.set("A", "1");
        headers.set("C", "3");
        let order: Vec<&str> = headers.iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_headers_replace_in_place() {
        let mut headers = Headers::new();
        headers.set("A", "1");
        headers.set("B", "2");
        headers.set("A", "3");
        let entries: Vec<(&str, &str)> = headers.iter().collect();
        assert_eq!(entries, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_parse_context_unquotes_url() {
        let parsed = parse_context("curl 'http://x'").unwrap();
        assert_eq!(parsed.url, "http://x");
        assert!(parsed.headers.is_empty());

        let parsed = parse_context("curl http://x").unwrap();
        assert_eq!(parsed.url, "http://x");
    }

    #[test]
    fn test_parse_context_collects_headers_in_order() {
        let parsed = parse_context(
            "curl 'http://example.com' -H 'Accept: */*' -H 'Referer: http://example.com/'",
        )
        .unwrap();
        let entries: Vec<(&str, &str)> = parsed.headers.iter().collect();
        assert_eq!(
            entries,
            vec![("Accept", "*/*"), ("Referer", "http://example.com/")]
        );
    }

    #[test]
    fn test_parse_context_drops_excluded_headers() {
        let parsed = parse_context(
            "curl 'http://x' -H 'User-Agent: Mozilla/5.0' -H 'SEC-CH-UA: \"Chromium\"' -H 'Accept: */*'",
        )
        .unwrap();
        let entries: Vec<(&str, &str)> = parsed.headers.iter().collect();
        assert_eq!(entries, vec![("Accept", "*/*")]);
    }

    #[test]
    fn test_parse_context_accepts_compressed_flag() {
        let parsed = parse_context("curl 'http://x' --compressed").unwrap();
        assert_eq!(parsed.url, "http://x");
        assert!(parsed.headers.is_empty());
    }

    #[test]
    fn test_parse_context_rejects_unknown_flag() {
        let result = parse_context("curl 'http://x' --bogus");
        assert!(matches!(result, Err(ConvertError::Argument(_))));
    }

    #[test]
    fn test_parse_context_requires_url() {
        let result = parse_context("curl");
        assert!(matches!(result, Err(ConvertError::Argument(_))));
    }

    #[test]
    fn test_parse_context_rejects_header_without_colon() {
        let result = parse_context("curl 'http://x' -H 'BadHeaderNoColon'");
        assert!(matches!(result, Err(ConvertError::HeaderFormat(_))));
    }

    #[test]
    fn test_parse_context_long_header_flag() {
        let parsed =
            parse_context("curl 'http://x' --header 'Accept: text/html'").unwrap();
        assert_eq!(parsed.headers.get("Accept"), Some("text/html"));
    }
}
