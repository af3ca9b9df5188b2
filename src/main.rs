use std::io::{self, BufRead, Read, Write};

use anyhow::Result;
use arboard::Clipboard;

use curl2streamlink::curl::parse_context;
use curl2streamlink::streamlink::generate_streamlink_command;

/// Where the curl command comes from.
enum InputSource {
    /// A curl command pasted as-is.
    RawCurl(String),
    /// A url plus raw `name: value` lines, as shown in a browser's request
    /// inspector.
    UrlAndHeaders { url: String, lines: Vec<String> },
}

impl InputSource {
    /// Resolve either input mode to a single curl command string.
    fn into_curl_command(self) -> String {
        match self {
            InputSource::RawCurl(text) => text,
            InputSource::UrlAndHeaders { url, lines } => {
                let mut parts = vec![format!("curl '{url}'")];
                for line in lines.iter().filter(|line| !line.trim().is_empty()) {
                    parts.push(format!("-H '{line}'"));
                }
                parts.join(" ")
            }
        }
    }
}

fn prompt(text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_owned())
}

/// Returns `None` when the mode selection is neither `0` nor `1`.
fn read_source() -> io::Result<Option<InputSource>> {
    let input_type = prompt("Request header: 0, curl command: 1  ")?;
    match input_type.trim() {
        "0" => {
            let url = prompt("Input request url: ")?;
            println!("Input request headers (End: Ctrl-D)");
            let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
            Ok(Some(InputSource::UrlAndHeaders { url, lines }))
        }
        "1" => {
            println!("Input curl command (End: Ctrl-D)");
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            Ok(Some(InputSource::RawCurl(text)))
        }
        _ => Ok(None),
    }
}

fn main() -> Result<()> {
    let Some(source) = read_source()? else {
        println!("not proper input");
        return Ok(());
    };

    let parsed = parse_context(&source.into_curl_command())?;
    let streamlink_command = generate_streamlink_command(&parsed);
    println!("{streamlink_command}");

    Clipboard::new()?.set_text(streamlink_command)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_curl_passes_through() {
        let source = InputSource::RawCurl("curl 'http://x' -H 'a: b'".to_owned());
        assert_eq!(source.into_curl_command(), "curl 'http://x' -H 'a: b'");
    }

    #[test]
    fn test_url_and_headers_synthesis() {
        let source = InputSource::UrlAndHeaders {
            url: "http://e.com".to_owned(),
            lines: vec!["Accept: */*".to_owned(), "".to_owned()],
        };
        assert_eq!(
            source.into_curl_command(),
            "curl 'http://e.com' -H 'Accept: */*'"
        );
    }

    #[test]
    fn test_synthesized_command_runs_the_pipeline() {
        let source = InputSource::UrlAndHeaders {
            url: "http://e.com".to_owned(),
            lines: vec!["Accept: */*".to_owned()],
        };
        let parsed = parse_context(&source.into_curl_command()).unwrap();
        assert_eq!(
            generate_streamlink_command(&parsed),
            "streamlink http://e.com best --http-header Accept=*/*"
        );
    }
}
