use crate::curl::ParsedContext;

/// Render the streamlink invocation for a parsed curl command.
///
/// The url comes first, then the `best` quality selector, then one
/// `--http-header name=value` pair per retained header, in capture order.
/// Values were already quoted where needed, so this is a plain join.
pub fn generate_streamlink_command(parsed_context: &ParsedContext) -> String {
    let mut tokens = vec![
        "streamlink".to_owned(),
        parsed_context.url.clone(),
        "best".to_owned(),
    ];

    for (name, value) in parsed_context.headers.iter() {
        tokens.push("--http-header".to_owned());
        tokens.push(format!("{name}={value}"));
    }

    tokens.join(" ")
}
