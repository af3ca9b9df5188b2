use curl2streamlink::curl::parse_context;
use curl2streamlink::streamlink::generate_streamlink_command;

fn main() {
    let curl_command =
        "curl 'http://example.com' -H 'Accept: application/json' -H 'User-Agent: demo'";
    match parse_context(curl_command) {
        Ok(parsed) => println!("{}", generate_streamlink_command(&parsed)),
        Err(e) => eprintln!("{e}"),
    }
}
