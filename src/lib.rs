pub mod curl;
pub mod error;
pub mod streamlink;

mod test_util;
