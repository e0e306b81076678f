//! `pmkit filename` – download name from response headers.

use pmkit_core::filename::{extract_file_name, extract_file_name_decoded, Headers};

pub(super) fn file_name_for(headers: &[String], fallback: &str, decode: bool) -> String {
    let headers = Headers::from_lines(headers);
    if decode {
        extract_file_name_decoded(&headers, fallback)
    } else {
        extract_file_name(&headers, fallback)
    }
}

pub fn run_filename(headers: &[String], fallback: &str, decode: bool) {
    println!("{}", file_name_for(headers, fallback, decode));
}
