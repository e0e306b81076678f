//! Download file names from response headers.

mod content_disposition;
mod headers;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use headers::{HeaderLookup, Headers};
pub use sanitize::sanitize_file_name;

const CONTENT_DISPOSITION: &str = "content-disposition";
const FILENAME_TOKEN: &str = "filename=";

fn content_disposition(response: &impl HeaderLookup) -> Option<&str> {
    let value = response
        .header(CONTENT_DISPOSITION)
        .filter(|v| !v.is_empty());
    if value.is_none() {
        tracing::warn!("could not read content disposition header");
        tracing::warn!("returning default file name");
    }
    value
}

/// Returns everything after the first `filename=` in the `Content-Disposition`
/// header, or `fallback` if the header or the token is missing.
///
/// The value is returned verbatim: `filename="a.pdf"` yields `"a.pdf"` with the
/// quotes. Use [`extract_file_name_decoded`] for an unquoted, decoded name.
pub fn extract_file_name(response: &impl HeaderLookup, fallback: &str) -> String {
    content_disposition(response)
        .and_then(|value| {
            let at = value.find(FILENAME_TOKEN)?;
            Some(value[at + FILENAME_TOKEN.len()..].to_string())
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Like [`extract_file_name`], but parses the header parameters: quotes are
/// stripped and `filename*=UTF-8''...` is decoded and preferred.
pub fn extract_file_name_decoded(response: &impl HeaderLookup, fallback: &str) -> String {
    content_disposition(response)
        .and_then(parse_content_disposition_filename)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `f` under a fmt subscriber and returns what it logged.
    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn assert_fallback_warnings(logs: &str) {
        assert_eq!(logs.matches("WARN").count(), 2, "logs: {logs}");
        assert!(logs.contains("could not read content disposition header"));
        assert!(logs.contains("returning default file name"));
    }

    fn with_disposition(value: &str) -> Headers {
        [("Content-Disposition", value)].into_iter().collect()
    }

    #[test]
    fn token_value() {
        let r = with_disposition("attachment; filename=report.pdf");
        assert_eq!(extract_file_name(&r, "fallback.bin"), "report.pdf");
    }

    #[test]
    fn missing_header_uses_fallback() {
        assert_eq!(extract_file_name(&Headers::new(), "fallback.bin"), "fallback.bin");
        let empty = with_disposition("");
        assert_eq!(extract_file_name(&empty, "fallback.bin"), "fallback.bin");
    }

    #[test]
    fn header_without_token_uses_fallback() {
        let r = with_disposition("inline");
        assert_eq!(extract_file_name(&r, "fallback.bin"), "fallback.bin");
        let star_only = with_disposition("attachment; filename*=UTF-8''a.txt");
        assert_eq!(extract_file_name(&star_only, "fallback.bin"), "fallback.bin");
    }

    #[test]
    fn quotes_and_trailing_text_are_kept() {
        let r = with_disposition("attachment; filename=\"report.pdf\"");
        assert_eq!(extract_file_name(&r, "x"), "\"report.pdf\"");
        let r = with_disposition("attachment; filename=a.pdf; size=10");
        assert_eq!(extract_file_name(&r, "x"), "a.pdf; size=10");
    }

    #[test]
    fn token_match_is_case_sensitive() {
        let r = with_disposition("attachment; FILENAME=a.pdf");
        assert_eq!(extract_file_name(&r, "x"), "x");
    }

    #[test]
    fn header_name_is_case_insensitive() {
        let r: Headers = [("CONTENT-DISPOSITION", "attachment; filename=b.txt")]
            .into_iter()
            .collect();
        assert_eq!(extract_file_name(&r, "x"), "b.txt");
    }

    #[test]
    fn decoded_variant() {
        let r = with_disposition("attachment; filename=\"report.pdf\"");
        assert_eq!(extract_file_name_decoded(&r, "x"), "report.pdf");
        let r = with_disposition("attachment; filename*=UTF-8''na%C3%AFve.txt");
        assert_eq!(extract_file_name_decoded(&r, "x"), "naïve.txt");
        assert_eq!(extract_file_name_decoded(&Headers::new(), "x"), "x");
    }

    #[test]
    fn missing_header_logs_two_warnings() {
        let logs = captured_logs(|| {
            assert_eq!(extract_file_name(&Headers::new(), "f.bin"), "f.bin");
        });
        assert_fallback_warnings(&logs);
    }

    #[test]
    fn empty_header_logs_two_warnings() {
        let logs = captured_logs(|| {
            assert_eq!(extract_file_name(&with_disposition(""), "f.bin"), "f.bin");
        });
        assert_fallback_warnings(&logs);
    }

    #[test]
    fn header_without_token_logs_nothing() {
        let logs = captured_logs(|| {
            assert_eq!(extract_file_name(&with_disposition("inline"), "f.bin"), "f.bin");
        });
        assert!(!logs.contains("WARN"), "logs: {logs}");
    }
}
