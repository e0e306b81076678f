//! RFC 6266 style `Content-Disposition` filename parsing (`filename` and `filename*`).

/// Extracts the filename from a raw Content-Disposition header value.
///
/// Supports:
/// - `filename="value"` (quoted; strips quotes and unescapes)
/// - `filename=value` (token)
/// - `filename*=UTF-8''percent-encoded` (RFC 5987; decoded)
///
/// If both `filename` and `filename*` exist, `filename*` takes precedence.
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    let mut from_token: Option<String> = None;

    for param in header_value.trim().split(';') {
        let Some((name, v)) = param.trim().split_once('=') else {
            continue;
        };
        let name = name.trim();
        let v = v.trim();

        if name.eq_ignore_ascii_case("filename*") {
            let encoded = v
                .get(..7)
                .filter(|p| p.eq_ignore_ascii_case("utf-8''"))
                .map(|_| &v[7..]);
            if let Some(rest) = encoded {
                let decoded = unescape_quoted(&percent_decode(rest));
                if !decoded.is_empty() {
                    return Some(decoded);
                }
            }
        } else if name.eq_ignore_ascii_case("filename") {
            let value = match v.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
                Some(inner) => unescape_quoted(inner),
                None => v.to_string(),
            };
            if !value.is_empty() {
                from_token = Some(value);
            }
        }
    }

    from_token
}

/// Undo backslash escapes of `"` and `\` inside a quoted value.
fn unescape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('\\', Some(&next)) if next == '"' || next == '\\' => {
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Lenient percent-decoding; malformed escapes are kept as-is and invalid UTF-8 is replaced.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let pair = bytes.get(i + 1).copied().and_then(hex_digit).zip(
                bytes.get(i + 2).copied().and_then(hex_digit),
            );
            if let Some((high, low)) = pair {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
