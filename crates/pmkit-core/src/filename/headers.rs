//! Minimal response-header view with case-insensitive lookup.

/// Case-insensitive header retrieval, the part of an HTTP response the
/// filename helpers need.
pub trait HeaderLookup {
    /// Value of the first header named `name` (ASCII case-insensitive), if any.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Ordered list of response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Parses raw `Name: value` lines (as dumped by curl). Status lines and
    /// blank lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut headers = Self::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with("HTTP/") {
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim(), value.trim());
            }
        }
        headers
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderLookup for Headers {
    fn header(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (k, v) in iter {
            headers.insert(k.as_ref(), v.as_ref());
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let h: Headers = [("Content-Disposition", "attachment")].into_iter().collect();
        assert_eq!(h.header("content-disposition"), Some("attachment"));
        assert_eq!(h.header("CONTENT-DISPOSITION"), Some("attachment"));
        assert_eq!(h.header("content-type"), None);
    }

    #[test]
    fn from_lines_skips_status_and_blank() {
        let h = Headers::from_lines([
            "HTTP/1.1 200 OK",
            "Content-Type: application/pdf",
            "",
            "Content-Disposition: attachment; filename=a.pdf",
        ]);
        assert_eq!(h.len(), 2);
        assert_eq!(h.header("content-type"), Some("application/pdf"));
        assert_eq!(
            h.header("content-disposition"),
            Some("attachment; filename=a.pdf")
        );
    }

    #[test]
    fn first_value_wins() {
        let mut h = Headers::new();
        h.insert("X-Tag", "one");
        h.insert("x-tag", "two");
        assert_eq!(h.header("x-tag"), Some("one"));
    }
}
