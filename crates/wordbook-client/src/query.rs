/// Request path plus ordered query parameters.
///
/// Keys and values are percent-encoded when the query is rendered. Order is
/// kept exactly as supplied; nothing is sorted or deduplicated, and callers
/// leave out optional arguments that are absent or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    path: String,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as `path?k=v&k=v`, or the bare path when there are no params
    pub fn encode(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }

        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();

        format!("{}?{}", self.path, pairs.join("&"))
    }
}
