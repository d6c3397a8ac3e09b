/// Query string of `/api/search` and `/search`.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// Builds the params from raw query pairs. A repeated `q` keeps its
    /// first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> SearchParams {
        let q = pairs.into_iter().find(|(k, _)| k == "q").map(|(_, v)| v);
        SearchParams { q }
    }

    /// The query if one was actually given.
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}
