use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved filter key that matches on the node type id instead of a characteristic title
pub const NODE_TYPE_FILTER_KEY: &str = "nodeTypeId";

/// One query constraint for the card listing.
///
/// `key` is either [`NODE_TYPE_FILTER_KEY`] or a characteristic title. An empty
/// `value` only requires the node to carry the characteristic at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilter {
    pub key: String,
    pub value: String,
}

impl CardFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Generated SQL fragment plus its positional parameters (`$1`, `$2`, ...)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}

impl SqlResult {
    /// `WHERE <predicate>` or an empty string when there is nothing to filter on
    pub fn where_clause(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.query)
        }
    }

    /// Index the next placeholder appended after this fragment must use
    pub fn next_param_index(&self) -> usize {
        self.params.len() + 1
    }
}
