use serde_json::Value;

use super::types::{CardFilter, SqlResult, NODE_TYPE_FILTER_KEY};

/// Builds the card listing predicate from filter pairs.
///
/// Every pair becomes one parenthesized condition and all conditions are joined
/// with `AND`. Repeated keys are not merged: `color=red` and `color=blue`
/// produce two independent conditions that must both hold.
pub struct FilterWhere {
    param_values: Vec<Value>,
    param_index: usize,
    conditions: Vec<String>,
}

impl FilterWhere {
    pub fn new(starting_param_index: usize) -> Self {
        Self {
            param_values: vec![],
            param_index: starting_param_index,
            conditions: vec![],
        }
    }

    /// Build a predicate whose placeholders start at `$1`.
    pub fn generate(filters: &[CardFilter]) -> SqlResult {
        let mut filter_where = Self::new(0);
        filter_where.build(filters)
    }

    fn build(&mut self, filters: &[CardFilter]) -> SqlResult {
        for filter in filters {
            self.parse_filter(filter);
        }

        SqlResult {
            query: self.conditions.join(" AND "),
            params: std::mem::take(&mut self.param_values),
        }
    }

    fn parse_filter(&mut self, filter: &CardFilter) {
        if filter.key == NODE_TYPE_FILTER_KEY {
            match filter.value.parse::<i32>() {
                Ok(node_type_id) => {
                    let p = self.param(Value::from(node_type_id));
                    self.conditions.push(format!("(nt.id = {})", p));
                }
                Err(_) => {
                    tracing::warn!(
                        value = %filter.value,
                        "Invalid nodeTypeId filter value, skipping nodeTypeId filter"
                    );
                }
            }
            return;
        }

        if filter.value.is_empty() {
            let title = self.param(Value::String(filter.key.clone()));
            self.conditions.push(format!("(c.title = {})", title));
        } else {
            let title = self.param(Value::String(filter.key.clone()));
            let value = self.param(Value::String(filter.value.clone()));
            self.conditions
                .push(format!("(c.title = {} AND cv.value = {})", title, value));
        }
    }

    fn param(&mut self, value: Value) -> String {
        self.param_values.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }
}
