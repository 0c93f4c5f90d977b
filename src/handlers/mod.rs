//! HTTP handlers, one module per resource under `/api`.
//!
//! Handlers unpack and validate the request, call one service method, and wrap
//! the result in the success envelope. Errors convert into `ApiError`.

pub mod cards;
pub mod characteristics;
pub mod node_types;
pub mod nodes;
pub mod orders;
pub mod selectors;
pub mod sizes;

use serde::Deserialize;

use crate::error::ApiError;

/// `page`/`size` query parameters of entity listings. Unparsable values are
/// treated as absent and normalized by the service.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> Option<i64> {
        self.page.as_deref().and_then(|v| v.trim().parse().ok())
    }

    pub fn size(&self) -> Option<i64> {
        self.size.as_deref().and_then(|v| v.trim().parse().ok())
    }
}

/// Path ids must be positive
pub fn check_id(id: i32) -> Result<i32, ApiError> {
    if id < 1 {
        return Err(ApiError::bad_request(format!("Invalid id: {}", id)));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_ignores_garbage() {
        let q = PageQuery {
            page: Some("2".into()),
            size: Some("abc".into()),
        };
        assert_eq!(q.page(), Some(2));
        assert_eq!(q.size(), None);
        assert!(check_id(0).is_err());
        assert_eq!(check_id(7).unwrap(), 7);
    }
}
