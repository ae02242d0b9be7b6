use serde::Serialize;
use utoipa::ToSchema;

/// Pagination block attached to listing responses.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub page_size: u64,
}

impl PageInfo {
    pub fn new(current_page: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size.max(1));
        Self {
            current_page,
            total_pages,
            total_count,
            page_size,
        }
    }
}

/// The envelope every API response uses: `status` says whether the call
/// succeeded; `data`, `message`, `pagination` and `error` are filled as the
/// endpoint requires and omitted otherwise.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: true,
            message: None,
            data: Some(data),
            pagination: None,
            error: None,
        }
    }

    pub fn data_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }

    pub fn page(data: T, pagination: PageInfo) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::data(data)
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            data: None,
            pagination: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            data: None,
            pagination: None,
            error: None,
        }
    }

    pub fn failure_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::failure(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageInfo::new(1, 10, 25).total_pages, 3);
        assert_eq!(PageInfo::new(1, 10, 30).total_pages, 3);
        assert_eq!(PageInfo::new(1, 10, 31).total_pages, 4);
        assert_eq!(PageInfo::new(1, 1, 1).total_pages, 1);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        assert_eq!(PageInfo::new(1, 10, 0).total_pages, 0);
    }

    #[test]
    fn envelope_omits_unset_fields() {
        let resp = ApiResponse::<serde_json::Value>::message("Product deleted successfully.");
        let body = serde_json::to_value(resp).expect("serialize");
        assert_eq!(body["status"], true);
        assert!(body.get("data").is_none());
        assert!(body.get("pagination").is_none());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn pagination_block_uses_wire_names() {
        let resp = ApiResponse::page(vec![1, 2, 3], PageInfo::new(2, 10, 21));
        let body = serde_json::to_value(resp).expect("serialize");
        assert_eq!(body["pagination"]["currentPage"], 2);
        assert_eq!(body["pagination"]["totalPages"], 3);
        assert_eq!(body["pagination"]["totalCount"], 21);
        assert_eq!(body["pagination"]["pageSize"], 10);
    }
}
