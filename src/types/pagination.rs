//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::domain::BasicEmployeeInformation;
use crate::errors::{AppError, AppResult};

/// Pagination query parameters (`?pageNumber=0&pageSize=5`)
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-based page index
    #[serde(default = "default_page_number")]
    #[validate(range(min = 0, message = "pageNumber must not be negative"))]
    #[param(default = 0, minimum = 0)]
    pub page_number: i64,
    /// Number of rows per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "pageSize must be greater than zero"))]
    #[param(default = 5, minimum = 1)]
    pub page_size: i64,
}

fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    /// Convert the raw parameters into a page request.
    pub fn page_request(&self) -> AppResult<PageRequest> {
        let page = u64::try_from(self.page_number)
            .map_err(|_| AppError::validation("pageNumber must not be negative"))?;
        let size = u64::try_from(self.page_size)
            .map_err(|_| AppError::validation("pageSize must be greater than zero"))?;
        PageRequest::of(page, size)
    }
}

/// Zero-based page index plus a non-zero page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Build a page request, rejecting an empty page size.
    pub fn of(page: u64, size: u64) -> AppResult<Self> {
        if size == 0 {
            return Err(AppError::validation("pageSize must be greater than zero"));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// One page of results plus the metadata needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(BasicEmployeeInformationPage = Page<BasicEmployeeInformation>)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Create a page from its content and the total row count.
    ///
    /// `total_elements` comes from a separate count query and is taken as
    /// reported, even if a concurrent write made it disagree with `content`.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.size());
        let number_of_elements = content.len() as u64;

        Self {
            empty: content.is_empty(),
            content,
            page_number: request.page(),
            page_size: request.size(),
            total_elements,
            total_pages,
            number_of_elements,
            first: request.page() == 0,
            last: request.page().saturating_add(1) >= total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: u64, size: u64) -> PageRequest {
        PageRequest::of(page, size).unwrap()
    }

    #[test]
    fn first_page_of_seven_rows() {
        let page = Page::new(vec![1, 2, 3, 4, 5], request(0, 5), 7);

        assert_eq!(page.total_elements, 7);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.number_of_elements, 5);
        assert!(page.first);
        assert!(!page.last);
        assert!(!page.empty);
    }

    #[test]
    fn page_size_larger_than_table_yields_single_page() {
        let page = Page::new(vec!["a", "b"], request(0, 50), 2);

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.content.len(), 2);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn empty_table_has_no_pages() {
        let page: Page<i32> = Page::new(vec![], request(0, 5), 0);

        assert_eq!(page.total_pages, 0);
        assert!(page.empty);
        assert!(page.last);
    }

    #[test]
    fn page_past_the_end_is_empty_and_last() {
        let page: Page<i32> = Page::new(vec![], request(4, 5), 7);

        assert!(page.empty);
        assert!(page.last);
        assert!(!page.first);
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(request(0, 5).offset(), 0);
        assert_eq!(request(3, 5).offset(), 15);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            PageRequest::of(0, 0),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn negative_parameters_are_rejected() {
        let params = PaginationParams {
            page_number: -1,
            page_size: 5,
        };
        assert!(params.validate().is_err());
        assert!(params.page_request().is_err());

        let params = PaginationParams {
            page_number: 0,
            page_size: 0,
        };
        assert!(params.validate().is_err());
        assert!(params.page_request().is_err());
    }

    #[test]
    fn defaults_match_first_page_of_five() {
        let params = PaginationParams::default();
        let request = params.page_request().unwrap();

        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 5);
    }

    #[test]
    fn serializes_with_camel_case_metadata() {
        let page = Page::new(vec![1], request(0, 5), 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["pageNumber"], 0);
        assert_eq!(json["content"], serde_json::json!([1]));
    }
}
