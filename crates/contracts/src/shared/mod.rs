pub mod api_response;
pub mod failure;
pub mod paging;
pub mod query;
pub mod validation;
