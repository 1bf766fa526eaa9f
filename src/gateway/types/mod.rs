//! Gateway types module
//!
//! - [`response`]: `ApiResponse<T>`, `ApiError` and error codes
//! - [`wallet`]: wallet request/response DTOs

pub mod response;
pub mod wallet;

pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
pub use wallet::{AmountRequest, TransactionResponse, WalletResponse};
