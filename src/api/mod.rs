//! HTTP API for the payroll settlement engine.
//!
//! A thin transport layer: request types are converted into domain types,
//! the engine and batch aggregator do the work, and engine errors map to
//! HTTP statuses.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BulkSettleRequest, CreateEmployeeRequest, SettlementRequest, UpdateEmployeeRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
