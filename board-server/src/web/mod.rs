//! Web layer: routes, DTOs, and shared state.

mod dto;
mod routes;
mod state;

pub use dto::{
    DepartureView, DisplayQuery, ErrorResponse, FeedConfig, StationView, StationsQuery,
    StationsResponse, TimeConfig,
};
pub use routes::{AppError, create_router};
pub use state::AppState;
