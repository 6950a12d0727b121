//! Request DTO to domain command conversions for the REST handlers.

pub mod leave_request_mapper;

pub use leave_request_mapper::LeaveRequestMapper;
