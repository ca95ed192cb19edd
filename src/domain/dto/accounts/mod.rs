//! Accounts DTO Module

pub mod request;
pub mod response;

pub use request::{
    AddressPayload, LoginRequest, RegisterAccountRequest, UpdateAddressRequest, UpdateCpfRequest,
};
pub use response::{AckResponse, UserProfileResponse};
