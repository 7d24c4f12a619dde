//! # E-Wallet Hex
//!
//! Application layer of the e-wallet service.
//!
//! ## Architecture
//!
//! - `mapper` - Signup request and wallet response mappers
//! - `service` - Wallet query service
//! - `signup` - User registration service
//!
//! Every service is generic over the port traits from `ewallet-types`,
//! so storage, hashing and role lookup are injected at construction.

pub mod mapper;
pub mod service;
pub mod signup;


pub use mapper::{SignupRequestMapper, WalletResponseDtoMapper};
pub use service::WalletService;
pub use signup::SignupService;
