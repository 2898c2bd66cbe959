//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations: the backend REST API, the payment
//! status endpoint, QR code rendering and photo loading. The domain never
//! talks to those collaborators directly.

pub mod errors;
mod journey_api;
mod payment_gateway;
mod photo_source;
mod qr_code;

pub use errors::{ApiError, PhotoSourceError, QrCodeError};
pub use journey_api::JourneyApiPort;
pub use payment_gateway::PaymentGatewayPort;
pub use photo_source::PhotoSourcePort;
pub use qr_code::QrCodePort;
