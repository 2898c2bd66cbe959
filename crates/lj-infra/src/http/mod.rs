//! Backend HTTP client.

mod dto;
mod journey_api;

pub use journey_api::HttpJourneyApi;
