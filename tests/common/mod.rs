//! Shared test utilities

pub mod fixtures;
pub mod mock_source;
pub mod recording_publisher;
