//! Shared pieces of the calls to auxiliary services

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
