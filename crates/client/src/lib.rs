//! HTTP client for creating property listings.
//!
//! Provides the injected [`config::ClientConfig`], the
//! [`api::SubmissionClient`] seam with its reqwest-backed
//! [`api::PropertiesApi`], and the tagged [`outcome::SubmissionOutcome`]
//! the form controller reacts to.

pub mod api;
pub mod config;
pub mod outcome;
