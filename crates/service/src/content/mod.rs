//! Content module: three-layer architecture (domain, repository, service).
//!
//! The service owns translation between the persisted [`domain::ContentRecord`]
//! and the API-facing [`domain::ContentTransfer`].

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ContentService;
