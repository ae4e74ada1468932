//! Shared types between the web client and the document Q&A backend.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
