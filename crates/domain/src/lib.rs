//! # reportdesk-domain
//!
//! Pure domain model for the reportdesk criminal report registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Heroes** and **Villains** (read-only participants of a report)
//! - Define **Criminal reports** (a hero's account of a villain's incident)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod json;

pub mod hero;
pub mod report;
pub mod villain;
