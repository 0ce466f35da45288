//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `staff` - The five staff functions and their tags
//! - `reference` - Static logistics/personnel reference dataset
//! - `analysis` - Pure rule-based analyzers per staff function
//! - `conversation` - Conversation session aggregate and events

pub mod analysis;
pub mod conversation;
pub mod foundation;
pub mod reference;
pub mod staff;
