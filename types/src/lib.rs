//! Core domain types for Vitrine - no IO, no async.
//!
//! Everything in this crate is pure data: the project records that make up
//! the feed, the contact payload and its status machine, the hero profile
//! content, and the UI state the renderer derives each frame from. IO lives
//! in `vitrine-backend`; orchestration lives in `vitrine-engine`.

pub mod ui;

mod contact;
mod feed;
mod profile;
mod project;

pub use contact::{ContactField, ContactPayload, MissingField, SubmitStatus};
pub use feed::FeedPhase;
pub use profile::Profile;
pub use project::{Project, VISIBLE_TAG_COUNT};
