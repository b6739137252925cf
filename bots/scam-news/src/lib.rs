//! Relays the newest scam-news video on YouTube to a fixed set of LINE groups.
//!
//! A run is a single pass: [`youtube_api`] finds the most recently published
//! matching video, [`announcement`] renders it, and [`broadcast`] pushes the
//! text to each configured group in turn. [`run`] ties the stages together and
//! is what the binary calls.

pub mod announcement;
pub mod broadcast;
pub mod config;
pub mod error;
pub mod line_api;
pub mod run;
pub mod youtube_api;

#[cfg(test)]
pub(crate) mod testing;

pub use announcement::{Announcement, format_announcement};
pub use broadcast::{BroadcastPolicy, DeliveryOutcome, DestinationId, PushChannel, deliver};
pub use config::Config;
pub use error::{Error, Result};
pub use run::{RunOutcome, exit_status, run, run_from_env};
