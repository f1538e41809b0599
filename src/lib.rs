//! Async client for the midjourneyapi.io image generation API.
//!
//! ```no_run
//! use rmidjourney::{ImagineMode, ImagineRequest, MidjourneyClient};
//!
//! # async fn run() -> rmidjourney::Result<()> {
//! let client = MidjourneyClient::new("my-api-key");
//! let task_id = client
//!     .imagine(ImagineRequest::new("a red fox").with_mode(ImagineMode::Fast))
//!     .await?;
//! let progress = client.imagine_result(&task_id, None).await?;
//! println!("{:?} {}%", progress.result.status, progress.result.percentage);
//! # Ok(())
//! # }
//! ```
pub mod config;
pub mod error;
pub mod logger;
pub mod midjourney;
pub mod models;

pub use config::MidjourneyConfig;
pub use error::{MidjourneyError, Result};
pub use midjourney::MidjourneyClient;
pub use models::*;
