// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Publish messages to [Amazon SNS] topics.
//!
//! This crate contains a thin [Publisher][client::Publisher] that resolves the
//! caller's account and region once, and then publishes messages to topics
//! addressed by name. Topic ARNs are computed as
//! `arn:aws:sns:{region}:{account}:{topic_name}`.
//!
//! The publisher does not batch, order, or retry messages. Authentication is
//! delegated to the AWS SDK.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use sns_publisher::client::Publisher;
//! let publisher = Publisher::builder().build().await?;
//! let sent = publisher.send_message("hello", "alerts", None).await?;
//! assert!(sent);
//! # Ok(()) }
//! ```
//!
//! [Amazon SNS]: https://aws.amazon.com/sns/

pub(crate) mod error;
pub mod model;
pub(crate) mod publisher;
pub mod stub;
mod transport;

pub use error::{BoxError, Error, Result};

pub mod builder {
    pub use crate::publisher::builder::PublisherBuilder;
}

pub mod client {
    pub use crate::publisher::client::Publisher;
}
