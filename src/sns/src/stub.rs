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

//! Traits to mock the services used by the publisher.
//!
//! Applications can implement these traits to test code that uses a
//! [Publisher][crate::client::Publisher] without calling AWS. The crate
//! implements them for the `aws-sdk-sns` and `aws-sdk-sts` clients.

use crate::Result;
use crate::model::{PublishRequest, PublishResponse};

/// The notification service: publishes messages and reports its region.
#[async_trait::async_trait]
pub trait Notification: std::fmt::Debug + Send + Sync {
    /// Publishes a single message.
    ///
    /// Implementations return `Ok` for any response received from the
    /// service, including non-success status codes, and `Err` only when the
    /// call itself fails.
    async fn publish(&self, req: PublishRequest) -> Result<PublishResponse>;

    /// The region this client is configured for.
    fn region(&self) -> Option<String>;
}

/// The identity service: resolves the caller's account id.
#[async_trait::async_trait]
pub trait Identity: std::fmt::Debug + Send + Sync {
    /// Returns the account id of the caller, if the service reports one.
    async fn caller_account(&self) -> Result<Option<String>>;
}
