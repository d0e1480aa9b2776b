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

//! Errors returned by the SNS publisher.
//!
//! The publisher never retries or classifies failures from the underlying
//! services. Errors from the AWS SDK are returned as the
//! [source][std::error::Error::source] of an [Error], unmodified.

/// The boxed error type used to carry failures from the underlying services.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Represents an error that can occur when creating a publisher or publishing
/// a message.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The identity service could not resolve the caller's account.
    #[error("cannot resolve the caller identity: {0}")]
    Identity(#[source] BoxError),

    /// The identity service succeeded but did not return an account id.
    #[error("the identity service did not return an account id")]
    MissingAccount,

    /// The notification client has no configured region.
    #[error("the notification client has no configured region")]
    MissingRegion,

    /// The publish call failed.
    ///
    /// This includes transport failures and every error response from the
    /// service, such as throttling, authorization failures, unknown topics,
    /// and malformed topic ARNs. The SDK error is the source.
    #[error("the publish operation failed: {0}")]
    Publish(#[source] BoxError),
}

impl Error {
    /// Creates an [Error::Identity] from any error type.
    pub fn identity<T: Into<BoxError>>(source: T) -> Self {
        Self::Identity(source.into())
    }

    /// Creates an [Error::Publish] from any error type.
    pub fn publish<T: Into<BoxError>>(source: T) -> Self {
        Self::Publish(source.into())
    }

    /// Returns true if the error was raised while resolving the account
    /// context, that is, while constructing the publisher.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::Identity(_) | Self::MissingAccount | Self::MissingRegion
        )
    }

    /// Returns true if the error was raised by the publish call.
    pub fn is_publish(&self) -> bool {
        matches!(self, Self::Publish(_))
    }
}

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
