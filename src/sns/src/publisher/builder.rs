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

use crate::Result;
use crate::client::Publisher;
use crate::stub::{Identity, Notification};
use aws_config::{BehaviorVersion, SdkConfig};
use std::sync::Arc;

/// A builder for [Publisher].
///
/// By default the builder loads the AWS shared configuration from the
/// environment, using the same provider chain as the AWS CLI.
///
/// # Example
/// ```no_run
/// # use sns_publisher::client::Publisher;
/// # async fn sample() -> anyhow::Result<()> {
/// let publisher = Publisher::builder()
///     .with_region("us-east-1")
///     .with_tracing()
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default)]
pub struct PublisherBuilder {
    pub(crate) region: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) profile: Option<String>,
    pub(crate) sdk_config: Option<SdkConfig>,
    pub(crate) dispatch: Option<tracing::Dispatch>,
    pub(crate) tracing: bool,
}

impl PublisherBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates the AWS clients and resolves the caller's account and region.
    ///
    /// # Example
    /// ```no_run
    /// # use sns_publisher::client::Publisher;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let publisher = Publisher::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub async fn build(self) -> Result<Publisher> {
        let shared = match &self.sdk_config {
            Some(config) => config.clone(),
            None => self.load_shared_config().await,
        };
        let (sns, sts) = self.service_configs(&shared);
        let notification = aws_sdk_sns::Client::from_conf(sns);
        let identity = aws_sdk_sts::Client::from_conf(sts);
        self.build_with_stubs(notification, identity).await
    }

    /// Creates a publisher over custom implementations of the service stubs.
    ///
    /// Only the logging options of this builder apply.
    pub async fn build_with_stubs<N, I>(self, notification: N, identity: I) -> Result<Publisher>
    where
        N: Notification + 'static,
        I: Identity,
    {
        Publisher::new(Arc::new(notification), &identity, self.dispatch, self.tracing).await
    }

    /// Overrides the region found in the environment.
    ///
    /// # Example
    /// ```no_run
    /// # use sns_publisher::client::Publisher;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let publisher = Publisher::builder().with_region("eu-west-1").build().await?;
    /// # Ok(()) }
    /// ```
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the endpoint for both the notification and identity services.
    ///
    /// Useful with local emulators.
    ///
    /// # Example
    /// ```no_run
    /// # use sns_publisher::client::Publisher;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let publisher = Publisher::builder()
    ///     .with_endpoint("http://localhost:4566")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Selects a named profile from the shared config and credentials files.
    ///
    /// Ignored when [with_sdk_config][Self::with_sdk_config] is used.
    pub fn with_profile<V: Into<String>>(mut self, v: V) -> Self {
        self.profile = Some(v.into());
        self
    }

    /// Uses a pre-built AWS configuration instead of loading one from the
    /// environment.
    ///
    /// The region and endpoint set on this builder still take precedence.
    ///
    /// # Example
    /// ```no_run
    /// # use sns_publisher::client::Publisher;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    /// let publisher = Publisher::builder().with_sdk_config(config).build().await?;
    /// # Ok(()) }
    /// ```
    pub fn with_sdk_config(mut self, v: SdkConfig) -> Self {
        self.sdk_config = Some(v);
        self
    }

    /// Routes the publisher's log events to `v`.
    ///
    /// Without this, events go to the dispatcher that is current when the
    /// publisher is used.
    ///
    /// # Example
    /// ```no_run
    /// # use sns_publisher::client::Publisher;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let subscriber = tracing_subscriber::fmt().finish();
    /// let publisher = Publisher::builder()
    ///     .with_dispatch(tracing::Dispatch::new(subscriber))
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_dispatch(mut self, v: tracing::Dispatch) -> Self {
        self.dispatch = Some(v);
        self
    }

    /// Enables tracing.
    ///
    /// Each publish runs in a `sns.publish` span that records the topic ARN.
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    async fn load_shared_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        loader.load().await
    }

    fn service_configs(&self, shared: &SdkConfig) -> (aws_sdk_sns::Config, aws_sdk_sts::Config) {
        let mut sns = aws_sdk_sns::config::Builder::from(shared);
        let mut sts = aws_sdk_sts::config::Builder::from(shared);
        // The clients panic on creation without a behavior version.
        if shared.behavior_version().is_none() {
            sns = sns.behavior_version(BehaviorVersion::latest());
            sts = sts.behavior_version(BehaviorVersion::latest());
        }
        if let Some(region) = &self.region {
            sns = sns.region(aws_sdk_sns::config::Region::new(region.clone()));
            sts = sts.region(aws_sdk_sts::config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &self.endpoint {
            sns = sns.endpoint_url(endpoint);
            sts = sts.endpoint_url(endpoint);
        }
        (sns.build(), sts.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sns::config::Region;

    fn shared(region: Option<&'static str>) -> SdkConfig {
        let builder = SdkConfig::builder().behavior_version(BehaviorVersion::latest());
        match region {
            Some(r) => builder.region(Region::new(r)).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn defaults() {
        let builder = PublisherBuilder::new();
        assert!(builder.region.is_none());
        assert!(builder.endpoint.is_none());
        assert!(builder.profile.is_none());
        assert!(builder.sdk_config.is_none());
        assert!(builder.dispatch.is_none());
        assert!(!builder.tracing);
    }

    #[test]
    fn setters() {
        let builder = PublisherBuilder::new()
            .with_region("us-west-2")
            .with_endpoint("http://localhost:4566")
            .with_profile("staging")
            .with_sdk_config(shared(None))
            .with_dispatch(tracing::Dispatch::none())
            .with_tracing();
        assert_eq!(builder.region.as_deref(), Some("us-west-2"));
        assert_eq!(builder.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(builder.profile.as_deref(), Some("staging"));
        assert!(builder.sdk_config.is_some());
        assert!(builder.dispatch.is_some());
        assert!(builder.tracing);
    }

    #[test]
    fn service_configs_inherit_region() {
        let builder = PublisherBuilder::new();
        let (sns, sts) = builder.service_configs(&shared(Some("ap-south-1")));
        assert_eq!(sns.region(), Some(&Region::new("ap-south-1")));
        assert_eq!(sts.region(), Some(&Region::new("ap-south-1")));
    }

    #[test]
    fn service_configs_override_region() {
        let builder = PublisherBuilder::new().with_region("eu-central-1");
        let (sns, sts) = builder.service_configs(&shared(Some("ap-south-1")));
        assert_eq!(sns.region(), Some(&Region::new("eu-central-1")));
        assert_eq!(sts.region(), Some(&Region::new("eu-central-1")));
    }

    #[test]
    fn service_configs_without_region() {
        let builder = PublisherBuilder::new();
        let (sns, sts) = builder.service_configs(&shared(None));
        assert!(sns.region().is_none());
        assert!(sts.region().is_none());
    }

    #[test]
    fn service_configs_without_behavior_version() {
        let shared = SdkConfig::builder()
            .region(Region::new("us-east-1"))
            .build();
        assert!(shared.behavior_version().is_none());
        let (sns, sts) = PublisherBuilder::new().service_configs(&shared);
        assert_eq!(sns.region(), Some(&Region::new("us-east-1")));
        let _ = aws_sdk_sns::Client::from_conf(sns);
        let _ = aws_sdk_sts::Client::from_conf(sts);
    }
}
