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

use super::builder::PublisherBuilder;
use crate::model::{AccountContext, PublishRequest, PublishResponse, format_attributes};
use crate::stub::{Identity, Notification};
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::Instrument;
use tracing::instrument::WithSubscriber;

/// Publishes messages to SNS topics in the caller's account and region.
///
/// The account and region are resolved once, when the publisher is created.
/// Each call to [send_message][Publisher::send_message] then issues exactly
/// one publish request. The publisher never retries.
///
/// `Publisher` is cheap to clone, and clones share the underlying client.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use sns_publisher::client::Publisher;
/// # use std::collections::HashMap;
/// let publisher = Publisher::builder().build().await?;
/// let attributes = HashMap::from([("priority".to_string(), "high".to_string())]);
/// let sent = publisher.send_message("hello", "alerts", Some(&attributes)).await?;
/// println!("message sent: {sent}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Publisher {
    inner: Arc<dyn Notification>,
    context: AccountContext,
    dispatch: Option<tracing::Dispatch>,
    tracing: bool,
}

impl Publisher {
    /// Returns a builder for [Publisher].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use sns_publisher::client::Publisher;
    /// let publisher = Publisher::builder().with_region("us-east-1").build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> PublisherBuilder {
        PublisherBuilder::new()
    }

    /// Creates a publisher over custom implementations of the service stubs.
    ///
    /// The caller's account and region are resolved before returning.
    pub async fn from_stubs<N, I>(notification: N, identity: I) -> Result<Self>
    where
        N: Notification + 'static,
        I: Identity,
    {
        Self::builder()
            .build_with_stubs(notification, identity)
            .await
    }

    /// Creates a publisher over an already resolved account context.
    ///
    /// No identity lookup is performed. Fails with [Error::MissingAccount] or
    /// [Error::MissingRegion] if either field of `context` is empty.
    pub fn with_context<N>(notification: N, context: AccountContext) -> Result<Self>
    where
        N: Notification + 'static,
    {
        if context.account().is_empty() {
            return Err(Error::MissingAccount);
        }
        if context.region().is_empty() {
            return Err(Error::MissingRegion);
        }
        Ok(Self {
            inner: Arc::new(notification),
            context,
            dispatch: None,
            tracing: false,
        })
    }

    pub(crate) async fn new(
        inner: Arc<dyn Notification>,
        identity: &dyn Identity,
        dispatch: Option<tracing::Dispatch>,
        tracing: bool,
    ) -> Result<Self> {
        let context = resolve_context(inner.as_ref(), identity);
        let context = dispatched(dispatch.as_ref(), context).await?;
        Ok(Self {
            inner,
            context,
            dispatch,
            tracing,
        })
    }

    /// The account and region resolved when the publisher was created.
    pub fn account_context(&self) -> &AccountContext {
        &self.context
    }

    /// Returns the ARN used when publishing to `topic_name`.
    pub fn topic_arn(&self, topic_name: &str) -> String {
        self.context.topic_arn(topic_name)
    }

    /// Publishes `message` to `topic_name`.
    ///
    /// Returns `Ok(true)` if the service responded with a status code in the
    /// `200..=208` range and `Ok(false)` for any other status. Errors from the
    /// publish call are returned unchanged as the source of an
    /// [Error::Publish].
    ///
    /// Each attribute is sent as a `String` attribute. `None` sends no
    /// attributes.
    ///
    /// # Example
    /// ```no_run
    /// # use sns_publisher::client::Publisher;
    /// # async fn sample(publisher: Publisher) -> anyhow::Result<()> {
    /// if !publisher.send_message("hello", "alerts", None).await? {
    ///     eprintln!("the service did not accept the message");
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn send_message<M>(
        &self,
        message: M,
        topic_name: &str,
        attributes: Option<&HashMap<String, String>>,
    ) -> Result<bool>
    where
        M: Into<String>,
    {
        let response = self.publish(message, topic_name, attributes).await?;
        Ok(response.is_success())
    }

    /// Like [send_message][Publisher::send_message], but returns the full
    /// response, including the server-assigned message id.
    pub async fn publish<M>(
        &self,
        message: M,
        topic_name: &str,
        attributes: Option<&HashMap<String, String>>,
    ) -> Result<PublishResponse>
    where
        M: Into<String>,
    {
        let request = PublishRequest::new()
            .set_topic_arn(self.context.topic_arn(topic_name))
            .set_message(message)
            .set_message_attributes(format_attributes(attributes));
        let inner = self.inner.as_ref();
        let with_span = self.tracing;
        // The span must be created while the injected dispatcher is current.
        let fut = async move {
            if with_span {
                let span = tracing::info_span!(
                    "sns.publish",
                    topic_arn = %request.topic_arn
                );
                send(inner, request).instrument(span).await
            } else {
                send(inner, request).await
            }
        };
        dispatched(self.dispatch.as_ref(), fut).await
    }
}

async fn resolve_context(
    notification: &dyn Notification,
    identity: &dyn Identity,
) -> Result<AccountContext> {
    let account = identity
        .caller_account()
        .await?
        .filter(|a| !a.is_empty())
        .ok_or(Error::MissingAccount)?;
    let region = notification
        .region()
        .filter(|r| !r.is_empty())
        .ok_or(Error::MissingRegion)?;
    tracing::debug!(account = %account, region = %region, "resolved account context");
    Ok(AccountContext::new(account, region))
}

async fn send(
    notification: &dyn Notification,
    request: PublishRequest,
) -> Result<PublishResponse> {
    tracing::debug!(
        topic_arn = %request.topic_arn,
        attributes = request.message_attributes.len(),
        "publishing message"
    );
    let topic_arn = request.topic_arn.clone();
    let response = notification.publish(request).await?;
    let success = response.is_success();
    tracing::debug!(
        status = response.http_status_code,
        success,
        message_id = ?response.message_id,
        "publish completed"
    );
    if !success {
        tracing::warn!(
            status = response.http_status_code,
            topic_arn = %topic_arn,
            "publish returned a non-success status"
        );
    }
    Ok(response)
}

async fn dispatched<F>(dispatch: Option<&tracing::Dispatch>, fut: F) -> F::Output
where
    F: Future,
{
    match dispatch {
        Some(d) => fut.with_subscriber(d.clone()).await,
        None => fut.await,
    }
}
