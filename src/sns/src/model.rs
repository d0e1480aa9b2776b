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

//! The types exchanged between the publisher and the notification service.

use std::collections::HashMap;
use std::ops::RangeInclusive;

/// The HTTP status codes treated as a successful publish.
pub const SUCCESS_STATUS: RangeInclusive<u16> = 200..=208;

/// The data type for all message attributes sent by this crate.
pub const STRING_DATA_TYPE: &str = "String";

/// The caller's account id and region.
///
/// Resolved once when a [Publisher][crate::client::Publisher] is created and
/// used to compute topic ARNs.
///
/// # Example
/// ```
/// # use sns_publisher::model::AccountContext;
/// let context = AccountContext::new("123456789012", "us-east-1");
/// assert_eq!(
///     context.topic_arn("alerts"),
///     "arn:aws:sns:us-east-1:123456789012:alerts"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountContext {
    account: String,
    region: String,
}

impl AccountContext {
    /// Creates a new context.
    pub fn new<A: Into<String>, R: Into<String>>(account: A, region: R) -> Self {
        Self {
            account: account.into(),
            region: region.into(),
        }
    }

    /// The account id, e.g. `123456789012`.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// The region, e.g. `us-east-1`.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the ARN of `topic_name` in this account and region.
    ///
    /// The topic name is not validated. A malformed name produces a
    /// malformed ARN, which the service rejects when publishing.
    pub fn topic_arn(&self, topic_name: &str) -> String {
        format!("arn:aws:sns:{}:{}:{topic_name}", self.region, self.account)
    }
}

/// A typed message attribute value.
///
/// Only string attributes are supported.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValue {
    data_type: &'static str,
    string_value: String,
}

impl AttributeValue {
    /// Creates a `String` attribute value.
    pub fn string<V: Into<String>>(value: V) -> Self {
        Self {
            data_type: STRING_DATA_TYPE,
            string_value: value.into(),
        }
    }

    /// Always `"String"`.
    pub fn data_type(&self) -> &str {
        self.data_type
    }

    pub fn string_value(&self) -> &str {
        &self.string_value
    }
}

/// Wraps each attribute value in an [AttributeValue].
///
/// Keys and values are preserved unchanged. `None` formats to an empty map.
///
/// # Example
/// ```
/// # use sns_publisher::model::{AttributeValue, format_attributes};
/// # use std::collections::HashMap;
/// let attributes = HashMap::from([("priority".to_string(), "high".to_string())]);
/// let formatted = format_attributes(Some(&attributes));
/// assert_eq!(formatted.get("priority"), Some(&AttributeValue::string("high")));
/// assert!(format_attributes(None).is_empty());
/// ```
pub fn format_attributes(
    attributes: Option<&HashMap<String, String>>,
) -> HashMap<String, AttributeValue> {
    attributes
        .into_iter()
        .flatten()
        .map(|(k, v)| (k.clone(), AttributeValue::string(v.as_str())))
        .collect()
}

/// Returns true if `status` is in [SUCCESS_STATUS].
pub fn is_success_status(status: u16) -> bool {
    SUCCESS_STATUS.contains(&status)
}

/// A single publish call, as sent to the notification service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct PublishRequest {
    /// The fully qualified topic ARN.
    pub topic_arn: String,
    /// The message body.
    pub message: String,
    /// The formatted message attributes.
    pub message_attributes: HashMap<String, AttributeValue>,
}

impl PublishRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [topic_arn][PublishRequest::topic_arn] field.
    pub fn set_topic_arn<V: Into<String>>(mut self, v: V) -> Self {
        self.topic_arn = v.into();
        self
    }

    /// Sets the [message][PublishRequest::message] field.
    pub fn set_message<V: Into<String>>(mut self, v: V) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the [message_attributes][PublishRequest::message_attributes] field.
    pub fn set_message_attributes<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.message_attributes = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The outcome of a publish call that reached the service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct PublishResponse {
    /// The HTTP status code of the response.
    pub http_status_code: u16,
    /// The server-assigned message id, if any.
    pub message_id: Option<String>,
}

impl PublishResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [http_status_code][PublishResponse::http_status_code] field.
    pub fn set_http_status_code(mut self, v: u16) -> Self {
        self.http_status_code = v;
        self
    }

    /// Sets the [message_id][PublishResponse::message_id] field.
    pub fn set_message_id<V: Into<String>>(mut self, v: V) -> Self {
        self.message_id = Some(v.into());
        self
    }

    /// Returns true if the status code is in [SUCCESS_STATUS].
    pub fn is_success(&self) -> bool {
        is_success_status(self.http_status_code)
    }
}
