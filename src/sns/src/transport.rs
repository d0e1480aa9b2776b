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

use crate::model::{AttributeValue, PublishRequest, PublishResponse};
use crate::{Error, Result};
use aws_sdk_sns::config::interceptors::BeforeDeserializationInterceptorContextRef;
use aws_sdk_sns::config::{ConfigBag, Intercept, RuntimeComponents};
use aws_sdk_sns::error::BoxError;
use aws_sdk_sns::types::MessageAttributeValue;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};

#[async_trait::async_trait]
impl crate::stub::Notification for aws_sdk_sns::Client {
    async fn publish(&self, req: PublishRequest) -> Result<PublishResponse> {
        let attributes = to_sdk_attributes(req.message_attributes)?;
        let status = StatusCapture::default();
        let output = self
            .publish()
            .topic_arn(req.topic_arn)
            .message(req.message)
            .set_message_attributes(Some(attributes))
            .customize()
            .interceptor(status.clone())
            .send()
            .await
            .map_err(Error::publish)?;
        let response = PublishResponse::new().set_http_status_code(status.get());
        Ok(match output.message_id() {
            Some(id) => response.set_message_id(id),
            None => response,
        })
    }

    fn region(&self) -> Option<String> {
        self.config().region().map(|r| r.to_string())
    }
}

#[async_trait::async_trait]
impl crate::stub::Identity for aws_sdk_sts::Client {
    async fn caller_account(&self) -> Result<Option<String>> {
        let output = self
            .get_caller_identity()
            .send()
            .await
            .map_err(Error::identity)?;
        Ok(output.account().map(str::to_string))
    }
}

fn to_sdk_attributes(
    attributes: HashMap<String, AttributeValue>,
) -> Result<HashMap<String, MessageAttributeValue>> {
    attributes
        .into_iter()
        .map(|(name, value)| {
            let converted = MessageAttributeValue::builder()
                .data_type(value.data_type())
                .string_value(value.string_value())
                .build()
                .map_err(Error::publish)?;
            Ok((name, converted))
        })
        .collect()
}

/// Records the HTTP status of the raw response.
///
/// The SDK output types do not carry the status code, so each publish
/// installs one of these on its own operation.
#[derive(Clone, Debug, Default)]
struct StatusCapture(Arc<AtomicU16>);

impl StatusCapture {
    fn get(&self) -> u16 {
        self.0.load(Ordering::Acquire)
    }
}

impl Intercept for StatusCapture {
    fn name(&self) -> &'static str {
        "StatusCapture"
    }

    fn read_after_transmit(
        &self,
        context: &BeforeDeserializationInterceptorContextRef<'_>,
        _runtime_components: &RuntimeComponents,
        _cfg: &mut ConfigBag,
    ) -> std::result::Result<(), BoxError> {
        self.0
            .store(context.response().status().as_u16(), Ordering::Release);
        Ok(())
    }
}
