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

// [START sns_quickstart_publisher]
use sns_publisher::client::Publisher;
use std::collections::HashMap;

pub async fn sample(topic_name: &str, dispatch: tracing::Dispatch) -> anyhow::Result<()> {
    let publisher = Publisher::builder()
        .with_dispatch(dispatch)
        .with_tracing()
        .build()
        .await?;
    println!("publishing to {}", publisher.topic_arn(topic_name));

    let attributes = HashMap::from([("priority".to_string(), "high".to_string())]);
    let sent = publisher
        .send_message("Hello, World!", topic_name, Some(&attributes))
        .await?;
    anyhow::ensure!(sent, "the service did not accept the message");

    println!("published message to {topic_name}");
    Ok(())
}
// [END sns_quickstart_publisher]
