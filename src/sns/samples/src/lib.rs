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

pub mod quickstart_publisher;

/// Returns the name of the topic used by the samples.
///
/// The topic must already exist in the caller's account and region.
pub fn sample_topic() -> anyhow::Result<String> {
    Ok(std::env::var("SNS_SAMPLES_TOPIC")?)
}

/// Routes the samples' log events to stderr.
pub fn enable_tracing() -> tracing::Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();
    tracing::Dispatch::new(subscriber)
}
