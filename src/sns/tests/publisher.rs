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

use sns_publisher::client::Publisher;
use sns_publisher::model::{AccountContext, AttributeValue, PublishRequest, PublishResponse};
use sns_publisher::stub::{Identity, Notification};
use sns_publisher::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

mockall::mock! {
    #[derive(Debug)]
    Identity {}
    #[async_trait::async_trait]
    impl Identity for Identity {
        async fn caller_account(&self) -> Result<Option<String>>;
    }
}

/// A fake notification service that records every request.
#[derive(Debug, Default)]
struct Recorder {
    status: u16,
    requests: Arc<Mutex<Vec<PublishRequest>>>,
}

#[async_trait::async_trait]
impl Notification for Recorder {
    async fn publish(&self, req: PublishRequest) -> Result<PublishResponse> {
        self.requests.lock().unwrap().push(req);
        Ok(PublishResponse::new().set_http_status_code(self.status))
    }

    fn region(&self) -> Option<String> {
        Some("us-east-1".to_string())
    }
}

fn identity() -> MockIdentity {
    let mut mock = MockIdentity::new();
    mock.expect_caller_account()
        .times(1)
        .returning(|| Ok(Some("123456789012".to_string())));
    mock
}

#[tokio::test]
async fn publish_scenario() -> anyhow::Result<()> {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorder = Recorder {
        status: 200,
        requests: requests.clone(),
    };
    let publisher = Publisher::from_stubs(recorder, identity()).await?;
    assert_eq!(
        publisher.account_context(),
        &AccountContext::new("123456789012", "us-east-1")
    );

    let attributes = HashMap::from([("priority".to_string(), "high".to_string())]);
    assert!(
        publisher
            .send_message("hello", "alerts", Some(&attributes))
            .await?
    );
    assert!(publisher.send_message("bye", "audit", None).await?);

    let got = requests.lock().unwrap().clone();
    let want = vec![
        PublishRequest::new()
            .set_topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
            .set_message("hello")
            .set_message_attributes([("priority", AttributeValue::string("high"))]),
        PublishRequest::new()
            .set_topic_arn("arn:aws:sns:us-east-1:123456789012:audit")
            .set_message("bye"),
    ];
    assert_eq!(got, want);
    Ok(())
}

#[tokio::test]
async fn soft_failure() -> anyhow::Result<()> {
    let recorder = Recorder {
        status: 500,
        ..Default::default()
    };
    let publisher = Publisher::from_stubs(recorder, identity()).await?;
    assert!(!publisher.send_message("hello", "alerts", None).await?);
    Ok(())
}

#[tokio::test]
async fn construction_failure() {
    let mut identity = MockIdentity::new();
    identity
        .expect_caller_account()
        .returning(|| Err(Error::identity("the security token is expired")));
    let err = Publisher::from_stubs(Recorder::default(), identity)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Identity(_)), "{err:?}");
    assert!(err.to_string().contains("expired"), "{err}");
}

#[tokio::test]
async fn shared_across_tasks() -> anyhow::Result<()> {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorder = Recorder {
        status: 200,
        requests: requests.clone(),
    };
    let publisher = Publisher::from_stubs(recorder, identity()).await?;

    let handles = (0..4)
        .map(|i| {
            let publisher = publisher.clone();
            tokio::spawn(async move {
                publisher
                    .send_message(format!("message {i}"), "alerts", None)
                    .await
            })
        })
        .collect::<Vec<_>>();
    for h in handles {
        assert!(h.await??);
    }
    assert_eq!(requests.lock().unwrap().len(), 4);
    Ok(())
}
