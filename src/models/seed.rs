use super::common::{ResultResponse, TaskProgress, TaskResponse};
use serde::{Deserialize, Serialize};

/// `callbackURL` is always sent, empty when the caller gives none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRequest {
    #[serde(rename = "taskId")]
    pub task_id: String,
    #[serde(rename = "callbackURL", default)]
    pub callback_url: String,
}

impl SeedRequest {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            callback_url: String::new(),
        }
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = url.into();
        self
    }
}

pub type SeedResponse = TaskResponse;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedResultResponse {
    #[serde(flatten)]
    pub result: ResultResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl TaskProgress for SeedResultResponse {
    fn progress(&self) -> &ResultResponse {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_request_always_sends_callback() {
        let request = SeedRequest::new("T1");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"taskId": "T1", "callbackURL": ""})
        );

        let request = SeedRequest::new("T1").with_callback_url("https://cb.example");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"taskId": "T1", "callbackURL": "https://cb.example"})
        );
    }

    #[test]
    fn test_seed_result() {
        let response: SeedResultResponse = serde_json::from_value(json!({
            "status": "done",
            "percentage": 100,
            "seed": "1234567890"
        }))
        .unwrap();
        assert_eq!(response.seed.as_deref(), Some("1234567890"));
    }
}
