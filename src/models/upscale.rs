use super::common::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpscaleRequest {
    #[serde(rename = "taskId")]
    pub task_id: String,
    /// 1-based index into the generated grid.
    pub position: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl UpscaleRequest {
    pub fn new(task_id: impl Into<String>, position: u32) -> Self {
        Self {
            task_id: task_id.into(),
            position,
            callback_url: None,
        }
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpscaleResponse {
    #[serde(rename = "imageURL", default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upscale_request_body() {
        let request = UpscaleRequest::new("T1", 2);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"taskId": "T1", "position": 2})
        );

        let request = UpscaleRequest::new("T1", 4).with_callback_url("https://cb.example");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"taskId": "T1", "position": 4, "callback_url": "https://cb.example"})
        );
    }

    #[test]
    fn test_null_image_url_is_empty() {
        let response: UpscaleResponse =
            serde_json::from_value(json!({"imageURL": null})).unwrap();
        assert!(response.image_url.is_empty());

        let response: UpscaleResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.image_url.is_empty());
    }
}
