use super::common::{ImagineMode, ResultResponse, TaskProgress, TaskResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagineRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ImagineMode>,
    #[serde(rename = "callbackURL", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl ImagineRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            mode: None,
            callback_url: None,
        }
    }

    pub fn with_mode(mut self, mode: ImagineMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

pub type ImagineResponse = TaskResponse;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagineResultResponse {
    #[serde(flatten)]
    pub result: ResultResponse,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl TaskProgress for ImagineResultResponse {
    fn progress(&self) -> &ResultResponse {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use serde_json::json;

    #[test]
    fn test_imagine_request_body() {
        let request = ImagineRequest::new("a red fox").with_mode(ImagineMode::Fast);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"prompt": "a red fox", "mode": "fast"})
        );

        let request = ImagineRequest::new("a red fox");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"prompt": "a red fox"})
        );

        let request = ImagineRequest::new("a red fox").with_callback_url("https://cb.example/hook");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"prompt": "a red fox", "callbackURL": "https://cb.example/hook"})
        );
    }

    #[test]
    fn test_turbo_mode_survives_encoding() {
        let request = ImagineRequest::new("castle").with_mode(ImagineMode::Turbo);
        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: ImagineRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.mode, Some(ImagineMode::Turbo));
    }

    #[test]
    fn test_imagine_result_flattens_progress() {
        let response: ImagineResultResponse = serde_json::from_value(json!({
            "status": "done",
            "percentage": 100,
            "image_url": "https://cdn.example/grid.png"
        }))
        .unwrap();

        assert_eq!(response.result.status, Some(TaskStatus::Other("done".into())));
        assert_eq!(response.result.percentage, 100.0);
        assert_eq!(response.image_url.as_deref(), Some("https://cdn.example/grid.png"));
    }
}
