use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImagineMode {
    Fast,
    Turbo,
}

/// Task state reported by `/result`. Terminal values are server-defined and
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    WaitingToStart,
    Running,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::WaitingToStart => "waiting-to-start",
            TaskStatus::Running => "running",
            TaskStatus::Other(s) => s,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TaskStatus::WaitingToStart | TaskStatus::Running)
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "waiting-to-start" => TaskStatus::WaitingToStart,
            "running" => TaskStatus::Running,
            _ => TaskStatus::Other(s),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes JSON `null` to the field's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRequest {
    #[serde(rename = "taskId")]
    pub task_id: String,
    /// Positions are 1-based; `Some(0)` is sent like `None`.
    #[serde(skip_serializing_if = "omit_position")]
    pub position: Option<u32>,
}

fn omit_position(position: &Option<u32>) -> bool {
    position.map_or(true, |p| p == 0)
}

/// Progress fields shared by every `/result` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percentage: f64,
}

impl ResultResponse {
    pub fn is_pending(&self) -> bool {
        self.status.as_ref().map_or(false, TaskStatus::is_pending)
    }
}

/// Implemented by every response decoded from `/result`.
pub trait TaskProgress {
    fn progress(&self) -> &ResultResponse;
}

/// Submit-style responses that only carry a task identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskResponse {
    #[serde(
        rename = "taskId",
        alias = "TaskId",
        default,
        deserialize_with = "null_as_default"
    )]
    pub task_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_value(ImagineMode::Fast).unwrap(), json!("fast"));
        let mode: ImagineMode =
            serde_json::from_value(serde_json::to_value(ImagineMode::Turbo).unwrap()).unwrap();
        assert_eq!(mode, ImagineMode::Turbo);
    }

    #[test]
    fn test_status_values() {
        let status: TaskStatus = serde_json::from_value(json!("waiting-to-start")).unwrap();
        assert_eq!(status, TaskStatus::WaitingToStart);
        assert!(status.is_pending());

        let status: TaskStatus = serde_json::from_value(json!("done")).unwrap();
        assert_eq!(status, TaskStatus::Other("done".into()));
        assert!(!status.is_pending());
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("done"));
    }

    #[test]
    fn test_result_request_omits_position() {
        let request = ResultRequest {
            task_id: "T1".into(),
            position: None,
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"taskId": "T1"}));

        let request = ResultRequest {
            task_id: "T1".into(),
            position: Some(3),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"taskId": "T1", "position": 3})
        );
    }

    #[test]
    fn test_zero_position_is_omitted() {
        let request = ResultRequest {
            task_id: "T".into(),
            position: Some(0),
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"taskId": "T"}));
    }

    #[test]
    fn test_null_fields_decode_to_defaults() {
        let response: ResultResponse = serde_json::from_value(json!({
            "status": "waiting-to-start",
            "percentage": null
        }))
        .unwrap();
        assert_eq!(response.status, Some(TaskStatus::WaitingToStart));
        assert_eq!(response.percentage, 0.0);

        let response: ResultResponse =
            serde_json::from_value(json!({"status": null, "percentage": null})).unwrap();
        assert_eq!(response, ResultResponse::default());

        let task: TaskResponse = serde_json::from_value(json!({"taskId": null})).unwrap();
        assert_eq!(task.task_id, "");
    }

    #[test]
    fn test_result_response_defaults() {
        let response: ResultResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response, ResultResponse::default());
        assert!(!response.is_pending());

        let response: ResultResponse =
            serde_json::from_value(json!({"status": "running", "percentage": 42.5})).unwrap();
        assert!(response.is_pending());
        assert_eq!(response.percentage, 42.5);
    }

    #[test]
    fn test_task_response_accepts_both_casings() {
        let lower: TaskResponse = serde_json::from_value(json!({"taskId": "a"})).unwrap();
        let upper: TaskResponse = serde_json::from_value(json!({"TaskId": "b"})).unwrap();
        assert_eq!(lower.task_id, "a");
        assert_eq!(upper.task_id, "b");
    }
}
