use super::common::{null_as_default, ResultResponse, TaskProgress, TaskResponse};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

pub const DESCRIBE_FIELD_NAME: &str = "image";
pub const DESCRIBE_FILE_NAME: &str = "image.jpg";
// TODO: sniff the real content type from the leading image bytes.
pub const DESCRIBE_CONTENT_TYPE: &str = "image/jpeg";

/// Multipart payload for `/describe`.
#[derive(Debug, Clone)]
pub struct DescribeRequest {
    pub image: Vec<u8>,
    pub callback_url: Option<String>,
}

impl DescribeRequest {
    pub fn from_bytes(image: impl Into<Vec<u8>>) -> Self {
        Self {
            image: image.into(),
            callback_url: None,
        }
    }

    /// Drains `reader`; a read failure surfaces as an encode error.
    pub async fn from_reader<R>(mut reader: R) -> Result<Self>
    where
        R: AsyncRead + Unpin,
    {
        let mut image = Vec::new();
        reader.read_to_end(&mut image).await?;
        Ok(Self::from_bytes(image))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = tokio::fs::File::open(path).await?;
        Self::from_reader(file).await
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

pub type DescribeResponse = TaskResponse;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeResultResponse {
    #[serde(flatten)]
    pub result: ResultResponse,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub content: Vec<String>,
}

impl TaskProgress for DescribeResultResponse {
    fn progress(&self) -> &ResultResponse {
        &self.result
    }
}
