use super::common::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceswapRequest {
    #[serde(rename = "targetImageURL")]
    pub target_image_url: String,
    #[serde(rename = "faceImageURL")]
    pub face_image_url: String,
}

impl FaceswapRequest {
    pub fn new(target_image_url: impl Into<String>, face_image_url: impl Into<String>) -> Self {
        Self {
            target_image_url: target_image_url.into(),
            face_image_url: face_image_url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaceswapResponse {
    #[serde(rename = "imageURL", default, deserialize_with = "null_as_default")]
    pub image_url: String,
}
