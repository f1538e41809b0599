use super::MidjourneyClient;
use crate::{
    error::Result,
    models::{FaceswapRequest, FaceswapResponse},
};

impl MidjourneyClient {
    pub async fn faceswap(&self, request: FaceswapRequest) -> Result<String> {
        log::info!("Submitting faceswap");
        let response: FaceswapResponse = self.post_json("/faceswap", &request).await?;
        Ok(response.image_url)
    }
}
