use super::MidjourneyClient;
use crate::{
    error::Result,
    models::{UpscaleRequest, UpscaleResponse},
};

impl MidjourneyClient {
    /// Returns the upscaled image URL from the same call. The URL may be empty
    /// while the server is still working; callers then poll `/result`.
    pub async fn upscale(&self, request: UpscaleRequest) -> Result<String> {
        log::info!(
            "Upscaling variant {} of task {}",
            request.position,
            request.task_id
        );
        let response: UpscaleResponse = self.post_json("/upscale", &request).await?;
        if response.image_url.is_empty() {
            log::warn!("Upscale of task {} returned no image URL yet", request.task_id);
        }
        Ok(response.image_url)
    }
}
