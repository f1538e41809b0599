use super::MidjourneyClient;
use crate::{
    error::Result,
    models::{SeedRequest, SeedResponse, SeedResultResponse},
};

impl MidjourneyClient {
    pub async fn seed(&self, request: SeedRequest) -> Result<String> {
        log::info!("Requesting seed for task {}", request.task_id);
        let response: SeedResponse = self.post_json("/seed", &request).await?;
        Ok(response.task_id)
    }

    pub async fn seed_result(&self, task_id: &str) -> Result<SeedResultResponse> {
        self.result(task_id, None).await
    }
}
