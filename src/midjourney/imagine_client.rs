use super::MidjourneyClient;
use crate::{
    error::Result,
    models::{ImagineRequest, ImagineResponse, ImagineResultResponse},
};

impl MidjourneyClient {
    /// Submits a prompt and returns the task id to poll with
    /// [`imagine_result`](Self::imagine_result).
    pub async fn imagine(&self, request: ImagineRequest) -> Result<String> {
        log::info!("Submitting imagine task (mode: {:?})", request.mode);
        let response: ImagineResponse = self.post_json("/imagine", &request).await?;
        Ok(response.task_id)
    }

    /// `position` picks one of the generated variants; `None` leaves the choice
    /// to the server.
    pub async fn imagine_result(
        &self,
        task_id: &str,
        position: Option<u32>,
    ) -> Result<ImagineResultResponse> {
        self.result(task_id, position).await
    }
}
