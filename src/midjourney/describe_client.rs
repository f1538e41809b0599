use super::MidjourneyClient;
use crate::{
    error::{MidjourneyError, Result},
    models::{
        DescribeRequest, DescribeResponse, DescribeResultResponse, DESCRIBE_CONTENT_TYPE,
        DESCRIBE_FIELD_NAME, DESCRIBE_FILE_NAME,
    },
};
use reqwest::multipart::{Form, Part};

impl MidjourneyClient {
    /// Uploads an image for prompt extraction. The only multipart call.
    pub async fn describe(&self, request: DescribeRequest) -> Result<String> {
        log::info!("Submitting describe task ({} bytes)", request.image.len());
        let form = build_describe_form(request)?;
        let response: DescribeResponse = self.post_multipart("/describe", form).await?;
        Ok(response.task_id)
    }

    pub async fn describe_result(&self, task_id: &str) -> Result<DescribeResultResponse> {
        self.result(task_id, None).await
    }
}

fn build_describe_form(request: DescribeRequest) -> Result<Form> {
    let part = Part::bytes(request.image)
        .file_name(DESCRIBE_FILE_NAME)
        .mime_str(DESCRIBE_CONTENT_TYPE)
        .map_err(|e| MidjourneyError::EncodeError(e.to_string()))?;

    let mut form = Form::new().part(DESCRIBE_FIELD_NAME, part);
    if let Some(callback_url) = request.callback_url {
        form = form.text("callbackURL", callback_url);
    }
    Ok(form)
}
