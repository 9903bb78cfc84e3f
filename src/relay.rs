use gloo_net::http::Request;

use crate::error::SubmitError;
use crate::state::DemoRequestPayload;

/// Posts the demo request to the form relay. Only the status code is
/// inspected; the response body is ignored.
pub async fn send_demo_request(url: &str, payload: &DemoRequestPayload) -> Result<(), SubmitError> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .json(payload)?
        .send()
        .await?;

    check_status(response.status())
}

pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}
