use gloo_net::http::Request;
use web_sys::FormData;

/// Build multipart body with one field per parameter name
fn build_form_data(fields: &[(String, String)]) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| format!("Failed to append field {}: {:?}", name, e))?;
    }
    Ok(form)
}

/// POST parameter values as `multipart/form-data` and return the JSON reply
pub async fn save_params(
    url: &str,
    fields: &[(String, String)],
) -> Result<serde_json::Value, String> {
    let form = build_form_data(fields)?;

    let response = Request::post(url)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Save failed: {}", response.status()));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
