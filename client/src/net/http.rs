//! `gloo-net` glue shared by the REST helpers. Browser-only.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::MessageResponse;

/// `POST` a JSON body and decode a JSON reply.
pub(crate) async fn post_json<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let resp = Request::post(url).json(body)?.send().await?;
    decode(resp).await
}

/// `POST` a JSON body where only success matters; an optional `message` is kept.
pub(crate) async fn post_ack<B: Serialize>(url: &str, body: &B) -> Result<MessageResponse, ApiError> {
    let resp = Request::post(url).json(body)?.send().await?;
    let resp = ensure_ok(resp).await?;
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text).unwrap_or_default())
}

/// Send a prepared `GET` and decode the JSON reply.
pub(crate) async fn get_json<R: DeserializeOwned>(builder: RequestBuilder) -> Result<R, ApiError> {
    let resp = builder.send().await?;
    decode(resp).await
}

/// Turn a non-2xx response into `ApiError::Status`, reading the body for a message.
pub(crate) async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &text))
}

async fn decode<R: DeserializeOwned>(resp: Response) -> Result<R, ApiError> {
    let resp = ensure_ok(resp).await?;
    Ok(resp.json::<R>().await?)
}
