//! Request body extraction for create and update.

use crate::store::TeaDraft;
use axum::{
    Json, async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};

/// Fields parsed from a create/update body.
///
/// Bodies without a JSON content type, and empty JSON bodies, yield an empty draft. Anything
/// else goes through [`Json`], so malformed JSON is still rejected before the handler runs.
pub struct TeaBody(pub TeaDraft);

#[async_trait]
impl<S> FromRequest<S> for TeaBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(request.headers()) {
            return Ok(Self(TeaDraft::default()));
        }

        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(TeaDraft::default()));
        }

        let Json(draft) =
            Json::<TeaDraft>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        Ok(Self(draft))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
