use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::response::Response;
use serde::Deserialize;
use tracing::{debug, info};

use super::AppState;
use crate::card;
use crate::constants::{DEFAULT_PROVIDER, JPEG_CONTENT_TYPE};
use crate::error::CardError;

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

/// Query parameters of `/ping`.
#[derive(Debug, Deserialize)]
pub(crate) struct PingQuery {
    #[serde(default = "default_provider")]
    pub(crate) provider: String,
    #[serde(default)]
    pub(crate) user_id: String,
}

/// handles the /ping GET, answering with the rendered card
pub(crate) async fn ping_handler(
    State(state): State<AppState>,
    Query(query): Query<PingQuery>,
) -> Result<Response, CardError> {
    let source = state.providers.get(&query.provider).ok_or_else(|| {
        CardError::UpstreamFetch(format!("no profile source for provider {:?}", query.provider))
    })?;
    let profile_url = source.profile_url(&query.user_id)?;
    let body = state.fetcher.fetch_identity(&profile_url).await?;
    let identity = source.parse_identity(&body)?;
    info!(
        "Rendering card for {:?} from {}",
        identity.name,
        source.id()
    );

    let raw = state.fetcher.fetch_picture(&identity.picture_url).await?;
    let picture = card::decode_picture(&raw.bytes, raw.content_type)?;
    let fonts = state.fonts.card_fonts().await?;

    let mut rng = state.request_rng();
    let canvas = card::render_card(&picture, &identity.name, &fonts, &mut rng);
    let jpeg = card::encode_jpeg(&canvas)?;
    debug!("Encoded card is {} bytes", jpeg.len());

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, JPEG_CONTENT_TYPE)
        .header(CONTENT_LENGTH, jpeg.len())
        .body(Body::from(jpeg))
        .map_err(CardError::from)
}
