//! Identity providers: where a user's name and picture come from.
//!
//! Each provider is a [`ProfileSource`] that knows how to build its profile
//! URL and how to read the JSON it gets back. The [`ProviderRegistry`] maps the
//! `provider` query parameter to one of them.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::error::CardError;

/// A display name and picture URL as reported by a provider.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProviderIdentity {
    /// Display name, empty when the provider didn't return one.
    pub name: String,
    /// Profile picture URL, empty when the provider didn't return one.
    pub picture_url: String,
}

/// A provider of profile identities.
pub trait ProfileSource: std::fmt::Debug + Send + Sync {
    /// The identifier used in the `provider` query parameter.
    fn id(&self) -> &'static str;

    /// Builds the URL holding the profile of `user_id`.
    fn profile_url(&self, user_id: &str) -> Result<Url, CardError>;

    /// Reads the name and picture URL out of a profile response body.
    fn parse_identity(&self, body: &[u8]) -> Result<ProviderIdentity, CardError>;
}

/// Appends `segments` to the path of `base`, percent-encoding each one.
fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, CardError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| CardError::UpstreamFetch(format!("{base} can't be used as a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Profiles from the GitHub users API.
#[derive(Clone, Debug)]
pub struct GithubSource {
    api_base: Url,
}

#[derive(Debug, Default, Deserialize)]
struct GithubUser {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl GithubSource {
    /// Creates a source talking to the API at `api_base`, eg `https://api.github.com/`.
    pub fn new(api_base: Url) -> Self {
        Self { api_base }
    }
}

impl ProfileSource for GithubSource {
    fn id(&self) -> &'static str {
        "github"
    }

    fn profile_url(&self, user_id: &str) -> Result<Url, CardError> {
        join_segments(&self.api_base, &["users", user_id])
    }

    fn parse_identity(&self, body: &[u8]) -> Result<ProviderIdentity, CardError> {
        let user: GithubUser = serde_json::from_slice(body)?;
        Ok(ProviderIdentity {
            name: user.name.unwrap_or_default(),
            picture_url: user.avatar_url.unwrap_or_default(),
        })
    }
}

/// Profiles from Instagram's `?__a=1` JSON view.
#[derive(Clone, Debug)]
pub struct InstagramSource {
    base: Url,
}

#[derive(Debug, Default, Deserialize)]
struct InstagramResponse {
    #[serde(default)]
    graphql: Option<InstagramGraphql>,
}

#[derive(Debug, Default, Deserialize)]
struct InstagramGraphql {
    #[serde(default)]
    user: Option<InstagramUser>,
}

#[derive(Debug, Default, Deserialize)]
struct InstagramUser {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    profile_pic_url_hd: Option<String>,
}

impl InstagramSource {
    /// Creates a source reading profiles from `base`, eg `https://instagram.com/`.
    pub fn new(base: Url) -> Self {
        Self { base }
    }
}

impl ProfileSource for InstagramSource {
    fn id(&self) -> &'static str {
        "instagram"
    }

    fn profile_url(&self, user_id: &str) -> Result<Url, CardError> {
        // trailing empty segment keeps the `/` before the query
        let mut url = join_segments(&self.base, &[user_id, ""])?;
        url.set_query(Some("__a=1"));
        Ok(url)
    }

    fn parse_identity(&self, body: &[u8]) -> Result<ProviderIdentity, CardError> {
        let response: InstagramResponse = serde_json::from_slice(body)?;
        let user = response
            .graphql
            .and_then(|graphql| graphql.user)
            .unwrap_or_default();
        Ok(ProviderIdentity {
            name: user.full_name.unwrap_or_default(),
            picture_url: user.profile_pic_url_hd.unwrap_or_default(),
        })
    }
}

/// Lookup table from provider identifier to its [`ProfileSource`].
#[derive(Clone, Debug, Default)]
pub struct ProviderRegistry {
    sources: HashMap<&'static str, Arc<dyn ProfileSource>>,
}

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The GitHub and Instagram sources with the given base URLs.
    pub fn standard(github_api_base: Url, instagram_base: Url) -> Self {
        Self::new()
            .with_source(GithubSource::new(github_api_base))
            .with_source(InstagramSource::new(instagram_base))
    }

    /// Adds `source`, replacing any source with the same id.
    pub fn with_source(mut self, source: impl ProfileSource + 'static) -> Self {
        self.sources.insert(source.id(), Arc::new(source));
        self
    }

    /// Looks up the source for `provider`.
    pub fn get(&self, provider: &str) -> Option<Arc<dyn ProfileSource>> {
        self.sources.get(provider).cloned()
    }
}
