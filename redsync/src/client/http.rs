//! reqwest implementation of [`RedditApi`] against oauth.reddit.com.
//!
//! Authentication is the OAuth2 password grant for script apps: one token
//! request with HTTP basic auth, bearer token on everything after. The
//! client holds one token for its lifetime; runs are short enough that
//! refresh is not needed.

use super::types::{
    AccountData, ContentData, Listing, MultiData, MultiModel, MultiSubreddit, RelationshipData,
    SubredditData, Thing, TokenResponse,
};
use super::{MultiVisibility, MultiredditInfo, RedditApi, SavedThing};
use crate::config::Profile;
use crate::error::{Error, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";

pub struct RedditClient {
    http: reqwest::Client,
    base: Url,
    token: String,
    user_agent: String,
}

impl RedditClient {
    /// Authenticate with the given profile's script-app credentials.
    pub async fn login(profile: &Profile) -> Result<Self> {
        let user_agent = profile
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("script:redsync:{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::new();
        let basic = BASE64.encode(format!("{}:{}", profile.client_id, profile.client_secret));
        let resp = http
            .post(TOKEN_URL)
            .header(AUTHORIZATION, format!("Basic {}", basic))
            .header(USER_AGENT, &user_agent)
            .form(&[
                ("grant_type", "password"),
                ("username", profile.username.as_str()),
                ("password", profile.password.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Auth(format!(
                "token request failed with status {}",
                resp.status()
            )));
        }

        // Bad user credentials come back as 200 with an error field.
        let token: TokenResponse = resp.json().await?;
        match token.access_token {
            Some(token) => Ok(Self {
                http,
                base: Url::parse(API_BASE)?,
                token,
                user_agent,
            }),
            None => Err(Error::Auth(
                token.error.unwrap_or_else(|| "no access token in response".to_string()),
            )),
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        Ok(self
            .http
            .request(method, self.base.join(path)?)
            .header(AUTHORIZATION, format!("bearer {}", self.token))
            .header(USER_AGENT, &self.user_agent))
    }

    /// Send and map non-2xx statuses onto the error taxonomy.
    async fn send(&self, builder: reqwest::RequestBuilder, what: &str) -> Result<reqwest::Response> {
        let resp = builder.send().await?;
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        match status {
            401 | 403 => Err(Error::Auth(format!("{}: status {}", what, status))),
            404 => Err(Error::NotFound(what.to_string())),
            409 => Err(Error::Conflict(what.to_string())),
            _ => {
                let message = resp.text().await.unwrap_or_default();
                Err(Error::Api { status, message })
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
        let resp = self.send(self.request(Method::GET, path)?, what).await?;
        Ok(resp.json().await?)
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)], what: &str) -> Result<()> {
        self.send(self.request(Method::POST, path)?.form(form), what)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl RedditApi for RedditClient {
    async fn me(&self) -> Result<String> {
        let account: AccountData = self.get_json("/api/v1/me", "fetch identity").await?;
        Ok(account.name)
    }

    async fn list_friends(&self) -> Result<Vec<String>> {
        let listing: Listing<RelationshipData> =
            self.get_json("/api/v1/me/friends", "list friends").await?;
        Ok(listing.data.children.into_iter().map(|r| r.name).collect())
    }

    async fn friend(&self, username: &str) -> Result<()> {
        let path = format!("/api/v1/me/friends/{}", username);
        let body = serde_json::json!({ "name": username });
        self.send(
            self.request(Method::PUT, &path)?.json(&body),
            &format!("add friend {}", username),
        )
        .await?;
        Ok(())
    }

    async fn unfriend(&self, username: &str) -> Result<()> {
        let path = format!("/api/v1/me/friends/{}", username);
        self.send(
            self.request(Method::DELETE, &path)?,
            &format!("remove friend {}", username),
        )
        .await?;
        Ok(())
    }

    async fn list_saved(&self, limit: u32) -> Result<Vec<SavedThing>> {
        let user = self.me().await?;
        let path = format!("/user/{}/saved?limit={}&raw_json=1", user, limit);
        let listing: Listing<Thing<ContentData>> =
            self.get_json(&path, "list saved items").await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .map(|t| SavedThing {
                kind: t.kind,
                id: t.data.id,
            })
            .collect())
    }

    async fn save_submission(&self, id: &str) -> Result<()> {
        let fullname = format!("t3_{}", id);
        self.post_form(
            "/api/save",
            &[("id", fullname.as_str())],
            &format!("save submission {}", id),
        )
        .await
    }

    async fn save_comment(&self, id: &str) -> Result<()> {
        let fullname = format!("t1_{}", id);
        self.post_form(
            "/api/save",
            &[("id", fullname.as_str())],
            &format!("save comment {}", id),
        )
        .await
    }

    async fn unsave(&self, fullname: &str) -> Result<()> {
        self.post_form(
            "/api/unsave",
            &[("id", fullname)],
            &format!("unsave {}", fullname),
        )
        .await
    }

    async fn list_subscriptions(&self, limit: u32) -> Result<Vec<String>> {
        let path = format!("/subreddits/mine/subscriber?limit={}", limit);
        let listing: Listing<Thing<SubredditData>> =
            self.get_json(&path, "list subscriptions").await?;
        Ok(listing
            .data
            .children
            .into_iter()
            .map(|t| t.data.display_name)
            .collect())
    }

    async fn subscribe(&self, name: &str) -> Result<()> {
        self.post_form(
            "/api/subscribe",
            &[("action", "sub"), ("sr_name", name)],
            &format!("subscribe to {}", name),
        )
        .await
    }

    async fn unsubscribe(&self, name: &str) -> Result<()> {
        self.post_form(
            "/api/subscribe",
            &[("action", "unsub"), ("sr_name", name)],
            &format!("unsubscribe from {}", name),
        )
        .await
    }

    async fn list_multireddits(&self) -> Result<Vec<MultiredditInfo>> {
        let multis: Vec<Thing<MultiData>> =
            self.get_json("/api/multi/mine", "list multireddits").await?;
        Ok(multis
            .into_iter()
            .map(|t| MultiredditInfo {
                name: t.data.display_name,
                path: t.data.path,
                subreddits: t.data.subreddits.into_iter().map(|s| s.name).collect(),
            })
            .collect())
    }

    async fn create_multireddit(
        &self,
        name: &str,
        subreddits: &[String],
        visibility: MultiVisibility,
    ) -> Result<()> {
        let user = self.me().await?;
        let path = format!("/api/multi/user/{}/m/{}", user, slug(name));
        let model = MultiModel {
            display_name: name.to_string(),
            subreddits: subreddits
                .iter()
                .map(|s| MultiSubreddit { name: s.clone() })
                .collect(),
            visibility: visibility.as_str().to_string(),
        };
        let model_json = serde_json::to_string(&model)?;
        self.post_form(
            &path,
            &[("model", model_json.as_str())],
            &format!("create multireddit {}", name),
        )
        .await
    }

    async fn add_to_multireddit(&self, path: &str, subreddit: &str) -> Result<()> {
        let api_path = format!("/api/multi{}/r/{}", path.trim_end_matches('/'), subreddit);
        let model = serde_json::to_string(&MultiSubreddit {
            name: subreddit.to_string(),
        })?;
        self.send(
            self.request(Method::PUT, &api_path)?
                .form(&[("model", model.as_str())]),
            &format!("add subreddit {} to {}", subreddit, path),
        )
        .await?;
        Ok(())
    }

    async fn delete_multireddit(&self, path: &str) -> Result<()> {
        let api_path = format!("/api/multi{}", path.trim_end_matches('/'));
        self.send(
            self.request(Method::DELETE, &api_path)?,
            &format!("delete multireddit {}", path),
        )
        .await?;
        Ok(())
    }

    async fn resolve_subreddit(&self, name: &str) -> Result<String> {
        let path = format!("/r/{}/about", name);
        let about: Thing<SubredditData> = self
            .get_json(&path, &format!("subreddit {}", name))
            .await?;
        Ok(about.data.display_name)
    }
}

/// Path component for a freshly created multireddit, close enough to the
/// platform's own slug rules for idempotent re-creation.
fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_flattens_display_names() {
        assert_eq!(slug("My News Feed"), "my_news_feed");
        assert_eq!(slug("rust"), "rust");
    }
}
