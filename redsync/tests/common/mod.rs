//! Shared in-memory account for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use redsync::client::{MultiVisibility, MultiredditInfo, RedditApi, SavedThing};
use redsync::error::{Error, Result};

/// How an injected failure should present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Server,
    Auth,
}

impl Failure {
    fn to_error(self, what: &str) -> Error {
        match self {
            Failure::Server => Error::Api {
                status: 500,
                message: format!("injected failure: {}", what),
            },
            Failure::Auth => Error::Auth(format!("injected failure: {}", what)),
        }
    }
}

#[derive(Default)]
pub struct MockState {
    pub user: String,
    pub friends: Vec<String>,
    pub saved: Vec<SavedThing>,
    pub subscriptions: Vec<String>,
    pub multireddits: Vec<MultiredditInfo>,
    /// Subreddits that resolve; anything else 404s.
    pub known_subreddits: Vec<String>,
    /// Which lookup each saved import went through, for dispatch assertions.
    pub submission_saves: Vec<String>,
    pub comment_saves: Vec<String>,
    /// When set, every subscribe call fails this way.
    pub fail_subscribe: Option<Failure>,
}

pub struct MockApi {
    pub state: Mutex<MockState>,
}

impl MockApi {
    pub fn new(state: MockState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    fn multi_path(user: &str, name: &str) -> String {
        format!("/user/{}/m/{}/", user, name.to_lowercase())
    }
}

#[async_trait]
impl RedditApi for MockApi {
    async fn me(&self) -> Result<String> {
        Ok(self.state.lock().user.clone())
    }

    async fn list_friends(&self) -> Result<Vec<String>> {
        Ok(self.state.lock().friends.clone())
    }

    async fn friend(&self, username: &str) -> Result<()> {
        let mut state = self.state.lock();
        if !state.friends.iter().any(|f| f == username) {
            state.friends.push(username.to_string());
        }
        Ok(())
    }

    async fn unfriend(&self, username: &str) -> Result<()> {
        let mut state = self.state.lock();
        match state.friends.iter().position(|f| f == username) {
            Some(i) => {
                state.friends.remove(i);
                Ok(())
            }
            None => Err(Error::NotFound(username.to_string())),
        }
    }

    async fn list_saved(&self, _limit: u32) -> Result<Vec<SavedThing>> {
        Ok(self.state.lock().saved.clone())
    }

    async fn save_submission(&self, id: &str) -> Result<()> {
        self.state.lock().submission_saves.push(id.to_string());
        Ok(())
    }

    async fn save_comment(&self, id: &str) -> Result<()> {
        self.state.lock().comment_saves.push(id.to_string());
        Ok(())
    }

    async fn unsave(&self, fullname: &str) -> Result<()> {
        let mut state = self.state.lock();
        match state.saved.iter().position(|s| s.fullname() == fullname) {
            Some(i) => {
                state.saved.remove(i);
                Ok(())
            }
            None => Err(Error::NotFound(fullname.to_string())),
        }
    }

    async fn list_subscriptions(&self, _limit: u32) -> Result<Vec<String>> {
        Ok(self.state.lock().subscriptions.clone())
    }

    async fn subscribe(&self, name: &str) -> Result<()> {
        let mut state = self.state.lock();
        if let Some(failure) = state.fail_subscribe {
            return Err(failure.to_error("subscribe"));
        }
        if !state.subscriptions.iter().any(|s| s == name) {
            state.subscriptions.push(name.to_string());
        }
        Ok(())
    }

    async fn unsubscribe(&self, name: &str) -> Result<()> {
        let mut state = self.state.lock();
        match state.subscriptions.iter().position(|s| s == name) {
            Some(i) => {
                state.subscriptions.remove(i);
                Ok(())
            }
            None => Err(Error::NotFound(name.to_string())),
        }
    }

    async fn list_multireddits(&self) -> Result<Vec<MultiredditInfo>> {
        Ok(self.state.lock().multireddits.clone())
    }

    async fn create_multireddit(
        &self,
        name: &str,
        subreddits: &[String],
        _visibility: MultiVisibility,
    ) -> Result<()> {
        let mut state = self.state.lock();
        let path = Self::multi_path(&state.user, name);
        if state.multireddits.iter().any(|m| m.path == path) {
            return Err(Error::Conflict(path));
        }
        state.multireddits.push(MultiredditInfo {
            name: name.to_string(),
            path,
            subreddits: subreddits.to_vec(),
        });
        Ok(())
    }

    async fn add_to_multireddit(&self, path: &str, subreddit: &str) -> Result<()> {
        let mut state = self.state.lock();
        if !state.known_subreddits.iter().any(|s| s == subreddit) {
            return Err(Error::NotFound(subreddit.to_string()));
        }
        let Some(multi) = state.multireddits.iter_mut().find(|m| m.path == path) else {
            return Err(Error::NotFound(path.to_string()));
        };
        if !multi.subreddits.iter().any(|s| s == subreddit) {
            multi.subreddits.push(subreddit.to_string());
        }
        Ok(())
    }

    async fn delete_multireddit(&self, path: &str) -> Result<()> {
        let mut state = self.state.lock();
        match state.multireddits.iter().position(|m| m.path == path) {
            Some(i) => {
                state.multireddits.remove(i);
                Ok(())
            }
            None => Err(Error::NotFound(path.to_string())),
        }
    }

    async fn resolve_subreddit(&self, name: &str) -> Result<String> {
        let state = self.state.lock();
        if state.known_subreddits.iter().any(|s| s == name) {
            Ok(name.to_string())
        } else {
            Err(Error::NotFound(name.to_string()))
        }
    }
}
