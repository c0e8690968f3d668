//! Wiper behavior: clearing, idempotence, category selection.

mod common;

use common::{MockApi, MockState};
use redsync::client::{MultiredditInfo, SavedThing};
use redsync::model::Categories;
use redsync::wipe::wipe;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn populated() -> MockApi {
    MockApi::new(MockState {
        user: "alice".to_string(),
        friends: strings(&["bob", "carol"]),
        saved: vec![
            SavedThing {
                kind: "t3".to_string(),
                id: "x".to_string(),
            },
            SavedThing {
                kind: "t1".to_string(),
                id: "y".to_string(),
            },
        ],
        subscriptions: strings(&["rust", "golang"]),
        multireddits: vec![MultiredditInfo {
            name: "news".to_string(),
            path: "/user/alice/m/news/".to_string(),
            subreddits: strings(&["worldnews"]),
        }],
        ..Default::default()
    })
}

#[tokio::test]
async fn wipe_clears_all_selected_categories() {
    let mock = populated();

    let report = wipe(&mock, Categories::all()).await.unwrap();

    assert!(report.is_clean());
    let state = mock.state.lock();
    assert!(state.friends.is_empty());
    assert!(state.saved.is_empty());
    assert!(state.subscriptions.is_empty());
    assert!(state.multireddits.is_empty());
}

#[tokio::test]
async fn wipe_twice_is_idempotent() {
    let mock = populated();

    wipe(&mock, Categories::all()).await.unwrap();
    let report = wipe(&mock, Categories::all()).await.unwrap();

    assert!(report.is_clean());
    let state = mock.state.lock();
    assert!(state.friends.is_empty());
    assert!(state.saved.is_empty());
    assert!(state.subscriptions.is_empty());
    assert!(state.multireddits.is_empty());
}

#[tokio::test]
async fn wipe_leaves_unselected_categories_alone() {
    let mock = populated();

    let report = wipe(
        &mock,
        Categories {
            friends: true,
            ..Categories::none()
        },
    )
    .await
    .unwrap();

    assert!(report.is_clean());
    let state = mock.state.lock();
    assert!(state.friends.is_empty());
    assert_eq!(state.subscriptions, strings(&["rust", "golang"]));
    assert_eq!(state.multireddits.len(), 1);
}
