//! Trait seam for the Gracenote Web API.
//!
//! [`GracenotePlugin`](super::GracenotePlugin) talks to Gracenote only
//! through [`GracenoteApi`], so tests can substitute a mock.

use async_trait::async_trait;

use super::domain::{GracenoteError, SearchQuery};
use super::dto;

/// The two Gracenote calls the plugin needs.
#[async_trait]
pub trait GracenoteApi: Send + Sync {
    /// Exchange a client id for a user id.
    async fn register(&self, client_id: &str) -> Result<String, GracenoteError>;

    /// Best matching album, or `None` if nothing matched.
    async fn search(
        &self,
        client_id: &str,
        user_id: &str,
        query: &SearchQuery,
    ) -> Result<Option<dto::Album>, GracenoteError>;
}

#[async_trait]
impl GracenoteApi for super::client::GracenoteClient {
    async fn register(&self, client_id: &str) -> Result<String, GracenoteError> {
        self.register(client_id).await
    }

    async fn search(
        &self,
        client_id: &str,
        user_id: &str,
        query: &SearchQuery,
    ) -> Result<Option<dto::Album>, GracenoteError> {
        self.search(client_id, user_id, query).await
    }
}

/// Mock Gracenote API for testing.
///
/// Returns configurable responses and records every call.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// A recorded search call
    #[derive(Debug, Clone, PartialEq)]
    pub struct SearchCall {
        pub client_id: String,
        pub user_id: String,
        pub query: SearchQuery,
    }

    pub struct MockGracenote {
        /// User id handed out by `register`
        pub user_id: String,
        /// Album returned by `search`
        pub album: Option<dto::Album>,
        /// Error to return (takes precedence over everything else)
        pub error: Option<GracenoteError>,
        registrations: Mutex<Vec<String>>,
        searches: Mutex<Vec<SearchCall>>,
    }

    impl MockGracenote {
        /// Mock that registers fine and finds nothing.
        pub fn no_matches() -> Self {
            Self {
                user_id: "mock-user".to_string(),
                album: None,
                error: None,
                registrations: Mutex::new(Vec::new()),
                searches: Mutex::new(Vec::new()),
            }
        }

        /// Mock whose searches all return `album`.
        pub fn with_album(album: dto::Album) -> Self {
            Self {
                album: Some(album),
                ..Self::no_matches()
            }
        }

        /// Mock that fails every call.
        pub fn with_error(error: GracenoteError) -> Self {
            Self {
                error: Some(error),
                ..Self::no_matches()
            }
        }

        /// Client ids passed to `register`, in order
        pub fn registrations(&self) -> Vec<String> {
            self.registrations.lock().unwrap().clone()
        }

        /// Every search made, in order
        pub fn searches(&self) -> Vec<SearchCall> {
            self.searches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GracenoteApi for MockGracenote {
        async fn register(&self, client_id: &str) -> Result<String, GracenoteError> {
            self.registrations.lock().unwrap().push(client_id.to_string());
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.user_id.clone())
        }

        async fn search(
            &self,
            client_id: &str,
            user_id: &str,
            query: &SearchQuery,
        ) -> Result<Option<dto::Album>, GracenoteError> {
            self.searches.lock().unwrap().push(SearchCall {
                client_id: client_id.to_string(),
                user_id: user_id.to_string(),
                query: query.clone(),
            });
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.album.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::test_utils::mock_album;

        #[tokio::test]
        async fn test_mock_no_matches() {
            let mock = MockGracenote::no_matches();
            let result = mock.search("c", "u", &SearchQuery::album("x")).await.unwrap();
            assert!(result.is_none());
            assert_eq!(mock.searches().len(), 1);
        }

        #[tokio::test]
        async fn test_mock_records_registrations() {
            let mock = MockGracenote::with_album(mock_album());
            let user = mock.register("client-1").await.unwrap();
            assert_eq!(user, "mock-user");
            assert_eq!(mock.registrations(), vec!["client-1".to_string()]);
        }

        #[tokio::test]
        async fn test_mock_error() {
            let mock = MockGracenote::with_error(GracenoteError::Network("timeout".to_string()));
            let result = mock.search("c", "u", &SearchQuery::default()).await;
            assert!(matches!(result, Err(GracenoteError::Network(_))));
        }
    }
}
