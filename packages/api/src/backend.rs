use std::future::Future;

use store::{Post, User};

use crate::client::ApiClient;
use crate::error::ApiError;

/// The backend operations the client depends on.
///
/// [`ApiClient`] is the real implementation; tests substitute an in-memory one.
pub trait Backend {
    fn me(&self) -> impl Future<Output = Result<User, ApiError>>;
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, ApiError>>;
    fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, ApiError>>;
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, ApiError>>;
    fn create_post(
        &self,
        title: &str,
        content: &str,
    ) -> impl Future<Output = Result<Post, ApiError>>;
}

impl Backend for ApiClient {
    async fn me(&self) -> Result<User, ApiError> {
        ApiClient::me(self).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        ApiClient::login(self, username, password).await
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<User, ApiError> {
        ApiClient::register(self, username, email, password).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        ApiClient::logout(self).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        ApiClient::list_posts(self).await
    }

    async fn create_post(&self, title: &str, content: &str) -> Result<Post, ApiError> {
        ApiClient::create_post(self, title, content).await
    }
}
