//! # HTTP client for the Postboard backend
//!
//! [`ApiClient`] speaks the backend's JSON contract. Every path is joined onto
//! the configured base URL:
//!
//! | Method | Path | Request | Success body |
//! |--------|------|---------|--------------|
//! | [`me`](ApiClient::me) | `GET me` | — | `{ user }` |
//! | [`login`](ApiClient::login) | `POST login` | `{ username, password }` | `{ user }` |
//! | [`register`](ApiClient::register) | `POST register` | `{ username, email, password }` | `{ user }` |
//! | [`logout`](ApiClient::logout) | `POST logout` | — | anything |
//! | [`list_posts`](ApiClient::list_posts) | `GET posts` | — | `{ posts }` |
//! | [`create_post`](ApiClient::create_post) | `POST posts` | `{ title, content }` | `{ post }` |
//!
//! Authentication rides on the server's session cookie. Native builds keep it
//! in reqwest's cookie store, which lives as long as the client (clones share
//! it); WASM builds ask `fetch` to include credentials and let the browser own
//! the cookie.
//!
//! Non-success responses become [`ApiError::Rejected`] carrying the body's
//! `error` string when there is one.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{ClientConfig, Post, User};
use url::Url;

use crate::error::ApiError;

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct PostsEnvelope {
    posts: Vec<Post>,
}

#[derive(Deserialize)]
struct PostEnvelope {
    post: Post,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct NewPostRequest<'a> {
    title: &'a str,
    content: &'a str,
}

/// Client for the backend REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client for the configured backend.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base = config.base_url()?;
        Ok(Self {
            http: build_http()?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Current session's user.
    pub async fn me(&self) -> Result<User, ApiError> {
        let resp = self.request(Method::GET, "me")?.send().await?;
        let envelope: UserEnvelope = read_json(resp).await?;
        Ok(envelope.user)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest { username, password };
        let resp = self.request(Method::POST, "login")?.json(&body).send().await?;
        let envelope: UserEnvelope = read_json(resp).await?;
        Ok(envelope.user)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = RegisterRequest {
            username,
            email,
            password,
        };
        let resp = self
            .request(Method::POST, "register")?
            .json(&body)
            .send()
            .await?;
        let envelope: UserEnvelope = read_json(resp).await?;
        Ok(envelope.user)
    }

    /// Ask the server to end the session. The response body is not inspected.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let resp = self.request(Method::POST, "logout")?.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await?;
            return Err(rejection(status.as_u16(), &body));
        }
        Ok(())
    }

    /// All posts visible to the session, in server order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let resp = self.request(Method::GET, "posts")?.send().await?;
        let envelope: PostsEnvelope = read_json(resp).await?;
        Ok(envelope.posts)
    }

    pub async fn create_post(&self, title: &str, content: &str) -> Result<Post, ApiError> {
        let body = NewPostRequest { title, content };
        let resp = self.request(Method::POST, "posts")?.json(&body).send().await?;
        let envelope: PostEnvelope = read_json(resp).await?;
        Ok(envelope.post)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| ApiError::Decode(format!("bad endpoint {path}: {e}")))?;
        let builder = self.http.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        Ok(builder)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> Result<reqwest::Client, ApiError> {
    Ok(reqwest::Client::builder().cookie_store(true).build()?)
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> Result<reqwest::Client, ApiError> {
    Ok(reqwest::Client::new())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    if !status.is_success() {
        return Err(rejection(status.as_u16(), &body));
    }
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn rejection(status: u16, body: &[u8]) -> ApiError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => format!("Request failed with status {status}"),
    };
    ApiError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::new(format!("{}/api", server.uri()))).unwrap()
    }

    fn post_json(id: i64, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "content": null,
            "user_id": 1,
            "username": "alice",
            "created_at": "Sun, 18 Oct 2026 12:00:00 GMT"
        })
    }

    #[test]
    fn test_rejection_without_error_field() {
        let err = rejection(502, b"<html>bad gateway</html>");
        assert_eq!(err.user_message(), "Request failed with status 502");
    }

    #[tokio::test]
    async fn test_me_returns_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"user": {"id": 1, "username": "alice"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).me().await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_me_unauthenticated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Authentication required"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).me().await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_login_sends_credentials_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({"username": "alice", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "user": {"id": 1, "username": "alice"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).login("alice", "secret").await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_login_rejected_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "invalid credentials"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).login("alice", "wrong").await.unwrap_err();
        assert_eq!(err.user_message(), "invalid credentials");
    }

    #[tokio::test]
    async fn test_register_sends_full_draft() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(body_json(json!({
                "username": "bob",
                "email": "bob@example.com",
                "password": "pw"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"user": {"id": 2, "username": "bob"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server)
            .register("bob", "bob@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(user.id, 2);
    }

    #[tokio::test]
    async fn test_list_posts_keeps_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "posts": [post_json(3, "newest"), post_json(1, "oldest")]
            })))
            .mount(&server)
            .await;

        let posts = client_for(&server).list_posts().await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(posts[0].created().is_some());
    }

    #[tokio::test]
    async fn test_create_post() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/posts"))
            .and(body_json(json!({"title": "Hello", "content": ""})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"message": "Post created", "post": post_json(9, "Hello")})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let post = client_for(&server).create_post("Hello", "").await.unwrap();
        assert_eq!(post.id, 9);
        assert_eq!(post.username, "alice");
    }

    #[tokio::test]
    async fn test_create_post_accepts_inserted_row() {
        // The backend answers with the inserted row: user_id, no username.
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "post": {
                    "id": 9,
                    "title": "Hello",
                    "content": "",
                    "user_id": 1,
                    "created_at": "Sun, 18 Oct 2026 12:00:00 GMT"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let post = client_for(&server).create_post("Hello", "").await.unwrap();
        assert_eq!(post.id, 9);
        assert_eq!(post.username, "");
        assert_eq!(post.body(), None);
        assert!(post.created().is_some());
    }

    #[tokio::test]
    async fn test_success_with_wrong_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).list_posts().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_logout_ignores_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_string("bye"))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_session_cookie_is_sent_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/")
                    .set_body_json(json!({"user": {"id": 1, "username": "alice"}})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .and(header("cookie", "session=abc123"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"user": {"id": 1, "username": "alice"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.login("alice", "secret").await.unwrap();
        // A clone shares the cookie jar.
        let user = client.clone().me().await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on port 1.
        let client = ApiClient::new(&ClientConfig::new("http://127.0.0.1:1/api")).unwrap();
        let err = client.login("alice", "secret").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message(), "Network error");
    }
}
