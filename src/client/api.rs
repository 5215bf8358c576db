//! Board API Client
//!
//! `BoardApi` is the seam between the synchronizer and the network.
//! `ApiClient` implements it over `reqwest`; tests substitute an in-memory
//! implementation.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::shared::{
    AuthResponse, Board, BoardNameRequest, BoardWithNotes, ErrorResponse, LoginRequest,
    MessageResponse, MoveNoteRequest, Note, NoteContentRequest, RegisterRequest, UserResponse,
};

/// Every REST operation the client uses
#[allow(async_fn_in_trait)]
pub trait BoardApi {
    /// Token sent with protected calls, `None` to sign out
    fn set_token(&mut self, token: Option<String>);

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError>;
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;
    async fn me(&self) -> Result<UserResponse, ClientError>;

    async fn list_boards(&self) -> Result<Vec<Board>, ClientError>;
    async fn get_board(&self, id: i64) -> Result<BoardWithNotes, ClientError>;
    async fn create_board(&self, name: &str) -> Result<Board, ClientError>;
    async fn rename_board(&self, id: i64, name: &str) -> Result<Board, ClientError>;
    async fn delete_board(&self, id: i64) -> Result<(), ClientError>;

    async fn list_notes(&self, board_id: i64) -> Result<Vec<Note>, ClientError>;
    async fn create_note(&self, board_id: i64, content: &str) -> Result<Note, ClientError>;
    async fn update_note(&self, id: i64, content: &str) -> Result<Note, ClientError>;
    async fn move_note(&self, id: i64, board_id: i64) -> Result<Note, ClientError>;
    async fn delete_note(&self, id: i64) -> Result<(), ClientError>;
}

/// HTTP implementation of `BoardApi`
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            token: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::NotAuthenticated)?;
        Ok(builder.bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Network error: {}", e);
            ClientError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|body| body.message)
                .unwrap_or_else(|_| {
                    if text.is_empty() {
                        status.to_string()
                    } else {
                        text
                    }
                });
            tracing::debug!("Request failed: {} - {}", status, message);
            return Err(ClientError::api(status.as_u16(), message));
        }

        Ok(response.json::<T>().await?)
    }
}

impl BoardApi for ApiClient {
    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let url = self.config.api_url("/api/auth/register");
        Self::send(self.client.post(url).json(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let url = self.config.api_url("/api/auth/login");
        Self::send(self.client.post(url).json(request)).await
    }

    async fn me(&self) -> Result<UserResponse, ClientError> {
        let url = self.config.api_url("/api/auth/me");
        Self::send(self.authorized(self.client.get(url))?).await
    }

    async fn list_boards(&self) -> Result<Vec<Board>, ClientError> {
        let url = self.config.api_url("/api/boards");
        Self::send(self.authorized(self.client.get(url))?).await
    }

    async fn get_board(&self, id: i64) -> Result<BoardWithNotes, ClientError> {
        let url = self.config.api_url(&format!("/api/boards/{}", id));
        Self::send(self.authorized(self.client.get(url))?).await
    }

    async fn create_board(&self, name: &str) -> Result<Board, ClientError> {
        let url = self.config.api_url("/api/boards");
        let body = BoardNameRequest {
            name: name.to_string(),
        };
        Self::send(self.authorized(self.client.post(url))?.json(&body)).await
    }

    async fn rename_board(&self, id: i64, name: &str) -> Result<Board, ClientError> {
        let url = self.config.api_url(&format!("/api/boards/{}", id));
        let body = BoardNameRequest {
            name: name.to_string(),
        };
        Self::send(self.authorized(self.client.put(url))?.json(&body)).await
    }

    async fn delete_board(&self, id: i64) -> Result<(), ClientError> {
        let url = self.config.api_url(&format!("/api/boards/{}", id));
        let _: MessageResponse = Self::send(self.authorized(self.client.delete(url))?).await?;
        Ok(())
    }

    async fn list_notes(&self, board_id: i64) -> Result<Vec<Note>, ClientError> {
        let url = self.config.api_url(&format!("/api/boards/{}/notes", board_id));
        Self::send(self.authorized(self.client.get(url))?).await
    }

    async fn create_note(&self, board_id: i64, content: &str) -> Result<Note, ClientError> {
        let url = self.config.api_url(&format!("/api/boards/{}/notes", board_id));
        let body = NoteContentRequest {
            content: content.to_string(),
        };
        Self::send(self.authorized(self.client.post(url))?.json(&body)).await
    }

    async fn update_note(&self, id: i64, content: &str) -> Result<Note, ClientError> {
        let url = self.config.api_url(&format!("/api/notes/{}", id));
        let body = NoteContentRequest {
            content: content.to_string(),
        };
        Self::send(self.authorized(self.client.put(url))?.json(&body)).await
    }

    async fn move_note(&self, id: i64, board_id: i64) -> Result<Note, ClientError> {
        let url = self.config.api_url(&format!("/api/notes/{}/move", id));
        let body = MoveNoteRequest { board_id };
        Self::send(self.authorized(self.client.patch(url))?.json(&body)).await
    }

    async fn delete_note(&self, id: i64) -> Result<(), ClientError> {
        let url = self.config.api_url(&format!("/api/notes/{}", id));
        let _: MessageResponse = Self::send(self.authorized(self.client.delete(url))?).await?;
        Ok(())
    }
}
