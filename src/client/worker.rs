//! Background API Worker
//!
//! The UI thread never blocks on the network. It sends `WorkerRequest`s
//! over a channel to a worker thread, which owns the API client and a
//! single-threaded tokio runtime, and reads `WorkerReply`s back on the next
//! frame.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use crate::client::api::BoardApi;
use crate::client::error::ClientError;
use crate::client::session::{validate_session, Session, SessionStore};
use crate::client::sync::{execute, fetch_snapshot, SyncCommand, SyncEvent};
use crate::shared::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

#[derive(Debug, Clone)]
pub enum WorkerRequest {
    Register(RegisterRequest),
    Login(LoginRequest),
    /// Try the session saved on disk
    Restore,
    Refresh,
    Command(SyncCommand),
    Logout,
}

#[derive(Debug, Clone)]
pub enum WorkerReply {
    Authenticated(UserResponse),
    AuthFailed(String),
    /// No usable saved session
    SignedOut,
    Event(SyncEvent),
    RefreshFailed(String),
}

/// Handle held by the UI thread
pub struct Worker {
    requests: Sender<WorkerRequest>,
    replies: Receiver<WorkerReply>,
    thread: JoinHandle<()>,
}

impl Worker {
    /// Start the worker thread
    ///
    /// `notify` runs after every reply so the UI can wake up and repaint.
    pub fn spawn<A, F>(api: A, store: Option<SessionStore>, notify: F) -> Result<Self, ClientError>
    where
        A: BoardApi + Send + 'static,
        F: Fn() + Send + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Session(format!("failed to create runtime: {}", e)))?;

        let (request_tx, request_rx) = channel::<WorkerRequest>();
        let (reply_tx, reply_rx) = channel::<WorkerReply>();

        let thread = std::thread::Builder::new()
            .name("noteboard-worker".to_string())
            .spawn(move || {
                let mut api = api;
                while let Ok(request) = request_rx.recv() {
                    let replies = runtime.block_on(handle(&mut api, store.as_ref(), request));
                    for reply in replies {
                        if reply_tx.send(reply).is_err() {
                            return;
                        }
                    }
                    notify();
                }
                tracing::debug!("Worker channel closed, stopping");
            })
            .map_err(|e| ClientError::Session(format!("failed to spawn worker: {}", e)))?;

        Ok(Self {
            requests: request_tx,
            replies: reply_rx,
            thread,
        })
    }

    pub fn send(&self, request: WorkerRequest) {
        if self.requests.send(request).is_err() {
            tracing::error!("Worker thread is gone, request dropped");
        }
    }

    /// Next reply, if one is ready
    pub fn try_recv(&self) -> Option<WorkerReply> {
        match self.replies.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("Worker thread stopped unexpectedly");
                None
            }
        }
    }

    /// Block until the next reply; used by tests
    pub fn recv(&self) -> Option<WorkerReply> {
        self.replies.recv().ok()
    }

    /// Close the channel and wait for the thread
    pub fn shutdown(self) {
        let Self {
            requests, thread, ..
        } = self;
        drop(requests);
        if thread.join().is_err() {
            tracing::error!("Worker thread panicked");
        }
    }
}

async fn handle<A: BoardApi>(
    api: &mut A,
    store: Option<&SessionStore>,
    request: WorkerRequest,
) -> Vec<WorkerReply> {
    match request {
        WorkerRequest::Register(request) => {
            let result = api.register(&request).await;
            signed_in(api, store, result).await
        }
        WorkerRequest::Login(request) => {
            let result = api.login(&request).await;
            signed_in(api, store, result).await
        }
        WorkerRequest::Restore => restore(api, store).await,
        WorkerRequest::Refresh => vec![refresh(api).await],
        WorkerRequest::Command(command) => vec![WorkerReply::Event(execute(api, command).await)],
        WorkerRequest::Logout => {
            api.set_token(None);
            if let Some(store) = store {
                if let Err(e) = store.clear() {
                    tracing::warn!("Failed to clear session: {}", e);
                }
            }
            vec![WorkerReply::SignedOut]
        }
    }
}

async fn signed_in<A: BoardApi>(
    api: &mut A,
    store: Option<&SessionStore>,
    result: Result<AuthResponse, ClientError>,
) -> Vec<WorkerReply> {
    let auth = match result {
        Ok(auth) => auth,
        Err(e) => return vec![WorkerReply::AuthFailed(e.to_string())],
    };

    api.set_token(Some(auth.token.clone()));
    if let Some(store) = store {
        let session = Session {
            token: auth.token,
            email: auth.user.email.clone(),
        };
        if let Err(e) = store.save(&session) {
            tracing::warn!("Failed to save session: {}", e);
        }
    }

    vec![WorkerReply::Authenticated(auth.user), refresh(api).await]
}

async fn restore<A: BoardApi>(api: &mut A, store: Option<&SessionStore>) -> Vec<WorkerReply> {
    let Some(store) = store else {
        return vec![WorkerReply::SignedOut];
    };

    let session = match store.load() {
        Ok(Some(session)) => session,
        Ok(None) => return vec![WorkerReply::SignedOut],
        Err(e) => {
            tracing::warn!("Ignoring unreadable session: {}", e);
            return vec![WorkerReply::SignedOut];
        }
    };

    api.set_token(Some(session.token));
    match validate_session(api, store).await {
        Ok(user) => vec![WorkerReply::Authenticated(user), refresh(api).await],
        Err(e) => {
            tracing::info!("Saved session not usable: {}", e);
            api.set_token(None);
            vec![WorkerReply::SignedOut]
        }
    }
}

async fn refresh<A: BoardApi>(api: &A) -> WorkerReply {
    match fetch_snapshot(api).await {
        Ok(snapshot) => WorkerReply::Event(SyncEvent::Refreshed(snapshot)),
        Err(e) => WorkerReply::RefreshFailed(e.to_string()),
    }
}
