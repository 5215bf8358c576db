//! Desktop Application
//!
//! `NoteboardApp` implements `eframe::App`. Each frame it:
//!
//! 1. drains worker replies into `BoardState`
//! 2. notices drags starting or being abandoned
//! 3. lays out the views, which collect `Action`s
//! 4. applies the actions, sending server calls to the worker

use eframe::egui;

use crate::client::api::ApiClient;
use crate::client::config::ClientConfig;
use crate::client::dnd::DragTarget;
use crate::client::error::ClientError;
use crate::client::session::SessionStore;
use crate::client::state::{BoardState, ClientId};
use crate::client::sync::SyncCommand;
use crate::client::views::{self, Action, ViewInputs};
use crate::client::worker::{Worker, WorkerReply, WorkerRequest};
use crate::shared::{LoginRequest, RegisterRequest, UserResponse};

pub struct NoteboardApp {
    worker: Worker,
    state: BoardState,
    user: Option<UserResponse>,
    inputs: ViewInputs,
}

impl NoteboardApp {
    /// Start the worker and try the saved session
    pub fn new(ctx: &egui::Context, config: ClientConfig) -> Result<Self, ClientError> {
        tracing::info!("Connecting to {}", config.server_url());

        let repaint = ctx.clone();
        let worker = Worker::spawn(
            ApiClient::new(config),
            SessionStore::default_location(),
            move || repaint.request_repaint(),
        )?;
        worker.send(WorkerRequest::Restore);

        Ok(Self {
            worker,
            state: BoardState::new(),
            user: None,
            inputs: ViewInputs {
                restoring: true,
                ..ViewInputs::default()
            },
        })
    }

    fn poll_worker(&mut self) {
        while let Some(reply) = self.worker.try_recv() {
            self.handle_reply(reply);
        }
    }

    fn handle_reply(&mut self, reply: WorkerReply) {
        match reply {
            WorkerReply::Authenticated(user) => {
                tracing::info!("Signed in as {}", user.email);
                self.user = Some(user);
                self.inputs.restoring = false;
                self.inputs.auth_loading = false;
                self.inputs.auth_error = None;
                self.inputs.password.clear();
            }
            WorkerReply::AuthFailed(error) => {
                self.inputs.auth_loading = false;
                self.inputs.auth_error = Some(error);
            }
            WorkerReply::SignedOut => {
                self.user = None;
                self.state = BoardState::new();
                self.inputs.restoring = false;
                self.inputs.auth_loading = false;
            }
            WorkerReply::Event(event) => {
                if let Some(follow_up) = self.state.apply(event) {
                    self.send_command(follow_up);
                }
            }
            WorkerReply::RefreshFailed(error) => {
                tracing::warn!("Refresh failed: {}", error);
                self.state.set_error(error);
            }
        }
    }

    /// Mirror egui's drag payload into the reconciler
    fn track_drag(&mut self, ctx: &egui::Context) {
        let payload = egui::DragAndDrop::payload::<ClientId>(ctx);
        match (payload, self.state.dragged.is_some()) {
            (Some(id), false) => {
                self.state.drag_start(*id);
            }
            (None, true) => self.state.drag_cancel(),
            _ => {}
        }
    }

    fn send_command(&self, command: SyncCommand) {
        self.worker.send(WorkerRequest::Command(command));
    }

    fn perform(&mut self, action: Action) {
        let command = match action {
            Action::Login => {
                self.inputs.auth_loading = true;
                self.worker.send(WorkerRequest::Login(LoginRequest {
                    email: self.inputs.email.trim().to_string(),
                    password: self.inputs.password.clone(),
                }));
                return;
            }
            Action::Register => {
                self.inputs.auth_loading = true;
                let name = self.inputs.name.trim();
                self.worker.send(WorkerRequest::Register(RegisterRequest {
                    email: self.inputs.email.trim().to_string(),
                    password: self.inputs.password.clone(),
                    name: (!name.is_empty()).then(|| name.to_string()),
                }));
                return;
            }
            Action::ToggleAuthMode => {
                self.inputs.register_mode = !self.inputs.register_mode;
                self.inputs.auth_error = None;
                return;
            }
            Action::Logout => {
                self.user = None;
                self.state = BoardState::new();
                self.worker.send(WorkerRequest::Logout);
                return;
            }
            Action::Refresh => {
                self.worker.send(WorkerRequest::Refresh);
                return;
            }
            Action::DismissError => {
                self.state.clear_error();
                return;
            }
            Action::DragOver(board_id) => {
                if let Some(command) = self.state.begin_drag_over(DragTarget::Board(board_id)) {
                    self.send_command(command);
                }
                return;
            }
            Action::DragEnd(target) => {
                self.state.drag_end(target);
                return;
            }
            Action::CreateBoard(name) => self.state.begin_create_board(&name),
            Action::RenameBoard(id, name) => self.state.begin_rename_board(id, &name),
            Action::DeleteBoard(id) => self.state.begin_delete_board(id),
            Action::CreateNote(board_id, content) => self.state.begin_create_note(board_id, &content),
            Action::EditNote(id, content) => self.state.begin_edit_note(id, &content),
            Action::DeleteNote(id) => self.state.begin_delete_note(id),
        };

        match command {
            Ok(command) => self.send_command(command),
            Err(e) => {
                tracing::debug!("Action refused: {}", e);
                self.state.set_error(e.to_string());
            }
        }
    }
}

impl eframe::App for NoteboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        self.track_drag(ctx);

        let mut actions = Vec::new();
        views::render_top_bar(ctx, &self.state, self.user.as_ref(), &mut actions);
        views::render_main_panel(
            ctx,
            &self.state,
            self.user.is_some(),
            &mut self.inputs,
            &mut actions,
        );

        for action in actions {
            self.perform(action);
        }
    }
}
