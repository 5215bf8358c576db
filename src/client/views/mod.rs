use std::collections::HashMap;

use eframe::egui;

use crate::client::dnd::DragTarget;
use crate::client::state::{BoardState, ClientId};
use crate::client::theme::colors;
use crate::shared::UserResponse;

pub mod auth_view;
pub mod board_view;

/// Something the user asked for this frame
///
/// Views only read state and collect actions; the app applies them after
/// the frame is laid out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login,
    Register,
    ToggleAuthMode,
    Logout,
    Refresh,
    DismissError,
    CreateBoard(String),
    RenameBoard(ClientId, String),
    DeleteBoard(ClientId),
    CreateNote(ClientId, String),
    EditNote(ClientId, String),
    DeleteNote(ClientId),
    /// A dragged note is over this board
    DragOver(ClientId),
    /// Pointer released while dragging
    DragEnd(Option<DragTarget>),
}

/// Text fields and edit modes owned by the UI
#[derive(Debug, Default)]
pub struct ViewInputs {
    pub email: String,
    pub password: String,
    pub name: String,
    pub register_mode: bool,
    pub auth_loading: bool,
    pub auth_error: Option<String>,
    /// Waiting for the saved session check at startup
    pub restoring: bool,
    pub new_board: String,
    /// Unsent note text per board
    pub note_drafts: HashMap<ClientId, String>,
    /// Note being edited and its draft content
    pub editing: Option<(ClientId, String)>,
    /// Board being renamed and its draft name
    pub renaming: Option<(ClientId, String)>,
}

pub fn render_top_bar(
    ctx: &egui::Context,
    state: &BoardState,
    user: Option<&UserResponse>,
    actions: &mut Vec<Action>,
) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("📋 Noteboard").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let Some(user) = user else {
                        return;
                    };

                    if ui.button("Logout").clicked() {
                        actions.push(Action::Logout);
                    }
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        user.name.as_deref().unwrap_or(&user.email),
                    );
                    ui.add_space(16.0);

                    if ui.button("⟳ Refresh").clicked() {
                        actions.push(Action::Refresh);
                    }
                    if state.stale {
                        ui.colored_label(colors::WARNING, "⚠ Out of sync");
                    }
                });
            });

            if let Some(error) = &state.last_error {
                ui.horizontal(|ui| {
                    ui.colored_label(colors::ERROR, error);
                    if ui.small_button("✕").clicked() {
                        actions.push(Action::DismissError);
                    }
                });
            }
        });
}

pub fn render_main_panel(
    ctx: &egui::Context,
    state: &BoardState,
    signed_in: bool,
    inputs: &mut ViewInputs,
    actions: &mut Vec<Action>,
) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(12));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        if signed_in {
            board_view::render(ui, state, inputs, actions);
        } else {
            auth_view::render(ui, inputs, actions);
        }
    });
}
