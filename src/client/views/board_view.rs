//! Board columns, note cards and drag-and-drop wiring.
//!
//! Each board is an egui drop zone and each note card carries its
//! `ClientId` as drag payload. Hovering a zone reports `DragOver`; releasing
//! on a card reports `DragEnd` with that note, releasing on bare column
//! space reports `DragEnd(None)`.

use eframe::egui;

use crate::client::dnd::DragTarget;
use crate::client::state::{BoardState, ClientBoard, ClientId, ClientNote};
use crate::client::theme::{self, colors};
use crate::client::views::{Action, ViewInputs};

const COLUMN_WIDTH: f32 = 260.0;

pub fn render(ui: &mut egui::Ui, state: &BoardState, inputs: &mut ViewInputs, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut inputs.new_board)
                .hint_text("New board name")
                .desired_width(220.0),
        );
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("➕ Add board").clicked() || enter {
            actions.push(Action::CreateBoard(std::mem::take(&mut inputs.new_board)));
        }
    });
    ui.add_space(12.0);

    if state.boards.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No boards yet. Create one above.");
        return;
    }

    let dragged = state.dragged.as_ref().map(|note| note.id);

    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal_top(|ui| {
            for board in &state.boards {
                render_board(ui, board, dragged, inputs, actions);
                ui.add_space(12.0);
            }
        });
    });
}

fn render_board(
    ui: &mut egui::Ui,
    board: &ClientBoard,
    dragged: Option<ClientId>,
    inputs: &mut ViewInputs,
    actions: &mut Vec<Action>,
) {
    let mut released_on_note = false;

    let (zone, dropped) = ui.dnd_drop_zone::<ClientId, ()>(theme::column_frame(), |ui| {
        ui.set_width(COLUMN_WIDTH);

        let renaming = matches!(&inputs.renaming, Some((id, _)) if *id == board.id);
        if renaming {
            rename_row(ui, board.id, inputs, actions);
        } else {
            title_row(ui, board, inputs, actions);
        }
        ui.separator();

        note_input(ui, board.id, inputs, actions);
        ui.add_space(6.0);

        for note in &board.notes {
            if render_note(ui, note, dragged, inputs, actions) {
                released_on_note = true;
            }
            ui.add_space(6.0);
        }

        if board.notes.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "Drop notes here");
        }
    });

    if zone.response.dnd_hover_payload::<ClientId>().is_some() {
        actions.push(Action::DragOver(board.id));
    }
    if dropped.is_some() && !released_on_note {
        actions.push(Action::DragEnd(None));
    }
}

fn title_row(ui: &mut egui::Ui, board: &ClientBoard, inputs: &mut ViewInputs, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&board.name)
                .strong()
                .size(16.0)
                .color(colors::TEXT_LIGHT),
        );

        if board.id.is_temporary() {
            ui.spinner();
            return;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("🗑").on_hover_text("Delete board").clicked() {
                actions.push(Action::DeleteBoard(board.id));
            }
            if ui.small_button("✏").on_hover_text("Rename board").clicked() {
                inputs.renaming = Some((board.id, board.name.clone()));
            }
        });
    });
}

fn rename_row(ui: &mut egui::Ui, id: ClientId, inputs: &mut ViewInputs, actions: &mut Vec<Action>) {
    let mut done = false;

    if let Some((_, draft)) = inputs.renaming.as_mut() {
        ui.horizontal(|ui| {
            let response = ui.add(egui::TextEdit::singleline(draft).desired_width(COLUMN_WIDTH - 60.0));
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.small_button("✔").clicked() || enter {
                actions.push(Action::RenameBoard(id, draft.clone()));
                done = true;
            }
            if ui.small_button("✕").clicked() {
                done = true;
            }
        });
    }

    if done {
        inputs.renaming = None;
    }
}

fn note_input(ui: &mut egui::Ui, board_id: ClientId, inputs: &mut ViewInputs, actions: &mut Vec<Action>) {
    let draft = inputs.note_drafts.entry(board_id).or_default();

    ui.add_enabled_ui(!board_id.is_temporary(), |ui| {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(draft)
                    .hint_text("Add a note")
                    .desired_width(COLUMN_WIDTH - 40.0),
            );
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.small_button("➕").clicked() || enter {
                actions.push(Action::CreateNote(board_id, std::mem::take(draft)));
            }
        });
    });
}

/// Draw one note; true when a drag was released on it
fn render_note(
    ui: &mut egui::Ui,
    note: &ClientNote,
    dragged: Option<ClientId>,
    inputs: &mut ViewInputs,
    actions: &mut Vec<Action>,
) -> bool {
    let editing = matches!(&inputs.editing, Some((id, _)) if *id == note.id);
    if editing {
        edit_card(ui, note.id, inputs, actions);
        return false;
    }

    let pending = note.id.is_temporary();
    let card = theme::card_frame(pending)
        .show(ui, |ui| {
            ui.set_width(COLUMN_WIDTH - 20.0);

            ui.dnd_drag_source(egui::Id::new(("note", note.id)), note.id, |ui| {
                ui.label(egui::RichText::new(&note.content).color(colors::TEXT_DARK));
            });

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(note.created_at.format("%b %-d, %H:%M").to_string())
                        .small()
                        .color(colors::TIMESTAMP),
                );
                if pending {
                    ui.spinner();
                    return;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").on_hover_text("Delete note").clicked() {
                        actions.push(Action::DeleteNote(note.id));
                    }
                    if ui.small_button("✏").on_hover_text("Edit note").clicked() {
                        inputs.editing = Some((note.id, note.content.clone()));
                    }
                });
            });
        })
        .response;

    if dragged != Some(note.id) && card.dnd_release_payload::<ClientId>().is_some() {
        actions.push(Action::DragEnd(Some(DragTarget::Note(note.id))));
        return true;
    }
    false
}

fn edit_card(ui: &mut egui::Ui, id: ClientId, inputs: &mut ViewInputs, actions: &mut Vec<Action>) {
    let mut done = false;

    theme::card_frame(false).show(ui, |ui| {
        ui.set_width(COLUMN_WIDTH - 20.0);
        let Some((_, draft)) = inputs.editing.as_mut() else {
            return;
        };

        ui.add(
            egui::TextEdit::multiline(draft)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .text_color(colors::TEXT_DARK),
        );
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                actions.push(Action::EditNote(id, draft.clone()));
                done = true;
            }
            if ui.button("Cancel").clicked() {
                done = true;
            }
        });
    });

    if done {
        inputs.editing = None;
    }
}
