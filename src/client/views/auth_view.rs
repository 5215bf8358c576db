use eframe::egui;

use crate::client::theme::colors;
use crate::client::views::{Action, ViewInputs};

const INPUT_WIDTH: f32 = 280.0;
const LABEL_WIDTH: f32 = 80.0;

pub fn render(ui: &mut egui::Ui, inputs: &mut ViewInputs, actions: &mut Vec<Action>) {
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if inputs.register_mode { 320.0 } else { 260.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("📋 Noteboard")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if inputs.restoring {
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 160.0) / 2.0);
                    ui.label(egui::RichText::new("Restoring session...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
                return;
            }

            ui.label(
                egui::RichText::new(if inputs.register_mode {
                    "Create Account"
                } else {
                    "Welcome Back"
                })
                .size(24.0)
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            if let Some(error) = &inputs.auth_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let indent = (available_rect.width() - INPUT_WIDTH - LABEL_WIDTH - 20.0) / 2.0;

            field(ui, indent, "Email:", &mut inputs.email, false);
            if inputs.register_mode {
                field(ui, indent, "Name:", &mut inputs.name, false);
            }
            let password = field(ui, indent, "Password:", &mut inputs.password, true);
            let submit_on_enter =
                password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 120.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit = egui::Button::new(
                    egui::RichText::new(if inputs.register_mode {
                        "Sign Up"
                    } else {
                        "Login"
                    })
                    .color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);

                let clicked = ui
                    .add_enabled_ui(!inputs.auth_loading, |ui| {
                        ui.add_sized([button_width, 32.0], submit).clicked()
                    })
                    .inner;
                if (clicked || submit_on_enter) && !inputs.auth_loading {
                    actions.push(if inputs.register_mode {
                        Action::Register
                    } else {
                        Action::Login
                    });
                }

                ui.add_space(10.0);

                let toggle = egui::Button::new(
                    egui::RichText::new(if inputs.register_mode {
                        "Back to Login"
                    } else {
                        "Create Account"
                    })
                    .color(colors::TEXT_SECONDARY),
                );
                if ui.add_sized([button_width, 32.0], toggle).clicked() {
                    actions.push(Action::ToggleAuthMode);
                }
            });

            if inputs.auth_loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}

fn field(ui: &mut egui::Ui, indent: f32, label: &str, value: &mut String, password: bool) -> egui::Response {
    let response = ui
        .horizontal(|ui| {
            ui.add_space(indent);
            ui.add_sized(
                [LABEL_WIDTH, 24.0],
                egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
            );
            ui.add_sized(
                [INPUT_WIDTH, 28.0],
                egui::TextEdit::singleline(value)
                    .password(password)
                    .text_color(colors::TEXT_DARK),
            )
        })
        .inner;
    ui.add_space(8.0);
    response
}
