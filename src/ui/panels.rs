use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, ViewState};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title, load/result counters, chat toggle and the
/// current status or error message.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Course Finder");

        ui.separator();

        let shown = match &state.view {
            ViewState::Displaying { rows, .. } => rows.len(),
            ViewState::Empty => 0,
        };
        ui.label(format!(
            "{} courses loaded, {} shown",
            state.dataset.len(),
            shown
        ));

        ui.separator();

        if ui.selectable_label(state.chat.open, "Ask us").clicked() {
            state.chat.open = !state.chat.open;
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – search widgets
// ---------------------------------------------------------------------------

/// Render the search panel: district dropdown, pin code and address inputs,
/// and the three action buttons.  All transitions go through [`AppState`];
/// this layer never touches the view directly.
pub fn search_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Find a Course");
    ui.separator();

    // Clone so we can mutate state inside the loop.
    let districts = state.dataset.districts.clone();

    ui.strong("District");
    let selected = if state.criteria.district.is_empty() {
        "Any".to_string()
    } else {
        state.criteria.district.clone()
    };
    egui::ComboBox::from_id_salt("district_filter")
        .selected_text(selected)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.criteria.district.is_empty(), "Any")
                .clicked()
            {
                state.criteria.district.clear();
            }
            for district in &districts {
                if ui
                    .selectable_label(state.criteria.district == *district, district)
                    .clicked()
                {
                    state.criteria.district = district.clone();
                }
            }
        });

    ui.add_space(4.0);
    ui.strong("Pin code");
    ui.add(
        egui::TextEdit::singleline(&mut state.criteria.pin_code).hint_text("6-digit pin code"),
    );

    ui.add_space(4.0);
    ui.strong("Address");
    ui.add(
        egui::TextEdit::singleline(&mut state.criteria.address).hint_text("Address contains…"),
    );

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Search").clicked() {
            state.search();
        }
        if ui.button("Clear").clicked() {
            state.clear();
        }
        if ui.button("Display All").clicked() {
            state.display_all();
        }
    });
}

// ---------------------------------------------------------------------------
// Floating chat window
// ---------------------------------------------------------------------------

/// Render the chat widget when toggled open: transcript on top, input line
/// and Send button below.
pub fn chat_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.chat.open {
        return;
    }

    let mut open = state.chat.open;
    egui::Window::new("Course Assistant")
        .open(&mut open)
        .default_width(320.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .max_height(240.0)
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui: &mut Ui| {
                    for msg in &state.chat.messages {
                        if msg.from_user {
                            ui.label(RichText::new(format!("You: {}", msg.text)).strong());
                        } else {
                            ui.label(&msg.text);
                        }
                    }
                });

            ui.separator();
            ui.horizontal(|ui: &mut Ui| {
                let input = ui.text_edit_singleline(&mut state.chat.input);
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Send").clicked() || submitted {
                    state.chat.submit(&state.dataset);
                    input.request_focus();
                }
            });
        });
    state.chat.open = open;
}
