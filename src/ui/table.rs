use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{SortColumn, SortDirection, SortKey};
use crate::state::{AppState, ViewState};

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the results area: the course table, or the no-results indicator
/// when nothing is displayed or the last search matched nothing.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    let rows = match &state.view {
        ViewState::Empty => {
            no_results(ui);
            return;
        }
        ViewState::Displaying { rows, .. } if rows.is_empty() => {
            no_results(ui);
            return;
        }
        ViewState::Displaying { rows, .. } => rows.clone(),
    };

    let sort = state.active_sort();
    let mut clicked: Option<SortColumn> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), 9)
        .column(Column::remainder())
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.strong("Course Type");
            });
            header.col(|ui| {
                ui.strong("Registration");
            });
            header.col(|ui| {
                if sort_header(ui, "Start Date", SortColumn::Start, sort) {
                    clicked = Some(SortColumn::Start);
                }
            });
            header.col(|ui| {
                ui.strong("End Date");
            });
            header.col(|ui| {
                if sort_header(ui, "District", SortColumn::District, sort) {
                    clicked = Some(SortColumn::District);
                }
            });
            header.col(|ui| {
                ui.strong("Address");
            });
            header.col(|ui| {
                if sort_header(ui, "PinCode", SortColumn::PinCode, sort) {
                    clicked = Some(SortColumn::PinCode);
                }
            });
            header.col(|ui| {
                ui.strong("Teachers");
            });
            header.col(|ui| {
                ui.strong("Contact");
            });
            header.col(|ui| {
                ui.strong("Language");
            });
        })
        .body(|mut body| {
            for &idx in &rows {
                let course = &state.dataset.courses[idx];
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&course.course_type);
                    });
                    row.col(|ui| {
                        ui.hyperlink_to("Register", &course.register_link);
                    });
                    row.col(|ui| {
                        ui.label(course.start.format("%d %b %Y").to_string());
                    });
                    row.col(|ui| {
                        ui.label(course.end.format("%d %b %Y").to_string());
                    });
                    row.col(|ui| {
                        ui.label(&course.district);
                    });
                    row.col(|ui| {
                        ui.label(&course.address);
                    });
                    row.col(|ui| {
                        ui.label(course.pin_code.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&course.teachers);
                    });
                    row.col(|ui| {
                        contact_cell(ui, &course.contact, &course.contact_digits());
                    });
                    row.col(|ui| {
                        ui.label(&course.language);
                    });
                });
            }
        });

    if let Some(column) = clicked {
        state.toggle_sort(column);
    }
}

/// Clickable header cell with the ▲ / ▼ / ↕ indicator for the active key.
fn sort_header(ui: &mut Ui, label: &str, column: SortColumn, sort: Option<SortKey>) -> bool {
    let icon = match sort {
        Some(key) if key.column == column => match key.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        },
        _ => "↕",
    };
    ui.button(RichText::new(format!("{label} {icon}")).strong())
        .clicked()
}

/// Contact column: the raw number plus call / WhatsApp links built from the
/// digits-only form.
fn contact_cell(ui: &mut Ui, contact: &str, digits: &str) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(contact);
        if !digits.is_empty() {
            ui.hyperlink_to("Call", format!("tel:{digits}"));
            ui.hyperlink_to("WhatsApp", format!("https://wa.me/{digits}"));
        }
    });
}

fn no_results(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("No courses found. Try a search, or Display All.");
    });
}
