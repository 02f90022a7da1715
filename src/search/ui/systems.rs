use bevy::prelude::{EventWriter, ResMut};
use bevy_egui::{egui, EguiContexts};
use crate::search::events::QuerySubmittedEvent;
use crate::search::resources::{ResultsView, SearchState};
use crate::search::{
    clean_query_text, is_valid_action_query, is_valid_search_query, QueryKind,
    CLEAR_FAILURE_TEXT, CLEAR_SUCCESS_TEXT,
};

pub fn search_ui_system(
    mut contexts: EguiContexts,
    mut search_state: ResMut<SearchState>,
    mut submitted_events: EventWriter<QuerySubmittedEvent>,
) {
    let ctx = contexts.ctx_mut();
    egui::SidePanel::right("search_panel")
        .resizable(true)
        .show(ctx, |ui| {
            ui.set_min_width(220.0);
            ui.heading("Course search");
            let res = ui.add(
                egui::TextEdit::singleline(&mut search_state.query_input_text)
                    .hint_text("query, or /abc for a department"),
            );
            let entered = res.lost_focus() && res.ctx.input(|i| i.key_pressed(egui::Key::Enter));
            let (search_clicked, count_clicked, clear_clicked) = ui
                .horizontal(|ui| {
                    (
                        ui.button("Search").clicked(),
                        ui.button("Count").clicked(),
                        ui.button("Clear").clicked(),
                    )
                })
                .inner;
            if entered || search_clicked {
                submit(QueryKind::Search, &mut search_state, &mut submitted_events);
            }
            if count_clicked {
                submit(QueryKind::Count, &mut search_state, &mut submitted_events);
            }
            if clear_clicked {
                submit(QueryKind::Clear, &mut search_state, &mut submitted_events);
            }
            ui.separator();
            render_results(ui, &search_state.results);
            ui.allocate_rect(ui.available_rect_before_wrap(), egui::Sense::hover());
        });
}

fn submit(
    kind: QueryKind,
    search_state: &mut ResMut<SearchState>,
    events: &mut EventWriter<QuerySubmittedEvent>,
) {
    let query = clean_query_text(&search_state.query_input_text);
    let valid = match kind {
        QueryKind::Search => is_valid_search_query(&query),
        QueryKind::Count | QueryKind::Clear => is_valid_action_query(&query),
    };
    if !valid {
        // clear is the one operation with explicit failure feedback
        search_state.results = match kind {
            QueryKind::Clear => ResultsView::Cleared(false),
            _ => ResultsView::Baseline,
        };
        return;
    }
    events.send(QuerySubmittedEvent { kind, query });
}

fn render_results(ui: &mut egui::Ui, results: &ResultsView) {
    egui::ScrollArea::vertical().show(ui, |ui| match results {
        ResultsView::Baseline => {
            ui.weak("Search course titles, or enter a three letter department code to count queries.");
        }
        ResultsView::Courses(rows) => {
            for (i, row) in rows.iter().enumerate() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(row.id.as_str()).strong());
                    ui.label(row.title.as_str());
                });
                if i < rows.len() - 1 {
                    ui.separator();
                }
            }
        }
        ResultsView::Counts(rows) => {
            for (i, row) in rows.iter().enumerate() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(row.label.as_str()).strong());
                    ui.label(row.value.as_str());
                });
                if i < rows.len() - 1 {
                    ui.separator();
                }
            }
        }
        ResultsView::Cleared(true) => {
            ui.label(CLEAR_SUCCESS_TEXT);
        }
        ResultsView::Cleared(false) => {
            ui.label(CLEAR_FAILURE_TEXT);
        }
    });
}
