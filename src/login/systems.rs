use bevy::prelude::{EventReader, EventWriter, ResMut};
use bevy_egui::{egui, EguiContexts};
use crate::chat::Username;
use crate::login::events::LoggedIn;
use crate::ui::resources::UiState;

pub fn login_ui_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut event_writer: EventWriter<LoggedIn>,
) {
    if ui_state.username.is_some() {
        return;
    }
    let ctx = contexts.ctx_mut();
    egui::Window::new("Login").auto_sized().show(ctx, |ui| {
        ui.label("Pick a display name");
        let res = ui.add(egui::TextEdit::singleline(&mut ui_state.login_input_text));
        res.request_focus();
        if res.ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            let name = ui_state.login_input_text.trim();
            if !name.is_empty() {
                event_writer.send(LoggedIn(Username(name.to_string())));
            }
        }
    });
}

pub fn logged_in_system(
    mut ui_state: ResMut<UiState>,
    mut event_reader: EventReader<LoggedIn>,
) {
    for e in event_reader.iter() {
        ui_state.username = Some(e.0.clone());
        ui_state.login_input_text = "".to_string();
    }
}
