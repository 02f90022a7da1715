use bevy::prelude::{EventReader, EventWriter, ResMut};
use bevy_egui::{egui, EguiContexts};
use crate::chat::message::events::ChatMessageReceivedEvent;
use crate::chat::message::ChatMessage;
use crate::chat::ui::events::{ChatMessageSentStartedEvent, ChatMessageSentSuccessEvent};
use crate::chat::Username;
use crate::login::events::LoggedIn;
use crate::ui::resources::UiState;

pub fn chat_ui_system(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut chat_message_sent_started_events: EventWriter<ChatMessageSentStartedEvent>,
    chat_message_sent_success_events: EventReader<ChatMessageSentSuccessEvent>,
    mut logged_in_events: EventReader<LoggedIn>,
) {
    let username = match ui_state.username.clone() {
        Some(username) => username,
        None => return,
    };
    let ctx = contexts.ctx_mut();
    let just_logged_in = logged_in_events.iter().len() > 0;
    egui::TopBottomPanel::bottom("post_panel")
        .resizable(true)
        .show(ctx, |ui| {
            if ui_state.sending_chat_message {
                ui.label("Sending message...");
            } else {
                let input = ui.horizontal(|ui| {
                    let res = ui.add_sized(
                        ui.available_size(),
                        egui::TextEdit::singleline(&mut ui_state.chat_input_text),
                    );
                    if !chat_message_sent_success_events.is_empty() {
                        res.request_focus();
                    }
                    if just_logged_in {
                        res.request_focus();
                    }
                    res
                });

                handle_chat_input(
                    &input.response.ctx,
                    &mut ui_state,
                    &mut chat_message_sent_started_events,
                );
            }
            ui.set_min_height(100.0);
        });
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            let messages = &ui_state.messages;
            if messages.is_empty() {
                // placeholder until the first real message lands
                ui.weak("No messages yet");
                return;
            }
            for (i, m) in messages.iter().enumerate() {
                let res = ui.vertical(|ui| {
                    message_label(ui, m, &username);
                });
                // Add separator between messages
                if i < messages.len() - 1 {
                    ui.separator();
                } else {
                    res.response.scroll_to_me(Some(egui::Align::BOTTOM));
                }
            }
        });
        ui.allocate_rect(ui.available_rect_before_wrap(), egui::Sense::hover());
    });
}

fn message_label(ui: &mut egui::Ui, message: &ChatMessage, viewer: &Username) {
    ui.horizontal_wrapped(|ui| {
        if message.username == *viewer {
            ui.label(
                egui::RichText::new("(You)")
                    .strong()
                    .color(egui::Color32::LIGHT_GREEN),
            );
        } else {
            ui.label(egui::RichText::new(format!("({})", message.username)).strong());
        }
        ui.label(message.content.to_string());
    });
}

fn handle_chat_input(
    ctx: &egui::Context,
    ui_state: &mut ResMut<UiState>,
    events: &mut EventWriter<ChatMessageSentStartedEvent>,
) {
    if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        if ui_state.chat_input_text.len() > 0 {
            ui_state.sending_chat_message = true;

            events.send(ChatMessageSentStartedEvent(ui_state.chat_input_text.clone()));
            ui_state.chat_input_text.clear();
        }
    }
}

pub fn handle_chat_message_sent_started_event_system(
    mut ui_state: ResMut<UiState>,
    mut chat_message_sent_started_events: EventReader<ChatMessageSentStartedEvent>,
    mut chat_message_sent_success_events: EventWriter<ChatMessageSentSuccessEvent>,
) {
    for event in chat_message_sent_started_events.iter() {
        ui_state.sending_chat_message = false;
        chat_message_sent_success_events.send(ChatMessageSentSuccessEvent(event.0.clone()));
    }
}

pub fn handle_chat_message_received_event_system(
    mut events: EventReader<ChatMessageReceivedEvent>,
    mut ui_state: ResMut<UiState>,
) {
    for event in events.iter() {
        ui_state.messages.push(event.0.clone());
    }
}
