use bevy::prelude::{EventReader, Res, ResMut};
use bevy::utils::tracing;
use crate::chat::ui::events::ChatMessageSentSuccessEvent;
use crate::chat::MessageText;
use crate::ui::resources::UiState;
use crate::ws::resources::WsClient;
use crate::ws::Call;

pub fn handle_chat_message_sent_success_event_system(
    mut chat_message_sent_success_events_r: EventReader<ChatMessageSentSuccessEvent>,
    ws_client: ResMut<WsClient>,
    ui_state: Res<UiState>,
) {
    for event in chat_message_sent_success_events_r.iter() {
        tracing::info!("forwarding message to socket");
        let username = ui_state
            .username
            .clone()
            .expect("username is supposed to be here");
        ws_client.0.call(Call::Post(username, MessageText(event.0.clone())));
    }
}
