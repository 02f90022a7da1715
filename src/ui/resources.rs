use bevy::prelude::Resource;
use crate::chat::message::ChatMessage;
use crate::chat::Username;

#[derive(Default, Resource)]
pub struct UiState {
    pub chat_input_text: String,
    pub login_input_text: String,
    pub sending_chat_message: bool,
    pub username: Option<Username>,
    pub messages: Vec<ChatMessage>,
}
