use bevy::prelude::Event;
use crate::chat::Username;

#[derive(Event)]
pub struct LoggedIn(pub Username);
