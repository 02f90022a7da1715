#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]  // https://bevy-cheatbook.github.io/platforms/windows.html#disabling-the-windows-console
use bevy::prelude::*;
use bevy::window::WindowTheme;
use bevy_egui::EguiPlugin;

mod asset;
mod chat;
mod login;
mod search;
mod settings;
mod ui;
mod ws;

use chat::message::events::ChatMessageReceivedEvent;
use chat::message::systems::handle_chat_message_sent_success_event_system;
use chat::systems::read_stream_system;
use chat::ui::events::{ChatMessageSentStartedEvent, ChatMessageSentSuccessEvent};
use chat::ui::systems::{
    chat_ui_system, handle_chat_message_received_event_system,
    handle_chat_message_sent_started_event_system,
};
use login::events::LoggedIn;
use login::systems::{logged_in_system, login_ui_system};
use search::events::{QueryResponseEvent, QuerySubmittedEvent};
use search::resources::SearchState;
use search::systems::{
    handle_query_response_system, query_request_system, read_query_stream_system,
    search_setup_system,
};
use search::ui::systems::search_ui_system;
use settings::resources::Settings;
use ui::resources::UiState;
use ui::systems::{set_window_icon, setup_system};
use ws::systems::websocket_system;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Courseroom".to_string(),
                window_theme: Some(WindowTheme::Dark),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(bevy_tokio_tasks::TokioTasksPlugin::default())
        .init_resource::<UiState>()
        .init_resource::<SearchState>()
        .init_resource::<Settings>()
        .add_systems(Startup, set_window_icon)
        .add_systems(Startup, setup_system)
        .add_systems(Startup, websocket_system)
        .add_systems(Startup, search_setup_system)
        .add_event::<ChatMessageSentStartedEvent>()
        .add_event::<ChatMessageSentSuccessEvent>()
        .add_event::<ChatMessageReceivedEvent>()
        .add_event::<LoggedIn>()
        .add_event::<QuerySubmittedEvent>()
        .add_event::<QueryResponseEvent>()
        .add_systems(Update, login_ui_system)
        .add_systems(Update, logged_in_system)
        .add_systems(Update, chat_ui_system)
        .add_systems(Update, search_ui_system)
        .add_systems(Update, handle_chat_message_sent_started_event_system)
        .add_systems(Update, handle_chat_message_sent_success_event_system)
        .add_systems(Update, handle_chat_message_received_event_system)
        .add_systems(Update, read_stream_system)
        .add_systems(Update, query_request_system)
        .add_systems(Update, read_query_stream_system)
        .add_systems(Update, handle_query_response_system)
        .run();
}
