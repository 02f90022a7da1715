use bevy::prelude::{Commands, Res, ResMut};
use bevy_tokio_tasks::TokioTasksRuntime;
use crossbeam_channel::bounded;
use ezsockets::ClientConfig;
use url::Url;
use crate::chat::message::ChatMessage;
use crate::chat::resources::StreamReceiver;
use crate::settings::resources::Settings;
use crate::ws::resources::WsClient;
use crate::ws::Client;

pub fn websocket_system(
    mut commands: Commands,
    runtime: ResMut<TokioTasksRuntime>,
    settings: Res<Settings>,
) {
    let ws_url = settings.ws_url.clone();
    let token = settings.token.clone();
    let (tx, rx) = bounded::<ChatMessage>(10);
    let (handle, future) = runtime
        .runtime()
        .block_on(runtime.spawn_background_task(|_ctx| async move {
            let mut url = Url::parse(&ws_url).expect("WS_URL expected to be a valid url");
            if let Some(token) = token {
                url.query_pairs_mut().append_pair("token", &token);
            }
            let config = ClientConfig::new(url);
            // TODO surface the initial connect failure instead of panicking the task
            ezsockets::connect(|handle| Client { handle, tx }, config).await
        }))
        .unwrap();
    runtime.spawn_background_task(|_ctx| async move {
        future.await.unwrap();
    });

    commands.insert_resource(StreamReceiver(rx));
    commands.insert_resource(WsClient(handle));
}
