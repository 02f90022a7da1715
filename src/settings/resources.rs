use bevy::prelude::Resource;
use config::Config;
use crate::asset::utils::exe_asset_path;

/// Backend endpoints, read once at startup from the exe-relative Settings file.
#[derive(Resource)]
pub struct Settings {
    /// Chat socket endpoint, e.g. `ws://localhost:9001/chat`.
    pub ws_url: String,
    /// Base url of the course search API, e.g. `http://localhost:8000/`.
    pub api_url: String,
    /// Optional session token, appended to the socket url as `?token=`.
    pub token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let path = exe_asset_path("assets/Settings");
        let settings = Config::builder()
            .add_source(config::File::with_name(
                path.to_str().expect("Settings path not here?"),
            ))
            .build()
            .unwrap();
        let ws_url = settings.get_string("WS_URL").expect("WS_URL expected at this point");
        let api_url = settings.get_string("API_URL").expect("API_URL expected at this point");
        let token = settings.get_string("TOKEN").ok();
        Settings { ws_url, api_url, token }
    }
}
