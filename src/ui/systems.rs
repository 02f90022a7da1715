use bevy::prelude::{Camera3dBundle, Commands, Entity, NonSend, Query, With};
use bevy::window::PrimaryWindow;
use bevy::winit::WinitWindows;
use winit::window::Icon;
use crate::asset::utils::exe_asset_path;

// A camera to render egui against; there is no scene behind the panels.
pub fn setup_system(mut commands: Commands) {
    commands.spawn(Camera3dBundle::default());
}

// ostensibly sets an icon
pub fn set_window_icon(
    // we have to use `NonSend` here
    windows: NonSend<WinitWindows>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
) {
    let primary = windows.get_window(primary_window.single()).unwrap();

    // here we use the `image` crate to load our icon data from a png file
    // this is not a very bevy-native solution, but it will do
    let (icon_rgba, icon_width, icon_height) = {
        let path = exe_asset_path("assets/icon.png");
        let image = image::open(path)
            .expect("Failed to open icon path")
            .into_rgba8();
        let (width, height) = image.dimensions();
        let rgba = image.into_raw();
        (rgba, width, height)
    };

    let icon = Icon::from_rgba(icon_rgba, icon_width, icon_height).unwrap();

    primary.set_window_icon(Some(icon));
}
