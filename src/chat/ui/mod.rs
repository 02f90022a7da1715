pub mod events;
pub mod systems;
