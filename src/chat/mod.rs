use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

pub mod message;
pub mod resources;
pub mod systems;
pub mod ui;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Username(pub String);

impl fmt::Display for Username {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageText(pub String);

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
