use bevy::prelude::Event;
use crate::search::QueryKind;

/// A cleaned, validated query ready to go out over HTTP.
#[derive(Event)]
pub struct QuerySubmittedEvent {
    pub kind: QueryKind,
    pub query: String,
}

/// Raw response body for an earlier submission.
#[derive(Event)]
pub struct QueryResponseEvent {
    pub kind: QueryKind,
    pub body: String,
}
