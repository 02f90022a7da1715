use bevy::prelude::{Deref, Resource};
use crossbeam_channel::{Receiver, Sender};
use url::Url;
use crate::search::{CountRow, CourseRow, QueryKind};

/// What the results area currently shows. `Baseline` is the fixed placeholder
/// the panel reverts to on invalid input and empty responses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Baseline,
    Courses(Vec<CourseRow>),
    Counts(Vec<CountRow>),
    Cleared(bool),
}

#[derive(Default, Resource)]
pub struct SearchState {
    pub query_input_text: String,
    pub results: ResultsView,
}

#[derive(Resource)]
pub struct SearchApi {
    pub base: Url,
    pub http: reqwest::Client,
}

pub struct QueryResponse {
    pub kind: QueryKind,
    pub body: String,
}

#[derive(Resource, Deref)]
pub struct QueryResponseReceiver(pub Receiver<QueryResponse>);

#[derive(Resource, Deref)]
pub struct QueryResponseSender(pub Sender<QueryResponse>);
