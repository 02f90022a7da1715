use bevy::prelude::{Commands, EventReader, EventWriter, Res, ResMut};
use bevy::utils::tracing;
use bevy_tokio_tasks::TokioTasksRuntime;
use crossbeam_channel::bounded;
use url::Url;
use crate::search::events::{QueryResponseEvent, QuerySubmittedEvent};
use crate::search::resources::{
    QueryResponse, QueryResponseReceiver, QueryResponseSender, ResultsView, SearchApi,
    SearchState,
};
use crate::search::{
    is_clear_success, is_empty_response, parse_count_rows, parse_course_rows, QueryKind,
};
use crate::settings::resources::Settings;

pub fn search_setup_system(mut commands: Commands, settings: Res<Settings>) {
    let base = Url::parse(&settings.api_url).expect("API_URL expected to be a valid url");
    let (tx, rx) = bounded::<QueryResponse>(10);
    commands.insert_resource(SearchApi {
        base,
        http: reqwest::Client::new(),
    });
    commands.insert_resource(QueryResponseSender(tx));
    commands.insert_resource(QueryResponseReceiver(rx));
}

pub fn query_request_system(
    mut submitted_events: EventReader<QuerySubmittedEvent>,
    api: Res<SearchApi>,
    sender: Res<QueryResponseSender>,
    runtime: ResMut<TokioTasksRuntime>,
) {
    for event in submitted_events.iter() {
        let path = match event.kind {
            QueryKind::Search => event.query.clone(),
            QueryKind::Count => format!("count/{}", event.query),
            QueryKind::Clear => format!("clear/{}", event.query),
        };
        let url = match api.base.join(&path) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("could not build query url for {path}: {e}");
                continue;
            }
        };
        let http = api.http.clone();
        let tx = sender.0.clone();
        let kind = event.kind;
        runtime.spawn_background_task(move |_ctx| async move {
            match fetch_body(http, url).await {
                Ok(body) => {
                    if let Err(e) = tx.send(QueryResponse { kind, body }) {
                        tracing::warn!("query response channel closed: {e}");
                    }
                }
                // the panel keeps whatever it was showing
                Err(e) => tracing::warn!("query request failed: {e}"),
            }
        });
    }
}

async fn fetch_body(http: reqwest::Client, url: Url) -> Result<String, reqwest::Error> {
    http.get(url).send().await?.text().await
}

pub fn read_query_stream_system(
    receiver: Res<QueryResponseReceiver>,
    mut events: EventWriter<QueryResponseEvent>,
) {
    for response in receiver.try_iter() {
        events.send(QueryResponseEvent {
            kind: response.kind,
            body: response.body,
        });
    }
}

pub fn handle_query_response_system(
    mut events: EventReader<QueryResponseEvent>,
    mut search_state: ResMut<SearchState>,
) {
    for event in events.iter() {
        search_state.results = view_for_response(event.kind, &event.body);
    }
}

fn view_for_response(kind: QueryKind, body: &str) -> ResultsView {
    match kind {
        QueryKind::Search if is_empty_response(body) => ResultsView::Baseline,
        QueryKind::Search => ResultsView::Courses(parse_course_rows(body)),
        QueryKind::Count if is_empty_response(body) => ResultsView::Baseline,
        QueryKind::Count => ResultsView::Counts(parse_count_rows(body)),
        QueryKind::Clear => ResultsView::Cleared(is_clear_success(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::CourseRow;

    #[test]
    fn empty_search_response_reverts_to_baseline() {
        assert_eq!(view_for_response(QueryKind::Search, ""), ResultsView::Baseline);
        assert_eq!(view_for_response(QueryKind::Search, "\n"), ResultsView::Baseline);
    }

    #[test]
    fn search_response_renders_course_rows() {
        let view = view_for_response(QueryKind::Search, "CS 101 Intro\n");
        assert_eq!(
            view,
            ResultsView::Courses(vec![CourseRow {
                id: "CS 101".to_string(),
                title: "Intro".to_string(),
            }])
        );
    }

    #[test]
    fn clear_response_maps_to_explicit_feedback() {
        assert_eq!(view_for_response(QueryKind::Clear, "\n"), ResultsView::Cleared(true));
        assert_eq!(view_for_response(QueryKind::Clear, ""), ResultsView::Cleared(false));
        assert_eq!(
            view_for_response(QueryKind::Clear, "error\n"),
            ResultsView::Cleared(false)
        );
    }
}
