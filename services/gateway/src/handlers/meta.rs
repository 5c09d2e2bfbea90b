use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html};

pub async fn healthz() -> &'static str {
    "OK"
}

pub async fn metrics_page(State(state): State<AppState>) -> Html<String> {
    let hits = state.hits.get();
    Html(format!(
        "<html>\n<body>\n<h1>Welcome, Roost Admin</h1>\n<p>The files have been served {hits} times!</p>\n</body>\n</html>"
    ))
}

pub async fn reset_metrics(State(state): State<AppState>) -> StatusCode {
    state.hits.reset();
    StatusCode::OK
}
