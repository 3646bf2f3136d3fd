use axum::response::Html;

pub(super) async fn get_home() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
