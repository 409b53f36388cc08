use axum::response::Html;

/// The prediction form. Static markup; league and team selects are filled
/// client-side from the JSON API.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
