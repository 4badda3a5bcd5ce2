//! `GET /` built-in landing page, used when no web directory is configured.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Pagesmith</title></head>
<body style="font-family:sans-serif;max-width:40rem;margin:4rem auto">
<h1>Pagesmith</h1>
<p>Generate a landing page with <code>POST /api/generate {"topic": "..."}</code>,
publish it with <code>POST /api/publish {"title": "...", "html": "..."}</code>,
then open the returned <code>/s/&lt;slug&gt;</code> link.</p>
</body>
</html>
"#;

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
