use axum::{response::Html, Json};
use serde_json::{json, Value};

const LANDING_PAGE: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the code assistant API" }))
}
