//! Server-rendered user page

use crate::error::{ApiError, ApiResult};
use askama::Template;
use axum::response::Html;
use webdemo_types::User;

#[derive(Template)]
#[template(path = "user/view.html")]
struct UserViewTemplate<'a> {
    title: &'a str,
    user: &'a User,
}

/// The user shown on the demo page
pub fn demo_user() -> User {
    User::new("john_doe", "john@example.com")
}

/// Render the user page
pub async fn user_page() -> ApiResult<Html<String>> {
    let user = demo_user();
    tracing::info!(username = %user.username, "User page requested");

    let template = UserViewTemplate {
        title: "User",
        user: &user,
    };
    let html = template
        .render()
        .map_err(|e| ApiError::Internal(format!("Failed to render user view: {}", e)))?;

    Ok(Html(html))
}
