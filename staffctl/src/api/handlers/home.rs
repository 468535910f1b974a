//! Homepage rendering. Pure formatting, no persistence.

use crate::errors::{Error, Result};
use axum::extract::Path;
use axum::response::Html;
use minijinja::{Environment, context};

static HOMEPAGE_TEMPLATE: &str = include_str!("../../../templates/homepage.html");

#[tracing::instrument(skip_all)]
pub async fn homepage() -> Result<Html<String>> {
    render(None)
}

#[tracing::instrument(skip_all)]
pub async fn homepage_for(Path((first_name, last_name)): Path<(String, String)>) -> Result<Html<String>> {
    render(Some(format!("{first_name} {last_name}")))
}

fn render(name: Option<String>) -> Result<Html<String>> {
    // The template is tiny; building the environment per render is fine here
    let mut env = Environment::new();
    env.add_template("homepage", HOMEPAGE_TEMPLATE)
        .map_err(|e| Error::Other(e.into()))?;

    let html = env
        .get_template("homepage")
        .and_then(|template| template.render(context! { name }))
        .map_err(|e| Error::Other(e.into()))?;

    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use sqlx::SqlitePool;

    #[sqlx::test]
    async fn test_homepage_renders_generic_greeting(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/").await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("<h1>Welcome!</h1>"));
    }

    #[sqlx::test]
    async fn test_homepage_greets_by_name(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/home/Jane/Doe").await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("Welcome, Jane Doe!"));
    }
}
