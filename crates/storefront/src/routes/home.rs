//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::layout::{Layout, Section};
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    /// Target of the hero call-to-action.
    pub catalog_href: &'static str,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    Ok(HomeTemplate {
        layout: Layout::load(Some(Section::Home), &state, &session).await?,
        catalog_href: Section::Catalog.path(),
    })
}
