use axum::{
    extract::{Query, State},
    response::Html,
};
use minijinja::{Environment, context};

use crate::api::AppState;
use crate::api::models::SearchParams;
use crate::error::HtmlError;
use crate::results::ResultsPage;

/// Page templates, compiled into the binary.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("landing.html", include_str!("../templates/landing.html"))?;
        env.add_template("results.html", include_str!("../templates/results.html"))?;
        Ok(Templates { env })
    }

    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, HtmlError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

pub async fn landing_handler(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    Ok(Html(state.templates.render("landing.html", context! {})?))
}

/// Serves the results page in its initial state. The fetch itself happens in
/// the browser once the page has loaded.
pub async fn results_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, HtmlError> {
    let params = SearchParams::from_pairs(pairs);
    let mut page = ResultsPage::new();
    page.set_query(params.query());

    let body = state.templates.render(
        "results.html",
        context! {
            query => params.q.as_deref().unwrap_or_default(),
            state => page.state().kind(),
        },
    )?;
    Ok(Html(body))
}
