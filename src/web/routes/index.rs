use askama::Template;
use axum::{extract::State, response::Html};

use crate::database::ActivityRoster;
use crate::services::activities_service::{self, ActivityCardView};
use crate::web::error::ApiError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub activities: Vec<ActivityCardView>,
    pub build_id: &'static str,
}

pub async fn index_handler(
    State(roster): State<ActivityRoster>,
) -> Result<Html<String>, ApiError> {
    let template = IndexTemplate {
        activities: activities_service::build_activity_cards(&roster),
        build_id: env!("MERGINGTON_BUILD_ID"),
    };
    Ok(Html(template.render()?))
}
