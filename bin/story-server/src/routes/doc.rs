use crate::routes::{health, story};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "story-server",
    description = "Creative-writing assistant API backed by Gemini",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(story::StoryApi::openapi());
    root
}
