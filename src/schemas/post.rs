use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::{fields, FieldIssue, RequestSchema, Schema};

pub const TITLE_REQUIRED: &str = "Title is required.";
pub const CONTENT_REQUIRED: &str = "Content is required.";
pub const PUBLISHED_INVALID: &str = "Published must be a boolean.";
pub const POST_ID_REQUIRED: &str = "Post ID is required.";

/// Body shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostBody {
    pub title: String,
    pub content: String,
    pub published: bool,
}

impl Schema for PostBody {
    fn parse(input: &Value) -> Result<Self, Vec<FieldIssue>> {
        let obj = fields::object(input);

        let title = fields::required_string(&obj, "title", TITLE_REQUIRED);
        let content = fields::required_string(&obj, "content", CONTENT_REQUIRED);
        let published = fields::optional_bool(&obj, "published", false, PUBLISHED_INVALID);

        match (title, content, published) {
            (Ok(title), Ok(content), Ok(published)) => Ok(Self {
                title,
                content,
                published,
            }),
            (title, content, published) => Err([title.err(), content.err(), published.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }
}

/// `:postId` route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostIdParams {
    #[serde(rename = "postId")]
    pub post_id: Uuid,
}

impl Schema for PostIdParams {
    fn parse(input: &Value) -> Result<Self, Vec<FieldIssue>> {
        let obj = fields::object(input);
        fields::uuid(&obj, "postId", POST_ID_REQUIRED)
            .map(|post_id| Self { post_id })
            .map_err(|issue| vec![issue])
    }
}

/// POST /posts
pub struct CreatePostRequest;

impl RequestSchema for CreatePostRequest {
    type Params = ();
    type Body = PostBody;
}

/// PUT /posts/:postId
pub struct UpdatePostRequest;

impl RequestSchema for UpdatePostRequest {
    type Params = PostIdParams;
    type Body = PostBody;
}

/// DELETE /posts/:postId
pub struct DeletePostRequest;

impl RequestSchema for DeletePostRequest {
    type Params = PostIdParams;
    type Body = ();
}
