/// OpenAPI documentation for Scribe Service
use utoipa::OpenApi;

use crate::models::{Note, Post};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scribe Service API",
        version = "1.0.0",
        description = "Small publishing service: blog-style posts rendered as HTML pages and a JSON REST API for notes. Post creation and deletion require the admin session; the notes API is unauthenticated.",
        license(name = "MIT")
    ),
    tags(
        (name = "posts", description = "HTML post listing, creation, deletion, and title search"),
        (name = "notes", description = "JSON CRUD for notes"),
        (name = "auth", description = "Admin login and logout"),
    ),
    components(schemas(Note, Post))
)]
pub struct ApiDoc;
