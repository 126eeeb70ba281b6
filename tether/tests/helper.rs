use serde_json::{json, Value};
use tether_routing::RouteSet;

pub fn post() -> Value {
    json!({
        "id": 7,
        "title": "Leaving the Warren",
        "author": { "id": 9, "name": "Hazel" },
        "comments": [
            { "id": 5, "body": "dig deeper" },
            { "id": 12, "body": "watch the run" }
        ]
    })
}

pub fn app_routes() -> RouteSet {
    RouteSet::with_base("http://localhost")
        .unwrap()
        .route("posts_comments", "/posts/<post_id>/comments/")
        .unwrap()
        .route("author_detail", "/authors/<int:author_id>")
        .unwrap()
}
