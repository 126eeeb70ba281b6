mod helper;

use crate::helper::{app_routes, post};
use serde_json::json;
use tether::error::TetherError;
use tether::field::RelationshipField;
use tether::model::link::Link;
use tether::model::relationship::Relationships;
use tether::resolver::UrlParams;

#[test]
fn serializes_related_link() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .build()
        .unwrap();
    let relationship = field.serialize("comments", &post(), &app_routes()).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "links": { "related": "/posts/7/comments/" } })
    );
}

#[test]
fn serializes_self_link() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .self_view("posts_comments")
        .self_view_kwargs(vec![("post_id", json!("<id>"))])
        .build()
        .unwrap();
    let relationship = field.serialize("comments", &post(), &app_routes()).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "links": { "self": "/posts/7/comments/" } })
    );
}

#[test]
fn external_kwarg_requests_an_absolute_url() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>")), ("_external", json!(true))])
        .build()
        .unwrap();
    let relationship = field.serialize("comments", &post(), &app_routes()).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "links": { "related": "http://localhost/posts/7/comments/" } })
    );
}

#[test]
fn include_data_requires_type() {
    let _ = env_logger::try_init();

    let err = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .include_data(true)
        .build()
        .unwrap_err();

    assert!(matches!(err, TetherError::TypeRequired));
    assert_eq!(err.to_string(), "include_data=True requires the type_ argument.");
}

#[test]
fn include_data_single() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("author_detail")
        .related_view_kwargs(vec![("author_id", json!("<author.id>"))])
        .include_data(true)
        .type_("people")
        .build()
        .unwrap();
    let relationship = field.serialize("author", &post(), &app_routes()).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({
            "links": { "related": "/authors/9" },
            "data": { "type": "people", "id": "9" }
        })
    );
}

#[test]
fn include_data_many_preserves_order() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .include_data(true)
        .type_("comments")
        .many(true)
        .build()
        .unwrap();
    let relationship = field.serialize("comments", &post(), &app_routes()).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({
            "links": { "related": "/posts/7/comments/" },
            "data": [
                { "type": "comments", "id": "5" },
                { "type": "comments", "id": "12" }
            ]
        })
    );
}

#[test]
fn absent_single_linkage_serializes_to_null() {
    let _ = env_logger::try_init();

    let field =
        RelationshipField::builder().include_data(true).type_("people").build().unwrap();
    let orphan = json!({ "id": 1 });
    let relationship = field.serialize("author", &orphan, &app_routes()).unwrap();

    assert_eq!(serde_json::to_string(&relationship).unwrap(), r#"{"data":null}"#);
}

#[test]
fn many_over_a_single_record_is_an_error() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .include_data(true)
        .type_("people")
        .many(true)
        .build()
        .unwrap();
    let err = field.serialize("author", &post(), &app_routes()).unwrap_err();

    assert!(matches!(err, TetherError::ExpectedSequence(ref attribute) if attribute == "author"));
}

#[test]
fn fields_are_dump_only_by_default() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .build()
        .unwrap();
    assert!(field.dump_only());
    assert!(!field.include_data());
    assert!(!field.many());

    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .dump_only(false)
        .build()
        .unwrap();
    assert!(!field.dump_only());
}

#[test]
fn literal_kwargs_pass_through_to_the_resolver() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>")), ("preview", json!(true))])
        .build()
        .unwrap();
    let relationship = field.serialize("comments", &post(), &app_routes()).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "links": { "related": "/posts/7/comments/?preview=true" } })
    );
}

#[test]
fn missing_path_segment_is_an_error() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("author_detail")
        .related_view_kwargs(vec![("author_id", json!("<editor.id>"))])
        .build()
        .unwrap();
    let err = field.serialize("author", &post(), &app_routes()).unwrap_err();

    assert!(matches!(err, TetherError::MissingAttribute { ref segment, .. } if segment == "editor"));
}

#[test]
fn unknown_endpoint_propagates() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("post_feed")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .build()
        .unwrap();
    let err = field.serialize("comments", &post(), &app_routes()).unwrap_err();

    assert!(matches!(err, TetherError::UnknownEndpoint(ref endpoint) if endpoint == "post_feed"));
}

#[test]
fn empty_configuration_is_rejected() {
    let _ = env_logger::try_init();

    let err = RelationshipField::builder().build().unwrap_err();
    assert!(matches!(err, TetherError::EmptyRelationship));

    let err = RelationshipField::builder()
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .build()
        .unwrap_err();
    assert!(matches!(err, TetherError::KwargsWithoutView("related")));
}

#[test]
fn resolver_is_injected_by_contract() {
    let _ = env_logger::try_init();

    let resolver = |endpoint: &str, params: &UrlParams, external: bool| -> tether::Result<Link> {
        assert_eq!(endpoint, "posts_comments");
        assert!(!external);
        format!("/p/{}/c", params["post_id"]).parse::<Link>().map_err(Into::into)
    };
    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .build()
        .unwrap();
    let relationship = field.serialize("comments", &post(), &resolver).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "links": { "related": "/p/7/c" } })
    );
}

#[test]
fn any_serializable_record_can_be_a_source() {
    let _ = env_logger::try_init();

    #[derive(serde_derive::Serialize)]
    struct Author {
        id: u64,
    }
    #[derive(serde_derive::Serialize)]
    struct Post {
        id: u64,
        author: Author,
    }

    let record = tether::record::to_record(&Post { id: 7, author: Author { id: 9 } }).unwrap();
    let field = RelationshipField::builder()
        .related_view("author_detail")
        .related_view_kwargs(vec![("author_id", json!("<author.id>"))])
        .build()
        .unwrap();
    let relationship = field.serialize("author", &record, &app_routes()).unwrap();

    assert_eq!(
        serde_json::to_value(&relationship).unwrap(),
        json!({ "links": { "related": "/authors/9" } })
    );
}

#[test]
fn relationships_key_by_field_name() {
    let _ = env_logger::try_init();

    let field = RelationshipField::builder()
        .related_view("posts_comments")
        .related_view_kwargs(vec![("post_id", json!("<id>"))])
        .build()
        .unwrap();
    let relationship = field.serialize("comments", &post(), &app_routes()).unwrap();

    let mut relationships = Relationships::new();
    relationships.insert("comments".to_string(), relationship);
    assert!(relationships["comments"].links.is_valid());
    assert!(relationships["comments"].links.related().is_some());
    assert!(relationships["comments"].links.slf().is_none());
}
