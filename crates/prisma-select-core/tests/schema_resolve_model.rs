use prisma_select_core::schema::{Field, FieldKind, Model, Schema};

fn blog_schema() -> Schema {
    Schema::new()
        .with_model(
            "User",
            Model::new()
                .with_field("id", Field::scalar("Int"))
                .with_field("posts", Field::relation("Post")),
        )
        .with_model(
            "Post",
            Model::new()
                .with_field("id", Field::scalar("Int"))
                .with_field("title", Field::scalar("String"))
                .with_documentation("/// @PrismaSelect.map([BlogPost, Article])"),
        )
}

#[test]
fn direct_name_match() {
    let schema = blog_schema();
    let (name, model) = schema.resolve("User").unwrap();
    assert_eq!(name, "User");
    assert_eq!(model.field("posts").unwrap().kind(), FieldKind::Relation);
    assert_eq!(model.field("posts").unwrap().relation_target(), Some("Post"));
}

#[test]
fn alias_annotation_fallback() {
    let schema = blog_schema();

    let (name, _) = schema.resolve("BlogPost").unwrap();
    assert_eq!(name, "Post");
    assert_eq!(schema.model("Article"), schema.get("Post"));
}

#[test]
fn unknown_and_empty_names() {
    let schema = blog_schema();
    assert!(schema.model("Comment").is_none());
    assert!(schema.model("").is_none());
    assert!(Schema::new().model("User").is_none());
}

#[test]
fn direct_match_beats_alias() {
    // `Legacy` claims `User` as an alias but the declared `User` model wins
    let schema = Schema::new()
        .with_model(
            "Legacy",
            Model::new()
                .with_field("legacy_id", Field::scalar("Int"))
                .with_documentation("@PrismaSelect.map([User])"),
        )
        .with_model("User", Model::new().with_field("id", Field::scalar("Int")));

    let (name, _) = schema.resolve("User").unwrap();
    assert_eq!(name, "User");
}

#[test]
fn ambiguous_alias_resolves_to_first_declared() {
    let schema = Schema::new()
        .with_model(
            "Post",
            Model::new().with_documentation("@PrismaSelect.map([Entry])"),
        )
        .with_model(
            "Comment",
            Model::new().with_documentation("@PrismaSelect.map([Entry])"),
        );

    let (name, _) = schema.resolve("Entry").unwrap();
    assert_eq!(name, "Post");
}

#[test]
fn alias_after_unterminated_annotation() {
    let schema = Schema::new().with_model(
        "Post",
        Model::new()
            .with_field("id", Field::new(FieldKind::Scalar, "Int"))
            .with_documentation("@PrismaSelect.map([Broken\n@PrismaSelect.map([BlogPost])"),
    );

    assert_eq!(schema.resolve("BlogPost").map(|(name, _)| name), Some("Post"));
    assert!(schema.model("Broken").is_none());
}
