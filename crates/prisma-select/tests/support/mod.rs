#![allow(dead_code)]

use prisma_select::{
    schema::{Field, Model},
    ResolveInfo, ResolvedField, Schema,
};
use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn blog_schema() -> Arc<Schema> {
    Arc::new(
        Schema::new()
            .with_model(
                "User",
                Model::new()
                    .with_field("id", Field::scalar("Int"))
                    .with_field("name", Field::scalar("String"))
                    .with_field("email", Field::scalar("String"))
                    .with_field("password", Field::scalar("String"))
                    .with_field("role", Field::enumeration("Role"))
                    .with_field("posts", Field::relation("Post"))
                    .with_field("profile", Field::relation("Profile")),
            )
            .with_model(
                "Post",
                Model::new()
                    .with_field("id", Field::scalar("Int"))
                    .with_field("title", Field::scalar("String"))
                    .with_field("body", Field::scalar("String"))
                    .with_field("author", Field::relation("User"))
                    .with_field("comments", Field::relation("Comment"))
                    .with_documentation("/// @PrismaSelect.map([BlogPost])"),
            )
            .with_model(
                "Comment",
                Model::new()
                    .with_field("id", Field::scalar("Int"))
                    .with_field("text", Field::scalar("String"))
                    .with_field("post", Field::relation("Post")),
            )
            .with_model(
                "Profile",
                Model::new()
                    .with_field("id", Field::scalar("Int"))
                    .with_field("bio", Field::scalar("String"))
                    .with_field("user", Field::relation("User")),
            ),
    )
}

/// A scalar leaf.
pub fn leaf(name: &str) -> ResolvedField {
    ResolvedField::new(name)
}

/// An object-typed field selecting `children` on `type_name`.
pub fn object(
    name: &str,
    type_name: &str,
    children: impl IntoIterator<Item = ResolvedField>,
) -> ResolvedField {
    ResolvedField::new(name).select(type_name, children)
}

/// Resolve info for a root field `name` returning `return_type`.
pub fn info(
    return_type: &str,
    name: &str,
    children: impl IntoIterator<Item = ResolvedField>,
) -> ResolveInfo {
    let type_name = prisma_select::named_type(return_type);
    ResolveInfo::new(return_type, object(name, &type_name, children))
}
