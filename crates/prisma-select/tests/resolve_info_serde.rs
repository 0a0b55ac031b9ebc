use pretty_assertions::assert_eq;
use prisma_select::{Options, PrismaSelect, ResolveInfo};
use serde_json::json;

#[test]
fn deserializes_parsed_resolve_info() {
    let info: ResolveInfo = serde_json::from_value(json!({
        "returnType": "[User!]!",
        "field": {
            "name": "users",
            "alias": "users",
            "args": { "take": 2, "first": 1 },
            "fieldsByTypeName": {
                "User": {
                    "id": { "name": "id", "alias": "id", "args": {}, "fieldsByTypeName": {} },
                    "handle": { "name": "name", "alias": "handle", "args": {}, "fieldsByTypeName": {} },
                    "posts": {
                        "name": "posts",
                        "alias": "posts",
                        "fieldsByTypeName": {
                            "Post": {
                                "title": { "name": "title" },
                            },
                        },
                    },
                },
            },
        },
    }))
    .unwrap();

    assert_eq!(info.named_type(), "User");
    assert_eq!(info.field.children().count(), 3);

    let select = PrismaSelect::new(&info, Options::new());
    assert_eq!(
        select.value(),
        json!({
            "select": {
                "id": true,
                "name": true,
                "posts": { "select": { "title": true } },
            },
            "take": 2,
        })
    );
}

#[test]
fn round_trips_through_json() {
    let info: ResolveInfo = serde_json::from_value(json!({
        "returnType": "Post",
        "field": { "name": "post", "fieldsByTypeName": { "Post": { "id": { "name": "id" } } } },
    }))
    .unwrap();

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["field"]["fieldsByTypeName"]["Post"]["id"]["name"], "id");
    assert_eq!(serde_json::from_value::<ResolveInfo>(json).unwrap(), info);
}
