use super::*;

#[derive(Debug)]
struct NotFound;

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page not found: about")
    }
}

impl ErrorCode for NotFound {
    fn error_code(&self) -> &'static str {
        "E_PAGE_NOT_FOUND"
    }
}

#[test]
fn success_envelope_shape() {
    let env = ApiSuccess::new(serde_json::json!({ "slug": "home" }));
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["success"], serde_json::json!(true));
    assert_eq!(json["data"]["slug"], serde_json::json!("home"));
}

#[test]
fn error_envelope_from_typed_error() {
    let env = ApiError::from_error(&NotFound);
    assert!(!env.success);
    assert_eq!(env.error.code, "E_PAGE_NOT_FOUND");
    assert_eq!(env.error.message, "page not found: about");
    assert!(env.error.details.is_none());

    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["success"], serde_json::json!(false));
    assert_eq!(json["error"]["code"], serde_json::json!("E_PAGE_NOT_FOUND"));
    // details is omitted entirely when absent, not serialized as null
    assert!(json["error"].get("details").is_none());
}

#[test]
fn error_envelope_with_details() {
    let env = ApiError::new("E_VALIDATION", "invalid body").with_details(serde_json::json!({ "field": "slug" }));
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["error"]["details"]["field"], serde_json::json!("slug"));
}

#[test]
fn page_meta_rounds_up_total_pages() {
    let meta = PageMeta::new(1, 10, 35);
    assert_eq!(meta.total_pages, 4);

    let meta = PageMeta::new(1, 10, 30);
    assert_eq!(meta.total_pages, 3);

    let meta = PageMeta::new(1, 10, 0);
    assert_eq!(meta.total_pages, 0);
}

#[test]
fn page_meta_clamps_zero_limit() {
    let meta = PageMeta::new(1, 0, 5);
    assert_eq!(meta.limit, 1);
    assert_eq!(meta.total_pages, 5);
}

#[test]
fn paginated_wire_shape_uses_camel_case_meta() {
    let env = Paginated::new(vec![1, 2, 3], PageMeta::new(2, 3, 7));
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["meta"]["totalPages"], serde_json::json!(3));
    assert_eq!(json["meta"]["page"], serde_json::json!(2));
}

#[test]
fn paginate_slices_middle_page() {
    let items: Vec<u32> = (1..=7).collect();
    let env = paginate(&items, 2, 3);
    assert_eq!(env.data, vec![4, 5, 6]);
    assert_eq!(env.meta.total, 7);
    assert_eq!(env.meta.total_pages, 3);
}

#[test]
fn paginate_out_of_range_page_is_empty_not_error() {
    let items: Vec<u32> = (1..=4).collect();
    let env = paginate(&items, 9, 2);
    assert!(env.data.is_empty());
    assert_eq!(env.meta.total, 4);
    assert_eq!(env.meta.total_pages, 2);
}

#[test]
fn envelope_round_trip() {
    let env = ApiSuccess::new(vec!["a".to_owned(), "b".to_owned()]);
    let json = serde_json::to_string(&env).unwrap();
    let restored: ApiSuccess<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert!(restored.success);
    assert_eq!(restored.data, vec!["a", "b"]);
}
