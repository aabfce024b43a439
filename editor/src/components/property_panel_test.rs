use super::*;

#[test]
fn split_ids_trims_and_drops_blanks() {
    assert_eq!(split_ids("sku-1, sku-2"), vec!["sku-1", "sku-2"]);
    assert_eq!(split_ids("  sku-1 ,, sku-2 , "), vec!["sku-1", "sku-2"]);
    assert!(split_ids("").is_empty());
    assert!(split_ids(" , , ").is_empty());
}

#[test]
fn join_then_split_round_trips() {
    let ids = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    assert_eq!(split_ids(&join_ids(&ids)), ids);
}

#[test]
fn non_empty_maps_blank_to_none() {
    assert_eq!(non_empty(String::new()), None);
    assert_eq!(non_empty("   ".to_owned()), None);
    assert_eq!(non_empty("hello".to_owned()), Some("hello".to_owned()));
}

#[test]
fn variant_props_readers_fall_back_to_defaults() {
    let widget = Widget::new(WidgetProps::Unknown {
        kind: "mystery".to_owned(),
        props: serde_json::Value::Null,
    });

    assert_eq!(hero_props(&widget).title, "");
    assert_eq!(flash_sale_props(&widget).discount_pct, 0);
    assert_eq!(product_grid_props(&widget).columns, 4);
    assert!(quick_links_props(&widget).links.is_empty());
}
