//! Integration tests for cart persistence over file storage.
//!
//! The slot may have been written by an older page script, edited by hand or
//! truncated; every one of those must load as some cart without an error.

use rust_decimal::Decimal;

use stallfront_core::{Cart, CartItem, CurrencyCode, Price};
use stallfront_storefront::{
    CartPage, CartStore, Decoded, EmptyReason, FileStorage, Storage, StorageError,
};

fn file_store(dir: &tempfile::TempDir) -> CartStore<FileStorage> {
    CartStore::new(FileStorage::new(dir.path()), "cart")
}

fn write_slot(dir: &tempfile::TempDir, contents: &str) {
    std::fs::write(dir.path().join("cart.json"), contents).expect("write slot");
}

#[test]
fn test_fresh_directory_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = file_store(&dir);
    assert_eq!(store.decode(), Decoded::Empty(EmptyReason::Absent));
    assert!(store.load().is_empty());
}

#[test]
fn test_save_load_round_trip_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cart = Cart::from(vec![
        CartItem::new("Red Mug", Price::normalize("₦2,500")),
        CartItem::new("Red Mug", Price::normalize("₦2,500")),
        CartItem::new("Tote", Price::normalize("₦1,999.50")),
    ]);

    file_store(&dir).save(&cart);

    // A second store over the same directory stands in for a page reload.
    assert_eq!(file_store(&dir).load(), cart);
}

#[test]
fn test_corrupt_slots_load_empty() {
    let cases = [
        ("truncated", r#"[{"name":"Red Mug","pri"#),
        ("number", "42"),
        ("object", r#"{"name":"Red Mug","price":2500}"#),
        ("string", r#""[]""#),
        ("html", "<html></html>"),
    ];

    for (label, contents) in cases {
        let dir = tempfile::tempdir().expect("tempdir");
        write_slot(&dir, contents);
        let store = file_store(&dir);
        assert!(matches!(store.decode(), Decoded::Empty(_)), "{label}");
        assert!(store.load().is_empty(), "{label}");
    }
}

#[test]
fn test_legacy_string_prices_are_normalized() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_slot(
        &dir,
        r#"[{"name":"Red Mug","price":"₦2,500"},{"name":"Blue Mug","price":"-1,000.00"},{"price":null}]"#,
    );

    let page = CartPage::new(file_store(&dir), CurrencyCode::NGN);
    let view = page.render();

    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.total.amount.amount(), Decimal::from(3500));
    assert_eq!(
        view.rows.get(2).expect("third row").name,
        CartItem::PLACEHOLDER_NAME
    );
}

#[test]
fn test_next_save_repairs_corrupt_slot() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_slot(&dir, "{oops");

    let mut store = file_store(&dir);
    let cart = store.add(CartItem::new("Cap", Price::normalize("₦3,000")));

    assert_eq!(cart.len(), 1);
    let raw = std::fs::read_to_string(dir.path().join("cart.json")).expect("slot");
    assert_eq!(raw, r#"[{"name":"Cap","price":3000}]"#);
}

#[test]
fn test_external_clear_resets_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = file_store(&dir);
    store.add(CartItem::new("Cap", Price::normalize("3000")));

    let mut storage = store.into_storage();
    storage.remove_item("cart").expect("remove");

    assert!(CartStore::new(storage, "cart").load().is_empty());
}

#[test]
fn test_unwritable_directory_keeps_cart_in_memory() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A file where the data directory should be makes every write fail.
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, "not a directory").expect("blocker");

    let mut store = CartStore::new(FileStorage::new(&blocker), "cart");
    assert!(matches!(
        FileStorage::new(&blocker).set_item("cart", "[]"),
        Err(StorageError::Io { .. })
    ));

    let cart = store.add(CartItem::new("Cap", Price::normalize("3000")));

    assert!(store.is_degraded());
    assert_eq!(store.load(), cart);
}
