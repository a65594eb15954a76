//! Integration test for a full cart session over file-backed storage.
//!
//! Walks the whole lifecycle: start with nothing persisted, build up a cart
//! through the service operations, then reload from the same directory as a
//! fresh process would and check the cart came back intact.

use std::sync::Arc;

use testresult::TestResult;

use trolley::{CartService, FileStorage, Product, StoredCartService};

fn product(id: &str, price: u64) -> Product {
    Product {
        id: id.to_owned(),
        title: format!("Product {id}"),
        image_url: format!("https://example.test/{id}.png"),
        price,
    }
}

#[tokio::test]
async fn cart_session_survives_reload_from_disk() -> TestResult {
    let dir = tempfile::tempdir()?;

    {
        let service = StoredCartService::load(FileStorage::new(dir.path())).await?;

        service.add_to_cart(product("apple", 75)).await?;
        service.add_to_cart(product("bread", 2_20)).await?;
        service.add_to_cart(product("apple", 75)).await?;
        service.increment("bread").await?;
        service.decrement("apple").await?;
    }

    let reloaded = StoredCartService::load(FileStorage::new(dir.path())).await?;
    let products = reloaded.products();

    let entries: Vec<(&str, u32)> = products
        .iter()
        .map(|item| (item.id.as_str(), item.quantity))
        .collect();

    assert_eq!(entries, vec![("apple", 1), ("bread", 2)]);

    Ok(())
}

#[tokio::test]
async fn decrementing_everything_persists_an_empty_cart() -> TestResult {
    let dir = tempfile::tempdir()?;

    {
        let service = StoredCartService::load(FileStorage::new(dir.path())).await?;

        service.add_to_cart(product("apple", 75)).await?;
        service.decrement("apple").await?;
    }

    let reloaded = StoredCartService::load(FileStorage::new(dir.path())).await?;

    assert!(reloaded.products().is_empty());

    Ok(())
}

#[tokio::test]
async fn consumers_share_one_cart_through_a_dyn_handle() -> TestResult {
    let dir = tempfile::tempdir()?;

    let service = StoredCartService::load(FileStorage::new(dir.path())).await?;
    let handle: Arc<dyn CartService> = Arc::new(service.clone());

    handle.add_to_cart(product("apple", 75)).await?;

    assert_eq!(service.products().len(), 1);
    assert_eq!(handle.products().len(), 1);

    Ok(())
}
