//! Order creation workflow: reference backfill and product registration

mod common;

use common::{get_random_string, snapshot, test_state};
use trade_server::db::models::{OrderCreate, OrderType, OrderUpdate, ProductCreate};
use trade_server::db::repository::{
    OrderRepository, ProductRepository, RepoError, Repository,
};

fn order_with_products(products: Vec<trade_server::db::models::ProductSnapshot>) -> OrderCreate {
    OrderCreate {
        order_type: OrderType::Sell,
        references: None,
        products: Some(products),
        organisation_id: 1,
    }
}

#[tokio::test]
async fn create_registers_products_in_catalog() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());
    let products = ProductRepository::new(state.db.clone());

    let first = snapshot(&get_random_string(8), "gala", "crate");
    let second = snapshot(&get_random_string(8), "fuji", "box");

    let (order, product_ids) = repo
        .create_new_order(order_with_products(vec![first.clone(), second.clone()]))
        .await
        .unwrap();

    assert_eq!(order.products, vec![first.clone(), second.clone()]);
    assert_eq!(product_ids.len(), 2);

    let registered = products.get(product_ids[0]).await.unwrap().unwrap();
    assert_eq!(registered.category, first.category);
    assert_eq!(registered.variety, "gala");
    assert_eq!(registered.packaging, "crate");
}

#[tokio::test]
async fn create_without_products_registers_nothing() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let (order, product_ids) = repo
        .create_new_order(OrderCreate {
            order_type: OrderType::Buy,
            references: None,
            products: None,
            organisation_id: 1,
        })
        .await
        .unwrap();

    assert!(order.products.is_empty());
    assert!(product_ids.is_empty());
}

#[tokio::test]
async fn reference_backfills_missing_products() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let inherited = snapshot(&get_random_string(8), "gala", "crate");
    let (original, original_ids) = repo
        .create_new_order(order_with_products(vec![inherited.clone()]))
        .await
        .unwrap();
    assert_eq!(original_ids.len(), 1);

    let (follow_up, product_ids) = repo
        .create_new_order(OrderCreate {
            order_type: OrderType::Buy,
            references: Some(original.id),
            products: None,
            organisation_id: 2,
        })
        .await
        .unwrap();

    // Products come from the referenced order; they already live in the
    // catalog so no new registrations happen
    assert_eq!(follow_up.products, vec![inherited]);
    assert!(product_ids.is_empty());
    assert_eq!(follow_up.references, Some(original.id));
    assert_eq!(follow_up.order_type, OrderType::Buy);
    assert_eq!(follow_up.organisation_id, 2);
}

#[tokio::test]
async fn explicit_products_win_over_reference() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let (original, _) = repo
        .create_new_order(order_with_products(vec![snapshot(
            &get_random_string(8),
            "gala",
            "crate",
        )]))
        .await
        .unwrap();

    let own = snapshot(&get_random_string(8), "fuji", "box");
    let (follow_up, product_ids) = repo
        .create_new_order(OrderCreate {
            order_type: OrderType::Buy,
            references: Some(original.id),
            products: Some(vec![own.clone()]),
            organisation_id: 2,
        })
        .await
        .unwrap();

    assert_eq!(follow_up.products, vec![own]);
    assert_eq!(product_ids.len(), 1);
}

#[tokio::test]
async fn dangling_reference_is_kept_but_ignored() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let own = snapshot(&get_random_string(8), "gala", "crate");
    let (order, product_ids) = repo
        .create_new_order(OrderCreate {
            order_type: OrderType::Sell,
            references: Some(424242),
            products: Some(vec![own.clone()]),
            organisation_id: 1,
        })
        .await
        .unwrap();

    assert_eq!(order.references, Some(424242));
    assert_eq!(order.products, vec![own]);
    assert_eq!(product_ids.len(), 1);
}

#[tokio::test]
async fn registration_stops_at_first_duplicate() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());
    let products = ProductRepository::new(state.db.clone());

    let clashing = snapshot(&get_random_string(8), "gala", "crate");
    products
        .create(ProductCreate {
            category: clashing.category.clone(),
            variety: clashing.variety.clone(),
            packaging: clashing.packaging.clone(),
        })
        .await
        .unwrap();

    let fresh = snapshot(&get_random_string(8), "fuji", "box");
    let never_reached = snapshot(&get_random_string(8), "kanzi", "bag");

    let result = repo
        .create_new_order(order_with_products(vec![
            fresh.clone(),
            clashing,
            never_reached.clone(),
        ]))
        .await;
    assert!(matches!(result, Err(RepoError::Duplicate(_))));

    // The order itself and the registrations before the clash remain
    let orders = repo.get_multi(0, 10).await.unwrap();
    assert_eq!(orders.len(), 1);

    let catalog = products.get_multi(0, 10).await.unwrap();
    assert!(catalog.iter().any(|p| p.category == fresh.category));
    assert!(!catalog.iter().any(|p| p.category == never_reached.category));
}

#[tokio::test]
async fn order_update_merges_fields() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let kept = snapshot(&get_random_string(8), "gala", "crate");
    let (order, _) = repo
        .create_new_order(order_with_products(vec![kept.clone()]))
        .await
        .unwrap();

    let updated = repo
        .update(
            order.id,
            OrderUpdate {
                order_type: Some(OrderType::Buy),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.order_type, OrderType::Buy);
    assert_eq!(updated.products, vec![kept]);
    assert_eq!(updated.organisation_id, order.organisation_id);
}

#[tokio::test]
async fn order_remove_returns_decoded_products() {
    let (state, _dir) = test_state().await;
    let repo = OrderRepository::new(state.db.clone());

    let kept = snapshot(&get_random_string(8), "gala", "crate");
    let (order, _) = repo
        .create_new_order(order_with_products(vec![kept.clone()]))
        .await
        .unwrap();

    let removed = repo.remove(order.id).await.unwrap();
    assert_eq!(removed.products, vec![kept]);
    assert!(repo.get(order.id).await.unwrap().is_none());
}
