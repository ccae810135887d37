use chrono::{SubsecRound, Utc};
use crate::{
    error::Error,
    utils::dict::Dict,
};

pub mod model;
pub mod seed;

use model::{NewOrder, NewProduct, Order, Product, User};
use seed::SeedData;

/// Rounds to cents, halves going up (`floor(x * 100 + 0.5) / 100`).
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Next id for a collection: one past the larger of its size and its
/// highest numeric id, so seeded ids are never handed out again. Counters
/// are wider than any parsed id, so a seed cannot push them to overflow.
fn next_id<'a, I>(ids: I, count: usize) -> u128
where
    I: Iterator<Item = &'a String>,
{
    let highest = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    u128::from(highest.max(count as u64)) + 1
}

pub struct Store {
    users: Dict<String, User>,
    products: Dict<String, Product>,
    orders: Dict<String, Order>,
    next_product_id: u128,
    next_order_id: u128,
}

impl Store {
    pub fn new(seed: SeedData) -> Result<Self, Error> {
        let mut store = Store {
            users: Dict::new(),
            products: Dict::new(),
            orders: Dict::new(),
            next_product_id: 1,
            next_order_id: 1,
        };

        for user in seed.users {
            if store.users.contains_key(&user.id) {
                return Err(Error::invalid_seed(format!(r#"Duplicate user id "{}"."#, user.id)))
            }
            store.users.insert_uncheck(user.id.clone(), user);
        }

        for product in seed.products {
            if store.products.contains_key(&product.id) {
                return Err(Error::invalid_seed(format!(r#"Duplicate product id "{}"."#, product.id)))
            }
            store.products.insert_uncheck(product.id.clone(), product);
        }

        for order in seed.orders {
            if store.orders.contains_key(&order.id) {
                return Err(Error::invalid_seed(format!(r#"Duplicate order id "{}"."#, order.id)))
            }
            let total = store.total_of(&order.product_ids);
            store.orders.insert_uncheck(order.id.clone(), Order {
                id: order.id,
                user_id: order.user_id,
                product_ids: order.product_ids,
                total: total,
                created_at: order.created_at,
            });
        }

        store.next_product_id = next_id(store.products.iter().map(|p| &p.id), store.products.len());
        store.next_order_id = next_id(store.orders.iter().map(|o| &o.id), store.orders.len());
        Ok(store)
    }

    pub fn users(&self) -> Vec<User> {
        self.users.ref_values().clone()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.ref_values().clone()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.products.get(id).cloned()
    }

    /// Products whose id appears in `ids`, in store order rather than the
    /// order of `ids`. Unknown ids are skipped and repeats collapse.
    pub fn products_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| ids.iter().any(|id| id.as_ref() == product.id))
            .cloned()
            .collect()
    }

    pub fn create_product(&mut self, input: NewProduct) -> Product {
        let id = self.next_product_id.to_string();
        self.next_product_id += 1;

        let product = Product {
            id: id.clone(),
            name: input.name,
            price: input.price,
            description: input.description,
        };
        self.products.insert_uncheck(id, product).clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.ref_values().clone()
    }

    pub fn order(&self, id: &str) -> Option<Order> {
        self.orders.get(id).cloned()
    }

    pub fn orders_by_user_id(&self, user_id: &str) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Unknown user and product ids are accepted; unresolved products add
    /// nothing to the total.
    pub fn create_order(&mut self, input: NewOrder) -> Order {
        let id = self.next_order_id.to_string();
        self.next_order_id += 1;

        let order = Order {
            id: id.clone(),
            total: self.total_of(&input.product_ids),
            user_id: input.user_id,
            product_ids: input.product_ids,
            created_at: Utc::now().trunc_subsecs(3),
        };
        self.orders.insert_uncheck(id, order).clone()
    }

    fn total_of(&self, product_ids: &[String]) -> f64 {
        let sum: f64 = self.products_by_ids(product_ids).iter().map(|p| p.price).sum();
        round_cents(sum)
    }
}

#[cfg(test)]
mod test {
    use chrono::{SubsecRound, Utc};
    use super::{
        round_cents,
        Store,
        model::{NewOrder, NewProduct},
        seed::SeedData,
    };

    fn seeded() -> Store {
        Store::new(SeedData::builtin().unwrap()).unwrap()
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|id| id.to_string()).collect()
    }

    fn new_order(user_id: &str, product_ids: &[&str]) -> NewOrder {
        NewOrder {
            user_id: user_id.to_string(),
            product_ids: ids(product_ids),
        }
    }

    #[test]
    fn test_round_cents_half_up() {
        assert_eq!(round_cents(10.125), 10.13);
        assert_eq!(round_cents(-10.125), -10.12);
        assert_eq!(round_cents(999.99 + 29.99), 1029.98);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_seeded_orders_get_totals() {
        let store = seeded();
        let totals: Vec<_> = store.orders().iter().map(|o| (o.id.clone(), o.total)).collect();
        assert_eq!(totals, vec![("1".to_string(), 1029.98), ("2".to_string(), 79.99)]);
        assert_eq!(store.order("1").unwrap().created_at_iso(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_create_product_assigns_next_id() {
        let mut store = seeded();
        let product = store.create_product(NewProduct {
            name: "Monitor".to_string(),
            price: 199.5,
            description: "27in".to_string(),
        });

        assert_eq!(product.id, "4");
        assert_eq!(store.product("4"), Some(product.clone()));

        let listed = store.products();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed.iter().filter(|p| p.name == "Monitor").count(), 1);
        assert_eq!(listed.last(), Some(&product));

        let next = store.create_product(NewProduct {
            name: "Webcam".to_string(),
            price: 49.0,
            description: "1080p".to_string(),
        });
        assert_eq!(next.id, "5");
    }

    #[test]
    fn test_product_and_order_ids_are_independent() {
        let mut store = seeded();
        let order = store.create_order(new_order("2", &["3"]));
        let product = store.create_product(NewProduct {
            name: "Cable".to_string(),
            price: 5.0,
            description: "USB-C".to_string(),
        });
        assert_eq!(order.id, "3");
        assert_eq!(product.id, "4");
    }

    #[test]
    fn test_product_lookup_absent() {
        let store = seeded();
        assert_eq!(store.product("999"), None);
        assert_eq!(store.order("999"), None);
        assert_eq!(store.user("999"), None);
    }

    #[test]
    fn test_products_by_ids() {
        let store = seeded();
        let empty: Vec<String> = Vec::new();
        assert!(store.products_by_ids(&empty).is_empty());
        assert!(store.products_by_ids(&["999"]).is_empty());

        let names: Vec<_> = store
            .products_by_ids(&["3", "999", "1", "3"])
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Laptop", "Keyboard"]);
    }

    #[test]
    fn test_create_order_total() {
        let mut store = seeded();
        let before = Utc::now().trunc_subsecs(3);
        let order = store.create_order(new_order("1", &["1", "2"]));

        assert_eq!(order.id, "3");
        assert_eq!(order.total, 1029.98);
        assert_eq!(order.product_ids, ids(&["1", "2"]));
        assert!(order.created_at >= before && order.created_at <= Utc::now());
        assert_eq!(order.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(store.order("3"), Some(order));
    }

    #[test]
    fn test_create_order_ignores_unknown_products() {
        let mut store = seeded();
        let order = store.create_order(new_order("1", &["1", "2", "999"]));
        assert_eq!(order.total, 1029.98);
        assert_eq!(order.product_ids, ids(&["1", "2", "999"]));
    }

    #[test]
    fn test_create_order_permissive() {
        let mut store = seeded();
        let empty = store.create_order(new_order("1", &[]));
        assert_eq!(empty.total, 0.0);

        let dangling = store.create_order(new_order("404", &["999"]));
        assert_eq!(dangling.total, 0.0);
        assert_eq!(dangling.user_id, "404");
    }

    #[test]
    fn test_orders_by_user_id() {
        let mut store = seeded();
        store.create_order(new_order("2", &["2"]));
        store.create_order(new_order("1", &["3"]));

        let alice: Vec<_> = store.orders_by_user_id("1").into_iter().map(|o| o.id).collect();
        assert_eq!(alice, vec!["1", "2", "4"]);

        let bob: Vec<_> = store.orders_by_user_id("2").into_iter().map(|o| o.id).collect();
        assert_eq!(bob, vec!["3"]);

        for user in store.users() {
            for order in store.orders() {
                let listed = store.orders_by_user_id(&user.id).contains(&order);
                assert_eq!(listed, order.user_id == user.id);
            }
        }
    }

    #[test]
    fn test_next_ids_skip_seeded_ids() {
        let seed = SeedData::from_json(r#"{
            "products": [
                { "id": "10", "name": "A", "price": 1.0, "description": "" },
                { "id": "sku-x", "name": "B", "price": 2.0, "description": "" }
            ]
        }"#).unwrap();
        let mut store = Store::new(seed).unwrap();
        let product = store.create_product(NewProduct {
            name: "C".to_string(),
            price: 3.0,
            description: String::new(),
        });
        assert_eq!(product.id, "11");

        let order = store.create_order(new_order("1", &["10", "sku-x"]));
        assert_eq!(order.id, "1");
        assert_eq!(order.total, 3.0);
    }

    #[test]
    fn test_largest_seeded_id_does_not_overflow() {
        let seed = SeedData::from_json(r#"{
            "products": [
                { "id": "18446744073709551615", "name": "A", "price": 1.0, "description": "" }
            ]
        }"#).unwrap();
        let mut store = Store::new(seed).unwrap();

        let first = store.create_product(NewProduct {
            name: "B".to_string(),
            price: 1.0,
            description: String::new(),
        });
        let second = store.create_product(NewProduct {
            name: "C".to_string(),
            price: 1.0,
            description: String::new(),
        });
        assert_eq!(first.id, "18446744073709551616");
        assert_eq!(second.id, "18446744073709551617");
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_duplicate_seed_id_is_rejected() {
        let seed = SeedData::from_json(r#"{
            "users": [
                { "id": "1", "name": "A", "email": "a@example.com" },
                { "id": "1", "name": "B", "email": "b@example.com" }
            ]
        }"#).unwrap();
        assert!(Store::new(seed).is_err());
    }
}
