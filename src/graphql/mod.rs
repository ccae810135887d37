use juniper::{
    EmptySubscription,
    RootNode,
    ID,
};
use crate::{
    error::Error,
    store::model::{NewOrder, NewProduct},
};

mod context;
mod order;
mod product;
mod user;

pub use context::Context;
use order::{CreateOrderInput, Order};
use product::{CreateProductInput, Product};
use user::User;

pub struct QueryRoot;

#[juniper::graphql_object(name = "Query", context = Context)]
impl QueryRoot {
    /// Get all users
    fn users(context: &Context) -> Vec<User> {
        context.state().store().users().into_iter().map(User::from).collect()
    }

    /// Get a user by ID
    fn user(context: &Context, id: ID) -> Option<User> {
        context.state().store().user(&id).map(User::from)
    }

    /// Get all orders
    fn orders(context: &Context) -> Vec<Order> {
        context.state().store().orders().into_iter().map(Order::from).collect()
    }

    /// Get an order by ID
    fn order(context: &Context, id: ID) -> Option<Order> {
        context.state().store().order(&id).map(Order::from)
    }

    /// Get all products
    fn products(context: &Context) -> Vec<Product> {
        context.state().store().products().into_iter().map(Product::from).collect()
    }

    /// Get a product by ID
    fn product(context: &Context, id: ID) -> Option<Product> {
        context.state().store().product(&id).map(Product::from)
    }
}

pub struct MutationRoot;

#[juniper::graphql_object(name = "Mutation", context = Context)]
impl MutationRoot {
    /// Create a new product
    fn create_product(context: &Context, input: CreateProductInput) -> Product {
        let product = context.state().store_mut().create_product(NewProduct::from(input));
        info!("Created product {} ({}).", product.id, product.name);
        product.into()
    }

    /// Create a new order
    fn create_order(context: &Context, input: CreateOrderInput) -> Result<Order, Error> {
        let input = NewOrder::from(input);
        let mut store = context.state().store_mut();

        if context.strict_references() {
            if store.user(&input.user_id).is_none() {
                return Err(Error::invalid_reference("User", &input.user_id))
            }
            if let Some(id) = input.product_ids.iter().find(|id| store.product(id).is_none()) {
                return Err(Error::invalid_reference("Product", id))
            }
        }

        let order = store.create_order(input);
        info!("Created order {} for user {} (total {}).", order.id, order.user_id, order.total);
        Ok(order.into())
    }
}

pub type Schema = RootNode<'static, QueryRoot, MutationRoot, EmptySubscription<Context>>;

pub fn schema() -> Schema {
    Schema::new(QueryRoot, MutationRoot, EmptySubscription::new())
}
