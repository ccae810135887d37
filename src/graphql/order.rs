use juniper::{GraphQLInputObject, ID};
use crate::{
    graphql::{
        context::Context,
        product::Product,
    },
    store::model::{self, NewOrder},
};

pub struct Order {
    id: String,
    user_id: String,
    product_ids: Vec<String>,
    total: f64,
    created_at: String,
}

impl Order {
    pub fn product_ids(&self) -> &[String] {
        &self.product_ids
    }
}

impl From<model::Order> for Order {
    fn from(order: model::Order) -> Self {
        Order {
            created_at: order.created_at_iso(),
            id: order.id,
            user_id: order.user_id,
            product_ids: order.product_ids,
            total: order.total,
        }
    }
}

#[juniper::graphql_object(context = Context, description = "An order placed by a user")]
impl Order {
    fn id(&self) -> ID {
        ID::from(self.id.clone())
    }

    fn user_id(&self) -> ID {
        ID::from(self.user_id.clone())
    }

    /// Products in this order
    fn products(&self, context: &Context) -> Vec<Product> {
        context.state().store()
            .products_by_ids(self.product_ids())
            .into_iter()
            .map(Product::from)
            .collect()
    }

    /// Total of the product prices, rounded to cents when the order was placed
    fn total(&self) -> f64 {
        self.total
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// Input for creating a new order
#[derive(GraphQLInputObject)]
pub struct CreateOrderInput {
    user_id: ID,
    product_ids: Vec<ID>,
}

impl From<CreateOrderInput> for NewOrder {
    fn from(input: CreateOrderInput) -> Self {
        NewOrder {
            user_id: input.user_id.to_string(),
            product_ids: input.product_ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}
