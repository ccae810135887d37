use juniper::{GraphQLInputObject, ID};
use crate::{
    graphql::context::Context,
    store::model::{self, NewProduct},
};

pub struct Product {
    id: String,
    name: String,
    price: f64,
    description: String,
}

impl From<model::Product> for Product {
    fn from(product: model::Product) -> Self {
        Product {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

#[juniper::graphql_object(context = Context, description = "A product in the store")]
impl Product {
    fn id(&self) -> ID {
        ID::from(self.id.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Input for creating a new product
#[derive(GraphQLInputObject)]
pub struct CreateProductInput {
    name: String,
    price: f64,
    description: String,
}

impl From<CreateProductInput> for NewProduct {
    fn from(input: CreateProductInput) -> Self {
        NewProduct {
            name: input.name,
            price: input.price,
            description: input.description,
        }
    }
}
