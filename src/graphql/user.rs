use juniper::ID;
use crate::{
    graphql::{
        context::Context,
        order::Order,
    },
    store::model,
};

pub struct User {
    id: String,
    name: String,
    email: String,
}

impl From<model::User> for User {
    fn from(user: model::User) -> Self {
        User {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[juniper::graphql_object(context = Context, description = "A user of the store")]
impl User {
    fn id(&self) -> ID {
        ID::from(self.id.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    /// Orders placed by this user
    fn orders(&self, context: &Context) -> Vec<Order> {
        context.state().store()
            .orders_by_user_id(&self.id)
            .into_iter()
            .map(Order::from)
            .collect()
    }
}
