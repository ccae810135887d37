use warp::{
    Filter,
    reply::Reply,
    filters::BoxedFilter,
    path,
};
use juniper_warp::{
    make_graphql_filter,
    graphiql_filter,
    playground_filter,
};
use crate::{
    graphql::{
        Context,
        schema,
    },
    state::State,
};

fn context_filter(state: State, strict_references: bool) -> BoxedFilter<(Context,)> {
    warp::any()
    .map(move || {
        Context::new(
            state.clone(),
            strict_references,
        )
    })
    .boxed()
}

pub fn routes(state: State, strict_references: bool) -> BoxedFilter<(impl Reply,)> {
    path("graphql").and(path::end()).and(
        make_graphql_filter(schema(), context_filter(state, strict_references))
    )
    .or(
        path("graphiql").and(path::end()).and(
            graphiql_filter("/graphql", None)
        )
    )
    .or(
        path("playground").and(path::end()).and(
            playground_filter("/graphql", None)
        )
    )
    .with(warp::log("storefront"))
    .with(
        warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["content-type"])
    )
    .boxed()
}
