#[macro_use]
extern crate log;

mod argument;
mod error;
mod graphql;
mod route;
mod state;
mod store;
mod utils;

use argument::parse_arguments;
use error::Error;
use state::State;
use store::{Store, seed::SeedData};

fn load_store(seed: Option<&std::path::Path>) -> Result<Store, Error> {
    let seed_data = match seed {
        Some(path) => {
            info!("Loading seed data from {}.", path.display());
            SeedData::from_file(path)?
        }
        None => SeedData::builtin()?,
    };
    Store::new(seed_data)
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_arguments();

    if config.print_schema {
        println!("{}", graphql::schema().as_sdl());
        return;
    }

    let store = match load_store(config.seed.as_deref()) {
        Ok(store) => store,
        Err(err) => {
            error!("Failed to load seed data: {}", err);
            std::process::exit(1);
        }
    };
    let state = State::init(store);

    if config.strict_references {
        info!("Orders referencing unknown users or products will be rejected.");
    }
    info!("Serving GraphQL at http://{}/graphql", config.addr());

    warp::serve(route::routes(state, config.strict_references))
    .run(config.addr())
    .await;
}
