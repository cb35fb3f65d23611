use log::{error, info};
use pds_store::calculator;
use pds_store::{PostQuery, Store, StoreResult, UserUpdate};
use serde::Serialize;
use simplelog::*;

macro_rules! log_json {
    ($label:expr, $value:expr) => {
        match serde_json::to_string(&$value) {
            Ok(json) => info!("{}: {}", $label, json),
            Err(e) => error!("Failed to serialize {}: {:?}", $label, e),
        }
    };
}

fn walkthrough(store: &mut Store) -> StoreResult<()> {
    let user = store.create_user("Al", "a@b.com", "password1")?;
    log_json!("created user", user);

    let post = store.create_post(user.id, "Hi", "World", vec!["intro".to_string()])?;
    log_json!("created post", post);
    log_json!("liked post", store.like_post(post.id));

    log_json!("search", store.search_posts("wor", None)?);
    log_json!("stats", store.get_user_stats(user.id)?);

    let update = UserUpdate {
        is_active: Some(false),
        ..UserUpdate::default()
    };
    log_json!("updated user", store.update_user(user.id, update));

    info!("deleted user: {}", store.delete_user(user.id));
    log_json!("posts after delete", store.get_user_posts(user.id, &PostQuery::default()));
    Ok(())
}

#[derive(Serialize)]
struct Arithmetic {
    sum: f64,
    product: f64,
    quotient: f64,
}

fn main() {
    if let Err(e) = TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("Failed to initialize logger: {e}");
    }

    match calculator::divide(7.0, 2.0) {
        Ok(quotient) => log_json!(
            "arithmetic",
            Arithmetic {
                sum: calculator::add(7.0, 2.0),
                product: calculator::multiply(7.0, 2.0),
                quotient,
            }
        ),
        Err(e) => error!("Arithmetic failed: {}", e),
    }
    if let Err(e) = calculator::divide(1.0, 0.0) {
        info!("divide(1, 0) failed as expected: {}", e);
    }

    let mut store = Store::new();
    if let Err(e) = walkthrough(&mut store) {
        error!("Walkthrough failed: {}", e);
        std::process::exit(1);
    }
}
