mod actions;
mod client;
mod types;
use actions::{action_get, action_post, action_users};
use anyhow::Result;
use seahorse::{App, Command};
use std::env;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage("call-me [post|get|users]")
        .action(action_post)
        .command(
            Command::new("post")
                .description("POST /api/v1/connected with the user in the body")
                .usage("call-me post")
                .action(action_post),
        )
        .command(
            Command::new("get")
                .description("GET /api/v1/connected with the user in the query")
                .usage("call-me get")
                .action(action_get),
        )
        .command(
            Command::new("users")
                .description("GET /api/v1/users")
                .usage("call-me users")
                .action(action_users),
        );
    app.run(args);
    Ok(())
}
