use colored::Colorize;

use quicknotes::client::api::{ApiClient, DEFAULT_BASE_URL};
use quicknotes::client::repl;

#[tokio::main]
async fn main() {
    let client = ApiClient::new(DEFAULT_BASE_URL);

    if let Err(e) = repl::run(&client).await {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}
