use clap::Parser;
use climate_node::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        println!("{}", err.label());
        println!("{}", err);
        std::process::exit(1);
    }
}
