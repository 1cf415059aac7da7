use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = urlmask::cli::Cli::parse();
    if let Err(e) = urlmask::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
