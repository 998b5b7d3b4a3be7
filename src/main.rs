use clap::Parser;
use tracing_subscriber::EnvFilter;

use treesh::shell::Shell;

#[derive(Parser)]
#[command(name = "treesh")]
#[command(about = "An interactive shell over an in-memory filesystem tree")]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with shell output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut shell = Shell::new();
    if let Err(e) = shell.run() {
        eprintln!("Error: cannot read input: {}", e);
        std::process::exit(1);
    }
}
