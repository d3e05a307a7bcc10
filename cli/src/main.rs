use clap::Parser;

fn main() {
    cli::run(cli::Args::parse());
}
