use collapsify::cli;

fn main() {
    // Run the CLI
    cli::run();
}
