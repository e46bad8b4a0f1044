// Artifact review CLI: list, diff, approve, and reject snapshot artifacts.
// Usage: verisnap <pending|diff|approve|reject> [args]

fn main() {
    verisnap::cli::run();
}
