mod app;

fn main() {
    // Per-file diagnostics share stdout with the progress messages.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    if let Err(err) = app::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
