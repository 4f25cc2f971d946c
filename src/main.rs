mod runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("lofty", log::LevelFilter::Warn)
        .init();

    runtime::run()
}
