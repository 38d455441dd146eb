mod config;
mod err;
mod facade;
mod sketch;

use clap::Parser;

fn main() {
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> err::Result<()> {
    env_logger::try_init()?;

    let config = config::Config::from(config::Arguments::parse());
    log::debug!("{:?}", config);

    let sketch = sketch::Sketch::new(&config);

    pollster::block_on(
        facade::run(config, sketch)
    )
}
