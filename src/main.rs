use ui_smoke::config::Config;
use ui_smoke::{runner, suite};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = Config::from_env()?;

    let reports = runner::run_all(suite::TESTS, &config);
    let (passed, failed, errored) = runner::summarize(&reports);
    println!("{} passed, {} failed, {} errored", passed, failed, errored);

    Ok(())
}
