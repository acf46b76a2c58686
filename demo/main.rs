//! Interactive A* visualizer in the terminal.
//!
//! Run: cargo run --bin gridstar
//!
//! Logs go to stderr; set `RUST_LOG=debug` and redirect stderr to a file to
//! see per-search details without garbling the board.

use gridstar_demo::{DemoConfig, Flow, TermDriver, Visualizer};

fn run(vis: &mut Visualizer, driver: &mut TermDriver) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        vis.tick()?;
        driver.draw(vis)?;
        for input in driver.poll()? {
            if vis.update(input) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("gridstar started");

    let config = DemoConfig::default();
    let mut vis = Visualizer::new(&config);
    let mut driver = TermDriver::new(&config);

    driver.init()?;
    let result = run(&mut vis, &mut driver);
    driver.close();

    match &result {
        Ok(()) => log::info!("exiting cleanly"),
        Err(e) => log::error!("exiting on error: {e}"),
    }
    result
}
