use rusty_iris::app::WindowRenderer;
use rusty_iris::{run, DatasetSource, Outcome};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut stdout = std::io::stdout();
    match run(&DatasetSource::bundled(), &mut WindowRenderer, &mut stdout)? {
        Outcome::Completed => log::info!("Done"),
        Outcome::DataUnavailable => log::warn!("No dataset; analysis and charts skipped"),
    }
    Ok(())
}
