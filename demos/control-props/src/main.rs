mod app;

use clap::Parser;

use app::{App, Event};

/// Replays a sequence of clicks against two controlled toggles sharing one
/// value and one uncontrolled toggle, printing the state after each.
#[derive(Parser, Debug)]
struct Cli {
    /// Starting value for every toggle.
    #[arg(long)]
    initial_on: bool,
    /// Shared toggles ignore clicks once this many have been counted.
    #[arg(long, default_value_t = 4)]
    click_limit: u32,
    #[arg(value_enum)]
    events: Vec<Event>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut app = App::new(cli.initial_on, cli.click_limit);
    println!("start       {}", app.status_line());
    for event in cli.events {
        app.handle(event)?;
        println!("{:<11} {}", format!("{event:?}"), app.status_line());
    }
    Ok(())
}
