mod analysis;
mod command;
mod config;
mod loader;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
