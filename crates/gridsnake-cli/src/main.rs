mod command;
mod input;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
