mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::new().run()
}
