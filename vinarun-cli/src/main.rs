//! vinarun binary entry point

fn main() -> anyhow::Result<()> {
    vinarun_cli::run()
}
