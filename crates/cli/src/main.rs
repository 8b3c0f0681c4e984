use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    hirerank_cli::run()
}
