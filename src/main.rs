use std::process::ExitCode;

use othello_engine::protocol;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    {
        use std::io::Write;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
            .write_style(env_logger::WriteStyle::Never)
            .target(env_logger::Target::Stderr)
            .init();
    }

    // stdout carries protocol replies only; logs go to stderr
    match protocol::run_stdio() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("io error: {e}");
            ExitCode::FAILURE
        }
    }
}
