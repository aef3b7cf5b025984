mod app;
mod filter;
mod serial;
mod shutdown;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )
    .ok();

    let code = match app::run(std::env::args()) {
        Ok(signum) => signum,
        Err(e) => {
            match &e {
                app::Error::Usage { .. } => println!("{}", e),
                _ => log::error!("{}", e),
            }
            e.exit_code()
        }
    };
    std::process::exit(code);
}
