use std::process::ExitCode;

use gl_axes::{
    app,
    config::WindowConfig,
    logging::{self, LoggingConfig},
};

fn main() -> ExitCode {
    logging::init_logging(LoggingConfig::default());

    match app::run(WindowConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            log::error!("{:#}", anyhow::Error::new(err));
            ExitCode::from(code)
        }
    }
}
