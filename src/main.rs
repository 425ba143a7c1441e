// SPDX-License-Identifier: MPL-2.0
use iced_portfolio::app::{self, Flags};
use iced_portfolio::content::Content;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    let lang = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            log::error!("invalid --lang: {err}");
            return ExitCode::from(2);
        }
    };
    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::error!("invalid --config-dir: {err}");
            return ExitCode::from(2);
        }
    };

    let content = match Content::load() {
        Ok(content) => content,
        Err(err) => {
            log::error!("failed to load page content: {err}");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        lang,
        config_dir,
        content,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
