// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
Usage: iced_gallery [OPTIONS]

Options:
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --base-url <URL>        Gallery service address
  --config-dir <DIR>      Directory holding settings.toml
  --download-dir <DIR>    Directory downloads are saved to
  -h, --help              Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        base_url: opt_value(&mut args, "--base-url"),
        config_dir: opt_value(&mut args, "--config-dir"),
        download_dir: opt_value(&mut args, "--download-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone(), flags.download_dir.clone());
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
