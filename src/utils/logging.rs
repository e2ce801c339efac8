use std::io::Write;

use env_logger::Env;

/// Sets up `env_logger` on stderr.
///
/// `RUST_LOG` wins when present; otherwise only warnings are shown, or debug
/// output with `--verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {}",
                record.level().to_string().to_lowercase(),
                record.args()
            )
        })
        .init();
}
