use anyhow::Context;
use exprparse::parse_expression;
use log::{LevelFilter, Log, Metadata, Record};

const INPUT: &str = "(price + tax) * quantity >= budget - 2 ** 3 ** 2 % 7";

/// Environment variable holding the log level (`off`, `error` .. `trace`).
const LOG_ENV: &str = "EXPRPARSE_LOG";

/// Writes every enabled record to stderr as `[LEVEL target] message`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Unset or unrecognised values fall back to `warn`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn init_logging() -> anyhow::Result<()> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    log::set_logger(&LOGGER).map_err(|err| anyhow::anyhow!("cannot install logger: {err}"))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let source = std::env::args().nth(1).unwrap_or_else(|| INPUT.to_string());

    let expression =
        parse_expression(&source).with_context(|| format!("failed to parse `{source}`"))?;

    println!("{expression}");
    println!("{expression:#?}");

    let variables = expression.variables();
    if !variables.is_empty() {
        println!("variables: {}", variables.join(", "));
    }

    Ok(())
}
