use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fixture_harness::config::HarnessConfig;
use fixture_harness::error::log_harness_error;
use fixture_harness::{options, registry, run_tests, Console, RunContext, RunOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("testrunner error: {err:?}");
            ExitCode::from(1)
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "testrunner",
    about = "Run registered test fixtures",
    disable_help_flag = true
)]
struct Cli {
    /// Fixtures to run: `TestClass` or `TestClass::TestCase`. Empty runs all.
    selectors: Vec<String>,
    /// Print one `.` per test case instead of one line.
    #[arg(short = 'q')]
    quiet: bool,
    /// Print usage and exit.
    #[arg(short = 'h', long = "help")]
    help: bool,
    /// JSON file with runner settings (falls back to $TESTRUNNER_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn execute(self) -> Result<ExitCode> {
        if self.help {
            options::print_help(&mut std::io::stdout()).context("printing help")?;
            return Ok(ExitCode::SUCCESS);
        }

        let config = match HarnessConfig::resolve(self.config.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                fixture_harness::init_logging(&HarnessConfig::default().log_filter);
                log_harness_error(&err, "config");
                return Err(err).context("loading runner configuration");
            }
        };
        fixture_harness::init_logging(&config.log_filter);

        let selectors = if self.selectors.is_empty() {
            config.selectors.clone()
        } else {
            self.selectors
        };
        let opts = RunOptions::new(exe_name())
            .with_quiet(self.quiet || config.quiet)
            .with_selectors(selectors)
            .inspect_err(|err| log_harness_error(err, "selectors"))
            .context("parsing test selectors")?;

        let mut ctx = RunContext::new(Console::stdio());
        let failures = run_tests(registry::global(), &opts, &mut ctx)
            .inspect_err(|err| log_harness_error(err, "run_tests"))
            .context("running fixtures")?;

        Ok(exit_code(failures))
    }
}

fn exe_name() -> String {
    std::env::args().next().unwrap_or_else(|| "testrunner".to_string())
}

fn exit_code(failures: usize) -> ExitCode {
    ExitCode::from(u8::try_from(failures).unwrap_or(u8::MAX))
}
