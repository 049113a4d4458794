//! Command-line front end playing the live demo, catalog and comparison views

use crate::catalog::comparison::{BENCHMARKS, complexity_table};
use crate::catalog::{AlgorithmId, DURATION_TABLE};
use crate::io::configuration::{
    DEFAULT_INPUT_SIZE, DEFAULT_LOG_FILTER, DEFAULT_SPEED, VERBOSE_LOG_FILTER,
};
use crate::io::error::{Result, WithOperation};
use crate::io::progress::SimulationProgress;
use crate::io::render::{
    SessionSnapshot, write_chart_rows, write_comparison, write_descriptor, write_json,
    write_metrics,
};
use crate::simulation::controller::TickOutcome;
use crate::simulation::parameters::{ParamValue, ParameterStore, clamp_input_size};
use crate::simulation::scheduler::{RealtimeScheduler, Scheduler, VirtualScheduler};
use crate::simulation::session::DemoSession;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algosim")]
#[command(
    author,
    version,
    about = "Play simulated algorithm runs and browse algorithm reference data"
)]
/// Command-line arguments for the demo tool
pub struct Cli {
    /// Log state transitions at debug level (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// View to open
    #[command(subcommand)]
    pub command: Command,
}

/// Views reachable from the command line
#[derive(Subcommand)]
pub enum Command {
    /// Play a simulated run with live readouts
    Run(RunArgs),

    /// Show the reference sheet of one algorithm, or of all of them
    Catalog {
        /// Algorithm key or slug (e.g. `aStar`, `hill-climbing`)
        algorithm: Option<AlgorithmId>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the complexity table and the benchmark rows by problem scale
    Compare {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the duration rows the live chart plots for an input size
    Chart {
        /// Upper bound on the input size of the rows shown
        #[arg(short = 'n', long, default_value_t = DEFAULT_INPUT_SIZE)]
        input_size: u32,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Settings of a simulated run
#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Algorithm key or slug
    #[arg(short, long, default_value = "aStar")]
    pub algorithm: AlgorithmId,

    /// Input size, clamped into [10, 500]
    #[arg(short = 'n', long, default_value_t = DEFAULT_INPUT_SIZE)]
    pub input_size: u32,

    /// Speed, clamped into [1, 100]; ticks arrive every 110 - speed ms
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    pub speed: u32,

    /// Parameter of the active panel, e.g. `learning-rate=0.05`
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<ParamValue>,

    /// Run on virtual time instead of the wall clock
    #[arg(long = "virtual")]
    pub virtual_time: bool,

    /// Pause once progress reaches this percent, then resume
    #[arg(long, value_name = "PERCENT")]
    pub pause_at: Option<u8>,

    /// Emit one JSON snapshot per tick instead of progress bars
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl RunArgs {
    /// Check if progress bars should be drawn
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Parameter store reflecting these settings
    ///
    /// Parameters that belong to another algorithm's panel are skipped with a
    /// warning.
    pub fn parameters(&self) -> ParameterStore {
        let mut store = ParameterStore::new();
        store.set_algorithm(self.algorithm);
        store.set_input_size(self.input_size);
        store.set_speed(self.speed);
        for &value in &self.params {
            if !store.set_param(value) {
                warn!(
                    "parameter '{}' does not apply to {}; ignored",
                    value.key(),
                    self.algorithm
                );
            }
        }
        store
    }
}

/// Install the tracing subscriber writing to stderr
///
/// `RUST_LOG` wins over `verbose` when set. Installing twice is a no-op.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed (tests, embedding callers)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Executes the selected view, writing its output to `out`
pub struct CommandRunner<W> {
    command: Command,
    out: W,
}

impl<W: Write> CommandRunner<W> {
    /// Create a runner for `command` writing to `out`
    pub const fn new(command: Command, out: W) -> Self {
        Self { command, out }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serializing output fails
    pub fn process(&mut self) -> Result<()> {
        match &self.command {
            Command::Run(args) => {
                let args = args.clone();
                let params = args.parameters();
                if args.virtual_time {
                    let session = DemoSession::with_parameters(VirtualScheduler::new(), params);
                    self.play(session, &args)
                } else {
                    let session = DemoSession::with_parameters(RealtimeScheduler::new(), params);
                    self.play(session, &args)
                }
            }
            Command::Catalog { algorithm, json } => {
                let (algorithm, json) = (*algorithm, *json);
                self.catalog(algorithm, json)
            }
            Command::Compare { json } => {
                let json = *json;
                self.compare(json)
            }
            Command::Chart { input_size, json } => {
                let (input_size, json) = (*input_size, *json);
                self.chart(input_size, json)
            }
        }
    }

    fn play<S: Scheduler>(&mut self, mut session: DemoSession<S>, args: &RunArgs) -> Result<()> {
        let mut progress = args.should_show_progress().then(SimulationProgress::new);
        let algorithm = session.parameters().algorithm();
        info!(
            algorithm = algorithm.key(),
            input_size = session.parameters().input_size(),
            speed = session.parameters().speed(),
            "starting simulated run"
        );

        if let Some(ref mut pm) = progress {
            pm.start(algorithm.display_name(), session.parameters().input_size());
        }

        let mut paused_once = false;
        session.run();
        loop {
            let Some(outcome) = session.step() else {
                if session.scheduler_mut().wait_next() {
                    continue;
                }
                break;
            };
            if outcome == TickOutcome::Stale {
                continue;
            }

            if let Some(ref pm) = progress {
                pm.update(&session.metrics());
            }
            if args.json {
                write_json(&mut self.out, &SessionSnapshot::capture(&session))?;
            }

            let reached_pause = args
                .pause_at
                .is_some_and(|at| session.state().progress_percent >= at);
            if outcome == TickOutcome::Advanced && reached_pause && !paused_once {
                paused_once = true;
                session.pause();
                if let Some(ref pm) = progress {
                    pm.pause();
                }
                if args.json {
                    write_json(&mut self.out, &SessionSnapshot::capture(&session))?;
                }
                info!(
                    progress = session.state().progress_percent,
                    "paused; resuming"
                );
                session.run();
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        if args.json {
            write_json(&mut self.out, &SessionSnapshot::capture(&session))
        } else {
            write_metrics(&mut self.out, &session.metrics())
        }
    }

    fn catalog(&mut self, algorithm: Option<AlgorithmId>, json: bool) -> Result<()> {
        let ids: Vec<AlgorithmId> =
            algorithm.map_or_else(|| AlgorithmId::ALL.to_vec(), |id| vec![id]);

        if json {
            let descriptors: Vec<_> = ids.iter().map(|id| id.descriptor()).collect();
            return write_json(&mut self.out, &descriptors);
        }

        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                writeln!(self.out).with_operation("catalog separator")?;
            }
            write_descriptor(&mut self.out, id.descriptor())?;
        }
        Ok(())
    }

    fn compare(&mut self, json: bool) -> Result<()> {
        if json {
            let table: Vec<_> = complexity_table().collect();
            write_json(&mut self.out, &table)?;
            return write_json(&mut self.out, &BENCHMARKS);
        }
        write_comparison(&mut self.out)
    }

    fn chart(&mut self, input_size: u32, json: bool) -> Result<()> {
        let rows = DURATION_TABLE.up_to(clamp_input_size(input_size));
        if json {
            return write_json(&mut self.out, &rows);
        }
        write_chart_rows(&mut self.out, rows)
    }
}
