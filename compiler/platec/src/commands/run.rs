//! The `run` and `step` commands.

use plate_diagnostic::emitter::ColorMode;
use plate_eval::{RunOutcome, Stepper, World};

use super::{compile_or_exit, read_file, report, EXIT_ERROR, EXIT_STEP_LIMIT};

/// Environment variable holding the default step budget.
pub const MAX_STEPS_ENV: &str = "PLATE_MAX_STEPS";

/// Step budget when neither `--max-steps` nor `PLATE_MAX_STEPS` is given.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Options shared by `run` and `step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many steps (`--max-steps=<n>`).
    pub max_steps: Option<u64>,
    /// Print the world after every step (`step` only; off with `--quiet`).
    pub show_steps: bool,
    /// Diagnostic colors (`--color=auto|always|never`).
    pub color: ColorMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_steps: None,
            show_steps: true,
            color: ColorMode::Auto,
        }
    }
}

impl RunOptions {
    /// Defaults, with the step budget taken from `PLATE_MAX_STEPS` if set.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_STEPS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mut options = RunOptions::default();
        if let Some(value) = value {
            match value.trim().parse() {
                Ok(n) => options.max_steps = Some(n),
                Err(_) => eprintln!("warning: ignoring {MAX_STEPS_ENV}='{value}', expected a number"),
            }
        }
        options
    }

    /// Merge options from `other`; values set in `other` win.
    pub fn merge(&mut self, other: &Self) {
        if other.max_steps.is_some() {
            self.max_steps = other.max_steps;
        }
        if other.color != ColorMode::Auto {
            self.color = other.color;
        }
        // Quiet wins.
        self.show_steps &= other.show_steps;
    }

    /// The budget to run with.
    pub fn step_limit(&self) -> u64 {
        self.max_steps.unwrap_or(DEFAULT_MAX_STEPS)
    }
}

/// Parse `run`/`step` flags. Unknown flags are warned about and skipped.
pub fn parse_run_options(args: &[String]) -> RunOptions {
    let mut options = RunOptions::default();

    for arg in args {
        if let Some(n) = arg.strip_prefix("--max-steps=") {
            if let Ok(n) = n.parse() {
                options.max_steps = Some(n);
            } else {
                eprintln!("warning: invalid step budget '{n}', expected a number");
            }
        } else if arg == "--quiet" || arg == "-q" {
            options.show_steps = false;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            if let Some(mode) = ColorMode::from_flag(mode) {
                options.color = mode;
            } else {
                eprintln!("warning: unknown color mode '{mode}', options: auto, always, never");
            }
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// Load a level, reporting and exiting on failure.
fn load_level_or_exit(path: &str, color: ColorMode) -> World {
    let text = read_file(path);
    match crate::load_level(&text) {
        Ok(world) => world,
        Err(e) => {
            report(&e.to_diagnostic(), path, None, color);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Run a program against a level and print the final world.
pub fn run_file(program_path: &str, level_path: &str, options: &RunOptions) {
    let source = read_file(program_path);
    let program = compile_or_exit(program_path, &source, options.color);
    let mut world = load_level_or_exit(level_path, options.color);

    let limit = options.step_limit();
    let result = plate_eval::run_to_end(&mut world, &program, Some(limit));

    println!("{world}");
    match result {
        Ok(summary) => {
            println!("steps: {}", summary.steps);
            if summary.outcome == RunOutcome::StepLimit {
                eprintln!("error: stopped after {limit} steps (raise with --max-steps=<n>)");
                std::process::exit(EXIT_STEP_LIMIT);
            }
        }
        Err(e) => {
            report(&e.to_diagnostic(), program_path, None, options.color);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Run a program one step at a time, printing every step.
pub fn step_file(program_path: &str, level_path: &str, options: &RunOptions) {
    let source = read_file(program_path);
    let program = compile_or_exit(program_path, &source, options.color);
    let mut world = load_level_or_exit(level_path, options.color);
    let limit = options.step_limit();

    println!("{world}");
    let mut stepper = Stepper::new(&mut world, &program);
    while stepper.steps_taken() < limit || stepper.is_finished() {
        let Some(step) = stepper.next() else {
            println!("finished after {} steps", stepper.steps_taken());
            return;
        };
        match step {
            Ok(step) => {
                println!("{}: {step}", stepper.steps_taken());
                if options.show_steps {
                    println!("{}", stepper.world());
                    println!();
                }
            }
            Err(e) => {
                report(&e.to_diagnostic(), program_path, None, options.color);
                std::process::exit(EXIT_ERROR);
            }
        }
    }

    println!("{}", stepper.world());
    eprintln!("error: stopped after {limit} steps (raise with --max-steps=<n>)");
    std::process::exit(EXIT_STEP_LIMIT);
}
