//! valtype - type checker for tensor type expressions
//!
//! Usage: valtype [OPTIONS] [EXPR]...
//!
//! With expressions, prints the type of each one. Without, starts a REPL.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use valtype::logging::init_tracing;
use valtype::repl::{ExecuteResult, InputResult, ReplConfig, ReplState};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = "valtype> ";
const CONTINUATION: &str = "......   ";

#[derive(Parser, Debug)]
#[command(name = "valtype", version, about = "Type checker for tensor type expressions")]
struct Cli {
    /// Type expressions to check; starts a REPL when none are given
    #[arg(value_name = "EXPR")]
    exprs: Vec<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let state = ReplState::new(ReplConfig {
        color: !cli.no_color,
    });

    if !cli.exprs.is_empty() {
        return Ok(check_all(&state, &cli.exprs));
    }

    run_repl(state)?;
    Ok(ExitCode::SUCCESS)
}

/// Check each expression; fails if any of them does.
fn check_all(state: &ReplState, exprs: &[String]) -> ExitCode {
    let mut failed = false;
    for expr in exprs {
        if !print_result(state.execute_expression(expr)) {
            failed = true;
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Print an execution result. Returns false for errors.
fn print_result(result: ExecuteResult) -> bool {
    match result {
        ExecuteResult::Output(text) => {
            println!("{}", text.trim_end());
            true
        }
        ExecuteResult::Error(text) => {
            eprintln!("{}", text.trim_end());
            false
        }
        ExecuteResult::Quit => true,
    }
}

fn run_repl(mut state: ReplState) -> Result<()> {
    println!("valtype v{} - tensor type REPL", VERSION);
    println!("Type :help for help, :quit to exit\n");

    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<(), DefaultHistory> = Editor::with_config(config)?;

    loop {
        let prompt = if state.input_buffer.is_empty() {
            PROMPT
        } else {
            CONTINUATION
        };

        match rl.readline(prompt) {
            Ok(line) => match state.process_line(&line) {
                InputResult::MetaCommand(cmd) => {
                    let result = state.execute_command(cmd);
                    if result == ExecuteResult::Quit {
                        break;
                    }
                    print_result(result);
                }
                InputResult::Expression(source) => {
                    print_result(state.execute_expression(&source));
                }
                InputResult::Incomplete | InputResult::Empty => {}
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - clear current buffer
                if !state.input_buffer.is_empty() {
                    state.clear_input();
                    println!("^C");
                } else {
                    println!("Use :quit or Ctrl-D to exit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - submit buffer or quit
                match state.force_submit() {
                    Some(source) => {
                        print_result(state.execute_expression(&source));
                    }
                    None => break,
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
