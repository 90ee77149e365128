//! REPL (Read-Eval-Print Loop) for type expressions
//!
//! The state only tracks multi-line input; every complete input is checked
//! independently.

use tracing::debug;

use crate::lexer::bracket_depth;
use crate::parser::parse_type_expr;
use crate::pretty::describe;

pub const HELP: &str = "\
Enter a type expression to see its type:

  tensor(x[3],y{})               type literal (also: double, error)
  join(A, B)                     combine cell by cell
  concat(A, B, dim)              concatenate along dim
  reduce(A, dim, ...)            remove dimensions (none: all)
  rename(A, (a, b), (c, d))      rename a to c and b to d
  either(A, B)                   common type of two branches

Commands:
  :help             Show this help
  :inspect <expr>   Describe the type of <expr> in detail
  :quit             Exit
";

/// Shell settings
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Colored diagnostics
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// REPL state
#[derive(Default)]
pub struct ReplState {
    pub config: ReplConfig,

    /// Multi-line input buffer
    pub input_buffer: String,

    /// Bracket depth for multi-line detection
    pub bracket_depth: i32,
}

/// Result of feeding one line to the REPL
#[derive(Debug, PartialEq, Eq)]
pub enum InputResult {
    MetaCommand(MetaCommand),
    Expression(String),
    Incomplete,
    Empty,
}

/// Meta-commands supported by the REPL
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
    Inspect(String),
    Unknown(String),
}

impl MetaCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim_start_matches(':').trim();
        let (cmd, arg) = match input.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (input, ""),
        };

        match cmd {
            "help" | "h" | "?" => MetaCommand::Help,
            "quit" | "q" | "exit" => MetaCommand::Quit,
            "inspect" | "i" => {
                if arg.is_empty() {
                    MetaCommand::Unknown(":inspect requires an expression".to_string())
                } else {
                    MetaCommand::Inspect(arg.to_string())
                }
            }
            other => MetaCommand::Unknown(format!("Unknown command ':{}'", other)),
        }
    }
}

/// Output of evaluating one input
#[derive(Debug, PartialEq, Eq)]
pub enum ExecuteResult {
    /// Text to print
    Output(String),
    /// Diagnostic to print on stderr
    Error(String),
    Quit,
}

impl ReplState {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            config,
            input_buffer: String::new(),
            bracket_depth: 0,
        }
    }

    /// Feed one line of input
    pub fn process_line(&mut self, line: &str) -> InputResult {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if self.input_buffer.is_empty() {
                return InputResult::Empty;
            }
            return InputResult::Incomplete;
        }

        // Meta-command (only at start, not in continuation)
        if trimmed.starts_with(':') && self.input_buffer.is_empty() {
            return InputResult::MetaCommand(MetaCommand::parse(trimmed));
        }

        if !self.input_buffer.is_empty() {
            self.input_buffer.push('\n');
        }
        self.input_buffer.push_str(line);
        self.bracket_depth += bracket_depth(line);

        if self.bracket_depth <= 0 {
            self.bracket_depth = 0;
            InputResult::Expression(std::mem::take(&mut self.input_buffer))
        } else {
            InputResult::Incomplete
        }
    }

    /// Force submit current buffer (for Ctrl-D)
    pub fn force_submit(&mut self) -> Option<String> {
        if self.input_buffer.is_empty() {
            None
        } else {
            self.bracket_depth = 0;
            Some(std::mem::take(&mut self.input_buffer))
        }
    }

    /// Drop buffered input (for Ctrl-C)
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.bracket_depth = 0;
    }

    /// Type-check an expression and print its type
    pub fn execute_expression(&self, source: &str) -> ExecuteResult {
        debug!(source, "checking expression");
        let expr = match parse_type_expr(source) {
            Ok(expr) => expr,
            Err(err) => return ExecuteResult::Error(err.report(source, self.config.color)),
        };
        match expr.check() {
            Ok(ty) => ExecuteResult::Output(ty.to_spec()),
            Err(err) => ExecuteResult::Error(format!("Type error: {}", err)),
        }
    }

    pub fn execute_command(&self, cmd: MetaCommand) -> ExecuteResult {
        debug!(?cmd, "meta command");
        match cmd {
            MetaCommand::Help => ExecuteResult::Output(HELP.to_string()),
            MetaCommand::Quit => ExecuteResult::Quit,
            MetaCommand::Unknown(msg) => ExecuteResult::Error(msg),
            MetaCommand::Inspect(source) => match parse_type_expr(&source) {
                Ok(expr) => {
                    let mut out = describe(&expr.infer());
                    if let Err(err) = expr.check() {
                        out.push_str(&format!("  reason: {}\n", err));
                    }
                    ExecuteResult::Output(out)
                }
                Err(err) => ExecuteResult::Error(err.report(&source, self.config.color)),
            },
        }
    }
}
