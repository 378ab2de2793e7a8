use clap::{Args, Parser, Subcommand, ValueEnum};

use outcome::arith::{checked_add, checked_multiply, ArithError};
use outcome::{propagate, success, Failure, Result, Success};

#[derive(Parser, Debug)]
#[command(
    name = "outcome",
    about = "Checked arithmetic on tagged-union results",
    version
)]
pub struct Cli {
    /// Print the return trace of an inspected failure
    #[arg(long, global = true, default_value_t = false)]
    trace: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in demonstration (the default)
    Demo,
    /// Add two integers, failing on overflow or underflow
    Add(Operands),
    /// Multiply two integers by repeated addition
    Multiply(Operands),
}

#[derive(Args, Debug)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    a: i32,

    #[arg(allow_negative_numbers = true)]
    b: i32,

    /// How to take the result apart
    #[arg(long, value_enum, default_value_t = Extract::Inspect)]
    extract: Extract,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Extract {
    /// Match on the result and print either branch
    Inspect,
    /// Expect a success; a failure terminates the process
    Unwrap,
    /// Expect a failure; a success terminates the process
    UnwrapError,
    /// Propagate a failure out of `main`
    Propagate,
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Multiply,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Multiply => "*",
        }
    }

    fn apply(self, a: i32, b: i32) -> Result<i32, ArithError> {
        match self {
            Op::Add => checked_add(a, b),
            Op::Multiply => checked_multiply(a, b),
        }
    }
}

fn print_equation(op: Op, a: i32, b: i32, c: i32) {
    eprintln!("{} {} {} = {}", a, op.symbol(), b, c);
}

fn demo() -> Result<(), ArithError> {
    let (a, b) = (34, 35);
    let c = checked_add(a, b).unwrap();
    print_equation(Op::Add, a, b, c);

    let (a, b) = (42, 10);
    let c = checked_multiply(a, b).unwrap();
    print_equation(Op::Multiply, a, b, c);

    let (a, b) = (42, i32::MAX);
    let err = checked_add(a, b).unwrap_error();
    eprintln!("Error: {}", err);

    let err = checked_multiply(a, b).unwrap_error();
    eprintln!("Error: {}", err);

    success(())
}

fn run(op: Op, operands: Operands, show_trace: bool) -> Result<(), ArithError> {
    let Operands { a, b, extract } = operands;

    let result = op.apply(a, b);
    tracing::info!(a, b, op = op.symbol(), ok = result.is_success(), "computed");

    match extract {
        Extract::Inspect => match result {
            Success(c) => print_equation(op, a, b, c),
            Failure(err) => {
                eprintln!("Error: {}", err);
                if show_trace {
                    eprintln!("Return trace: {}", err.stack());
                }
            }
        },
        Extract::Unwrap => print_equation(op, a, b, result.unwrap()),
        Extract::UnwrapError => eprintln!("Error: {}", result.unwrap_error()),
        Extract::Propagate => print_equation(op, a, b, propagate!(result)),
    }

    success(())
}

fn main() -> Result<(), ArithError> {
    let args = Cli::parse();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match args.command {
        None | Some(Command::Demo) => demo(),
        Some(Command::Add(operands)) => run(Op::Add, operands, args.trace),
        Some(Command::Multiply(operands)) => run(Op::Multiply, operands, args.trace),
    }
}
