use std::io::{self, Read};

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};
use reckon::report::render_snippet;
use reckon::{analyze_expression, analyze_postfix, convert_to_postfix, EvaluationReport};
use reckon_parser::{EvalError, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "reckon",
    version,
    about = "Evaluate arithmetic expressions with precisely located errors",
    long_about = "reckon evaluates arithmetic expressions built from + - * / ^, parentheses\n\
        and floating-point literals, using either recursive descent or the\n\
        shunting-yard algorithm followed by postfix evaluation.\n\n\
        EXAMPLES:\n\
        \n  reckon eval '3+4*2'                   Evaluate with recursive descent\n\
        \n  reckon eval --strategy sy '2^3^2'     Evaluate via shunting-yard + RPN\n\
        \n  reckon eval --all '5 - 2 - 1'         Compare both strategies\n\
        \n  reckon rpn '3 2 - 1 +'                Evaluate a postfix expression\n\
        \n  reckon postfix '(3+4)*2'              Show the postfix conversion\n\
        \n  echo '1 + ( 2 - 3 )' | reckon eval    Read the expression from stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Text, global = true)]
    format: OutputMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an infix expression
    Eval(EvalArgs),
    /// Evaluate a postfix (RPN) expression
    Rpn(InputArgs),
    /// Print the shunting-yard conversion of an infix expression
    Postfix(InputArgs),
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// The expression (reads from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expression: Option<String>,
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Evaluation strategy: recursive-descent (rd) or shunting-yard (sy)
    #[arg(short, long, default_value_t = Strategy::RecursiveDescent, conflicts_with = "all")]
    strategy: Strategy,

    /// Evaluate with every strategy and print each result
    #[arg(long)]
    all: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG still wins when set
    builder.parse_default_env();
    let _ = builder.try_init();
}

fn read_expression(input: &InputArgs) -> io::Result<String> {
    match &input.expression {
        Some(expression) => Ok(expression.clone()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

/// Print one report as text; errors go to stderr as a located snippet
fn emit_text(report: &EvaluationReport, caption: &str) {
    match (&report.display, &report.error) {
        (Some(display), _) => {
            let prefix = if caption.is_empty() {
                String::new()
            } else {
                format!("{caption} ")
            };
            println!("{prefix}{display}");
        }
        (None, Some(error)) => {
            let err = EvalError::new(
                error.kind,
                error.message.clone(),
                error.offset.map(reckon_parser::Position::Offset),
            );
            eprintln!("{}", render_snippet(&report.expression, &err, caption));
        }
        (None, None) => {}
    }
}

/// One JSON document for a run: a single object, or an array when every
/// strategy was evaluated
fn reports_to_json(reports: &[EvaluationReport], as_array: bool) -> serde_json::Result<String> {
    match reports {
        [report] if !as_array => serde_json::to_string_pretty(report),
        _ => serde_json::to_string_pretty(reports),
    }
}

fn emit(reports: &[EvaluationReport], captions: &[&str], mode: OutputMode, as_array: bool) -> i32 {
    match mode {
        OutputMode::Text => {
            for (report, caption) in reports.iter().zip(captions) {
                emit_text(report, caption);
            }
        }
        OutputMode::Json => match reports_to_json(reports, as_array) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        },
    }
    if reports.iter().all(EvaluationReport::is_ok) {
        0
    } else {
        1
    }
}

fn run_eval(args: &EvalArgs, mode: OutputMode) -> i32 {
    let source = match read_expression(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let strategies: Vec<Strategy> = if args.all {
        Strategy::ALL.to_vec()
    } else {
        vec![args.strategy]
    };

    let mut reports = Vec::with_capacity(strategies.len());
    let mut captions = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        debug!("evaluating {source:?} with {strategy}");
        reports.push(analyze_expression(&source, strategy));
        captions.push(if args.all { strategy.caption() } else { "" });
    }
    emit(&reports, &captions, mode, args.all)
}

fn run_rpn(args: &InputArgs, mode: OutputMode) -> i32 {
    let source = match read_expression(args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    emit(&[analyze_postfix(&source)], &[""], mode, false)
}

fn run_postfix(args: &InputArgs) -> i32 {
    let source = match read_expression(args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    match convert_to_postfix(&source) {
        Ok(postfix) => {
            println!("{postfix}");
            0
        }
        Err(err) => {
            eprintln!("{}", render_snippet(&source, &err, "Postfix:"));
            1
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Eval(args) => run_eval(args, cli.format),
        Command::Rpn(args) => run_rpn(args, cli.format),
        Command::Postfix(args) => run_postfix(args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
