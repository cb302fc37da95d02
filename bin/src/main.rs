use std::io::{stdout, Write};

use clap::Parser as _;

use interpreter::{Context, Value};
use parser::Parser;
use scanner::Scanner;

/// Parses an infix expression and prints its tree in prefix notation.
#[derive(clap::Parser)]
struct Args {
    /// The expression, e.g. "a * (b + 1)"
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Print every step of the precedence climbing
    #[arg(long)]
    debug: bool,

    /// Only print the tokens of the expression
    #[arg(long, conflicts_with_all = ["debug", "eval"])]
    tokens: bool,

    /// Evaluate the expression after parsing it
    #[arg(long)]
    eval: bool,

    /// Bind a variable for --eval, e.g. `--var x=42` or `--var ok=true`
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding, requires = "eval")]
    vars: Vec<(String, Value)>,

    /// Fail on unbound variables instead of evaluating them to nil
    #[arg(long, requires = "eval")]
    strict: bool,
}

fn parse_binding(binding: &str) -> Result<(String, Value), String> {
    let (name, value) =
        binding.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got `{binding}`"))?;

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("`{name}` is not a valid variable name"));
    }

    Ok((name.to_string(), value.parse()?))
}

fn print_tokens(expression: &str, out: &mut impl Write) -> anyhow::Result<()> {
    for token in Scanner::new(expression) {
        let token = token?;
        writeln!(out, "{:?} {:?}", token.ty(), token.lexeme())?;
    }
    Ok(())
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    if args.tokens {
        return print_tokens(&args.expression, out);
    }

    let mut parser = Parser::new(&args.expression).debug(args.debug);
    let result = parser.parse();
    for line in parser.trace() {
        writeln!(out, "{line}")?;
    }
    let expr = result?;

    writeln!(out, "{} : {}", args.expression, expr)?;

    if args.eval {
        let context = args.vars.iter().cloned().collect::<Context>().strict(args.strict);
        log::debug!("Evaluating with {:?}", context);

        let value = interpreter::evaluate(&expr, &context)?;
        writeln!(out, "= {value}")?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    run(&args, &mut stdout())
}
