use anyhow::{Context, Result};
use arithmetic_evaluator::interpreter::error::ExpressionError;
use arithmetic_evaluator::interpreter::evaluator::evaluate_postfix;
use arithmetic_evaluator::interpreter::{to_postfix, tokens_to_string};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Evaluates an arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Read from standard input when left out
    expression: Option<String>,

    /// Also print the expression in postfix notation
    #[clap(long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<ExitCode> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression(&mut io::stdin().lock(), &mut output)?,
    };

    match run(&expression, args.postfix, &mut output) {
        Ok(value) => {
            writeln!(output, "Result: {}", value).context("Failed to print the result")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if let Some(expression_error) = error.downcast_ref::<ExpressionError>() {
                debug!("Evaluation failed with {}", expression_error.kind());
            }
            eprintln!("Error: {}", error);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(expression: &str, show_postfix: bool, output: &mut impl Write) -> Result<f64> {
    let postfix_tokens = to_postfix(expression)?;
    if show_postfix {
        writeln!(output, "Postfix: {}", tokens_to_string(&postfix_tokens))
            .context("Failed to print the postfix expression")?;
    }
    evaluate_postfix(postfix_tokens)
}

fn read_expression(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "Enter an expression: ").context("Failed to show the prompt")?;
    output.flush().context("Failed to show the prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read an expression from standard input")?;
    info!("Read {} bytes from standard input", line.len());
    Ok(line.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_well_formed() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn expression_is_optional() {
        let args = Arguments::try_parse_from(["arithmetic-evaluator"]).unwrap();
        assert_eq!(args.expression, None);
        assert!(!args.postfix);
    }

    #[test]
    fn expression_and_postfix_flag_are_parsed() {
        let args =
            Arguments::try_parse_from(["arithmetic-evaluator", "--postfix", "1 + 2"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("1 + 2"));
        assert!(args.postfix);
    }

    #[test]
    fn run_evaluates_expression() {
        let mut output = Vec::<u8>::new();

        assert_eq!(run("12+3*(4-1)", false, &mut output).unwrap(), 21.0);
        assert!(output.is_empty());
    }

    #[test]
    fn run_prints_postfix_form_when_asked() {
        let mut output = Vec::<u8>::new();

        let value = run("12+3*(4-1)", true, &mut output).unwrap();

        assert_eq!(value, 21.0);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Postfix: 12 3 4 1 - * +\n"
        )
    }

    #[test]
    fn run_prints_nothing_when_conversion_fails() {
        let mut output = Vec::<u8>::new();

        run("(1+2", true, &mut output).expect_err("Should return Err");

        assert!(output.is_empty());
    }

    #[test]
    fn read_expression_shows_prompt_and_strips_newline() {
        let mut input = "2 ^ 3\n".as_bytes();
        let mut output = Vec::<u8>::new();

        let expression = read_expression(&mut input, &mut output).unwrap();

        assert_eq!(expression, "2 ^ 3");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter an expression: ");
    }

    #[test]
    fn read_expression_accepts_empty_input() {
        let mut input = "".as_bytes();
        let mut output = Vec::<u8>::new();

        assert_eq!(read_expression(&mut input, &mut output).unwrap(), "");
    }

    #[test]
    fn run_keeps_error_kind() {
        let error = run("10/0", false, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ExpressionError>(),
            Some(&ExpressionError::DivisionByZero)
        )
    }
}
