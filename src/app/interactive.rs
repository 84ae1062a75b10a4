use crate::app::report::{ignored_days_warning, rate_description, render_presets, render_result};
use crate::core::session::CalculatorSession;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  gems <amount>   starting gems, e.g. 1b, 500m, 1.5k
  days <count>    custom duration in days, e.g. 1.5
  preset <n>      pick a duration preset (see `presets`)
  presets         list duration presets
  calc            calculate the result
  show            show current inputs and result
  help            show this help
  quit            leave";

enum Outcome {
    Continue,
    Quit,
}

/// Runs a line-oriented calculator over `input`, writing responses to `output`.
///
/// Ends on `quit`/`exit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Gem interest calculator ({})", rate_description(session.model()))?;
    writeln!(output, "Type `help` for commands.")?;
    prompt(output)?;

    for line in input.lines() {
        let line = line?;
        match handle_line(session, line.trim(), output)? {
            Outcome::Continue => prompt(output)?,
            Outcome::Quit => break,
        }
    }

    output.flush()?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

fn handle_line<W: Write>(session: &mut CalculatorSession, line: &str, output: &mut W) -> Result<Outcome> {
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    tracing::debug!("Interactive command '{}' with argument '{}'", command, argument);

    match command.to_lowercase().as_str() {
        "" => {}
        "gems" => {
            session.set_amount_input(argument);
            match session.amount_echo() {
                Some(echo) => writeln!(output, "{}", echo)?,
                None => writeln!(output, "Enter a positive amount (e.g. 1b, 500m, 1.5k)")?,
            }
        }
        "days" => {
            let hours = session.set_custom_days(argument);
            if let Some(warning) = ignored_days_warning(argument, hours) {
                writeln!(output, "{}", warning)?;
            }
            writeln!(output, "Duration: {} hours", hours)?;
        }
        "preset" => match argument.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
            Some(index) if session.select_preset(index).is_some() => {
                let preset = &session.presets()[index];
                writeln!(output, "Duration: {} ({} hours)", preset.label, preset.hours)?;
            }
            _ => writeln!(output, "Unknown preset '{}', see `presets`", argument)?,
        },
        "presets" => writeln!(output, "{}", render_presets(session.presets(), session.duration()))?,
        "calc" => {
            session.calculate();
            let rendered = session
                .result()
                .map(|result| render_result(result, session.model()));
            match rendered {
                Some(text) => writeln!(output, "{}", text)?,
                None => writeln!(output, "Enter a positive amount and duration to calculate")?,
            }
        }
        "show" => {
            writeln!(output, "Gems input: '{}'", session.amount_input())?;
            writeln!(output, "Duration:   {} hours", session.hours())?;
            if let Some(result) = session.result() {
                writeln!(output, "{}", render_result(result, session.model()))?;
            }
        }
        "help" => writeln!(output, "{}", HELP)?,
        "quit" | "exit" => return Ok(Outcome::Quit),
        other => writeln!(output, "Unknown command '{}', type `help`", other)?,
    }

    Ok(Outcome::Continue)
}
