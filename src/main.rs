use anyhow::{Context, Result};
use calcpad::calculator::{Calculator, CalculatorState, Input, copy_to_clipboard};
use calcpad::config::{self, Config};
use calcpad::keypad::{CalculatorButton, parse_keys};
use calcpad::ui::{render_keypad, render_panel};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A keypad calculator for the terminal.
#[derive(Debug, Parser)]
#[command(name = "calcpad", version, about)]
struct Cli {
    /// Key sequences to press, e.g. `12 + 3 x 4 =`. Reads lines from stdin when omitted.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    keys: Vec<String>,

    /// Print the final state as JSON. In interactive mode it is printed after the session ends.
    #[arg(long)]
    json: bool,

    /// Print the keypad layout and exit.
    #[arg(long)]
    keypad: bool,

    /// Copy the final display to the clipboard, after the session ends in interactive mode.
    #[arg(long)]
    copy: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Path to the config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calcpad=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref()).context("Failed to load config")?;
    let colored = !cli.no_color && io::stdout().is_terminal();

    if cli.keypad {
        print!("{}", render_keypad(colored));
        return Ok(());
    }

    let mut calc = Calculator::with_settings(config.engine_settings());

    let interactive = cli.keys.is_empty();
    if interactive {
        run_interactive(&mut calc, colored)?;
    } else {
        for sequence in &cli.keys {
            let buttons = parse_keys(sequence)
                .with_context(|| format!("Invalid key sequence {sequence:?}"))?;
            press_all(&mut calc, &buttons);
        }
    }

    if let Some(output) = final_output(calc.state(), cli.json, interactive, colored)? {
        print!("{output}");
    }

    copy_result(&calc, &cli, &config)
}

/// Text printed once input is exhausted.
///
/// Interactive sessions already showed the panel after every line, so only
/// the JSON state is printed for them.
fn final_output(
    state: &CalculatorState,
    json: bool,
    interactive: bool,
    colored: bool,
) -> Result<Option<String>> {
    if json {
        return Ok(Some(format!("{}\n", serde_json::to_string_pretty(state)?)));
    }
    if interactive {
        return Ok(None);
    }
    Ok(Some(render_panel(state, colored)))
}

fn press_all(calc: &mut Calculator, buttons: &[CalculatorButton]) {
    calc.feed(buttons.iter().copied().map(Input::from));
}

fn copy_result(calc: &Calculator, cli: &Cli, config: &Config) -> Result<()> {
    if cli.copy {
        copy_to_clipboard(calc.display()).context("Failed to copy result")?;
    } else if config.copy_result
        && let Err(e) = copy_to_clipboard(calc.display())
    {
        tracing::warn!("Failed to copy result: {}", e);
    }
    Ok(())
}

/// Read key sequences from stdin, one per line, until EOF or `q`.
fn run_interactive(calc: &mut Calculator, colored: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render_panel(calc.state(), colored));
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }

        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        match parse_keys(line) {
            Ok(buttons) => {
                press_all(calc, &buttons);
                write!(stdout, "{}", render_panel(calc.state(), colored))?;
            }
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }

    Ok(())
}
