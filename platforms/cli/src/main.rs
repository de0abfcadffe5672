use anyhow::{bail, Context, Result};
use clap::Parser;
use lazytur::{CharMachine, Halt, ProgramManager, Step};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
#[clap(after_help = "EXAMPLES:
  lazytur-cli --list
  lazytur-cli -p \"binary inverter\" -i 1011001
  lazytur-cli -p \"palindrome checker\" -i abab --debug")]
struct Cli {
    /// Name of the built-in program to run (case-insensitive)
    #[clap(short, long, required_unless_present = "list")]
    program: Option<String>,

    /// The input placed on the tape from position 0 (defaults to the program's sample input)
    #[clap(short, long)]
    input: Option<String>,

    /// Step budget for the run
    #[clap(short, long)]
    max_steps: Option<usize>,

    /// Print each step of the execution
    #[clap(short = 'd', long)]
    debug: bool,

    /// Number of tape cells to print around the visited region
    #[clap(short, long, default_value_t = 2)]
    window: usize,

    /// Print the final report as JSON
    #[clap(long)]
    json: bool,

    /// List the built-in programs and exit
    #[clap(short, long)]
    list: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        for name in ProgramManager::list_program_names() {
            let program = ProgramManager::get_program_by_name(name)?;
            println!("{:<20} {}", program.name, program.description);
        }
        return Ok(());
    }

    let Some(name) = cli.program.as_deref() else {
        bail!("no program given");
    };
    let program = ProgramManager::get_program_by_name(name)
        .context("try --list to see the available programs")?;

    let input = cli.input.as_deref().unwrap_or(program.default_input);
    let mut machine = program.build(input);
    if let Some(max_steps) = cli.max_steps {
        machine.set_max_steps(max_steps);
    }

    info!(program = program.name, input, "starting run");

    let halt = if cli.debug {
        print_state(&machine, cli.window)?;
        loop {
            match machine.step() {
                Step::Continue => print_state(&machine, cli.window)?,
                Step::Halt(halt) => break halt,
            }
        }
    } else {
        machine.run()
    };

    match &halt {
        Halt::Accepted => println!("\nAccepted in state {}.", machine.state()),
        Halt::Rejected => println!(
            "\nRejected: no rule for state {} and symbol {:?}.",
            machine.state(),
            machine.read_symbol()
        ),
        Halt::Timeout => println!("\nStopped after {} steps.", machine.step_count()),
        Halt::Error(error) => println!("\nMachine error: {}", error),
    }

    println!("{}", tape_window(&machine, cli.window)?);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&machine.report())?);
    } else {
        let stats = machine.statistics();
        println!(
            "Steps: {}/{}, time: {:?}, tape cells generated: {}, written: {}",
            stats.step_count(),
            stats.max_steps(),
            stats.elapsed(),
            machine.tape().materialized_count(),
            machine.tape().overlay_len()
        );
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the visited part of the tape plus `window` cells on each side, with the head
/// marked by brackets.
fn tape_window(machine: &CharMachine, window: usize) -> Result<String> {
    let stats = machine.head().stats();
    let pad = i64::try_from(window).context("window is too large")?;
    let start = stats.min_position.saturating_sub(pad);
    let end = stats.max_position.saturating_add(pad);
    let length = usize::try_from(i128::from(end) - i128::from(start) + 1)
        .context("tape window is too large")?;

    let cells = machine.tape_segment(start, length)?;
    let head = machine.head_position();

    Ok(cells
        .iter()
        .zip(start..)
        .map(|(symbol, position)| {
            if position == head {
                format!("[{}]", symbol)
            } else {
                format!(" {} ", symbol)
            }
        })
        .collect())
}

fn print_state(machine: &CharMachine, window: usize) -> Result<()> {
    println!(
        "Step: {:>5}, State: {:<12} Head: {:>4} |{}|",
        machine.step_count(),
        machine.state(),
        machine.head_position(),
        tape_window(machine, window)?
    );
    Ok(())
}
