mod command;
mod error;

use command::Command;
use env_logger::Env;
use error::report_rejection;
use log::debug;
use plotty_compute::numerical::value::Value;
use plotty_function::{sampling::linspace, EngineOptions, FunctionSlot};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}, ops::ControlFlow};

const HELP: &str = "\
<expr>, :set <expr>     set the function, such as `a*sin(k*x) + c`
:preset <name>          set the function to a preset
:presets                list the presets
:d                      differentiate the function
:i                      integrate the function
:params                 list the parameters and their values
:param <name> <value>   set a parameter
:eval <x>               evaluate the function at x
:sample [count]         sample the function over the plot range
:title                  print the plot title
:help                   print this message
:quit                   exit";

/// Prints the active function and its parameters.
fn print_function(slot: &FunctionSlot) {
    println!("f({}) = {}", slot.function().primary(), slot.function());
    print_params(slot);
}

/// Prints the parameters of the active function and their values.
fn print_params(slot: &FunctionSlot) {
    for (name, value) in slot.named_params() {
        println!("  {} = {}", name, value);
    }
}

/// Samples the active function and prints a summary of the values.
fn print_samples(slot: &FunctionSlot, count: usize) {
    let (start, end) = slot.options().sample_range;
    let xs = linspace(start, end, count);
    let ys = match slot.sample(&xs) {
        Ok(ys) => ys,
        Err(err) => {
            eprintln!("error: {}", err);
            return;
        },
    };

    let finite = ys.iter().copied().filter(|y| y.is_finite()).collect::<Vec<_>>();
    println!("{} samples on [{}, {}]", ys.len(), start, end);
    if let (Some(min), Some(max)) = (
        finite.iter().copied().reduce(f64::min),
        finite.iter().copied().reduce(f64::max),
    ) {
        println!("  min = {}, max = {}", min, max);
    }
    if finite.len() < ys.len() {
        println!("  undefined at {} points", ys.len() - finite.len());
    }
}

/// Runs a single line of input against the slot. Returns [`ControlFlow::Break`] if the user asked
/// to quit.
fn run_line(slot: &mut FunctionSlot, line: &str) -> ControlFlow<()> {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {}", err);
            return ControlFlow::Continue(());
        },
    };
    debug!("running {:?}", command);

    match command {
        Command::Set(source) => match slot.set_function(source) {
            Ok(()) => print_function(slot),
            Err(rejection) => report_rejection(&rejection, source),
        },
        Command::Preset(name) => match slot.set_preset(name) {
            Ok(()) => print_function(slot),
            Err(rejection) => report_rejection(&rejection, name),
        },
        Command::Presets => {
            for (name, source) in slot.presets() {
                println!("{:<12}{}", name, source);
            }
        },
        Command::Differentiate => match slot.differentiate() {
            Ok(()) => print_function(slot),
            Err(rejection) => report_rejection(&rejection, &slot.function().function_name()),
        },
        Command::Antidifferentiate => match slot.antidifferentiate() {
            Ok(()) => print_function(slot),
            Err(rejection) => report_rejection(&rejection, &slot.function().function_name()),
        },
        Command::Params => print_params(slot),
        Command::Param(name, value) => match slot.set_parameter(name, value) {
            Ok(()) => print_params(slot),
            Err(rejection) => report_rejection(&rejection, name),
        },
        Command::Eval(x) => match slot.function().call(x, slot.params()) {
            Ok(Value::Scalar(y)) => println!("{}", y),
            Ok(value) => println!("{:?}", value),
            Err(err) => eprintln!("error: {}", err),
        },
        Command::Sample(count) => print_samples(slot, count.unwrap_or(slot.options().sample_count)),
        Command::Title => println!("{}", slot.title()),
        Command::Help => println!("{}", HELP),
        Command::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}

/// Runs each non-empty line of the input as a command.
fn run_script(slot: &mut FunctionSlot, input: &str) {
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        if run_line(slot, line).is_break() {
            break;
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut slot = match FunctionSlot::new(EngineOptions::default()) {
        Ok(slot) => slot,
        Err(err) => {
            eprintln!("error: {}", err);
            return;
        },
    };

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run commands from a file
        let mut input = String::new();
        let read = File::open(&filename)
            .and_then(|file| BufReader::new(file).read_to_string(&mut input));
        if let Err(err) = read {
            eprintln!("error: could not read `{}`: {}", filename, err);
            return;
        }

        run_script(&mut slot, &input);
    } else if !io::stdin().is_terminal() {
        // read commands from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("error: could not read stdin: {}", err);
            return;
        }

        run_script(&mut slot, &input);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("error: {}", err);
                return;
            },
        };
        print_function(&slot);

        fn process_line(rl: &mut DefaultEditor, slot: &mut FunctionSlot) -> Result<ControlFlow<()>, ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(ControlFlow::Continue(()));
            }

            rl.add_history_entry(&input)?;

            Ok(run_line(slot, &input))
        }

        loop {
            match process_line(&mut rl, &mut slot) {
                Ok(ControlFlow::Continue(())) => (),
                Ok(ControlFlow::Break(())) => break,
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
    }
}
