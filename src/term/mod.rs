extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{self, glyph, Error, Script};
use crate::mach::{Event, Memory, Runtime, SLICE};
use crate::error;
use ansi_term::Style;
use linefeed::{Command, Function, Interface, Prompter, ReadResult, Terminal};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

mod highlight;
pub use highlight::highlight;

const HELP: &str = "\
Rows you enter are added to the program. Letters, digits and symbols
type glyphs: q│ a┃ z║ w─ s━ x═ e┌ r┐ t└ y┘ d┏ f┓ g┗ h┛ c╔ v╗ b╚ n╝
1├ 2┤ 3┞ 4┦ 5┟ 6┧ 7┣ 8┫ 9┡ 0┩ -┢ =┪ _╠ +╣ (▄ )▀ [◇ ]◈
u▔ i░ o▒ p▓ j▚ k▞ l▕ ;▏ {▭ }▯
:run    run the program
:list   show the program
:clear  forget the program and reset memory
:mem    show memory
:help   show this help
";

/// What the command line asked for.
#[derive(Debug, Default)]
pub struct Options {
    pub file: Option<String>,
    pub memory: Memory,
    pub cycle_limit: usize,
    pub list: bool,
    pub strict: bool,
}

pub fn main(options: Options) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let result = match &options.file {
        Some(filename) => run_file(filename, &options, interrupted),
        None => main_loop(&options, interrupted),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}

fn run_file(filename: &str, options: &Options, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let source = match load(filename) {
        Ok(source) => source,
        Err(error) => return writeln!(out, "{}", error),
    };
    if options.list {
        return write!(out, "{}", highlight(&source));
    }
    let script = match prepare(&source, options.strict) {
        Ok(script) => script,
        Err(errors) => {
            for error in errors.iter() {
                writeln!(out, "{}", error)?;
            }
            return Ok(());
        }
    };
    let mut runtime = Runtime::new(options.memory.clone()).with_cycle_limit(options.cycle_limit);
    runtime.enter(script);
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(SLICE) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                out.write_all(s.as_bytes())?;
                out.flush()?;
            }
        }
    }
    Ok(())
}

/// Build the program, refusing lines that fail their check when `strict`.
fn prepare(source: &str, strict: bool) -> Result<Script, Vec<Error>> {
    let script = lang::script(source).map_err(|error| vec![error])?;
    if strict {
        let errors = script.check();
        if !errors.is_empty() {
            return Err(errors);
        }
    }
    Ok(script)
}

fn main_loop(options: &Options, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("BoxScript")?;
    interface.set_prompt("> ")?;
    GlyphFunction::install(&interface);
    let mut program = String::new();
    let mut memory = options.memory.clone();
    interface.write_fmt(format_args!(
        "BoxScript {}\nType :help for help.\n",
        env!("CARGO_PKG_VERSION")
    ))?;

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let command = string.trim().to_string();
        match command.as_str() {
            ":run" => {
                let output = run_program(&program, &mut memory, options, &interrupted);
                match output {
                    Ok(s) => interface.write_fmt(format_args!("{}", s))?,
                    Err(errors) => {
                        for error in errors.iter() {
                            interface.write_fmt(format_args!(
                                "{}\n",
                                Style::new().bold().paint(error.to_string())
                            ))?;
                        }
                    }
                }
            }
            ":list" => interface.write_fmt(format_args!("{}", highlight(&program)))?,
            ":clear" => {
                program.clear();
                memory = options.memory.clone();
            }
            ":mem" => interface.write_fmt(format_args!("{}", memory))?,
            ":help" => interface.write_fmt(format_args!("{}", HELP))?,
            cmd if cmd.starts_with(':') => interface.write_fmt(format_args!(
                "{}\n",
                Style::new()
                    .bold()
                    .paint(format!("Unknown command {}", cmd))
            ))?,
            _ => {
                program.push_str(&string);
                program.push('\n');
                interface.add_history_unique(string);
            }
        }
    }
    Ok(())
}

fn run_program(
    program: &str,
    memory: &mut Memory,
    options: &Options,
    interrupted: &AtomicBool,
) -> Result<String, Vec<Error>> {
    let script = prepare(program, options.strict)?;
    let mut runtime = Runtime::new(std::mem::take(memory)).with_cycle_limit(options.cycle_limit);
    runtime.enter(script);
    interrupted.store(false, Ordering::SeqCst);
    let mut s = String::new();
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(SLICE) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
        }
    }
    if let Some(error) = runtime.halted() {
        debug!("program stopped: {}", error);
    }
    *memory = runtime.into_memory();
    Ok(s)
}

/// Types glyphs for the plain keys of the layout. Commands, which
/// start with `:`, are typed as they are.
struct GlyphFunction;

impl GlyphFunction {
    fn install<T: Terminal>(i: &Interface<T>) {
        i.define_function("glyph-function", Arc::new(GlyphFunction));
        for key in glyph::keys() {
            i.bind_sequence(key.to_string(), Command::from_str("glyph-function"));
        }
    }
}

impl<Term: Terminal> Function<Term> for GlyphFunction {
    fn execute(&self, prompter: &mut Prompter<Term>, count: i32, ch: char) -> std::io::Result<()> {
        if prompter.buffer().starts_with(':') {
            return prompter.insert(count as usize, ch);
        }
        prompter.insert(count as usize, glyph::from_key(ch).unwrap_or(ch))
    }
}

fn load(filename: &str) -> Result<String, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    let mut source = String::new();
    if let Err(error) = file.read_to_string(&mut source) {
        return Err(error!(InternalError; error.to_string().as_str()));
    }
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_load_missing_file() {
        let error = load("/nonexistent/program.bs").unwrap_err();
        assert!(error.is(ErrorCode::FileNotFound));
    }

    #[test]
    fn test_prepare_strict() {
        let source = "┌──────┐\n│▀◈▀◈▀ │\n└──────┘\n";
        assert!(prepare(source, false).is_ok());
        let errors = prepare(source, true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is(ErrorCode::TooManyAssignments));
    }

    #[test]
    fn test_run_program_keeps_memory() {
        let options = Options {
            cycle_limit: 1000,
            ..Options::default()
        };
        let mut memory = Memory::default();
        let interrupted = AtomicBool::new(false);
        let program = "┌──────────┐\n│▀▀◈▀▀▄▄   │\n└──────────┘\n";
        assert_eq!(
            run_program(program, &mut memory, &options, &interrupted),
            Ok("\n".to_string())
        );
        assert_eq!(memory.fetch(1), 4);
    }
}
