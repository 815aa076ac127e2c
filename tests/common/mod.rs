#![allow(dead_code)]
use boxscript::mach::{run, Event, Memory, Runtime, DEFAULT_CYCLE_LIMIT, SLICE};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, SLICE)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
        }
    }
    s
}

pub fn program(name: &str) -> String {
    let path = format!("{}/tests/programs/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path, e))
}

pub fn output(source: &str) -> String {
    run(source, &mut Memory::default(), DEFAULT_CYCLE_LIMIT)
}
