// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::options::{AppOptions, ExportFormat, InputFormat, default_store_path};
use crate::error::{Error, Result};
use crate::parse::{CollegeFormatter, Formatter};
use crate::store::{MemoryStore, ScheduleStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Parse a cell table and export it.
    Parse,
    /// Parse one cell given on the command line.
    Cell { text: String, rooms: String },
    FindTeacher(String),
    Group(String),
    ListGroups,
    Stats,
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub command: Command,
    pub options: AppOptions,
    pub input: Option<PathBuf>,
    pub input_format: InputFormat,
    pub store: Option<PathBuf>,
    pub log: Option<PathBuf>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            command: Command::Parse,
            options: AppOptions::default(),
            input: None,
            input_format: InputFormat::Csv,
            store: None,
            log: None,
        }
    }
}

fn usage(msg: impl Into<String>) -> Error {
    Error::Usage(msg.into())
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| usage(format!("Missing value for {}", flag)))
}

/// Parse arguments (without the program name).
pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Params> {
    let mut params = Params::default();
    let mut rooms: Option<String> = None;
    let mut args = argv.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => params.input = Some(PathBuf::from(value(&mut args, &a)?)),
            "-o" | "--out" => params.options.export.out = Some(PathBuf::from(value(&mut args, &a)?)),
            "--in-format" => params.input_format = InputFormat::parse(&value(&mut args, &a)?)?,
            "--format" => params.options.export.format = ExportFormat::parse(&value(&mut args, &a)?)?,
            "--include-headers" => params.options.export.include_headers = true,
            "--max-weeks" => {
                let v = value(&mut args, &a)?;
                params.options.parse.max_weeks =
                    v.parse().map_err(|_| usage(format!("Invalid --max-weeks: {}", v)))?;
            }
            "--store" => params.store = Some(PathBuf::from(value(&mut args, &a)?)),
            "--log" => params.log = Some(PathBuf::from(value(&mut args, &a)?)),
            "--cell" => {
                let text = value(&mut args, &a)?;
                params.command = Command::Cell { text, rooms: s!() };
            }
            "--rooms" => rooms = Some(value(&mut args, &a)?),
            "--find-teacher" => params.command = Command::FindTeacher(value(&mut args, &a)?),
            "--group" => params.command = Command::Group(value(&mut args, &a)?),
            "--list-groups" => params.command = Command::ListGroups,
            "--stats" => params.command = Command::Stats,
            "-h" | "--help" => params.command = Command::Help,
            _ => return Err(usage(format!("Unknown arg: {}", a))),
        }
    }

    match (&mut params.command, rooms) {
        (Command::Cell { rooms, .. }, Some(r)) => *rooms = r,
        (_, Some(_)) => return Err(usage("--rooms only applies to --cell")),
        _ => {}
    }
    params.options.validate()?;
    Ok(params)
}

fn open_store(params: &Params) -> Result<(MemoryStore, PathBuf)> {
    let path = params.store.clone().unwrap_or_else(default_store_path);
    Ok((MemoryStore::load(&path)?, path))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Run one command.
pub fn execute(params: &Params) -> Result<()> {
    let formatter = CollegeFormatter::new(&params.options.parse);

    match &params.command {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
        }
        Command::Cell { text, rooms } => {
            print_json(&formatter.occurrences(text, rooms))?;
        }
        Command::Parse => {
            let rows = crate::runner::read_input(params.input.as_deref(), params.input_format)?;
            let schedules = crate::runner::run(&rows, &params.options, &formatter)?;
            if params.store.is_some() {
                let (mut store, path) = open_store(params)?;
                crate::runner::store_schedules(&mut store, &schedules);
                store.save(&path)?;
            }
        }
        Command::FindTeacher(name) => {
            let (store, _) = open_store(params)?;
            print_json(&store.find_teacher(name))?;
        }
        Command::Group(group) => {
            let (mut store, path) = open_store(params)?;
            let found = store
                .schedule(group)
                .ok_or_else(|| usage(format!("No schedule for group: {}", group)))?;
            store.bump_group_stats(group);
            store.save(&path)?;
            print_json(&found)?;
        }
        Command::ListGroups => {
            let (store, _) = open_store(params)?;
            for group in store.groups() {
                println!("{}", group);
            }
        }
        Command::Stats => {
            let (store, _) = open_store(params)?;
            for stats in store.group_stats() {
                println!("{},{}", stats.group, stats.received);
            }
        }
    }
    Ok(())
}

/// Entry point for the binary: read `std::env::args`, set up logging, run.
pub fn run() -> Result<()> {
    let params = parse_args(std::env::args().skip(1))?;
    crate::log::init(params.log.as_deref())?;
    execute(&params)
}
