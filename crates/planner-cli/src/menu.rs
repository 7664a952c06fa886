//! The interactive planner menu.
//!
//! Holds the application state (the current planner and an optional backup),
//! parses one selection per loop iteration, and dispatches it. Command errors
//! are printed and the loop continues; only terminal I/O failures end it.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info};

use planner_core::{Course, CourseError, ErrorKind, Planner, PlannerError, filter, table};

use crate::console::Console;

const MENU: &str = "\
(A) Add Course
(G) Get Course
(R) Remove Course
(P) Print Courses in Planner
(F) Filter by Department Code
(L) Look For Course
(S) Size
(B) Backup
(PB) Print Courses in Backup
(RB) Revert to Backup
(Q) Quit
";

// -----------------------------------------------------------------------
// Application state
// -----------------------------------------------------------------------

/// The menu's mutable state: the working planner and a single backup slot.
#[derive(Debug)]
pub struct App {
    pub current: Planner,
    pub backup: Option<Planner>,
    pub running: bool,
}

impl App {
    pub fn new(planner: Planner) -> Self {
        Self {
            current: planner,
            backup: None,
            running: true,
        }
    }
}

// -----------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Get,
    Remove,
    Print,
    Filter,
    Lookup,
    Size,
    Backup,
    PrintBackup,
    RevertBackup,
    Quit,
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "A",
            Self::Get => "G",
            Self::Remove => "R",
            Self::Print => "P",
            Self::Filter => "F",
            Self::Lookup => "L",
            Self::Size => "S",
            Self::Backup => "B",
            Self::PrintBackup => "PB",
            Self::RevertBackup => "RB",
            Self::Quit => "Q",
        };
        f.write_str(s)
    }
}

/// Selections are matched case-insensitively after trimming.
impl FromStr for MenuCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::Add),
            "G" => Ok(Self::Get),
            "R" => Ok(Self::Remove),
            "P" => Ok(Self::Print),
            "F" => Ok(Self::Filter),
            "L" => Ok(Self::Lookup),
            "S" => Ok(Self::Size),
            "B" => Ok(Self::Backup),
            "PB" => Ok(Self::PrintBackup),
            "RB" => Ok(Self::RevertBackup),
            "Q" => Ok(Self::Quit),
            other => Err(CommandError::UnknownCommand(other.to_owned())),
        }
    }
}

/// Errors that abort a single menu command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("Invalid input. Please enter an integer.")]
    InputFormat(String),

    #[error("Invalid position {0}: positions start at 1.")]
    NegativePosition(i64),

    #[error("Please enter only the listed choices.")]
    UnknownCommand(String),

    #[error("Invalid input. Please enter text as UTF-8.")]
    InvalidEncoding,

    #[error("input closed before the command finished")]
    InputClosed,

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    /// The user-facing error category, if this is a recoverable command error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Course(e) => Some(e.kind()),
            Self::Planner(e) => Some(e.kind()),
            Self::InputFormat(_) | Self::InvalidEncoding => Some(ErrorKind::InputFormat),
            Self::NegativePosition(_) => Some(ErrorKind::OutOfRange),
            Self::UnknownCommand(_) | Self::InputClosed | Self::Io(_) => None,
        }
    }
}

// -----------------------------------------------------------------------
// Loop
// -----------------------------------------------------------------------

/// Run the menu until the user quits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    info!(capacity = app.current.capacity(), "planner session started");

    while app.running {
        writeln!(console.output, "{MENU}")?;
        write!(console.output, "Enter a selection: ")?;
        console.output.flush()?;

        let line = match console.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("end of input, leaving menu");
                break;
            }
            Err(CommandError::Io(e)) => return Err(e.into()),
            Err(e) => {
                debug!(kind = ?e.kind(), error = %e, "unreadable selection");
                writeln!(console.output, "{e}")?;
                writeln!(console.output)?;
                continue;
            }
        };

        match line.parse::<MenuCommand>() {
            Ok(command) => match dispatch(app, console, command) {
                Ok(()) => {}
                Err(CommandError::Io(e)) => return Err(e.into()),
                Err(CommandError::InputClosed) => {
                    debug!(%command, "end of input mid-command, leaving menu");
                    break;
                }
                Err(e) => {
                    debug!(%command, kind = ?e.kind(), error = %e, "command failed");
                    writeln!(console.output, "{e}")?;
                }
            },
            Err(e) => writeln!(console.output, "{e}")?,
        }
        writeln!(console.output)?;
    }

    console.output.flush()?;
    Ok(())
}

/// Execute one command against the application state.
pub fn dispatch<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
    command: MenuCommand,
) -> Result<(), CommandError> {
    match command {
        MenuCommand::Add => cmd_add(app, console),
        MenuCommand::Get => cmd_get(app, console),
        MenuCommand::Remove => cmd_remove(app, console),
        MenuCommand::Print => {
            writeln!(console.output, "{}", app.current)?;
            Ok(())
        }
        MenuCommand::Filter => {
            let department = console.prompt("Enter department: ")?;
            writeln!(console.output, "{}", filter(&app.current, &department))?;
            Ok(())
        }
        MenuCommand::Lookup => cmd_lookup(app, console),
        MenuCommand::Size => {
            writeln!(
                console.output,
                "There are {} courses in the planner.",
                app.current.size()
            )?;
            Ok(())
        }
        MenuCommand::Backup => {
            app.backup = Some(app.current.make_copy());
            writeln!(console.output, "Created a backup of the current planner.")?;
            Ok(())
        }
        MenuCommand::PrintBackup => {
            match &app.backup {
                Some(backup) => writeln!(console.output, "{backup}")?,
                None => writeln!(console.output, "No record of backup.")?,
            }
            Ok(())
        }
        MenuCommand::RevertBackup => cmd_revert(app, console),
        MenuCommand::Quit => {
            writeln!(console.output, "Program terminating successfully...")?;
            app.running = false;
            Ok(())
        }
    }
}

// -----------------------------------------------------------------------
// Handlers
// -----------------------------------------------------------------------

/// Prompt for the five course fields, validating each numeric field as soon
/// as it is entered.
fn read_course<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Course, CommandError> {
    let mut course = Course::default();
    course.set_name(console.prompt("Enter course name: ")?);
    course.set_department(console.prompt("Enter department: ")?);
    course.set_code(console.prompt_int("Enter course code: ")?)?;
    course.set_section(console.prompt_int("Enter course section: ")?)?;
    course.set_instructor(console.prompt("Enter instructor: ")?);
    Ok(course)
}

fn cmd_add<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> Result<(), CommandError> {
    let course = read_course(console)?;
    let position = console.prompt_position()?;
    app.current.add_course(course, position)?;

    let added = app.current.get_course(position)?;
    writeln!(console.output, "{added} successfully added to planner.")?;
    Ok(())
}

fn cmd_get<R: BufRead, W: Write>(
    app: &App,
    console: &mut Console<R, W>,
) -> Result<(), CommandError> {
    let position = console.prompt_position()?;
    let course = app.current.get_course(position)?;
    writeln!(console.output, "{}", table::single(position, course))?;
    Ok(())
}

fn cmd_remove<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> Result<(), CommandError> {
    let position = console.prompt_position()?;
    let removed = app.current.remove_course(position)?;
    writeln!(
        console.output,
        "{removed} has been successfully removed from the planner."
    )?;
    Ok(())
}

fn cmd_lookup<R: BufRead, W: Write>(
    app: &App,
    console: &mut Console<R, W>,
) -> Result<(), CommandError> {
    let course = read_course(console)?;
    match app.current.position_of(&course) {
        Some(position) => writeln!(
            console.output,
            "{course} is found in the planner at position {position}"
        )?,
        None => writeln!(console.output, "Course not found.")?,
    }
    Ok(())
}

/// Replace the current planner with a copy of the backup, leaving the backup
/// itself untouched for later reverts.
fn cmd_revert<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> Result<(), CommandError> {
    match &app.backup {
        Some(backup) => {
            app.current = backup.make_copy();
            writeln!(
                console.output,
                "Planner successfully reverted to the backup copy."
            )?;
        }
        None => writeln!(
            console.output,
            "No record of backup.......Planner unmodified."
        )?,
    }
    Ok(())
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
