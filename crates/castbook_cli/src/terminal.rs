//! Line-driven terminal form.
//!
//! # Responsibility
//! - Show the record list and the four form buffers.
//! - Map typed commands onto controller actions and print dialogs.
//!
//! # Invariants
//! - A failed action never ends the session; only `quit` or end of input does.
//! - List line numbers shown to the user are 1-based.

use castbook_core::labels;
use castbook_core::{
    line_kind, CastRepository, FormController, FormFields, LineKind, Notice, NoticeKind,
};
use console::style;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  list                 redraw the list and the form
  select <line>        bind the form to the record shown on <line>
  store <text>         set the store field
  name <text>          set the name field
  age <text>           set the age field
  note <text>          set the memo field
  add | update | delete | clear
  help | quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Select(usize),
    SetStore(String),
    SetName(String),
    SetAge(String),
    SetNote(String),
    Add,
    Update,
    Delete,
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self, String>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim().to_string();

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "show" => Ok(Self::List),
            "select" => parse_line_number(&rest).map(Self::Select),
            "store" => Ok(Self::SetStore(rest)),
            "name" => Ok(Self::SetName(rest)),
            "age" => Ok(Self::SetAge(rest)),
            "note" | "memo" => Ok(Self::SetNote(rest)),
            "add" => Ok(Self::Add),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command `{other}`; type `help`")),
        };
        Some(command)
    }
}

fn parse_line_number(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(format!("`select` needs a line number from the list, got `{text}`")),
    }
}

/// Runs the form until `quit` or end of input.
///
/// # Errors
/// - Only I/O failures on `input` / `out` end the session with an error.
pub fn run_session<R: CastRepository>(
    controller: &mut FormController<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut fields = FormFields::default();
    writeln!(out, "{}", style(labels::WINDOW_TITLE).bold())?;
    draw(controller, &fields, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };
        let command = match Command::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(message)) => {
                writeln!(out, "{}", style(message).red())?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::List => {
                if let Err(err) = controller.refresh() {
                    show_notice(out, &err.notice())?;
                }
                draw(controller, &fields, out)?;
            }
            Command::Select(line_index) => {
                if !controller.select_line(line_index, &mut fields) {
                    writeln!(out, "no record on line {}", line_index + 1)?;
                }
                draw(controller, &fields, out)?;
            }
            Command::SetStore(text) => fields.store_name = text,
            Command::SetName(text) => fields.person_name = text,
            Command::SetAge(text) => fields.age_text = text,
            Command::SetNote(text) => fields.note = text,
            Command::Add => {
                if let Err(err) = controller.add(&mut fields) {
                    show_notice(out, &err.notice())?;
                }
                draw(controller, &fields, out)?;
            }
            Command::Update => {
                if let Err(err) = controller.update(&fields) {
                    show_notice(out, &err.notice())?;
                }
                draw(controller, &fields, out)?;
            }
            Command::Delete => {
                let mut prompt_error = None;
                let result = controller.delete(&mut fields, &mut |notice: &Notice| {
                    match ask(input, out, notice) {
                        Ok(answer) => answer,
                        Err(err) => {
                            prompt_error = Some(err);
                            false
                        }
                    }
                });
                if let Some(err) = prompt_error {
                    return Err(err);
                }
                if let Err(err) = result {
                    show_notice(out, &err.notice())?;
                }
                draw(controller, &fields, out)?;
            }
            Command::Clear => {
                controller.clear(&mut fields);
                draw(controller, &fields, out)?;
            }
        }
    }

    Ok(())
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Blocking yes/no question. End of input counts as "no".
fn ask(input: &mut impl BufRead, out: &mut impl Write, notice: &Notice) -> io::Result<bool> {
    write!(
        out,
        "{} {} [y/N] ",
        style(format!("{}:", notice.title)).yellow().bold(),
        notice.message
    )?;
    out.flush()?;

    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn show_notice(out: &mut impl Write, notice: &Notice) -> io::Result<()> {
    let title = format!("[{}]", notice.title);
    let title = match notice.kind {
        NoticeKind::Info => style(title).cyan(),
        NoticeKind::Warning | NoticeKind::Question => style(title).yellow(),
        NoticeKind::Error => style(title).red().bold(),
    };
    writeln!(out, "{title} {}", notice.message)
}

fn draw<R: CastRepository>(
    controller: &FormController<R>,
    fields: &FormFields,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(labels::LIST_HEADING).underlined())?;

    let selected = controller.selected_line();
    for (index, text) in controller.lines().iter().enumerate() {
        let in_selection = selected
            .is_some_and(|first| (first..first + castbook_core::LINES_PER_RECORD).contains(&index));
        let marker = if in_selection { '>' } else { ' ' };
        let text = match line_kind(index) {
            LineKind::Header => style(text.as_str()).bold(),
            LineKind::Memo => style(text.as_str()),
            LineKind::Separator => style(text.as_str()).dim(),
        };
        writeln!(out, "{:>4} {marker} {text}", index + 1)?;
    }

    writeln!(out)?;
    writeln!(out, "{}: {}", labels::FIELD_STORE_NAME, fields.store_name)?;
    writeln!(out, "{}: {}", labels::FIELD_PERSON_NAME, fields.person_name)?;
    writeln!(out, "{}: {}", labels::FIELD_AGE, fields.age_text)?;
    writeln!(out, "{}: {}", labels::FIELD_NOTE, fields.note)?;
    writeln!(
        out,
        "[{}] [{}] [{}] [{}]",
        labels::BUTTON_ADD,
        labels::BUTTON_UPDATE,
        labels::BUTTON_DELETE,
        labels::BUTTON_CLEAR
    )
}
