//! # Session Layer
//!
//! The read-parse-dispatch loop. The bot owns the address book for the
//! session, a static command table, a [`BookStore`] for persistence, and an
//! [`Interface`] for I/O. Command aliases map to operation ids ([`Op`]);
//! the actual logic lives in the `commands` modules as free functions over
//! the book, so nothing here captures the bot itself.
//!
//! Every dispatch-time error is rendered as a message and the loop keeps
//! going; the only exits are `exit`/`close` and end of input, both of which
//! save the book first.

use crate::book::AddressBook;
use crate::commands::{self, CmdMessage, CmdResult, MessageLevel};
use crate::error::{GreetbookError, Result};
use crate::interface::Interface;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};

/// Operation ids bound to command aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

struct CommandSpec {
    aliases: &'static [&'static str],
    usage: &'static str,
    op: Op,
}

impl CommandSpec {
    fn help_line(&self) -> String {
        if self.usage.is_empty() {
            self.aliases.join(", ")
        } else {
            format!("{}: {}", self.aliases.join(", "), self.usage)
        }
    }
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        aliases: &["hello"],
        usage: "",
        op: Op::Hello,
    },
    CommandSpec {
        aliases: &["add"],
        usage: "[name] [number]",
        op: Op::Add,
    },
    CommandSpec {
        aliases: &["change"],
        usage: "[name] [old number] [new number]",
        op: Op::Change,
    },
    CommandSpec {
        aliases: &["phone"],
        usage: "[name]",
        op: Op::Phone,
    },
    CommandSpec {
        aliases: &["all"],
        usage: "",
        op: Op::All,
    },
    CommandSpec {
        aliases: &["delete", "remove"],
        usage: "[name]",
        op: Op::Delete,
    },
    CommandSpec {
        aliases: &["add-birthday"],
        usage: "[name] [DD.MM.YYYY]",
        op: Op::AddBirthday,
    },
    CommandSpec {
        aliases: &["show-birthday"],
        usage: "[name]",
        op: Op::ShowBirthday,
    },
    CommandSpec {
        aliases: &["birthdays"],
        usage: "[days]",
        op: Op::Birthdays,
    },
    CommandSpec {
        aliases: &["exit", "close"],
        usage: "",
        op: Op::Exit,
    },
];

pub struct Bot<S: BookStore, I: Interface> {
    book: AddressBook,
    store: S,
    interface: I,
    banner: bool,
}

impl<S: BookStore, I: Interface> Bot<S, I> {
    /// Load the persisted book and set up the session. A corrupt or
    /// unreadable store degrades to an empty book with a warning instead
    /// of aborting startup.
    pub fn new(store: S, mut interface: I) -> Self {
        let book = match store.load() {
            Ok(book) => book,
            Err(e) => {
                interface.show_message(
                    MessageLevel::Warning,
                    &format!(
                        "Could not load saved contacts ({}); starting with an empty book.",
                        e
                    ),
                );
                AddressBook::new()
            }
        };
        Self {
            book,
            store,
            interface,
            banner: true,
        }
    }

    /// Suppress the startup help banner.
    pub fn without_banner(mut self) -> Self {
        self.banner = false;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run the dispatch loop until `exit`/`close` or end of input, then
    /// persist the book. The book is saved even when the loop fails, so
    /// an input error cannot lose session mutations.
    pub fn run(&mut self) -> Result<()> {
        if self.banner {
            self.interface.show_help(&help_text("Welcome to greetbook!"));
        }

        let outcome = self.run_loop();
        let saved = self.store.save(&self.book);
        outcome.and(saved)
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.interface.get_input("Enter a command: ")? else {
                break;
            };
            let mut parts = line.split_whitespace();
            let Some(first) = parts.next() else {
                continue;
            };
            let cmd = first.to_lowercase();
            let args: Vec<&str> = parts.collect();

            let Some(spec) = COMMANDS.iter().find(|s| s.aliases.contains(&cmd.as_str())) else {
                let unknown = GreetbookError::UnknownCommand(cmd);
                self.interface.show_help(&help_text(&unknown.to_string()));
                continue;
            };

            if spec.op == Op::Exit {
                self.interface.show_message(MessageLevel::Info, "Goodbye!");
                break;
            }

            match self.dispatch(spec, &args) {
                Ok(result) => self.render(&result),
                Err(e) => self
                    .interface
                    .show_message(MessageLevel::Error, &e.to_string()),
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, spec: &CommandSpec, args: &[&str]) -> Result<CmdResult> {
        match spec.op {
            Op::Hello => Ok(CmdResult::message(CmdMessage::info(
                "Hello, how can I help you?",
            ))),
            Op::Add => {
                let [name, number] = take_args(args, spec)?;
                commands::add::run(&mut self.book, name, number)
            }
            Op::Change => {
                let [name, old, new] = take_args(args, spec)?;
                commands::change::run(&mut self.book, name, old, new)
            }
            Op::Phone => {
                let [name] = take_args(args, spec)?;
                commands::show::phone(&self.book, name)
            }
            Op::All => commands::show::all(&self.book),
            Op::Delete => {
                let [name] = take_args(args, spec)?;
                commands::delete::run(&mut self.book, name)
            }
            Op::AddBirthday => {
                let [name, date_text] = take_args(args, spec)?;
                commands::birthday::add(&mut self.book, name, date_text)
            }
            Op::ShowBirthday => {
                let [name] = take_args(args, spec)?;
                commands::birthday::show(&self.book, name)
            }
            Op::Birthdays => {
                let window = commands::upcoming::parse_window(args.first().copied())?;
                commands::upcoming::run(&self.book, today(), window)
            }
            // Handled by the loop before dispatch.
            Op::Exit => Ok(CmdResult::default()),
        }
    }

    fn render(&mut self, result: &CmdResult) {
        for message in &result.messages {
            self.interface.show_message(message.level, &message.content);
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The first `N` arguments, or the command's usage rendered as a
/// missing-argument error. Extra arguments are ignored.
fn take_args<'a, const N: usize>(
    args: &[&'a str],
    spec: &CommandSpec,
) -> Result<[&'a str; N]> {
    if args.len() < N {
        return Err(GreetbookError::MissingArguments {
            usage: spec.help_line(),
        });
    }
    let mut taken = [""; N];
    taken.copy_from_slice(&args[..N]);
    Ok(taken)
}

fn help_text(title: &str) -> String {
    let mut text = String::from(title);
    for spec in COMMANDS {
        text.push('\n');
        text.push_str(&spec.help_line());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::ScriptedInterface;
    use crate::store::memory::InMemoryStore;
    use crate::store::BookStore;

    fn run_session(inputs: &[&str]) -> (Bot<InMemoryStore, ScriptedInterface>, String) {
        let mut bot = Bot::new(
            InMemoryStore::new(),
            ScriptedInterface::new(inputs.iter().copied()),
        );
        bot.run().unwrap();
        let output = bot.interface.output_text();
        (bot, output)
    }

    #[test]
    fn banner_lists_every_command() {
        let (_, output) = run_session(&[]);
        assert!(output.contains("Welcome to greetbook!"));
        for spec in COMMANDS {
            assert!(output.contains(&spec.help_line()), "{}", spec.help_line());
        }
    }

    #[test]
    fn without_banner_suppresses_the_startup_help() {
        let mut bot = Bot::new(InMemoryStore::new(), ScriptedInterface::new(["hello"]))
            .without_banner();
        bot.run().unwrap();
        let output = bot.interface.output_text();
        assert!(!output.contains("Welcome to greetbook!"));
        assert!(output.contains("Hello, how can I help you?"));
    }

    #[test]
    fn input_error_still_saves_the_book() {
        struct FlakyInterface {
            inputs: std::collections::VecDeque<String>,
        }
        impl Interface for FlakyInterface {
            fn get_input(&mut self, _prompt: &str) -> crate::error::Result<Option<String>> {
                match self.inputs.pop_front() {
                    Some(line) => Ok(Some(line)),
                    None => Err(GreetbookError::Io(std::io::Error::new(
                        std::io::ErrorKind::BrokenPipe,
                        "input gone",
                    ))),
                }
            }
            fn show_message(&mut self, _level: MessageLevel, _text: &str) {}
            fn show_help(&mut self, _text: &str) {}
        }

        let interface = FlakyInterface {
            inputs: ["add Anna 1234567890".to_string()].into(),
        };
        let mut bot = Bot::new(InMemoryStore::new(), interface);

        assert!(bot.run().is_err());
        assert!(bot.store.snapshot().find("Anna").is_some());
    }

    #[test]
    fn full_session_mutates_and_reads_the_book() {
        let (bot, output) = run_session(&[
            "hello",
            "add Anna 1234567890",
            "add-birthday Anna 06.01.1990",
            "phone Anna",
            "all",
            "show-birthday Anna",
            "exit",
        ]);

        assert!(output.contains("Hello, how can I help you?"));
        assert!(output.contains("Contact 'Anna' with number '1234567890' added."));
        assert!(output.contains("Anna's birthday is 06.01.1990."));
        assert!(output.contains("Goodbye!"));
        assert_eq!(bot.book().len(), 1);
    }

    #[test]
    fn command_lookup_is_case_insensitive() {
        let (_, output) = run_session(&["HELLO", "Exit"]);
        assert!(output.contains("Hello, how can I help you?"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn unknown_command_shows_help_and_keeps_running() {
        let (_, output) = run_session(&["frobnicate", "hello"]);
        assert!(output.contains("Unknown command 'frobnicate'."));
        assert!(output.contains("birthdays: [days]"));
        assert!(output.contains("Hello, how can I help you?"));
    }

    #[test]
    fn missing_arguments_render_usage() {
        let (_, output) = run_session(&["add Anna"]);
        assert!(output.contains("Invalid arguments. Usage:\nadd: [name] [number]"));
    }

    #[test]
    fn command_errors_do_not_stop_the_loop() {
        let (bot, output) = run_session(&[
            "add Anna 123",
            "change Bob 1111111111 2222222222",
            "add Anna 1234567890",
        ]);
        assert!(output.contains("Phone number must be 10 digits"));
        assert!(output.contains("Contact 'Bob' not found."));
        assert_eq!(bot.book().len(), 1);
    }

    #[test]
    fn blank_input_is_ignored() {
        let (_, output) = run_session(&["", "   ", "hello"]);
        assert!(!output.contains("Unknown command"));
        assert!(output.contains("Hello, how can I help you?"));
    }

    #[test]
    fn exit_and_end_of_input_both_save_the_book() {
        let (bot, _) = run_session(&["add Anna 1234567890", "exit"]);
        assert!(bot.store.snapshot().find("Anna").is_some());

        // No exit command: the script just runs out of input.
        let (bot, _) = run_session(&["add Bob 1234567890"]);
        assert!(bot.store.snapshot().find("Bob").is_some());
    }

    #[test]
    fn session_reloads_previously_saved_book() {
        let (bot, _) = run_session(&["add Anna 1234567890"]);
        let store = InMemoryStore::with_book(bot.store.snapshot().clone());

        let mut second = Bot::new(store, ScriptedInterface::new(["phone Anna"]));
        second.run().unwrap();
        assert!(second.interface.output_text().contains("1234567890"));
    }

    #[test]
    fn corrupt_store_degrades_to_empty_book_with_warning() {
        struct BrokenStore;
        impl BookStore for BrokenStore {
            fn load(&self) -> crate::error::Result<AddressBook> {
                Err(GreetbookError::Store("corrupt".into()))
            }
            fn save(&mut self, _book: &AddressBook) -> crate::error::Result<()> {
                Ok(())
            }
        }

        let mut bot = Bot::new(BrokenStore, ScriptedInterface::new(["all"]));
        bot.run().unwrap();
        let output = bot.interface.output_text();
        assert!(output.contains("starting with an empty book"));
        assert!(output.contains("No contacts stored."));
    }

    #[test]
    fn birthdays_report_includes_todays_birthday() {
        let birthday_text = today().format(crate::model::DATE_FORMAT).to_string();
        let add_birthday = format!("add-birthday Anna {}", birthday_text);
        let (_, output) = run_session(&[
            "add Anna 1234567890",
            add_birthday.as_str(),
            "birthdays 0",
        ]);
        assert!(output.contains("Upcoming birthdays:"));
        assert!(output.contains("Anna - "));
    }

    #[test]
    fn birthdays_rejects_malformed_window() {
        let (_, output) = run_session(&["birthdays soon"]);
        assert!(output.contains("Invalid day count 'soon'."));
    }
}
