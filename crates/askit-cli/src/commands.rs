//! Subcommands and their execution against a terminal.

use anyhow::{Context, Result};
use askit::{
    ask_bool, ask_bool_with_default, ask_int, ask_int_with_default, ask_path,
    ask_path_with_default, ask_string, ask_string_with_default, parse_bool, parse_int,
    OptionPrompt, TerminalIO,
};
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask for a string, a number and a yes/no answer (default)
    Demo,
    /// Ask for a string
    String(Question),
    /// Ask for a filesystem path; `\ ` is read as a space
    Path(Question),
    /// Ask for an integer
    Int(Question),
    /// Ask a yes/no question
    Bool(Question),
    /// Pick one of the given options
    Select(SelectArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Text shown before the answer
    #[arg(long, short)]
    pub title: String,

    /// Value used when the answer is empty
    #[arg(long, short)]
    pub default: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SelectArgs {
    /// Text shown before the answer
    #[arg(long, short)]
    pub title: String,

    /// Value used when the answer is empty
    #[arg(long, short)]
    pub default: Option<String>,

    /// Offer a custom value entry after the options
    #[arg(long)]
    pub optional: bool,

    /// Options to choose from
    pub options: Vec<String>,
}

/// Run a command, writing prompts and the result through `term`.
pub fn run(command: &Command, term: &mut impl TerminalIO) -> Result<()> {
    log::debug!("running {:?}", command);
    let answer = match command {
        Command::Demo => return demo(term),
        Command::String(q) => match &q.default {
            Some(default) => ask_string_with_default(&q.title, default, term)?,
            None => ask_string(&q.title, term)?,
        },
        Command::Path(q) => match &q.default {
            Some(default) => ask_path_with_default(&q.title, default, term)?,
            None => ask_path(&q.title, term)?,
        },
        Command::Int(q) => {
            let value = match &q.default {
                Some(default) => {
                    let default = parse_int(default).context("invalid --default")?;
                    ask_int_with_default(&q.title, default, term)?
                }
                None => ask_int(&q.title, term)?,
            };
            value.to_string()
        }
        Command::Bool(q) => {
            let value = match &q.default {
                Some(default) => {
                    let default = parse_bool(default).context("invalid --default")?;
                    ask_bool_with_default(&q.title, default, term)?
                }
                None => ask_bool(&q.title, term)?,
            };
            value.to_string()
        }
        Command::Select(args) => OptionPrompt::new(&args.title)
            .default(args.default.clone().unwrap_or_default())
            .optional(args.optional)
            .options(&args.options)
            .ask(term)?,
    };

    term.write(&format!("{}\n", answer))?;
    Ok(())
}

fn demo(term: &mut impl TerminalIO) -> Result<()> {
    let text = ask_string("Please enter some text here", term)?;
    term.write(&format!("Entered text was: {}\n", text))?;

    let number = ask_int("Please enter a number", term)?;
    term.write(&format!("Entered: {}\n", number))?;

    let answer = ask_bool("Yes or no?", term)?;
    term.write(&format!("Entered: {}\n", answer))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use askit::{AskError, MockTerminal};

    fn question(title: &str, default: Option<&str>) -> Question {
        Question {
            title: title.to_string(),
            default: default.map(str::to_string),
        }
    }

    #[test]
    fn demo_asks_three_questions() {
        let mut term = MockTerminal::with_responses(["hello", "31", "y"]);
        run(&Command::Demo, &mut term).unwrap();
        assert_eq!(
            term.output(),
            "Please enter some text here: Entered text was: hello\n\
             Please enter a number: Entered: 31\n\
             Yes or no?: Entered: true\n"
        );
    }

    #[test]
    fn demo_stops_at_first_failure() {
        let mut term = MockTerminal::with_responses(["hello", "many"]);
        let err = run(&Command::Demo, &mut term).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AskError>(),
            Some(AskError::ParseFailure { .. })
        ));
        assert!(!term.output().contains("Yes or no?"));
    }

    #[test]
    fn string_prints_answer() {
        let mut term = MockTerminal::with_input("value\n");
        run(&Command::String(question("Name", None)), &mut term).unwrap();
        assert_eq!(term.output(), "Name: value\n");
    }

    #[test]
    fn path_uses_default() {
        let mut term = MockTerminal::with_input("\n");
        run(&Command::Path(question("Dir", Some("a\\ b"))), &mut term).unwrap();
        assert_eq!(term.output(), "Dir [a\\ b]: a b\n");
    }

    #[test]
    fn int_default_must_be_a_number() {
        let mut term = MockTerminal::with_input("\n");
        let err = run(&Command::Int(question("N", Some("ten"))), &mut term).unwrap_err();
        assert!(err.to_string().contains("invalid --default"));
        assert_eq!(term.output(), "");
    }

    #[test]
    fn bool_with_default() {
        let mut term = MockTerminal::with_input("\n");
        run(&Command::Bool(question("Ok?", Some("yes"))), &mut term).unwrap();
        assert_eq!(term.output(), "Ok? [Y/n]: true\n");
    }

    #[test]
    fn select_prints_choice() {
        let args = SelectArgs {
            title: "env".to_string(),
            default: None,
            optional: false,
            options: vec!["dev".to_string(), "prod".to_string()],
        };
        let mut term = MockTerminal::with_input("2\n");
        run(&Command::Select(args), &mut term).unwrap();
        assert!(term.output().ends_with("Enter: prod\n"));
    }
}
