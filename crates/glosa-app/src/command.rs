use glosa_types::UiEvent;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command :{0} (type :help)")]
    Unknown(String),

    #[error(":{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("Not a card number: {0}")]
    BadCardNumber(String),
}

/// Map one line of user input to a UI event.
///
/// Plain text searches, a bare number toggles that card, and `:`-prefixed
/// words are commands. An empty line shows everything.
pub fn parse_command(line: &str) -> Result<UiEvent, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return Ok(UiEvent::ShowAll);
    }

    if let Some(command) = line.trim().strip_prefix(':') {
        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        return parse_named(name, argument);
    }

    if line.trim().chars().all(|c| c.is_ascii_digit()) {
        return card_index(line.trim()).map(UiEvent::ToggleDetail);
    }

    Ok(UiEvent::Search(line.to_string()))
}

fn parse_named(name: &str, argument: &str) -> Result<UiEvent, CommandError> {
    match name {
        "all" => Ok(UiEvent::ShowAll),
        "cat" | "category" => require(argument, "cat").map(|t| UiEvent::SelectCategory(t.to_string())),
        "find" => require(argument, "find").map(|k| UiEvent::Search(k.to_string())),
        "open" => card_index(require(argument, "open")?).map(UiEvent::ToggleDetail),
        "theme" => Ok(UiEvent::ToggleTheme),
        "menu" => Ok(UiEvent::ToggleMenu),
        "reload" => Ok(UiEvent::Reload),
        "help" | "h" => Ok(UiEvent::Help),
        "quit" | "q" | "exit" => Ok(UiEvent::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn require<'a>(argument: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if argument.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(argument)
    }
}

/// Cards are numbered from 1 on screen.
fn card_index(number: &str) -> Result<usize, CommandError> {
    match number.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadCardNumber(number.to_string())),
    }
}
