/// One line of protocol input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Engine,
    IsReady,
    NewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    Legal,
    Display,
    SetOption(Vec<String>),
    Quit,
    Unknown(String),
}

/// Split a line into a command; `None` for blank lines.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match first {
        "engine" => Command::Engine,
        "isready" => Command::IsReady,
        "newgame" => Command::NewGame,
        "position" => Command::Position(owned_parts()),
        "go" => Command::Go(owned_parts()),
        "legal" => Command::Legal,
        "d" => Command::Display,
        "setoption" => Command::SetOption(owned_parts()),
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
