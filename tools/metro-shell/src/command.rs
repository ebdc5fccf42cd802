use metro_network::Weight;

/// One shell command, already split into its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AddStation(String),
    RemoveStation(String),
    Connect { a: String, b: String, weight: Weight },
    Disconnect { a: String, b: String },
    Fare { from: String, to: String },
    List,
    Show,
    Neighbors(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid distance '{0}': expected a non-negative integer")]
    InvalidWeight(String),
}

pub const HELP: &[&str] = &[
    "add-station NAME        (1) add a new station",
    "connect A B DISTANCE    (2) connect two stations",
    "fare FROM TO            (3) fare between two stations",
    "show                    (4) display the network",
    "remove-station NAME     (5) remove a station",
    "disconnect A B          (6) remove a connection",
    "exit                    (7) leave the shell",
    "list                    list stations in name order",
    "neighbors NAME          list a station's connections",
    "help                    show this message",
];

/// Parse a line of input. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "add-station" | "1" => match args.as_slice() {
            [name] => Command::AddStation(name.to_string()),
            _ => return Err(ParseError::Usage("add-station NAME")),
        },
        "connect" | "2" => match args.as_slice() {
            [a, b, weight] => Command::Connect {
                a: a.to_string(),
                b: b.to_string(),
                weight: parse_weight(weight)?,
            },
            _ => return Err(ParseError::Usage("connect A B DISTANCE")),
        },
        "fare" | "3" => match args.as_slice() {
            [from, to] => Command::Fare {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => return Err(ParseError::Usage("fare FROM TO")),
        },
        "show" | "4" => no_args(&args, Command::Show, "show")?,
        "remove-station" | "5" => match args.as_slice() {
            [name] => Command::RemoveStation(name.to_string()),
            _ => return Err(ParseError::Usage("remove-station NAME")),
        },
        "disconnect" | "6" => match args.as_slice() {
            [a, b] => Command::Disconnect {
                a: a.to_string(),
                b: b.to_string(),
            },
            _ => return Err(ParseError::Usage("disconnect A B")),
        },
        "exit" | "quit" | "7" => Command::Exit,
        "list" => no_args(&args, Command::List, "list")?,
        "neighbors" => match args.as_slice() {
            [name] => Command::Neighbors(name.to_string()),
            _ => return Err(ParseError::Usage("neighbors NAME")),
        },
        "help" => Command::Help,
        _ => return Err(ParseError::Unknown(head.to_string())),
    };

    Ok(Some(command))
}

fn no_args(args: &[&str], command: Command, usage: &'static str) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::Usage(usage))
    }
}

fn parse_weight(raw: &str) -> Result<Weight, ParseError> {
    raw.parse::<Weight>()
        .map_err(|_| ParseError::InvalidWeight(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_commands() {
        assert_eq!(
            parse("add-station Central").unwrap(),
            Some(Command::AddStation("Central".into()))
        );
        assert_eq!(
            parse("  connect A B 5 ").unwrap(),
            Some(Command::Connect {
                a: "A".into(),
                b: "B".into(),
                weight: 5
            })
        );
        assert_eq!(
            parse("FARE A C").unwrap(),
            Some(Command::Fare {
                from: "A".into(),
                to: "C".into()
            })
        );
        assert_eq!(parse("list").unwrap(), Some(Command::List));
        assert_eq!(parse("quit").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_menu_numbers() {
        assert_eq!(parse("1 E").unwrap(), Some(Command::AddStation("E".into())));
        assert_eq!(parse("4").unwrap(), Some(Command::Show));
        assert_eq!(
            parse("6 A B").unwrap(),
            Some(Command::Disconnect {
                a: "A".into(),
                b: "B".into()
            })
        );
        assert_eq!(parse("7").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_blank_and_comments() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# seed data").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("teleport A"), Err(ParseError::Unknown("teleport".into())));
        assert_eq!(parse("8"), Err(ParseError::Unknown("8".into())));
        assert_eq!(parse("fare A"), Err(ParseError::Usage("fare FROM TO")));
        assert_eq!(parse("show everything"), Err(ParseError::Usage("show")));
        assert_eq!(
            parse("connect A B -3"),
            Err(ParseError::InvalidWeight("-3".into()))
        );
        assert_eq!(
            parse("connect A B far"),
            Err(ParseError::InvalidWeight("far".into()))
        );
    }
}
