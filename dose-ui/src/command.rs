use thiserror::Error;

/// A numeric or choice field on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HerbMass,
    HerbPotency,
    FatMass,
    FatType,
    Servings,
}

impl Field {
    /// Command token that addresses this field.
    pub fn token(&self) -> &'static str {
        match self {
            Field::HerbMass => "herb",
            Field::HerbPotency => "potency",
            Field::FatMass => "fat",
            Field::FatType => "fat-type",
            Field::Servings => "servings",
        }
    }
}

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a raw value into a form field. The value is kept opaque until
    /// `calc`; nothing is validated at entry time.
    Set(Field, String),
    Calculate,
    Reset,
    Save,
    List,
    Info,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command '{0}'; type 'help' for the command list")]
    Unknown(String),

    #[error("usage: {0} <value>")]
    MissingValue(&'static str),
}

/// Parses one input line.
///
/// The first whitespace-separated word selects the command; for field
/// commands the rest of the line is the raw value, taken verbatim.
pub fn parse(line: &str) -> Result<Command, ParseCommandError> {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let field = match word {
        "herb" => Some(Field::HerbMass),
        "potency" => Some(Field::HerbPotency),
        "fat" => Some(Field::FatMass),
        "fat-type" => Some(Field::FatType),
        "servings" => Some(Field::Servings),
        _ => None,
    };
    if let Some(field) = field {
        if rest.is_empty() {
            return Err(ParseCommandError::MissingValue(field.token()));
        }
        return Ok(Command::Set(field, rest.to_string()));
    }

    match word {
        "calc" | "calculate" => Ok(Command::Calculate),
        "reset" => Ok(Command::Reset),
        "save" => Ok(Command::Save),
        "list" => Ok(Command::List),
        "info" => Ok(Command::Info),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseCommandError::Unknown(other.to_string())),
    }
}
