use mine_merge_engine::game::{Command, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    Game(Command),
    Share,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Moves: w/a/s/d, up/down/left/right, ArrowUp/ArrowDown/ArrowLeft/ArrowRight or arrow keys
Other: u = undo, r = redo, n = new game, share, h = help, q = quit";

/// Maps one line of terminal input to a command. Unknown input yields `None`.
pub fn parse_input(line: &str) -> Option<InputCommand> {
    let token = line.trim();

    if let Some(direction) = Direction::from_key(token).or_else(|| arrow_escape(token)) {
        return Some(InputCommand::Game(Command::Move(direction)));
    }

    let command = match token.to_ascii_lowercase().as_str() {
        "w" | "up" => InputCommand::Game(Command::Move(Direction::Up)),
        "s" | "down" => InputCommand::Game(Command::Move(Direction::Down)),
        "a" | "left" => InputCommand::Game(Command::Move(Direction::Left)),
        "d" | "right" => InputCommand::Game(Command::Move(Direction::Right)),
        "u" | "undo" => InputCommand::Game(Command::Undo),
        "r" | "redo" => InputCommand::Game(Command::Redo),
        "n" | "new" => InputCommand::Game(Command::Restart),
        "share" => InputCommand::Share,
        "h" | "help" | "?" => InputCommand::Help,
        "q" | "quit" | "exit" => InputCommand::Quit,
        _ => return None,
    };
    Some(command)
}

fn arrow_escape(token: &str) -> Option<Direction> {
    match token {
        "\u{1b}[A" => Some(Direction::Up),
        "\u{1b}[B" => Some(Direction::Down),
        "\u{1b}[C" => Some(Direction::Right),
        "\u{1b}[D" => Some(Direction::Left),
        _ => None,
    }
}
