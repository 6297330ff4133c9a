use mine_merge_engine::game::{GameController, GameStatus};

pub fn render(controller: &GameController) -> String {
    let config = controller.config();
    let mut out = format!(
        "XP Points: {}   Best Loot: {}   [{} | goal {}]\n",
        controller.score(),
        controller.best_score(),
        config.theme,
        config.winning_tile
    );
    out.push_str(&controller.board().to_string());

    match controller.status() {
        GameStatus::Won => out.push_str("You Won! Type n to start a new game.\n"),
        GameStatus::Lost => out.push_str("Game Over! Type n to try again, or u to undo.\n"),
        GameStatus::InProgress => {}
    }

    let mut hints = Vec::new();
    if controller.can_undo() {
        hints.push("u: undo");
    }
    if controller.can_redo() {
        hints.push("r: redo");
    }
    if !hints.is_empty() {
        out.push_str(&hints.join("  "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mine_merge_engine::config::GameConfig;
    use mine_merge_engine::game::SessionRng;

    #[test]
    fn test_render_fresh_game() {
        let controller = GameController::new(GameConfig::default(), SessionRng::new(42)).unwrap();
        let text = render(&controller);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "XP Points: 0   Best Loot: 0   [Mountain Caverns | goal 4096]");
        assert_eq!(lines.len(), 5);
    }
}
