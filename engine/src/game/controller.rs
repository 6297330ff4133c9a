use super::board::Board;
use super::history::{History, Snapshot};
use super::move_engine::apply_move;
use super::session_rng::SessionRng;
use super::share::ShareSummary;
use super::spawner::{add_random_tile, create_initial_grid};
use super::terminal::evaluate;
use super::types::{Direction, GameStatus};
use crate::config::{GameConfig, Validate};
use crate::error::EngineError;
use crate::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Redo,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub moved: bool,
    pub score_delta: u32,
    pub status: GameStatus,
}

/// One game session: turns input events into move, spawn, verdict and
/// history commit, in that order.
pub struct GameController {
    config: GameConfig,
    rng: SessionRng,
    history: History,
    status: GameStatus,
    best_score: u32,
}

impl GameController {
    pub fn new(config: GameConfig, mut rng: SessionRng) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidArgument)?;
        let board = create_initial_grid(config.grid_size, &mut rng)?;

        Ok(Self {
            config,
            rng,
            history: History::new(Snapshot::new(board, 0)),
            status: GameStatus::InProgress,
            best_score: 0,
        })
    }

    pub fn handle(&mut self, command: Command) -> Result<bool, EngineError> {
        match command {
            Command::Move(direction) => Ok(self.handle_move(direction).moved),
            Command::Undo => Ok(self.undo()),
            Command::Redo => Ok(self.redo()),
            Command::Restart => {
                self.restart()?;
                Ok(true)
            }
        }
    }

    /// Moves are ignored once the game is won or lost.
    pub fn handle_move(&mut self, direction: Direction) -> MoveReport {
        if self.status.is_terminal() {
            return self.idle_report();
        }

        let outcome = apply_move(self.board(), direction);
        if !outcome.moved {
            return self.idle_report();
        }

        let board = add_random_tile(&outcome.board, &mut self.rng);
        let score = self.score().saturating_add(outcome.score_delta);

        self.status = evaluate(&board, self.config.winning_tile);
        self.history.commit(Snapshot::new(board, score));
        self.best_score = self.best_score.max(score);

        match self.status {
            GameStatus::Won => log!(
                "Reached {} with score {} on a {}x{} grid",
                self.config.winning_tile,
                score,
                self.config.grid_size,
                self.config.grid_size
            ),
            GameStatus::Lost => log!(
                "No moves left, final score {}, highest tile {}",
                score,
                self.board().highest_tile()
            ),
            GameStatus::InProgress => {}
        }

        MoveReport {
            moved: true,
            score_delta: outcome.score_delta,
            status: self.status,
        }
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.refresh_status();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.refresh_status();
        }
        changed
    }

    /// Starts a new game with the current config. Undo history is dropped;
    /// the best score survives.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let board = create_initial_grid(self.config.grid_size, &mut self.rng)?;
        self.history.reset(Snapshot::new(board, 0));
        self.status = GameStatus::InProgress;
        log!(
            "New {}x{} game, goal {}",
            self.config.grid_size,
            self.config.grid_size,
            self.config.winning_tile
        );
        Ok(())
    }

    /// Applies new settings. Any change, the theme included, starts a new
    /// game; saving identical settings keeps the current one.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<(), EngineError> {
        config.validate().map_err(EngineError::InvalidArgument)?;

        if config == self.config {
            return Ok(());
        }

        self.config = config;
        log!("Config changed: {:?}", config);
        self.restart()
    }

    pub fn board(&self) -> &Board {
        &self.history.present().board
    }

    pub fn score(&self) -> u32 {
        self.history.present().score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn share_summary(&self) -> ShareSummary {
        ShareSummary {
            status: self.status,
            score: self.score(),
            best_score: self.best_score,
            largest_tile: self.board().highest_tile(),
            grid_size: self.config.grid_size,
            winning_tile: self.config.winning_tile,
        }
    }

    fn refresh_status(&mut self) {
        self.status = evaluate(self.board(), self.config.winning_tile);
    }

    fn idle_report(&self) -> MoveReport {
        MoveReport {
            moved: false,
            score_delta: 0,
            status: self.status,
        }
    }

    #[cfg(test)]
    fn load_board(&mut self, board: Board, score: u32) {
        self.history.reset(Snapshot::new(board, score));
        self.refresh_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    fn create_controller() -> GameController {
        GameController::new(GameConfig::default(), SessionRng::new(42)).unwrap()
    }

    fn config(grid_size: usize, winning_tile: u32) -> GameConfig {
        GameConfig {
            grid_size,
            winning_tile,
            theme: Theme::MountainCaverns,
        }
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let controller = create_controller();
        assert_eq!(controller.board().tile_count(), 2);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.status(), GameStatus::InProgress);
        assert!(!controller.can_undo());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = GameController::new(config(3, 2048), SessionRng::new(42));
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn test_merge_scores_spawns_and_commits() {
        let mut controller = create_controller();
        let mut values = vec![0; 16];
        values[0] = 2;
        values[1] = 2;
        controller.load_board(Board::from_values(4, &values).unwrap(), 0);

        let report = controller.handle_move(Direction::Left);
        assert!(report.moved);
        assert_eq!(report.score_delta, 4);
        assert_eq!(controller.score(), 4);
        assert_eq!(controller.best_score(), 4);
        assert_eq!(controller.board().tile_count(), 2);
        assert!(controller.can_undo());
    }

    #[test]
    fn test_blocked_move_commits_nothing() {
        let mut controller = create_controller();
        let mut values = vec![0; 16];
        values[0] = 2;
        controller.load_board(Board::from_values(4, &values).unwrap(), 0);

        let report = controller.handle_move(Direction::Left);
        assert!(!report.moved);
        assert!(!controller.can_undo());
        assert_eq!(controller.board().tile_count(), 1);
    }

    #[test]
    fn test_win_is_detected_after_spawn() {
        let mut controller = GameController::new(config(4, 1024), SessionRng::new(42)).unwrap();
        let mut values = vec![0; 16];
        values[0] = 512;
        values[1] = 512;
        controller.load_board(Board::from_values(4, &values).unwrap(), 0);

        let report = controller.handle_move(Direction::Left);
        assert_eq!(report.status, GameStatus::Won);
        assert_eq!(controller.score(), 1024);

        let ignored = controller.handle_move(Direction::Right);
        assert!(!ignored.moved);
        assert_eq!(ignored.status, GameStatus::Won);
    }

    #[test]
    fn test_undo_out_of_lost_state_resumes_play() {
        let mut controller = create_controller();
        #[rustfmt::skip]
        let almost_stuck = Board::from_values(4, &[
            2, 4, 2, 4,
            4, 2, 4, 2,
            8, 4, 2, 4,
            16, 32, 8, 0,
        ]).unwrap();
        controller.load_board(almost_stuck, 100);

        // Sliding right leaves exactly one hole at (3, 0) for the spawn.
        let report = controller.handle_move(Direction::Right);
        assert!(report.moved);
        assert_eq!(report.status, GameStatus::Lost);
        assert_eq!(controller.status(), GameStatus::Lost);
        assert!(!controller.handle_move(Direction::Up).moved);

        assert!(controller.undo());
        assert_eq!(controller.status(), GameStatus::InProgress);
        assert_eq!(controller.score(), 100);
        assert!(controller.can_redo());

        assert!(controller.redo());
        assert_eq!(controller.status(), GameStatus::Lost);
    }

    #[test]
    fn test_undo_never_lowers_best_score() {
        let mut controller = create_controller();
        let mut values = vec![0; 16];
        values[0] = 8;
        values[1] = 8;
        controller.load_board(Board::from_values(4, &values).unwrap(), 0);
        controller.handle_move(Direction::Left);
        assert_eq!(controller.best_score(), 16);

        controller.undo();
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.best_score(), 16);
    }

    #[test]
    fn test_theme_change_restarts() {
        let mut controller = create_controller();
        let mut values = vec![0; 16];
        values[0] = 4;
        values[1] = 4;
        controller.load_board(Board::from_values(4, &values).unwrap(), 0);
        controller.handle_move(Direction::Left);
        assert!(controller.can_undo());

        let themed = GameConfig {
            theme: Theme::SunsetSanctuary,
            ..*controller.config()
        };
        controller.reconfigure(themed).unwrap();
        assert_eq!(controller.config().theme, Theme::SunsetSanctuary);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.board().tile_count(), 2);
        assert!(!controller.can_undo());
    }

    #[test]
    fn test_unchanged_config_keeps_game() {
        let mut controller = create_controller();
        let before = controller.board().values();
        controller.reconfigure(GameConfig::default()).unwrap();
        assert_eq!(controller.board().values(), before);
    }

    #[test]
    fn test_grid_change_restarts() {
        let mut controller = create_controller();
        let mut values = vec![0; 16];
        values[0] = 4;
        values[1] = 4;
        controller.load_board(Board::from_values(4, &values).unwrap(), 0);
        controller.handle_move(Direction::Left);

        controller.reconfigure(config(6, 2048)).unwrap();
        assert_eq!(controller.board().size(), 6);
        assert_eq!(controller.board().tile_count(), 2);
        assert_eq!(controller.score(), 0);
        assert!(!controller.can_undo());
        assert_eq!(controller.best_score(), 8);
    }

    #[test]
    fn test_reconfigure_rejects_invalid() {
        let mut controller = create_controller();
        assert!(controller.reconfigure(config(4, 100)).is_err());
        assert_eq!(*controller.config(), GameConfig::default());
    }

    #[test]
    fn test_handle_dispatches_commands() {
        let mut controller = create_controller();
        let mut values = vec![0; 16];
        values[12] = 2;
        controller.load_board(Board::from_values(4, &values).unwrap(), 0);

        assert!(controller.handle(Command::Move(Direction::Up)).unwrap());
        assert!(controller.handle(Command::Undo).unwrap());
        assert!(!controller.handle(Command::Undo).unwrap());
        assert!(controller.handle(Command::Redo).unwrap());
        assert!(controller.handle(Command::Restart).unwrap());
        assert!(!controller.can_undo());
    }

    #[test]
    fn test_share_summary_reflects_state() {
        let controller = create_controller();
        let summary = controller.share_summary();
        assert_eq!(summary.status, GameStatus::InProgress);
        assert_eq!(summary.grid_size, 4);
        assert_eq!(summary.winning_tile, 4096);
        assert_eq!(summary.largest_tile, controller.board().highest_tile());
    }
}
