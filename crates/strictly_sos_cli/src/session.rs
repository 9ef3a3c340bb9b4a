//! Game orchestration between two seats.

use crate::config::GameConfig;
use strictly_sos::players::seat;
use strictly_sos::{
    Letter, MoveError, MoveReport, MoveSource, Outcome, Player, SosGame, SosVariant, Variant,
};
use tracing::{debug, info, instrument};

/// What happened in response to a turn or a submitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied.
    MoveMade {
        /// Name of the seat that moved.
        name: String,
        /// Details of the move.
        report: MoveReport,
    },
    /// A submitted move was refused; the game is unchanged.
    MoveRejected(MoveError),
    /// Input arrived while a computer is to move.
    NotYourTurn,
}

/// A game plus the two seats playing it.
pub struct Session {
    config: GameConfig,
    game: SosGame,
    blue: Box<dyn MoveSource>,
    red: Box<dyn MoveSource>,
    letters: [Letter; 2],
}

impl Session {
    /// Sets up a fresh game from the config.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let seed = *config.seed();
        let game = SosGame::new(*config.board_size(), *config.variant());
        let blue = seat(*config.blue(), Player::Blue, seed);
        let red = seat(*config.red(), Player::Red, seed.map(|s| s.wrapping_add(1)));
        info!(
            variant = %config.variant(),
            size = game.board_size(),
            blue = %config.blue(),
            red = %config.red(),
            "Session started"
        );
        Self {
            config,
            game,
            blue,
            red,
            letters: [Letter::S, Letter::S],
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &SosGame {
        &self.game
    }

    /// Returns the session settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn seat(&self, player: Player) -> &dyn MoveSource {
        match player {
            Player::Blue => self.blue.as_ref(),
            Player::Red => self.red.as_ref(),
        }
    }

    /// Name of the seat playing `player`.
    pub fn name_of(&self, player: Player) -> &str {
        self.seat(player).name()
    }

    /// True once no more moves will be taken.
    ///
    /// Besides a finished game this covers a simple game whose board filled
    /// up without an SOS.
    pub fn is_finished(&self) -> bool {
        self.game.is_over() || self.game.outcome().is_some()
    }

    /// True if the side to move is a human and the game is still running.
    pub fn awaiting_human(&self) -> bool {
        !self.is_finished() && !self.seat(self.game.current_turn()).is_automatic()
    }

    /// The letter a human plays when none is typed.
    pub fn chosen_letter(&self, player: Player) -> Letter {
        self.letters[player as usize]
    }

    /// Changes the default letter of the side to move.
    pub fn choose_letter(&mut self, letter: Letter) {
        let player = self.game.current_turn();
        self.letters[player as usize] = letter;
    }

    /// Lets a computer seat take its turn.
    ///
    /// Returns `None` if the game is finished or a human is to move.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Option<GameEvent> {
        if self.is_finished() {
            return None;
        }
        let player = self.game.current_turn();
        let source = match player {
            Player::Blue => self.blue.as_mut(),
            Player::Red => self.red.as_mut(),
        };
        if !source.is_automatic() {
            return None;
        }
        let mv = source.choose_move(self.game.board())?;
        let name = source.name().to_string();
        debug!(%name, %mv, "Computer move");
        Some(match self.game.apply(mv) {
            Ok(report) => GameEvent::MoveMade { name, report },
            Err(err) => GameEvent::MoveRejected(err),
        })
    }

    /// Submits a human move for the side to move.
    ///
    /// Without a letter, the side's chosen letter is used. Input is ignored
    /// while a computer is to move.
    #[instrument(skip(self))]
    pub fn submit(&mut self, row: usize, col: usize, letter: Option<&str>) -> GameEvent {
        let player = self.game.current_turn();
        if !self.is_finished() && self.seat(player).is_automatic() {
            return GameEvent::NotYourTurn;
        }
        let chosen = self.chosen_letter(player).to_string();
        match self.game.try_move(row, col, letter.unwrap_or(&chosen)) {
            Ok(report) => GameEvent::MoveMade {
                name: self.name_of(player).to_string(),
                report,
            },
            Err(err) => GameEvent::MoveRejected(err),
        }
    }

    /// Starts a new game with the same settings.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game.reset();
    }

    /// Final message, once the session is finished.
    pub fn game_over_message(&self) -> Option<String> {
        let outcome = self.game.outcome()?;
        Some(match (self.game.variant(), outcome) {
            (Variant::Simple, Outcome::Winner(player)) => {
                format!("{} wins by forming SOS!", self.name_of(player))
            }
            (Variant::General, Outcome::Winner(player)) => {
                format!("{} wins with higher score!", self.name_of(player))
            }
            (_, Outcome::Draw) => "It's a draw!".to_string(),
        })
    }
}
