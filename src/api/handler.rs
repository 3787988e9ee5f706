use tracing::debug;

use crate::api::commands::Command;
use crate::api::errors::ApiError;
use crate::api::events::ServerEvent;
use crate::engine::{ActionOutcome, GameManager, RandomSource};

impl GameManager {
    /// Выполнить команду клиента и вернуть события для рассылки.
    pub fn handle<R: RandomSource>(
        &mut self,
        command: Command,
        rng: &mut R,
    ) -> Result<Vec<ServerEvent>, ApiError> {
        debug!(?command, "handling command");

        let event = match command {
            Command::CreatePlayer { name } => {
                let player = self.create_player(name);
                ServerEvent::PlayerCreated {
                    player_id: player.id,
                    name: player.name,
                }
            }
            Command::CreateGame { creator_id } => ServerEvent::GameCreated {
                game: self.create_game(creator_id)?,
            },
            Command::JoinGame { player_id, game_id } => ServerEvent::GameJoined {
                player_id,
                game: self.join_game(player_id, game_id)?,
            },
            Command::StartGame { game_id } => {
                let outcome = self.start_game(game_id, rng)?;
                ServerEvent::GameStarted {
                    game: outcome.game,
                    events: outcome.events,
                }
            }
            Command::Bet { player_id, amount } => updated(self.bet(player_id, amount, rng)?),
            Command::Fold { player_id } => updated(self.fold(player_id, rng)?),
        };

        Ok(vec![event])
    }
}

fn updated(outcome: ActionOutcome) -> ServerEvent {
    ServerEvent::GameUpdated {
        recipients: outcome.game.players.iter().map(|p| p.id).collect(),
        game: outcome.game,
        events: outcome.events,
    }
}
