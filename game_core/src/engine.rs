use glam::Vec2;
use hecs::{Entity, World};

use crate::audio::{cues_for, SoundBank};
use crate::fsm::{FsmState, GameAction, GameFsm, MatchLength, MenuChoice, TransitionResult};
use crate::render::{draw_game_over, draw_playfield, Canvas};
use crate::systems::ingest_inputs;
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameMap, GameRng, HeldKeys, Paddle,
    Score, Side,
};

/// Owns the table (both paddles and the ball) and the match around it
pub struct GameEngine {
    world: World,
    player: Entity,
    ai: Entity,
    ball: Entity,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    winning_score: MatchLength,
    fsm: GameFsm,
    sounds: Option<Box<dyn SoundBank>>,
}

impl GameEngine {
    pub fn new(config: Config) -> Self {
        Self::with_seed(config, GameRng::default())
    }

    /// Build the table. A screen too small for the paddles is grown to `Config::min_screen`.
    pub fn with_seed(config: Config, rng: GameRng) -> Self {
        let config = config.playable();
        let map = GameMap::from_config(&config);
        let mut world = World::new();

        let paddle_y = map.paddle_spawn_y(config.paddle_height);
        let player = create_paddle(
            &mut world,
            Side::Player,
            Vec2::new(config.paddle_x(Side::Player), paddle_y),
            &config,
        );
        let ai = create_paddle(
            &mut world,
            Side::Ai,
            Vec2::new(config.paddle_x(Side::Ai), paddle_y),
            &config,
        );
        let ball = create_ball(&mut world, map.ball_spawn(), config.ball_velocity, &config);

        Self {
            world,
            player,
            ai,
            ball,
            map,
            winning_score: config.win_score,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
            sounds: None,
        }
    }

    /// Attach the sound capability probed at startup; `None` keeps the game silent
    pub fn with_sounds(mut self, sounds: Option<Box<dyn SoundBank>>) -> Self {
        self.sounds = sounds;
        self
    }

    /// Move the player's paddle from the held keys
    pub fn handle_input(&mut self, keys: &HeldKeys) {
        if !self.fsm.is_playing() {
            return;
        }
        ingest_inputs(&mut self.world, keys, &self.map, &self.config);
    }

    /// Advance the simulation one frame and play the cues it raised
    pub fn update(&mut self) {
        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(sounds) = self.sounds.as_deref() {
            for cue in cues_for(&self.events) {
                sounds.play(cue);
            }
        }
    }

    /// One full frame: input, simulation, then the game-over check
    pub fn tick(&mut self, keys: &HeldKeys) -> FsmState {
        self.handle_input(keys);
        self.update();
        self.check_game_over();
        self.fsm.state()
    }

    /// Enter the game-over state once either side reaches the winning score
    pub fn check_game_over(&mut self) -> bool {
        if self.fsm.is_playing() {
            if let Some(winner) = self.winner() {
                self.fsm.transition(GameAction::GameOver);
                log::info!(
                    "{:?} wins {}-{} (first to {})",
                    winner,
                    self.score.player,
                    self.score.ai,
                    self.winning_score.target()
                );
            }
        }
        self.fsm.is_game_over()
    }

    /// Feed a selection from the game-over menu
    pub fn apply_menu_choice(&mut self, choice: MenuChoice) -> TransitionResult {
        let result = self.fsm.transition(choice.action());
        if result.success() {
            match choice {
                MenuChoice::Play(length) => {
                    self.reset_game(Some(length));
                    log::info!("New match, first to {}", self.winning_score.target());
                }
                MenuChoice::Quit => log::info!("Quit from menu"),
            }
        }
        result
    }

    /// Leave the game from any live state (window closed)
    pub fn quit(&mut self) -> TransitionResult {
        self.fsm.transition(GameAction::Quit)
    }

    /// Zero the scores, re-serve the ball and recenter both paddles
    pub fn reset_game(&mut self, length: Option<MatchLength>) {
        if let Some(length) = length {
            self.winning_score = length;
        }
        self.score.clear();
        self.events.clear();

        let paddle_y = self.map.paddle_spawn_y(self.config.paddle_height);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.pos.y = paddle_y;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&mut self.rng);
        }
    }

    /// Draw the current frame: the table while playing, the menu after a win
    pub fn render(&self, canvas: &mut dyn Canvas) {
        match (self.fsm.state(), self.winner()) {
            (FsmState::GameOver, Some(winner)) => draw_game_over(canvas, &self.config, winner),
            _ => {
                if let (Some(player), Some(ai), Some(ball)) =
                    (self.player_paddle(), self.ai_paddle(), self.ball())
                {
                    draw_playfield(canvas, &self.config, [&player, &ai], &ball, &self.score);
                }
            }
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.winning_score.target())
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn player_score(&self) -> u32 {
        self.score.player
    }

    pub fn ai_score(&self) -> u32 {
        self.score.ai
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score.target()
    }

    pub fn match_length(&self) -> MatchLength {
        self.winning_score
    }

    /// Outcomes of the most recent update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn has_sound(&self) -> bool {
        self.sounds.is_some()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.world.query_one_mut::<&mut Ball>(self.ball).ok()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = self.paddle_entity(side);
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn paddle_mut(&mut self, side: Side) -> Option<&mut Paddle> {
        let entity = self.paddle_entity(side);
        self.world.query_one_mut::<&mut Paddle>(entity).ok()
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.paddle(Side::Player)
    }

    pub fn ai_paddle(&self) -> Option<Paddle> {
        self.paddle(Side::Ai)
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{DrawCall, RecordingCanvas};

    fn engine() -> GameEngine {
        GameEngine::with_seed(Config::new().with_screen(800.0, 400.0), GameRng::new(1))
    }

    /// Put the ball one frame away from the right edge
    fn give_player_point(engine: &mut GameEngine) {
        let ball = engine.ball_mut().unwrap();
        ball.pos = Vec2::new(795.0, 20.0);
        ball.vel = Vec2::new(7.0, 7.0);
        engine.tick(&HeldKeys::new());
    }

    #[test]
    fn test_initial_layout() {
        let engine = engine();
        assert_eq!(engine.player_paddle().unwrap().pos, Vec2::new(10.0, 150.0));
        assert_eq!(engine.ai_paddle().unwrap().pos, Vec2::new(780.0, 150.0));
        assert_eq!(engine.ball().unwrap().pos, Vec2::new(400.0, 200.0));
        assert_eq!(engine.ball().unwrap().vel, Vec2::new(7.0, 7.0));
        assert_eq!(engine.winning_score(), 5);
        assert_eq!(engine.state(), FsmState::Playing);
        assert!(!engine.has_sound());
    }

    #[test]
    fn test_handle_input_moves_player() {
        let mut engine = engine();
        engine.handle_input(&HeldKeys::down());
        assert_eq!(engine.player_paddle().unwrap().pos.y, 160.0);
    }

    #[test]
    fn test_update_order_scores_after_collision() {
        let mut engine = engine();
        // Ball is about to pass the player paddle's face while overlapping it
        engine.paddle_mut(Side::Player).unwrap().pos.y = 150.0;
        let ball = engine.ball_mut().unwrap();
        ball.pos = Vec2::new(22.0, 180.0);
        ball.vel = Vec2::new(-7.0, 0.0);

        engine.update();

        assert!(engine.events().paddle_hit);
        assert!(!engine.events().scored(), "Bounce saves the point");
        assert_eq!(engine.ball().unwrap().pos.x, 20.0);
    }

    #[test]
    fn test_game_over_when_target_reached() {
        let mut engine = engine();
        for _ in 0..4 {
            give_player_point(&mut engine);
            assert!(!engine.check_game_over());
        }
        give_player_point(&mut engine);
        assert_eq!(engine.player_score(), 5);
        assert!(engine.check_game_over());
        assert_eq!(engine.winner(), Some(Side::Player));
    }

    #[test]
    fn test_no_updates_while_game_over() {
        let mut engine = engine();
        for _ in 0..5 {
            give_player_point(&mut engine);
        }
        let before = engine.ball().unwrap();
        engine.tick(&HeldKeys::down());
        assert_eq!(engine.ball().unwrap(), before, "Menu owns the game");
        assert_eq!(engine.player_paddle().unwrap().pos.y, 150.0);
    }

    #[test]
    fn test_menu_choice_ignored_while_playing() {
        let mut engine = engine();
        give_player_point(&mut engine);
        let result = engine.apply_menu_choice(MenuChoice::Play(MatchLength::BestOf7));
        assert!(!result.success());
        assert_eq!(engine.player_score(), 1, "No reset mid-match");
        assert_eq!(engine.winning_score(), 5);
    }

    #[test]
    fn test_reset_game_keeps_target_without_argument() {
        let mut engine = engine();
        give_player_point(&mut engine);
        engine.paddle_mut(Side::Ai).unwrap().pos.y = 0.0;

        engine.reset_game(None);

        assert_eq!(engine.score(), Score::new());
        assert_eq!(engine.winning_score(), 5);
        assert_eq!(engine.ball().unwrap().pos, Vec2::new(400.0, 200.0));
        assert_eq!(engine.ai_paddle().unwrap().pos.y, 150.0);
    }

    #[test]
    fn test_short_screen_is_grown_to_fit_paddles() {
        let config = Config::new().with_screen(800.0, 90.0);
        let mut engine = GameEngine::with_seed(config, GameRng::new(1));
        assert_eq!(engine.map().height, 100.0);

        for _ in 0..20 {
            engine.tick(&HeldKeys::down());
        }

        assert_eq!(engine.player_paddle().unwrap().pos.y, 0.0);
        let ball = engine.ball().unwrap();
        assert!((0.0..=93.0).contains(&ball.pos.y), "ball off screen: {}", ball.pos.y);
    }

    #[test]
    fn test_match_length_comes_from_config() {
        let config = Config::new().with_win_score(MatchLength::BestOf3);
        let mut engine = GameEngine::with_seed(config, GameRng::new(1));
        assert_eq!(engine.match_length(), MatchLength::BestOf3);

        engine.tick(&HeldKeys::new());
        assert_eq!(engine.state(), FsmState::Playing, "No winner at 0-0");
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_quit_while_playing() {
        let mut engine = engine();
        assert!(engine.quit().success());
        assert_eq!(engine.state(), FsmState::Terminated);
    }

    #[test]
    fn test_render_switches_to_menu() {
        let mut engine = engine();
        let mut canvas = RecordingCanvas::default();
        engine.render(&mut canvas);
        assert!(canvas
            .calls
            .iter()
            .any(|c| matches!(c, DrawCall::Ellipse(_))));

        for _ in 0..5 {
            give_player_point(&mut engine);
        }
        let mut canvas = RecordingCanvas::default();
        engine.render(&mut canvas);
        assert!(canvas.calls.iter().any(
            |c| matches!(c, DrawCall::Text(t, _, _, _) if t == "Player Wins!")
        ));
    }
}
