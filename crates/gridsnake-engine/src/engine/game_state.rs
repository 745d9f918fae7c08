use rand::Rng as _;

use crate::core::{CELL_COUNT, CellIndex, Direction, Grid, Snake, Tile};

use super::{
    intent::Intent,
    random::{GameSeed, RandomSource, SeededRandom},
    step_clock::StepClock,
};

/// How a move into a cell occupied by the snake is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum CollisionRule {
    /// Any cell currently occupied by the snake is fatal, including the tail
    /// cell that would be vacated by the same move.
    #[default]
    Strict,
    /// A non-growing move may enter the cell the tail leaves in the same step.
    VacatingTail,
}

/// Round status derived from the snake length and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// Snake placed, waiting for the first steer.
    Ready,
    Running,
    Lost,
    Won,
}

/// What a single simulation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepEvent {
    /// The step clock advanced but the snake is at rest.
    Idle,
    Moved,
    /// Ate an apple; a new apple was spawned.
    Grew,
    /// Ate the last apple and now covers the whole board.
    Won,
    HitWall,
    HitSelf,
}

impl StepEvent {
    /// Returns true if the step ended the round.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::HitWall | Self::HitSelf)
    }
}

/// The board simulation: grid, snake, direction and their transition rules.
///
/// # Example
///
/// ```
/// use gridsnake_engine::{Direction, GameState, GameStatus, STEP_INTERVAL_NANOS};
///
/// let mut game = GameState::new();
/// assert_eq!(game.status(), GameStatus::Ready);
/// assert_eq!(game.snake().len(), 1);
///
/// game.set_direction(Direction::Up);
///
/// // Nothing happens until a full step interval has elapsed
/// assert_eq!(game.update(STEP_INTERVAL_NANOS / 2), None);
/// assert!(game.update(STEP_INTERVAL_NANOS).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct GameState<R = SeededRandom> {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    clock: StepClock,
    collision_rule: CollisionRule,
    rng: R,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a game with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible placement.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self::with_random(SeededRandom::with_seed(seed))
    }

    /// Seed of the random source driving this game.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.rng.seed()
    }
}

impl<R> GameState<R> {
    #[must_use]
    pub fn with_collision_rule(self, collision_rule: CollisionRule) -> Self {
        Self {
            collision_rule,
            ..self
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn collision_rule(&self) -> CollisionRule {
        self.collision_rule
    }

    /// Tick at which the simulation last stepped.
    #[must_use]
    pub fn last_step_tick(&self) -> u64 {
        self.clock.last_step()
    }

    /// The apple cell, if an apple is on the board.
    #[must_use]
    pub fn apple(&self) -> Option<CellIndex> {
        self.grid.cells_with(Tile::Apple).next()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.snake.is_empty() {
            GameStatus::Lost
        } else if self.snake.is_full() {
            GameStatus::Won
        } else if self.direction.is_none() {
            GameStatus::Ready
        } else {
            GameStatus::Running
        }
    }
}

impl<R> GameState<R>
where
    R: RandomSource,
{
    /// Creates a game drawing placements from `rng`, already initialized
    /// with [`Self::init_game`].
    pub fn with_random(rng: R) -> Self {
        let mut this = Self {
            grid: Grid::EMPTY,
            snake: Snake::new(),
            direction: Direction::None,
            clock: StepClock::default(),
            collision_rule: CollisionRule::default(),
            rng,
        };
        this.init_game();
        this
    }

    /// Starts a new round.
    ///
    /// Clears the board, places an apple and a single-segment snake on two
    /// distinct random cells, and puts the snake at rest. The step clock is
    /// left untouched.
    pub fn init_game(&mut self) {
        self.grid.clear();
        self.snake.clear();
        self.direction = Direction::None;

        if let Some(apple) = self.random_empty_cell() {
            self.grid.set(apple, Tile::Apple);
        }
        if let Some(head) = self.random_empty_cell() {
            self.grid.set(head, Tile::Snake);
            self.snake.push_head(head);
        }

        tracing::info!(
            head = ?self.snake.head().map(CellIndex::get),
            apple = ?self.apple().map(CellIndex::get),
            "new round"
        );
    }

    /// Requests a new heading.
    ///
    /// Ignored (returns `false`) when `requested` is the reverse of the
    /// current direction, when it is [`Direction::None`], or when the round
    /// is over (snake empty or full).
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested.is_none()
            || self.direction.is_opposite(requested)
            || self.snake.is_empty()
            || self.snake.is_full()
        {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Applies a player intent. Returns whether it changed anything.
    ///
    /// A restart is only honored while the direction is
    /// [`Direction::None`], that is before the first move of a round or
    /// after the round ended.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Steer(direction) => self.set_direction(direction),
            Intent::Restart if self.direction.is_none() => {
                self.init_game();
                true
            }
            Intent::Restart => false,
        }
    }

    /// Advances the simulation by at most one step.
    ///
    /// Returns `None` if less than one step interval elapsed since the last
    /// step; the caller should only redraw when this returns `Some`.
    pub fn update(&mut self, tick: u64) -> Option<StepEvent> {
        if !self.clock.try_advance(tick) {
            return None;
        }

        let event = self.step();
        if event.is_terminal() {
            self.direction = Direction::None;
            tracing::info!(?event, length = self.snake.len(), "round over");
        } else if !event.is_idle() {
            tracing::debug!(?event, tick, head = ?self.snake.head().map(CellIndex::get));
        }
        Some(event)
    }

    fn step(&mut self) -> StepEvent {
        let Some(head) = self.snake.head() else {
            return StepEvent::Idle;
        };
        if self.direction.is_none() {
            return StepEvent::Idle;
        }
        let Some(next) = head.neighbor(self.direction) else {
            self.kill();
            return StepEvent::HitWall;
        };

        match self.grid[next] {
            Tile::Empty => {
                self.advance(next);
                StepEvent::Moved
            }
            Tile::Snake if self.can_enter_vacating_tail(next) => {
                self.advance(next);
                StepEvent::Moved
            }
            Tile::Snake => {
                self.kill();
                StepEvent::HitSelf
            }
            Tile::Apple => {
                self.grid.set(next, Tile::Snake);
                self.snake.push_head(next);
                match self.random_empty_cell() {
                    Some(apple) => {
                        self.grid.set(apple, Tile::Apple);
                        StepEvent::Grew
                    }
                    None => StepEvent::Won,
                }
            }
        }
    }

    // A two-segment snake entering its tail would swap places with itself.
    fn can_enter_vacating_tail(&self, next: CellIndex) -> bool {
        self.collision_rule.is_vacating_tail()
            && self.snake.len() > 2
            && self.snake.tail() == Some(next)
    }

    fn advance(&mut self, next: CellIndex) {
        if let Some(tail) = self.snake.pop_tail() {
            self.grid.set(tail, Tile::Empty);
        }
        self.grid.set(next, Tile::Snake);
        self.snake.push_head(next);
    }

    fn kill(&mut self) {
        for cell in self.snake.cells() {
            self.grid.set(cell, Tile::Empty);
        }
        self.snake.clear();
    }

    /// Retry sampling over the whole board until an empty cell comes up.
    fn random_empty_cell(&mut self) -> Option<CellIndex> {
        if !self.grid.has_empty_cell() {
            return None;
        }
        loop {
            let cell = CellIndex::new(self.rng.uniform_int(0, CELL_COUNT - 1))?;
            if self.grid[cell].is_empty() {
                return Some(cell);
            }
        }
    }
}
