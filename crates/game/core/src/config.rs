/// Game configuration constants.
///
/// Every capacity is a compile-time constant so the state record has a fixed
/// size and bounded collections can be expressed as const-generic arrays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== grid =====
    /// Side length of the square grid.
    pub const GRID_SIZE: u8 = 8;
    /// Number of cells on the grid.
    pub const CELL_COUNT: usize = Self::GRID_SIZE as usize * Self::GRID_SIZE as usize;

    // ===== compile-time capacities used as type parameters =====
    pub const MAX_OBSTACLES: usize = Self::CELL_COUNT / 2;
    pub const MAX_ENEMIES: usize = Self::MAX_OBSTACLES / 2;
    /// Upper bound on raw candidates emitted by any movement pattern.
    pub const MAX_CANDIDATES: usize = 8;
    /// Maximum identity token length in bytes.
    pub const IDENTITY_LEN: usize = 16;
    pub const HIGHSCORE_SLOTS: usize = 3;

    // ===== level scaling =====
    pub const MIN_ENEMIES: usize = Self::GRID_SIZE as usize;
    pub const MIN_OBSTACLES: usize = Self::MIN_ENEMIES * 2;

    // ===== entities =====
    pub const ENEMY_HEALTH: i16 = 2;
    pub const PLAYER_BASE_HEALTH: i16 = 3;
    /// Player health points converted into one score point on level completion.
    pub const HEALTH_PER_SCORE_POINT: i16 = 5;

    /// Number of enemies spawned for `level`.
    pub const fn enemies_for_level(level: u8) -> usize {
        let wanted = Self::MIN_ENEMIES + level as usize;
        if wanted < Self::MAX_ENEMIES {
            wanted
        } else {
            Self::MAX_ENEMIES
        }
    }

    /// Number of obstacles placed for `level`.
    pub const fn obstacles_for_level(level: u8) -> usize {
        let wanted = Self::MIN_OBSTACLES + level as usize;
        if wanted < Self::MAX_OBSTACLES {
            wanted
        } else {
            Self::MAX_OBSTACLES
        }
    }

    /// Starting health of the player on `level`.
    pub const fn player_health_for_level(level: u8) -> i16 {
        Self::PLAYER_BASE_HEALTH + level as i16
    }
}

// Placement must always find a free cell: player + door + full collections.
const _: () = assert!(GameConfig::MAX_OBSTACLES + GameConfig::MAX_ENEMIES + 2 < GameConfig::CELL_COUNT);
// Coordinates travel as single bytes in the action text.
const _: () = assert!(GameConfig::GRID_SIZE as usize <= u8::MAX as usize);
