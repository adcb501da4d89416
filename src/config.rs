use anyhow::{Context, Result};

pub const DEFAULT_DIMS: (usize, usize) = (17, 25);
pub const SEED_VAR: &str = "MAZE_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMS.0,
            columns: DEFAULT_DIMS.1,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let seed = std::env::var(SEED_VAR).ok();

        Self::parse(&args, seed.as_deref())
    }

    /// `[rows] [columns]`, seed taken verbatim from the environment.
    pub fn parse<S: AsRef<str>>(args: &[S], seed: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(rows) = args.get(0) {
            config.rows = rows
                .as_ref()
                .parse()
                .with_context(|| format!("invalid row count {:?}", rows.as_ref()))?;
        }
        if let Some(columns) = args.get(1) {
            config.columns = columns
                .as_ref()
                .parse()
                .with_context(|| format!("invalid column count {:?}", columns.as_ref()))?;
        }
        if args.len() > 2 {
            anyhow::bail!("expected at most two arguments: [rows] [columns]");
        }

        config.seed = match seed {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("{} must be an unsigned integer", SEED_VAR))?,
            ),
            None => None,
        };

        Ok(config)
    }
}
