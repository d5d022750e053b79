use std::fmt;
use std::path::{Path, PathBuf};

use crate::generators::Algorithm;

/// Validated maze configuration, read from a `KEY=value` config file.
#[derive(Debug, Clone)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    pub entry: (u16, u16),
    pub exit: (u16, u16),
    pub algorithm: Algorithm,
    /// When false, the flaw injector opens extra walls after generation.
    pub perfect: bool,
    pub animations: bool,
    pub output_file: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Configuration errors. All of them surface before generation begins;
/// nothing here is raised mid-algorithm.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    /// Line is not of the form `KEY=value`.
    InvalidLine(String),
    UnknownKey(String),
    /// Value does not parse as the key's expected type.
    InvalidValue { key: &'static str, value: String },
    MissingKey(&'static str),
    /// Entry or exit lies outside `[0,width) x [0,height)`.
    OutOfBounds { key: &'static str, value: (u16, u16) },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "cannot read config file: {err}"),
            ConfigError::InvalidLine(line) => {
                write!(f, "invalid line '{line}': expected KEY=value")
            }
            ConfigError::UnknownKey(key) => write!(
                f,
                "unknown key '{key}': valid keys are WIDTH, HEIGHT, ENTRY, EXIT, \
                 ALGORITHM, PERFECT, ANIMATIONS, OUTPUT_FILE, SEED"
            ),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value '{value}' for {key}")
            }
            ConfigError::MissingKey(key) => write!(f, "missing mandatory key {key}"),
            ConfigError::OutOfBounds { key, value } => {
                write!(f, "{key}={},{} is out of the grid", value.0, value.1)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

fn parse_int(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.trim().to_string(),
    })
}

fn parse_pair(key: &'static str, value: &str) -> Result<(u16, u16), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key,
        value: value.trim().to_string(),
    };
    let (x, y) = value.trim().split_once(',').ok_or_else(invalid)?;
    Ok((
        x.trim().parse::<u16>().map_err(|_| invalid())?,
        y.trim().parse::<u16>().map_err(|_| invalid())?,
    ))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            value: other.to_string(),
        }),
    }
}

/// Parse and validate a config file.
///
/// Blank lines and lines starting with `#` are skipped. `WIDTH`, `HEIGHT`,
/// `ENTRY` and `EXIT` are mandatory; `ALGORITHM` defaults to DFS, `PERFECT`
/// to True and `ANIMATIONS` to True. A later line overrides an earlier one.
pub fn parse_config(path: &Path) -> Result<MazeConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_config_str(&contents)
}

fn parse_config_str(contents: &str) -> Result<MazeConfig, ConfigError> {
    let mut width = None;
    let mut height = None;
    let mut entry = None;
    let mut exit = None;
    let mut algorithm = Algorithm::Dfs;
    let mut perfect = true;
    let mut animations = true;
    let mut output_file = None;
    let mut seed = None;

    for line in contents.lines() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .filter(|(k, v)| !k.is_empty() && !v.is_empty() && !v.contains('='))
            .ok_or_else(|| ConfigError::InvalidLine(line.trim().to_string()))?;

        match key {
            "WIDTH" => width = Some(parse_int("WIDTH", value)?),
            "HEIGHT" => height = Some(parse_int("HEIGHT", value)?),
            "ENTRY" => entry = Some(parse_pair("ENTRY", value)?),
            "EXIT" => exit = Some(parse_pair("EXIT", value)?),
            "ALGORITHM" => {
                algorithm =
                    Algorithm::from_name(value).ok_or_else(|| ConfigError::InvalidValue {
                        key: "ALGORITHM",
                        value: value.trim().to_string(),
                    })?;
            }
            "PERFECT" => perfect = parse_bool("PERFECT", value)?,
            "ANIMATIONS" => animations = parse_bool("ANIMATIONS", value)?,
            "OUTPUT_FILE" => output_file = Some(PathBuf::from(value.trim())),
            "SEED" => {
                seed = Some(value.trim().parse::<u64>().map_err(|_| {
                    ConfigError::InvalidValue {
                        key: "SEED",
                        value: value.trim().to_string(),
                    }
                })?);
            }
            other => return Err(ConfigError::UnknownKey(other.trim().to_string())),
        }
    }

    let width = width.ok_or(ConfigError::MissingKey("WIDTH"))?;
    let height = height.ok_or(ConfigError::MissingKey("HEIGHT"))?;
    let entry = entry.ok_or(ConfigError::MissingKey("ENTRY"))?;
    let exit = exit.ok_or(ConfigError::MissingKey("EXIT"))?;

    if width == 0 {
        return Err(ConfigError::InvalidValue {
            key: "WIDTH",
            value: "0".to_string(),
        });
    }
    if height == 0 {
        return Err(ConfigError::InvalidValue {
            key: "HEIGHT",
            value: "0".to_string(),
        });
    }
    if entry.0 >= width || entry.1 >= height {
        return Err(ConfigError::OutOfBounds {
            key: "ENTRY",
            value: entry,
        });
    }
    if exit.0 >= width || exit.1 >= height {
        return Err(ConfigError::OutOfBounds {
            key: "EXIT",
            value: exit,
        });
    }

    Ok(MazeConfig {
        width,
        height,
        entry,
        exit,
        algorithm,
        perfect,
        animations,
        output_file,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
# maze setup
WIDTH=15
HEIGHT=11
ENTRY=0,0
EXIT=14,10
ALGORITHM=KRUSKAL
PERFECT=False
ANIMATIONS=False
OUTPUT_FILE=maze_output.txt
SEED=4242
";

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(VALID).unwrap();
        assert_eq!(config.width, 15);
        assert_eq!(config.height, 11);
        assert_eq!(config.entry, (0, 0));
        assert_eq!(config.exit, (14, 10));
        assert_eq!(config.algorithm, Algorithm::Kruskal);
        assert!(!config.perfect);
        assert!(!config.animations);
        assert_eq!(config.output_file, Some(PathBuf::from("maze_output.txt")));
        assert_eq!(config.seed, Some(4242));
    }

    #[test]
    fn test_defaults() {
        let config = parse_config_str("WIDTH=5\nHEIGHT=5\nENTRY=0,0\nEXIT=4,4\n").unwrap();
        assert_eq!(config.algorithm, Algorithm::Dfs);
        assert!(config.perfect);
        assert!(config.animations);
        assert_eq!(config.output_file, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let config =
            parse_config_str("# hello\n\nWIDTH=5\nHEIGHT=5\n# mid comment\nENTRY=0,0\nEXIT=4,4\n")
                .unwrap();
        assert_eq!(config.width, 5);
    }

    #[test]
    fn test_invalid_line_format() {
        let err = parse_config_str("WIDTH\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLine(_)));
        let err = parse_config_str("WIDTH=5=6\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLine(_)));
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_config_str("GUI=True\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(k) if k == "GUI"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            parse_config_str("WIDTH=abc\n").unwrap_err(),
            ConfigError::InvalidValue { key: "WIDTH", .. }
        ));
        assert!(matches!(
            parse_config_str("ENTRY=1\n").unwrap_err(),
            ConfigError::InvalidValue { key: "ENTRY", .. }
        ));
        assert!(matches!(
            parse_config_str("PERFECT=yes\n").unwrap_err(),
            ConfigError::InvalidValue { key: "PERFECT", .. }
        ));
        assert!(matches!(
            parse_config_str("ALGORITHM=PRIM\n").unwrap_err(),
            ConfigError::InvalidValue { key: "ALGORITHM", .. }
        ));
    }

    #[test]
    fn test_missing_mandatory_key() {
        let err = parse_config_str("WIDTH=5\nHEIGHT=5\nENTRY=0,0\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey("EXIT")));
    }

    #[test]
    fn test_parse_config_from_file() {
        let path = std::env::temp_dir().join("a_maze_ing_config_parse_test.txt");
        std::fs::write(&path, VALID).unwrap();
        let config = parse_config(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!((config.width, config.height), (15, 11));

        let err = parse_config(Path::new("no_such_config_file.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_entry_out_of_bounds() {
        let err = parse_config_str("WIDTH=5\nHEIGHT=5\nENTRY=5,0\nEXIT=4,4\n").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfBounds { key: "ENTRY", .. }));
        let err = parse_config_str("WIDTH=5\nHEIGHT=5\nENTRY=0,0\nEXIT=4,5\n").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfBounds { key: "EXIT", .. }));
    }
}
