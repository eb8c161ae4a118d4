//! Command-line argument parsing for the terminal runner.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use mark_match::types::{INITIAL_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Pattern set file; built-in defaults when absent.
    pub pattern_file: Option<PathBuf>,
    /// Initial grid size.
    pub size: i32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pattern_file: None,
            size: INITIAL_GRID_SIZE,
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--patterns" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --patterns"))?;
                config.pattern_file = Some(PathBuf::from(v));
            }
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                let size = v
                    .parse::<i32>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
                if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
                    return Err(anyhow!(
                        "--size must be between {} and {}, got {}",
                        MIN_GRID_SIZE,
                        MAX_GRID_SIZE,
                        size
                    ));
                }
                config.size = size;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_uses_defaults() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.size, INITIAL_GRID_SIZE);
    }

    #[test]
    fn parse_args_reads_size_and_patterns() {
        let args = vec![
            "--size".to_string(),
            "8".to_string(),
            "--patterns".to_string(),
            "shapes.json".to_string(),
        ];
        let config = parse_args(&args).unwrap();
        assert_eq!(config.size, 8);
        assert_eq!(config.pattern_file, Some(PathBuf::from("shapes.json")));
    }

    #[test]
    fn parse_args_rejects_bad_input() {
        assert!(parse_args(&["--size".to_string()]).is_err());
        assert!(parse_args(&["--size".to_string(), "zero".to_string()]).is_err());
        assert!(parse_args(&["--size".to_string(), "0".to_string()]).is_err());
        assert!(parse_args(&["--size".to_string(), "99".to_string()]).is_err());
        assert!(parse_args(&["--bogus".to_string()]).is_err());
    }
}
