use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use room_specs::Config;
use std::path::PathBuf;

/// Extracts tier-specific room records from a project brief workbook into JSON
#[derive(Parser, Debug)]
#[command(name = "room_specs", version, about)]
struct Args {
    /// Workbook to read [default: BRIEF.xlsx]
    input: Option<PathBuf>,

    /// Worksheet holding the room table, exact name or glob pattern [default: ROOM SPECIFICATIONS]
    #[arg(long)]
    sheet: Option<String>,

    /// Destination of the JSON document, `-` for standard output [default: src/rooms.json]
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Leading worksheet rows consumed as a column header [default: 1]
    #[arg(long)]
    header_rows: Option<usize>,

    /// Fail on error cells instead of reading them as blanks
    #[arg(long)]
    keep_errors: bool,

    /// JSON configuration file; command line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(sheet) = self.sheet {
            config.sheet_name = sheet;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(header_rows) = self.header_rows {
            config.header_rows = header_rows;
        }
        if self.keep_errors {
            config.error_as_null = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    log::debug!("Effective configuration: {:?}", config);

    room_specs::run(&config).with_context(|| format!("Failed to extract rooms from '{}'", config.input.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_flags() {
        let config = Args::parse_from(["room_specs"]).into_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sheet_name": "ROOMS", "header_rows": 2, "output": "out.json"}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = Args::parse_from(["room_specs", "brief.xlsx", "--config", &path, "--header-rows", "0", "--keep-errors"]);
        let config = args.into_config().unwrap();
        assert_eq!(config.input, PathBuf::from("brief.xlsx"));
        assert_eq!(config.sheet_name, "ROOMS");
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.header_rows, 0);
        assert!(!config.error_as_null);
    }

    #[test]
    fn stdout_output() {
        let config = Args::parse_from(["room_specs", "-o", "-", "--sheet", "ROOM*"]).into_config().unwrap();
        assert!(config.writes_to_stdout());
        assert_eq!(config.sheet_name, "ROOM*");
    }
}
