//! Command-line arguments of the `tui-merge` binary.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: tui-merge [OPTIONS]

options:
  --config PATH   session config (JSON); defaults apply when missing
  --save PATH     save file to resume from and write on quit [tui-merge-save.json]
  --scores PATH   high score table [tui-merge-scores.json]
  --log PATH      log file [tui-merge.log]
  --seed N        spawn seed; random when omitted
  --name NAME     name recorded with high scores [$USER]
  -h, --help      print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub save: PathBuf,
    pub scores: PathBuf,
    pub log: PathBuf,
    pub seed: Option<u32>,
    pub name: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            save: PathBuf::from("tui-merge-save.json"),
            scores: PathBuf::from("tui-merge-scores.json"),
            log: PathBuf::from("tui-merge.log"),
            seed: None,
            name: std::env::var("USER").unwrap_or_else(|_| String::from("player")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(CliArgs),
    Help,
}

type Setter = fn(&mut CliArgs, &str) -> Result<()>;

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut cli = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        if flag == "-h" || flag == "--help" {
            return Ok(Command::Help);
        }

        let set: Setter = match flag {
            "--config" => |cli, value| {
                cli.config = Some(PathBuf::from(value));
                Ok(())
            },
            "--save" => |cli, value| {
                cli.save = PathBuf::from(value);
                Ok(())
            },
            "--scores" => |cli, value| {
                cli.scores = PathBuf::from(value);
                Ok(())
            },
            "--log" => |cli, value| {
                cli.log = PathBuf::from(value);
                Ok(())
            },
            "--seed" => |cli, value| {
                let seed = value
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", value))?;
                cli.seed = Some(seed);
                Ok(())
            },
            "--name" => |cli, value| {
                cli.name = value.to_string();
                Ok(())
            },
            other => return Err(anyhow!("unknown argument: {}", other)),
        };

        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("missing value for {}", flag))?;
        set(&mut cli, value)?;
        i += 1;
    }

    Ok(Command::Play(cli))
}
