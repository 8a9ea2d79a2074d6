//! The interactive command loop.

use crate::commands::Command;
use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::report::{ReportOptions, render_report};
use crate::search::SearchEngine;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

pub const BANNER: &str = "\
===================================
  SONNET SEARCH
  Type :help for commands
===================================";

pub const HELP: &str = "\
Commands:
  :help                      Show this help
  :highlight on|off          Toggle highlighting of matches
  :search-mode AND|OR        Require all terms (AND) or any term (OR)
  :hl-mode DEFAULT|GREEN     Choose the highlight colors
  :quit                      Exit
Anything else is searched for, one term per word.";

const PROMPT: &str = "> ";

/// What the loop should do after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// State carried across one interactive session.
#[derive(Debug)]
pub struct Session {
    corpus: Corpus,
    config: Config,
    /// Where settings are persisted; `None` keeps changes in memory only
    config_path: Option<PathBuf>,
}

impl Session {
    pub const fn new(corpus: Corpus, config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            corpus,
            config,
            config_path,
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Read lines from `input` until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush().context("Failed to flush output")?;

            line.clear();
            if input.read_line(&mut line).context("Failed to read input")? == 0 {
                writeln!(output, "\nBye.")?;
                return Ok(());
            }

            if self.handle_line(line.trim(), &mut output)? == Flow::Quit {
                writeln!(output, "Bye.")?;
                return Ok(());
            }
        }
    }

    fn handle_line<W: Write>(&mut self, raw: &str, output: &mut W) -> Result<Flow> {
        if raw.is_empty() {
            return Ok(Flow::Continue);
        }

        match Command::parse(raw) {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Set { setting, args } => {
                let [value] = args.as_slice() else {
                    writeln!(output, "{}", setting.usage())?;
                    return Ok(Flow::Continue);
                };
                match setting.apply(&mut self.config, value) {
                    Ok(message) => {
                        writeln!(output, "{}", message)?;
                        self.persist(output)?;
                    }
                    Err(e) => {
                        tracing::debug!("Rejected setting: {}", e);
                        writeln!(output, "{}", setting.usage())?;
                    }
                }
            }
            Command::Unknown { name, suggestion } => {
                tracing::debug!("Unknown command '{}'", name);
                write!(output, "Unknown command. Type :help for commands.")?;
                if let Some(suggestion) = suggestion {
                    write!(output, " Did you mean {}?", suggestion)?;
                }
                writeln!(output)?;
            }
            Command::Query(query) => self.run_query(query, output)?,
        }

        Ok(Flow::Continue)
    }

    fn run_query<W: Write>(&self, query: &str, output: &mut W) -> Result<()> {
        let start = Instant::now();
        let results = SearchEngine::new(&self.corpus).search(query, self.config.search_mode);
        let elapsed = start.elapsed();

        let options = ReportOptions {
            highlight: self.config.highlight,
            style: self.config.highlight_mode,
        };
        write!(output, "{}", render_report(query, &results, options, Some(elapsed)))?;
        Ok(())
    }

    /// Save the config, reporting but not propagating failures.
    fn persist<W: Write>(&self, output: &mut W) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };
        if let Err(e) = self.config.save(path) {
            tracing::warn!("Failed to save config: {:#}", e);
            writeln!(output, "Warning: settings could not be saved ({:#})", e)?;
        }
        Ok(())
    }
}
