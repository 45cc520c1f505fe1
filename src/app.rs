use crate::command_processor::{CommandProcessor, Context, Response};
use crate::config::Config;
use crate::storage::Storage;
use crate::task_list::TaskList;
use crate::ui;
use anyhow::{Context as _, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const PROMPT: &str = "> ";

/// One session: the task list in memory, its backing file, and the dispatcher
pub struct Application {
    command_processor: CommandProcessor,
    storage: Storage,
    ctx: Context,
    /// Shown once before the first prompt when loading went wrong
    startup_notice: Option<String>,
}

impl Application {
    pub fn new(config: &Config, data_file: Option<PathBuf>) -> Result<Self> {
        let working_hours = config.schedule.working_hours()?;
        let storage = Storage::new(data_file.unwrap_or_else(|| config.data_file()));
        log::debug!("Using task file {}", storage.path().display());

        let (tasks, startup_notice) = match storage.load() {
            Ok(report) => {
                for skipped in &report.skipped {
                    log::warn!("Ignored stored line {}: {:?} ({})", skipped.line_number, skipped.content, skipped.reason);
                }
                (report.tasks, None)
            }
            Err(e) => {
                log::error!("Failed to load tasks: {:?}", e);
                (TaskList::new(), Some(format!("{e}. Starting with an empty list.")))
            }
        };

        Ok(Self {
            command_processor: CommandProcessor::new(),
            storage,
            ctx: Context::new(tasks, working_hours),
            startup_notice,
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.ctx.tasks
    }

    /// Process one line and persist the list if it changed. A failed save is
    /// reported in the response, never as an error.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let mut response = self.command_processor.process(line, &mut self.ctx);
        if response.modified {
            if let Err(e) = self.storage.save(&self.ctx.tasks) {
                log::error!("Failed to save tasks: {:?}", e);
                response.lines.push(format!(" OOPS!!! Your change was not saved: {e}"));
            }
        }
        response
    }

    /// Run a single command without entering the interactive loop
    pub fn run_once(&mut self, line: &str) -> Result<()> {
        self.show_startup_notice()?;
        let response = self.handle_line(line);
        ui::show(&ui::render(&response))?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<()> {
        log::info!("Starting Taskmate with {} tasks", self.ctx.tasks.len());
        let mut rl = DefaultEditor::new().context("Failed to start line editor")?;

        ui::show(&ui::welcome())?;
        self.show_startup_notice()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    remember(&mut rl, &line);
                    let response = self.handle_line(&line);
                    ui::show(&ui::render(&response))?;
                    if response.exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    log::debug!("Input closed");
                    break;
                }
                Err(err) => {
                    log::error!("Failed to read input: {:?}", err);
                    break;
                }
            }
        }

        ui::show(&ui::goodbye())?;
        log::info!("Session ended");
        Ok(())
    }

    fn show_startup_notice(&mut self) -> Result<()> {
        if let Some(notice) = self.startup_notice.take() {
            ui::show(&ui::warning(&notice))?;
        }
        Ok(())
    }
}

/// Add a non-blank line to the editor history
fn remember(rl: &mut DefaultEditor, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(err) = rl.add_history_entry(line) {
        log::debug!("Failed to record history: {:?}", err);
    }
}
