use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use reedline::{
    FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus,
    Reedline, Signal,
};
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use csv_query::command_interpreter::{CommandInterpreter, CommandOutcome};
use csv_query::config::config::Config;
use csv_query::data::csv_loader::CsvLoader;
use csv_query::data::datatable::Table;
use csv_query::utils::app_paths::AppPaths;
use csv_query::utils::logging::init_tracing;

/// Infer column types from a CSV file and query it by column value
#[derive(Parser, Debug)]
#[command(name = "csv-query")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file to load ("-" reads standard input)
    #[arg(required_unless_present = "generate_config")]
    file: Option<PathBuf>,

    /// Run a command and exit instead of starting the prompt (repeatable)
    #[arg(short, long = "command", value_name = "CMD")]
    commands: Vec<String>,

    /// Log level for stderr output (overrides the config file)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    generate_config: bool,
}

struct CsvPrompt;

impl Prompt for CsvPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("csv")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse search: {})",
            prefix, history_search.term
        ))
    }
}

/// Prints command results, colouring diagnostics when enabled
struct Printer {
    use_colors: bool,
}

impl Printer {
    /// Returns false when the session should end
    fn print(&self, outcome: CommandOutcome) -> bool {
        match outcome {
            CommandOutcome::Output(text) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
                true
            }
            CommandOutcome::Diagnostic(text) => {
                if self.use_colors {
                    eprintln!("{}", text.red());
                } else {
                    eprintln!("{}", text);
                }
                true
            }
            CommandOutcome::Quit => false,
        }
    }

    fn banner(&self, text: &str) {
        if self.use_colors {
            println!("{}", text.cyan());
        } else {
            println!("{}", text);
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn generate_config(cli: &Cli) -> Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating config directory {}", parent.display()))?;
    }
    std::fs::write(&path, Config::create_default_with_comments())
        .with_context(|| format!("Error writing config file {}", path.display()))?;
    println!("Configuration file created at: {}", path.display());
    Ok(())
}

fn load_table(file: &Path) -> Result<Table> {
    if file.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read standard input")?;
        CsvLoader::load_str(&contents).context("Failed to build table from standard input")
    } else {
        CsvLoader::load_file(file)
    }
}

fn build_line_editor(config: &Config) -> Reedline {
    let line_editor = Reedline::create();
    if !config.behavior.enable_history {
        return line_editor;
    }

    let history = AppPaths::history_file().and_then(|path| {
        FileBackedHistory::with_file(config.behavior.max_history_entries, path)
            .map_err(|e| anyhow::anyhow!("{}", e))
    });

    match history {
        Ok(history) => line_editor.with_history(Box::new(history)),
        Err(e) => {
            warn!("History disabled: {}", e);
            line_editor
        }
    }
}

fn run_interactive(
    interpreter: &CommandInterpreter,
    config: &Config,
    printer: &Printer,
) -> Result<()> {
    let table = interpreter.table();
    printer.banner(&format!(
        "Loaded {} rows, {} columns. Type \"help\" for commands.",
        table.row_count(),
        table.column_count()
    ));

    let mut line_editor = build_line_editor(config);
    let prompt = CsvPrompt;

    loop {
        match line_editor.read_line(&prompt)? {
            Signal::Success(buffer) => {
                if !printer.print(interpreter.execute(&buffer)) {
                    break;
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!();
                break;
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        return generate_config(&cli);
    }

    // Logging is not up yet, so hold on to a config error and report it after
    let (config, config_error) = match load_config(&cli) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_buffer = init_tracing(level)?;
    if let Some(e) = config_error {
        warn!("Using default configuration: {:#}", e);
    }

    let printer = Printer {
        use_colors: config.display.use_colors && !cli.no_color,
    };

    let file = cli.file.as_deref().context("A CSV file is required")?;

    let table = load_table(file)?;
    info!("Session started for {}", file.display());
    let interpreter = CommandInterpreter::new(table).with_log_buffer(log_buffer);

    if cli.commands.is_empty() {
        run_interactive(&interpreter, &config, &printer)
    } else {
        for command in &cli.commands {
            if !printer.print(interpreter.execute(command)) {
                break;
            }
        }
        Ok(())
    }
}
