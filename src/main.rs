use clap::Parser;
use std::process;
use studentfiles::{
    Cli, FileManager, OutputFormatter, OutputMode, RunOptions, StdinPrompter, StudentFilesError,
    UserFriendlyError,
};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let manager = match FileManager::from_cli(&cli) {
        Ok(manager) => manager,
        Err(e) => {
            print_startup_error(&e);
            return 2;
        }
    };

    let options = RunOptions {
        preset_names: cli.names.clone(),
        skip_delete: cli.skip_delete,
    };
    let mut prompter = StdinPrompter;

    match manager.run(&mut prompter, &options) {
        // A post-initialization failure aborts the remaining stages but is
        // not a process failure; only the workspace itself is fatal.
        Ok(_) => 0,
        Err(e) => {
            manager.handle_error(&e);
            match e {
                StudentFilesError::Workspace { .. } => 1,
                StudentFilesError::Config { .. } => 2,
                _ => 1,
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "studentfiles.toml".to_string());

    match FileManager::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  studentfiles --config {}", config_path);
            println!("\nEdit the file to customize folder and report settings.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &StudentFilesError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli::parse_from([
            "studentfiles",
            "--generate-config",
            "--config",
            config_path.to_str().unwrap(),
        ]);

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(config_path.exists());

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[workspace]"));
    }

    #[test]
    fn test_generate_config_failure_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("no_such_dir").join("test.toml");

        let cli = Cli::parse_from([
            "studentfiles",
            "--generate-config",
            "--config",
            config_path.to_str().unwrap(),
        ]);

        assert_eq!(handle_generate_config(&cli), 1);
    }
}
