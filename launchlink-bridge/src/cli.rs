use clap::Parser;

/// Bridges on-chain launch commands to the robot's motion controller.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the bridge configuration YAML file.
    pub config: String,
}
