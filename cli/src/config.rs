use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = "Keep a task list on a /api/todos server", version)]
pub struct Cli {
    /// Server the /api/todos collection lives on
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    /// Delete without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}
