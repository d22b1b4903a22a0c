use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tudu")]
#[command(about = "A fast, in-memory todo manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Emit JSON instead of styled output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    #[command(alias = "a")]
    Add {
        title: String,

        /// Priority: High, Medium, or Low
        #[arg(short, long)]
        priority: Option<String>,

        /// Due date: YYYY-MM-DD, MM/DD/YYYY, or 'tomorrow', 'next week', 'in 3 days'
        #[arg(short, long)]
        due: Option<String>,

        /// Category name
        #[arg(short, long)]
        category: Option<String>,

        /// Tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List todos, optionally filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Completion status: completed, incomplete, or all
        #[arg(long)]
        status: Option<String>,

        /// Priority level: High, Medium, Low, or None
        #[arg(long)]
        priority: Option<String>,

        /// Category name
        #[arg(long)]
        category: Option<String>,

        /// Tag (exact match)
        #[arg(long)]
        tag: Option<String>,

        /// Due range: overdue, today, week, month, or none
        #[arg(long)]
        due: Option<String>,

        /// Sort order: priority, due, created, or title
        #[arg(long)]
        sort: Option<String>,
    },

    /// Mark a todo as complete
    #[command(alias = "done")]
    Complete {
        id: u32,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        id: u32,
    },

    /// Replace a todo's title
    Update {
        id: u32,
        title: String,
    },

    /// Search todo titles (case-insensitive)
    Search {
        query: String,
    },

    /// Show completion, priority, and category statistics
    Stats,
}
