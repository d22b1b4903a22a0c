use clap::Parser;
use tudu::dates::parse_due_date;
use tudu::error::{Result, TuduError};
use tudu::model::Priority;
use tudu::query::{self, CategoryFilter, FilterCriteria, QueryService};
use tudu::stats::StatsService;
use tudu::store::TodoStore;

mod args;
mod menu;
mod print;

use args::{Cli, Commands};
use print::{print_error, print_stats, print_success, print_todos, print_todos_json};

fn main() {
    if let Err(e) = run() {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        // No subcommand: drop into the interactive menu.
        return menu::run();
    };

    // One-shot commands operate on a store that lives for this invocation
    // only; nothing is persisted.
    let mut store = TodoStore::new();

    match command {
        Commands::Add {
            title,
            priority,
            due,
            category,
            tags,
        } => handle_add(&mut store, &title, priority, due, category, tags, cli.json),
        Commands::List {
            status,
            priority,
            category,
            tag,
            due,
            sort,
        } => handle_list(&store, status, priority, category, tag, due, sort, cli.json),
        Commands::Complete { id } => {
            let todo = store.complete(id)?;
            print_success(&format!("Completed '{}' (ID: {})", todo.title, todo.id));
            Ok(())
        }
        Commands::Delete { id } => {
            store.delete(id)?;
            print_success(&format!("Deleted todo (ID: {id})"));
            Ok(())
        }
        Commands::Update { id, title } => {
            let todo = store.update(id, &title)?;
            print_success(&format!("Updated '{}' (ID: {})", todo.title, todo.id));
            Ok(())
        }
        Commands::Search { query } => {
            let hits = QueryService::new(&store).search(&query)?;
            if cli.json {
                print_todos_json(&hits);
            } else {
                print_todos(&hits);
            }
            Ok(())
        }
        Commands::Stats => {
            let stats = StatsService::new(&store);
            print_stats(
                &stats.completion_stats(),
                &stats.priority_breakdown(),
                &stats.category_breakdown(),
                stats.overdue_count(),
            );
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    store: &mut TodoStore,
    title: &str,
    priority: Option<String>,
    due: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    json: bool,
) -> Result<()> {
    let todo = store.add(title)?;
    let id = todo.id;

    if let Some(ref input) = priority {
        let priority: Priority = input.parse()?;
        store.set_priority(id, Some(priority))?;
    }
    if let Some(ref input) = due {
        let due = parse_due_date(input)?;
        store.set_due_date(id, Some(due))?;
    }
    if let Some(category) = category {
        store.set_category(id, Some(category))?;
    }
    if !tags.is_empty() {
        store.set_tags(id, tags)?;
    }

    let stored = store.get(id)?;
    if json {
        print_todos_json(std::slice::from_ref(stored));
    } else {
        print_success(&format!("Added '{}' (ID: {})", stored.title, id));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    store: &TodoStore,
    status: Option<String>,
    priority: Option<String>,
    category: Option<String>,
    tag: Option<String>,
    due: Option<String>,
    sort: Option<String>,
    json: bool,
) -> Result<()> {
    let mut criteria = FilterCriteria::default();
    if let Some(ref input) = status {
        criteria.status = Some(input.parse()?);
    }
    if let Some(ref input) = priority {
        criteria.priority = Some(input.parse()?);
    }
    if let Some(input) = category {
        criteria.category = Some(if input.eq_ignore_ascii_case("none") {
            CategoryFilter::Uncategorized
        } else {
            CategoryFilter::Named(input)
        });
    }
    if let Some(tag) = tag {
        criteria.tag = Some(tag);
    }
    if let Some(ref input) = due {
        criteria.due_range = Some(input.parse()?);
    }

    let todos = QueryService::new(store).apply_combined_filters(&criteria);
    let todos = match sort.as_deref() {
        None => todos,
        Some("priority") => query::sort_by_priority(&todos),
        Some("due") => query::sort_by_due_date(&todos),
        Some("created") => query::sort_by_created_date(&todos, false),
        Some("title") => query::sort_by_title(&todos),
        Some(other) => {
            return Err(TuduError::InvalidFilter(format!(
                "Sort must be one of priority, due, created, title. Got: {other}"
            )))
        }
    };

    if json {
        print_todos_json(&todos);
    } else {
        print_todos(&todos);
    }
    Ok(())
}
