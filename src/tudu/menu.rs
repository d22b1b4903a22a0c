//! Interactive numbered menu over one live store and undo manager.
//!
//! The one-shot CLI discards its store when the process exits, so the menu
//! is where undo (and most of the filter surface) actually gets used.

use std::io::Write;

use console::Term;
use tudu::dates::parse_due_date;
use tudu::error::{Result, TuduError};
use tudu::model::Priority;
use tudu::query::{CategoryFilter, FilterCriteria, QueryService};
use tudu::stats::StatsService;
use tudu::store::TodoStore;
use tudu::undo::{ActionKind, UndoManager};

use crate::print::{print_error, print_info, print_stats, print_success, print_todos, print_warning};

pub fn run() -> Result<()> {
    let term = Term::stdout();
    let mut store = TodoStore::new();
    let mut undo = UndoManager::new();

    println!("=== Tudu - Interactive Menu ===");
    print_info("Todos live in memory only; quitting discards them.");

    loop {
        print_menu(&undo);
        let Some(line) = read_line(&term) else {
            // Stdin closed; treat like quit.
            return Ok(());
        };

        let result = match line.trim() {
            "1" => add_workflow(&term, &mut store, &mut undo),
            "2" => {
                print_todos(&store.list_all());
                Ok(())
            }
            "3" => complete_workflow(&term, &mut store, &mut undo),
            "4" => update_workflow(&term, &mut store, &mut undo),
            "5" => delete_workflow(&term, &mut store, &mut undo),
            "6" => search_workflow(&term, &store),
            "7" => filter_workflow(&term, &store),
            "8" => {
                stats_workflow(&store);
                Ok(())
            }
            "9" => undo_workflow(&term, &mut store, &mut undo),
            "0" | "q" | "quit" | "exit" => {
                println!("Goodbye!");
                return Ok(());
            }
            other => Err(TuduError::InvalidInput(format!(
                "Please enter a number between 0 and 9. Got: {other}"
            ))),
        };

        if let Err(e) = result {
            print_error(&e.to_string());
        }
    }
}

fn print_menu(undo: &UndoManager) {
    println!("\n1. Add todo");
    println!("2. List all todos");
    println!("3. Complete todo");
    println!("4. Update todo");
    println!("5. Delete todo");
    println!("6. Search todos");
    println!("7. Filter todos");
    println!("8. Statistics");
    match undo.undo_description() {
        Some(description) => println!("9. Undo ({description})"),
        None => println!("9. Undo"),
    }
    println!("0. Quit");
}

fn read_line(term: &Term) -> Option<String> {
    term.read_line().ok()
}

fn prompt(term: &Term, message: &str) -> Option<String> {
    print!("{message} ");
    let _ = std::io::stdout().flush();
    read_line(term)
}

fn prompt_id(term: &Term, message: &str) -> Result<u32> {
    let line = prompt(term, message)
        .ok_or_else(|| TuduError::InvalidInput("No input".into()))?;
    line.trim()
        .parse()
        .map_err(|_| TuduError::InvalidInput(format!("ID must be a number. Got: {}", line.trim())))
}

fn add_workflow(term: &Term, store: &mut TodoStore, undo: &mut UndoManager) -> Result<()> {
    let Some(title) = prompt(term, "Title:") else {
        return Ok(());
    };

    undo.record_action(ActionKind::Add, store.next_id(), store);
    let todo = store.add(&title)?;
    let id = todo.id;

    if let Some(input) = prompt(term, "Priority (High/Medium/Low, blank to skip):") {
        let input = input.trim();
        if !input.is_empty() {
            match input.parse::<Priority>() {
                Ok(priority) => {
                    store.set_priority(id, Some(priority))?;
                }
                Err(e) => print_warning(&format!("{e}. Skipping priority.")),
            }
        }
    }

    if let Some(input) = prompt(term, "Due date (e.g. 'tomorrow', '2025-12-31', blank to skip):") {
        let input = input.trim();
        if !input.is_empty() {
            match parse_due_date(input) {
                Ok(due) => {
                    store.set_due_date(id, Some(due))?;
                }
                Err(e) => print_warning(&format!("{e}. Skipping due date.")),
            }
        }
    }

    if let Some(input) = prompt(term, "Category (blank to skip):") {
        let input = input.trim();
        if !input.is_empty() {
            store.set_category(id, Some(input.to_string()))?;
        }
    }

    if let Some(input) = prompt(term, "Tags (comma-separated, blank to skip):") {
        let tags: Vec<String> = input
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if !tags.is_empty() {
            store.set_tags(id, tags)?;
        }
    }

    print_success(&format!("Added '{}' (ID: {})", store.get(id)?.title, id));
    Ok(())
}

fn complete_workflow(term: &Term, store: &mut TodoStore, undo: &mut UndoManager) -> Result<()> {
    let id = prompt_id(term, "ID to complete:")?;
    undo.record_action(ActionKind::Complete, id, store);
    let todo = store.complete(id)?;
    print_success(&format!("Completed '{}' (ID: {})", todo.title, id));
    Ok(())
}

fn update_workflow(term: &Term, store: &mut TodoStore, undo: &mut UndoManager) -> Result<()> {
    let id = prompt_id(term, "ID to update:")?;
    let Some(title) = prompt(term, "New title:") else {
        return Ok(());
    };
    undo.record_action(ActionKind::Update, id, store);
    let todo = store.update(id, &title)?;
    print_success(&format!("Updated '{}' (ID: {})", todo.title, id));
    Ok(())
}

fn delete_workflow(term: &Term, store: &mut TodoStore, undo: &mut UndoManager) -> Result<()> {
    let id = prompt_id(term, "ID to delete:")?;
    undo.record_action(ActionKind::Delete, id, store);
    store.delete(id)?;
    print_success(&format!("Deleted todo (ID: {id})"));
    Ok(())
}

fn search_workflow(term: &Term, store: &TodoStore) -> Result<()> {
    let Some(query) = prompt(term, "Search for:") else {
        return Ok(());
    };
    let hits = QueryService::new(store).search(&query)?;
    print_todos(&hits);
    Ok(())
}

/// Build a combined filter from one prompt per criterion; blank skips.
fn filter_workflow(term: &Term, store: &TodoStore) -> Result<()> {
    let mut criteria = FilterCriteria::default();

    if let Some(input) = prompt(term, "Status (completed/incomplete/all, blank to skip):") {
        if !input.trim().is_empty() {
            criteria.status = Some(input.parse()?);
        }
    }
    if let Some(input) = prompt(term, "Priority (High/Medium/Low/None, blank to skip):") {
        if !input.trim().is_empty() {
            criteria.priority = Some(input.parse()?);
        }
    }
    if let Some(input) = prompt(term, "Category ('none' for uncategorized, blank to skip):") {
        let input = input.trim();
        if !input.is_empty() {
            criteria.category = Some(if input.eq_ignore_ascii_case("none") {
                CategoryFilter::Uncategorized
            } else {
                CategoryFilter::Named(input.to_string())
            });
        }
    }
    if let Some(input) = prompt(term, "Tag (blank to skip):") {
        let input = input.trim();
        if !input.is_empty() {
            criteria.tag = Some(input.to_string());
        }
    }
    if let Some(input) = prompt(term, "Due range (overdue/today/week/month/none, blank to skip):") {
        if !input.trim().is_empty() {
            criteria.due_range = Some(input.parse()?);
        }
    }

    print_todos(&QueryService::new(store).apply_combined_filters(&criteria));
    Ok(())
}

fn stats_workflow(store: &TodoStore) {
    let stats = StatsService::new(store);
    print_stats(
        &stats.completion_stats(),
        &stats.priority_breakdown(),
        &stats.category_breakdown(),
        stats.overdue_count(),
    );
}

fn undo_workflow(term: &Term, store: &mut TodoStore, undo: &mut UndoManager) -> Result<()> {
    let Some(description) = undo.undo_description() else {
        print_warning("No action to undo");
        return Ok(());
    };

    println!("{description}");
    if let Some(answer) = prompt(term, "Undo this action? (y/n):") {
        if answer.trim().eq_ignore_ascii_case("y") {
            let message = undo.undo(store)?;
            print_success(&message);
        } else {
            print_info("Undo cancelled");
        }
    }
    Ok(())
}
