//! Terminal output for the binary: styled todo lists, statistics blocks,
//! and message levels. Layout math (widths, truncation, padding) is done
//! on plain strings; colors are applied at print time.

use chrono::{DateTime, Local, NaiveDate, Utc};
use colored::{ColoredString, Colorize};
use timeago::Formatter;
use tudu::model::{Priority, Todo};
use tudu::stats::{CompletionStats, PriorityBreakdown};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

pub fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub fn print_error(message: &str) {
    eprintln!("{}", format!("Error: {message}").red());
}

pub fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    let today = Local::now().date_naive();
    for todo in todos {
        print_todo_line(todo, today);
    }
}

fn print_todo_line(todo: &Todo, today: NaiveDate) {
    let idx_str = format!("{:>4}. ", todo.id);
    let checkbox = if todo.completed { "[x] " } else { "[ ] " };

    // Meta pieces carry their own colors; widths come from the plain text.
    let mut meta_plain = String::new();
    let mut meta_styled = String::new();
    if let Some(priority) = todo.priority {
        let text = format!("  ({priority})");
        meta_styled.push_str(&style_priority(&text, priority).to_string());
        meta_plain.push_str(&text);
    }
    if let Some(ref category) = todo.category {
        let text = format!("  @{category}");
        meta_styled.push_str(&text.cyan().to_string());
        meta_plain.push_str(&text);
    }
    for tag in &todo.tags {
        let text = format!("  #{tag}");
        meta_styled.push_str(&text.blue().to_string());
        meta_plain.push_str(&text);
    }
    if let Some(due) = todo.due_date {
        let text = format!("  due {due}");
        if due < today && !todo.completed {
            meta_styled.push_str(&text.red().to_string());
        } else {
            meta_styled.push_str(&text.normal().to_string());
        }
        meta_plain.push_str(&text);
    }

    let fixed_width = idx_str.width() + checkbox.width() + meta_plain.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let title = truncate_to_width(&todo.title, available);
    let padding = available.saturating_sub(title.width());

    let checkbox_styled: ColoredString = if todo.completed {
        checkbox.green()
    } else {
        checkbox.normal()
    };
    let title_styled: ColoredString = if todo.completed {
        title.strikethrough().dimmed()
    } else {
        title.normal()
    };

    println!(
        "{}{}{}{}{}{}",
        idx_str,
        checkbox_styled,
        title_styled,
        " ".repeat(padding),
        meta_styled,
        format_time_ago(todo.created_date).dimmed()
    );
}

pub fn print_todos_json(todos: &[Todo]) {
    match serde_json::to_string_pretty(todos) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&e.to_string()),
    }
}

pub fn print_stats(
    completion: &CompletionStats,
    priorities: &PriorityBreakdown,
    categories: &[(String, usize)],
    overdue: usize,
) {
    println!("{}", "Completion".bold());
    println!(
        "  {} total, {} completed, {} incomplete ({:.1}%)",
        completion.total, completion.completed, completion.incomplete, completion.percentage
    );

    println!("\n{}", "By priority".bold());
    println!("  {:<8} {}", "High", priorities.high);
    println!("  {:<8} {}", "Medium", priorities.medium);
    println!("  {:<8} {}", "Low", priorities.low);
    println!("  {:<8} {}", "None", priorities.none);

    println!("\n{}", "By category".bold());
    if categories.is_empty() {
        println!("  (no todos)");
    }
    for (name, count) in categories {
        println!("  {name:<20} {count}");
    }

    let overdue_line = format!("\nOverdue (incomplete): {overdue}");
    if overdue > 0 {
        println!("{}", overdue_line.red());
    } else {
        println!("{overdue_line}");
    }
}

fn style_priority(text: &str, priority: Priority) -> ColoredString {
    match priority {
        Priority::High => text.red(),
        Priority::Medium => text.yellow(),
        Priority::Low => text.green(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
