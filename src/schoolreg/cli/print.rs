use chrono::{DateTime, Utc};
use colored::Colorize;
use school_registry::api::{CmdMessage, MessageLevel};
use school_registry::config::{RegistryConfig, CONFIG_KEYS};
use school_registry::directory::DirectoryView;
use school_registry::model::School;
use school_registry::validation::ValidationErrors;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const INDENT: &str = "     ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_validation_errors(errors: &ValidationErrors) {
    eprintln!("{}", "Please fix the following fields:".red().bold());
    for (field, message) in errors.iter() {
        eprintln!("  {:<10} {}", field.to_string().yellow(), message);
    }
}

pub(super) fn print_directory(directory: &DirectoryView, config: &RegistryConfig) {
    if directory.schools.is_empty() {
        println!("{}", directory.empty_message());
        if directory.view.narrows() {
            println!(
                "{}",
                "Clear filters (drop --search/--state) to see all schools.".dimmed()
            );
        }
    } else {
        for (i, school) in directory.schools.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_card(i + 1, school, config);
        }
        println!();
    }

    let summary = directory.summary();
    let mut chips = Vec::new();
    if !directory.view.query.is_empty() {
        chips.push(format!("Search: \"{}\"", directory.view.query));
    }
    if !directory.view.filter.is_all() {
        chips.push(format!("State: {}", directory.view.filter));
    }
    if directory.is_filtered() {
        chips.push(format!("Sort: {}", directory.view.sort.label()));
    }

    if chips.is_empty() {
        println!("{}", summary.dimmed());
    } else {
        println!("{}  {}", summary.dimmed(), chips.join("  ").cyan());
    }
}

fn print_card(position: usize, school: &School, config: &RegistryConfig) {
    let idx = format!("{:>3}. ", position);
    let badge = format!("[{}]", school.state);
    let available = LINE_WIDTH.saturating_sub(idx.width() + badge.width() + 1);
    let name = truncate_to_width(&school.name, available);
    let padding = available.saturating_sub(name.width());

    println!(
        "{}{}{} {}",
        idx.yellow(),
        name.bold(),
        " ".repeat(padding),
        badge.cyan()
    );

    let location = format!("{}, {}", school.address, school.city);
    let body_width = LINE_WIDTH.saturating_sub(INDENT.width());
    println!("{}{}", INDENT, truncate_to_width(&location, body_width));
    println!(
        "{}{}  {}",
        INDENT,
        school.contact,
        truncate_to_width(&school.email_id, body_width.saturating_sub(12)).underline()
    );

    let image = school
        .image
        .as_deref()
        .unwrap_or(config.placeholder_image.as_str());
    let registered = school.created_at.map(format_time_ago).unwrap_or_default();
    println!(
        "{}{}  {}",
        INDENT,
        format!("image: {}", image).dimmed(),
        registered.dimmed().italic()
    );
}

pub(super) fn print_error_message(content: &str) {
    eprintln!("{}", content.red());
}

pub(super) fn print_states(states: &[String]) {
    if states.is_empty() {
        println!("No schools available yet.");
        return;
    }
    for state in states {
        println!("{}", state);
    }
}

pub(super) fn print_config(config: &RegistryConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

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
    format!(
        "registered {}",
        formatter.convert(duration.to_std().unwrap_or_default())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("A High", 10), "A High");
    }

    #[test]
    fn truncate_marks_cut_with_ellipsis() {
        let out = truncate_to_width("Greenwood International", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        let out = truncate_to_width("学校学校学校", 5);
        assert!(out.width() <= 5);
    }

    #[test]
    fn time_ago_is_prefixed() {
        assert!(format_time_ago(Utc::now()).starts_with("registered "));
    }
}
