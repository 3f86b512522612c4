use chrono::{DateTime, Utc};
use colored::Colorize;
use rolo::api::{CmdMessage, HistorySnapshot, MessageLevel};
use rolo::config::{DatabaseSettings, RoloConfig};
use rolo::index::SearchHit;
use rolo::model::{Operation, OperationKind};
use rolo::session::View;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const TIME_WIDTH: usize = 16;

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

pub(super) fn print_warning(content: &str) {
    println!("{}", content.yellow());
}

pub(super) fn print_view(view: &View) {
    if !view.title.is_empty() {
        println!("{}", view.title.bold());
    }
    if view.contacts.is_empty() {
        println!("No contacts.");
    }
    for (index, name) in &view.contacts {
        println!("{:>4}. {}", index.to_string().yellow(), name);
    }
    println!(
        "{}",
        format!(
            "undo: {}  redo: {}",
            on_off(view.can_undo),
            on_off(view.can_redo)
        )
        .dimmed()
    );
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

pub(super) fn print_hits(hits: &[SearchHit]) {
    for hit in hits {
        println!("{:>4}. {}", hit.index.to_string().yellow(), hit.name);
    }
}

pub(super) fn print_matches(matches: &[String]) {
    for name in matches {
        println!("    {}", name);
    }
}

pub(super) fn print_history(history: &HistorySnapshot) {
    print_history_section("Undo (next first):", &history.undo);
    print_history_section("Redo (next first):", &history.redo);
}

fn print_history_section(heading: &str, ops: &[Operation]) {
    println!("{}", heading.bold());
    if ops.is_empty() {
        println!("    {}", "(empty)".dimmed());
        return;
    }
    for op in ops {
        println!("{}", format_operation_line(op, Utc::now()));
    }
}

fn format_operation_line(op: &Operation, now: DateTime<Utc>) -> String {
    let kind = match op.kind {
        OperationKind::Add => format!("{:<7}", op.kind.to_string()).green(),
        OperationKind::Delete => format!("{:<7}", op.kind.to_string()).red(),
    };
    let detail = format!("\"{}\" at {}", op.name, op.index);

    let fixed_width = 4 + 7 + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let detail = truncate_to_width(&detail, available);
    let padding = available.saturating_sub(detail.width());

    format!(
        "    {}{}{}{}",
        kind,
        detail,
        " ".repeat(padding),
        format_time_ago(op.recorded_at, now).dimmed()
    )
}

pub(super) fn print_config(config: &RoloConfig, database: Option<&DatabaseSettings>) {
    for key in RoloConfig::keys() {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
    }
    if let Some(db) = database {
        for (name, url) in db.redacted_urls() {
            println!("{} = {}", name, url.dimmed());
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

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
