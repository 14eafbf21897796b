use redline::config::Config;
use redline::diff::{DiffPreview, DiffRow, SubDiffSpan};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (original_path, proposed_path) = match (args.next(), args.next()) {
        (Some(a), Some(b)) => (PathBuf::from(a), PathBuf::from(b)),
        _ => {
            eprintln!("Usage: redline <original> <proposed>");
            return ExitCode::FAILURE;
        }
    };

    let original = match std::fs::read_to_string(&original_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {:?}: {}", original_path, e);
            return ExitCode::FAILURE;
        }
    };
    let proposed = match std::fs::read_to_string(&proposed_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read {:?}: {}", proposed_path, e);
            return ExitCode::FAILURE;
        }
    };

    let preview = DiffPreview::compute(&original, &proposed);
    info!(
        added = preview.added_count,
        removed = preview.removed_count,
        "preview computed"
    );

    println!("+{} added, -{} removed", preview.added_count, preview.removed_count);
    println!();
    for row in preview.rows() {
        print_row(&row);
    }

    let mut config = Config::default();
    config.add_recent_document(original_path);
    config.add_recent_document(proposed_path);
    // Synchronous save: the process exits right after this
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save recent documents: {}", e);
    }

    ExitCode::SUCCESS
}

fn print_row(row: &DiffRow) {
    match row {
        DiffRow::Context {
            content,
            line_number,
        } => println!("  {:>4} | {}", line_number, content),
        DiffRow::Removed {
            content,
            line_number,
        } => println!("- {:>4} | {}", line_number, content),
        DiffRow::Added { content } => println!("+      | {}", content),
        DiffRow::Paired(pair) => {
            println!(
                "- {:>4} | {}",
                pair.removed_line_number,
                render_spans(&pair.removed_spans)
            );
            println!("+      | {}", render_spans(&pair.added_spans));
        }
        DiffRow::Elision => println!("   ... |"),
    }
}

/// Bracket the changed spans so paired lines show where the edit sits
fn render_spans(spans: &[SubDiffSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.changed {
                format!("[{}]", span.text)
            } else {
                span.text.clone()
            }
        })
        .collect()
}
