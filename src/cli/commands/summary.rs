use crate::core::session::Session;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::round2;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Handle the `daily-summary` command: today's entries, oldest first,
/// with the hour-equivalent total.
pub fn handle(session: &Session) {
    let today = date::today();
    let entries = match session.log_book().entries_for_date(today) {
        Ok(entries) => entries,
        Err(e) => {
            messages::error(e);
            return;
        }
    };

    if entries.is_empty() {
        messages::info("No entries for today.");
        return;
    }

    let desc_width = entries
        .iter()
        .map(|e| e.description.width())
        .max()
        .unwrap_or(0)
        .max("Description".len());

    let mut table = Table::new(vec![
        Column {
            header: "Description".to_string(),
            width: desc_width,
        },
        Column {
            header: "Time logged".to_string(),
            width: 14,
        },
    ]);

    let mut total_hours = 0.0;
    for entry in &entries {
        table.add_row(vec![
            entry.description.clone(),
            format!("{:.2} {}", entry.duration, entry.unit),
        ]);
        total_hours += entry.hours();
    }

    println!("\nToday's tasks ({}):\n", today);
    print!("{}", table.render());
    println!(
        "\nTotal time: {}",
        Colour::Green
            .bold()
            .paint(format!("{:.2} hours", round2(total_hours)))
    );
}
