use crate::api::models::Champion;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct NewChampionRow {
    id: String,
    name: String,
    title: String,
    skins: usize,
}

pub fn display_new_champions(champions: &[Champion]) {
    let rows: Vec<NewChampionRow> = champions
        .iter()
        .filter(|c| c.new)
        .map(|c| NewChampionRow {
            id: c.id.clone(),
            name: c.name.clone(),
            title: c.title.clone(),
            skins: c.skins.len(),
        })
        .collect();

    if rows.is_empty() {
        display_info("No new champions in this patch");
        return;
    }

    println!(
        "\n{}",
        format!("🆕 New champions ({})", rows.len()).bold().cyan()
    );

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
