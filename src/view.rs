use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::{date, date_time, money, time};
use crate::model::Model;
use crate::models::Tag;

pub fn inventory_table(model: &Model) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Item", "Quantity", "Last update", "Time"]);
    for (i, record) in model.filtered_inventory().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&record.item_name),
            Cell::new(record.quantity),
            Cell::new(date(&record.date)),
            Cell::new(time(&record.time)),
        ]);
    }
    table
}

pub fn finance_table(model: &Model) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Amount", "At"]);
    for (i, record) in model.finance_account().iter().enumerate() {
        let amount = if record.amount < 0.0 {
            money(record.amount).red().to_string()
        } else {
            money(record.amount).green().to_string()
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(amount),
            Cell::new(record.date_time.as_ref().map(date_time).unwrap_or_default()),
        ]);
    }
    table
}

/// Inflow and outflow totals followed by the net profit.
pub fn net_profit_line(model: &Model) -> String {
    let account = model.finance_account();
    let inflow: f64 = account.filter_records(|r| r.amount > 0.0).iter().map(|r| r.amount).sum();
    let outflow: f64 = account.filter_records(|r| r.amount < 0.0).iter().map(|r| r.amount).sum();
    let net = account.net_profit();
    let amount = if net < 0.0 {
        money(net).red().bold()
    } else {
        money(net).green().bold()
    };
    format!(
        "In: {}  Out: {}  {} {amount}",
        money(inflow),
        money(outflow),
        "Net profit:".bold()
    )
}

pub fn person_table(model: &Model) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Phone", "Email", "Address", "Tags"]);
    for (i, person) in model.filtered_persons().iter().enumerate() {
        let tags: Vec<&str> = person.tags.iter().map(Tag::as_str).collect();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&person.name),
            Cell::new(&person.phone),
            Cell::new(&person.email),
            Cell::new(&person.address),
            Cell::new(tags.join(", ")),
        ]);
    }
    table
}
