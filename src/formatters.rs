use crate::models::{AtkItem, InventoryStats};

pub const EMPTY_LIST_MESSAGE: &str = "Belum ada data ATK. Silakan tambah item baru.";

const HEADERS: [&str; 4] = ["ID", "Nama ATK", "Jenis", "Jumlah Stok"];

fn stock_cell(item: &AtkItem) -> String {
    format!("{} pcs ({})", item.quantity, item.stock_level().label())
}

/// Plain-text table of the inventory, columns padded to the widest cell.
pub fn format_item_table(items: &[AtkItem]) -> String {
    if items.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }

    let rows: Vec<[String; 4]> = items
        .iter()
        .map(|item| {
            [
                item.id.to_string(),
                item.name.clone(),
                item.category.clone(),
                stock_cell(item),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let render = |cells: &[String; 4], output: &mut String| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');
    };

    render(&HEADERS.map(str::to_string), &mut output);
    let separator = widths.map(|w| "-".repeat(w));
    render(&separator, &mut output);
    for row in &rows {
        render(row, &mut output);
    }
    output
}

pub fn format_statistics(stats: &InventoryStats) -> String {
    format!(
        "Total Item ATK: {}\nTotal Stok: {}\nJenis ATK: {}\n",
        stats.total_items, stats.total_stock, stats.distinct_categories
    )
}
