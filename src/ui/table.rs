use eframe::egui;

use crate::pipeline::Analysis;

/// Direction for table column sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Timestamp,
    Voltage,
    MovingAverage,
}

impl TableColumn {
    pub const ALL: [TableColumn; 3] = [TableColumn::Timestamp, TableColumn::Voltage, TableColumn::MovingAverage];

    pub fn header(&self) -> &'static str {
        match self {
            TableColumn::Timestamp => "Timestamp",
            TableColumn::Voltage => "Voltage",
            TableColumn::MovingAverage => "MA_5Day",
        }
    }
}

/// Table sort state. `None` keeps the dataset's chronological order.
pub type TableSort = Option<(TableColumn, SortDirection)>;

/// Ascending, then descending, then back to original order.
pub fn cycle_sort(sort: TableSort, col: TableColumn) -> TableSort {
    match sort {
        Some((c, SortDirection::Ascending)) if c == col => Some((col, SortDirection::Descending)),
        Some((c, SortDirection::Descending)) if c == col => None,
        _ => Some((col, SortDirection::Ascending)),
    }
}

fn sort_key(analysis: &Analysis, col: TableColumn, row: usize) -> f64 {
    match col {
        TableColumn::Timestamp => analysis.dataset.readings()[row].unix_seconds(),
        TableColumn::Voltage => analysis.dataset.readings()[row].voltage,
        TableColumn::MovingAverage => analysis.moving_average[row],
    }
}

/// Row order for the table under the given sort. Ties keep chronological order.
pub fn sorted_rows(analysis: &Analysis, sort: TableSort) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..analysis.dataset.len()).collect();
    if let Some((col, dir)) = sort {
        indices.sort_by(|&a, &b| {
            let cmp = sort_key(analysis, col, a)
                .partial_cmp(&sort_key(analysis, col, b))
                .unwrap_or(std::cmp::Ordering::Equal);
            match dir {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }
    indices
}

/// Full data table including the derived moving-average column.
pub fn show_table_view(ui: &mut egui::Ui, analysis: &Analysis, sort: &mut TableSort) {
    if analysis.dataset.is_empty() {
        ui.label("No data loaded.");
        return;
    }

    use egui_extras::{Column, TableBuilder};

    let rows = sorted_rows(analysis, *sort);
    let readings = analysis.dataset.readings();
    let current_sort = *sort;
    let clicked_col: std::cell::Cell<Option<TableColumn>> = std::cell::Cell::new(None);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(120.0), TableColumn::ALL.len())
        .min_scrolled_height(300.0)
        .header(20.0, |mut header| {
            for col in TableColumn::ALL {
                header.col(|ui| {
                    let arrow = match current_sort {
                        Some((c, SortDirection::Ascending)) if c == col => " ^",
                        Some((c, SortDirection::Descending)) if c == col => " v",
                        _ => "",
                    };
                    if ui.button(format!("{}{arrow}", col.header())).clicked() {
                        clicked_col.set(Some(col));
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let idx = rows[row.index()];
                let reading = &readings[idx];
                row.col(|ui| {
                    ui.label(reading.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.3}", reading.voltage));
                });
                row.col(|ui| {
                    ui.label(format!("{:.3}", analysis.moving_average[idx]));
                });
            });
        });

    if let Some(col) = clicked_col.get() {
        *sort = cycle_sort(*sort, col);
    }
}
