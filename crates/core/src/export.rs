//! Build-sheet rows for the PDF export collaborator.
//!
//! The PDF renderer is an opaque consumer: it receives exactly the
//! ordered `(component, product, price)` rows produced here plus the
//! grand-total row, and nothing else.

use serde::Serialize;

use crate::builder::BuildSession;
use crate::catalog::PartCategory;
use crate::currency::format_idr;

/// Placeholder shown in product and price cells of an empty slot.
const EMPTY_CELL: &str = "-";

/// Product-cell label of the grand-total row.
const TOTAL_LABEL: &str = "Total Harga";

/// One row of the exported build sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    pub component: String,
    pub product: String,
    pub price: String,
}

/// Ordered rows for the export table: one per category in display order,
/// then the grand-total row.
pub fn sheet_rows(session: &BuildSession) -> Vec<SheetRow> {
    let mut rows: Vec<SheetRow> = PartCategory::ALL
        .iter()
        .map(|&category| match session.slot(category) {
            Some(part) => SheetRow {
                component: category.as_str().to_string(),
                product: part.name.clone(),
                price: format_idr(part.price),
            },
            None => SheetRow {
                component: category.as_str().to_string(),
                product: EMPTY_CELL.to_string(),
                price: EMPTY_CELL.to_string(),
            },
        })
        .collect();

    rows.push(SheetRow {
        component: String::new(),
        product: TOTAL_LABEL.to_string(),
        price: format_idr(session.total_price()),
    });

    rows
}
