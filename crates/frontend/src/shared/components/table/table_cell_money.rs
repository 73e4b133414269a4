//! Right-aligned table cell for rupee amounts.
//!
//! ```rust,ignore
//! <TableCellMoney value=txn.amount />
//! <TableCellMoney value=total bold=true />
//! ```

use contracts::domain::common::Money;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    value: Money,
    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let style = if bold { "font-weight: 600" } else { "" };
    view! {
        <TableCell class="text-right">
            <span style=style>{value.format_inr()}</span>
        </TableCell>
    }
}
