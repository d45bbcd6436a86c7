//! Pure rendering: `(snapshot, state, locale)` in, page description out.

use crate::i18n::{Locale, Text};
use crate::model::Client;
use crate::view::columns::{alphabetic_sort, Align, ColumnKey, SortDirection};
use crate::view::filter::{filter_rows, TableRow};
use crate::view::state::{Pagination, ViewState};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonIcon {
    Plus,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewButton {
    pub label: String,
    pub disabled: bool,
    pub icon: ButtonIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    pub placeholder: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub key: ColumnKey,
    /// Empty for the action column.
    pub title: String,
    pub width_percent: Option<u8>,
    pub sortable: bool,
    pub sort_order: Option<SortDirection>,
    pub align: Align,
    pub fixed_right: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<ColumnView>,
    /// Rows on the current page.
    pub rows: Vec<TableRow>,
    /// Rows left after filtering, across all pages.
    pub matched: usize,
    pub loading: bool,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPage {
    pub heading: String,
    pub new_button: NewButton,
    pub search: SearchBox,
    pub table: Table,
}

fn columns(state: &ViewState, locale: Locale) -> Vec<ColumnView> {
    ColumnKey::ALL
        .into_iter()
        .map(|key| ColumnView {
            key,
            title: key.title().map(|t| locale.t(t).to_owned()).unwrap_or_default(),
            width_percent: key.width_percent(),
            sortable: key.is_sortable(),
            sort_order: state
                .sort
                .filter(|order| order.column == key)
                .map(|order| order.direction),
            align: key.align(),
            fixed_right: key == ColumnKey::Action,
        })
        .collect()
}

/// Filtered and sorted rows, before pagination.
pub fn visible_rows(clients: &[Client], state: &ViewState) -> Vec<TableRow> {
    let mut rows = filter_rows(clients, state.search_term.as_deref());
    if let Some(order) = state.sort {
        let compare = alphabetic_sort(order);
        // sort_by is stable, so ties stay in source order.
        rows.sort_by(|a, b| compare(&a.record, &b.record));
    }
    rows
}

/// Describes the client list page.
///
/// Returns `None` while the collection has not been loaded yet, which is different
/// from an empty collection.
pub fn render(clients: Option<&[Client]>, state: &ViewState, locale: Locale) -> Option<ListPage> {
    let clients = clients?;
    let rows = visible_rows(clients, state);
    let matched = rows.len();
    let window = state.pagination.window(matched);
    let page_rows = rows
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();

    Some(ListPage {
        heading: locale.t(Text::Clients).to_owned(),
        new_button: NewButton {
            label: locale.t(Text::New).to_owned(),
            disabled: state.loading,
            icon: if state.loading {
                ButtonIcon::Loading
            } else {
                ButtonIcon::Plus
            },
        },
        search: SearchBox {
            placeholder: locale.t(Text::Search).to_owned(),
            value: state.search_term.clone(),
        },
        table: Table {
            columns: columns(state, locale),
            rows: page_rows,
            matched,
            loading: state.loading,
            pagination: state.pagination,
        },
    })
}
