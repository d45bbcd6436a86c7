//! Table columns and the alphabetic comparator behind every sortable column.

use crate::i18n::Text;
use crate::model::Client;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    Name,
    Email,
    Phone,
    /// Edit link column. Carries no data.
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascend,
    Descend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOrder {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
}

impl ColumnKey {
    /// Columns in display order.
    pub const ALL: [ColumnKey; 4] = [
        ColumnKey::Name,
        ColumnKey::Email,
        ColumnKey::Phone,
        ColumnKey::Action,
    ];

    pub fn is_sortable(self) -> bool {
        self != ColumnKey::Action
    }

    /// The record field shown in this column.
    pub fn value(self, client: &Client) -> Option<&str> {
        match self {
            ColumnKey::Name => Some(&client.name),
            ColumnKey::Email => Some(&client.email),
            ColumnKey::Phone => Some(&client.phone),
            ColumnKey::Action => None,
        }
    }

    pub fn title(self) -> Option<Text> {
        match self {
            ColumnKey::Name => Some(Text::Name),
            ColumnKey::Email => Some(Text::Email),
            ColumnKey::Phone => Some(Text::Phone),
            ColumnKey::Action => None,
        }
    }

    pub fn width_percent(self) -> Option<u8> {
        match self {
            ColumnKey::Name => Some(40),
            ColumnKey::Email | ColumnKey::Phone => Some(30),
            ColumnKey::Action => None,
        }
    }

    pub fn align(self) -> Align {
        match self {
            ColumnKey::Action => Align::Center,
            _ => Align::Left,
        }
    }
}

fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Lowercase text with accents removed and ligatures spelled out.
fn folded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in lowercase(s) {
        match c {
            'æ' => out.push_str("ae"),
            'œ' => out.push_str("oe"),
            'ß' => out.push_str("ss"),
            other => out.push(base_letter(other)),
        }
    }
    out
}

/// Case-insensitive lexical comparison for Latin-script text.
///
/// Letters compare by base letter first, then by accent, then by case with
/// lowercase first, so `"émile"` sorts between `"Emile"` and `"Fabien"`. The
/// collation is fixed: every [`Locale`](crate::i18n::Locale) sorts the same way.
pub fn alphabetic_compare(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(&folded(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| b.cmp(a))
}

/// Comparator over clients for one column, in the requested direction.
pub fn alphabetic_sort(order: SortOrder) -> impl Fn(&Client, &Client) -> Ordering {
    move |a: &Client, b: &Client| {
        let ordering = match (order.column.value(a), order.column.value(b)) {
            (Some(a), Some(b)) => alphabetic_compare(a, b),
            _ => Ordering::Equal,
        };
        match order.direction {
            SortDirection::Ascend => ordering,
            SortDirection::Descend => ordering.reverse(),
        }
    }
}
