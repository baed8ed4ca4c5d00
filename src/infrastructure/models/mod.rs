//! Diesel row types. `*Row` structs are read back from a table and convert
//! into domain records; `*Values` structs are written on insert and update.

/// Field-for-field conversion from a row into its domain record.
macro_rules! row_into {
    ($row:ident => $record:ty { $($field:ident),+ $(,)? }) => {
        impl From<$row> for $record {
            fn from(row: $row) -> Self {
                Self {
                    $($field: row.$field,)+
                }
            }
        }
    };
}

/// Builds the values written for a request, stamping `updated_at`.
macro_rules! values_from {
    ($request:ty => $values:ident { $($field:ident),+ $(,)? }) => {
        impl From<&$request> for $values {
            fn from(request: &$request) -> Self {
                Self {
                    $($field: Clone::clone(&request.$field),)+
                    updated_at: chrono::Utc::now(),
                }
            }
        }
    };
}

pub mod account;
pub mod catalog;
pub mod merchant;
pub mod order;
pub mod review;
pub mod transaction;
