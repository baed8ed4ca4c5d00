/// Implements [`ports::Record`] for an entity view carrying `id` and
/// `deleted_at` fields.
macro_rules! record {
    (
        $ty:ty => $entity:ident
        $(, upload: $field:ident)?
        $(, cascades: [$($child:ident),* $(,)?])? $(,)?
    ) => {
        impl $crate::domain::ports::Record for $ty {
            const ENTITY: $crate::domain::errors::Entity = $crate::domain::errors::Entity::$entity;
            $(
                const CASCADES: &'static [$crate::domain::errors::Entity] =
                    &[$($crate::domain::errors::Entity::$child),*];
            )?

            fn id(&self) -> i32 {
                self.id
            }

            fn deleted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.deleted_at
            }

            $(
                fn upload(&self) -> Option<&str> {
                    $crate::domain::UploadField::as_upload(&self.$field)
                }
            )?
        }
    };
}

pub mod account;
pub mod catalog;
pub mod errors;
pub mod merchant;
pub mod order;
pub mod pagination;
pub mod payment;
pub mod ports;
pub mod review;
pub mod stats;
pub mod transaction;
pub mod validation;

/// Field types that may hold the path of an uploaded file.
pub(crate) trait UploadField {
    fn as_upload(&self) -> Option<&str>;
}

impl UploadField for String {
    fn as_upload(&self) -> Option<&str> {
        Some(self.as_str()).filter(|path| !path.is_empty())
    }
}

impl UploadField for Option<String> {
    fn as_upload(&self) -> Option<&str> {
        self.as_deref().filter(|path| !path.is_empty())
    }
}
