/// Generates a Diesel-backed [`SoftDeleteRepository`] over one table.
///
/// `$row` must be `Selectable` for the table and convert into `$record`.
/// The writable form also takes the request type and a struct deriving both
/// `Insertable` and `AsChangeset` built from it, and implements
/// [`WritableRepository`]. Search columns must be non-nullable text; with
/// none listed the search term is ignored. `cascaded_uploads` names the
/// upload column of a child table whose rows are deleted along with a row.
///
/// [`SoftDeleteRepository`]: crate::domain::ports::SoftDeleteRepository
/// [`WritableRepository`]: crate::domain::ports::WritableRepository
macro_rules! soft_delete_repository {
    (@search $query:ident, $table:ident, $search:ident,) => {
        $query
    };
    (@search $query:ident, $table:ident, $search:ident, $first:ident $(, $rest:ident)*) => {{
        let pattern = format!("%{}%", $search);
        $query.filter(
            $crate::schema::$table::$first
                .ilike(pattern.clone())
                $(.or($crate::schema::$table::$rest.ilike(pattern.clone())))*,
        )
    }};

    (
        $repo:ident, $table:ident, $row:ident => $record:ty,
        search: [$($col:ident),* $(,)?]
        $(, cascaded_uploads: $child:ident . $fk:ident => $file:ident)? $(,)?
    ) => {
        pub struct $repo {
            pool: $crate::db::DbPool,
        }

        impl $repo {
            pub fn new(pool: $crate::db::DbPool) -> Self {
                Self { pool }
            }

            fn scoped<'a>(
                scope: $crate::domain::pagination::Scope,
                search: &str,
            ) -> $crate::schema::$table::BoxedQuery<'a, diesel::pg::Pg> {
                use diesel::prelude::*;
                use $crate::domain::pagination::Scope;
                use $crate::schema::$table;

                let mut query = $table::table.into_boxed();
                query = match scope {
                    Scope::All => query,
                    Scope::Active => query.filter($table::deleted_at.is_null()),
                    Scope::Trashed => query.filter($table::deleted_at.is_not_null()),
                };
                if !search.is_empty() {
                    query = soft_delete_repository!(@search query, $table, search, $($col),*);
                }
                query
            }
        }

        impl $crate::domain::ports::SoftDeleteRepository for $repo {
            type Record = $record;

            fn find_page(
                &self,
                scope: $crate::domain::pagination::Scope,
                query: &$crate::domain::pagination::PageQuery,
            ) -> Result<$crate::domain::pagination::ListResult<$record>, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let total: i64 = Self::scoped(scope, &query.search)
                    .count()
                    .get_result(&mut conn)?;
                let rows: Vec<$row> = Self::scoped(scope, &query.search)
                    .order($table::id.asc())
                    .limit(query.page_size)
                    .offset(query.offset())
                    .select($row::as_select())
                    .load(&mut conn)?;
                Ok($crate::domain::pagination::ListResult {
                    data: rows.into_iter().map(Into::into).collect(),
                    total,
                })
            }

            fn find_by_id(&self, id: i32) -> Result<Option<$record>, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let row = $table::table
                    .find(id)
                    .select($row::as_select())
                    .first(&mut conn)
                    .optional()?;
                Ok(row.map(Into::into))
            }

            fn trash(&self, id: i32) -> Result<Option<$record>, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let now = chrono::Utc::now();
                let row = diesel::update(
                    $table::table
                        .filter($table::id.eq(id))
                        .filter($table::deleted_at.is_null()),
                )
                .set(($table::deleted_at.eq(Some(now)), $table::updated_at.eq(now)))
                .returning($row::as_returning())
                .get_result(&mut conn)
                .optional()?;
                Ok(row.map(Into::into))
            }

            fn restore(&self, id: i32) -> Result<Option<$record>, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let row = diesel::update(
                    $table::table
                        .filter($table::id.eq(id))
                        .filter($table::deleted_at.is_not_null()),
                )
                .set((
                    $table::deleted_at.eq(None::<chrono::DateTime<chrono::Utc>>),
                    $table::updated_at.eq(chrono::Utc::now()),
                ))
                .returning($row::as_returning())
                .get_result(&mut conn)
                .optional()?;
                Ok(row.map(Into::into))
            }

            fn delete_permanent(&self, id: i32) -> Result<Option<$record>, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let row = diesel::delete(
                    $table::table
                        .filter($table::id.eq(id))
                        .filter($table::deleted_at.is_not_null()),
                )
                .returning($row::as_returning())
                .get_result(&mut conn)
                .optional()?;
                Ok(row.map(Into::into))
            }

            fn restore_all(&self) -> Result<usize, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let restored = diesel::update($table::table.filter($table::deleted_at.is_not_null()))
                    .set((
                        $table::deleted_at.eq(None::<chrono::DateTime<chrono::Utc>>),
                        $table::updated_at.eq(chrono::Utc::now()),
                    ))
                    .execute(&mut conn)?;
                Ok(restored)
            }

            fn delete_all_permanent(&self) -> Result<Vec<$record>, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let rows: Vec<$row> = diesel::delete($table::table.filter($table::deleted_at.is_not_null()))
                    .returning($row::as_returning())
                    .get_results(&mut conn)?;
                Ok(rows.into_iter().map(Into::into).collect())
            }

            $(
                fn cascaded_uploads(&self, id: i32) -> Result<Vec<String>, $crate::domain::errors::RepositoryError> {
                    use diesel::prelude::*;
                    use $crate::schema::$child;

                    let mut conn = self.pool.get()?;
                    let paths = $child::table
                        .filter($child::$fk.eq(id))
                        .select($child::$file)
                        .load::<String>(&mut conn)?;
                    Ok(paths)
                }

                fn trashed_cascaded_uploads(&self) -> Result<Vec<String>, $crate::domain::errors::RepositoryError> {
                    use diesel::prelude::*;
                    use $crate::schema::{$child, $table};

                    let mut conn = self.pool.get()?;
                    let trashed = $table::table
                        .filter($table::deleted_at.is_not_null())
                        .select($table::id);
                    let paths = $child::table
                        .filter($child::$fk.eq_any(trashed))
                        .select($child::$file)
                        .load::<String>(&mut conn)?;
                    Ok(paths)
                }
            )?
        }
    };

    (
        $repo:ident, $table:ident, $row:ident => $record:ty,
        search: [$($col:ident),* $(,)?],
        $(cascaded_uploads: $child:ident . $fk:ident => $file:ident,)?
        input: $input:ty => $values:ident $(,)?
    ) => {
        soft_delete_repository!(
            $repo, $table, $row => $record,
            search: [$($col),*]
            $(, cascaded_uploads: $child.$fk => $file)?
        );

        impl $crate::domain::ports::WritableRepository for $repo {
            type Input = $input;

            fn create(&self, input: &$input) -> Result<$record, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let row = diesel::insert_into($table::table)
                    .values(&$values::from(input))
                    .returning($row::as_returning())
                    .get_result(&mut conn)?;
                Ok(row.into())
            }

            fn update(&self, id: i32, input: &$input) -> Result<Option<$record>, $crate::domain::errors::RepositoryError> {
                use diesel::prelude::*;
                use $crate::schema::$table;

                let mut conn = self.pool.get()?;
                let row = diesel::update(
                    $table::table
                        .filter($table::id.eq(id))
                        .filter($table::deleted_at.is_null()),
                )
                .set(&$values::from(input))
                .returning($row::as_returning())
                .get_result(&mut conn)
                .optional()?;
                Ok(row.map(Into::into))
            }
        }
    };
}
