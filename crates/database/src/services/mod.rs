pub mod course;
pub mod course_description;
pub mod course_lecturer;
pub mod course_note;
pub mod course_offering_term;
pub mod lecturer;
pub mod term;

use sea_orm::QuerySelect;

/// Largest OFFSET or LIMIT the database drivers can bind, as they take a signed 64-bit value
const MAX_ROWS: u64 = i64::MAX as u64;

/// `skip`/`limit` paging shared by every list query
pub(crate) trait SkipLimit: QuerySelect {
    /// Skip `skip` rows and return at most `limit`, clamping both to [`MAX_ROWS`]
    fn skip_limit(self, skip: u64, limit: u64) -> Self {
        self.offset(skip.min(MAX_ROWS)).limit(limit.min(MAX_ROWS))
    }
}

impl<Q: QuerySelect> SkipLimit for Q {}
