use sea_orm::ActiveValue;

/// Primary key value for an upsert: absent and `0` let the database assign one
pub(crate) fn id_value(id: Option<i32>) -> ActiveValue<i32> {
    match id {
        Some(id) if id != 0 => ActiveValue::Set(id),
        _ => ActiveValue::NotSet,
    }
}

/// Id of an existing row when the DTO names one
pub(crate) fn requested_id(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id != 0)
}

/// Whether a delete removed exactly the number of rows requested
pub(crate) fn is_exact_count(rows_affected: u64, requested: usize) -> bool {
    rows_affected == requested as u64
}
