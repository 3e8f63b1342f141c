use super::field::{FieldKind, FieldName};

/// Returns `true` if `value` fails the required rule for `field`.
///
/// Text fields are invalid when absent or blank after trimming. The category
/// is invalid only when absent; any selected option counts as valid.
pub fn is_invalid(field: FieldName, value: Option<&str>) -> bool {
    match (field.kind(), value) {
        (_, None) => true,
        (FieldKind::Category, Some(_)) => false,
        (FieldKind::SingleLine | FieldKind::MultiLine, Some(text)) => text.trim().is_empty(),
    }
}
