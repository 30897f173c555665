use contracts::shared::format::group_thousands;

/// Размер ответа для журнала запросов, с разделителями тысяч
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_size(12408), "12,408 B");
/// assert_eq!(format_size(42), "42 B");
/// ```
pub fn format_size(bytes: usize) -> String {
    format!("{} B", group_thousands(bytes as u64, ','))
}
