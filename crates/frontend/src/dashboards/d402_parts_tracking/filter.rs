/// Совпадение строки поиска с обозначением изделия.
///
/// Регистр не учитывается (обе строки приводятся к верхнему), ищется
/// подстрока. Пустая строка поиска совпадает со всем.
pub fn designation_matches(filter: &str, designation: &str) -> bool {
    designation.to_uppercase().contains(&filter.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring() {
        assert!(designation_matches("наб", "Наборка №3"));
        assert!(designation_matches("АСЦБ-0004", "асцб-000475"));
        assert!(!designation_matches("Рама", "Наборка №3"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(designation_matches("", "Наборка №3"));
        assert!(designation_matches("", ""));
    }

    #[test]
    fn test_no_match_hides_all() {
        let rows = ["Наборка №1", "Наборка №2", "Рама"];
        assert_eq!(rows.iter().filter(|d| designation_matches("xyz", d)).count(), 0);
        assert_eq!(rows.iter().filter(|d| designation_matches("", d)).count(), 3);
    }
}
